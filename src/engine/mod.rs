mod ingest;

pub use ingest::IngestEngine;
