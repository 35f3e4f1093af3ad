//! Ingestion engine for fixed-width CNAB-80 banking transaction files.
//!
//! The parsing core is pure and synchronous: raw file bytes go through a
//! file-level structural validator, then a per-record semantic validator and
//! field decoder driven by a single positional schema, producing an ordered
//! [`ParsedBatch`][models::ParsedBatch] or a typed
//! [`ParseError`][models::errors::ParseError]. Batches are handed whole to a
//! [`Storage`][storage::Storage] collaborator that commits atomically and
//! exposes per-merchant balance summaries. A thin async
//! [`IngestEngine`][engine::IngestEngine] wires files to the core.

pub mod engine;
pub mod models;
pub mod parser;
pub mod storage;
pub mod types;
