use std::sync::Arc;

use anyhow::Context;
use tokio::task::spawn_blocking;
use tracing::{error, info};

use crate::models::TypeCatalog;
use crate::parser;
use crate::storage::{FileMeta, Storage};
use crate::types::FileUploadId;

/// Drives one file through read -> parse -> persist.
///
/// The parsing core is pure CPU over an in-memory buffer, so reading and
/// parsing run on a blocking task off the async runtime. Independent files
/// may be ingested concurrently from separate tasks with no coordination:
/// the core owns no shared state and the storage commit is atomic per batch.
pub struct IngestEngine<S: Storage> {
    storage: Arc<S>,
    catalog: Arc<TypeCatalog>,
}

impl<S: Storage> IngestEngine<S> {
    pub fn new(storage: Arc<S>, catalog: Arc<TypeCatalog>) -> Self {
        Self { storage, catalog }
    }

    /// Ingests a single CNAB-80 file, returning its upload id.
    ///
    /// Fail-fast end to end: any structural or field error rejects the whole
    /// file and nothing reaches storage. Parsing is deterministic over the
    /// same bytes, so there are no retries here; those belong to the
    /// transport layer above.
    pub async fn run(&self, path: &str) -> anyhow::Result<FileUploadId> {
        let owned_path = path.to_string();
        let catalog = self.catalog.clone();

        let batch = spawn_blocking(move || {
            let bytes = std::fs::read(&owned_path)
                .with_context(|| format!("Failed to read input file [{owned_path}]"))?;

            parser::parse(&bytes, &catalog)
                .with_context(|| format!("Failed to parse file [{owned_path}]"))
        })
        .await?
        .inspect_err(|cause| error!("Ingestion of [{path}] rejected: {cause:#}"))?;

        info!("Parsed [{}] transactions from [{path}]", batch.len());

        let file_id = self
            .storage
            .persist(batch, FileMeta::new(path))
            .with_context(|| format!("Failed to persist batch for [{path}]"))?;

        Ok(file_id)
    }
}
