mod memory;
#[cfg(test)]
mod tests;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::errors::StorageError;
use crate::models::ParsedBatch;
use crate::types::{FileUploadId, StoreId};

pub use memory::{FileRecord, MemoryStorage};

/// Metadata accompanying one ingested file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub file_name: String,
}

impl FileMeta {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

/// Aggregate balance view for one merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    pub store_id: StoreId,
    pub owner_name: String,
    pub name: String,
    pub transaction_count: usize,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// Always `total_income - total_expense`.
    pub balance: Decimal,
}

/// Persistence collaborator the parsing core hands batches to.
///
/// `persist` must be all-or-nothing: a batch either commits whole or leaves
/// no trace, so the balance view never reflects a partial import.
pub trait Storage: Send + Sync + 'static {
    fn persist(&self, batch: ParsedBatch, meta: FileMeta) -> Result<FileUploadId, StorageError>;
    fn summarize(&self) -> Vec<StoreSummary>;
}
