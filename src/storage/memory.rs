use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::errors::StorageError;
use crate::models::{Nature, ParsedBatch, TypeCatalog};
use crate::storage::{FileMeta, Storage, StoreSummary};
use crate::types::{FileUploadId, StoreId};

#[derive(Debug, Clone)]
struct StoreRecord {
    store_id: StoreId,
    owner_name: String,
    name: String,
    transaction_count: usize,
    total_income: Decimal,
    total_expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub meta: FileMeta,
    pub transaction_count: usize,
}

/// Staged per-store aggregate, applied only once the whole batch resolved.
#[derive(Debug, Default)]
struct StoreDelta {
    transaction_count: usize,
    income: Decimal,
    expense: Decimal,
}

/// In-memory storage keyed by merchant identity (owner, name).
///
/// Store and file-upload ids are assigned monotonically on first sight. The
/// catalog is injected at construction so aggregation resolves natures from
/// the same table the decoder used.
pub struct MemoryStorage {
    catalog: Arc<TypeCatalog>,
    stores: DashMap<(String, String), StoreRecord>,
    files: DashMap<FileUploadId, FileRecord>,
    next_store_id: AtomicU64,
    next_file_id: AtomicU64,
}

impl MemoryStorage {
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self {
            catalog,
            stores: DashMap::new(),
            files: DashMap::new(),
            next_store_id: AtomicU64::new(1),
            next_file_id: AtomicU64::new(1),
        }
    }

    pub fn file(&self, file_id: FileUploadId) -> Option<FileRecord> {
        self.files.get(&file_id).map(|entry| entry.value().clone())
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl Storage for MemoryStorage {
    fn persist(&self, batch: ParsedBatch, meta: FileMeta) -> Result<FileUploadId, StorageError> {
        let transaction_count = batch.len();

        // Stage every aggregate before touching shared state; an unknown
        // type code rejects the batch with nothing committed.
        let mut deltas: Vec<((String, String), StoreDelta)> = Vec::new();

        for transaction in &batch {
            let nature = self.catalog.nature_of(transaction.type_code)?;
            let key = (transaction.store_owner.clone(), transaction.store_name.clone());

            let index = match deltas.iter().position(|(existing, _)| *existing == key) {
                Some(index) => index,
                None => {
                    deltas.push((key, StoreDelta::default()));
                    deltas.len() - 1
                }
            };

            let delta = &mut deltas[index].1;

            delta.transaction_count += 1;

            match nature {
                Nature::Income => delta.income += transaction.amount,
                Nature::Expense => delta.expense += transaction.amount,
            }
        }

        for ((owner_name, name), delta) in deltas {
            let mut record = self
                .stores
                .entry((owner_name.clone(), name.clone()))
                .or_insert_with(|| StoreRecord {
                    store_id: self.next_store_id.fetch_add(1, Ordering::Relaxed),
                    owner_name,
                    name,
                    transaction_count: 0,
                    total_income: Decimal::ZERO,
                    total_expense: Decimal::ZERO,
                });

            record.transaction_count += delta.transaction_count;
            record.total_income += delta.income;
            record.total_expense += delta.expense;
        }

        let file_id = self.next_file_id.fetch_add(1, Ordering::Relaxed);

        self.files.insert(
            file_id,
            FileRecord {
                meta,
                transaction_count,
            },
        );

        debug!("Committed batch of [{transaction_count}] transactions as file upload [{file_id}]");

        Ok(file_id)
    }

    fn summarize(&self) -> Vec<StoreSummary> {
        let mut summaries: Vec<StoreSummary> = self
            .stores
            .iter()
            .map(|entry| {
                let record = entry.value();

                StoreSummary {
                    store_id: record.store_id,
                    owner_name: record.owner_name.clone(),
                    name: record.name.clone(),
                    transaction_count: record.transaction_count,
                    total_income: record.total_income,
                    total_expense: record.total_expense,
                    balance: record.total_income - record.total_expense,
                }
            })
            .collect();

        summaries.sort_by_key(|summary| summary.store_id);
        summaries
    }
}
