use super::{FileMeta, MemoryStorage, Storage};

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::errors::StorageError;
use crate::models::{ParsedBatch, ParsedTransaction, TypeCatalog};

fn fixture_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 3, 1)
        .and_then(|date| date.and_hms_opt(15, 34, 53))
        .expect("fixture timestamp is valid")
}

fn create_transaction(type_code: u8, cents: i64, owner: &str, name: &str) -> ParsedTransaction {
    ParsedTransaction {
        type_code,
        occurred_at: fixture_timestamp(),
        amount: Decimal::new(cents, 2),
        customer_id: "09620676017".to_string(),
        card_number: "4753****3153".to_string(),
        store_owner: owner.to_string(),
        store_name: name.to_string(),
    }
}

fn create_storage() -> MemoryStorage {
    MemoryStorage::new(Arc::new(TypeCatalog::standard()))
}

fn sample_batch() -> ParsedBatch {
    [
        create_transaction(1, 14200, "MARCOS PEREIRA", "MERCADO DA AVENIDA"),
        create_transaction(2, 10000, "MARCOS PEREIRA", "MERCADO DA AVENIDA"),
        create_transaction(4, 50000, "JOSE COSTA", "PADARIA TRES IRMAO"),
        create_transaction(3, 20000, "JOSE COSTA", "PADARIA TRES IRMAO"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_persist_aggregates_income_and_expense_per_store() -> Result<()> {
    let storage = create_storage();

    let file_id = storage.persist(sample_batch(), FileMeta::new("sample.cnab"))?;
    let summaries = storage.summarize();

    assert_eq!(file_id, 1);
    assert_eq!(summaries.len(), 2);

    let mercado = &summaries[0];

    assert_eq!(mercado.store_id, 1);
    assert_eq!(mercado.owner_name, "MARCOS PEREIRA");
    assert_eq!(mercado.name, "MERCADO DA AVENIDA");
    assert_eq!(mercado.transaction_count, 2);
    assert_eq!(mercado.total_income.to_string(), "142.00");
    assert_eq!(mercado.total_expense.to_string(), "100.00");
    assert_eq!(mercado.balance.to_string(), "42.00");

    let padaria = &summaries[1];

    assert_eq!(padaria.store_id, 2);
    assert_eq!(padaria.transaction_count, 2);
    assert_eq!(padaria.balance.to_string(), "300.00");

    Ok(())
}

#[test]
fn test_persist_accumulates_across_file_uploads() -> Result<()> {
    let storage = create_storage();

    let first = storage.persist(sample_batch(), FileMeta::new("first.cnab"))?;
    let second = storage.persist(sample_batch(), FileMeta::new("second.cnab"))?;

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(storage.file_count(), 2);

    let summaries = storage.summarize();

    // Store ids are stable across uploads of the same merchants.
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].transaction_count, 4);
    assert_eq!(summaries[0].balance.to_string(), "84.00");

    let record = storage.file(second).ok_or_else(|| anyhow!("file record missing"))?;

    assert_eq!(record.meta.file_name, "second.cnab");
    assert_eq!(record.transaction_count, 4);

    Ok(())
}

#[test]
fn test_persist_rejects_unknown_type_code_with_nothing_committed() {
    let storage = create_storage();

    let batch: ParsedBatch = [
        create_transaction(1, 14200, "MARCOS PEREIRA", "MERCADO DA AVENIDA"),
        // 9 has no entry in the standard catalog.
        create_transaction(9, 10000, "MARCOS PEREIRA", "MERCADO DA AVENIDA"),
    ]
    .into_iter()
    .collect();

    let result = storage.persist(batch, FileMeta::new("bad.cnab"));

    assert!(matches!(result, Err(StorageError::Catalog(_))));
    assert!(storage.summarize().is_empty());
    assert_eq!(storage.file_count(), 0);
}

#[test]
fn test_persist_accepts_rent_code_with_rent_trailer_catalog() -> Result<()> {
    let storage = MemoryStorage::new(Arc::new(TypeCatalog::with_rent_trailer()));

    let batch: ParsedBatch = [create_transaction(9, 10000, "JOSE COSTA", "PADARIA TRES IRMAO")]
        .into_iter()
        .collect();

    storage.persist(batch, FileMeta::new("rent.cnab"))?;

    let summaries = storage.summarize();

    assert_eq!(summaries[0].total_expense.to_string(), "100.00");
    assert_eq!(summaries[0].balance.to_string(), "-100.00");

    Ok(())
}

#[test]
fn test_persist_handles_empty_batch() -> Result<()> {
    let storage = create_storage();

    let file_id = storage.persist(ParsedBatch::default(), FileMeta::new("trailer-only.cnab"))?;

    assert_eq!(file_id, 1);
    assert!(storage.summarize().is_empty());
    assert_eq!(storage.file_count(), 1);

    Ok(())
}

#[test]
fn test_summarize_orders_stores_by_first_appearance() -> Result<()> {
    let storage = create_storage();

    let batch: ParsedBatch = [
        create_transaction(1, 100, "C", "STORE C"),
        create_transaction(1, 100, "A", "STORE A"),
        create_transaction(1, 100, "B", "STORE B"),
    ]
    .into_iter()
    .collect();

    storage.persist(batch, FileMeta::new("order.cnab"))?;

    let names: Vec<String> = storage
        .summarize()
        .into_iter()
        .map(|summary| summary.name)
        .collect();

    assert_eq!(names, vec!["STORE C", "STORE A", "STORE B"]);

    Ok(())
}
