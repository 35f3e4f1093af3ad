use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::TypeCode;

/// Represents a single decoded CNAB-80 record.
///
/// This struct captures one transaction after the record passed structural
/// and per-field validation. The `customer_id` and `card_number` fields stay
/// raw strings: leading zeros and mask characters matter and no arithmetic
/// is ever performed on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTransaction {
    /// The CNAB type code (1-9) identifying the transaction's nature.
    pub type_code: TypeCode,
    /// When the transaction occurred. Naive local time, no timezone.
    pub occurred_at: NaiveDateTime,
    /// The transaction amount, always non-negative. Sign is applied at
    /// aggregation time from the type catalog, never stored here.
    pub amount: Decimal,
    /// The customer CPF, 11 digits.
    pub customer_id: String,
    /// The card number, 12 characters of digits or `*` mask characters.
    pub card_number: String,
    /// The merchant representative name, trimmed.
    pub store_owner: String,
    /// The merchant name, trimmed.
    pub store_name: String,
}

/// An ordered batch of transactions decoded from one file in one parse call.
///
/// Insertion order equals file line order (trailer lines excluded); later
/// consumers may sort by timestamp but the original order is preserved here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBatch {
    transactions: Vec<ParsedTransaction>,
}

impl ParsedBatch {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transactions: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, transaction: ParsedTransaction) {
        self.transactions.push(transaction);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParsedTransaction> {
        self.transactions.iter()
    }

    pub fn transactions(&self) -> &[ParsedTransaction] {
        &self.transactions
    }
}

impl IntoIterator for ParsedBatch {
    type Item = ParsedTransaction;
    type IntoIter = std::vec::IntoIter<ParsedTransaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParsedBatch {
    type Item = &'a ParsedTransaction;
    type IntoIter = std::slice::Iter<'a, ParsedTransaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

impl FromIterator<ParsedTransaction> for ParsedBatch {
    fn from_iter<I: IntoIterator<Item = ParsedTransaction>>(iter: I) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}
