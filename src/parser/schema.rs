//! Positional layout of a CNAB-80 record.
//!
//! The same field table drives both the per-record validator and the field
//! decoder, so the offsets exist in exactly one place. Offsets and lengths
//! are measured in characters, not bytes: the free-text merchant fields may
//! carry accented characters and the record is defined as 80 characters.

/// Every record in a valid file is exactly this many characters long.
pub const RECORD_LENGTH: usize = 80;

/// Type digit marking an end-of-file trailer record.
pub const TRAILER_TYPE: char = '9';

/// Validation/decoding rule attached to a field position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single digit 1-9.
    TypeCode,
    /// 8 digits, YYYYMMDD, year in [1900, 2100].
    Date,
    /// 10 digits, integer cents.
    Amount,
    /// Fixed run of digits (CPF).
    Digits,
    /// Digits or `*` mask characters.
    Card,
    /// 6 digits, HHMMSS.
    Time,
    /// Free text, non-empty after trimming.
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub len: usize,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(name: &'static str, offset: usize, len: usize, kind: FieldKind) -> Self {
        Self {
            name,
            offset,
            len,
            kind,
        }
    }

    /// Extracts this field's raw characters from a full-length record.
    pub fn extract(&self, record: &[char]) -> String {
        record[self.offset..self.offset + self.len].iter().collect()
    }
}

pub const TYPE: FieldSpec = FieldSpec::new("type", 0, 1, FieldKind::TypeCode);
pub const DATE: FieldSpec = FieldSpec::new("date", 1, 8, FieldKind::Date);
pub const AMOUNT: FieldSpec = FieldSpec::new("amount", 9, 10, FieldKind::Amount);
pub const CUSTOMER_ID: FieldSpec = FieldSpec::new("customer id", 19, 11, FieldKind::Digits);
pub const CARD_NUMBER: FieldSpec = FieldSpec::new("card number", 30, 12, FieldKind::Card);
pub const TIME: FieldSpec = FieldSpec::new("time", 42, 6, FieldKind::Time);
pub const STORE_OWNER: FieldSpec = FieldSpec::new("store owner", 48, 14, FieldKind::Text);
pub const STORE_NAME: FieldSpec = FieldSpec::new("store name", 62, 18, FieldKind::Text);

/// All fields in record order; the validator walks this table front to back.
pub const FIELDS: [FieldSpec; 8] = [
    TYPE,
    DATE,
    AMOUNT,
    CUSTOMER_ID,
    CARD_NUMBER,
    TIME,
    STORE_OWNER,
    STORE_NAME,
];
