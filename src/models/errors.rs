use std::str::Utf8Error;

use thiserror::Error;

use crate::types::{LineNumber, TypeCode};

/// Errors raised while validating or parsing a CNAB-80 file.
///
/// The structural variants reject the file as a whole; the field variant
/// carries the 1-based line number, the field name, and the raw offending
/// value. Any error aborts the entire batch — there is no per-record
/// recovery, so a failed parse never produces partial results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("File is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),
    #[error("File is empty")]
    EmptyFile,
    #[error("Inconsistent record lengths found: {lengths:?}")]
    InconsistentRecordLengths { lengths: Vec<usize> },
    #[error("Invalid record length [{found}], expected [{expected}]")]
    InvalidRecordLength { found: usize, expected: usize },
    #[error("Invalid record type [{found}] on line [{line}]")]
    InvalidRecordType { line: LineNumber, found: char },
    #[error("Invalid value [{value}] for field [{field}] on line [{line}]: {reason}")]
    FieldValidation {
        line: LineNumber,
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("Unknown transaction type code [{code}] on line [{line}]")]
    UnknownTypeCode { line: LineNumber, code: TypeCode },
}

impl ParseError {
    pub fn inconsistent_lengths(lengths: Vec<usize>) -> Self {
        Self::InconsistentRecordLengths { lengths }
    }

    pub fn invalid_length(found: usize, expected: usize) -> Self {
        Self::InvalidRecordLength { found, expected }
    }

    pub fn invalid_type(line: LineNumber, found: char) -> Self {
        Self::InvalidRecordType { line, found }
    }

    pub fn field(
        line: LineNumber,
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::FieldValidation {
            line,
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_type_code(line: LineNumber, code: TypeCode) -> Self {
        Self::UnknownTypeCode { line, code }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown transaction type code [{code}]")]
    UnknownTypeCode { code: TypeCode },
}

/// Errors raised by the storage collaborator while committing a batch.
///
/// `persist` computes every aggregate before touching shared state, so any
/// error here means nothing was committed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Batch rejected before commit: {0}")]
    Catalog(#[from] CatalogError),
}
