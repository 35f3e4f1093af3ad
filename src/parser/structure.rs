use std::collections::BTreeSet;
use std::fmt;
use std::fmt::{Display, Formatter};

use tracing::info;

use crate::models::errors::ParseError;
use crate::parser::schema::{RECORD_LENGTH, TRAILER_TYPE};
use crate::types::LineNumber;

/// File format recognized by the structural validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Cnab80,
}

impl Display for FileFormat {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cnab80 => write!(formatter, "CNAB 80"),
        }
    }
}

/// Splits file content into non-blank records, keeping 1-based line numbers
/// from the original file so diagnostics stay addressable.
///
/// `str::lines` already strips a trailing `\r`, which tolerates files with
/// Windows line endings.
pub(crate) fn records(content: &str) -> Vec<(LineNumber, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect()
}

/// Runs the file-level structural checks shared by [`validate_format`] and
/// the batch parser. Each check short-circuits; no partial results.
pub(crate) fn check_structure(lines: &[(LineNumber, &str)]) -> Result<(), ParseError> {
    if lines.is_empty() {
        return Err(ParseError::EmptyFile);
    }

    let lengths: BTreeSet<usize> = lines
        .iter()
        .map(|(_, line)| line.chars().count())
        .collect();

    if lengths.len() > 1 {
        // Distinct lengths are reported for diagnostics; this catches mixed
        // line endings and truncated records.
        return Err(ParseError::inconsistent_lengths(lengths.into_iter().collect()));
    }

    let length = lengths.into_iter().next().unwrap_or(0);

    if length != RECORD_LENGTH {
        return Err(ParseError::invalid_length(length, RECORD_LENGTH));
    }

    for (line_number, line) in lines {
        let first = line.chars().next().unwrap_or(' ');

        if !first.is_ascii_digit() || first == '0' {
            return Err(ParseError::invalid_type(*line_number, first));
        }
    }

    if let Some((_, last)) = lines.last() {
        if !last.starts_with(TRAILER_TYPE) {
            // Many real files omit the trailer; accepted without one.
            info!("No trailer record found; file accepted without one");
        }
    }

    Ok(())
}

/// Validates the structural integrity of a CNAB-80 file without decoding it.
///
/// Checks, in order, each a hard fail: UTF-8 content, at least one non-blank
/// line, a single record length across the file, that length being exactly
/// 80 characters, and a leading type digit 1-9 on every line. A missing
/// trailer is logged but does not fail the file.
pub fn validate_format(bytes: &[u8]) -> Result<FileFormat, ParseError> {
    let content = std::str::from_utf8(bytes)?;
    let lines = records(content);

    check_structure(&lines)?;

    Ok(FileFormat::Cnab80)
}
