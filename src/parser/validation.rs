use crate::models::errors::ParseError;
use crate::parser::schema::{self, FieldKind, FieldSpec};
use crate::types::LineNumber;

/// Validates every field of one non-trailer record against the schema table.
///
/// Fields are checked in record order and the first violation short-circuits
/// the rest of the line, matching the fail-fast batch policy. The caller
/// guarantees the record is exactly [`schema::RECORD_LENGTH`] characters.
pub fn validate_record(record: &[char], line: LineNumber) -> Result<(), ParseError> {
    for field in &schema::FIELDS {
        check_field(field, record, line)?;
    }

    Ok(())
}

fn check_field(field: &FieldSpec, record: &[char], line: LineNumber) -> Result<(), ParseError> {
    let raw = field.extract(record);

    match field.kind {
        FieldKind::TypeCode => {
            let digit = raw.chars().next().unwrap_or(' ');

            if !('1'..='9').contains(&digit) {
                return Err(ParseError::field(line, field.name, raw, "expected a digit 1-9"));
            }
        }
        FieldKind::Date => {
            if !is_all_digits(&raw) {
                return Err(ParseError::field(line, field.name, raw, "expected 8 digits (YYYYMMDD)"));
            }

            let year = digits_value(&raw[0..4]);
            let month = digits_value(&raw[4..6]);
            let day = digits_value(&raw[6..8]);

            if !(1900..=2100).contains(&year) {
                return Err(ParseError::field(line, field.name, raw, "year out of range [1900, 2100]"));
            }

            if !(1..=12).contains(&month) {
                return Err(ParseError::field(line, field.name, raw, "month out of range [1, 12]"));
            }

            if !(1..=31).contains(&day) {
                return Err(ParseError::field(line, field.name, raw, "day out of range [1, 31]"));
            }
        }
        FieldKind::Amount | FieldKind::Digits => {
            if !is_all_digits(&raw) {
                return Err(ParseError::field(
                    line,
                    field.name,
                    raw,
                    format!("expected {} digits", field.len),
                ));
            }
        }
        FieldKind::Card => {
            if !raw.chars().all(|c| c.is_ascii_digit() || c == '*') {
                return Err(ParseError::field(line, field.name, raw, "expected digits or '*'"));
            }
        }
        FieldKind::Time => {
            if !is_all_digits(&raw) {
                return Err(ParseError::field(line, field.name, raw, "expected 6 digits (HHMMSS)"));
            }

            let hour = digits_value(&raw[0..2]);
            let minute = digits_value(&raw[2..4]);
            let second = digits_value(&raw[4..6]);

            if hour > 23 {
                return Err(ParseError::field(line, field.name, raw, "hour out of range [0, 23]"));
            }

            if minute > 59 {
                return Err(ParseError::field(line, field.name, raw, "minute out of range [0, 59]"));
            }

            if second > 59 {
                return Err(ParseError::field(line, field.name, raw, "second out of range [0, 59]"));
            }
        }
        FieldKind::Text => {
            if raw.trim().is_empty() {
                return Err(ParseError::field(line, field.name, raw, "must not be blank"));
            }
        }
    }

    Ok(())
}

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Numeric value of an already digit-checked slice.
fn digits_value(digits: &str) -> u32 {
    digits
        .chars()
        .fold(0, |acc, c| acc * 10 + c.to_digit(10).unwrap_or(0))
}
