use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tracing::error;

use crate::models::errors::ParseError;
use crate::models::{ParsedTransaction, TypeCatalog};
use crate::parser::schema;
use crate::types::{LineNumber, TypeCode};

/// Decodes one validated, non-trailer record into a typed transaction.
///
/// Pure conversion over the same schema table the validator reads; no
/// validation logic is duplicated here. The record is assumed to have passed
/// [`validate_record`][crate::parser::validate_record].
pub fn decode_record(
    record: &[char],
    line: LineNumber,
    catalog: &TypeCatalog,
) -> Result<ParsedTransaction, ParseError> {
    let type_code = decode_type(record, line)?;

    if !catalog.contains(type_code) {
        // Unreachable while validator and catalog agree on the populated
        // codes; if it fires, the two have drifted.
        error!("Type code [{type_code}] on line [{line}] passed validation but has no catalog entry");
        return Err(ParseError::unknown_type_code(line, type_code));
    }

    Ok(ParsedTransaction {
        type_code,
        occurred_at: decode_timestamp(record, line)?,
        amount: decode_amount(record, line)?,
        customer_id: schema::CUSTOMER_ID.extract(record),
        card_number: schema::CARD_NUMBER.extract(record),
        store_owner: schema::STORE_OWNER.extract(record).trim().to_string(),
        store_name: schema::STORE_NAME.extract(record).trim().to_string(),
    })
}

fn decode_type(record: &[char], line: LineNumber) -> Result<TypeCode, ParseError> {
    let raw = schema::TYPE.extract(record);

    raw.chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map(|digit| digit as TypeCode)
        .ok_or_else(|| ParseError::field(line, schema::TYPE.name, raw, "expected a digit 1-9"))
}

/// Combines the 8-digit YYYYMMDD date and 6-digit HHMMSS time fields into a
/// single naive timestamp. No timezone is attached.
fn decode_timestamp(record: &[char], line: LineNumber) -> Result<NaiveDateTime, ParseError> {
    let date_raw = schema::DATE.extract(record);
    let time_raw = schema::TIME.extract(record);

    let year = parse_digits(&date_raw[0..4], line, schema::DATE.name)?;
    let month = parse_digits(&date_raw[4..6], line, schema::DATE.name)?;
    let day = parse_digits(&date_raw[6..8], line, schema::DATE.name)?;

    // The per-field rule only bounds day to [1, 31], so a field-valid record
    // can still name a date like February 31st.
    let date = NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| ParseError::field(line, schema::DATE.name, date_raw, "not a valid calendar date"))?;

    let hour = parse_digits(&time_raw[0..2], line, schema::TIME.name)?;
    let minute = parse_digits(&time_raw[2..4], line, schema::TIME.name)?;
    let second = parse_digits(&time_raw[4..6], line, schema::TIME.name)?;

    let time = NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| ParseError::field(line, schema::TIME.name, time_raw, "not a valid time of day"))?;

    Ok(NaiveDateTime::new(date, time))
}

/// 10-digit integer cents to an exact decimal with two places.
fn decode_amount(record: &[char], line: LineNumber) -> Result<Decimal, ParseError> {
    let raw = schema::AMOUNT.extract(record);

    let cents: i64 = raw
        .parse()
        .map_err(|_| ParseError::field(line, schema::AMOUNT.name, raw, "expected 10 digits"))?;

    Ok(Decimal::new(cents, 2))
}

fn parse_digits(digits: &str, line: LineNumber, field: &'static str) -> Result<u32, ParseError> {
    digits
        .parse()
        .map_err(|_| ParseError::field(line, field, digits, "expected digits"))
}
