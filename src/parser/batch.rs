use crate::models::errors::ParseError;
use crate::models::{ParsedBatch, TypeCatalog};
use crate::parser::decode::decode_record;
use crate::parser::schema::TRAILER_TYPE;
use crate::parser::structure::{check_structure, records};
use crate::parser::validation::validate_record;

/// Parses a full CNAB-80 file into an ordered transaction batch.
///
/// Runs the same structural checks as
/// [`validate_format`][crate::parser::validate_format], then walks
/// the lines in file order: trailer records (type 9) are skipped without
/// being validated or decoded, every other record goes through the semantic
/// validator and the field decoder. The first failure aborts the whole
/// batch; no partial batch is ever returned, so a rejected file leaves the
/// downstream balance view untouched.
pub fn parse(bytes: &[u8], catalog: &TypeCatalog) -> Result<ParsedBatch, ParseError> {
    let content = std::str::from_utf8(bytes)?;
    let lines = records(content);

    check_structure(&lines)?;

    let mut batch = ParsedBatch::with_capacity(lines.len());

    for (line_number, line) in lines {
        if line.starts_with(TRAILER_TYPE) {
            continue;
        }

        let record: Vec<char> = line.chars().collect();

        validate_record(&record, line_number)?;
        batch.push(decode_record(&record, line_number, catalog)?);
    }

    Ok(batch)
}
