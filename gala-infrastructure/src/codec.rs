// Record codec module
//
// Line-oriented encoding shared by every flat file: one record per line,
// fields comma-separated, list-valued fields semicolon-separated with
// colon sub-fields for allocation pairs. Fields are positional and
// unescaped; input validation keeps delimiters out of text fields.

pub mod records;

pub use records::*;

use std::collections::BTreeMap;

use thiserror::Error;

/// Why a line could not be decoded into a record.
///
/// The persistence gateway reports these per line and skips the line
/// rather than failing the whole load.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("field '{field}' is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("field '{field}' has unknown ordinal {ordinal}")]
    InvalidOrdinal { field: &'static str, ordinal: u32 },

    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("invalid time '{value}', expected HH:MM")]
    InvalidTime { value: String },

    #[error("malformed allocation entry '{entry}', expected itemId:quantity")]
    MalformedAllocation { entry: String },
}

/// Splits a line into exactly `expected` comma-separated fields. The
/// final field absorbs the rest of the line, so a trailing free-text or
/// list field may contain anything up to the line break.
pub(crate) fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, DecodeError> {
    let fields: Vec<&str> = line.splitn(expected, ',').collect();
    if fields.len() < expected {
        return Err(DecodeError::TooFewFields {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

pub(crate) fn parse_number(field: &'static str, value: &str) -> Result<u32, DecodeError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| DecodeError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Parses a semicolon-separated id list. Empty segments (trailing
/// semicolons, doubled separators) are ignored; an empty field decodes
/// to an empty list.
pub(crate) fn parse_id_list(field: &'static str, raw: &str) -> Result<Vec<u32>, DecodeError> {
    raw.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| parse_number(field, segment))
        .collect()
}

/// Parses an allocation list of `itemId:quantity` pairs.
pub(crate) fn parse_allocations(raw: &str) -> Result<BTreeMap<u32, u32>, DecodeError> {
    let mut allocations = BTreeMap::new();
    for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let (item, quantity) = entry
            .split_once(':')
            .ok_or_else(|| DecodeError::MalformedAllocation {
                entry: entry.to_string(),
            })?;
        allocations.insert(
            parse_number("allocation item id", item)?,
            parse_number("allocation quantity", quantity)?,
        );
    }
    Ok(allocations)
}

pub(crate) fn join_id_list(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

pub(crate) fn join_allocations(allocations: &BTreeMap<u32, u32>) -> String {
    allocations
        .iter()
        .map(|(item, quantity)| format!("{item}:{quantity}"))
        .collect::<Vec<_>>()
        .join(";")
}
