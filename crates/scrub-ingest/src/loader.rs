//! Table loading with an ordered fallback protocol.
//!
//! 1. Parse with the sniffed delimiter, if any.
//! 2. Try the fixed priority list: tab, semicolon, pipe, comma.
//! 3. Infer a separator from scratch over the whole file, scoring every
//!    punctuation byte it contains, and accept whatever parses, even a
//!    single column.
//!
//! For steps 1 and 2 a parse that collapses to one column is treated as a
//! failure signal: a real multi-field file should not do that.

use std::fs;
use std::path::Path;

use tracing::debug;

use scrub_model::{Cell, Column, ColumnKind, Table};

use crate::error::{LoadError, ParseError};
use crate::sniff::{SAMPLE_BYTES, sniff_any_delimiter};

/// Delimiters tried in order when sniffing fails or disagrees with the file.
pub const FALLBACK_DELIMITERS: &[u8] = b"\t;|,";

/// A successfully loaded table plus the delimiter that produced it.
#[derive(Debug)]
pub struct Loaded {
    pub table: Table,
    pub delimiter: u8,
}

/// Read the bounded sniffing sample, dropping invalid bytes.
pub fn read_sample(path: &Path) -> Result<String, LoadError> {
    let raw = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let end = raw.len().min(SAMPLE_BYTES);
    Ok(decode_dropping_invalid(&raw[..end]))
}

/// Load the full file as a table, given an optional sniffed delimiter.
///
/// # Errors
///
/// `LoadError::Io` when the file cannot be read, `LoadError::NoUsableDelimiter`
/// when every strategy fails. Per-delimiter parse failures are logged and
/// recovered internally.
pub fn load_table(path: &Path, detected: Option<u8>) -> Result<Loaded, LoadError> {
    let raw = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = decode_dropping_invalid(&raw);

    if let Some(delimiter) = detected {
        match parse_with_delimiter(&content, delimiter) {
            Ok(table) if table.width() > 1 => {
                return Ok(Loaded { table, delimiter });
            }
            Ok(_) => debug!(
                delimiter = %(delimiter as char),
                "sniffed delimiter yielded a single column; falling back"
            ),
            Err(error) => debug!(%error, "sniffed delimiter failed to parse; falling back"),
        }
    }

    for &delimiter in FALLBACK_DELIMITERS {
        if Some(delimiter) == detected {
            continue;
        }
        match parse_with_delimiter(&content, delimiter) {
            Ok(table) if table.width() > 1 => {
                return Ok(Loaded { table, delimiter });
            }
            Ok(_) => {}
            Err(error) => debug!(%error, "fallback delimiter failed to parse"),
        }
    }

    // Last resort: exhaustive inference over every punctuation byte in the
    // file, accepting even a single-column parse.
    if let Ok(delimiter) = sniff_any_delimiter(&content) {
        if let Ok(table) = parse_with_delimiter(&content, delimiter) {
            debug!(
                delimiter = %(delimiter as char).escape_default(),
                "last-resort inference found a separator"
            );
            return Ok(Loaded { table, delimiter });
        }
    }

    Err(LoadError::NoUsableDelimiter {
        path: path.to_path_buf(),
    })
}

/// Parse decoded content with one concrete delimiter.
fn parse_with_delimiter(content: &str, delimiter: u8) -> Result<Table, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(ParseError::Empty);
    }
    let names: Vec<String> = headers
        .iter()
        .map(|h| h.trim_matches('\u{feff}').to_string())
        .collect();

    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); names.len()];
    for record in reader.records() {
        let record = record?;
        for (idx, column) in cells.iter_mut().enumerate() {
            let value = record.get(idx).unwrap_or("");
            if value.trim().is_empty() {
                column.push(Cell::Missing);
            } else {
                column.push(Cell::Text(value.to_string()));
            }
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| typed_column(name, cells))
        .collect();
    Ok(Table::new(columns))
}

/// Promote a freshly parsed column to numeric when every present value is a
/// plain number. Mixed or token-laden columns stay text; the coercion stage
/// revisits them after sanitization.
fn typed_column(name: String, cells: Vec<Cell>) -> Column {
    let mut any_present = false;
    for cell in &cells {
        match cell {
            Cell::Missing => {}
            Cell::Text(value) => {
                if parse_plain_number(value).is_none() {
                    return Column::text(name, cells);
                }
                any_present = true;
            }
            _ => return Column::text(name, cells),
        }
    }
    if !any_present {
        return Column::text(name, cells);
    }
    let numeric = cells
        .into_iter()
        .map(|cell| match cell {
            Cell::Text(value) => parse_plain_number(&value).map_or(Cell::Missing, Cell::Number),
            other => other,
        })
        .collect();
    Column::new(name, ColumnKind::Number, numeric)
}

/// Strict numeric parse for load-time typing. Rejects the textual "nan" and
/// "inf" spellings that `f64::from_str` would otherwise accept.
fn parse_plain_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Decode bytes as UTF-8, dropping invalid sequences entirely.
fn decode_dropping_invalid(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(error) => {
                let (valid, rest) = bytes.split_at(error.valid_up_to());
                if let Ok(prefix) = std::str::from_utf8(valid) {
                    out.push_str(prefix);
                }
                let skip = error.error_len().unwrap_or(rest.len()).max(1);
                if skip >= rest.len() {
                    return out;
                }
                bytes = &rest[skip..];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_content() {
        let table = parse_with_delimiter("a,b\n1,x\n2,y\n", b',').unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn all_numeric_column_is_typed_at_load() {
        let table = parse_with_delimiter("id,name\n1,Alice\n2,Bob\n", b',').unwrap();
        assert_eq!(table.column("id").map(|c| c.kind), Some(ColumnKind::Number));
        assert_eq!(
            table.column("name").map(|c| c.kind),
            Some(ColumnKind::Text)
        );
    }

    #[test]
    fn nan_token_keeps_column_textual() {
        let table = parse_with_delimiter("v\nnan\n1\n", b',').unwrap();
        assert_eq!(table.column("v").map(|c| c.kind), Some(ColumnKind::Text));
    }

    #[test]
    fn blank_cells_load_as_missing() {
        let table = parse_with_delimiter("a,b\n1,\n2, \n", b',').unwrap();
        assert_eq!(table.column("b").map(|c| c.missing_count()), Some(2));
    }

    #[test]
    fn empty_header_row_is_a_parse_error() {
        assert!(matches!(
            parse_with_delimiter("", b','),
            Err(ParseError::Empty)
        ));
    }

    #[test]
    fn invalid_bytes_are_dropped() {
        let decoded = decode_dropping_invalid(b"a,\xffb\n1,2\n");
        assert_eq!(decoded, "a,b\n1,2\n");
    }

    #[test]
    fn decode_handles_trailing_invalid_byte() {
        assert_eq!(decode_dropping_invalid(b"ab\xff"), "ab");
    }
}
