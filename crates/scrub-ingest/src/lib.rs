#![deny(unsafe_code)]

//! File ingestion: delimiter sniffing, fallback loading, CSV output.

mod error;
mod loader;
mod sniff;
mod writer;

pub use error::{LoadError, ParseError, SniffError};
pub use loader::{FALLBACK_DELIMITERS, Loaded, load_table, read_sample};
pub use sniff::{SAMPLE_BYTES, sniff_any_delimiter, sniff_delimiter};
pub use writer::write_csv;
