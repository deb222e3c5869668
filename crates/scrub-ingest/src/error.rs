use std::path::PathBuf;

use thiserror::Error;

/// Delimiter sniffing failure. Always recoverable: the loader falls
/// through to its fixed delimiter list.
#[derive(Debug, Error)]
pub enum SniffError {
    #[error("sample contains no recurring delimiter candidate")]
    NoCandidate,
    #[error("sniffed delimiter {0:?} is whitespace or a line break")]
    Degenerate(char),
}

/// A single parse attempt failed. Recoverable: the loader tries the next
/// candidate delimiter.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("file has no header row")]
    Empty,
    #[error(transparent)]
    Malformed(#[from] csv::Error),
}

/// Fatal ingestion failure: no strategy produced a usable table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no delimiter strategy produced a usable table for {path}")]
    NoUsableDelimiter { path: PathBuf },
}
