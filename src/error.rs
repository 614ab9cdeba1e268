//! Errors raised while loading operands at the I/O boundary.
//!
//! The arithmetic itself never fails; everything here concerns getting
//! well-formed membership maps in from files.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fuzzy number in {path}: {message}")]
    Json { path: PathBuf, message: String },

    #[error(transparent)]
    Glob(#[from] glob::PatternError),

    #[error("glob pattern matched no files: {pattern}")]
    NoMatch { pattern: String },

    #[error("JSON pointer {pointer} selects nothing in {path}")]
    Pointer { pointer: String, path: PathBuf },

    #[error("jq filter failed on {path}: {message}")]
    Jq { path: PathBuf, message: String },

    #[error("{path}: {reason}")]
    Invalid { path: PathBuf, reason: String },

    #[error("no operands to combine")]
    NoOperands,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
