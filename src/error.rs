//! Error types for entry trees

use std::io;

use thiserror::Error;

/// Errors raised while building or querying an entry tree.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation is only meaningful on a directory.
    #[error("unsupported operation: cannot {operation} on file '{name}'")]
    UnsupportedOperation {
        operation: &'static str,
        name: String,
    },

    #[error("entry name must not be empty")]
    EmptyName,

    /// A path did not resolve to a directory.
    #[error("no such directory: '{0}'")]
    NotFound(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// The tree nests deeper than JSON output allows.
    #[error("tree is {depth} levels deep, JSON output supports at most {limit}")]
    TooDeep { depth: usize, limit: usize },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
