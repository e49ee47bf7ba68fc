//! Error types for vocabulary construction, encoding, and persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vocabulario operations.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors that can occur while building, encoding with, or persisting
/// ranking vocabularies.
#[derive(Error, Debug)]
pub enum VocabError {
    /// Configuration value is invalid.
    #[error("invalid configuration for '{field}': {message}")]
    Config { field: String, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A persisted dictionary file contains a malformed record.
    #[error("malformed record in {path} at line {line}: {message}")]
    Parse { path: PathBuf, line: usize, message: String },

    /// An id was looked up in a text vocabulary that does not contain it.
    #[error("no {kind} entry for id {id}")]
    MissingEntry { kind: &'static str, id: u32 },

    /// An embedding cache was saved while one or more slots were unset.
    #[error("cannot stack {kind} embeddings: slot {id} is unset")]
    EmbeddingUnset { kind: &'static str, id: u32 },

    /// Embedding rows had inconsistent dimensions at stacking time.
    #[error("cannot stack {kind} embeddings: slot {id} has dimension {actual}, expected {expected}")]
    EmbeddingShape { kind: &'static str, id: u32, expected: usize, actual: usize },

    /// A loaded embedding cache does not cover the text vocabulary's id
    /// range.
    #[error("{kind} embedding cache has {actual} rows, expected {expected} to match the {kind} vocabulary")]
    EmbeddingCount { kind: &'static str, expected: usize, actual: usize },

    /// Negative sampling could not find enough candidates outside the
    /// positive pool within the attempt budget.
    #[error("negative sampling exhausted: drew {drawn} of {requested} candidates before hitting the attempt limit")]
    SamplingExhausted { requested: usize, drawn: usize },

    /// Embedding array serialization error.
    #[error("embedding array error: {0}")]
    Array(String),
}

impl VocabError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create a configuration error.
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config { field: field.into(), message: message.into() }
    }

    /// Create a parse error for a record in a persisted dictionary.
    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse { path: path.into(), line, message: message.into() }
    }
}
