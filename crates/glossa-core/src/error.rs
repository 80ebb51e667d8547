//! Error types for store and game operations.
//!
//! Every error here is recoverable by the calling layer; the core never
//! terminates the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened.
    #[error("file not found: {0}")]
    NotFound(String),

    /// A read failed partway through an already-open source.
    #[error("I/O error while reading dictionary: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SaveError {
    /// The destination could not be opened for writing.
    #[error("cannot open file for writing: {0}")]
    WriteFailed(String),

    /// A write failed after the destination was opened. The file may be
    /// truncated or partially written.
    #[error("I/O error while writing dictionary: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AddError {
    /// The word is already present; existing entries are never edited here.
    #[error("word already exists: {0}")]
    Duplicate(String),

    /// The type code did not map to a known label.
    #[error("invalid word type {0:?}, expected n, v, or adj")]
    InvalidType(String),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("the dictionary is empty, load a file before playing")]
    EmptyStore,

    /// No definition is long enough to mask a fourth word.
    #[error("no definition in the dictionary has more than four words")]
    NoQualifyingEntry,

    /// The round has ended; `start` must be called again.
    #[error("no game in progress")]
    NotActive,
}
