//! Error types shared between the pattern assemblies and the playground.
//!
//! The `PlaygroundError` enum unifies the few failure cases the workspace has:
//! reading and decoding quote files, and host I/O while showing screens.
//! Missing collaborators and empty quote collections are not errors; they are
//! handled where they occur.
use std::io;

use thiserror::Error;

/// Unified error type shared by every crate in the workspace.
#[derive(Error, Debug)]
pub enum PlaygroundError {
    /// I/O error originating from the standard library (files, stdin/stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while decoding a JSON quote file via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A line of a text quote file could not be split into text and source.
    #[error("Parse quotes file error at line {line}: {reason}")]
    ParseQuotesFile {
        /// 1-based line number in the quotes file.
        line: usize,
        /// Human-readable reason.
        reason: String,
    },

    /// The quotes file path does not point to a regular file.
    #[error("Quotes file not found: {0}")]
    QuotesFileNotFound(String),
}
