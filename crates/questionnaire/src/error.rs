//! Error types for the questionnaire crate.
//!
//! Coercing a single answer never fails; these errors only cover the
//! operator-facing edges: reading files and parsing whole JSON documents.

use thiserror::Error;

/// Errors that can occur while loading questionnaires
#[derive(Error, Debug)]
pub enum QuestionnaireError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document is not valid JSON
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The document parsed, but the top-level value is not an object
    #[error("Expected a JSON object but found {found}")]
    NotAnObject { found: &'static str },

    /// A line in a JSON Lines batch couldn't be parsed
    #[error("Parse error at line {line}: {reason}")]
    BatchLine { line: usize, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, QuestionnaireError>;
