//! Error types for Optar

use std::io;
use thiserror::Error;

/// Result type alias for Optar operations
pub type Result<T> = std::result::Result<T, OptarError>;

/// Main error type for Optar
#[derive(Error, Debug)]
pub enum OptarError {
    /// Parser configuration errors (programming-time, not user-facing)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command-line parsing errors (user-facing)
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Tokenization errors from shell-style splitting
    #[error("Split error: {0}")]
    Split(#[from] SplitError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Parser declaration and setup errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Option '{0}' is already defined")]
    DuplicateOption(String),
}

/// Command-line parsing errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unrecognized argument: {0}")]
    UnknownToken(String),

    #[error("Option '--{0}' expects a value")]
    MissingValue(String),

    #[error("Invalid value for '--{name}': {value:?} ({expected} expected)")]
    InvalidValue {
        name: String,
        value: String,
        expected: &'static str,
    },
}

/// Shell-style word splitting errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SplitError {
    #[error("Unclosed {0} quote")]
    UnclosedQuote(char),
}

/// Specialized result type for parser setup operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for parsing operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Specialized result type for tokenization operations
pub type SplitResult<T> = std::result::Result<T, SplitError>;
