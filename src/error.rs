//! Error types for console-lexer
//!
//! Lexing itself never fails; these cover configuration and CLI I/O.

use thiserror::Error;

/// Result type alias for console-lexer operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Console error types
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown token type: {0}")]
    UnknownTokenType(String),

    #[error("Unknown markup: {0}")]
    UnknownMarkup(String),

    #[error("{0}")]
    Message(String),
}
