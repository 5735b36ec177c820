//! Error types for the compad library

use thiserror::Error;

/// Errors raised while configuring or driving a pad
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Configuration value out of range
    #[error("invalid pad config: {0}")]
    InvalidConfig(String),

    /// Direction name that does not match any `Direction`
    #[error("unknown direction: '{0}'")]
    UnknownDirection(String),

    /// Scheme name other than "four" / "eight"
    #[error("unknown direction scheme: '{0}' (expected 'four' or 'eight')")]
    UnknownScheme(String),

    /// REPL input that could not be parsed
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, Error>;
