//! Error types for tablekit-cli
//!
//! Provides user-facing error messages for the command surface. Every error is
//! terminal for the running command: it is reported on stderr and nothing is
//! written to stdout.

use std::fmt;

use tablekit_commons::SchemaError;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CLIError>;

/// Errors that can occur in the CLI
#[derive(Debug)]
pub enum CLIError {
    /// A table name was required but none was supplied
    EmptyName,

    /// Operator aborted the interactive prompt
    PromptAborted,

    /// Schema model error (serialization, decoding, validation)
    SchemaError(SchemaError),

    /// Configuration file error
    ConfigurationError(String),

    /// File I/O error
    FileError(String),

    /// Readline error other than an abort
    ReadlineError(String),
}

impl fmt::Display for CLIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CLIError::EmptyName => write!(f, "table name cannot be empty"),
            CLIError::PromptAborted => write!(f, "Prompt aborted by user"),
            CLIError::SchemaError(e) => write!(f, "{}", e),
            CLIError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            CLIError::FileError(msg) => write!(f, "File error: {}", msg),
            CLIError::ReadlineError(msg) => write!(f, "Input error: {}", msg),
        }
    }
}

impl std::error::Error for CLIError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CLIError::SchemaError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SchemaError> for CLIError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::EmptyName => CLIError::EmptyName,
            e => CLIError::SchemaError(e),
        }
    }
}

impl From<rustyline::error::ReadlineError> for CLIError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        match err {
            rustyline::error::ReadlineError::Interrupted => CLIError::PromptAborted,
            rustyline::error::ReadlineError::Eof => CLIError::PromptAborted,
            e => CLIError::ReadlineError(e.to_string()),
        }
    }
}

impl From<std::io::Error> for CLIError {
    fn from(err: std::io::Error) -> Self {
        CLIError::FileError(err.to_string())
    }
}

impl From<toml::de::Error> for CLIError {
    fn from(err: toml::de::Error) -> Self {
        CLIError::ConfigurationError(format!("TOML parse error: {}", err))
    }
}
