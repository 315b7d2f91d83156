//! Library entry point for tablekit-cli components.
//!
//! Exposes the input collector, prompts and configuration so tests and other
//! tools can drive table initialization without going through the binary.

pub mod collector;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod table_init;

pub use collector::resolve_table_name;
pub use config::CLIConfiguration;
pub use error::{CLIError, Result};
pub use prompt::{NonInteractivePrompter, PromptSpec, Prompter, TerminalPrompter};
pub use table_init::{init_table, InitTableRequest, InitializedTable, OutputFormat};
