//! Input collection for table initialization
//!
//! Resolves the table name from a preset value or, when none is given, from
//! the operator. Invalid answers are rejected and asked again; the prompt's
//! re-ask loop is the only retry mechanism.

use crate::error::Result;
use crate::prompt::{PromptSpec, Prompter};

/// Validation rule applied to interactive answers
pub fn validate_table_name(input: &str) -> std::result::Result<(), String> {
    if input.trim().is_empty() {
        return Err("table name cannot be empty".to_string());
    }
    Ok(())
}

/// Resolve the table name.
///
/// A non-blank `preset` is returned unchanged and the prompter is never
/// consulted. Blank means empty or whitespace-only; such a preset counts as
/// absent. Otherwise the prompter is asked until an answer passes
/// [`validate_table_name`]; aborting propagates `CLIError::PromptAborted`.
pub fn resolve_table_name(
    preset: Option<&str>,
    prompter: &mut dyn Prompter,
    spec: &PromptSpec,
) -> Result<String> {
    if let Some(name) = preset.filter(|name| !name.trim().is_empty()) {
        log::debug!("Using preset table name '{}'", name);
        return Ok(name.to_string());
    }

    loop {
        let answer = prompter.ask(spec)?;
        let answer = answer.trim();

        match validate_table_name(answer) {
            Ok(()) => {
                log::debug!("Table name '{}' accepted from prompt", answer);
                return Ok(answer.to_string());
            }
            Err(message) => prompter.reject(&message),
        }
    }
}
