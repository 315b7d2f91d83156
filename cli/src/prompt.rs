//! Interactive prompts
//!
//! The `Prompter` trait is the seam between the input collector and the
//! terminal. `TerminalPrompter` reads a line with rustyline, showing the
//! placeholder as a dimmed hint while the line is empty. The prompt is drawn
//! on the controlling terminal, so stdout carries only command output.

use std::borrow::Cow;

use colored::*;
use rustyline::completion::Completer;
use rustyline::config::Behavior;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Config, EditMode, Editor, Helper};

use crate::config::PromptConfig;
use crate::error::{CLIError, Result};

/// Wording of one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub title: String,
    pub placeholder: String,
}

impl PromptSpec {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Table name prompt with the configured wording
    pub fn table_name(config: &PromptConfig) -> Self {
        Self::new(config.title.clone(), config.placeholder.clone())
    }
}

/// Source of operator answers
pub trait Prompter {
    /// Ask once and return the raw answer.
    ///
    /// Returns `CLIError::PromptAborted` when the operator cancels.
    fn ask(&mut self, spec: &PromptSpec) -> Result<String>;

    /// Report why the last answer was not accepted
    fn reject(&mut self, message: &str);
}

/// Prompter used when no terminal interaction is allowed
#[derive(Debug, Default)]
pub struct NonInteractivePrompter;

impl Prompter for NonInteractivePrompter {
    fn ask(&mut self, spec: &PromptSpec) -> Result<String> {
        log::debug!("Prompt '{}' skipped in non-interactive mode", spec.title);
        Err(CLIError::EmptyName)
    }

    fn reject(&mut self, _message: &str) {}
}

/// Line-editor backed prompter for interactive terminals
pub struct TerminalPrompter {
    editor: Editor<PromptHelper, DefaultHistory>,
    color: bool,
}

impl TerminalPrompter {
    pub fn new(color: bool) -> Result<Self> {
        let config = Config::builder()
            .edit_mode(EditMode::Emacs)
            .auto_add_history(false)
            .behavior(Behavior::PreferTerm)
            .build();

        let mut editor = Editor::<PromptHelper, DefaultHistory>::with_config(config)?;
        editor.set_helper(Some(PromptHelper::new(color)));

        Ok(Self { editor, color })
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, spec: &PromptSpec) -> Result<String> {
        if let Some(helper) = self.editor.helper_mut() {
            helper.placeholder = spec.placeholder.clone();
        }

        if self.color {
            eprintln!("{}", spec.title.bold());
        } else {
            eprintln!("{}", spec.title);
        }

        let prompt = if self.color {
            "> ".cyan().to_string()
        } else {
            "> ".to_string()
        };

        Ok(self.editor.readline(&prompt)?)
    }

    fn reject(&mut self, message: &str) {
        if self.color {
            eprintln!("{}", format!("✗ {}", message).red());
        } else {
            eprintln!("✗ {}", message);
        }
    }
}

/// Placeholder hint: displayed, never inserted into the line
pub struct PlaceholderHint(String);

impl Hint for PlaceholderHint {
    fn display(&self) -> &str {
        &self.0
    }

    fn completion(&self) -> Option<&str> {
        None
    }
}

/// rustyline helper that renders the placeholder while the line is empty
pub struct PromptHelper {
    placeholder: String,
    color: bool,
}

impl PromptHelper {
    fn new(color: bool) -> Self {
        Self {
            placeholder: String::new(),
            color,
        }
    }
}

impl Completer for PromptHelper {
    type Candidate = String;
}

impl Hinter for PromptHelper {
    type Hint = PlaceholderHint;

    fn hint(&self, line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if line.is_empty() && !self.placeholder.is_empty() {
            Some(PlaceholderHint(self.placeholder.clone()))
        } else {
            None
        }
    }
}

impl Highlighter for PromptHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if self.color && !hint.is_empty() {
            Cow::Owned(hint.dimmed().to_string())
        } else {
            Cow::Borrowed(hint)
        }
    }
}

impl Validator for PromptHelper {}

impl Helper for PromptHelper {}
