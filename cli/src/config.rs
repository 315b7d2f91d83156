//! Configuration file management
//!
//! CLIConfiguration with TOML parsing for ~/.tablekit/config.toml
//!
//! # Configuration Format
//!
//! ```toml
//! [ui]
//! color = true                                   # Colored prompts and errors
//!
//! [prompt]
//! title = "Table Name"                           # Title shown above the name prompt
//! placeholder = "Enter the name of the table."   # Hint shown while the line is empty
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CLIError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "~/.tablekit/config.toml";

/// CLI configuration loaded from TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CLIConfiguration {
    /// UI preferences
    pub ui: Option<UIConfig>,

    /// Interactive prompt wording
    pub prompt: Option<PromptConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Title shown above the table name prompt
    #[serde(default = "default_prompt_title")]
    pub title: String,

    /// Placeholder hint shown while the input line is empty
    #[serde(default = "default_prompt_placeholder")]
    pub placeholder: String,
}

fn default_color() -> bool {
    true
}

fn default_prompt_title() -> String {
    "Table Name".to_string()
}

fn default_prompt_placeholder() -> String {
    "Enter the name of the table.".to_string()
}

pub fn expand_config_path(path: &Path) -> PathBuf {
    let path_str = path.to_str().unwrap_or(DEFAULT_CONFIG_PATH);
    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(rest);
        }
    }
    path.to_path_buf()
}

impl CLIConfiguration {
    /// Load configuration from file
    ///
    /// Returns default configuration if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        let expanded_path = expand_config_path(path);
        let path = &expanded_path;

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            CLIError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let config: CLIConfiguration = toml::from_str(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn resolved_ui(&self) -> UIConfig {
        self.ui.clone().unwrap_or(UIConfig {
            color: default_color(),
        })
    }

    pub fn resolved_prompt(&self) -> PromptConfig {
        self.prompt.clone().unwrap_or(PromptConfig {
            title: default_prompt_title(),
            placeholder: default_prompt_placeholder(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CLIConfiguration::load(&dir.path().join("absent.toml")).unwrap();

        assert!(config.resolved_ui().color);
        let prompt = config.resolved_prompt();
        assert_eq!(prompt.title, "Table Name");
        assert_eq!(prompt.placeholder, "Enter the name of the table.");
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ncolor = false\n\n[prompt]\ntitle = \"Name\"").unwrap();

        let config = CLIConfiguration::load(file.path()).unwrap();
        assert!(!config.resolved_ui().color);
        let prompt = config.resolved_prompt();
        assert_eq!(prompt.title, "Name");
        assert_eq!(prompt.placeholder, "Enter the name of the table.");
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui\ncolor = ").unwrap();

        let err = CLIConfiguration::load(file.path()).unwrap_err();
        assert!(matches!(err, CLIError::ConfigurationError(_)));
    }

    #[test]
    fn test_expand_home_prefix() {
        let expanded = expand_config_path(Path::new("~/.tablekit/config.toml"));
        if dirs::home_dir().is_some() {
            assert!(!expanded.starts_with("~"));
            assert!(expanded.ends_with(".tablekit/config.toml"));
        }

        let absolute = expand_config_path(Path::new("/etc/tablekit.toml"));
        assert_eq!(absolute, PathBuf::from("/etc/tablekit.toml"));
    }
}
