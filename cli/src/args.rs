use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tablekit_cli::config::DEFAULT_CONFIG_PATH;
use tablekit_cli::OutputFormat;

// Macro to create the version string at compile time
macro_rules! version_string {
    () => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            "\nCommit: ",
            env!("GIT_COMMIT_HASH"),
            " (",
            env!("GIT_BRANCH"),
            ")\nBuilt: ",
            env!("BUILD_DATE")
        )
    };
}

/// tablekit - table schema authoring tool
#[derive(Parser, Debug)]
#[command(name = "tablekit")]
#[command(version = version_string!())]
#[command(about = "Declare table schemas for tablekit storage", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(long = "config", default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,

    /// Enable verbose logging (on stderr)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new project or resource.
    #[command(subcommand)]
    Init(InitCommand),

    /// Validate an existing resource definition.
    #[command(subcommand)]
    Check(CheckCommand),
}

#[derive(Subcommand, Debug)]
pub enum InitCommand {
    /// Initialize a new table.
    Table(InitTableArgs),
}

#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate a table schema document.
    Table(CheckTableArgs),
}

#[derive(Args, Debug)]
pub struct InitTableArgs {
    /// Name of the table.
    #[arg(long = "name")]
    pub name: Option<String>,

    /// Never prompt; fail when no name is given
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Toml)]
    pub format: OutputFormat,

    /// Emit JSON (shorthand for --format=json)
    #[arg(long = "json", conflicts_with = "format")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CheckTableArgs {
    /// Schema document (TOML) to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_init_table_with_name() {
        let cli = Cli::parse_from(["tablekit", "init", "table", "--name", "orders"]);
        match cli.command {
            Command::Init(InitCommand::Table(args)) => {
                assert_eq!(args.name.as_deref(), Some("orders"));
                assert!(!args.non_interactive);
                assert_eq!(args.format, OutputFormat::Toml);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_json_conflicts_with_format() {
        let result = Cli::try_parse_from([
            "tablekit", "init", "table", "--json", "--format", "toml",
        ]);
        assert!(result.is_err());
    }
}
