//! tablekit - table schema authoring tool
//!
//! # Usage
//!
//! ```bash
//! # Prompt for the table name
//! tablekit init table
//!
//! # Scripted use
//! tablekit init table --name users > users.toml
//!
//! # Validate a schema document
//! tablekit check table users.toml
//! ```

use clap::Parser;
use colored::*;

use tablekit_cli::logging::init_logging;
use tablekit_cli::{CLIConfiguration, Result};

mod args;
mod commands;

use args::{CheckCommand, Cli, Command, InitCommand};
use commands::check::handle_check_table;
use commands::init::handle_init_table;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut color = !cli.no_color;
    if let Err(e) = run(&cli, &mut color) {
        if color {
            eprintln!("{} {}", "Error:".red().bold(), e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli, color: &mut bool) -> Result<()> {
    let config = CLIConfiguration::load(&cli.config)?;
    *color = *color && config.resolved_ui().color;
    if !*color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Command::Init(InitCommand::Table(args)) => handle_init_table(args, &config, *color),
        Command::Check(CheckCommand::Table(args)) => handle_check_table(args, *color),
    }
}
