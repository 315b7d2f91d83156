use crate::args::CheckTableArgs;
use colored::*;
use tablekit_cli::{CLIError, Result};
use tablekit_commons::{TableSchema, SYSTEM_FIELDS_VERSION};

pub fn handle_check_table(args: &CheckTableArgs, color: bool) -> Result<()> {
    let text = std::fs::read_to_string(&args.file).map_err(|e| {
        CLIError::FileError(format!("Failed to read {}: {}", args.file.display(), e))
    })?;

    let schema = TableSchema::parse(&text)?;
    log::debug!(
        "Schema '{}' from {} passed validation",
        schema.name(),
        args.file.display()
    );

    let status = if color {
        "✓ valid".green().to_string()
    } else {
        "✓ valid".to_string()
    };

    println!("Table: {} ({})", schema.name(), status);
    println!("Id: {}", schema.id());
    println!("System fields: v{}", SYSTEM_FIELDS_VERSION);
    println!("Fields:");
    for (name, field) in schema.fields() {
        println!("  {:<16} {}", name, field.describe());
    }

    Ok(())
}
