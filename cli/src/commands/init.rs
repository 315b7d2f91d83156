use crate::args::InitTableArgs;
use std::io::{self, IsTerminal, Write};
use tablekit_cli::{
    init_table, CLIConfiguration, CLIError, InitTableRequest, NonInteractivePrompter,
    OutputFormat, PromptSpec, Prompter, Result, TerminalPrompter,
};

pub fn handle_init_table(
    args: &InitTableArgs,
    config: &CLIConfiguration,
    color: bool,
) -> Result<()> {
    let request = InitTableRequest {
        name: args.name.clone(),
        format: if args.json {
            OutputFormat::Json
        } else {
            args.format
        },
    };

    let spec = PromptSpec::table_name(&config.resolved_prompt());
    let interactive = !args.non_interactive && io::stdin().is_terminal();

    let mut prompter: Box<dyn Prompter> = if interactive {
        Box::new(TerminalPrompter::new(color)?)
    } else {
        log::debug!("Interactive prompting disabled");
        Box::new(NonInteractivePrompter)
    };

    let table = init_table(&request, prompter.as_mut(), &spec)?;

    eprintln!("Table Name: {}", table.schema.name());

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(table.document.as_bytes())
        .map_err(|e| CLIError::FileError(format!("Failed to write schema: {}", e)))?;
    stdout
        .flush()
        .map_err(|e| CLIError::FileError(format!("Failed to flush stdout: {}", e)))?;

    Ok(())
}
