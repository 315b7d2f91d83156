//! `init table` workflow: resolve name → build schema → render document

use clap::ValueEnum;
use tablekit_commons::{build_table_schema, SchemaDocument, TableSchema};

use crate::collector::resolve_table_name;
use crate::error::Result;
use crate::prompt::{PromptSpec, Prompter};

/// Output format for schema documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

/// Immutable request for one table initialization
#[derive(Debug, Clone, Default)]
pub struct InitTableRequest {
    /// Name supplied up front (e.g. `--name`)
    pub name: Option<String>,

    /// Rendering of the resulting document
    pub format: OutputFormat,
}

/// Result of a successful initialization
#[derive(Debug, Clone)]
pub struct InitializedTable {
    pub schema: TableSchema,
    pub document: String,
}

/// Render a schema in the requested format
pub fn render_schema(schema: &TableSchema, format: OutputFormat) -> Result<String> {
    let document = match format {
        OutputFormat::Toml => schema.to_toml_string()?,
        OutputFormat::Json => schema.to_json_string()? + "\n",
    };
    Ok(document)
}

/// Run the initialization.
///
/// The document is rendered in full before returning, so a failure at any
/// step leaves nothing for the caller to emit.
pub fn init_table(
    request: &InitTableRequest,
    prompter: &mut dyn Prompter,
    spec: &PromptSpec,
) -> Result<InitializedTable> {
    let name = resolve_table_name(request.name.as_deref(), prompter, spec)?;
    let schema = build_table_schema(name);
    let document = render_schema(&schema, request.format)?;

    Ok(InitializedTable { schema, document })
}
