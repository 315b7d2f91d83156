//! Schema Models - table and field definitions
//!
//! # Core Types
//!
//! - **`TableSchema`**: complete table description (id, name, ordered fields)
//! - **`TableField`**: one column (id, data type, constraint flags)
//! - **`SystemFieldTemplate`**: description of a field injected into every table
//!
//! # Layout
//!
//! ```text
//! table name (Input Collector)
//!       ↓
//! build_table_schema  ← SYSTEM_FIELD_TEMPLATES
//!       ↓
//! TableSchema
//!       ↓
//! TOML document (SchemaDocument)
//! ```

pub mod system_fields;
pub mod table_field;
pub mod table_schema;

pub use system_fields::{SystemFieldTemplate, SYSTEM_FIELDS_VERSION, SYSTEM_FIELD_TEMPLATES};
pub use table_field::TableField;
pub use table_schema::{build_table_schema, TableSchema};
