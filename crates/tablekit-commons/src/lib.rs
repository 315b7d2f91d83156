//! # tablekit-commons
//!
//! Table schema definition model shared by tablekit components.
//!
//! A [`TableSchema`] describes one table: a stable identifier, a human-readable
//! name and an ordered set of typed fields. Every schema carries the system
//! fields described by [`SYSTEM_FIELD_TEMPLATES`] (primary key and audit
//! timestamps); they are injected by the builder and never supplied by callers.
//!
//! The canonical textual form is TOML. Storage engines, index builders and
//! query layers consume that document as their contract.
//!
//! ## Example Usage
//!
//! ```rust
//! use tablekit_commons::{build_table_schema, DataType, SchemaDocument, TableSchema};
//!
//! let schema = build_table_schema("users");
//! assert_eq!(schema.name(), "users");
//! assert_eq!(schema.field("id").unwrap().data_type, DataType::Uuid);
//!
//! let toml = schema.to_toml_string().unwrap();
//! let decoded = TableSchema::from_toml_str(&toml).unwrap();
//! assert_eq!(decoded, schema);
//! ```

pub mod errors;
pub mod models;
pub mod serialization;

pub use errors::{Result, SchemaError};
pub use serialization::SchemaDocument;
pub use models::datatypes::DataType;
pub use models::ids::{FieldId, TableId};
pub use models::schemas::{
    build_table_schema, SystemFieldTemplate, TableField, TableSchema, SYSTEM_FIELDS_VERSION,
    SYSTEM_FIELD_TEMPLATES,
};
