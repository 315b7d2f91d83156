//! Schema model types.
//!
//! - `ids`: type-safe identifier wrappers (`TableId`, `FieldId`)
//! - `datatypes`: the string-tagged `DataType` enumeration
//! - `schemas`: `TableSchema`, `TableField` and the system field templates

pub mod datatypes;
pub mod ids;
pub mod schemas;
