//! Type-safe identifier wrappers.
//!
//! Table and field identifiers are both 128-bit UUIDs. Wrapping them keeps a
//! field id from being passed where a table id is expected.

mod field_id;
mod table_id;

pub use field_id::FieldId;
pub use table_id::TableId;
