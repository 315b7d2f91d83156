//! DataType - value kinds a table field can hold
//!
//! Serialized as a lowercase string tag, never as an ordinal, so adding a
//! variant cannot change how already-written schemas decode:
//! - UUID = "uuid" (128-bit unique identifier)
//! - TIMESTAMP = "timestamp"
//! - BOOLEAN = "boolean"
//! - NUMBER = "number" (64-bit signed integer)
//! - TEXT = "text" (UTF-8 string)
//! - BYTES = "bytes" (binary data)

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Uuid,
    Timestamp,
    Boolean,
    Number,
    Text,
    Bytes,
}

impl DataType {
    /// All variants, in tag order
    pub const ALL: [DataType; 6] = [
        DataType::Uuid,
        DataType::Timestamp,
        DataType::Boolean,
        DataType::Number,
        DataType::Text,
        DataType::Bytes,
    ];

    /// Serialized tag of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Uuid => "uuid",
            DataType::Timestamp => "timestamp",
            DataType::Boolean => "boolean",
            DataType::Number => "number",
            DataType::Text => "text",
            DataType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
