//! Error types for schema construction, validation and (de)serialization.

use thiserror::Error;
use uuid::Uuid;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised by the schema model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A table name was required but absent or blank
    #[error("table name cannot be empty")]
    EmptyName,

    /// The schema could not be rendered to text
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A schema document could not be parsed
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// A system field is absent from the schema
    #[error("missing system field '{0}'")]
    MissingSystemField(String),

    /// A system field exists but its type or flags differ from the template
    #[error("system field '{field}' must be {expected}, found {found}")]
    SystemFieldMismatch {
        field: String,
        expected: String,
        found: String,
    },

    /// The same identifier is used by more than one table or field
    #[error("duplicate identifier {0}")]
    DuplicateIdentifier(Uuid),
}

impl From<toml::ser::Error> for SchemaError {
    fn from(err: toml::ser::Error) -> Self {
        SchemaError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for SchemaError {
    fn from(err: toml::de::Error) -> Self {
        SchemaError::Deserialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(SchemaError::EmptyName.to_string(), "table name cannot be empty");
        assert_eq!(
            SchemaError::MissingSystemField("created_at".into()).to_string(),
            "missing system field 'created_at'"
        );
    }
}
