//! Canonical text encodings of schema documents.
//!
//! The `SchemaDocument` trait standardizes how schema values are rendered for
//! downstream consumers. TOML is the canonical format; JSON is offered for
//! tooling that prefers it. Both use the same key names.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SchemaError};

/// Trait implemented by values exchanged as schema documents.
///
/// ## Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use tablekit_commons::serialization::SchemaDocument;
///
/// #[derive(Serialize, Deserialize)]
/// struct Catalog {
///     name: String,
/// }
///
/// impl SchemaDocument for Catalog {}
///
/// let text = Catalog { name: "main".into() }.to_toml_string().unwrap();
/// assert_eq!(text.trim(), "name = \"main\"");
/// ```
pub trait SchemaDocument: Serialize + for<'de> Deserialize<'de> {
    /// Render as a TOML document
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(SchemaError::from)
    }

    /// Parse a TOML document
    fn from_toml_str(text: &str) -> Result<Self>
    where
        Self: Sized,
    {
        toml::from_str(text).map_err(SchemaError::from)
    }

    /// Render as pretty-printed JSON
    fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SchemaError::Serialization(e.to_string()))
    }

    /// Parse a JSON document
    fn from_json_str(text: &str) -> Result<Self>
    where
        Self: Sized,
    {
        serde_json::from_str(text).map_err(|e| SchemaError::Deserialization(e.to_string()))
    }
}
