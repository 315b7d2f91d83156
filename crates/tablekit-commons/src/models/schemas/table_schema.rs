//! Table schema - single source of truth for a table's shape

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SchemaError};
use crate::models::ids::TableId;
use crate::models::schemas::system_fields::{PRIMARY_KEY_FIELD, SYSTEM_FIELD_TEMPLATES};
use crate::models::schemas::{SystemFieldTemplate, TableField};
use crate::serialization::SchemaDocument;

/// Complete description of one table.
///
/// Fields keep insertion order: system fields first, in template order,
/// followed by any user fields a document declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Stable table identifier, required in every document
    id: TableId,

    /// Table name (non-empty). Uniqueness across a catalog is the catalog's job.
    name: String,

    /// Field name → definition
    #[serde(default)]
    fields: IndexMap<String, TableField>,
}

/// Build the schema of a new table.
///
/// Assigns a fresh table id and injects one field per entry of
/// [`SYSTEM_FIELD_TEMPLATES`], each with its own fresh id. The caller
/// guarantees that `name` is not blank; use [`TableSchema::new`] for a
/// checked variant.
pub fn build_table_schema(name: impl Into<String>) -> TableSchema {
    let name = name.into();
    let id = TableId::generate();

    let fields: IndexMap<String, TableField> = SYSTEM_FIELD_TEMPLATES
        .iter()
        .map(|template| (template.name.to_string(), template.instantiate()))
        .collect();

    log::debug!(
        "Built schema for table '{}' (id={}, {} system fields)",
        name,
        id,
        fields.len()
    );

    TableSchema { id, name, fields }
}

impl TableSchema {
    /// Build a new table schema, rejecting a blank name
    ///
    /// # Example
    ///
    /// ```
    /// use tablekit_commons::{SchemaError, TableSchema};
    ///
    /// let schema = TableSchema::new("orders").unwrap();
    /// assert_eq!(schema.fields().len(), 3);
    /// assert_eq!(TableSchema::new("  ").unwrap_err(), SchemaError::EmptyName);
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SchemaError::EmptyName);
        }
        Ok(build_table_schema(name))
    }

    /// Decode a TOML document and check it against the schema invariants
    pub fn parse(text: &str) -> Result<Self> {
        let schema = Self::from_toml_str(text)?;
        schema.validate()?;
        Ok(schema)
    }

    #[inline]
    pub fn id(&self) -> TableId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn fields(&self) -> &IndexMap<String, TableField> {
        &self.fields
    }

    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&TableField> {
        self.fields.get(name)
    }

    /// The primary key field
    pub fn primary_key(&self) -> Option<&TableField> {
        self.fields.get(PRIMARY_KEY_FIELD)
    }

    /// Fields managed by the system, in declaration order
    pub fn system_fields(&self) -> impl Iterator<Item = (&str, &TableField)> {
        self.fields
            .iter()
            .filter(|(name, _)| SystemFieldTemplate::is_reserved(name))
            .map(|(name, field)| (name.as_str(), field))
    }

    /// Fields declared by the schema author, in declaration order
    pub fn user_fields(&self) -> impl Iterator<Item = (&str, &TableField)> {
        self.fields
            .iter()
            .filter(|(name, _)| !SystemFieldTemplate::is_reserved(name))
            .map(|(name, field)| (name.as_str(), field))
    }

    /// Check the schema invariants.
    ///
    /// Schemas from [`build_table_schema`] always pass; this is meant for
    /// documents obtained elsewhere (files, other tools).
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SchemaError::EmptyName);
        }

        for template in SYSTEM_FIELD_TEMPLATES {
            let field = self
                .fields
                .get(template.name)
                .ok_or_else(|| SchemaError::MissingSystemField(template.name.to_string()))?;

            if !template.matches(field) {
                return Err(SchemaError::SystemFieldMismatch {
                    field: template.name.to_string(),
                    expected: template.describe(),
                    found: field.describe(),
                });
            }
        }

        let mut seen = HashSet::with_capacity(self.fields.len() + 1);
        seen.insert(*self.id.as_uuid());
        for field in self.fields.values() {
            if !seen.insert(*field.id.as_uuid()) {
                return Err(SchemaError::DuplicateIdentifier(*field.id.as_uuid()));
            }
        }

        Ok(())
    }
}

impl SchemaDocument for TableSchema {}
