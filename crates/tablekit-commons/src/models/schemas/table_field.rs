//! Field definition for table schemas

use crate::models::datatypes::DataType;
use crate::models::ids::FieldId;
use crate::models::schemas::system_fields::describe_shape;
use serde::{Deserialize, Serialize};

/// Definition of one table column.
///
/// Constraint flags default to `false` and are omitted from encoded
/// documents when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableField {
    /// Stable field identifier - NEVER changes after creation
    pub id: FieldId,

    /// Value kind, encoded under the `type` key
    #[serde(rename = "type")]
    pub data_type: DataType,

    /// Values must be distinct across all rows
    #[serde(default, skip_serializing_if = "is_false")]
    pub unique: bool,

    /// A value must be present for every row
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,

    /// Values are generated by the system, not supplied on insert
    #[serde(default, skip_serializing_if = "is_false")]
    pub automatic: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TableField {
    /// Create an optional, non-unique, user-supplied field
    pub fn new(data_type: DataType) -> Self {
        Self {
            id: FieldId::generate(),
            data_type,
            unique: false,
            required: false,
            automatic: false,
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_automatic(mut self, automatic: bool) -> Self {
        self.automatic = automatic;
        self
    }

    /// Whether a row-insertion caller may provide this field's value.
    ///
    /// Automatic fields are never user-settable, regardless of `required`.
    pub fn is_user_settable(&self) -> bool {
        !self.automatic
    }

    /// Type and flags, e.g. `timestamp [required, automatic]`
    pub fn describe(&self) -> String {
        describe_shape(self.data_type, self.unique, self.required, self.automatic)
    }
}
