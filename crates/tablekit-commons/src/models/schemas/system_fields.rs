//! Fields injected into every table schema

use crate::models::datatypes::DataType;
use crate::models::ids::FieldId;
use crate::models::schemas::TableField;

/// Version of the system field template list. Bumped whenever a template is
/// added so consumers can tell which injected fields a document carries.
pub const SYSTEM_FIELDS_VERSION: u32 = 1;

/// Name of the primary key field
pub const PRIMARY_KEY_FIELD: &str = "id";

/// Row creation timestamp field
pub const CREATED_AT_FIELD: &str = "created_at";

/// Last modification timestamp field
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// Fixed description of a system-managed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemFieldTemplate {
    pub name: &'static str,
    pub data_type: DataType,
    pub unique: bool,
    pub required: bool,
    pub automatic: bool,
}

/// Templates in injection order. New entries go at the end.
pub const SYSTEM_FIELD_TEMPLATES: &[SystemFieldTemplate] = &[
    SystemFieldTemplate {
        name: PRIMARY_KEY_FIELD,
        data_type: DataType::Uuid,
        unique: true,
        required: true,
        automatic: true,
    },
    SystemFieldTemplate {
        name: CREATED_AT_FIELD,
        data_type: DataType::Timestamp,
        unique: false,
        required: true,
        automatic: true,
    },
    SystemFieldTemplate {
        name: UPDATED_AT_FIELD,
        data_type: DataType::Timestamp,
        unique: false,
        required: true,
        automatic: true,
    },
];

impl SystemFieldTemplate {
    /// Look up the template for a field name
    pub fn find(name: &str) -> Option<&'static SystemFieldTemplate> {
        SYSTEM_FIELD_TEMPLATES.iter().find(|t| t.name == name)
    }

    /// Whether `name` is reserved for a system field
    pub fn is_reserved(name: &str) -> bool {
        Self::find(name).is_some()
    }

    /// Create a field from this template with a fresh identifier
    pub fn instantiate(&self) -> TableField {
        TableField {
            id: FieldId::generate(),
            data_type: self.data_type,
            unique: self.unique,
            required: self.required,
            automatic: self.automatic,
        }
    }

    /// Whether `field` has the type and flags this template prescribes
    pub fn matches(&self, field: &TableField) -> bool {
        field.data_type == self.data_type
            && field.unique == self.unique
            && field.required == self.required
            && field.automatic == self.automatic
    }

    /// Type and flags in the `type [flags]` form used by error messages
    pub fn describe(&self) -> String {
        describe_shape(self.data_type, self.unique, self.required, self.automatic)
    }
}

pub(crate) fn describe_shape(
    data_type: DataType,
    unique: bool,
    required: bool,
    automatic: bool,
) -> String {
    let flags: Vec<&str> = [
        (unique, "unique"),
        (required, "required"),
        (automatic, "automatic"),
    ]
    .iter()
    .filter(|(set, _)| *set)
    .map(|(_, label)| *label)
    .collect();

    if flags.is_empty() {
        data_type.to_string()
    } else {
        format!("{} [{}]", data_type, flags.join(", "))
    }
}
