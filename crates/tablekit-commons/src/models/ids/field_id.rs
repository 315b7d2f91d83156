use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a table field.
///
/// Assigned at field creation and kept across renames, so downstream storage
/// can key column data by id rather than by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Uuid);

impl FieldId {
    /// Generate a fresh random (v4) identifier
    #[inline]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for FieldId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for FieldId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
