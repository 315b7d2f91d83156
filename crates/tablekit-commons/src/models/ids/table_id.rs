use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a table.
///
/// Assigned once when the schema is created and never reassigned. Serializes
/// as the canonical hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(Uuid);

impl TableId {
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

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TableId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for TableId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
