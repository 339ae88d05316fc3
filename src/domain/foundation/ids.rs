//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a todo item.
///
/// Always a well-formed UUID. Parsing from text is the only way a
/// client-supplied identifier enters the system, so malformed values are
/// rejected before any lookup happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random TodoId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a TodoId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ValidationError;

    /// Only the hyphenated 8-4-4-4-12 form is accepted (either case).
    /// Simple, braced and `urn:uuid:` spellings are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s)
            .map_err(|e| ValidationError::invalid_format("id", e.to_string()))?;
        if !uuid.hyphenated().to_string().eq_ignore_ascii_case(s) {
            return Err(ValidationError::invalid_format(
                "id",
                "expected hyphenated UUID (8-4-4-4-12)",
            ));
        }
        Ok(Self(uuid))
    }
}
