//! # Profile Identity Newtype
//!
//! Newtype wrapper for the profile identifier. A `ProfileId` cannot be
//! confused with any other string-shaped value in the system, and the
//! store's key scheme is derived from it rather than hand-assembled.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one completed quiz submission.
///
/// Identifiers are random (UUID v4); the newest-first ordering consumed by
/// the designer dashboard comes from the profile's creation timestamp,
/// never from the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub Uuid);

impl ProfileId {
    /// Generate a new random profile identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse a profile identifier from its UUID string form.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "profile:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_distinct() {
        assert_ne!(ProfileId::new(), ProfileId::new());
    }

    #[test]
    fn test_display_prefix() {
        let id = ProfileId::new();
        assert!(id.to_string().starts_with("profile:"));
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = ProfileId::new();
        let parsed = ProfileId::parse(&id.as_uuid().to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ProfileId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = ProfileId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ProfileId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
