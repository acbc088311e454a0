//! # The ProfileStore Trait
//!
//! One storage contract, two backends. Keys follow a fixed prefix plus
//! the profile's uuid (`profile-<uuid>`), so every submission is
//! individually addressable and the designer dashboard can enumerate the
//! whole set. The single-well-known-slot scheme some earlier clients used
//! is not supported — it cannot list more than one submission.

use maison_core::ProfileId;
use maison_profile::ClientProfile;
use thiserror::Error;

/// Prefix shared by every profile key.
pub const KEY_PREFIX: &str = "profile-";

/// Storage key for a profile id: `profile-<uuid>`.
pub fn profile_key(id: &ProfileId) -> String {
    format!("{KEY_PREFIX}{}", id.as_uuid())
}

/// Errors from the profile store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No profile exists for the requested id.
    #[error("no profile found for {id}")]
    NotFound {
        /// The id that was looked up.
        id: ProfileId,
    },

    /// A profile could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing storage failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Local key/value persistence of client profiles.
///
/// `write` overwrites the exact key and never merges. Malformed stored
/// data is treated as absence by the readers, never propagated as a
/// crash.
pub trait ProfileStore {
    /// Persist one profile under its key, overwriting any existing value.
    fn write(&mut self, profile: &ClientProfile) -> Result<(), StoreError>;

    /// Load the profile with the given id.
    ///
    /// Returns `Ok(None)` when the key is absent or holds data that no
    /// longer parses as a profile.
    fn read_one(&self, id: &ProfileId) -> Result<Option<ClientProfile>, StoreError>;

    /// Enumerate every stored profile, newest first by creation
    /// timestamp. Entries that fail to parse are skipped and logged;
    /// they never abort the scan.
    fn read_all(&self) -> Result<Vec<ClientProfile>, StoreError>;

    /// Record a designer review on the profile with the given id: status
    /// becomes `reviewed`, the feedback text and a fresh reviewed-at
    /// timestamp are stored, and the profile is written back. Nothing
    /// else in the record changes.
    fn update_review_state(
        &mut self,
        id: &ProfileId,
        feedback: &str,
    ) -> Result<ClientProfile, StoreError> {
        let mut profile = self
            .read_one(id)?
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
        profile.review.mark_reviewed(feedback);
        self.write(&profile)?;
        Ok(profile)
    }
}

/// Parse one stored slot, logging and discarding malformed data.
pub(crate) fn parse_slot(key: &str, raw: &str) -> Option<ClientProfile> {
    match serde_json::from_str(raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::warn!(key, error = %e, "skipping malformed profile record");
            None
        }
    }
}

/// Order profiles newest-first by creation timestamp.
pub(crate) fn sort_newest_first(profiles: &mut [ClientProfile]) {
    profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_key_shape() {
        let id = ProfileId::new();
        let key = profile_key(&id);
        assert!(key.starts_with(KEY_PREFIX));
        assert!(key.ends_with(&id.as_uuid().to_string()));
    }

    #[test]
    fn test_parse_slot_rejects_garbage() {
        assert!(parse_slot("profile-x", "{not json").is_none());
        assert!(parse_slot("profile-x", "{\"wrong\": \"shape\"}").is_none());
    }
}
