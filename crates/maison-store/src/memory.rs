//! # In-Memory Backend
//!
//! `BTreeMap`-backed store holding raw JSON strings per key, the same
//! shape the durable backend persists. Serialization happens on `write`
//! and parsing on read, so this backend exercises the exact same
//! malformed-data paths as the file store.
//!
//! A `MemoryStore` is constructed per page session and dropped on
//! navigation; nothing lives at module scope.

use std::collections::BTreeMap;

use maison_core::ProfileId;
use maison_profile::ClientProfile;

use crate::store::{parse_slot, profile_key, sort_newest_first, ProfileStore, StoreError, KEY_PREFIX};

/// In-memory key/value store of serialized profiles.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Place a raw string in a slot, bypassing serialization.
    ///
    /// This mirrors what any other writer to the same key/value namespace
    /// can do; the readers must tolerate whatever ends up here.
    pub fn set_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.slots.insert(key.into(), value.into());
    }
}

impl ProfileStore for MemoryStore {
    fn write(&mut self, profile: &ClientProfile) -> Result<(), StoreError> {
        let raw = serde_json::to_string(profile)?;
        self.slots.insert(profile_key(&profile.id), raw);
        Ok(())
    }

    fn read_one(&self, id: &ProfileId) -> Result<Option<ClientProfile>, StoreError> {
        let key = profile_key(id);
        Ok(self.slots.get(&key).and_then(|raw| parse_slot(&key, raw)))
    }

    fn read_all(&self) -> Result<Vec<ClientProfile>, StoreError> {
        let mut profiles: Vec<ClientProfile> = self
            .slots
            .iter()
            .filter(|(key, _)| key.starts_with(KEY_PREFIX))
            .filter_map(|(key, raw)| parse_slot(key, raw))
            .collect();
        sort_newest_first(&mut profiles);
        Ok(profiles)
    }
}
