//! # File Backend
//!
//! One JSON document per profile in a store directory
//! (`<dir>/profile-<uuid>.json`). Durable for the lifetime of the local
//! device profile. Writes are synchronous and complete before any
//! caller-side presentation delay; there is no cross-process locking, so
//! racing writers on the same key are last-write-wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use maison_core::ProfileId;
use maison_profile::ClientProfile;

use crate::store::{parse_slot, profile_key, sort_newest_first, ProfileStore, StoreError, KEY_PREFIX};

/// File-backed profile store rooted at a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for_key(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ProfileStore for FileStore {
    fn write(&mut self, profile: &ClientProfile) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(profile)?;
        fs::write(self.path_for_key(&profile_key(&profile.id)), raw)?;
        Ok(())
    }

    fn read_one(&self, id: &ProfileId) -> Result<Option<ClientProfile>, StoreError> {
        let key = profile_key(id);
        match fs::read_to_string(self.path_for_key(&key)) {
            Ok(raw) => Ok(parse_slot(&key, &raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn read_all(&self) -> Result<Vec<ClientProfile>, StoreError> {
        let mut profiles = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            let Some(key) = name.strip_suffix(".json") else {
                continue;
            };
            if !key.starts_with(KEY_PREFIX) {
                continue;
            }
            match fs::read_to_string(entry.path()) {
                Ok(raw) => {
                    if let Some(profile) = parse_slot(key, &raw) {
                        profiles.push(profile);
                    }
                }
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "skipping unreadable profile record");
                }
            }
        }
        sort_newest_first(&mut profiles);
        Ok(profiles)
    }
}
