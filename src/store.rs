//! Configuration persistence
//!
//! The radio list lives in a single JSON file:
//! `{ "radios": [ { "rig_id": ..., "conn_type": ..., ... } ] }`.

use std::path::{Path, PathBuf};

use crate::domain::{ProfileCollection, RadioProfile, RigError, RigResult};

/// Config file used when nothing else is given
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Reads and writes the profile collection at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> RigResult<ProfileCollection> {
        let path = self.path.display();
        let json = std::fs::read_to_string(&self.path)
            .map_err(|e| RigError::Config(format!("Failed to read config '{path}': {e}")))?;
        let profiles: ProfileCollection = serde_json::from_str(&json)
            .map_err(|e| RigError::Config(format!("Failed to parse config '{path}': {e}")))?;
        log::info!("Loaded {} radio(s) from {path}", profiles.len());
        Ok(profiles)
    }

    pub fn save(&self, profiles: &ProfileCollection) -> RigResult<()> {
        let path = self.path.display();
        let json = serde_json::to_string_pretty(profiles)
            .map_err(|e| RigError::Config(format!("Serialization error: {e}")))?;
        std::fs::write(&self.path, json + "\n")
            .map_err(|e| RigError::Config(format!("Failed to write config '{path}': {e}")))?;
        log::debug!("Saved {} radio(s) to {path}", profiles.len());
        Ok(())
    }

    /// Append `profile` and persist the whole collection.
    ///
    /// The profile is stored exactly as given. On failure the collection is
    /// left as it was before the call.
    pub fn append_and_save(
        &self,
        profiles: &mut ProfileCollection,
        profile: RadioProfile,
    ) -> RigResult<()> {
        let mut updated = profiles.clone();
        updated.append(profile);
        self.save(&updated)?;
        *profiles = updated;
        Ok(())
    }
}
