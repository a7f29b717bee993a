use std::collections::HashMap;

use crate::error::TasteError;
use crate::profile::TasteProfile;

/// Fixed key the serialized profile lives under in the host's durable
/// key-value store.
pub const PROFILE_STORAGE_KEY: &str = "forkful.taste_profile.v1";

/// Explicit save boundary between the in-memory aggregator and whatever
/// storage the host provides.
///
/// The profile itself has no durability guarantee; the host decides when
/// to call `save` (typically after each mutation), and last write wins.
pub trait ProfileStore {
    /// Load the persisted profile, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<TasteProfile>, TasteError>;

    fn save(&mut self, profile: &TasteProfile) -> Result<(), TasteError>;

    /// Atomically replace the stored profile with defaults. Only invoked
    /// after an explicit user confirmation in the surrounding UI.
    fn reset(&mut self) -> Result<TasteProfile, TasteError>;
}

/// Key-value store backed by a plain map. Used in tests and by hosts that
/// keep the profile purely in memory.
#[derive(Default, Clone, Debug)]
pub struct MemoryProfileStore {
    entries: HashMap<String, String>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self) -> Result<Option<TasteProfile>, TasteError> {
        match self.entries.get(PROFILE_STORAGE_KEY) {
            Some(json) => Ok(Some(TasteProfile::from_json(json)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, profile: &TasteProfile) -> Result<(), TasteError> {
        let json = profile.to_json()?;
        self.entries.insert(PROFILE_STORAGE_KEY.to_string(), json);
        Ok(())
    }

    fn reset(&mut self) -> Result<TasteProfile, TasteError> {
        let fresh = TasteProfile::default();
        self.save(&fresh)?;
        Ok(fresh)
    }
}
