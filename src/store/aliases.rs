use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{StoreError, load_json, save_json};
use crate::paths::StorePaths;

/// On-disk schema of videos.json.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AliasSet {
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Alias -> URL mapping backed by a single JSON file.
///
/// Every mutation is a fresh load-modify-store cycle; no state survives the
/// process and no file locking is taken, so two concurrent invocations racing
/// on the file can lose an update.
pub struct AliasStore {
    path: PathBuf,
}

impl AliasStore {
    pub fn new(paths: &StorePaths) -> Self {
        Self {
            path: paths.aliases.clone(),
        }
    }

    /// Absent file yields an empty set.
    pub fn load(&self) -> Result<AliasSet, StoreError> {
        load_json(&self.path)
    }

    pub fn save(&self, set: &AliasSet) -> Result<(), StoreError> {
        save_json(&self.path, set)
    }

    /// Insert or silently overwrite the URL for `alias`.
    pub fn add(&self, alias: &str, url: &str) -> Result<(), StoreError> {
        let mut set = self.load()?;
        set.aliases.insert(alias.to_string(), url.to_string());
        self.save(&set)
    }

    pub fn remove(&self, alias: &str) -> Result<(), StoreError> {
        let mut set = self.load()?;
        if set.aliases.remove(alias).is_none() {
            return Err(StoreError::NotFound {
                alias: alias.to_string(),
            });
        }
        self.save(&set)
    }

    pub fn resolve(&self, alias: &str) -> Result<String, StoreError> {
        let set = self.load()?;
        set.aliases
            .get(alias)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                alias: alias.to_string(),
            })
    }

    pub fn list_all(&self) -> Result<AliasSet, StoreError> {
        self.load()
    }
}
