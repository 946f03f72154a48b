use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::{StoreError, load_json, save_json};
use crate::paths::StorePaths;

pub const HISTORY_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub alias: String,
    pub url: String,
    pub played_at: DateTime<Local>,
    pub video_mode: bool,
}

/// On-disk schema of history.json. `recent` is most-recent-first, ordered
/// strictly by insertion, and never longer than `HISTORY_LIMIT` after a
/// mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    #[serde(default)]
    pub recent: Vec<HistoryEntry>,
}

/// Bounded recent-playback log, same load-modify-store discipline as
/// `AliasStore` and independent of it.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(paths: &StorePaths) -> Self {
        Self {
            path: paths.history.clone(),
        }
    }

    /// Absent file yields an empty log.
    pub fn load(&self) -> Result<HistoryLog, StoreError> {
        load_json(&self.path)
    }

    pub fn save(&self, log: &HistoryLog) -> Result<(), StoreError> {
        save_json(&self.path, log)
    }

    /// Prepend a playback event stamped with the local clock, keeping only
    /// the newest `HISTORY_LIMIT` entries.
    pub fn record(&self, alias: &str, url: &str, video_mode: bool) -> Result<(), StoreError> {
        let mut log = self.load()?;
        log.recent.insert(
            0,
            HistoryEntry {
                alias: alias.to_string(),
                url: url.to_string(),
                played_at: Local::now(),
                video_mode,
            },
        );
        log.recent.truncate(HISTORY_LIMIT);
        self.save(&log)
    }

    /// 0 to `HISTORY_LIMIT` entries, most-recent-first.
    pub fn recent(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(self.load()?.recent)
    }
}
