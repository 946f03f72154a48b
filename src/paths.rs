use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const ALIASES_FILE: &str = "videos.json";
const HISTORY_FILE: &str = "history.json";

/// Resolved locations of the two backing files. Passed into the stores
/// explicitly instead of being recomputed from the environment, so tests can
/// point everything at a temporary directory.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub aliases: PathBuf,
    pub history: PathBuf,
}

impl StorePaths {
    pub fn resolve() -> Result<Self> {
        let base = dirs::config_dir().context("unable to resolve config directory")?;
        Ok(Self::in_dir(&base.join("tubemark")))
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self {
            aliases: dir.join(ALIASES_FILE),
            history: dir.join(HISTORY_FILE),
        }
    }
}
