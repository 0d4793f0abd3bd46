//! Configuration management

use crate::domain::SlugPolicy;
use crate::error::{CrewboardError, Result};
use crate::infrastructure::storage::{CorruptDataPolicy, BOARD_DIR};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Passphrase written into new boards.
///
/// The admin gate only hides admin commands from casual use. Anyone who can
/// read `.crewboard/config.toml` can read this value.
pub const DEFAULT_ADMIN_PASSPHRASE: &str = "Airteam1@";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub admin_passphrase: String,
    #[serde(default)]
    pub slug_policy: SlugPolicy,
    #[serde(default)]
    pub on_corrupt_data: CorruptDataPolicy,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            admin_passphrase: DEFAULT_ADMIN_PASSPHRASE.to_string(),
            slug_policy: SlugPolicy::default(),
            on_corrupt_data: CorruptDataPolicy::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .crewboard/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(BOARD_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CrewboardError::NotBoardDirectory(path.to_path_buf())
            } else {
                CrewboardError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .crewboard/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let board_dir = path.join(BOARD_DIR);
        let config_path = board_dir.join("config.toml");

        if !board_dir.exists() {
            fs::create_dir(&board_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
