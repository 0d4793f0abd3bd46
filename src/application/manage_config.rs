//! Config management use case

use crate::domain::SlugPolicy;
use crate::error::{CrewboardError, Result};
use crate::infrastructure::{BoardRepository, Config, CorruptDataPolicy};
use std::str::FromStr;

const VALID_KEYS: &str = "admin_passphrase, slug_policy, on_corrupt_data, created";

/// Service for reading and changing board configuration
pub struct ConfigService {
    repository: BoardRepository,
}

impl ConfigService {
    pub fn new(repository: BoardRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "admin_passphrase" => Ok(config.admin_passphrase),
            "slug_policy" => Ok(config.slug_policy.to_string()),
            "on_corrupt_data" => Ok(config.on_corrupt_data.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(CrewboardError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "admin_passphrase" => {
                if value.is_empty() {
                    return Err(CrewboardError::Config(
                        "admin_passphrase cannot be empty".to_string(),
                    ));
                }
                config.admin_passphrase = value.to_string();
            }
            "slug_policy" => {
                config.slug_policy = SlugPolicy::from_str(value).map_err(CrewboardError::Config)?;
            }
            "on_corrupt_data" => {
                config.on_corrupt_data =
                    CorruptDataPolicy::from_str(value).map_err(CrewboardError::Config)?;
            }
            "created" => {
                return Err(CrewboardError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(CrewboardError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.repository.save_config(&config)
    }

    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
