//! Initialize board use case

use crate::error::Result;
use crate::infrastructure::{BoardRepository, Config};
use std::fs;
use std::path::Path;
use tracing::info;

pub struct InitService;

impl InitService {
    /// Create `.crewboard/` with a default config at `path`.
    ///
    /// Collections are not written here; they start from seed data and are
    /// persisted by their first mutation.
    pub fn execute(path: &Path) -> Result<Config> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = BoardRepository::new(path.to_path_buf());
        repo.initialize()?;

        let config = Config::new();
        repo.save_config(&config)?;

        info!(path = %path.display(), "initialized board");
        Ok(config)
    }
}
