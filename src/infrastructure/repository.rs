//! Board directory discovery and layout

use crate::error::{CrewboardError, Result};
use crate::infrastructure::storage::{FileStorage, BOARD_DIR};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the board root explicitly
pub const ROOT_ENV_VAR: &str = "CREWBOARD_ROOT";

/// A directory holding a `.crewboard/` data directory
#[derive(Debug, Clone)]
pub struct BoardRepository {
    pub root: PathBuf,
}

impl BoardRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        BoardRepository { root }
    }

    /// Find the board root.
    /// Checks CREWBOARD_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV_VAR) {
            let path = PathBuf::from(root_path);
            if Self::has_board_dir(&path) {
                return Ok(BoardRepository::new(path));
            } else {
                return Err(CrewboardError::Config(format!(
                    "{} is set to '{}' but no .crewboard directory found. \
                    Run 'crewboard init' in that directory or unset {}.",
                    ROOT_ENV_VAR,
                    path.display(),
                    ROOT_ENV_VAR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory with `.crewboard` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_board_dir(&current) {
                return Ok(BoardRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(CrewboardError::NotBoardDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_board_dir(path: &Path) -> bool {
        path.join(BOARD_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_board_dir(&self.root)
    }

    /// Create the `.crewboard` directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let board_dir = self.root.join(BOARD_DIR);

        if board_dir.exists() {
            return Err(CrewboardError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&board_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Key-value storage living in this board's data directory
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.root)
    }
}
