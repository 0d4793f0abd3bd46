//! Error types for crewboard

use std::path::PathBuf;
use thiserror::Error;

/// Message shown for any bulk import failure. Import is all-or-nothing, so
/// the user only ever sees this one line.
pub const IMPORT_FAILED_MESSAGE: &str =
    "Failed to parse blog posts. Please check the JSON format.";

/// Main error type for crewboard application
#[derive(Debug, Error)]
pub enum CrewboardError {
    #[error("Not a crewboard directory: {0}")]
    NotBoardDirectory(PathBuf),

    #[error("No {kind} found matching '{key}'")]
    RecordNotFound { kind: &'static str, key: String },

    #[error("Invalid {kind}: {message}")]
    Validation { kind: &'static str, message: String },

    #[error("Slug already in use: {0}")]
    SlugConflict(String),

    #[error("Stored data for '{key}' is corrupt: {message}")]
    CorruptData { key: String, message: String },

    #[error("Failed to parse blog posts. Please check the JSON format.")]
    Import(String),

    #[error("Admin area is locked")]
    AdminLocked,

    #[error("Invalid access code")]
    InvalidAccessCode,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CrewboardError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CrewboardError::NotBoardDirectory(_) => 2,
            CrewboardError::RecordNotFound { .. } => 3,
            CrewboardError::Validation { .. } | CrewboardError::SlugConflict(_) => 4,
            CrewboardError::Import(_) => 5,
            CrewboardError::AdminLocked | CrewboardError::InvalidAccessCode => 6,
            CrewboardError::CorruptData { .. } => 7,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CrewboardError::NotBoardDirectory(path) => {
                format!(
                    "Not a crewboard directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'crewboard init' in this directory to create a new board\n\
                    • Navigate to an existing crewboard directory\n\
                    • Set CREWBOARD_ROOT environment variable to your board path",
                    path.display()
                )
            }
            CrewboardError::RecordNotFound { kind, key } => {
                format!(
                    "No {} found matching '{}'\n\n\
                    Suggestions:\n\
                    • Records can be looked up by slug or by id\n\
                    • Use 'crewboard {} list' to see what exists",
                    kind,
                    key,
                    command_for_kind(kind)
                )
            }
            CrewboardError::AdminLocked => "Admin area is locked\n\n\
                Suggestions:\n\
                • Unlock it with 'crewboard admin login <code>'\n\
                • The passphrase lives in .crewboard/config.toml (admin_passphrase)"
                .to_string(),
            CrewboardError::SlugConflict(slug) => {
                format!(
                    "Slug already in use: {}\n\n\
                    Suggestions:\n\
                    • Pick a different title or name\n\
                    • Allow duplicates: crewboard config slug_policy shadow\n\
                    • Disambiguate automatically: crewboard config slug_policy suffix",
                    slug
                )
            }
            CrewboardError::CorruptData { key, message } => {
                format!(
                    "Stored data for '{}' is corrupt: {}\n\n\
                    Suggestions:\n\
                    • Fix or remove .crewboard/{}.json\n\
                    • Fall back to seed data instead: crewboard config on_corrupt_data fallback",
                    key, message, key
                )
            }
            _ => self.to_string(),
        }
    }
}

fn command_for_kind(kind: &str) -> String {
    match kind {
        "blog post" => "blog".to_string(),
        other => format!("{}s", other),
    }
}

/// Result type using CrewboardError
pub type Result<T> = std::result::Result<T, CrewboardError>;
