//! Record abstraction shared by every collection

use crate::error::{CrewboardError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The editable payload of a record: everything except `id` and `slug`.
pub trait Draft: Clone {
    /// Human-readable field the slug is derived from (title or name).
    fn name_field(&self) -> &str;

    /// Check that required fields are present before any mutation.
    fn validate(&self) -> Result<()>;
}

/// A stored entity with a stable id and a derived slug.
pub trait Record: Serialize + DeserializeOwned + Clone + PartialEq {
    type Draft: Draft;

    /// Storage key holding the serialized collection.
    const STORAGE_KEY: &'static str;

    /// Human name for messages ("job", "airline", "blog post").
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn slug(&self) -> &str;

    /// Build a record from a draft; the caller supplies id and slug.
    fn from_draft(id: String, slug: String, draft: Self::Draft) -> Self;

    /// Recover the editable payload.
    fn to_draft(&self) -> Self::Draft;
}

/// Fail with a validation error when `value` is blank.
pub fn require(kind: &'static str, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CrewboardError::Validation {
            kind,
            message: format!("missing required field '{}'", field),
        });
    }
    Ok(())
}

/// Split newline-separated form input into a list, dropping blank lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
