//! Blog post authoring and bulk import

use crate::application::store::CollectionStore;
use crate::domain::{BlogDraft, BlogPost};
use crate::error::{CrewboardError, Result};
use tracing::warn;

/// Publish a single post after applying authoring defaults.
pub fn publish_post(store: &mut CollectionStore<BlogPost>, draft: BlogDraft) -> Result<String> {
    let post = store.add(draft.prepare())?;
    Ok(post.id.clone())
}

/// Import a pasted JSON array of posts.
///
/// Either every post is added or none is. Any failure, whether malformed
/// JSON or a post missing a required field, is reported as one
/// [`CrewboardError::Import`] so the admin sees a single generic message.
pub fn import_posts(store: &mut CollectionStore<BlogPost>, text: &str) -> Result<usize> {
    let drafts: Vec<BlogDraft> = serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "bulk import payload is not a JSON array of posts");
        CrewboardError::Import(e.to_string())
    })?;

    let drafts: Vec<BlogDraft> = drafts.into_iter().map(BlogDraft::prepare).collect();

    store.add_many(drafts).map_err(|e| match e {
        CrewboardError::Validation { .. } | CrewboardError::SlugConflict(_) => {
            warn!(error = %e, "bulk import rejected");
            CrewboardError::Import(e.to_string())
        }
        other => other,
    })
}
