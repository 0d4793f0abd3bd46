//! Generic write-through collection store
//!
//! One store owns one collection in memory and mirrors it to a single
//! storage key. Every successful mutation serializes and writes the whole
//! collection before returning. A failed write undoes the in-memory change.

use crate::domain::record::{Draft, Record};
use crate::domain::slug::{disambiguate, slugify, IdGenerator, RandomIds, SlugPolicy};
use crate::error::{CrewboardError, Result};
use crate::infrastructure::{CorruptDataPolicy, KeyValueStore};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Knobs shared by every store of a board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    pub slug_policy: SlugPolicy,
    pub on_corrupt_data: CorruptDataPolicy,
}

pub struct CollectionStore<R: Record> {
    records: Vec<R>,
    storage: Rc<dyn KeyValueStore>,
    ids: Box<dyn IdGenerator>,
    options: StoreOptions,
}

impl<R: Record> std::fmt::Debug for CollectionStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionStore")
            .field("key", &R::STORAGE_KEY)
            .field("records", &self.records.len())
            .field("options", &self.options)
            .finish()
    }
}

impl<R: Record> CollectionStore<R> {
    /// Load the collection stored under `R::STORAGE_KEY`.
    ///
    /// A missing key yields `seed`. An unparsable value yields `seed` under
    /// [`CorruptDataPolicy::Fallback`] and an error under
    /// [`CorruptDataPolicy::Error`]. Loading never writes.
    pub fn load(
        storage: Rc<dyn KeyValueStore>,
        seed: Vec<R>,
        options: StoreOptions,
    ) -> Result<Self> {
        let records = match storage.get(R::STORAGE_KEY)? {
            None => {
                debug!(key = R::STORAGE_KEY, "nothing stored, using seed data");
                seed
            }
            Some(raw) => match serde_json::from_str::<Vec<R>>(&raw) {
                Ok(records) => records,
                Err(e) => match options.on_corrupt_data {
                    CorruptDataPolicy::Fallback => {
                        warn!(
                            key = R::STORAGE_KEY,
                            error = %e,
                            "stored collection is unreadable, using seed data"
                        );
                        seed
                    }
                    CorruptDataPolicy::Error => {
                        return Err(CrewboardError::CorruptData {
                            key: R::STORAGE_KEY.to_string(),
                            message: e.to_string(),
                        })
                    }
                },
            },
        };

        Ok(CollectionStore {
            records,
            storage,
            ids: Box::new(RandomIds),
            options,
        })
    }

    /// Replace the id source (deterministic ids in tests)
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Current collection in insertion order
    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// First record with this slug. Later duplicates are shadowed.
    pub fn find_by_slug(&self, slug: &str) -> Option<&R> {
        self.records.iter().find(|r| r.slug() == slug)
    }

    /// Look up by slug, falling back to id.
    pub fn find(&self, key: &str) -> Option<&R> {
        self.find_by_slug(key).or_else(|| self.get(key))
    }

    /// Append a new record built from `draft` and persist.
    pub fn add(&mut self, draft: R::Draft) -> Result<&R> {
        draft.validate()?;
        let record = self.build(draft, None, &[])?;
        self.records.push(record);
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        let added = &self.records[self.records.len() - 1];
        info!(key = R::STORAGE_KEY, id = added.id(), slug = added.slug(), "added record");
        Ok(added)
    }

    /// Append several records with a single write. Every draft is validated
    /// (and slugs resolved) before anything changes, so on error the
    /// collection is untouched.
    pub fn add_many(&mut self, drafts: Vec<R::Draft>) -> Result<usize> {
        for draft in &drafts {
            draft.validate()?;
        }

        let mut pending: Vec<R> = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let record = self.build(draft, None, &pending)?;
            pending.push(record);
        }

        let count = pending.len();
        if count == 0 {
            return Ok(0);
        }
        let before = self.records.len();
        self.records.extend(pending);
        if let Err(e) = self.persist() {
            self.records.truncate(before);
            return Err(e);
        }

        info!(key = R::STORAGE_KEY, count, "added records");
        Ok(count)
    }

    /// Replace the payload of the record with `id`, keeping its id and
    /// position. Returns `false` (and writes nothing) if no record matches.
    pub fn update(&mut self, id: &str, draft: R::Draft) -> Result<bool> {
        draft.validate()?;
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            debug!(key = R::STORAGE_KEY, id, "update skipped, no such record");
            return Ok(false);
        };

        let record = self.build(draft, Some(index), &[])?;
        let previous = std::mem::replace(&mut self.records[index], record);
        if let Err(e) = self.persist() {
            self.records[index] = previous;
            return Err(e);
        }

        info!(key = R::STORAGE_KEY, id, "updated record");
        Ok(true)
    }

    /// Remove the first record with `id`. Returns `false` (and writes
    /// nothing) if no record matches, so repeated deletes are harmless.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            debug!(key = R::STORAGE_KEY, id, "delete skipped, no such record");
            return Ok(false);
        };

        let removed = self.records.remove(index);
        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(e);
        }

        info!(key = R::STORAGE_KEY, id, "deleted record");
        Ok(true)
    }

    /// Build a record for `draft`. `replacing` is the index being updated
    /// (it keeps its id and does not conflict with its own slug); `pending`
    /// holds records from the same batch that are not yet in the collection.
    fn build(&mut self, draft: R::Draft, replacing: Option<usize>, pending: &[R]) -> Result<R> {
        let id = match replacing {
            Some(index) => self.records[index].id().to_string(),
            None => self.fresh_id(pending),
        };

        let base = slugify(draft.name_field());
        let records = &self.records;
        let taken = |slug: &str| {
            records
                .iter()
                .enumerate()
                .any(|(i, r)| Some(i) != replacing && r.slug() == slug)
                || pending.iter().any(|r| r.slug() == slug)
        };

        let slug = match self.options.slug_policy {
            SlugPolicy::Shadow => base,
            SlugPolicy::Reject => {
                if taken(&base) {
                    return Err(CrewboardError::SlugConflict(base));
                }
                base
            }
            SlugPolicy::Suffix => disambiguate(&base, taken),
        };

        Ok(R::from_draft(id, slug, draft))
    }

    fn fresh_id(&mut self, pending: &[R]) -> String {
        loop {
            let id = self.ids.generate_id();
            let clash = self
                .records
                .iter()
                .chain(pending.iter())
                .any(|r| r.id() == id);
            if !clash {
                return id;
            }
            debug!(key = R::STORAGE_KEY, id = %id, "generated id already in use, retrying");
        }
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string(&self.records)?;
        self.storage.set(R::STORAGE_KEY, &serialized)
    }
}
