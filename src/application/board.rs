//! The board: every store of one session, built in a fixed order

use crate::application::admin::AdminGate;
use crate::application::store::{CollectionStore, StoreOptions};
use crate::domain::{Airline, BlogPost, Job, Seeded};
use crate::error::Result;
use crate::infrastructure::{BoardRepository, Config, KeyValueStore};
use std::rc::Rc;
use tracing::debug;

/// All collections plus the admin gate, sharing one storage backend.
///
/// Stores load jobs first, then blog posts, then airlines. There is exactly
/// one board per session and it is passed around by reference.
pub struct Board {
    pub jobs: CollectionStore<Job>,
    pub posts: CollectionStore<BlogPost>,
    pub airlines: CollectionStore<Airline>,
    config: Config,
    storage: Rc<dyn KeyValueStore>,
}

impl Board {
    /// Load every collection from `storage`, seeding the empty ones.
    pub fn load(storage: Rc<dyn KeyValueStore>, config: Config) -> Result<Self> {
        let options = StoreOptions {
            slug_policy: config.slug_policy,
            on_corrupt_data: config.on_corrupt_data,
        };

        let jobs = CollectionStore::load(storage.clone(), Job::seed(), options)?;
        let posts = CollectionStore::load(storage.clone(), BlogPost::seed(), options)?;
        let airlines = CollectionStore::load(storage.clone(), Airline::seed(), options)?;
        debug!(
            jobs = jobs.len(),
            posts = posts.len(),
            airlines = airlines.len(),
            "board loaded"
        );

        Ok(Board {
            jobs,
            posts,
            airlines,
            config,
            storage,
        })
    }

    /// Load the board stored in a discovered board directory
    pub fn open(repository: &BoardRepository) -> Result<Self> {
        let config = repository.load_config()?;
        Board::load(Rc::new(repository.storage()), config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn admin(&self) -> AdminGate {
        AdminGate::new(self.storage.clone(), self.config.admin_passphrase.clone())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("jobs", &self.jobs)
            .field("posts", &self.posts)
            .field("airlines", &self.airlines)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
