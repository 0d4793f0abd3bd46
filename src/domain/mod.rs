//! Domain layer - Records, slugs, seed data and read-side filters

pub mod airline;
pub mod blog;
pub mod filter;
pub mod job;
pub mod record;
pub mod seed;
pub mod slug;

pub use airline::{Airline, AirlineDraft};
pub use blog::{BlogDraft, BlogPost};
pub use filter::JobFilter;
pub use job::{Job, JobDraft};
pub use record::{Draft, Record};
pub use seed::Seeded;
pub use slug::{slugify, IdGenerator, RandomIds, SlugPolicy};
