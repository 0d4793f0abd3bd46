//! Application layer - Use cases and orchestration

pub mod admin;
pub mod board;
pub mod import;
pub mod init;
pub mod manage_config;
pub mod store;

pub use admin::AdminGate;
pub use board::Board;
pub use import::{import_posts, publish_post};
pub use init::InitService;
pub use manage_config::ConfigService;
pub use store::{CollectionStore, StoreOptions};
