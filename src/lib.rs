//! crewboard - Aviation careers job board for the terminal
//!
//! Job listings, airline profiles and a blog, each kept as a write-through
//! collection in a local `.crewboard/` directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::{CrewboardError, Result};
