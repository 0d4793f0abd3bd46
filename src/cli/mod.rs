//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{AdminCommand, AirlineCommand, BlogCommand, Cli, Commands, JobCommand};
pub use output::{
    format_airline, format_airline_list, format_job, format_job_list, format_post,
    format_post_list,
};
