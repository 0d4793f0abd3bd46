//! CLI command definitions

use crate::domain::record::split_lines;
use crate::domain::{AirlineDraft, BlogDraft, JobDraft, JobFilter};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "crewboard")]
#[command(about = "Aviation careers job board: jobs, airlines and a blog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// More log output (-v for info, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new board
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Cabin crew job listings
    Jobs {
        #[command(subcommand)]
        command: JobCommand,
    },

    /// Airline profiles
    Airlines {
        #[command(subcommand)]
        command: AirlineCommand,
    },

    /// Blog posts
    Blog {
        #[command(subcommand)]
        command: BlogCommand,
    },

    /// Unlock or lock the admin commands
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum JobCommand {
    /// List jobs, optionally filtered
    List {
        /// Airline name contains this text
        #[arg(long)]
        airline: Option<String>,

        /// Exact contract type (e.g. Full-time)
        #[arg(long)]
        contract: Option<String>,

        /// Exact location (e.g. "Dubai, UAE")
        #[arg(long)]
        location: Option<String>,

        /// Title or airline contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one job by slug or id
    Show { key: String },

    /// Post a new job (admin)
    Add(JobArgs),

    /// Edit a job (admin); omitted fields keep their current value
    Update {
        id: String,
        #[command(flatten)]
        fields: JobArgs,
    },

    /// Delete a job (admin)
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum AirlineCommand {
    /// List airlines
    List {
        /// Name or headquarters contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one airline by slug or id
    Show { key: String },

    /// Add an airline (admin)
    Add(AirlineArgs),

    /// Edit an airline (admin); omitted fields keep their current value
    Update {
        id: String,
        #[command(flatten)]
        fields: AirlineArgs,
    },

    /// Delete an airline (admin)
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum BlogCommand {
    /// List posts
    List {
        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show one post by slug or id
    Show { key: String },

    /// Write a new post (admin)
    Add(BlogArgs),

    /// Edit a post (admin); omitted fields keep their current value
    Update {
        id: String,
        #[command(flatten)]
        fields: BlogArgs,
    },

    /// Delete a post (admin)
    Delete { id: String },

    /// Import a JSON array of posts from a file, or '-' for stdin (admin)
    Import { file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Unlock with the shared passphrase
    Login { code: String },

    /// Lock the admin commands again
    Logout,

    /// Show whether the admin commands are unlocked
    Status,
}

/// Job form fields. List fields may be repeated or contain newlines.
#[derive(Args, Debug, Default)]
pub struct JobArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub airline: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long = "contract")]
    pub contract_type: Option<String>,
    #[arg(long)]
    pub salary: Option<String>,
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long)]
    pub logo_url: Option<String>,
    #[arg(long = "requirement")]
    pub requirements: Vec<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long = "qualification")]
    pub qualifications: Vec<String>,
    #[arg(long = "benefit")]
    pub benefits: Vec<String>,
    #[arg(long)]
    pub how_to_apply: Option<String>,
}

impl JobArgs {
    /// Overlay the given fields onto `draft`
    pub fn apply(self, mut draft: JobDraft) -> JobDraft {
        overlay(&mut draft.title, self.title);
        overlay(&mut draft.airline, self.airline);
        overlay(&mut draft.location, self.location);
        overlay(&mut draft.contract_type, self.contract_type);
        overlay(&mut draft.salary, self.salary);
        overlay(&mut draft.deadline, self.deadline);
        overlay(&mut draft.logo_url, self.logo_url);
        overlay_list(&mut draft.requirements, self.requirements);
        overlay(&mut draft.description, self.description);
        overlay_list(&mut draft.qualifications, self.qualifications);
        overlay_list(&mut draft.benefits, self.benefits);
        overlay(&mut draft.how_to_apply, self.how_to_apply);
        draft
    }
}

#[derive(Args, Debug, Default)]
pub struct AirlineArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub logo: Option<String>,
    #[arg(long)]
    pub headquarters: Option<String>,
    #[arg(long)]
    pub fleet_size: Option<u32>,
    #[arg(long)]
    pub year_founded: Option<u32>,
    #[arg(long)]
    pub crew_count: Option<u32>,
    #[arg(long = "base")]
    pub base_locations: Vec<String>,
}

impl AirlineArgs {
    pub fn apply(self, mut draft: AirlineDraft) -> AirlineDraft {
        overlay(&mut draft.name, self.name);
        overlay(&mut draft.logo, self.logo);
        overlay(&mut draft.headquarters, self.headquarters);
        if let Some(n) = self.fleet_size {
            draft.fleet_size = n;
        }
        if let Some(n) = self.year_founded {
            draft.year_founded = n;
        }
        if let Some(n) = self.crew_count {
            draft.crew_count = n;
        }
        overlay_list(&mut draft.base_locations, self.base_locations);
        draft
    }
}

#[derive(Args, Debug, Default)]
pub struct BlogArgs {
    #[arg(long)]
    pub title: Option<String>,
    /// Post body (HTML or Markdown)
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,
    /// Read the post body from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub excerpt: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long)]
    pub image_url: Option<String>,
}

impl BlogArgs {
    /// Overlay the given fields onto `draft`. `content` is the already
    /// resolved body (from `--content` or `--content-file`).
    pub fn apply(self, content: Option<String>, mut draft: BlogDraft) -> BlogDraft {
        overlay(&mut draft.title, self.title);
        overlay(&mut draft.content, content);
        overlay(&mut draft.author, self.author);
        overlay(&mut draft.excerpt, self.excerpt);
        overlay(&mut draft.date, self.date);
        if !self.tags.is_empty() {
            draft.tags = self
                .tags
                .iter()
                .flat_map(|t| t.split(','))
                .map(str::to_string)
                .collect();
        }
        overlay(&mut draft.image_url, self.image_url);
        draft
    }
}

fn overlay(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn overlay_list(field: &mut Vec<String>, values: Vec<String>) {
    if !values.is_empty() {
        *field = values.iter().flat_map(|v| split_lines(v)).collect();
    }
}

/// Build the job filter bar selection from list flags
pub fn job_filter(
    airline: Option<String>,
    contract: Option<String>,
    location: Option<String>,
) -> JobFilter {
    JobFilter {
        airline_type: airline,
        contract_type: contract,
        location,
    }
}
