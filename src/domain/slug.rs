//! Slug and id generation

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

/// Length of generated record ids.
pub const ID_LENGTH: usize = 9;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn non_alphanumeric_run() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Derive a URL-friendly key from a human-readable field.
///
/// Lowercases the text, then collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen. Leading and trailing hyphens are kept.
///
/// # Examples
///
/// ```
/// use crewboard::domain::slug::slugify;
///
/// assert_eq!(slugify("Junior Cabin Crew"), "junior-cabin-crew");
/// assert_eq!(slugify("Virgin  Atlantic!"), "virgin-atlantic-");
/// ```
pub fn slugify(text: &str) -> String {
    non_alphanumeric_run()
        .replace_all(&text.to_lowercase(), "-")
        .into_owned()
}

/// What to do when a new or updated record would share a slug with another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlugPolicy {
    /// Accept duplicates; slug lookups resolve to the first match.
    #[default]
    Shadow,
    /// Refuse the mutation with a slug conflict error.
    Reject,
    /// Append `-2`, `-3`, ... until the slug is unique.
    Suffix,
}

impl FromStr for SlugPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shadow" => Ok(SlugPolicy::Shadow),
            "reject" => Ok(SlugPolicy::Reject),
            "suffix" => Ok(SlugPolicy::Suffix),
            _ => Err(format!(
                "Invalid slug policy: '{}'. Valid policies are: shadow, reject, suffix",
                s
            )),
        }
    }
}

impl std::fmt::Display for SlugPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SlugPolicy::Shadow => "shadow",
            SlugPolicy::Reject => "reject",
            SlugPolicy::Suffix => "suffix",
        };
        f.write_str(name)
    }
}

/// Returns the first `base`, `base-2`, `base-3`, ... not rejected by `taken`.
pub fn disambiguate(base: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_string();
    }
    let mut n = 2usize;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Source of fresh record ids (allows deterministic ids in tests)
pub trait IdGenerator {
    fn generate_id(&mut self) -> String;
}

/// Random short base-36 ids
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate_id(&mut self) -> String {
        let mut rng = rand::rng();
        (0..ID_LENGTH)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect()
    }
}

/// Hands out ids from a fixed list, then falls back to `id-<n>`.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    queued: Vec<String>,
    counter: usize,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue ids to be returned (in order) before the counter kicks in.
    pub fn with_queued<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queued: Vec<String> = ids.into_iter().map(Into::into).collect();
        queued.reverse();
        SequentialIds { queued, counter: 0 }
    }
}

impl IdGenerator for SequentialIds {
    fn generate_id(&mut self) -> String {
        if let Some(id) = self.queued.pop() {
            return id;
        }
        self.counter += 1;
        format!("id-{}", self.counter)
    }
}
