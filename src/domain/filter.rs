//! Read-side filters for listing screens
//!
//! Every filter here works on a snapshot borrowed from a store and returns
//! references into it. Nothing in this module mutates a collection.

use crate::domain::{Airline, BlogPost, Job};

/// Job filter bar selections. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Case-insensitive substring of the airline name
    pub airline_type: Option<String>,
    /// Exact contract type (e.g. "Full-time")
    pub contract_type: Option<String>,
    /// Exact location (e.g. "Dubai, UAE")
    pub location: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(airline_type) = &self.airline_type {
            if !contains_ignore_case(&job.airline, airline_type) {
                return false;
            }
        }
        if let Some(contract) = &self.contract_type {
            if &job.contract_type != contract {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if &job.location != location {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether the job's title or airline contains `query` (case-insensitive)
pub fn job_matches_search(job: &Job, query: &str) -> bool {
    contains_ignore_case(&job.title, query) || contains_ignore_case(&job.airline, query)
}

/// Admin search over job title or airline.
pub fn search_jobs<'a>(jobs: &'a [Job], query: &str) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|job| job_matches_search(job, query))
        .collect()
}

/// Admin search over airline name or headquarters.
pub fn search_airlines<'a>(airlines: &'a [Airline], query: &str) -> Vec<&'a Airline> {
    airlines
        .iter()
        .filter(|airline| {
            contains_ignore_case(&airline.name, query)
                || contains_ignore_case(&airline.headquarters, query)
        })
        .collect()
}

/// Posts carrying `tag` (case-insensitive).
pub fn posts_with_tag<'a>(posts: &'a [BlogPost], tag: &str) -> Vec<&'a BlogPost> {
    let tag = tag.to_lowercase();
    posts
        .iter()
        .filter(|post| post.tags.iter().any(|t| t.to_lowercase() == tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::Seeded;

    fn jobs() -> Vec<Job> {
        let mut jobs = Job::seed();
        let mut second = jobs[0].clone();
        second.id = "2".to_string();
        second.title = "Purser".to_string();
        second.airline = "Emirates".to_string();
        second.location = "London, UK".to_string();
        second.contract_type = "Contract".to_string();
        jobs.push(second);
        jobs
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let jobs = jobs();
        assert_eq!(JobFilter::default().apply(&jobs).len(), 2);
    }

    #[test]
    fn test_airline_type_is_substring_match() {
        let jobs = jobs();
        let filter = JobFilter {
            airline_type: Some("skywings".to_string()),
            ..JobFilter::default()
        };
        let matched = filter.apply(&jobs);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "1");
    }

    #[test]
    fn test_contract_and_location_are_exact() {
        let jobs = jobs();
        let filter = JobFilter {
            contract_type: Some("Contract".to_string()),
            location: Some("London, UK".to_string()),
            ..JobFilter::default()
        };
        assert_eq!(filter.apply(&jobs).len(), 1);

        let filter = JobFilter {
            location: Some("london, uk".to_string()),
            ..JobFilter::default()
        };
        assert!(filter.apply(&jobs).is_empty());
    }

    #[test]
    fn test_filters_preserve_order_and_snapshot() {
        let jobs = jobs();
        let before = jobs.clone();
        let matched = search_jobs(&jobs, "");
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].id, "1");
        assert_eq!(jobs, before);
    }

    #[test]
    fn test_search_jobs_title_or_airline() {
        let jobs = jobs();
        assert_eq!(search_jobs(&jobs, "PURSER").len(), 1);
        assert_eq!(search_jobs(&jobs, "airlines").len(), 1);
        assert!(search_jobs(&jobs, "pilot").is_empty());
    }

    #[test]
    fn test_search_airlines_name_or_headquarters() {
        let airlines = Airline::seed();
        assert_eq!(search_airlines(&airlines, "dubai")[0].name, "Emirates");
        assert_eq!(search_airlines(&airlines, "virgin").len(), 1);
    }

    #[test]
    fn test_posts_with_tag() {
        let posts = BlogPost::seed();
        assert_eq!(posts_with_tag(&posts, "interview tips").len(), 1);
        assert!(posts_with_tag(&posts, "Interview").is_empty());
    }

    #[test]
    fn test_posts_with_tag_folds_accented_case() {
        let mut posts = BlogPost::seed();
        posts[0].tags = vec!["Éco Travel".to_string()];
        assert_eq!(posts_with_tag(&posts, "éco travel").len(), 1);
        assert_eq!(posts_with_tag(&posts, "ÉCO TRAVEL").len(), 1);
    }
}
