//! Job listings

use crate::domain::record::{require, Draft, Record};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Avatar service used when a listing has no logo of its own.
pub const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/initials/svg?seed=";

/// Initials avatar URL for an organisation name.
pub fn avatar_url(seed: &str) -> String {
    format!("{}{}", AVATAR_BASE_URL, urlencoding::encode(seed))
}

/// A cabin-crew vacancy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    pub airline: String,
    pub location: String,
    pub contract_type: String,
    pub salary: String,
    pub deadline: String,
    pub logo_url: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub how_to_apply: String,
}

/// Job fields as submitted by the posting form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDraft {
    pub title: String,
    pub airline: String,
    pub location: String,
    pub contract_type: String,
    pub salary: String,
    pub deadline: String,
    pub logo_url: String,
    pub requirements: Vec<String>,
    pub description: String,
    pub qualifications: Vec<String>,
    pub benefits: Vec<String>,
    pub how_to_apply: String,
}

impl JobDraft {
    /// Fill in form defaults: an empty logo becomes the airline's avatar.
    pub fn prepare(mut self) -> Self {
        if self.logo_url.trim().is_empty() {
            self.logo_url = avatar_url(&self.airline);
        }
        self
    }

    /// Drop a generated logo when the airline it was made for has changed,
    /// so `prepare` builds a new one. Hand-picked logos are kept.
    pub fn refresh_derived(mut self, before: &JobDraft) -> Self {
        let generated = before.logo_url == avatar_url(&before.airline);
        if generated && self.logo_url == before.logo_url && self.airline != before.airline {
            self.logo_url.clear();
        }
        self
    }
}

impl Draft for JobDraft {
    fn name_field(&self) -> &str {
        &self.title
    }

    fn validate(&self) -> Result<()> {
        require(Job::KIND, "title", &self.title)?;
        require(Job::KIND, "airline", &self.airline)
    }
}

impl Record for Job {
    type Draft = JobDraft;

    const STORAGE_KEY: &'static str = "jobs";
    const KIND: &'static str = "job";

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn from_draft(id: String, slug: String, draft: JobDraft) -> Self {
        Job {
            id,
            slug,
            title: draft.title,
            airline: draft.airline,
            location: draft.location,
            contract_type: draft.contract_type,
            salary: draft.salary,
            deadline: draft.deadline,
            logo_url: draft.logo_url,
            requirements: draft.requirements,
            description: draft.description,
            qualifications: draft.qualifications,
            benefits: draft.benefits,
            how_to_apply: draft.how_to_apply,
        }
    }

    fn to_draft(&self) -> JobDraft {
        JobDraft {
            title: self.title.clone(),
            airline: self.airline.clone(),
            location: self.location.clone(),
            contract_type: self.contract_type.clone(),
            salary: self.salary.clone(),
            deadline: self.deadline.clone(),
            logo_url: self.logo_url.clone(),
            requirements: self.requirements.clone(),
            description: self.description.clone(),
            qualifications: self.qualifications.clone(),
            benefits: self.benefits.clone(),
            how_to_apply: self.how_to_apply.clone(),
        }
    }
}
