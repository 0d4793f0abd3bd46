//! Airline profiles

use crate::domain::job::avatar_url;
use crate::domain::record::{require, Draft, Record};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub logo: String,
    pub headquarters: String,
    pub fleet_size: u32,
    pub year_founded: u32,
    pub crew_count: u32,
    #[serde(default)]
    pub base_locations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AirlineDraft {
    pub name: String,
    pub logo: String,
    pub headquarters: String,
    pub fleet_size: u32,
    pub year_founded: u32,
    pub crew_count: u32,
    pub base_locations: Vec<String>,
}

impl AirlineDraft {
    /// Fill in form defaults: an empty logo becomes the name's avatar.
    pub fn prepare(mut self) -> Self {
        if self.logo.trim().is_empty() {
            self.logo = avatar_url(&self.name);
        }
        self
    }

    /// Drop a generated logo when the name it was made from has changed.
    pub fn refresh_derived(mut self, before: &AirlineDraft) -> Self {
        let generated = before.logo == avatar_url(&before.name);
        if generated && self.logo == before.logo && self.name != before.name {
            self.logo.clear();
        }
        self
    }
}

impl Draft for AirlineDraft {
    fn name_field(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<()> {
        require(Airline::KIND, "name", &self.name)
    }
}

impl Record for Airline {
    type Draft = AirlineDraft;

    const STORAGE_KEY: &'static str = "airlines";
    const KIND: &'static str = "airline";

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn from_draft(id: String, slug: String, draft: AirlineDraft) -> Self {
        Airline {
            id,
            name: draft.name,
            slug,
            logo: draft.logo,
            headquarters: draft.headquarters,
            fleet_size: draft.fleet_size,
            year_founded: draft.year_founded,
            crew_count: draft.crew_count,
            base_locations: draft.base_locations,
        }
    }

    fn to_draft(&self) -> AirlineDraft {
        AirlineDraft {
            name: self.name.clone(),
            logo: self.logo.clone(),
            headquarters: self.headquarters.clone(),
            fleet_size: self.fleet_size,
            year_founded: self.year_founded,
            crew_count: self.crew_count,
            base_locations: self.base_locations.clone(),
        }
    }
}
