//! Farmer models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::parse_timestamp;

/// A farmer registered on the platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farmer {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    /// Six digit PIN the farmer uses over SMS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    /// Raw backend timestamp; see [`Farmer::created`]
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Farmer {
    /// Parsed creation time, `None` when missing or malformed
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

/// `GET /api/admin/farmers`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FarmersEnvelope {
    #[serde(default)]
    pub farmers: Vec<Farmer>,
}

/// `POST /api/admin/farmers`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    pub farmer: Farmer,
}

/// Count of farmers in a single region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionCount {
    pub region: String,
    pub count: usize,
}

/// The newest farmer as shown on the overview page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewestFarmer {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Roster-level aggregates for the overview page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterSummary {
    pub total_farmers: usize,
    pub newest_farmer: Option<NewestFarmer>,
    pub regions_active: usize,
    pub farmers_by_region: Vec<RegionCount>,
}

/// Region selection for the farmer table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionFilter {
    #[default]
    All,
    Only(String),
}

impl RegionFilter {
    pub fn matches(&self, farmer: &Farmer) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(region) => farmer.region.as_deref() == Some(region.as_str()),
        }
    }
}

impl From<&str> for RegionFilter {
    fn from(value: &str) -> Self {
        if value == "all" {
            RegionFilter::All
        } else {
            RegionFilter::Only(value.to_string())
        }
    }
}

impl From<Option<&str>> for RegionFilter {
    fn from(value: Option<&str>) -> Self {
        value.map(RegionFilter::from).unwrap_or_default()
    }
}
