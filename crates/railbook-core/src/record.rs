//! Booking record data model.
//!
//! A `Record` is stored as a flat JSON object. The wire field names are fixed
//! (`fname`, `gender`, `place`, `class`, `status`) and must not change; the
//! Rust field names describe what each value means.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single train-booking entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Passenger name
    #[serde(rename = "fname")]
    pub name: String,

    /// Classifier such as "Male" or "Female"
    #[serde(rename = "gender")]
    pub category: String,

    /// Origin-destination descriptor (e.g., "Bangalore-Mysore")
    #[serde(rename = "place")]
    pub route: String,

    /// Service class (e.g., "AC", "Sleeper")
    #[serde(rename = "class")]
    pub tier: String,

    /// Lifecycle label (e.g., "Waiting list", "Confirmed")
    pub status: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        route: impl Into<String>,
        tier: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            route: route.into(),
            tier: tier.into(),
            status: status.into(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Encode as the stored JSON object.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode from stored bytes. Missing fields default to empty strings.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// One element of the `queryAllRecords` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "Key")]
    pub key: String,

    #[serde(rename = "Record")]
    pub record: Record,
}
