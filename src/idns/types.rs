use serde::{Deserialize, Serialize};

use crate::error::HelperError;

// Used when creating a zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCreate {
    pub name: String,   // internal label, e.g. "example"
    pub domain: String, // "example.com"
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneResult {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ZoneEnvelope {
    pub results: Vec<ZoneResult>,
}

impl ZoneEnvelope {
    pub fn from_body(body: &str) -> Result<Self, HelperError> {
        Ok(serde_json::from_str(body)?)
    }

    /// First record of the envelope; the API returns the created zone there.
    pub fn into_first(self) -> Result<ZoneResult, HelperError> {
        self.results
            .into_iter()
            .next()
            .ok_or(HelperError::EmptyResults)
    }
}
