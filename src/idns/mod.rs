//! Intelligent DNS zone API: wire types, the HTTP client and the seam the workflow depends on.

pub mod client;
pub mod types;

use async_trait::async_trait;

use crate::error::HelperError;
use types::{ZoneCreate, ZoneResult};

/// The single remote operation this helper consumes.
#[async_trait]
pub trait ZoneApi: Send + Sync {
    /// Create a zone and return the first record of the results envelope.
    async fn create_zone(&self, zone: &ZoneCreate) -> Result<ZoneResult, HelperError>;
}
