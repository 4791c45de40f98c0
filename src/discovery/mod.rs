//! Boundary to the external content-discovery backend.

pub mod client;
pub mod types;

use crate::content::ContentRecord;
pub use types::DiscoveryRequest;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("discovery backend not configured (set POLYSCOUT_DISCOVERY_URL)")]
    NotConfigured,

    #[error("invalid discovery configuration: {0}")]
    InvalidConfig(String),

    #[error("discovery backend error ({code}): {message}")]
    Status { code: u16, message: String },

    #[error("discovery response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Finds content records for a crawl plan.
/// Implemented by `HttpDiscoveryClient` for production; mock implementations used in tests.
pub trait DiscoveryClient {
    async fn discover(
        &self,
        request: &DiscoveryRequest,
    ) -> Result<Vec<ContentRecord>, DiscoveryError>;
}
