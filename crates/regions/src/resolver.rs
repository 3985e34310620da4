use async_trait::async_trait;

use crate::provider::RegionProvider;

/// Errors from region provider lookup.
#[derive(Debug, thiserror::Error)]
pub enum RegionProviderError {
    /// No provider is registered for the requested region type.
    #[error("Could not find a matching region provider for region type \"{region_type}\"")]
    NotFound { region_type: String },

    /// Fetching the region-mapping definitions failed (network, DNS, etc.).
    #[error("Region mapping request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The region-mapping endpoint returned a non-2xx status code.
    #[error("Region mapping endpoint returned HTTP {0}")]
    HttpStatus(u16),

    /// Reading a local region-mapping file failed.
    #[error("Failed to read region mapping file: {0}")]
    Io(#[from] std::io::Error),

    /// The region-mapping document is not valid.
    #[error("Invalid region mapping document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Looks up the region provider for a region type.
#[async_trait]
pub trait RegionProviderResolver: Send + Sync {
    /// Return the provider whose region type equals `region_type`, or
    /// [`RegionProviderError::NotFound`].
    async fn resolve(&self, region_type: &str) -> Result<RegionProvider, RegionProviderError>;
}
