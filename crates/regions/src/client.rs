//! Region provider lookup backed by a region-mapping definitions URL.
//!
//! Each [`resolve`](RegionProviderResolver::resolve) call performs one
//! `GET` of the definitions document and searches it. Nothing is cached
//! between calls.

use async_trait::async_trait;

use crate::provider::{RegionProvider, RegionProviderList};
use crate::resolver::{RegionProviderError, RegionProviderResolver};

/// HTTP source of region provider definitions.
pub struct RegionMappingClient {
    client: reqwest::Client,
    definitions_url: String,
}

impl RegionMappingClient {
    /// * `definitions_url` - full URL of the region-mapping JSON document.
    pub fn new(definitions_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            definitions_url,
        }
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, definitions_url: String) -> Self {
        Self {
            client,
            definitions_url,
        }
    }

    pub fn definitions_url(&self) -> &str {
        &self.definitions_url
    }

    /// Download and parse the current provider list.
    pub async fn fetch_list(&self) -> Result<RegionProviderList, RegionProviderError> {
        let response = self.client.get(&self.definitions_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                url = %self.definitions_url,
                status = status.as_u16(),
                "Region mapping request rejected"
            );
            return Err(RegionProviderError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        RegionProviderList::from_json(&body)
    }
}

#[async_trait]
impl RegionProviderResolver for RegionMappingClient {
    async fn resolve(&self, region_type: &str) -> Result<RegionProvider, RegionProviderError> {
        let list = self.fetch_list().await?;
        tracing::debug!(
            url = %self.definitions_url,
            providers = list.len(),
            "Loaded region mapping definitions"
        );
        list.resolve(region_type).await
    }
}
