//! Region provider descriptors and an in-memory provider list.
//!
//! Region-mapping documents have the shape
//! `{"regionWmsMap": {"<REGION_TYPE>": {"layerName": ..., "regionProp": ...}}}`.
//! The map key is the region type; definition order is preserved.

use std::path::Path;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::resolver::{RegionProviderError, RegionProviderResolver};

/// Descriptor for the provider of one region type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionProvider {
    /// Region type identifier, e.g. `"SA2"`. Taken from the map key when
    /// loaded from a region-mapping document.
    #[serde(default)]
    pub region_type: String,
    #[serde(default)]
    pub layer_name: Option<String>,
    #[serde(default)]
    pub server: Option<String>,
    /// Feature property holding the region code.
    #[serde(default)]
    pub region_prop: Option<String>,
    /// Alternative column names that identify this region type.
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RegionProvider {
    pub fn new(region_type: impl Into<String>) -> Self {
        Self {
            region_type: region_type.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegionMappingDocument {
    #[serde(default)]
    region_wms_map: IndexMap<String, RegionProvider>,
}

/// Ordered list of region providers.
#[derive(Debug, Clone, Default)]
pub struct RegionProviderList {
    providers: Vec<RegionProvider>,
}

impl RegionProviderList {
    pub fn new(providers: Vec<RegionProvider>) -> Self {
        Self { providers }
    }

    /// Parse a region-mapping JSON document.
    pub fn from_json(json: &str) -> Result<Self, RegionProviderError> {
        let document: RegionMappingDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    /// Read and parse a region-mapping JSON file.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, RegionProviderError> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    fn from_document(document: RegionMappingDocument) -> Self {
        let providers = document
            .region_wms_map
            .into_iter()
            .map(|(region_type, mut provider)| {
                provider.region_type = region_type;
                provider
            })
            .collect();
        Self { providers }
    }

    /// First provider whose region type equals `region_type` exactly.
    pub fn find(&self, region_type: &str) -> Option<&RegionProvider> {
        self.providers
            .iter()
            .find(|provider| provider.region_type == region_type)
    }

    pub fn providers(&self) -> &[RegionProvider] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl RegionProviderResolver for RegionProviderList {
    async fn resolve(&self, region_type: &str) -> Result<RegionProvider, RegionProviderError> {
        let provider = self.find(region_type).cloned();
        tracing::debug!(
            region_type,
            found = provider.is_some(),
            "Resolved region provider"
        );
        provider.ok_or_else(|| RegionProviderError::NotFound {
            region_type: region_type.to_owned(),
        })
    }
}
