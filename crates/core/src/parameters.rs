//! Caller-facing parameters of one analysis invocation.
//!
//! Parameters usually arrive as JSON with camelCase keys. The `data`
//! object is parsed into an [`IndexMap`] so that document order becomes
//! the column order of the table.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{ColumnDataset, NamedColumn};

/// Inputs to a single "why is this region special" invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeParameters {
    /// Region type (boundary set) used to pick the region provider.
    pub region_type: String,

    /// The region to analyse. Accepts a JSON string or number.
    #[serde(deserialize_with = "string_or_number")]
    pub region: String,

    /// Whether the caller asked for the basic community profile
    /// characteristics. Carried for callers; not sent to the service.
    #[serde(default = "default_true")]
    pub include_basic_community_profile: bool,

    /// Additional characteristics keyed by column name, in column order.
    #[serde(default)]
    pub data: IndexMap<String, ColumnDataset>,
}

impl InvokeParameters {
    pub fn new(region_type: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            region_type: region_type.into(),
            region: region.into(),
            include_basic_community_profile: true,
            data: IndexMap::new(),
        }
    }

    /// Append a column. Re-adding an existing name replaces its data in
    /// place.
    pub fn with_column(mut self, name: impl Into<String>, dataset: ColumnDataset) -> Self {
        self.data.insert(name.into(), dataset);
        self
    }

    /// The `data` columns as an explicitly ordered list.
    pub fn columns(&self) -> Vec<NamedColumn> {
        self.data
            .iter()
            .map(|(name, dataset)| NamedColumn::new(name.clone(), dataset.clone()))
            .collect()
    }
}

fn default_true() -> bool {
    true
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
