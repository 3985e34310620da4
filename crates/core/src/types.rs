use serde::{Deserialize, Serialize};

/// Region codes are opaque strings (e.g. `"101021007"`).
pub type RegionCode = String;

/// One attribute's sparse region → value mapping, as two parallel
/// sequences.
///
/// `values[i]` belongs to `regions[i]`. A region may appear more than
/// once. A `null` value, or a value missing because `values` is shorter
/// than `regions`, is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnDataset {
    pub regions: Vec<RegionCode>,
    #[serde(default)]
    pub values: Vec<Option<f64>>,
}

impl ColumnDataset {
    /// Build a dataset where every region has a concrete value.
    pub fn new(regions: Vec<RegionCode>, values: Vec<f64>) -> Self {
        Self {
            regions,
            values: values.into_iter().map(Some).collect(),
        }
    }

    /// Iterate `(region, value)` pairs in array order.
    ///
    /// Yields one pair per region; regions without a matching value
    /// yield `None`. Trailing values without a region are ignored.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, region)| (region.as_str(), self.values.get(i).copied().flatten()))
    }
}

/// A dataset together with its column name.
///
/// Callers pass columns as an ordered slice of these; the slice order is
/// the column order of the resulting table.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedColumn {
    pub name: String,
    pub dataset: ColumnDataset,
}

impl NamedColumn {
    pub fn new(name: impl Into<String>, dataset: ColumnDataset) -> Self {
        Self {
            name: name.into(),
            dataset,
        }
    }
}

/// Column names of `columns`, in order.
pub fn column_names(columns: &[NamedColumn]) -> Vec<String> {
    columns.iter().map(|c| c.name.clone()).collect()
}
