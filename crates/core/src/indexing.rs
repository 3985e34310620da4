//! Canonical row ordering for region codes.
//!
//! [`RegionCodeIndex`] assigns each distinct region code a row number in
//! order of first appearance: columns are scanned in the order supplied,
//! and each column's `regions` in array order. The same ordered input
//! always yields the same index.

use indexmap::IndexSet;

use crate::types::{NamedColumn, RegionCode};

/// Ordered set of unique region codes. A code's position is its row in
/// the dense table for the current invocation.
#[derive(Debug, Clone, Default)]
pub struct RegionCodeIndex {
    codes: IndexSet<RegionCode>,
}

impl RegionCodeIndex {
    /// Scan `columns` in order and index every region code they mention.
    pub fn build(columns: &[NamedColumn]) -> Self {
        let mut index = Self::default();
        for column in columns {
            for region in &column.dataset.regions {
                index.insert(region);
            }
        }
        index
    }

    /// Return the row for `code`, appending it if it has not been seen.
    pub fn insert(&mut self, code: &str) -> usize {
        if let Some(row) = self.codes.get_index_of(code) {
            return row;
        }
        self.codes.insert_full(code.to_owned()).0
    }

    /// Row number of `code`, if indexed.
    pub fn row_of(&self, code: &str) -> Option<usize> {
        self.codes.get_index_of(code)
    }

    /// Region code at `row`.
    pub fn code_at(&self, row: usize) -> Option<&str> {
        self.codes.get_index(row).map(String::as_str)
    }

    /// Indexed codes in row order.
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Consume the index, returning the codes in row order.
    pub fn into_codes(self) -> Vec<RegionCode> {
        self.codes.into_iter().collect()
    }
}
