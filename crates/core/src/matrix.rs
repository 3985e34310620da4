//! Dense row-major table built from sparse columns.
//!
//! The table is allocated up front at `regions × columns` with every cell
//! set to [`DEFAULT_CELL_VALUE`], then filled by a single scan of the
//! columns. A cell that no column writes keeps the default.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::CoreError;
use crate::indexing::RegionCodeIndex;
use crate::types::NamedColumn;

/// Value of a cell with no data, and of a value that is zero, null, NaN
/// or infinite.
///
/// The job service cannot tell "absent" from "zero"; both are sent as
/// `0.0`.
pub const DEFAULT_CELL_VALUE: f64 = 0.0;

/// Fully populated row-major matrix. Rows follow the region index,
/// columns follow the caller's column order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl DenseMatrix {
    /// Allocate a `rows × cols` matrix filled with [`DEFAULT_CELL_VALUE`].
    pub fn filled(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![DEFAULT_CELL_VALUE; rows * cols],
        }
    }

    /// Build the table for `columns` using the row order of `index`.
    ///
    /// Values are written unconditionally in scan order, so a region
    /// repeated within one column keeps its last value.
    pub fn build(columns: &[NamedColumn], index: &RegionCodeIndex) -> Result<Self, CoreError> {
        let mut matrix = Self::filled(index.len(), columns.len());

        for (col, column) in columns.iter().enumerate() {
            for (region, value) in column.dataset.pairs() {
                let row = index
                    .row_of(region)
                    .ok_or_else(|| CoreError::UnindexedRegion {
                        column: column.name.clone(),
                        code: region.to_owned(),
                    })?;
                matrix.set(row, col, cell_value(value));
            }
        }

        Ok(matrix)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Overwrite one cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} matrix",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Rows in order. Yields `row_count()` slices even when there are no
    /// columns.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

/// Serialized as an array of row arrays, matching the `table` field of
/// the job request.
impl Serialize for DenseMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

/// Collapse absent, null, zero and non-finite values to
/// [`DEFAULT_CELL_VALUE`]. JSON has no encoding for infinities.
fn cell_value(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => DEFAULT_CELL_VALUE,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::types::ColumnDataset;

    fn col(name: &str, regions: &[&str], values: &[f64]) -> NamedColumn {
        NamedColumn::new(
            name,
            ColumnDataset::new(
                regions.iter().map(|r| r.to_string()).collect(),
                values.to_vec(),
            ),
        )
    }

    fn build(cols: &[NamedColumn]) -> (RegionCodeIndex, DenseMatrix) {
        let index = RegionCodeIndex::build(cols);
        let matrix = DenseMatrix::build(cols, &index).unwrap();
        (index, matrix)
    }

    #[test]
    fn two_overlapping_columns() {
        let cols = vec![
            col("A", &["r1", "r2"], &[1.0, 2.0]),
            col("B", &["r2", "r3"], &[3.0, 4.0]),
        ];
        let (index, matrix) = build(&cols);
        assert_eq!(index.into_codes(), vec!["r1", "r2", "r3"]);
        assert_eq!(
            matrix.to_rows(),
            vec![vec![1.0, 0.0], vec![2.0, 3.0], vec![0.0, 4.0]]
        );
    }

    #[test]
    fn repeated_region_last_write_wins() {
        let cols = vec![col("A", &["r1", "r1"], &[5.0, 9.0])];
        let (index, matrix) = build(&cols);
        let row = index.row_of("r1").unwrap();
        assert_eq!(matrix.get(row, 0), Some(9.0));
    }

    #[test]
    fn repeated_region_overwrites_with_zero() {
        let cols = vec![col("A", &["r1", "r1"], &[5.0, 0.0])];
        let (_, matrix) = build(&cols);
        assert_eq!(matrix.get(0, 0), Some(0.0));
    }

    #[test]
    fn null_and_nan_become_default() {
        let cols = vec![NamedColumn::new(
            "A",
            ColumnDataset {
                regions: vec!["r1".into(), "r2".into(), "r3".into(), "r4".into()],
                values: vec![None, Some(f64::NAN), Some(-0.0), Some(-2.5)],
            },
        )];
        let (_, matrix) = build(&cols);
        assert_eq!(matrix.to_rows(), vec![vec![0.0], vec![0.0], vec![0.0], vec![-2.5]]);
        assert!(matrix.get(2, 0).unwrap().is_sign_positive());
    }

    #[test]
    fn infinities_serialize_as_default_not_null() {
        let cols = vec![col("A", &["r1", "r2", "r3"], &[f64::INFINITY, f64::NEG_INFINITY, 4.0])];
        let (_, matrix) = build(&cols);
        assert_eq!(matrix.to_rows(), vec![vec![0.0], vec![0.0], vec![4.0]]);

        let wire = serde_json::to_string(&matrix).unwrap();
        assert!(!wire.contains("null"), "non-numeric cell on the wire: {wire}");
        assert_eq!(wire, "[[0.0],[0.0],[4.0]]");
    }

    #[test]
    fn dimensions_match_index_and_columns() {
        let cols = vec![
            col("A", &["a", "b", "c"], &[1.0, 2.0, 3.0]),
            col("B", &[], &[]),
            col("C", &["d"], &[7.0]),
        ];
        let (index, matrix) = build(&cols);
        assert_eq!(matrix.row_count(), index.len());
        assert_eq!(matrix.column_count(), 3);
        assert!(matrix.rows().all(|r| r.len() == 3));
        assert_eq!(matrix.row(3), Some(&[0.0, 0.0, 7.0][..]));
    }

    #[test]
    fn rows_align_with_index_in_every_column() {
        let cols = vec![
            col("A", &["x", "y"], &[10.0, 20.0]),
            col("B", &["y", "x"], &[21.0, 11.0]),
        ];
        let (index, matrix) = build(&cols);
        let x = index.row_of("x").unwrap();
        let y = index.row_of("y").unwrap();
        assert_eq!(matrix.row(x), Some(&[10.0, 11.0][..]));
        assert_eq!(matrix.row(y), Some(&[20.0, 21.0][..]));
    }

    #[test]
    fn build_is_repeatable() {
        let cols = vec![
            col("A", &["q", "p"], &[0.25, 1.5]),
            col("B", &["p", "r"], &[3.0, 4.0]),
        ];
        let (_, first) = build(&cols);
        let (_, second) = build(&cols);
        let bits = |m: &DenseMatrix| -> Vec<u64> {
            m.rows().flatten().map(|v| v.to_bits()).collect()
        };
        assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn no_columns_gives_empty_matrix() {
        let (index, matrix) = build(&[]);
        assert!(index.is_empty());
        assert_eq!(matrix.row_count(), 0);
        assert_eq!(matrix.column_count(), 0);
        assert!(matrix.to_rows().is_empty());
    }

    #[test]
    fn region_missing_from_index_is_an_error() {
        let cols = vec![col("A", &["r1"], &[1.0])];
        let err = DenseMatrix::build(&cols, &RegionCodeIndex::default()).unwrap_err();
        assert_matches!(err, CoreError::UnindexedRegion { ref column, ref code } if column == "A" && code == "r1");
    }

    #[test]
    fn serializes_as_nested_rows() {
        let cols = vec![col("A", &["r1", "r2"], &[1.5, 2.0])];
        let (_, matrix) = build(&cols);
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(json, serde_json::json!([[1.5], [2.0]]));
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let matrix = DenseMatrix::filled(2, 1);
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(0, 1), None);
        assert_eq!(matrix.row(5), None);
    }
}
