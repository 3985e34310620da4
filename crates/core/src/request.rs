//! Wire request for the analysis job service.
//!
//! [`JobRequest::encode`] is a pure packaging step: it takes the outputs
//! of indexing and matrix building and produces the immutable body POSTed
//! to the service.

use serde::{Deserialize, Serialize};

use crate::matrix::DenseMatrix;
use crate::types::RegionCode;

/// Algorithm identifier understood by the job service.
pub const ALGORITHM_ID: &str = "whyamispecial";

/// Fixed value of the secondary algorithm parameter.
pub const DEFAULT_PARAM2: f64 = 0.5;

const TWO_POW_32: f64 = 4_294_967_296.0;
const TWO_POW_31: f64 = 2_147_483_648.0;

// ---------------------------------------------------------------------------
// Algorithm parameters
// ---------------------------------------------------------------------------

/// Scalar inputs passed through to the remote algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmParameters {
    /// The selected region as a signed 32-bit integer.
    pub query: i32,
    pub param2: f64,
}

impl AlgorithmParameters {
    /// Parameters for analysing `region`.
    pub fn for_region(region: &str) -> Self {
        Self {
            query: coerce_region_query(region),
            param2: DEFAULT_PARAM2,
        }
    }
}

/// Convert a region code to the integer `query` parameter.
///
/// The string is read as a number (surrounding whitespace ignored, empty
/// means zero, `0x`/`0o`/`0b` prefixes accepted). Anything unparsable or
/// infinite becomes `0`. The number is truncated toward zero and wrapped
/// modulo 2^32 into the `i32` range.
pub fn coerce_region_query(region: &str) -> i32 {
    to_int32(parse_number(region))
}

fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    // `f64::from_str` also accepts "inf"/"nan" spellings; both collapse
    // to 0 in `to_int32` anyway.
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0_f64;
    for ch in digits.chars() {
        match ch.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return f64::NAN,
        }
    }
    acc
}

fn to_int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }
    let wrapped = n.trunc().rem_euclid(TWO_POW_32);
    if wrapped >= TWO_POW_31 {
        (wrapped - TWO_POW_32) as i32
    } else {
        wrapped as i32
    }
}

// ---------------------------------------------------------------------------
// JobRequest
// ---------------------------------------------------------------------------

/// Immutable request body for one analysis job.
///
/// `region_codes[i]` labels row `i` of `table`; `columns[j]` labels
/// column `j`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRequest {
    algorithm: String,
    #[serde(rename = "boundaries_name")]
    boundary_set: String,
    region_codes: Vec<RegionCode>,
    columns: Vec<String>,
    table: DenseMatrix,
    parameters: AlgorithmParameters,
}

impl JobRequest {
    /// Package already-consistent parts into a request.
    ///
    /// `region_codes` must match the matrix rows and `column_names` its
    /// columns; both hold by construction when they come from
    /// [`RegionCodeIndex`](crate::indexing::RegionCodeIndex) and
    /// [`DenseMatrix::build`]. Keeping them consistent is the caller's
    /// responsibility: the lengths are only checked in debug builds, and
    /// a release build encodes mismatched parts as given.
    pub fn encode(
        region_type: &str,
        region_codes: Vec<RegionCode>,
        column_names: Vec<String>,
        matrix: DenseMatrix,
        parameters: AlgorithmParameters,
    ) -> Self {
        debug_assert_eq!(region_codes.len(), matrix.row_count());
        debug_assert_eq!(column_names.len(), matrix.column_count());

        Self {
            algorithm: ALGORITHM_ID.to_owned(),
            boundary_set: region_type.to_owned(),
            region_codes,
            columns: column_names,
            table: matrix,
            parameters,
        }
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The region type the table is keyed by.
    pub fn boundary_set(&self) -> &str {
        &self.boundary_set
    }

    pub fn region_codes(&self) -> &[RegionCode] {
        &self.region_codes
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn table(&self) -> &DenseMatrix {
        &self.table
    }

    pub fn parameters(&self) -> AlgorithmParameters {
        self.parameters
    }
}
