#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Region {code:?} in column {column:?} has no row in the region index")]
    UnindexedRegion { column: String, code: String },
}
