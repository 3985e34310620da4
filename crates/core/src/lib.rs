//! Region analysis core.
//!
//! Pure, synchronous building blocks for turning sparse region-keyed
//! attribute columns into the dense table sent to the analysis job
//! service:
//!
//! - [`indexing`] — canonical row order for region codes.
//! - [`matrix`] — pre-sized, fully initialised row-major table.
//! - [`request`] — the immutable wire request and its parameters.
//! - [`parameters`] — caller-facing invocation parameters.

pub mod error;
pub mod indexing;
pub mod matrix;
pub mod parameters;
pub mod request;
pub mod types;
