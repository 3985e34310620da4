//! "Why is a given region unique or special?" analysis function.
//!
//! Ties the pure table-building steps in `regionjob-core` to region
//! provider lookup and job submission:
//!
//! resolve provider → index regions → build table → encode → submit.

pub mod error;
pub mod function;

pub use error::InvokeError;
pub use function::{prepare_request, WhyAmISpecialFunction};
