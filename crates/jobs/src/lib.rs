//! Client for the remote analysis job service.
//!
//! Provides the HTTP API wrapper used to submit analysis jobs, the
//! [`JobDispatcher`] seam the pipeline submits through, the
//! [`JobHandle`] returned to callers, and environment-driven
//! configuration.

pub mod api;
pub mod config;
pub mod dispatcher;
pub mod handle;

pub use api::{JobServiceApi, JobServiceError};
pub use config::JobServiceConfig;
pub use dispatcher::JobDispatcher;
pub use handle::JobHandle;
