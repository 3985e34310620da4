use regionjob_core::error::CoreError;
use regionjob_jobs::JobServiceError;
use regionjob_regions::RegionProviderError;

/// Errors surfaced to the caller of an analysis invocation.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// No region provider matches the requested region type. Raised
    /// before any job service traffic.
    #[error("Could not find a matching region provider for region type \"{region_type}\"")]
    Configuration { region_type: String },

    /// Region provider definitions could not be loaded.
    #[error("Region provider lookup failed: {0}")]
    RegionLookup(RegionProviderError),

    /// The invocation parameters could not be turned into a job request.
    #[error(transparent)]
    InvalidParameters(#[from] CoreError),

    /// Network-level failure submitting the job.
    #[error("Job submission failed: {0}")]
    Transport(reqwest::Error),

    /// The job service answered with a non-success status.
    #[error("Job service returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

impl From<RegionProviderError> for InvokeError {
    fn from(err: RegionProviderError) -> Self {
        match err {
            RegionProviderError::NotFound { region_type } => Self::Configuration { region_type },
            other => Self::RegionLookup(other),
        }
    }
}

impl From<JobServiceError> for InvokeError {
    fn from(err: JobServiceError) -> Self {
        match err {
            JobServiceError::Request(e) => Self::Transport(e),
            JobServiceError::HttpStatus { status, body } => Self::HttpStatus { status, body },
        }
    }
}
