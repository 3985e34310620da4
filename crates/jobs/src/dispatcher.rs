use async_trait::async_trait;
use regionjob_core::request::JobRequest;

use crate::api::{JobServiceApi, JobServiceError};
use crate::handle::JobHandle;

/// Submits encoded job requests to the analysis service.
///
/// One call is one outbound submission. Implementations must not retry.
#[async_trait]
pub trait JobDispatcher: Send + Sync {
    async fn submit(&self, request: &JobRequest) -> Result<JobHandle, JobServiceError>;
}

#[async_trait]
impl JobDispatcher for JobServiceApi {
    async fn submit(&self, request: &JobRequest) -> Result<JobHandle, JobServiceError> {
        let body = self.submit_job(request).await?;
        let handle = JobHandle::from_body(body);
        tracing::info!(job_id = ?handle.job_id, "Analysis job accepted");
        Ok(handle)
    }
}
