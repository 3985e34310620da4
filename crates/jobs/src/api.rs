//! REST API client for the analysis job service.
//!
//! Wraps the job submission endpoint (`POST /jobs`) using [`reqwest`].
//! Each submission is a single request: no retry, no idempotency key.

use regionjob_core::request::JobRequest;

use crate::config::JobServiceConfig;

/// HTTP client for one job service instance.
pub struct JobServiceApi {
    client: reqwest::Client,
    jobs_url: String,
}

/// Errors from the job service API layer.
#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    /// The HTTP request itself failed (connection refused, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The job service returned a non-2xx status code.
    #[error("Job service error ({status}): {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl JobServiceApi {
    /// Create a client for the given configuration.
    ///
    /// Fails only if the underlying HTTP client cannot be built.
    pub fn from_config(config: &JobServiceConfig) -> Result<Self, JobServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            jobs_url: config.jobs_url(),
        })
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    ///
    /// * `jobs_url` - full submission URL, e.g. `http://host:31113/jobs`.
    pub fn with_client(client: reqwest::Client, jobs_url: String) -> Self {
        Self { client, jobs_url }
    }

    pub fn jobs_url(&self) -> &str {
        &self.jobs_url
    }

    /// Submit an analysis job.
    ///
    /// Sends one `POST` with the JSON-encoded request and returns the
    /// raw response body on a 2xx status.
    pub async fn submit_job(&self, request: &JobRequest) -> Result<String, JobServiceError> {
        tracing::info!(
            url = %self.jobs_url,
            region_type = request.boundary_set(),
            regions = request.region_codes().len(),
            columns = request.columns().len(),
            "Submitting analysis job"
        );

        let response = self
            .client
            .post(&self.jobs_url)
            .json(request)
            .send()
            .await
            .inspect_err(|e| {
                tracing::error!(url = %self.jobs_url, error = %e, "Job submission failed")
            })?;

        let response = Self::ensure_success(response).await?;
        Ok(response.text().await?)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`JobServiceError::HttpStatus`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, JobServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(
                status = status.as_u16(),
                body = %body,
                "Job service rejected submission"
            );
            return Err(JobServiceError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_uses_jobs_url() {
        let api = JobServiceApi::from_config(&JobServiceConfig::default()).unwrap();
        assert_eq!(api.jobs_url(), "http://127.0.0.1:31113/jobs");
    }

    #[test]
    fn http_status_error_display() {
        let err = JobServiceError::HttpStatus {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "Job service error (502): bad gateway");
    }

    #[test]
    fn request_error_display() {
        // Build a reqwest error from an invalid URL.
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = JobServiceError::Request(req_err);
        assert!(err.to_string().contains("HTTP request failed"));
    }
}
