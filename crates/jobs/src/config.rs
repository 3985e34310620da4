use std::time::Duration;

/// Default base URL of the job service (local loopback).
pub const DEFAULT_JOB_SERVICE_URL: &str = "http://127.0.0.1:31113";

/// Path appended to the base URL for job submission.
pub const JOBS_PATH: &str = "/jobs";

/// Job service connection settings loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobServiceConfig {
    /// Base HTTP URL, without the `/jobs` path.
    pub base_url: String,
    /// Whole-request timeout. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

impl Default for JobServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_JOB_SERVICE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl JobServiceConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `JOB_SERVICE_URL`          | `http://127.0.0.1:31113`   |
    /// | `JOB_SERVICE_TIMEOUT_SECS` | unset (no timeout)         |
    ///
    /// An unparsable or zero timeout is treated as unset.
    pub fn from_env() -> Self {
        let base_url = std::env::var("JOB_SERVICE_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_JOB_SERVICE_URL.to_string());

        let request_timeout = std::env::var("JOB_SERVICE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            base_url,
            request_timeout,
        }
    }

    /// Full submission URL, e.g. `http://127.0.0.1:31113/jobs`.
    pub fn jobs_url(&self) -> String {
        format!("{}{JOBS_PATH}", self.base_url.trim_end_matches('/'))
    }
}
