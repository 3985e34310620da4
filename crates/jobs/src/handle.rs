//! Handle for a submitted analysis job.

use serde::Serialize;

/// Fields checked, in order, for a service-assigned job identifier.
const JOB_ID_FIELDS: [&str; 3] = ["id", "job_id", "jobId"];

/// What the caller gets back after a successful submission.
///
/// The response body is kept verbatim; only a job identifier is picked
/// out of it when the service provides one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobHandle {
    /// Identifier assigned by the job service, if the response had one.
    pub job_id: Option<String>,
    /// Raw response body.
    pub raw_body: String,
}

impl JobHandle {
    /// Build a handle from a successful response body.
    ///
    /// `job_id` is read from a top-level `id`, `job_id` or `jobId`
    /// field (string or integer) when the body is a JSON object.
    pub fn from_body(raw_body: String) -> Self {
        let job_id = extract_job_id(&raw_body);
        Self { job_id, raw_body }
    }
}

fn extract_job_id(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    JOB_ID_FIELDS.iter().find_map(|field| match object.get(*field)? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    })
}
