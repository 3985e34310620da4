//! `regionjob-cli` library crate.
//!
//! Settings loading and the single-invocation flow used by the
//! `regionjob` binary, exposed for integration testing.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use regionjob_core::parameters::InvokeParameters;
use regionjob_jobs::{JobHandle, JobServiceApi, JobServiceConfig};
use regionjob_pipeline::WhyAmISpecialFunction;
use regionjob_regions::{RegionMappingClient, RegionProviderList, RegionProviderResolver};

/// Where region provider definitions come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionMappingSource {
    /// Local region-mapping JSON file, read once per run.
    File(PathBuf),
    /// Region-mapping definitions URL, fetched on each lookup.
    Url(String),
}

impl RegionMappingSource {
    /// Pick the source from the raw `REGION_MAPPING_FILE` and
    /// `REGION_MAPPING_URL` values. A file takes precedence.
    pub fn from_vars(file: Option<String>, url: Option<String>) -> anyhow::Result<Self> {
        let non_empty = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        match (non_empty(file), non_empty(url)) {
            (Some(file), _) => Ok(Self::File(PathBuf::from(file))),
            (None, Some(url)) => Ok(Self::Url(url)),
            (None, None) => {
                anyhow::bail!("either REGION_MAPPING_FILE or REGION_MAPPING_URL must be set")
            }
        }
    }
}

/// Everything the binary needs besides the parameters file.
#[derive(Debug, Clone)]
pub struct CliSettings {
    pub job_service: JobServiceConfig,
    pub region_mapping: RegionMappingSource,
}

impl CliSettings {
    /// Load settings from environment variables.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `JOB_SERVICE_URL`          | `http://127.0.0.1:31113`   |
    /// | `JOB_SERVICE_TIMEOUT_SECS` | unset (no timeout)         |
    /// | `REGION_MAPPING_FILE`      | --                         |
    /// | `REGION_MAPPING_URL`       | --                         |
    pub fn from_env() -> anyhow::Result<Self> {
        let region_mapping = RegionMappingSource::from_vars(
            std::env::var("REGION_MAPPING_FILE").ok(),
            std::env::var("REGION_MAPPING_URL").ok(),
        )?;

        Ok(Self {
            job_service: JobServiceConfig::from_env(),
            region_mapping,
        })
    }
}

/// Read invocation parameters from a JSON file.
pub async fn load_parameters(path: &Path) -> anyhow::Result<InvokeParameters> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read parameters file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("invalid parameters in {}", path.display()))
}

/// Build the region provider resolver for `source`.
pub async fn build_resolver(
    source: &RegionMappingSource,
) -> anyhow::Result<Arc<dyn RegionProviderResolver>> {
    let resolver: Arc<dyn RegionProviderResolver> = match source {
        RegionMappingSource::File(path) => {
            let list = RegionProviderList::from_file(path).await.with_context(|| {
                format!("failed to load region mapping from {}", path.display())
            })?;
            tracing::info!(
                providers = list.len(),
                path = %path.display(),
                "Loaded region mapping"
            );
            Arc::new(list)
        }
        RegionMappingSource::Url(url) => Arc::new(RegionMappingClient::new(url.clone())),
    };
    Ok(resolver)
}

/// Load parameters from `params_path`, invoke the analysis, and return
/// the job handle.
pub async fn run(params_path: &Path, settings: &CliSettings) -> anyhow::Result<JobHandle> {
    let params = load_parameters(params_path).await?;
    let resolver = build_resolver(&settings.region_mapping).await?;
    let api = JobServiceApi::from_config(&settings.job_service)
        .context("failed to build job service client")?;

    let function = WhyAmISpecialFunction::new(resolver, Arc::new(api));
    tracing::info!(
        function = function.function_type(),
        region_type = %params.region_type,
        columns = params.data.len(),
        "Invoking analysis"
    );

    let handle = function.invoke(&params).await?;
    Ok(handle)
}
