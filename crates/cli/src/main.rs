//! `regionjob` -- submit a "why is this region special" analysis job.
//!
//! Reads invocation parameters from a JSON file, resolves the region
//! provider, builds the region table, and submits it to the analysis
//! job service. Prints the resulting job handle as JSON.
//!
//! # Usage
//!
//! ```text
//! regionjob <parameters.json>
//! ```
//!
//! # Environment variables
//!
//! | Variable                   | Required | Default                  | Description                          |
//! |----------------------------|----------|--------------------------|--------------------------------------|
//! | `JOB_SERVICE_URL`          | no       | `http://127.0.0.1:31113` | Job service base URL                 |
//! | `JOB_SERVICE_TIMEOUT_SECS` | no       | --                       | Request timeout; unset means none    |
//! | `REGION_MAPPING_FILE`      | one of   | --                       | Local region-mapping JSON            |
//! | `REGION_MAPPING_URL`       | one of   | --                       | Region-mapping definitions URL       |

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use regionjob_cli::CliSettings;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "regionjob_cli=info,regionjob_pipeline=info,regionjob_jobs=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let params_path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            tracing::error!("usage: regionjob <parameters.json>");
            std::process::exit(2);
        });

    let settings = CliSettings::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    tracing::info!(
        job_service = %settings.job_service.base_url,
        region_mapping = ?settings.region_mapping,
        "Starting regionjob",
    );

    match regionjob_cli::run(&params_path, &settings).await {
        Ok(handle) => match serde_json::to_string_pretty(&handle) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to render job handle");
                std::process::exit(1);
            }
        },
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Analysis invocation failed");
            std::process::exit(1);
        }
    }
}
