//! The analysis function and its invocation flow.

use std::sync::Arc;

use regionjob_core::indexing::RegionCodeIndex;
use regionjob_core::matrix::DenseMatrix;
use regionjob_core::parameters::InvokeParameters;
use regionjob_core::request::{AlgorithmParameters, JobRequest};
use regionjob_core::types::{column_names, NamedColumn};
use regionjob_jobs::{JobDispatcher, JobHandle};
use regionjob_regions::RegionProviderResolver;

use crate::error::InvokeError;

/// Catalog type identifier of this function.
pub const FUNCTION_TYPE: &str = "why-am-i-special-function";

/// Short human-readable type name.
pub const FUNCTION_TYPE_NAME: &str = "Why Am I Special?";

pub const FUNCTION_NAME: &str = "Why is a given region unique or special?";

pub const FUNCTION_DESCRIPTION: &str = "Determines the characteristics by which a particular \
     region is _most different_ from all other regions.";

/// Determines the characteristics by which a region differs most from
/// all others, by submitting its attribute table to the job service.
///
/// Holds no per-invocation state; concurrent `invoke` calls share
/// nothing but the collaborators.
pub struct WhyAmISpecialFunction {
    resolver: Arc<dyn RegionProviderResolver>,
    dispatcher: Arc<dyn JobDispatcher>,
}

impl WhyAmISpecialFunction {
    pub fn new(
        resolver: Arc<dyn RegionProviderResolver>,
        dispatcher: Arc<dyn JobDispatcher>,
    ) -> Self {
        Self {
            resolver,
            dispatcher,
        }
    }

    pub fn function_type(&self) -> &'static str {
        FUNCTION_TYPE
    }

    pub fn type_name(&self) -> &'static str {
        FUNCTION_TYPE_NAME
    }

    pub fn name(&self) -> &'static str {
        FUNCTION_NAME
    }

    pub fn description(&self) -> &'static str {
        FUNCTION_DESCRIPTION
    }

    /// Run the analysis for `params`.
    ///
    /// Resolves the region provider first; if none matches, fails with
    /// [`InvokeError::Configuration`] without contacting the job service.
    /// A blank region type matches nothing and fails the same way without
    /// a lookup. Otherwise builds the request and submits it exactly once.
    pub async fn invoke(&self, params: &InvokeParameters) -> Result<JobHandle, InvokeError> {
        if params.region_type.trim().is_empty() {
            return Err(InvokeError::Configuration {
                region_type: params.region_type.clone(),
            });
        }

        let provider = self.resolver.resolve(&params.region_type).await?;
        tracing::debug!(
            region_type = %provider.region_type,
            region_prop = ?provider.region_prop,
            "Region provider matched"
        );

        let request = prepare_request(&params.region_type, &params.region, &params.columns())?;

        let handle = self.dispatcher.submit(&request).await?;
        tracing::info!(
            region_type = %params.region_type,
            region = %params.region,
            job_id = ?handle.job_id,
            "Analysis job submitted"
        );
        Ok(handle)
    }
}

/// Build the job request for `columns`: index regions, fill the dense
/// table, and encode. Purely computational.
pub fn prepare_request(
    region_type: &str,
    region: &str,
    columns: &[NamedColumn],
) -> Result<JobRequest, InvokeError> {
    let index = RegionCodeIndex::build(columns);
    let matrix = DenseMatrix::build(columns, &index)?;

    tracing::debug!(
        region_type,
        regions = index.len(),
        columns = columns.len(),
        "Built region table"
    );

    Ok(JobRequest::encode(
        region_type,
        index.into_codes(),
        column_names(columns),
        matrix,
        AlgorithmParameters::for_region(region),
    ))
}
