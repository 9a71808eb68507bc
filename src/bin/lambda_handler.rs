//! AWS Lambda handler for asset interest projection
//!
//! Accepts a list of assets plus an optional as-of date and tax rate as JSON
//! and returns per-asset projections with portfolio totals.

use chrono::{Local, NaiveDate};
use household_ledger::{
    projection::{AssetProjection, PortfolioSummary, DEFAULT_WITHHOLDING_TAX_RATE},
    Asset, PortfolioRunner, ProjectionConfig,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Input for a projection request
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    /// Reference date (default: today in the runtime's local time)
    #[serde(default)]
    pub as_of: Option<NaiveDate>,

    /// Withholding tax rate as a fraction (default: 15.4%)
    #[serde(default = "default_tax_rate")]
    pub withholding_tax_rate: f64,

    pub assets: Vec<Asset>,
}

fn default_tax_rate() -> f64 { DEFAULT_WITHHOLDING_TAX_RATE }

/// Output of a projection request
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub as_of: NaiveDate,
    pub projections: Vec<AssetProjection>,
    pub summary: PortfolioSummary,
    pub execution_time_ms: u64,
}

fn handle(request: ProjectionRequest) -> Result<ProjectionResponse, Error> {
    let start = Instant::now();

    let config = ProjectionConfig::try_with_tax_rate(request.withholding_tax_rate)?;
    for asset in &request.assets {
        asset
            .validate()
            .map_err(|err| format!("asset {}: {}", asset.id, err))?;
    }

    let as_of = request.as_of.unwrap_or_else(|| Local::now().date_naive());
    let runner = PortfolioRunner::new(config);

    let projections = runner.project_all(&request.assets, as_of);
    let summary = PortfolioSummary::from_projections(&projections);

    log::info!(
        "projected {} assets as of {} in {:?}",
        projections.len(),
        as_of,
        start.elapsed()
    );

    Ok(ProjectionResponse {
        as_of,
        projections,
        summary,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

async fn function_handler(event: LambdaEvent<ProjectionRequest>) -> Result<ProjectionResponse, Error> {
    handle(event.payload)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(function_handler)).await
}
