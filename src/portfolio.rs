//! Portfolio runner for projecting every asset on one as-of date
//!
//! Holds one projector and fans the assets out over rayon; output order
//! follows input order.

use crate::asset::Asset;
use crate::projection::{AssetProjection, InterestProjector, PortfolioSummary, ProjectionConfig};
use chrono::NaiveDate;
use rayon::prelude::*;

/// Batch projection over a set of assets
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioRunner {
    projector: InterestProjector,
}

impl PortfolioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            projector: InterestProjector::new(config),
        }
    }

    pub fn projector(&self) -> &InterestProjector {
        &self.projector
    }

    /// Project each asset as of `as_of`
    pub fn project_all(&self, assets: &[Asset], as_of: NaiveDate) -> Vec<AssetProjection> {
        assets
            .par_iter()
            .map(|asset| AssetProjection {
                asset: asset.clone(),
                projection: self.projector.project(asset, as_of),
            })
            .collect()
    }

    /// Project everything and reduce to portfolio totals
    pub fn summarize(&self, assets: &[Asset], as_of: NaiveDate) -> PortfolioSummary {
        let summary = PortfolioSummary::from_projections(&self.project_all(assets, as_of));
        log::info!(
            "portfolio as of {}: {} assets ({} active), principal {:.0}, interest {:.0} before tax",
            as_of,
            summary.asset_count,
            summary.active_count,
            summary.total_principal,
            summary.total_interest_before_tax
        );
        summary
    }
}
