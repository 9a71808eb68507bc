//! Projection output structures

use crate::asset::Asset;
use serde::{Deserialize, Serialize};

/// Projected interest for one asset on one as-of date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestProjection {
    /// Gross simple interest in won
    pub interest_before_tax: f64,

    /// Interest net of withholding tax
    pub interest_after_tax: f64,

    /// Days until maturity (0 at or after maturity, and for inactive assets)
    pub days_remaining: i64,
}

impl InterestProjection {
    pub const ZERO: Self = Self {
        interest_before_tax: 0.0,
        interest_after_tax: 0.0,
        days_remaining: 0,
    };
}

impl Default for InterestProjection {
    fn default() -> Self {
        Self::ZERO
    }
}

/// An asset paired with its projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetProjection {
    pub asset: Asset,
    pub projection: InterestProjection,
}

/// Portfolio-level totals across all assets
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub asset_count: usize,
    pub active_count: usize,

    /// Sum of principal over every asset, whatever its status
    pub total_principal: f64,

    pub total_interest_before_tax: f64,
    pub total_interest_after_tax: f64,
}

impl PortfolioSummary {
    /// Reduce per-asset projections into totals
    pub fn from_projections(projections: &[AssetProjection]) -> Self {
        projections.iter().fold(Self::default(), |mut summary, p| {
            summary.asset_count += 1;
            if p.asset.status.is_active() {
                summary.active_count += 1;
            }
            summary.total_principal += p.asset.principal;
            summary.total_interest_before_tax += p.projection.interest_before_tax;
            summary.total_interest_after_tax += p.projection.interest_after_tax;
            summary
        })
    }
}
