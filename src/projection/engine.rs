//! Interest projection for time-deposit assets
//!
//! Simple (non-compounding) interest on a 365-day year, with a flat
//! withholding tax. Before maturity the projection covers the remaining
//! term; at or after maturity it covers the whole holding period.

use crate::asset::Asset;
use crate::dates::{days_between, normalize_to_midnight};
use crate::error::{LedgerError, Result};
use super::result::InterestProjection;
use chrono::{NaiveDate, NaiveDateTime};

/// Korean resident interest-income withholding: 14% national + 1.4% local
pub const DEFAULT_WITHHOLDING_TAX_RATE: f64 = 0.154;

/// Day-count basis: ordinary 365-day year, no leap-year adjustment
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Environment override for the withholding tax rate
pub const TAX_RATE_ENV: &str = "LEDGER_WITHHOLDING_TAX_RATE";

/// Configuration for interest projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Fraction of gross interest withheld (0.154 = 15.4%)
    pub withholding_tax_rate: f64,

    /// Days per year used to turn a day count into a year fraction
    pub days_per_year: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            withholding_tax_rate: DEFAULT_WITHHOLDING_TAX_RATE,
            days_per_year: DAYS_PER_YEAR,
        }
    }
}

impl ProjectionConfig {
    /// Default config with a different withholding tax rate
    pub fn with_tax_rate(withholding_tax_rate: f64) -> Self {
        Self {
            withholding_tax_rate,
            ..Self::default()
        }
    }

    /// Like `with_tax_rate`, but rejects rates outside `0..=1`
    pub fn try_with_tax_rate(withholding_tax_rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&withholding_tax_rate) {
            return Err(LedgerError::InvalidTaxRate(withholding_tax_rate));
        }
        Ok(Self::with_tax_rate(withholding_tax_rate))
    }

    /// Default config, with the tax rate taken from `LEDGER_WITHHOLDING_TAX_RATE` if set
    pub fn from_env() -> Self {
        match std::env::var(TAX_RATE_ENV) {
            Ok(raw) => match raw.trim().parse::<f64>().map(Self::try_with_tax_rate) {
                Ok(Ok(config)) => config,
                _ => {
                    log::warn!(
                        "ignoring {}={:?}: expected a fraction between 0 and 1",
                        TAX_RATE_ENV,
                        raw
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

/// Projects interest for a single asset as of a given date
///
/// Stateless; one projector can serve any number of assets and threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestProjector {
    config: ProjectionConfig,
}

impl InterestProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project interest for `asset` as of the calendar date `as_of`
    pub fn project(&self, asset: &Asset, as_of: NaiveDate) -> InterestProjection {
        // Matured, closed and unrecognised statuses never show interest
        if !asset.status.is_active() {
            return InterestProjection::ZERO;
        }

        let days_diff = days_between(as_of, asset.maturity_date);

        if days_diff > 0 {
            let years = days_diff as f64 / self.config.days_per_year;
            return self.accrue(asset, years, days_diff);
        }

        // At or past maturity: value over the whole holding period
        let start = asset
            .created_at
            .map(normalize_to_midnight)
            .unwrap_or(as_of);
        let held_days = days_between(start, asset.maturity_date);
        if held_days < 1 {
            log::debug!(
                "asset {}: maturity {} not after start {}, holding period floored to one day",
                asset.id,
                asset.maturity_date,
                start
            );
        }
        let total_years = held_days.max(1) as f64 / self.config.days_per_year;

        self.accrue(asset, total_years, 0)
    }

    /// Project as of a timestamp; time of day is dropped first
    pub fn project_at(&self, asset: &Asset, as_of: NaiveDateTime) -> InterestProjection {
        self.project(asset, normalize_to_midnight(as_of))
    }

    fn accrue(&self, asset: &Asset, years: f64, days_remaining: i64) -> InterestProjection {
        let interest_before_tax = asset.principal * (asset.annual_rate / 100.0) * years;
        let interest_after_tax = interest_before_tax * (1.0 - self.config.withholding_tax_rate);

        InterestProjection {
            interest_before_tax,
            interest_after_tax,
            days_remaining,
        }
    }
}

/// Project with the default 15.4% withholding and 365-day year
pub fn project(asset: &Asset, as_of: NaiveDate) -> InterestProjection {
    InterestProjector::default().project(asset, as_of)
}
