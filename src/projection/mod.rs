//! Interest projection for savings and deposit assets

mod engine;
mod result;

pub use engine::{
    project, InterestProjector, ProjectionConfig, DAYS_PER_YEAR, DEFAULT_WITHHOLDING_TAX_RATE,
    TAX_RATE_ENV,
};
pub use result::{AssetProjection, InterestProjection, PortfolioSummary};
