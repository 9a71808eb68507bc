//! Household Ledger - savings and deposit asset tracking with interest projection
//!
//! This library provides:
//! - Asset records (savings/deposit) with an active → matured/closed lifecycle
//! - Simple-interest projection with withholding tax, as of any date
//! - Portfolio totals across all assets
//! - An in-memory asset store and CSV loading/output

pub mod asset;
pub mod dates;
pub mod error;
pub mod output;
pub mod portfolio;
pub mod projection;
pub mod store;

// Re-export commonly used types
pub use asset::{Asset, AssetForm, AssetKind, AssetStatus};
pub use error::{LedgerError, Result};
pub use portfolio::PortfolioRunner;
pub use projection::{project, InterestProjection, InterestProjector, ProjectionConfig};
pub use store::{AssetStore, MemoryAssetStore};
