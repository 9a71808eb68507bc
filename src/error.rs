//! Error types for loading, storing and transitioning assets
//!
//! The interest projector itself is total and never returns these.

use crate::asset::AssetStatus;
use thiserror::Error;

/// Errors raised by the ledger's fallible surfaces
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("invalid status '{0}': must be active, matured, or closed")]
    InvalidStatus(String),

    #[error("invalid asset kind '{0}': must be savings or deposit")]
    InvalidKind(String),

    #[error("cannot change status from {from} to {to}")]
    InvalidTransition { from: AssetStatus, to: AssetStatus },

    #[error("principal must be a non-negative amount, got {0}")]
    InvalidAmount(f64),

    #[error("annual rate must be a non-negative percentage, got {0}")]
    InvalidRate(f64),

    #[error("withholding tax rate must be a fraction between 0 and 1, got {0}")]
    InvalidTaxRate(f64),

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
