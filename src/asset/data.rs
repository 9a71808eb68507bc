//! Asset data structures matching the ledger's asset records

use crate::dates::deserialize_optional_timestamp;
use crate::error::{LedgerError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of time-deposit product
///
/// Informational only, the interest formula is the same for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Installment savings (적금)
    Savings,
    /// Lump-sum time deposit (예금)
    Deposit,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Savings => "savings",
            AssetKind::Deposit => "deposit",
        }
    }
}

impl FromStr for AssetKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "savings" => Ok(AssetKind::Savings),
            "deposit" => Ok(AssetKind::Deposit),
            other => Err(LedgerError::InvalidKind(other.to_string())),
        }
    }
}

/// Lifecycle status of an asset
///
/// Created as `Active`; `Matured` and `Closed` are terminal. `Unknown` holds
/// any unrecognised stored value and is treated like a terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetStatus {
    #[default]
    Active,
    Matured,
    Closed,
    Unknown,
}

impl AssetStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AssetStatus::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Active => "active",
            AssetStatus::Matured => "matured",
            AssetStatus::Closed => "closed",
            AssetStatus::Unknown => "unknown",
        }
    }

    /// Lenient parse for stored records: empty means active, anything
    /// unrecognised becomes `Unknown`
    pub fn from_stored(value: &str) -> Self {
        match value.trim() {
            "" | "active" => AssetStatus::Active,
            "matured" => AssetStatus::Matured,
            "closed" => AssetStatus::Closed,
            _ => AssetStatus::Unknown,
        }
    }

    /// Only active assets can move, and only to a terminal status
    pub fn can_transition_to(&self, next: AssetStatus) -> bool {
        matches!(
            (self, next),
            (AssetStatus::Active, AssetStatus::Matured) | (AssetStatus::Active, AssetStatus::Closed)
        )
    }
}

/// Strict parse for status-change requests
impl FromStr for AssetStatus {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "active" => Ok(AssetStatus::Active),
            "matured" => Ok(AssetStatus::Matured),
            "closed" => Ok(AssetStatus::Closed),
            other => Err(LedgerError::InvalidStatus(other.to_string())),
        }
    }
}

impl From<String> for AssetStatus {
    fn from(value: String) -> Self {
        AssetStatus::from_stored(&value)
    }
}

impl From<AssetStatus> for String {
    fn from(status: AssetStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Create/update payload for an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetForm {
    pub kind: AssetKind,
    pub bank_name: String,
    /// Deposited amount in won
    pub principal: f64,
    /// Annual rate in percent (3.5 = 3.5%/year)
    pub annual_rate: f64,
    pub maturity_date: NaiveDate,
}

/// Principal and rate must both be finite and non-negative
fn validate_amounts(principal: f64, annual_rate: f64) -> Result<()> {
    if !principal.is_finite() || principal < 0.0 {
        return Err(LedgerError::InvalidAmount(principal));
    }
    if !annual_rate.is_finite() || annual_rate < 0.0 {
        return Err(LedgerError::InvalidRate(annual_rate));
    }
    Ok(())
}

impl AssetForm {
    /// Reject negative or non-finite amounts and rates
    pub fn validate(&self) -> Result<()> {
        validate_amounts(self.principal, self.annual_rate)
    }
}

/// A savings or deposit asset held by the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique asset identifier
    pub id: String,

    pub kind: AssetKind,

    /// Bank holding the asset
    #[serde(default)]
    pub bank_name: String,

    /// Deposited amount in won
    pub principal: f64,

    /// Annual rate in percent
    pub annual_rate: f64,

    /// Date the term ends
    pub maturity_date: NaiveDate,

    /// When the asset was opened; accrual start for matured projections
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub updated_at: Option<NaiveDateTime>,

    #[serde(default)]
    pub status: AssetStatus,
}

impl Asset {
    /// Create an active asset with no timestamps
    pub fn new(
        id: impl Into<String>,
        kind: AssetKind,
        principal: f64,
        annual_rate: f64,
        maturity_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            bank_name: String::new(),
            principal,
            annual_rate,
            maturity_date,
            created_at: None,
            updated_at: None,
            status: AssetStatus::Active,
        }
    }

    /// Build a freshly created asset from a form
    pub fn from_form(id: impl Into<String>, form: AssetForm, created_at: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            kind: form.kind,
            bank_name: form.bank_name,
            principal: form.principal,
            annual_rate: form.annual_rate,
            maturity_date: form.maturity_date,
            created_at: Some(created_at),
            updated_at: Some(created_at),
            status: AssetStatus::Active,
        }
    }

    pub fn with_bank_name(mut self, bank_name: impl Into<String>) -> Self {
        self.bank_name = bank_name.into();
        self
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_status(mut self, status: AssetStatus) -> Self {
        self.status = status;
        self
    }

    /// Reject records whose principal or rate would project negative or NaN interest
    pub fn validate(&self) -> Result<()> {
        validate_amounts(self.principal, self.annual_rate)
    }

    /// Overwrite the editable fields, keeping identity, status and creation time
    pub fn apply_form(&mut self, form: AssetForm, updated_at: NaiveDateTime) {
        self.kind = form.kind;
        self.bank_name = form.bank_name;
        self.principal = form.principal;
        self.annual_rate = form.annual_rate;
        self.maturity_date = form.maturity_date;
        self.updated_at = Some(updated_at);
    }
}
