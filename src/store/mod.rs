//! Asset storage: lifecycle operations over asset records
//!
//! The store owns creation, mutation and deletion. Projection only reads
//! the records it hands out.

mod memory;

pub use memory::MemoryAssetStore;

use crate::asset::{Asset, AssetForm, AssetStatus};
use crate::error::Result;
use chrono::NaiveDateTime;

/// Persistence boundary for asset records
pub trait AssetStore {
    /// Create a new active asset; `now` becomes its creation time
    fn create(&mut self, form: AssetForm, now: NaiveDateTime) -> Result<Asset>;

    fn get(&self, id: &str) -> Result<Asset>;

    /// All assets, newest first
    fn list(&self) -> Vec<Asset>;

    /// Replace the editable fields; status and creation time are kept
    fn update(&mut self, id: &str, form: AssetForm, now: NaiveDateTime) -> Result<Asset>;

    fn delete(&mut self, id: &str) -> Result<()>;

    /// Move an active asset to `Matured` or `Closed`
    fn update_status(&mut self, id: &str, status: AssetStatus, now: NaiveDateTime) -> Result<Asset>;
}
