//! In-memory asset store

use super::AssetStore;
use crate::asset::{Asset, AssetForm, AssetStatus};
use crate::error::{LedgerError, Result};
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Asset store backed by a `HashMap`, ids assigned as `asset-<n>`
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    assets: HashMap<String, Asset>,
    next_id: u64,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records, keeping their ids
    pub fn from_assets(assets: impl IntoIterator<Item = Asset>) -> Self {
        let mut store = Self::new();
        for asset in assets {
            store.assets.insert(asset.id.clone(), asset);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    fn next_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let id = format!("asset-{}", self.next_id);
            // Seeded records may already use the generated form
            if !self.assets.contains_key(&id) {
                return id;
            }
        }
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Asset> {
        self.assets
            .get_mut(id)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }
}

impl AssetStore for MemoryAssetStore {
    fn create(&mut self, form: AssetForm, now: NaiveDateTime) -> Result<Asset> {
        form.validate()?;

        let id = self.next_id();
        let asset = Asset::from_form(id.clone(), form, now);
        self.assets.insert(id, asset.clone());

        log::debug!("created asset {}", asset.id);
        Ok(asset)
    }

    fn get(&self, id: &str) -> Result<Asset> {
        self.assets
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }

    fn list(&self) -> Vec<Asset> {
        let mut assets: Vec<Asset> = self.assets.values().cloned().collect();
        // None sorts before Some, so undated records land last
        assets.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        assets
    }

    fn update(&mut self, id: &str, form: AssetForm, now: NaiveDateTime) -> Result<Asset> {
        form.validate()?;

        let asset = self.get_mut(id)?;
        asset.apply_form(form, now);
        Ok(asset.clone())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.assets
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }

    fn update_status(&mut self, id: &str, status: AssetStatus, now: NaiveDateTime) -> Result<Asset> {
        let asset = self.get_mut(id)?;

        if !asset.status.can_transition_to(status) {
            return Err(LedgerError::InvalidTransition {
                from: asset.status,
                to: status,
            });
        }

        log::info!("asset {}: {} -> {}", id, asset.status, status);
        asset.status = status;
        asset.updated_at = Some(now);
        Ok(asset.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetKind;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn form(principal: f64) -> AssetForm {
        AssetForm {
            kind: AssetKind::Savings,
            bank_name: "Hana".to_string(),
            principal,
            annual_rate: 3.2,
            maturity_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_create_assigns_id_and_active_status() {
        let mut store = MemoryAssetStore::new();
        let a = store.create(form(1_000_000.0), at(2024, 1, 1)).unwrap();
        let b = store.create(form(2_000_000.0), at(2024, 2, 1)).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.status, AssetStatus::Active);
        assert_eq!(a.created_at, Some(at(2024, 1, 1)));
        assert_eq!(store.get(&b.id).unwrap(), b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_rejects_negative_values() {
        let mut store = MemoryAssetStore::new();
        assert!(matches!(
            store.create(form(-5.0), at(2024, 1, 1)),
            Err(LedgerError::InvalidAmount(_))
        ));

        let mut bad_rate = form(100.0);
        bad_rate.annual_rate = -0.1;
        assert!(matches!(
            store.create(bad_rate, at(2024, 1, 1)),
            Err(LedgerError::InvalidRate(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_newest_first() {
        let mut store = MemoryAssetStore::new();
        let old = store.create(form(1.0), at(2023, 5, 1)).unwrap();
        let new = store.create(form(2.0), at(2024, 5, 1)).unwrap();

        let ids: Vec<String> = store.list().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![new.id, old.id]);
    }

    #[test]
    fn test_update_keeps_status_and_created_at() {
        let mut store = MemoryAssetStore::new();
        let asset = store.create(form(1_000_000.0), at(2024, 1, 1)).unwrap();
        store
            .update_status(&asset.id, AssetStatus::Matured, at(2024, 3, 1))
            .unwrap();

        let mut edited = form(3_000_000.0);
        edited.bank_name = "NH".to_string();
        let updated = store.update(&asset.id, edited, at(2024, 4, 1)).unwrap();

        assert_eq!(updated.principal, 3_000_000.0);
        assert_eq!(updated.bank_name, "NH");
        assert_eq!(updated.status, AssetStatus::Matured);
        assert_eq!(updated.created_at, Some(at(2024, 1, 1)));
        assert_eq!(updated.updated_at, Some(at(2024, 4, 1)));
    }

    #[test]
    fn test_status_transitions() {
        let mut store = MemoryAssetStore::new();
        let matured = store.create(form(1.0), at(2024, 1, 1)).unwrap();
        let closed = store.create(form(1.0), at(2024, 1, 1)).unwrap();

        let m = store
            .update_status(&matured.id, AssetStatus::Matured, at(2024, 6, 1))
            .unwrap();
        assert_eq!(m.status, AssetStatus::Matured);
        let c = store
            .update_status(&closed.id, AssetStatus::Closed, at(2024, 6, 1))
            .unwrap();
        assert_eq!(c.status, AssetStatus::Closed);

        // Terminal states stay put
        assert!(matches!(
            store.update_status(&matured.id, AssetStatus::Active, at(2024, 7, 1)),
            Err(LedgerError::InvalidTransition { from: AssetStatus::Matured, to: AssetStatus::Active })
        ));
        assert!(matches!(
            store.update_status(&closed.id, AssetStatus::Matured, at(2024, 7, 1)),
            Err(LedgerError::InvalidTransition { .. })
        ));

        let active = store.create(form(1.0), at(2024, 1, 1)).unwrap();
        assert!(matches!(
            store.update_status(&active.id, AssetStatus::Active, at(2024, 7, 1)),
            Err(LedgerError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_missing_ids() {
        let mut store = MemoryAssetStore::new();
        assert!(matches!(store.get("nope"), Err(LedgerError::NotFound(_))));
        assert!(matches!(store.delete("nope"), Err(LedgerError::NotFound(_))));
        assert!(matches!(
            store.update("nope", form(1.0), at(2024, 1, 1)),
            Err(LedgerError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_and_seeded_ids() {
        let seeded = Asset::new(
            "asset-1",
            AssetKind::Deposit,
            10.0,
            1.0,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        let mut store = MemoryAssetStore::from_assets([seeded]);

        let created = store.create(form(1.0), at(2024, 1, 1)).unwrap();
        assert_eq!(created.id, "asset-2");

        store.delete("asset-1").unwrap();
        assert_eq!(store.len(), 1);
    }
}
