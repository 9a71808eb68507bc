//! Asset data structures and CSV loading

mod data;
pub mod loader;

pub use data::{Asset, AssetForm, AssetKind, AssetStatus};
pub use loader::{load_assets, load_assets_from_reader, save_assets};
