//! Load and save asset records as CSV

use super::{Asset, AssetKind, AssetStatus};
use crate::dates::{parse_date, parse_timestamp};
use crate::error::Result;
use chrono::NaiveDateTime;
use csv::{Reader, Writer};
use std::path::Path;

/// Column order shared by the reader and the writer
///
/// `updated_at` comes last so files written before it existed still load.
const HEADER: [&str; 9] = [
    "id",
    "kind",
    "bank_name",
    "principal",
    "annual_rate",
    "maturity_date",
    "created_at",
    "status",
    "updated_at",
];

/// Raw CSV row; `created_at`, `status` and `updated_at` may be left empty
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    kind: String,
    #[serde(default)]
    bank_name: String,
    principal: f64,
    annual_rate: f64,
    maturity_date: String,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

fn optional_timestamp(value: Option<&str>) -> Result<Option<NaiveDateTime>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Ok(Some(parse_timestamp(value)?)),
    }
}

impl CsvRow {
    fn to_asset(self) -> Result<Asset> {
        let kind: AssetKind = self.kind.parse()?;
        let maturity_date = parse_date(&self.maturity_date)?;
        let created_at = optional_timestamp(self.created_at.as_deref())?;
        // Older files carry no update time; the creation time stands in
        let updated_at = optional_timestamp(self.updated_at.as_deref())?.or(created_at);

        let status = self
            .status
            .as_deref()
            .map(AssetStatus::from_stored)
            .unwrap_or_default();

        let asset = Asset {
            id: self.id,
            kind,
            bank_name: self.bank_name,
            principal: self.principal,
            annual_rate: self.annual_rate,
            maturity_date,
            created_at,
            updated_at,
            status,
        };
        asset.validate()?;
        Ok(asset)
    }
}

/// Load all assets from a CSV file
pub fn load_assets<P: AsRef<Path>>(path: P) -> Result<Vec<Asset>> {
    let path = path.as_ref();
    let assets = load_assets_from_reader(std::fs::File::open(path)?)?;
    log::info!("loaded {} assets from {}", assets.len(), path.display());
    Ok(assets)
}

/// Load assets from any reader (e.g., string buffer, request body)
///
/// Rows with a negative or non-numeric principal or rate are rejected.
pub fn load_assets_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Asset>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut assets = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        assets.push(row.to_asset()?);
    }

    Ok(assets)
}

fn format_timestamp(timestamp: Option<NaiveDateTime>) -> String {
    timestamp
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S%.f").to_string())
        .unwrap_or_default()
}

/// Write assets in the same layout `load_assets` reads
///
/// Statuses are written in their normalised form, so an unrecognised stored
/// value (e.g. `frozen`) comes back as `unknown`; both project to zero.
pub fn save_assets<W: std::io::Write>(writer: W, assets: &[Asset]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for asset in assets {
        csv_writer.write_record([
            asset.id.clone(),
            asset.kind.as_str().to_string(),
            asset.bank_name.clone(),
            asset.principal.to_string(),
            asset.annual_rate.to_string(),
            asset.maturity_date.format("%Y-%m-%d").to_string(),
            format_timestamp(asset.created_at),
            asset.status.as_str().to_string(),
            format_timestamp(asset.updated_at),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
