//! Household Ledger CLI
//!
//! Projects interest for the assets in a CSV file and manages their status.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use household_ledger::{
    asset::{load_assets, save_assets},
    output::{format_won, write_projections},
    projection::PortfolioSummary,
    AssetForm, AssetKind, AssetStatus, AssetStore, MemoryAssetStore, PortfolioRunner,
    ProjectionConfig,
};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "household_ledger", version, about = "Savings and deposit interest projection")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project interest for every asset in a CSV file
    Project(ProjectArgs),
    /// Add an asset to a CSV file
    Add(AddArgs),
    /// Mark an asset as matured or closed
    Status(StatusArgs),
}

#[derive(Args)]
struct ProjectArgs {
    /// Asset CSV file
    #[arg(long)]
    assets: PathBuf,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Withholding tax rate as a fraction between 0 and 1 (default 0.154)
    #[arg(long, value_parser = parse_tax_rate)]
    tax_rate: Option<f64>,

    /// Write per-asset projections to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print projections and totals as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct AddArgs {
    /// Asset CSV file (created if missing)
    #[arg(long)]
    assets: PathBuf,

    /// savings or deposit
    #[arg(long)]
    kind: AssetKind,

    #[arg(long, default_value = "")]
    bank_name: String,

    /// Principal in won
    #[arg(long)]
    principal: f64,

    /// Annual rate in percent
    #[arg(long)]
    annual_rate: f64,

    /// Maturity date (YYYY-MM-DD)
    #[arg(long)]
    maturity_date: NaiveDate,
}

#[derive(Args)]
struct StatusArgs {
    /// Asset CSV file
    #[arg(long)]
    assets: PathBuf,

    /// Asset id
    #[arg(long)]
    id: String,

    /// New status: matured or closed
    #[arg(long)]
    status: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    as_of: NaiveDate,
    projections: &'a [household_ledger::projection::AssetProjection],
    summary: PortfolioSummary,
}

fn parse_tax_rate(raw: &str) -> std::result::Result<f64, String> {
    let rate: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    ProjectionConfig::try_with_tax_rate(rate)
        .map(|config| config.withholding_tax_rate)
        .map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Project(args) => run_project(args),
        Command::Add(args) => run_add(args),
        Command::Status(args) => run_status(args),
    }
}

fn run_project(args: ProjectArgs) -> Result<()> {
    let assets = load_assets(&args.assets)
        .with_context(|| format!("failed to load assets from {}", args.assets.display()))?;

    let config = match args.tax_rate {
        Some(rate) => ProjectionConfig::try_with_tax_rate(rate)?,
        None => ProjectionConfig::from_env(),
    };
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());

    let runner = PortfolioRunner::new(config);
    let projections = runner.project_all(&assets, as_of);
    let summary = PortfolioSummary::from_projections(&projections);

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_projections(file, &projections)?;
        log::info!("projections written to {}", path.display());
    }

    if args.json {
        let report = JsonReport {
            as_of,
            projections: &projections,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Asset interest projection as of {}", as_of);
    println!(
        "{:<10} {:<8} {:<12} {:>15} {:>7} {:<10} {:>12} {:>12} {:>6} {:<8}",
        "Id", "Kind", "Bank", "Principal", "Rate", "Maturity", "Pre-tax", "After-tax", "Days", "Status"
    );
    println!("{}", "-".repeat(110));

    for p in &projections {
        println!(
            "{:<10} {:<8} {:<12} {:>15} {:>6.2}% {:<10} {:>12} {:>12} {:>6} {:<8}",
            p.asset.id,
            p.asset.kind.as_str(),
            p.asset.bank_name,
            format_won(p.asset.principal),
            p.asset.annual_rate,
            p.asset.maturity_date,
            format_won(p.projection.interest_before_tax),
            format_won(p.projection.interest_after_tax),
            p.projection.days_remaining,
            p.asset.status,
        );
    }

    println!("\nSummary:");
    println!("  Assets:              {} ({} active)", summary.asset_count, summary.active_count);
    println!("  Total principal:     {}", format_won(summary.total_principal));
    println!("  Interest before tax: {}", format_won(summary.total_interest_before_tax));
    println!("  Interest after tax:  {}", format_won(summary.total_interest_after_tax));

    Ok(())
}

fn open_store(path: &Path) -> Result<MemoryAssetStore> {
    if !path.exists() {
        return Ok(MemoryAssetStore::new());
    }
    let assets = load_assets(path)
        .with_context(|| format!("failed to load assets from {}", path.display()))?;
    Ok(MemoryAssetStore::from_assets(assets))
}

fn save_store(path: &Path, store: &MemoryAssetStore) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    save_assets(file, &store.list())?;
    Ok(())
}

fn run_add(args: AddArgs) -> Result<()> {
    let mut store = open_store(&args.assets)?;

    let form = AssetForm {
        kind: args.kind,
        bank_name: args.bank_name,
        principal: args.principal,
        annual_rate: args.annual_rate,
        maturity_date: args.maturity_date,
    };
    let asset = store.create(form, Local::now().naive_local())?;
    save_store(&args.assets, &store)?;

    println!("Added {} ({}, matures {})", asset.id, asset.kind.as_str(), asset.maturity_date);
    Ok(())
}

fn run_status(args: StatusArgs) -> Result<()> {
    let status: AssetStatus = args.status.parse()?;
    let mut store = open_store(&args.assets)?;

    let asset = store.update_status(&args.id, status, Local::now().naive_local())?;
    save_store(&args.assets, &store)?;

    println!("{} is now {}", asset.id, asset.status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_args(extra: &[&str]) -> std::result::Result<Cli, clap::Error> {
        let mut argv = vec!["household_ledger", "project", "--assets", "assets.csv"];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv)
    }

    #[test]
    fn test_tax_rate_argument_range() {
        let cli = project_args(&["--tax-rate", "0.099"]).unwrap();
        match cli.command {
            Command::Project(args) => assert_eq!(args.tax_rate, Some(0.099)),
            _ => panic!("expected project subcommand"),
        }

        assert!(project_args(&["--tax-rate", "1.5"]).is_err());
        assert!(project_args(&["--tax-rate", "-0.1"]).is_err());
        assert!(project_args(&["--tax-rate", "abc"]).is_err());
    }
}
