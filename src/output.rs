//! Projection output: CSV rows and won formatting for the console

use crate::error::Result;
use crate::projection::AssetProjection;
use csv::Writer;

/// Write one CSV row per projected asset
pub fn write_projections<W: std::io::Write>(writer: W, projections: &[AssetProjection]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record([
        "id",
        "kind",
        "bank_name",
        "principal",
        "annual_rate",
        "maturity_date",
        "status",
        "interest_before_tax",
        "interest_after_tax",
        "days_remaining",
    ])?;

    for AssetProjection { asset, projection } in projections {
        csv_writer.write_record([
            asset.id.clone(),
            asset.kind.as_str().to_string(),
            asset.bank_name.clone(),
            format!("{:.2}", asset.principal),
            format!("{:.2}", asset.annual_rate),
            asset.maturity_date.format("%Y-%m-%d").to_string(),
            asset.status.as_str().to_string(),
            format!("{:.2}", projection.interest_before_tax),
            format!("{:.2}", projection.interest_after_tax),
            projection.days_remaining.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Round to whole won and group thousands: `1234567.6` -> `"1,234,568"`
pub fn format_won(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
