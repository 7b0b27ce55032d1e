use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, TimeZone, Utc};
use core_types::{PricePoint, PriceSeries};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

/// Reads a local price history into a `PriceSeries`.
///
/// Accepts one observation per line as `date,close` or `date close`, dates
/// in `YYYY-MM-DD`. A single leading header row, blank lines, and
/// `#`-prefixed lines are skipped; extra trailing fields are ignored. Rows
/// must already be in ascending date order; unordered or duplicate dates
/// are rejected, not reordered.
pub fn load_price_file(path: &Path) -> Result<PriceSeries> {
    let content = std::fs::read_to_string(path)?;

    let mut points = Vec::new();
    for (number, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty());
        let (Some(date_field), Some(close_field)) = (fields.next(), fields.next()) else {
            bail!("line {}: expected `date,close`, got {:?}", number + 1, line);
        };

        let date = match NaiveDate::parse_from_str(date_field, "%Y-%m-%d") {
            Ok(date) => date,
            // Tolerate one header row such as `Date,Close`.
            Err(_) if number == 0 => continue,
            Err(e) => bail!("line {}: invalid date {:?}: {}", number + 1, date_field, e),
        };
        let close = Decimal::from_str(close_field)
            .with_context(|| format!("line {}: invalid close {:?}", number + 1, close_field))?;

        points.push(PricePoint {
            timestamp: Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap()),
            close,
        });
    }

    if points.is_empty() {
        bail!("no price rows found in {}", path.display());
    }
    Ok(PriceSeries::new(points)?)
}
