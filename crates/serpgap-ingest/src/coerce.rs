//! Parse-or-zero coercion for numeric export cells.
//!
//! Ranking exports write numbers with formatting noise: thousands separators
//! (`"1,200"`), stray quotes, currency marks (`$1.85`), percent signs
//! (`61%`). These helpers strip that noise with plain character scanning
//! rather than `regex`, then parse; a cell that still fails to parse
//! coerces to zero. Nothing in this module returns an error.

use rust_decimal::Decimal;
use serpgap_core::Rank;

/// Strip quoting and formatting characters from a numeric cell.
fn clean_numeric(cell: &str) -> String {
    cell.trim()
        .trim_matches('"')
        .chars()
        .filter(|&c| c != ',' && c != '$' && c != '%' && !c.is_whitespace())
        .collect()
}

/// Parse a non-negative integer cell, coercing failures to zero.
///
/// Accepts a decimal tail (`"880.0"`) since some exports write whole
/// numbers as floats.
#[must_use]
pub fn u64_or_zero(cell: &str) -> u64 {
    let cleaned = clean_numeric(cell);
    if let Ok(v) = cleaned.parse::<u64>() {
        return v;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    cleaned.parse::<f64>().map_or(0, |v| {
        if v.is_finite() && v > 0.0 {
            v as u64
        } else {
            0
        }
    })
}

/// Parse a float cell, coercing failures (and non-finite values) to zero.
#[must_use]
pub fn f64_or_zero(cell: &str) -> f64 {
    clean_numeric(cell)
        .parse::<f64>()
        .map_or(0.0, |v| if v.is_finite() { v } else { 0.0 })
}

/// Parse a currency cell, coercing failures to zero.
#[must_use]
pub fn decimal_or_zero(cell: &str) -> Decimal {
    clean_numeric(cell).parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Decode a rank cell. The export writes `0` for "not ranking", so zero and
/// every coercion failure land on `None`.
#[must_use]
pub fn rank_or_none(cell: &str) -> Option<Rank> {
    Rank::new(u32::try_from(u64_or_zero(cell)).unwrap_or(0))
}

/// Decode a landing-page cell. `-` and empty cells mean "no page".
#[must_use]
pub fn page_or_none(cell: &str) -> Option<String> {
    let trimmed = cell.trim().trim_matches('"').trim();
    if trimmed.is_empty() || trimmed == "-" {
        None
    } else {
        Some(trimmed.to_string())
    }
}
