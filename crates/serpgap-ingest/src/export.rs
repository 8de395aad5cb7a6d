//! Parsing of the keyword-ranking CSV export.
//!
//! Column order is fixed: keyword, intent, volume, difficulty, CPC,
//! competition density, five rank columns (own site then four competitors),
//! five landing-page columns in the same order, results count. Numeric cells
//! go through [`crate::coerce`]; only structural breakage (unreadable file,
//! wrong column count, empty keyword) is an error.

use std::path::Path;

use serpgap_core::{KeywordRecord, PageSet, RankingSet};

use crate::coerce::{decimal_or_zero, f64_or_zero, page_or_none, rank_or_none, u64_or_zero};
use crate::error::IngestError;

/// Number of columns in the export.
pub const COLUMN_COUNT: usize = 17;

/// Load keyword records from an export file.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the file cannot be read, or
/// [`IngestError::Row`] for a structurally broken row.
pub fn load_records(path: &Path) -> Result<Vec<KeywordRecord>, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let records = parse_records(&content)?;
    tracing::debug!(
        path = %path.display(),
        count = records.len(),
        "loaded keyword export"
    );
    Ok(records)
}

/// Parse keyword records from export text.
///
/// Blank lines are skipped. A leading header row (first cell `keyword`,
/// case-insensitive) is skipped.
///
/// # Errors
///
/// Returns [`IngestError::Row`] for a row with the wrong column count or an
/// empty keyword cell.
pub fn parse_records(input: &str) -> Result<Vec<KeywordRecord>, IngestError> {
    let mut records = Vec::new();
    let mut seen_data = false;

    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let cells = split_line(line);

        // Header detection only applies before the first data row.
        if !seen_data && cells.first().is_some_and(|c| c.trim().eq_ignore_ascii_case("keyword")) {
            continue;
        }
        seen_data = true;

        records.push(record_from_cells(&cells, idx + 1)?);
    }

    Ok(records)
}

/// Split one CSV line into cells. Quote-aware: commas inside double quotes
/// do not split, and doubled quotes escape a literal quote.
fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    cells.push(current);
    cells
}

fn record_from_cells(cells: &[String], line: usize) -> Result<KeywordRecord, IngestError> {
    if cells.len() != COLUMN_COUNT {
        return Err(IngestError::Row {
            line,
            reason: format!("expected {COLUMN_COUNT} columns, found {}", cells.len()),
        });
    }

    let keyword = cells[0].trim();
    if keyword.is_empty() {
        return Err(IngestError::Row {
            line,
            reason: "empty keyword cell".to_string(),
        });
    }

    let rankings = RankingSet {
        own: rank_or_none(&cells[6]),
        competitors: [
            rank_or_none(&cells[7]),
            rank_or_none(&cells[8]),
            rank_or_none(&cells[9]),
            rank_or_none(&cells[10]),
        ],
    };

    let pages = PageSet {
        own: page_or_none(&cells[11]),
        competitors: [
            page_or_none(&cells[12]),
            page_or_none(&cells[13]),
            page_or_none(&cells[14]),
            page_or_none(&cells[15]),
        ],
    };

    Ok(KeywordRecord {
        keyword: keyword.to_string(),
        intent: cells[1].trim().to_string(),
        volume: u64_or_zero(&cells[2]),
        difficulty: f64_or_zero(&cells[3]),
        cpc: decimal_or_zero(&cells[4]),
        competition_density: f64_or_zero(&cells[5]),
        rankings,
        pages,
        results: u64_or_zero(&cells[16]),
    })
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
