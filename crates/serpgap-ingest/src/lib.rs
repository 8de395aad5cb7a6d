//! Keyword-record ingestion for serpgap.
//!
//! Parses the comma-separated keyword-ranking export into
//! [`serpgap_core::KeywordRecord`] values under the parse-or-zero coercion
//! contract (formatting noise is stripped, unparseable numeric cells become
//! zero), and ships a built-in sample dataset so the CLI and tests work
//! without an export on disk.

pub mod coerce;
pub mod error;
pub mod export;
pub mod sample;

pub use error::IngestError;
pub use export::{load_records, parse_records, COLUMN_COUNT};
pub use sample::{sample_records, sample_roster};
