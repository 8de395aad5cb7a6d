//! Shared domain types and configuration for the serpgap workspace.
//!
//! Holds the keyword-ranking record shape consumed by `serpgap-engine`,
//! the site roster (own site plus four tracked competitors), and the
//! environment-driven application config used by the CLI.

pub mod app_config;
pub mod config;
pub mod record;
pub mod roster;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use record::{KeywordRecord, PageSet, Rank, RankingSet, COMPETITOR_COUNT};
pub use roster::{load_roster, SiteConfig, SiteRoster};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read sites file {path}: {source}")]
    SitesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sites file: {0}")]
    SitesFileParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
