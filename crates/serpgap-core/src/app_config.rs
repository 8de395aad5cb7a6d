use std::path::PathBuf;

/// Application configuration for the CLI, sourced from environment
/// variables with sensible defaults. Nothing here is secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path to the keyword-ranking CSV export.
    pub data_path: PathBuf,
    /// Path to the site roster YAML file.
    pub sites_path: PathBuf,
    /// Log level passed to the tracing subscriber (e.g. `info`, `debug`).
    pub log_level: String,
    /// Default result cap for the top-opportunities view.
    pub top_limit: usize,
}
