use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod report;

#[derive(Debug, Parser)]
#[command(name = "serpgap-cli")]
#[command(about = "Competitive keyword-gap analysis over SEO ranking exports")]
struct Cli {
    /// Use the built-in sample dataset instead of reading an export.
    #[arg(long, global = true)]
    sample: bool,

    /// Path to the keyword CSV export. Defaults to SERPGAP_DATA_PATH.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Path to the site roster YAML. Defaults to SERPGAP_SITES_PATH.
    #[arg(long, global = true)]
    sites: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Dashboard summary across every strategic category.
    Report,
    /// Scored keywords where at least one competitor outranks the own site.
    Opportunities {
        /// Cap on returned rows. Defaults to SERPGAP_TOP_LIMIT.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Keywords where two or more competitors outrank the own site.
    Gaps {
        /// Cap on displayed rows; all matches are shown by default.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Keywords the own site already holds against the field.
    Advantages,
    /// Low-difficulty keywords where the own site has no position to defend.
    QuickWins,
    /// High-volume keywords the own site does not rank for at all.
    Priorities,
    /// Per-keyword category badges.
    Badges,
}

fn main() -> anyhow::Result<()> {
    let config = serpgap_core::load_app_config()?;

    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let dataset = report::load_dataset(&cli, &config)?;
    let json = cli.format == Format::Json;

    match cli.command {
        Commands::Report => report::run_report(&dataset, config.top_limit, json),
        Commands::Opportunities { limit } => {
            report::run_opportunities(&dataset, limit.unwrap_or(config.top_limit), json)
        }
        Commands::Gaps { limit } => report::run_gaps(&dataset, limit, json),
        Commands::Advantages => report::run_advantages(&dataset, json),
        Commands::QuickWins => report::run_quick_wins(&dataset, json),
        Commands::Priorities => report::run_priorities(&dataset, json),
        Commands::Badges => report::run_badges(&dataset, json),
    }
}

#[cfg(test)]
mod tests;
