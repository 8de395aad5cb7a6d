//! Report rendering: text tables and JSON over the engine's views.

use chrono::Utc;
use serde::Serialize;
use serpgap_core::{AppConfig, KeywordRecord, Rank, SiteRoster};
use serpgap_engine::{
    badge, better_competitors, competitive_advantages, competitor_gaps, intent_breakdown,
    quick_wins, strategic_priorities, top_opportunities, worse_competitors, Badge,
    DashboardSummary, IntentSummary,
};

use crate::Cli;

/// Everything a report needs: the parsed records plus the roster naming
/// the rank columns.
pub(crate) struct Dataset {
    pub records: Vec<KeywordRecord>,
    pub roster: SiteRoster,
}

/// Resolve the dataset from CLI flags and config: the built-in sample, or
/// the export + roster files.
pub(crate) fn load_dataset(cli: &Cli, config: &AppConfig) -> anyhow::Result<Dataset> {
    if cli.sample {
        return Ok(Dataset {
            records: serpgap_ingest::sample_records(),
            roster: serpgap_ingest::sample_roster(),
        });
    }

    let sites_path = cli.sites.as_deref().unwrap_or(&config.sites_path);
    let data_path = cli.data.as_deref().unwrap_or(&config.data_path);

    let roster = serpgap_core::load_roster(sites_path)?;
    let records = serpgap_ingest::load_records(data_path)?;
    tracing::info!(
        records = records.len(),
        data = %data_path.display(),
        "dataset loaded"
    );

    Ok(Dataset { records, roster })
}

fn rank_cell(rank: Option<Rank>) -> String {
    rank.map_or_else(|| "-".to_string(), |r| r.get().to_string())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct ReportPayload {
    generated_at: chrono::DateTime<Utc>,
    own_site: String,
    summary: DashboardSummary,
    intents: Vec<IntentSummary>,
}

/// Dashboard summary: per-category counts and volumes plus the intent mix.
pub(crate) fn run_report(dataset: &Dataset, top_limit: usize, json: bool) -> anyhow::Result<()> {
    let summary = DashboardSummary::from_records(&dataset.records, top_limit);
    let intents = intent_breakdown(&dataset.records);

    if json {
        return print_json(&ReportPayload {
            generated_at: Utc::now(),
            own_site: dataset.roster.own.name.clone(),
            summary,
            intents,
        });
    }

    println!(
        "keyword-gap report for {} (generated {})",
        dataset.roster.own.name,
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    );
    println!("records analyzed: {}", summary.record_count);
    println!();
    println!("{:<28}{:<12}VOLUME", "CATEGORY", "KEYWORDS");
    for (label, category) in [
        ("Top opportunities", summary.top_opportunities),
        ("Competitor gaps", summary.competitor_gaps),
        ("Competitive advantages", summary.competitive_advantages),
        ("Quick wins", summary.quick_wins),
        ("Strategic priorities", summary.strategic_priorities),
    ] {
        println!("{:<28}{:<12}{}", label, category.count, category.total_volume);
    }

    if !intents.is_empty() {
        println!();
        println!("{:<20}{:<12}VOLUME", "INTENT", "KEYWORDS");
        for intent in &intents {
            println!("{:<20}{:<12}{}", intent.intent, intent.count, intent.total_volume);
        }
    }

    Ok(())
}

pub(crate) fn run_opportunities(dataset: &Dataset, limit: usize, json: bool) -> anyhow::Result<()> {
    let top = top_opportunities(&dataset.records, limit);

    if json {
        return print_json(&top);
    }

    if top.is_empty() {
        println!("no opportunities found; no tracked keyword has a competitor ahead");
        return Ok(());
    }

    println!("{:<32}{:<8}{:<9}{:<7}{:<6}AHEAD", "KEYWORD", "SCORE", "VOLUME", "DIFF", "OWN");
    for scored in &top {
        let record = scored.record;
        println!(
            "{:<32}{:<8.1}{:<9}{:<7.0}{:<6}{}",
            record.keyword,
            scored.score,
            record.volume,
            record.difficulty,
            rank_cell(record.own_rank()),
            better_competitors(record)
        );
    }

    Ok(())
}

pub(crate) fn run_gaps(dataset: &Dataset, limit: Option<usize>, json: bool) -> anyhow::Result<()> {
    let mut gaps = competitor_gaps(&dataset.records);
    if let Some(limit) = limit {
        gaps.truncate(limit);
    }

    if json {
        return print_json(&gaps);
    }

    if gaps.is_empty() {
        println!("no critical gaps found; fewer than two competitors lead on any keyword");
        return Ok(());
    }

    let competitor_names = &dataset.roster.competitors;
    println!(
        "{:<32}{:<9}{:<6}{:<14}{:<14}{:<14}{}",
        "KEYWORD",
        "VOLUME",
        "OWN",
        competitor_names[0].name,
        competitor_names[1].name,
        competitor_names[2].name,
        competitor_names[3].name
    );
    for record in &gaps {
        let ranks = record.competitor_ranks();
        println!(
            "{:<32}{:<9}{:<6}{:<14}{:<14}{:<14}{}",
            record.keyword,
            record.volume,
            rank_cell(record.own_rank()),
            rank_cell(ranks[0]),
            rank_cell(ranks[1]),
            rank_cell(ranks[2]),
            rank_cell(ranks[3])
        );
    }

    Ok(())
}

pub(crate) fn run_advantages(dataset: &Dataset, json: bool) -> anyhow::Result<()> {
    let advantages = competitive_advantages(&dataset.records);

    if json {
        return print_json(&advantages);
    }

    if advantages.is_empty() {
        println!("no competitive advantages found in this dataset");
        return Ok(());
    }

    println!("{:<32}{:<9}{:<6}{:<7}PAGE", "KEYWORD", "VOLUME", "OWN", "BELOW");
    for record in &advantages {
        println!(
            "{:<32}{:<9}{:<6}{:<7}{}",
            record.keyword,
            record.volume,
            rank_cell(record.own_rank()),
            worse_competitors(record),
            record.pages.own.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub(crate) fn run_quick_wins(dataset: &Dataset, json: bool) -> anyhow::Result<()> {
    let wins = quick_wins(&dataset.records);

    if json {
        return print_json(&wins);
    }

    if wins.is_empty() {
        println!("no quick wins found in this dataset");
        return Ok(());
    }

    println!("{:<32}{:<9}{:<7}OWN", "KEYWORD", "VOLUME", "DIFF");
    for record in &wins {
        println!(
            "{:<32}{:<9}{:<7.0}{}",
            record.keyword,
            record.volume,
            record.difficulty,
            rank_cell(record.own_rank())
        );
    }

    Ok(())
}

pub(crate) fn run_priorities(dataset: &Dataset, json: bool) -> anyhow::Result<()> {
    let priorities = strategic_priorities(&dataset.records);

    if json {
        return print_json(&priorities);
    }

    if priorities.is_empty() {
        println!("no strategic priorities found; the own site ranks on every high-volume keyword");
        return Ok(());
    }

    println!("{:<32}{:<9}{:<8}RESULTS", "KEYWORD", "VOLUME", "CPC");
    for record in &priorities {
        println!(
            "{:<32}{:<9}{:<8}{}",
            record.keyword,
            record.volume,
            format!("${}", record.cpc),
            record.results
        );
    }

    Ok(())
}

#[derive(Serialize)]
struct BadgeRow<'a> {
    keyword: &'a str,
    intent: &'a str,
    volume: u64,
    badge: Option<Badge>,
}

pub(crate) fn run_badges(dataset: &Dataset, json: bool) -> anyhow::Result<()> {
    let rows: Vec<BadgeRow<'_>> = dataset
        .records
        .iter()
        .map(|record| BadgeRow {
            keyword: &record.keyword,
            intent: &record.intent,
            volume: record.volume,
            badge: badge(record),
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("no keywords in this dataset");
        return Ok(());
    }

    println!("{:<32}{:<15}{:<9}INTENT", "KEYWORD", "BADGE", "VOLUME");
    for row in &rows {
        let label = row.badge.map_or_else(|| "-".to_string(), |b| b.to_string());
        println!("{:<32}{:<15}{:<9}{}", row.keyword, label, row.volume, row.intent);
    }

    Ok(())
}
