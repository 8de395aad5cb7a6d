use super::*;

#[test]
fn parses_report_command() {
    let cli = Cli::try_parse_from(["serpgap-cli", "report"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Report));
    assert_eq!(cli.format, Format::Text);
    assert!(!cli.sample);
}

#[test]
fn parses_opportunities_with_limit() {
    let cli = Cli::try_parse_from(["serpgap-cli", "opportunities", "--limit", "5"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Opportunities { limit: Some(5) }
    ));
}

#[test]
fn opportunities_limit_defaults_to_none() {
    let cli =
        Cli::try_parse_from(["serpgap-cli", "opportunities"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Opportunities { limit: None }));
}

#[test]
fn sample_and_format_flags_are_global() {
    let cli = Cli::try_parse_from(["serpgap-cli", "badges", "--sample", "--format", "json"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Badges));
    assert!(cli.sample);
    assert_eq!(cli.format, Format::Json);
}

#[test]
fn parses_data_path_override() {
    let cli = Cli::try_parse_from(["serpgap-cli", "gaps", "--data", "/tmp/export.csv"])
        .expect("expected valid cli args");
    assert_eq!(cli.data.as_deref(), Some(std::path::Path::new("/tmp/export.csv")));
}

#[test]
fn rejects_unknown_command() {
    assert!(Cli::try_parse_from(["serpgap-cli", "rankings"]).is_err());
}
