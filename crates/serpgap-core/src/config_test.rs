use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.data_path, PathBuf::from("./data/keywords.csv"));
    assert_eq!(cfg.sites_path, PathBuf::from("./config/sites.yaml"));
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.top_limit, 10);
}

#[test]
fn build_app_config_honors_overrides() {
    let mut map = HashMap::new();
    map.insert("SERPGAP_DATA_PATH", "/exports/latest.csv");
    map.insert("SERPGAP_LOG_LEVEL", "debug");
    map.insert("SERPGAP_TOP_LIMIT", "25");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.data_path, PathBuf::from("/exports/latest.csv"));
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.top_limit, 25);
}

#[test]
fn build_app_config_fails_with_non_numeric_top_limit() {
    let mut map = HashMap::new();
    map.insert("SERPGAP_TOP_LIMIT", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SERPGAP_TOP_LIMIT"),
        "expected InvalidEnvVar(SERPGAP_TOP_LIMIT), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_zero_top_limit() {
    let mut map = HashMap::new();
    map.insert("SERPGAP_TOP_LIMIT", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SERPGAP_TOP_LIMIT"),
        "expected InvalidEnvVar(SERPGAP_TOP_LIMIT), got: {result:?}"
    );
}
