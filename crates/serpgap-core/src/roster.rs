use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::record::COMPETITOR_COUNT;
use crate::ConfigError;

/// One tracked site: the dashboard owner or a competitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub domain: Option<String>,
    pub notes: Option<String>,
}

impl SiteConfig {
    /// Generate a URL-safe slug from the site name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// The fixed set of sites every keyword row is measured against: the own
/// site plus exactly four competitors, in the column order of the export.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteRoster {
    pub own: SiteConfig,
    pub competitors: Vec<SiteConfig>,
}

impl SiteRoster {
    /// Site names in roster order, own site first. Matches the order of
    /// the rank and page columns in the export.
    #[must_use]
    pub fn site_names(&self) -> Vec<&str> {
        std::iter::once(self.own.name.as_str())
            .chain(self.competitors.iter().map(|c| c.name.as_str()))
            .collect()
    }
}

/// Load and validate the site roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (wrong competitor count, empty names, duplicate slugs).
pub fn load_roster(path: &Path) -> Result<SiteRoster, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SitesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let roster: SiteRoster = serde_yaml::from_str(&content)?;

    validate_roster(&roster)?;

    Ok(roster)
}

fn validate_roster(roster: &SiteRoster) -> Result<(), ConfigError> {
    if roster.competitors.len() != COMPETITOR_COUNT {
        return Err(ConfigError::Validation(format!(
            "expected exactly {COMPETITOR_COUNT} competitors, found {}",
            roster.competitors.len()
        )));
    }

    let mut seen_slugs = HashSet::new();

    for site in std::iter::once(&roster.own).chain(&roster.competitors) {
        if site.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site name must be non-empty".to_string(),
            ));
        }

        let slug = site.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate site slug: '{slug}' (from site '{}')",
                site.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(name: &str) -> SiteConfig {
        SiteConfig {
            name: name.to_string(),
            domain: None,
            notes: None,
        }
    }

    fn roster_with_competitors(names: &[&str]) -> SiteRoster {
        SiteRoster {
            own: site("Our Site"),
            competitors: names.iter().map(|n| site(n)).collect(),
        }
    }

    #[test]
    fn slug_simple_name() {
        assert_eq!(site("Brew Query").slug(), "brew-query");
    }

    #[test]
    fn slug_special_characters() {
        assert_eq!(site("Rank & File SEO").slug(), "rank-file-seo");
    }

    #[test]
    fn site_names_puts_own_first() {
        let roster = roster_with_competitors(&["A", "B", "C", "D"]);
        assert_eq!(roster.site_names(), vec!["Our Site", "A", "B", "C", "D"]);
    }

    #[test]
    fn validate_rejects_wrong_competitor_count() {
        let roster = roster_with_competitors(&["A", "B", "C"]);
        let err = validate_roster(&roster).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn validate_rejects_duplicate_slug() {
        let roster = roster_with_competitors(&["Rival One", "rival one", "C", "D"]);
        let err = validate_roster(&roster).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn validate_rejects_empty_name() {
        let roster = roster_with_competitors(&["A", "B", "C", "  "]);
        let err = validate_roster(&roster).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn validate_accepts_full_roster() {
        let roster = roster_with_competitors(&["A", "B", "C", "D"]);
        assert!(validate_roster(&roster).is_ok());
    }
}
