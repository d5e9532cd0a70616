//! Configuration loader
//!
//! Loads and validates the YAML chart configuration: column mapping, search
//! toggle and leaf naming policy.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use org_chart_core::{LeafNaming, LevelColumnMapping};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "ORG_CHART_CONFIG";

/// Config file used when nothing else is specified.
pub const DEFAULT_CONFIG_FILE: &str = "org_chart.yaml";

/// Chart configuration as written in YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub mapping: LevelColumnMapping,
    /// Whether the host offers search at all.
    #[serde(default = "default_search_enabled")]
    pub search_enabled: bool,
    #[serde(default)]
    pub leaf_naming: LeafNaming,
}

fn default_search_enabled() -> bool {
    true
}

impl ChartConfig {
    pub fn new(mapping: LevelColumnMapping) -> Self {
        Self {
            mapping,
            search_enabled: true,
            leaf_naming: LeafNaming::default(),
        }
    }
}

pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create loader from ORG_CHART_CONFIG or default to "org_chart.yaml"
    ///
    /// Path resolution order:
    /// 1. Explicit path (e.g. from a CLI flag)
    /// 2. ORG_CHART_CONFIG environment variable
    /// 3. org_chart.yaml in the working directory
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return Self::new(path);
        }
        Self::from_env()
    }

    pub fn from_env() -> Self {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::new(path),
            _ => Self::new(DEFAULT_CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, parse and validate the config file.
    pub fn load(&self) -> Result<ChartConfig> {
        info!("Loading chart configuration from {}", self.path.display());

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config {}", self.path.display()))
    }

    /// Parse and validate config text.
    pub fn parse(content: &str) -> Result<ChartConfig> {
        let config: ChartConfig =
            serde_yaml::from_str(content).context("Failed to parse chart config YAML")?;

        config.mapping.validate()?;

        info!(
            levels = config.mapping.levels.iter().flatten().count(),
            search_enabled = config.search_enabled,
            leaf_naming = ?config.leaf_naming,
            "Loaded chart configuration"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const YAML: &str = r#"
mapping:
  full_name: BEBL Full Name
  unit_id: Business Unit Id
  unit_name: Business Unit Name
  levels:
    - Level 0
    - Level 1
    - ~
    - Level 3
"#;

    #[test]
    fn test_parse_with_defaults() {
        let config = ConfigLoader::parse(YAML).unwrap();

        assert_eq!(config.mapping.full_name, "BEBL Full Name");
        assert_eq!(config.mapping.unit_name.as_deref(), Some("Business Unit Name"));
        assert_eq!(
            config.mapping.levels,
            vec![
                Some("Level 0".to_string()),
                Some("Level 1".to_string()),
                None,
                Some("Level 3".to_string()),
            ]
        );
        assert!(config.search_enabled);
        assert_eq!(config.leaf_naming, LeafNaming::FirstWrite);
    }

    #[test]
    fn test_parse_explicit_options() {
        let yaml = format!("{}search_enabled: false\nleaf_naming: promote\n", YAML);
        let config = ConfigLoader::parse(&yaml).unwrap();
        assert!(!config.search_enabled);
        assert_eq!(config.leaf_naming, LeafNaming::Promote);
    }

    #[test]
    fn test_missing_level_zero_rejected() {
        let yaml = "mapping:\n  full_name: a\n  unit_id: b\n  levels: [~, Level 1]\n";
        let err = ConfigLoader::parse(yaml).unwrap_err();
        assert!(err.to_string().contains("level 0"), "{}", err);
    }

    #[test]
    fn test_missing_mapping_field_rejected() {
        assert!(ConfigLoader::parse("mapping:\n  unit_id: b\n").is_err());
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let loader = ConfigLoader::resolve(Some(PathBuf::from("custom.yaml")));
        assert_eq!(loader.path(), Path::new("custom.yaml"));
    }
}
