//! Run configuration
//!
//! Every field has a default, so an empty YAML document is a valid config.

use crate::error::{CohortError, CohortResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Limits enforced while loading a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationLimits {
    /// Maximum number of users
    pub max_users: usize,
    /// Maximum number of tags on one user
    pub max_tags_per_user: usize,
    /// Maximum length of one tag, in characters, without the `#`
    pub max_tag_len: usize,
}

impl Default for PopulationLimits {
    fn default() -> Self {
        Self {
            max_users: 50,
            max_tags_per_user: 10,
            max_tag_len: 20,
        }
    }
}

/// Text report layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Hashtags printed per line before wrapping
    pub tags_per_line: usize,
    /// Decimal places for strengths
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            tags_per_line: 5,
            precision: 2,
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> CohortResult<()> {
        if self.tags_per_line == 0 {
            return Err(CohortError::Config(
                "report.tags_per_line must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CohortConfig {
    pub limits: PopulationLimits,
    pub report: ReportConfig,
}

impl CohortConfig {
    pub fn from_yaml_str(yaml: &str) -> CohortResult<Self> {
        // serde_yaml rejects an empty document, treat it as all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: CohortConfig = serde_yaml::from_str(yaml)?;
        config.report.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CohortResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CohortConfig::default();
        assert_eq!(config.limits.max_users, 50);
        assert_eq!(config.limits.max_tags_per_user, 10);
        assert_eq!(config.limits.max_tag_len, 20);
        assert_eq!(config.report.tags_per_line, 5);
        assert_eq!(config.report.precision, 2);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = CohortConfig::from_yaml_str("limits:\n  max_users: 8\n").unwrap();
        assert_eq!(config.limits.max_users, 8);
        assert_eq!(config.limits.max_tags_per_user, 10);
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(CohortConfig::from_yaml_str("").unwrap(), CohortConfig::default());
    }

    #[test]
    fn test_zero_tags_per_line_rejected() {
        let err = CohortConfig::from_yaml_str("report:\n  tags_per_line: 0\n").unwrap_err();
        assert!(matches!(err, CohortError::Config(_)));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let err = CohortConfig::from_yaml_str("limits: [1, 2").unwrap_err();
        assert!(matches!(err, CohortError::Yaml(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "report:\n  precision: 3").unwrap();

        let config = CohortConfig::from_path(file.path()).unwrap();
        assert_eq!(config.report.precision, 3);
        assert_eq!(config.report.tags_per_line, 5);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CohortConfig::from_path(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, CohortError::Io(_)));
    }
}
