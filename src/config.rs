//! @ai:module:intent Configuration structs for survey generation and reporting
//! @ai:module:layer infrastructure
//! @ai:module:public_api SurveyConfig, GeneratorConfig, ReportConfig
//! @ai:module:stateless true

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "survey.toml";

/// @ai:intent Main configuration for the survey tool
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// @ai:intent Settings for synthetic survey generation
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_survey_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_file_count")]
    pub file_count: u32,
    /// Fixed seed for reproducible output; OS entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "default_event_name")]
    pub event_name: String,
    #[serde(default = "default_kickoff")]
    pub kickoff: DateTime<Utc>,
}

/// @ai:intent Settings for dashboard generation
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_survey_dir")]
    pub input_dir: PathBuf,
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_survey_dir(),
            file_count: default_file_count(),
            seed: None,
            event_name: default_event_name(),
            kickoff: default_kickoff(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_dir: default_survey_dir(),
            output_file: default_output_file(),
        }
    }
}

fn default_survey_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_file_count() -> u32 {
    56
}

fn default_event_name() -> String {
    "Test Event".to_string()
}

// 2023-10-01T15:00:00Z
fn default_kickoff() -> DateTime<Utc> {
    DateTime::from_timestamp(1_696_172_400, 0).unwrap_or_default()
}

fn default_output_file() -> PathBuf {
    PathBuf::from("Hospitality_Dashboard_Fixed.html")
}

impl SurveyConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_values() {
        let config = SurveyConfig::default();
        assert_eq!(config.generator.output_dir, PathBuf::from("output"));
        assert_eq!(config.generator.file_count, 56);
        assert_eq!(config.report.input_dir, config.generator.output_dir);
        assert_eq!(
            config.generator.kickoff.to_rfc3339(),
            "2023-10-01T15:00:00+00:00"
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: SurveyConfig = toml::from_str("[generator]\nfile_count = 3\n").unwrap();
        assert_eq!(config.generator.file_count, 3);
        assert_eq!(config.generator.event_name, "Test Event");
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("survey.toml");

        let mut config = SurveyConfig::default();
        config.generator.seed = Some(42);
        config.report.output_file = PathBuf::from("dashboard.html");
        config.save(&path).unwrap();

        let loaded = SurveyConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
