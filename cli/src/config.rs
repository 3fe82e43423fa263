//! Configuration management for the step awards CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (config/{RUST_ENV}.toml)
//! 3. Environment variables (prefix: STEPS__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use step_awards_shared::Settings;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Exported tracker data document
    pub data_file: PathBuf,
    pub log_format: LogFormat,
    #[serde(default)]
    pub tracker: TrackerOverrides,
}

/// Log output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Settings overrides for what-if runs; unset fields keep the stored value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerOverrides {
    pub daily_step_goal: Option<u32>,
    pub include_weekends: Option<bool>,
}

impl TrackerOverrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(goal) = self.daily_step_goal {
            settings.daily_step_goal = goal;
        }
        if let Some(include_weekends) = self.include_weekends {
            settings.include_weekends = include_weekends;
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("steps-data.json"),
            log_format: LogFormat::Pretty,
            tracker: TrackerOverrides::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from `config/` and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config"), &environment())
    }

    /// Load configuration with an explicit config directory and environment name
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. `{config_dir}/{env}.toml`, if present
    /// 3. Environment variables with STEPS__ prefix
    pub fn load_from(config_dir: &Path, env: &str) -> Result<Self> {
        let config_file = config_dir.join(format!("{}.toml", env));

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&CliConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::from(config_file).required(false))
            // Override with environment variables (STEPS__ prefix)
            // e.g., STEPS__TRACKER__DAILY_STEP_GOAL=8000 sets tracker.daily_step_goal
            .add_source(
                config::Environment::with_prefix("STEPS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Active environment name from RUST_ENV, defaulting to development
pub fn environment() -> String {
    env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.data_file, PathBuf::from("steps-data.json"));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.tracker, TrackerOverrides::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_from(dir.path(), "nowhere").unwrap();
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.tracker.daily_step_goal, None);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("test.toml"),
            "data_file = \"walks.json\"\nlog_format = \"json\"\n\n[tracker]\ndaily_step_goal = 8000\n",
        )
        .unwrap();

        let config = CliConfig::load_from(dir.path(), "test").unwrap();
        assert_eq!(config.data_file, PathBuf::from("walks.json"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.tracker.daily_step_goal, Some(8000));
        assert_eq!(config.tracker.include_weekends, None);
    }

    #[test]
    fn test_overrides_apply() {
        let mut settings = Settings::default();
        TrackerOverrides {
            daily_step_goal: Some(12_000),
            include_weekends: None,
        }
        .apply(&mut settings);

        assert_eq!(settings.daily_step_goal, 12_000);
        assert!(!settings.include_weekends);
    }
}
