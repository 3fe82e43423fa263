//! Shared helpers for CLI integration tests

use std::path::PathBuf;

use clap::Parser;
use step_awards_cli::config::CliConfig;
use step_awards_cli::{run, Cli};
use tempfile::TempDir;

/// A data file in a temporary directory
pub struct TestData {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestData {
    pub fn new(json: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("steps-data.json");
        std::fs::write(&path, json).expect("write data file");
        Self { _dir: dir, path }
    }

    /// Run the CLI against this file and capture stdout
    pub fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let mut argv = vec!["step-awards-cli", "--data", self.path.to_str().expect("utf-8 path")];
        argv.extend_from_slice(args);

        let cli = Cli::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(cli, &CliConfig::default(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    pub fn contents(&self) -> String {
        std::fs::read_to_string(&self.path).expect("read data file")
    }
}

/// Two met days ending 2024-01-10 plus an unlocked first entry
pub const SAMPLE: &str = r#"{
    "settings": { "daily_step_goal": 5000, "include_weekends": false, "units": "metric" },
    "entries": [
        { "date": "2024-01-10", "steps": 6000, "time_minutes": 50, "distance_km": 4.5, "calories": 200 },
        { "date": "2024-01-09", "steps": 5200, "time_minutes": 45, "distance_km": 3.9, "calories": 180 }
    ],
    "awards": [
        { "id": "first_entry", "achieved": true, "date": "2024-01-09", "viewed": true }
    ]
}"#;
