use crate::model::conference::Tag;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    /// Tag filter selected at startup ("ALL", "KEYNOTE", ...)
    pub initial_filter: String,
    /// Optional path to an external program JSON file
    #[serde(default)]
    pub program_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            initial_filter: "ALL".to_string(),
            program_path: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".conf-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Startup filter, falling back to ALL when the configured value
    /// is not a known tag.
    pub fn initial_filter(&self) -> Tag {
        self.initial_filter.parse().unwrap_or_default()
    }
}
