use std::path::{Path, PathBuf};

use anyhow::Context;

/// User defaults read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root used when a command gets no `--root`
    pub default_root: String,
    pub bpm: u16,
    pub sample_rate: u32,
    /// Print JSON instead of text
    pub json: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_root: "C".to_string(),
            bpm: 120,
            sample_rate: 48_000,
            json: false,
            log_level: "info".to_string(),
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("harmonia")
        .join("config.toml")
}

pub fn parse_config(text: &str) -> anyhow::Result<AppConfig> {
    toml::from_str(text).context("invalid config.toml")
}

/// Load the config at `path`. A missing file is not an error.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&text)
}
