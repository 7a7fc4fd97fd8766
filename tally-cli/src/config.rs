use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the config lives when `--config` is not given: `~/.tally/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tally").join("config.toml"))
}

/// `--config` wins over the default location
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub scan: ScanSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySection {
    pub currency_symbol: String,
    /// IANA zone used when printing expense dates
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSection {
    /// How long the simulated receipt processing takes
    pub processing_delay_ms: u64,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            processing_delay_ms: 2000,
        }
    }
}

impl Config {
    /// Parsed display timezone; falls back to UTC for unknown names
    pub fn timezone(&self) -> Tz {
        self.display.timezone.parse().unwrap_or_else(|_| {
            warn!(timezone = %self.display.timezone, "unknown timezone, using UTC");
            Tz::UTC
        })
    }
}

/// Settings at `path`; defaults when the file does not exist yet
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_config(&s).with_context(|| format!("in {}", path.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))
}

/// Write the defaults to `path` unless a file is already there.
/// Returns whether anything was written.
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_config(&Config::default(), path)?;
    Ok(true)
}
