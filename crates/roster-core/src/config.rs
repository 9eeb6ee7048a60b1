//! Roster configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::classifier::Classifier;
use crate::model::{DEFAULT_PASS_THRESHOLD, MAX_SCORE, MIN_SCORE};

/// Environment variable overriding the pass threshold.
pub const PASS_THRESHOLD_ENV: &str = "ROSTER_PASS_THRESHOLD";

/// Top-level roster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Minimum score counted as passing.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: u8,
    /// How long a notice stays visible, in milliseconds.
    #[serde(default = "default_notice_ms")]
    pub notice_ms: u64,
    /// Load the sample records when a session starts.
    #[serde(default = "default_true")]
    pub seed_on_start: bool,
}

fn default_pass_threshold() -> u8 {
    DEFAULT_PASS_THRESHOLD
}
fn default_notice_ms() -> u64 {
    3000
}
fn default_true() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            pass_threshold: default_pass_threshold(),
            notice_ms: default_notice_ms(),
            seed_on_start: true,
        }
    }
}

impl RosterConfig {
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.pass_threshold)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            (MIN_SCORE..=MAX_SCORE).contains(&self.pass_threshold),
            "pass_threshold must be between {MIN_SCORE} and {MAX_SCORE}, got {}",
            self.pass_threshold
        );
        Ok(())
    }

    /// Parse a TOML string into a validated config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RosterConfig = toml::from_str(content).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Without a path the search order is:
/// 1. `roster.toml` in the current directory
/// 2. `~/.config/roster/config.toml`
///
/// `ROSTER_PASS_THRESHOLD` overrides the threshold from any file.
pub fn load_config_from(path: Option<&Path>) -> Result<RosterConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("roster.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<RosterConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => RosterConfig::default(),
    };

    if let Ok(value) = std::env::var(PASS_THRESHOLD_ENV) {
        config.pass_threshold = value
            .trim()
            .parse()
            .with_context(|| format!("invalid {PASS_THRESHOLD_ENV}: '{value}'"))?;
    }

    config.validate()?;
    tracing::debug!(?config, "loaded config");
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("roster"))
}
