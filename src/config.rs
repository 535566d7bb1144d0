//! Optional settings. The monitor runs without any config file or environment
//! variable: `netmon.toml` (or the file named by `CONFIG_FILE`) is an extra
//! that only overrides the built-in defaults, which reproduce the stock
//! behaviour (2 s polling, `network_log.txt`, per-interval rates).

use crate::models::{RateBasis, RolloverPolicy};
use crate::render::TableStyle;
use crate::usage_log::DEFAULT_LOG_PATH;
use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "netmon.toml";

/// Every section and key is optional; a missing config file means defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub monitor: MonitorConfig,
    pub log: LogConfig,
    pub terminal: TerminalConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub sample_interval_ms: u64,
    /// How to report a counter that went backwards between two samples.
    pub rollover: RolloverPolicy,
    /// `per_interval` shows bytes moved since the previous sample;
    /// `per_second` divides by the measured time between samples.
    pub rate: RateBasis,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 2000,
            rollover: RolloverPolicy::Clamp,
            rate: RateBasis::PerInterval,
        }
    }
}

impl MonitorConfig {
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: DEFAULT_LOG_PATH.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub style: TableStyle,
    /// Also show cumulative totals per network interface.
    pub show_interfaces: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            style: TableStyle::Colored,
            show_interfaces: true,
        }
    }
}

impl AppConfig {
    /// Read `CONFIG_FILE` (default `netmon.toml`). A missing file yields the
    /// defaults; an unreadable or invalid one is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::load_from_str(&s).with_context(|| format!("config {}", path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path, "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e).with_context(|| format!("read config {}", path)),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.monitor.sample_interval_ms > 0,
            "monitor.sample_interval_ms must be > 0, got {}",
            self.monitor.sample_interval_ms
        );
        anyhow::ensure!(
            !self.log.enabled || !self.log.path.trim().is_empty(),
            "log.path must be non-empty when log.enabled is true"
        );
        Ok(())
    }
}
