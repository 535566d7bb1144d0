// Append-only plaintext usage log, one line per sample

use crate::format::format_bytes;
use crate::models::Sample;
use anyhow::Context;
use chrono::NaiveDateTime;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_PATH: &str = "network_log.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `2024-01-02 03:04:05 | Upload: 3.0 KB | Download: 2.0 MB` (no newline).
/// Values are the cumulative totals of the sample.
pub fn log_line(timestamp: NaiveDateTime, sample: &Sample) -> String {
    format!(
        "{} | Upload: {} | Download: {}",
        timestamp.format(TIMESTAMP_FORMAT),
        format_bytes(sample.bytes_sent),
        format_bytes(sample.bytes_received)
    )
}

/// Opens, appends and closes the file on every write. After the first failed
/// write the log disables itself and further appends are no-ops.
pub struct UsageLog {
    path: PathBuf,
    disabled: bool,
}

impl UsageLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            disabled: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Append one line for `sample`. Returns whether a line was written.
    pub fn append(&mut self, timestamp: NaiveDateTime, sample: &Sample) -> bool {
        if self.disabled {
            return false;
        }
        match self.write_line(&log_line(timestamp, sample)) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    error = %format!("{:#}", e),
                    path = %self.path.display(),
                    operation = "append_usage_log",
                    "usage log write failed; logging disabled for this run"
                );
                self.disabled = true;
                false
            }
        }
    }

    fn write_line(&self, line: &str) -> anyhow::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;
        writeln!(file, "{}", line).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}
