// Per-interval throughput between two samples

use super::Sample;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to do when a counter went backwards between two samples
/// (interface reset, reboot, 32-bit wrap in the driver).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolloverPolicy {
    /// Report zero throughput for the interval.
    #[default]
    Clamp,
    /// Report the negative difference as-is.
    Passthrough,
}

/// What the displayed throughput is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBasis {
    /// Bytes moved since the previous sample, shown as-is.
    #[default]
    PerInterval,
    /// Bytes moved divided by the measured time between the two samples.
    PerSecond,
}

/// Global counters of the previous sample; all the polling loop keeps between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

impl From<&Sample> for Baseline {
    fn from(sample: &Sample) -> Self {
        Self {
            bytes_sent: sample.bytes_sent,
            bytes_received: sample.bytes_received,
        }
    }
}

/// Bytes moved during one polling interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaSample {
    pub sent: i64,
    pub received: i64,
    /// Measured time between the two samples.
    pub elapsed: Duration,
    pub basis: RateBasis,
}

impl DeltaSample {
    pub fn between(
        previous: &Baseline,
        current: &Sample,
        elapsed: Duration,
        policy: RolloverPolicy,
    ) -> Self {
        let apply = |delta: i64| match policy {
            RolloverPolicy::Clamp => delta.max(0),
            RolloverPolicy::Passthrough => delta,
        };
        Self {
            sent: apply(signed_diff(current.bytes_sent, previous.bytes_sent)),
            received: apply(signed_diff(
                current.bytes_received,
                previous.bytes_received,
            )),
            elapsed,
            basis: RateBasis::default(),
        }
    }

    pub fn with_basis(self, basis: RateBasis) -> Self {
        Self { basis, ..self }
    }

    /// Upload figure to display, per [`RateBasis`].
    pub fn upload_rate(&self) -> f64 {
        self.rate(self.sent)
    }

    /// Download figure to display, per [`RateBasis`].
    pub fn download_rate(&self) -> f64 {
        self.rate(self.received)
    }

    fn rate(&self, delta: i64) -> f64 {
        match self.basis {
            RateBasis::PerInterval => delta as f64,
            RateBasis::PerSecond => self.per_sec(delta),
        }
    }

    /// Upload throughput in bytes per second.
    pub fn upload_per_sec(&self) -> f64 {
        self.per_sec(self.sent)
    }

    /// Download throughput in bytes per second.
    pub fn download_per_sec(&self) -> f64 {
        self.per_sec(self.received)
    }

    fn per_sec(&self, delta: i64) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            delta as f64 / secs
        } else {
            delta as f64
        }
    }
}

fn signed_diff(current: u64, previous: u64) -> i64 {
    if current >= previous {
        i64::try_from(current - previous).unwrap_or(i64::MAX)
    } else {
        i64::try_from(previous - current)
            .map(|d| -d)
            .unwrap_or(i64::MIN)
    }
}
