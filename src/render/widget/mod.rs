// Desktop widget: four labels rewritten in place on every tick

#[cfg(feature = "widget")]
mod window;

#[cfg(feature = "widget")]
pub use window::run;

use super::Renderer;
use crate::format::{format_bytes, format_percent, format_rate};
use crate::models::{DeltaSample, Sample};
use std::time::{Duration, Instant};

/// Label texts shown by the widget window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub upload: String,
    pub download: String,
    pub cpu: String,
    pub ram: String,
}

impl Default for WidgetView {
    fn default() -> Self {
        Self {
            upload: "Upload: N/A".into(),
            download: "Download: N/A".into(),
            cpu: "CPU: N/A".into(),
            ram: "RAM: N/A".into(),
        }
    }
}

impl Renderer for WidgetView {
    fn render(&mut self, sample: &Sample, delta: &DeltaSample) -> anyhow::Result<()> {
        self.upload = format!(
            "Upload: {} ({})",
            format_bytes(sample.bytes_sent),
            format_rate(delta.upload_rate())
        );
        self.download = format!(
            "Download: {} ({})",
            format_bytes(sample.bytes_received),
            format_rate(delta.download_rate())
        );
        self.cpu = format!("CPU Usage: {}", format_percent(sample.cpu_percent));
        self.ram = format!(
            "RAM Used: {} / {} ({} available)",
            format_bytes(sample.memory_used),
            format_bytes(sample.memory_total),
            format_bytes(sample.memory_available)
        );
        Ok(())
    }
}

/// When the widget's next tick is due. The first one comes a full period
/// after creation, like the terminal loop, so the first delta and CPU reading
/// cover a whole interval.
#[derive(Debug, Clone, Copy)]
pub struct TickSchedule {
    period: Duration,
    next: Instant,
}

impl TickSchedule {
    pub fn starting_at(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    /// Whether a tick is due at `now`; if so the next one is scheduled a
    /// period after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.period;
        true
    }

    /// Time left until the next tick, zero if overdue.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }
}
