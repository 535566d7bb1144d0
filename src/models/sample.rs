// Counter snapshot taken from the OS on every poll

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cumulative byte counters of a single network interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceCounters {
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

/// One snapshot of host counters. Byte counters are cumulative since boot
/// (or since the interface came up); memory values are in bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub bytes_sent: u64,
    pub bytes_received: u64,
    /// Keyed by interface name; ordered so per-interface rows are stable.
    pub interfaces: BTreeMap<String, InterfaceCounters>,
    pub cpu_percent: f64,
    pub memory_used: u64,
    pub memory_available: u64,
    pub memory_total: u64,
}

impl Sample {
    /// Build a sample whose global counters are the sum over `interfaces`.
    pub fn from_interfaces(interfaces: BTreeMap<String, InterfaceCounters>) -> Self {
        let (bytes_sent, bytes_received) =
            interfaces.values().fold((0u64, 0u64), |(tx, rx), c| {
                (
                    tx.saturating_add(c.bytes_sent),
                    rx.saturating_add(c.bytes_received),
                )
            });
        Self {
            bytes_sent,
            bytes_received,
            interfaces,
            ..Default::default()
        }
    }
}
