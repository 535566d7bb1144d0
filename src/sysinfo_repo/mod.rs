// Host counters via sysinfo

mod scripted;

pub use scripted::ScriptedSource;

use crate::models::{InterfaceCounters, Sample};
use std::collections::BTreeMap;
use sysinfo::{Networks, System};
use tracing::instrument;

/// Anything that can produce a fresh [`Sample`] of host counters.
pub trait CounterSource {
    fn sample(&mut self) -> anyhow::Result<Sample>;
}

/// Live source reading the local OS through sysinfo.
pub struct SysinfoRepo {
    sys: System,
    networks: Networks,
}

impl SysinfoRepo {
    pub fn new() -> anyhow::Result<Self> {
        anyhow::ensure!(
            sysinfo::IS_SUPPORTED_SYSTEM,
            "resource counters are not available on {}",
            std::env::consts::OS
        );
        let mut sys = System::new();
        // CPU usage is computed between two refreshes; this one is the baseline.
        sys.refresh_cpu_usage();
        sys.refresh_memory();
        let networks = Networks::new_with_refreshed_list();
        Ok(Self { sys, networks })
    }
}

impl CounterSource for SysinfoRepo {
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "sample"))]
    fn sample(&mut self) -> anyhow::Result<Sample> {
        self.networks.refresh(true);
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();

        let interfaces: BTreeMap<String, InterfaceCounters> = self
            .networks
            .list()
            .iter()
            .map(|(name, data)| {
                (
                    name.clone(),
                    InterfaceCounters {
                        bytes_sent: data.total_transmitted(),
                        bytes_received: data.total_received(),
                    },
                )
            })
            .collect();

        let total = self.sys.total_memory();
        let available = self.sys.available_memory();

        let sample = Sample {
            cpu_percent: (self.sys.global_cpu_usage() as f64).clamp(0.0, 100.0),
            memory_used: total.saturating_sub(available),
            memory_available: available,
            memory_total: total,
            ..Sample::from_interfaces(interfaces)
        };
        tracing::trace!(
            interfaces = sample.interfaces.len(),
            bytes_sent = sample.bytes_sent,
            bytes_received = sample.bytes_received,
            "sampled"
        );
        Ok(sample)
    }
}
