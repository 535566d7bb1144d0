// Pre-formatted rows shared by the terminal table and the desktop widget

use crate::format::{format_bytes, format_percent, format_rate};
use crate::models::{DeltaSample, Sample};

/// Global throughput row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRow {
    pub total_received: String,
    pub download_rate: String,
    pub total_sent: String,
    pub upload_rate: String,
}

impl NetworkRow {
    pub const HEADERS: [&'static str; 4] =
        ["Total Received", "Download Speed", "Total Sent", "Upload Speed"];

    pub fn new(sample: &Sample, delta: &DeltaSample) -> Self {
        Self {
            total_received: format_bytes(sample.bytes_received),
            download_rate: format_rate(delta.download_rate()),
            total_sent: format_bytes(sample.bytes_sent),
            upload_rate: format_rate(delta.upload_rate()),
        }
    }

    pub fn cells(&self) -> [&str; 4] {
        [
            &self.total_received,
            &self.download_rate,
            &self.total_sent,
            &self.upload_rate,
        ]
    }
}

/// CPU and memory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemRow {
    pub cpu: String,
    pub ram_used: String,
    pub ram_available: String,
    pub ram_total: String,
}

impl SystemRow {
    pub const HEADERS: [&'static str; 4] = ["CPU Usage", "RAM Used", "Available RAM", "Total RAM"];

    pub fn new(sample: &Sample) -> Self {
        Self {
            cpu: format_percent(sample.cpu_percent),
            ram_used: format_bytes(sample.memory_used),
            ram_available: format_bytes(sample.memory_available),
            ram_total: format_bytes(sample.memory_total),
        }
    }

    pub fn cells(&self) -> [&str; 4] {
        [&self.cpu, &self.ram_used, &self.ram_available, &self.ram_total]
    }
}

/// Cumulative totals of one interface; no rate columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRow {
    pub name: String,
    pub total_received: String,
    pub total_sent: String,
}

impl InterfaceRow {
    pub const HEADERS: [&'static str; 3] = ["Interface", "Total Received", "Total Sent"];

    pub fn cells(&self) -> [&str; 3] {
        [&self.name, &self.total_received, &self.total_sent]
    }
}

/// One row per interface in the sample, ordered by name.
pub fn interface_rows(sample: &Sample) -> Vec<InterfaceRow> {
    sample
        .interfaces
        .iter()
        .map(|(name, counters)| InterfaceRow {
            name: name.clone(),
            total_received: format_bytes(counters.bytes_received),
            total_sent: format_bytes(counters.bytes_sent),
        })
        .collect()
}
