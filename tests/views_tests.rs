// Row projections used by both front ends

mod common;

use common::{sample, sample_with_interfaces};
use netmon::models::{Baseline, DeltaSample, RateBasis, RolloverPolicy};
use netmon::views::*;
use std::time::Duration;

#[test]
fn test_network_row_totals_and_rates() {
    let prev = Baseline::from(&sample(2048, 1_048_576));
    let current = sample(3072, 2_097_152);
    let delta = DeltaSample::between(
        &prev,
        &current,
        Duration::from_secs(2),
        RolloverPolicy::Clamp,
    );

    let row = NetworkRow::new(&current, &delta);
    assert_eq!(row.cells(), ["2.0 MB", "1.0 MB/s", "3.0 KB", "1.0 KB/s"]);
}

#[test]
fn test_network_row_per_second_rates() {
    let prev = Baseline::from(&sample(2048, 1_048_576));
    let current = sample(3072, 2_097_152);
    let delta = DeltaSample::between(
        &prev,
        &current,
        Duration::from_secs(2),
        RolloverPolicy::Clamp,
    )
    .with_basis(RateBasis::PerSecond);

    let row = NetworkRow::new(&current, &delta);
    assert_eq!(row.cells(), ["2.0 MB", "512.0 KB/s", "3.0 KB", "512.0 bytes/s"]);
}

#[test]
fn test_system_row() {
    let mut s = sample(0, 0);
    s.cpu_percent = 37.5;
    s.memory_used = 3 * 1024 * 1024 * 1024;
    s.memory_available = 5 * 1024 * 1024 * 1024;
    s.memory_total = 8 * 1024 * 1024 * 1024;

    let row = SystemRow::new(&s);
    assert_eq!(row.cells(), ["37.5%", "3.0 GB", "5.0 GB", "8.0 GB"]);
}

#[test]
fn test_one_interface_row_per_interface() {
    let s = sample_with_interfaces(&[("wlan0", 2048, 4096), ("eth0", 10, 20), ("lo", 0, 0)]);
    let rows = interface_rows(&s);

    assert_eq!(rows.len(), s.interfaces.len());
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["eth0", "lo", "wlan0"]);
    assert_eq!(rows[2].cells(), ["wlan0", "4.0 KB", "2.0 KB"]);
    assert_eq!(InterfaceRow::HEADERS.len(), 3);
}

#[test]
fn test_no_interfaces_no_rows() {
    assert!(interface_rows(&sample(5, 5)).is_empty());
}
