// Polling loop: end-to-end render, timing, shutdown and failure paths

mod common;

use common::{FailingRenderer, RecordingRenderer, buffer_text, sample};
use netmon::config::AppConfig;
use netmon::models::{RateBasis, RolloverPolicy, Sample};
use netmon::monitor::Monitor;
use netmon::render::{TableStyle, TerminalRenderer};
use netmon::sampler::Sampler;
use netmon::sysinfo_repo::ScriptedSource;
use netmon::usage_log::UsageLog;
use ratatui::backend::TestBackend;
use std::time::Duration;

fn monitor(samples: Vec<Sample>, log: Option<UsageLog>) -> Monitor<ScriptedSource> {
    let sampler = Sampler::new(
        ScriptedSource::new(samples),
        Duration::from_secs(1),
        RolloverPolicy::Clamp,
    )
    .unwrap();
    Monitor::new(sampler, log)
}

/// Monitor wired the way the binary does it from an empty config.
fn default_monitor(samples: Vec<Sample>) -> (Monitor<ScriptedSource>, AppConfig) {
    let config = AppConfig::load_from_str("").unwrap();
    let sampler = Sampler::new(
        ScriptedSource::new(samples),
        config.monitor.sample_interval(),
        config.monitor.rollover,
    )
    .unwrap()
    .with_rate_basis(config.monitor.rate);
    (Monitor::new(sampler, None), config)
}

fn network_row_cells(screen: &str) -> Vec<&str> {
    let row = screen
        .lines()
        .find(|l| l.contains("KB/s"))
        .expect("network row");
    row.split(|c| c == '│')
        .flat_map(|s| s.split("  "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[test]
fn test_end_to_end_terminal_render() {
    let mut m = monitor(vec![sample(2048, 1_048_576), sample(3072, 2_097_152)], None);
    let mut renderer =
        TerminalRenderer::new(TestBackend::new(120, 20), TableStyle::Colored, false).unwrap();

    m.tick(&mut renderer).unwrap();

    let screen = buffer_text(renderer.backend().buffer());
    assert_eq!(
        network_row_cells(&screen),
        vec!["2.0 MB", "1.0 MB/s", "3.0 KB", "1.0 KB/s"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_end_to_end_with_default_config() {
    let (mut m, config) = default_monitor(vec![sample(2048, 1_048_576), sample(3072, 2_097_152)]);
    assert_eq!(m.interval(), Duration::from_secs(2));
    let mut renderer = TerminalRenderer::new(
        TestBackend::new(120, 20),
        config.terminal.style,
        config.terminal.show_interfaces,
    )
    .unwrap();

    let ticks = m
        .run(&mut renderer, tokio::time::sleep(Duration::from_millis(2500)))
        .await
        .unwrap();
    assert_eq!(ticks, 1);

    let screen = buffer_text(renderer.backend().buffer());
    assert_eq!(
        network_row_cells(&screen),
        vec!["2.0 MB", "1.0 MB/s", "3.0 KB", "1.0 KB/s"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_run_measures_elapsed_time_between_ticks() {
    let sampler = Sampler::new(
        ScriptedSource::new(vec![sample(0, 0), sample(2048, 0), sample(6144, 0)]),
        Duration::from_secs(1),
        RolloverPolicy::Clamp,
    )
    .unwrap()
    .with_rate_basis(RateBasis::PerSecond);
    let mut m = Monitor::new(sampler, None);
    let mut renderer = RecordingRenderer::default();

    m.run(&mut renderer, tokio::time::sleep(Duration::from_millis(2500)))
        .await
        .unwrap();

    let elapsed: Vec<Duration> = renderer.frames.iter().map(|(_, d)| d.elapsed).collect();
    assert_eq!(elapsed, vec![Duration::from_secs(1); 2]);
    let rates: Vec<f64> = renderer.frames.iter().map(|(_, d)| d.upload_rate()).collect();
    assert_eq!(rates, vec![2048.0, 4096.0]);
}

#[test]
fn test_tick_logs_each_sample() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("network_log.txt");
    let mut m = monitor(
        vec![sample(0, 0), sample(1024, 2048), sample(2048, 4096)],
        Some(UsageLog::new(&path)),
    );
    let mut renderer = RecordingRenderer::default();

    m.tick(&mut renderer).unwrap();
    m.tick(&mut renderer).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" | Upload: 1.0 KB | Download: 2.0 KB"));
    assert!(lines[1].ends_with(" | Upload: 2.0 KB | Download: 4.0 KB"));
    assert_eq!(m.ticks(), 2);
}

#[test]
fn test_log_failure_does_not_stop_ticking() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("log.txt");
    let mut m = monitor(
        vec![sample(0, 0), sample(1, 1), sample(2, 2)],
        Some(UsageLog::new(&path)),
    );
    let mut renderer = RecordingRenderer::default();

    m.tick(&mut renderer).unwrap();
    m.tick(&mut renderer).unwrap();

    assert_eq!(renderer.frames.len(), 2);
    assert!(m.usage_log().unwrap().is_disabled());
}

#[test]
fn test_render_failure_propagates() {
    let mut m = monitor(vec![sample(0, 0), sample(1, 1)], None);
    let err = m.tick(&mut FailingRenderer).unwrap_err();
    assert!(err.to_string().contains("display gone"));
    assert_eq!(m.ticks(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_run_ticks_once_per_interval_until_shutdown() {
    let mut m = monitor(
        vec![sample(0, 0), sample(10, 100), sample(30, 300), sample(60, 600)],
        None,
    );
    let mut renderer = RecordingRenderer::default();

    let ticks = m
        .run(&mut renderer, tokio::time::sleep(Duration::from_millis(3500)))
        .await
        .unwrap();

    assert_eq!(ticks, 3);
    let sent: Vec<i64> = renderer.frames.iter().map(|(_, d)| d.sent).collect();
    assert_eq!(sent, vec![10, 20, 30]);
    assert_eq!(m.sampler().source().remaining(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_run_waits_a_full_interval_before_first_tick() {
    let mut m = monitor(vec![sample(0, 0), sample(1, 1)], None);
    let mut renderer = RecordingRenderer::default();

    let ticks = m
        .run(&mut renderer, tokio::time::sleep(Duration::from_millis(900)))
        .await
        .unwrap();

    assert_eq!(ticks, 0);
    assert!(renderer.frames.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_run_stops_on_source_failure() {
    let mut m = monitor(vec![sample(0, 0), sample(5, 5)], None);
    let mut renderer = RecordingRenderer::default();

    let err = m
        .run(&mut renderer, tokio::time::sleep(Duration::from_secs(60)))
        .await
        .unwrap_err();

    assert!(format!("{:#}", err).contains("exhausted"));
    assert_eq!(renderer.frames.len(), 1);
}
