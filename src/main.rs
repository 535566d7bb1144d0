use anyhow::{Context, Result};
use netmon::config::AppConfig;
use netmon::log_sink::DeferredStderr;
use netmon::mode::{self, Mode};
use netmon::monitor::Monitor;
use netmon::render::{AlternateScreen, TerminalRenderer};
use netmon::sampler::Sampler;
use netmon::sysinfo_repo::SysinfoRepo;
use netmon::usage_log::UsageLog;
use netmon::version;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn main() -> Result<()> {
    // Default to warn: the terminal mode owns the screen.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let log_sink = DeferredStderr::new();
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(log_sink.clone())
        .init();

    let app_config = AppConfig::load()?;

    let stdin = std::io::stdin();
    let mode = match mode::prompt_mode(stdin.lock(), std::io::stdout())? {
        Some(Ok(mode)) => mode,
        Some(Err(e)) => {
            tracing::debug!(error = %e, "mode selection");
            println!("Invalid choice. Exiting.");
            return Ok(());
        }
        None => {
            println!();
            println!("Invalid choice. Exiting.");
            return Ok(());
        }
    };

    let source = SysinfoRepo::new()?;
    let sampler = Sampler::new(
        source,
        app_config.monitor.sample_interval(),
        app_config.monitor.rollover,
    )?
    .with_rate_basis(app_config.monitor.rate);
    let usage_log = app_config
        .log
        .enabled
        .then(|| UsageLog::new(&app_config.log.path));
    let monitor = Monitor::new(sampler, usage_log);

    tracing::info!(
        ?mode,
        sample_interval_ms = app_config.monitor.sample_interval_ms,
        "{} starting",
        version::banner()
    );

    match mode {
        Mode::Terminal => run_terminal(monitor, &app_config, &log_sink),
        Mode::Widget => run_widget(monitor, &app_config),
    }
}

fn run_terminal(
    mut monitor: Monitor<SysinfoRepo>,
    app_config: &AppConfig,
    log_sink: &DeferredStderr,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("tokio runtime")?;

    // Events raised while the alternate screen is up are printed after it closes.
    log_sink.hold();
    let result = run_on_screen(&runtime, &mut monitor, app_config);
    let released = log_sink.release();

    let ticks = result?;
    released.context("flush held log events")?;
    tracing::info!(ticks, "monitoring stopped");
    println!("\nMonitoring stopped.");
    Ok(())
}

fn run_on_screen(
    runtime: &tokio::runtime::Runtime,
    monitor: &mut Monitor<SysinfoRepo>,
    app_config: &AppConfig,
) -> Result<u64> {
    let _screen = AlternateScreen::enter()?;
    let mut renderer = TerminalRenderer::stdout(
        app_config.terminal.style,
        app_config.terminal.show_interfaces,
    )?;
    runtime.block_on(monitor.run(&mut renderer, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl_c handler failed; stopping");
        }
    }))
}

#[cfg(feature = "widget")]
fn run_widget(monitor: Monitor<SysinfoRepo>, _app_config: &AppConfig) -> Result<()> {
    let period = monitor.interval();
    netmon::render::widget::run(monitor, period, &version::banner())
}

#[cfg(not(feature = "widget"))]
fn run_widget(_monitor: Monitor<SysinfoRepo>, _app_config: &AppConfig) -> Result<()> {
    anyhow::bail!("{} was built without the `widget` feature", version::NAME)
}
