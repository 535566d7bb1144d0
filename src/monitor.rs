// Polling loop: sample, diff, render, log; one tick at a time.

use crate::render::Renderer;
use crate::sampler::Sampler;
use crate::sysinfo_repo::CounterSource;
use crate::usage_log::UsageLog;
use std::future::Future;
use tokio::time::{Duration, Instant, MissedTickBehavior, interval_at};

/// A sampler plus the optional usage log it feeds.
pub struct Monitor<S> {
    sampler: Sampler<S>,
    usage_log: Option<UsageLog>,
    ticks: u64,
}

impl<S: CounterSource> Monitor<S> {
    pub fn new(sampler: Sampler<S>, usage_log: Option<UsageLog>) -> Self {
        Self {
            sampler,
            usage_log,
            ticks: 0,
        }
    }

    /// One poll: fresh sample, delta against the previous one, render, then
    /// append to the usage log. Source and render errors are returned; log
    /// failures are not.
    pub fn tick(&mut self, renderer: &mut dyn Renderer) -> anyhow::Result<()> {
        let (sample, delta) = self.sampler.step()?;
        renderer.render(&sample, &delta)?;
        if let Some(log) = self.usage_log.as_mut() {
            log.append(chrono::Local::now().naive_local(), &sample);
        }
        self.ticks += 1;
        tracing::debug!(
            tick = self.ticks,
            upload = delta.sent,
            download = delta.received,
            cpu_percent = sample.cpu_percent,
            "tick"
        );
        Ok(())
    }

    /// Tick every sampler interval until `shutdown` resolves. The first tick
    /// happens one full interval after the call; ticks that fall behind are
    /// skipped rather than bunched up. Returns the number of ticks run.
    pub async fn run<F>(&mut self, renderer: &mut dyn Renderer, shutdown: F) -> anyhow::Result<u64>
    where
        F: Future<Output = ()>,
    {
        let period = self.sampler.interval();
        let mut tick = interval_at(Instant::now() + period, period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        tracing::debug!(interval_ms = period.as_millis() as u64, "monitor started");

        let start = self.ticks;
        loop {
            tokio::select! {
                _ = tick.tick() => self.tick(renderer)?,
                _ = &mut shutdown => {
                    tracing::debug!("monitor shutting down");
                    break;
                }
            }
        }
        Ok(self.ticks - start)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn interval(&self) -> Duration {
        self.sampler.interval()
    }

    pub fn sampler(&self) -> &Sampler<S> {
        &self.sampler
    }

    pub fn usage_log(&self) -> Option<&UsageLog> {
        self.usage_log.as_ref()
    }
}
