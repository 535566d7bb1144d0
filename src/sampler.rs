// Poll-to-poll delta computation over a counter source

use crate::models::{Baseline, DeltaSample, RateBasis, RolloverPolicy, Sample};
use crate::sysinfo_repo::CounterSource;
use anyhow::Context;
use std::time::Duration;
// tokio's clock follows paused time in tests and falls back to the OS clock
// outside a runtime (the widget).
use tokio::time::Instant;

/// Takes samples from a [`CounterSource`] and diffs each one against the
/// previous sample's global counters.
pub struct Sampler<S> {
    source: S,
    baseline: Baseline,
    baseline_at: Instant,
    policy: RolloverPolicy,
    basis: RateBasis,
    interval: Duration,
}

impl<S: CounterSource> Sampler<S> {
    /// Takes the first sample immediately; it only seeds the baseline.
    pub fn new(source: S, interval: Duration, policy: RolloverPolicy) -> anyhow::Result<Self> {
        Self::new_at(source, interval, policy, Instant::now())
    }

    /// Like [`Sampler::new`] with the baseline timestamped at `now`.
    pub fn new_at(
        mut source: S,
        interval: Duration,
        policy: RolloverPolicy,
        now: Instant,
    ) -> anyhow::Result<Self> {
        let first = source.sample().context("initial counter sample")?;
        Ok(Self {
            source,
            baseline: Baseline::from(&first),
            baseline_at: now,
            policy,
            basis: RateBasis::default(),
            interval,
        })
    }

    pub fn with_rate_basis(mut self, basis: RateBasis) -> Self {
        self.basis = basis;
        self
    }

    /// Sample once, compute the delta against the baseline, then move the
    /// baseline to the new sample.
    pub fn step(&mut self) -> anyhow::Result<(Sample, DeltaSample)> {
        self.step_at(Instant::now())
    }

    /// [`Sampler::step`] with the new sample timestamped at `now`; the delta's
    /// `elapsed` is the time since the previous sample.
    pub fn step_at(&mut self, now: Instant) -> anyhow::Result<(Sample, DeltaSample)> {
        let current = self.source.sample().context("counter sample")?;
        let elapsed = now.saturating_duration_since(self.baseline_at);
        let delta = DeltaSample::between(&self.baseline, &current, elapsed, self.policy)
            .with_basis(self.basis);
        self.baseline = Baseline::from(&current);
        self.baseline_at = now;
        Ok((current, delta))
    }

    pub fn baseline(&self) -> Baseline {
        self.baseline
    }

    /// Nominal polling interval; the loop's tick period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn rate_basis(&self) -> RateBasis {
        self.basis
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
