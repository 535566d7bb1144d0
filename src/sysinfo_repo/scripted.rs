// Replays canned samples instead of querying the OS

use super::CounterSource;
use crate::models::Sample;
use std::collections::VecDeque;

/// Fake counter source. Each call to `sample` pops the next scripted entry;
/// an `Err` entry or an empty script surfaces as a query failure.
#[derive(Default)]
pub struct ScriptedSource {
    script: VecDeque<anyhow::Result<Sample>>,
    taken: usize,
}

impl ScriptedSource {
    pub fn new(samples: impl IntoIterator<Item = Sample>) -> Self {
        Self::with_results(samples.into_iter().map(Ok))
    }

    pub fn with_results(script: impl IntoIterator<Item = anyhow::Result<Sample>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            taken: 0,
        }
    }

    pub fn push(&mut self, sample: Sample) {
        self.script.push_back(Ok(sample));
    }

    /// Number of samples handed out so far.
    pub fn taken(&self) -> usize {
        self.taken
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl CounterSource for ScriptedSource {
    fn sample(&mut self) -> anyhow::Result<Sample> {
        let next = self
            .script
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("scripted source exhausted")));
        if next.is_ok() {
            self.taken += 1;
        }
        next
    }
}
