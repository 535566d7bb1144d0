// Domain models: one OS sample and the delta between consecutive samples

mod delta;
mod sample;

pub use delta::{Baseline, DeltaSample, RateBasis, RolloverPolicy};
pub use sample::{InterfaceCounters, Sample};
