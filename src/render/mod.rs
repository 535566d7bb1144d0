// Presentation front ends

pub mod terminal;
pub mod widget;

pub use terminal::{AlternateScreen, TableStyle, TerminalRenderer};
pub use widget::{TickSchedule, WidgetView};

use crate::models::{DeltaSample, Sample};

/// A view layer fed once per tick. Implementations hold no state beyond
/// what the latest sample gives them.
pub trait Renderer {
    fn render(&mut self, sample: &Sample, delta: &DeltaSample) -> anyhow::Result<()>;
}
