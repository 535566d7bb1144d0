// Shared test helpers
#![allow(dead_code)]

use netmon::models::*;
use netmon::render::Renderer;
use ratatui::buffer::Buffer;
use std::collections::BTreeMap;

pub fn sample(bytes_sent: u64, bytes_received: u64) -> Sample {
    Sample {
        bytes_sent,
        bytes_received,
        interfaces: BTreeMap::new(),
        cpu_percent: 0.0,
        memory_used: 0,
        memory_available: 0,
        memory_total: 0,
    }
}

pub fn sample_with_interfaces(interfaces: &[(&str, u64, u64)]) -> Sample {
    Sample::from_interfaces(
        interfaces
            .iter()
            .map(|(name, sent, received)| {
                (
                    name.to_string(),
                    InterfaceCounters {
                        bytes_sent: *sent,
                        bytes_received: *received,
                    },
                )
            })
            .collect(),
    )
}

/// Keeps everything it is asked to render.
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<(Sample, DeltaSample)>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, sample: &Sample, delta: &DeltaSample) -> anyhow::Result<()> {
        self.frames.push((sample.clone(), *delta));
        Ok(())
    }
}

pub struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&mut self, _sample: &Sample, _delta: &DeltaSample) -> anyhow::Result<()> {
        anyhow::bail!("display gone")
    }
}

/// Screen contents, one line per terminal row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}
