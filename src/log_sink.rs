// stderr writer for tracing that can hold events back while a full-screen
// view owns the terminal

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Default)]
struct State {
    holding: bool,
    pending: Vec<u8>,
}

/// Writes straight to stderr until [`DeferredStderr::hold`]; from then on
/// events are buffered and only written out on [`DeferredStderr::release`].
#[derive(Clone, Default)]
pub struct DeferredStderr {
    state: Arc<Mutex<State>>,
}

impl DeferredStderr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&self) {
        self.lock().holding = true;
    }

    pub fn is_holding(&self) -> bool {
        self.lock().holding
    }

    /// Bytes buffered since `hold`.
    pub fn pending_len(&self) -> usize {
        self.lock().pending.len()
    }

    /// Stop holding and flush buffered events to stderr.
    pub fn release(&self) -> io::Result<()> {
        self.release_into(io::stderr().lock())
    }

    /// Stop holding and flush buffered events to `out`.
    pub fn release_into<W: Write>(&self, mut out: W) -> io::Result<()> {
        let pending = {
            let mut state = self.lock();
            state.holding = false;
            std::mem::take(&mut state.pending)
        };
        out.write_all(&pending)?;
        out.flush()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

pub struct DeferredWriter {
    sink: DeferredStderr,
}

impl Write for DeferredWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.sink.lock();
        if state.holding {
            state.pending.extend_from_slice(buf);
            Ok(buf.len())
        } else {
            drop(state);
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for DeferredStderr {
    type Writer = DeferredWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DeferredWriter { sink: self.clone() }
    }
}
