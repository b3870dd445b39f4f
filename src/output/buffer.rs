//! Time-flushed output buffer
//!
//! Rendered lines accumulate in memory and reach the sink either when the
//! flush interval has elapsed (checked once per directory layer) or when the
//! walk finishes. This bounds memory on huge trees while still streaming.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use termcolor::{Ansi, Color, ColorSpec, WriteColor};
use tracing::debug;

use super::config::OutputConfig;

/// Guess at the length of an entry name, used to pre-size the buffer.
pub const AVERAGE_NAME_LENGTH: usize = 8;

/// In-memory buffer in front of an output sink.
pub struct OutputBuffer<W: Write> {
    buf: Vec<u8>,
    sink: W,
    use_color: bool,
    flush_interval: Option<Duration>,
    last_flush: Instant,
}

impl<W: Write> OutputBuffer<W> {
    pub fn new(sink: W, config: &OutputConfig) -> Self {
        Self {
            buf: Vec::new(),
            sink,
            use_color: config.use_color,
            flush_interval: config.flush_interval,
            last_flush: Instant::now(),
        }
    }

    pub fn push_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    pub fn push_line(&mut self, s: &str) {
        self.push_str(s);
        self.buf.push(b'\n');
    }

    /// Append `text` wrapped in `color` and a reset, or plain when color is off.
    pub fn push_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if !self.use_color {
            self.push_str(text);
            return Ok(());
        }
        let mut ansi = Ansi::new(&mut self.buf);
        ansi.set_color(ColorSpec::new().set_fg(Some(color)))?;
        ansi.write_all(text.as_bytes())?;
        ansi.reset()
    }

    /// Grow capacity ahead of rendering a layer of `item_count` lines.
    pub fn reserve_layer(&mut self, item_count: usize, prefix_len: usize) {
        self.buf.reserve(item_count * (AVERAGE_NAME_LENGTH + prefix_len));
    }

    /// Flush if the interval has elapsed since the last flush.
    ///
    /// Returns whether a flush happened.
    pub fn maybe_flush(&mut self) -> io::Result<bool> {
        let due = self
            .flush_interval
            .is_some_and(|interval| self.last_flush.elapsed() > interval);
        if !due {
            return Ok(false);
        }
        self.write_buffer()?;
        self.last_flush = Instant::now();
        Ok(true)
    }

    /// Write everything buffered so far to the sink and flush the sink.
    pub fn write_buffer(&mut self) -> io::Result<()> {
        debug!(bytes = self.buf.len(), "flushing output buffer");
        self.sink.write_all(&self.buf)?;
        self.sink.flush()?;
        self.buf.clear();
        Ok(())
    }

    /// Bytes rendered but not yet written to the sink.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}
