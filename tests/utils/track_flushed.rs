use std::io::{Result, Write};

/// Counts the flushes reaching the wrapped writer.
#[derive(Debug, Default)]
pub struct TrackFlushed<W> {
    inner: W,
    flushes: usize,
}

impl<W> TrackFlushed<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, flushes: 0 }
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for TrackFlushed<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        self.inner.flush()
    }
}
