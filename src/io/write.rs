use std::io::{self, Write};

use super::{no_progress, Transform};
use crate::{util::PartialBuffer, CompressionStatus, FilterConfig};

/// Accepts raw bytes and writes them filtered to an inner writer.
///
/// The stream is finished by [`finish`](FilterWriter::finish) or
/// [`into_inner`](FilterWriter::into_inner). Dropping an unfinished writer
/// finishes it too, ignoring any error.
#[derive(Debug)]
pub struct FilterWriter<W: Write, F: Transform> {
    /// `None` only once `into_inner` has taken it.
    writer: Option<W>,
    filter: F,
    raw: Vec<u8>,
    capacity: usize,
    filtered: Box<[u8]>,
    finished: bool,
}

impl<W: Write, F: Transform> FilterWriter<W, F> {
    /// Filter into `writer` through `filter` using the default buffer size.
    pub fn with_filter(writer: W, filter: F) -> Self {
        Self::with_filter_config(writer, filter, FilterConfig::default())
    }

    /// Filter into `writer` through `filter`.
    pub fn with_filter_config(writer: W, filter: F, config: FilterConfig) -> Self {
        Self {
            writer: Some(writer),
            filter,
            raw: Vec::with_capacity(config.buffer_size()),
            capacity: config.buffer_size(),
            filtered: vec![0; config.buffer_size()].into_boxed_slice(),
            finished: false,
        }
    }

    /// Acquires a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        match &self.writer {
            Some(writer) => writer,
            None => unreachable!("writer is only taken by into_inner"),
        }
    }

    /// Acquires a mutable reference to the underlying writer.
    ///
    /// Note that care must be taken to avoid tampering with the state of the writer which may
    /// otherwise confuse this filter.
    pub fn get_mut(&mut self) -> &mut W {
        match &mut self.writer {
            Some(writer) => writer,
            None => unreachable!("writer is only taken by into_inner"),
        }
    }

    /// Filter all buffered raw bytes into the inner writer.
    ///
    /// On error the raw bytes the filter has not consumed stay buffered.
    /// Filtered bytes the inner writer rejected are lost.
    fn overflow(&mut self) -> io::Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };

        let mut input = PartialBuffer::new(&self.raw[..]);
        let result: io::Result<()> = loop {
            let mut output = PartialBuffer::new(&mut self.filtered[..]);
            let status = match self.filter.transform(&mut input, &mut output) {
                Ok(status) => status,
                Err(err) => break Err(err.into()),
            };

            let produced = output.written().len();
            if let Err(err) = writer.write_all(&self.filtered[..produced]) {
                break Err(err);
            }

            match status {
                CompressionStatus::NeedInput => break Ok(()),
                CompressionStatus::Eof => {
                    if !input.unwritten().is_empty() {
                        tracing::debug!(
                            len = input.unwritten().len(),
                            "discarding bytes written after the end of the stream"
                        );
                    }
                    break Ok(());
                }
                CompressionStatus::NeedOutput if produced == 0 => break Err(no_progress()),
                CompressionStatus::NeedOutput => {}
            }
        };

        let consumed = input.written().len();
        match result {
            Ok(()) => self.raw.clear(),
            // Keep what the filter has not consumed so a later call can retry it.
            Err(_) => drop(self.raw.drain(..consumed)),
        }
        result
    }

    /// Write out everything the filter still holds back and end the stream.
    fn drain(&mut self, checkpoint: bool) -> io::Result<()> {
        self.overflow()?;

        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };

        loop {
            let mut output = PartialBuffer::new(&mut self.filtered[..]);
            let done = if checkpoint {
                self.filter.checkpoint(&mut output)?
            } else {
                self.filter.finish(&mut output)?
            };

            let produced = output.written().len();
            writer.write_all(&self.filtered[..produced])?;

            if done {
                return writer.flush();
            } else if produced == 0 {
                return Err(no_progress());
            }
        }
    }

    /// Finish the stream and flush the inner writer.
    ///
    /// Calling this again once it succeeded does nothing.
    pub fn finish(&mut self) -> io::Result<()> {
        if !self.finished {
            self.drain(false)?;
            self.finished = true;
            tracing::debug!("filter writer finished");
        }
        Ok(())
    }

    /// Finish the stream and return the inner writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.finish()?;
        match self.writer.take() {
            Some(writer) => Ok(writer),
            None => unreachable!("writer is only taken by into_inner"),
        }
    }
}

impl<W: Write, F: Transform> Write for FilterWriter<W, F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.finished {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "write after the stream was finished",
            ));
        }

        if self.raw.len() == self.capacity {
            self.overflow()?;
        }

        let len = buf.len().min(self.capacity - self.raw.len());
        self.raw.extend_from_slice(&buf[..len]);
        Ok(len)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.finished {
            return self.get_mut().flush();
        }
        self.drain(true)
    }
}

impl<W: Write, F: Transform> Drop for FilterWriter<W, F> {
    fn drop(&mut self) {
        if self.writer.is_some() && !self.finished {
            if let Err(err) = self.finish() {
                tracing::debug!(error = %err, "failed to finish filter writer on drop");
            }
        }
    }
}
