use std::io::{self, BufRead, Read, Seek, SeekFrom};

use super::{no_progress, Transform};
use crate::{util::PartialBuffer, CompressionStatus, FilterConfig};

/// Reads raw bytes from an inner reader and yields them filtered.
///
/// Raw bytes the filter has not consumed yet are kept across refills of
/// the raw buffer. Seeking discards them, along with any filtered bytes not
/// yet read.
#[derive(Debug)]
pub struct FilterReader<R, F> {
    reader: R,
    filter: F,
    raw: Box<[u8]>,
    raw_start: usize,
    raw_end: usize,
    filtered: Box<[u8]>,
    filtered_start: usize,
    filtered_end: usize,
    source_eof: bool,
    done: bool,
}

impl<R: Read, F: Transform> FilterReader<R, F> {
    /// Filter `reader` through `filter` using the default buffer size.
    pub fn with_filter(reader: R, filter: F) -> Self {
        Self::with_filter_config(reader, filter, FilterConfig::default())
    }

    /// Filter `reader` through `filter`.
    pub fn with_filter_config(reader: R, filter: F, config: FilterConfig) -> Self {
        Self {
            reader,
            filter,
            raw: vec![0; config.buffer_size()].into_boxed_slice(),
            raw_start: 0,
            raw_end: 0,
            filtered: vec![0; config.buffer_size()].into_boxed_slice(),
            filtered_start: 0,
            filtered_end: 0,
            source_eof: false,
            done: false,
        }
    }

    /// Refill the filtered buffer with a single filter step.
    fn underflow(&mut self) -> io::Result<()> {
        if self.raw_start == self.raw_end && !self.source_eof {
            let len = loop {
                match self.reader.read(&mut self.raw) {
                    Ok(len) => break len,
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => return Err(err),
                }
            };
            self.raw_start = 0;
            self.raw_end = len;
            self.source_eof = len == 0;
        }

        let mut input = PartialBuffer::new(&self.raw[self.raw_start..self.raw_end]);
        let mut output = PartialBuffer::new(&mut self.filtered[..]);

        let status = self.filter.transform(&mut input, &mut output)?;
        let consumed = input.written().len();

        match status {
            CompressionStatus::Eof => self.done = true,
            CompressionStatus::NeedInput
                if self.source_eof && output.written().is_empty() =>
            {
                self.done = self.filter.finish(&mut output)?;
                if !self.done && output.written().is_empty() {
                    return Err(no_progress());
                }
            }
            CompressionStatus::NeedOutput
                if consumed == 0 && output.written().is_empty() =>
            {
                return Err(no_progress());
            }
            CompressionStatus::NeedInput | CompressionStatus::NeedOutput => {}
        }

        self.raw_start += consumed;
        self.filtered_start = 0;
        self.filtered_end = output.written().len();
        Ok(())
    }

    /// Acquires a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Acquires a mutable reference to the underlying reader.
    ///
    /// Note that care must be taken to avoid tampering with the state of the reader which may
    /// otherwise confuse this filter.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consumes this filter returning the underlying reader.
    ///
    /// Raw bytes already read from it but not yet consumed are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read, F: Transform> BufRead for FilterReader<R, F> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        while self.filtered_start == self.filtered_end && !self.done {
            self.underflow()?;
        }
        Ok(&self.filtered[self.filtered_start..self.filtered_end])
    }

    fn consume(&mut self, amt: usize) {
        self.filtered_start = (self.filtered_start + amt).min(self.filtered_end);
    }
}

impl<R: Read, F: Transform> Read for FilterReader<R, F> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        let available = self.fill_buf()?;
        let len = available.len().min(buf.len());
        buf[..len].copy_from_slice(&available[..len]);
        self.consume(len);
        Ok(len)
    }
}

impl<R: Read + Seek, F: Transform> Seek for FilterReader<R, F> {
    /// Seek the inner reader. The filter keeps its state, so this is only
    /// meaningful where the filter can pick up at the new position.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let position = self.reader.seek(pos)?;
        tracing::trace!(
            position,
            discarded = self.raw_end - self.raw_start,
            "filter reader seeked"
        );

        self.raw_start = 0;
        self.raw_end = 0;
        self.source_eof = false;
        self.filtered_start = 0;
        self.filtered_end = 0;
        Ok(position)
    }
}
