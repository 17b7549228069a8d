use std::io;

use super::{Filter, State};
use crate::{codec::Decode, io::Transform, util::PartialBuffer, CompressionStatus, Error, Result};

/// Push-style decompressor driving one native [`Decode`] codec.
///
/// Reports [`Eof`](CompressionStatus::Eof) at the end of the compressed
/// stream. Input following the end of the stream is left unconsumed.
#[derive(Debug)]
pub struct Decompressor<D> {
    filter: Filter<D>,
}

impl<D: Decode> Decompressor<D> {
    /// Wrap an already configured codec.
    pub fn from_codec(codec: D) -> Self {
        Self {
            filter: Filter::new(codec),
        }
    }

    /// Decompress as much of `input` into `output` as possible.
    pub fn decompress(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<CompressionStatus> {
        self.filter.step(input, output)
    }

    /// Decompressors hold back no output, so there is nothing to flush.
    pub fn flush(&mut self, _output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        self.filter.codec().map(|_| true)
    }

    /// Prepare to decode a new stream, discarding all state from the
    /// current one.
    pub fn reset(&mut self) -> Result<()> {
        self.filter.codec()?.reinit()?;
        self.filter.state = State::Running;
        self.filter.pending = false;
        tracing::debug!("decompressor reset");
        Ok(())
    }
}

impl<D> Decompressor<D> {
    /// Release the native context.
    ///
    /// Later calls fail with [`Error::Closed`](crate::Error::Closed).
    pub fn close(&mut self) {
        self.filter.close();
    }

    /// Whether the end of the compressed stream has been reached.
    pub fn is_done(&self) -> bool {
        self.filter.is_done()
    }
}

impl<D: Decode> Transform for Decompressor<D> {
    fn transform(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<CompressionStatus> {
        self.decompress(input, output)
    }

    fn checkpoint(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        self.flush(output)
    }

    fn finish(&mut self, _output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        self.filter.codec()?;
        if self.is_done() {
            Ok(true)
        } else {
            Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "compressed stream ended before its end marker",
            )))
        }
    }
}
