//! Blocking [`Read`](std::io::Read) and [`Write`](std::io::Write) adaptors
//! that pass a byte stream through a compressor or decompressor.
//!
//! [`FilterReader`] pulls raw bytes from an inner reader and hands out the
//! filtered result. [`FilterWriter`] accepts raw bytes and writes the
//! filtered result to an inner writer. Both own two buffers sized by
//! [`FilterConfig`](crate::FilterConfig).

mod read;
mod write;

pub use self::{read::FilterReader, write::FilterWriter};

use crate::{util::PartialBuffer, CompressionStatus, Result};

/// A filter the IO adaptors can drive, implemented by both
/// [`Compressor`](crate::Compressor) and [`Decompressor`](crate::Decompressor).
pub trait Transform {
    /// Consume from `input` and produce into `output`.
    fn transform(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<CompressionStatus>;

    /// Make everything consumed so far available in the output without
    /// ending the stream.
    ///
    /// Returns `true` once complete, otherwise call again with more room.
    fn checkpoint(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool>;

    /// End the stream once the raw input is exhausted.
    ///
    /// Returns `true` once complete, otherwise call again with more room.
    fn finish(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool>;
}

fn no_progress() -> std::io::Error {
    std::io::Error::new(
        std::io::ErrorKind::Other,
        "compression filter made no progress",
    )
}

/// Copies at most `limit` bytes per call, leaving the rest of the input.
#[cfg(test)]
#[derive(Debug)]
struct Chunked {
    limit: usize,
}

#[cfg(test)]
impl Transform for Chunked {
    fn transform(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<CompressionStatus> {
        let len = self
            .limit
            .min(input.unwritten().len())
            .min(output.unwritten().len());
        output.unwritten_mut()[..len].copy_from_slice(&input.unwritten()[..len]);
        input.advance(len);
        output.advance(len);

        if input.unwritten().is_empty() {
            Ok(CompressionStatus::NeedInput)
        } else {
            Ok(CompressionStatus::NeedOutput)
        }
    }

    fn checkpoint(&mut self, _output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        Ok(true)
    }

    fn finish(&mut self, _output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        Ok(true)
    }
}
