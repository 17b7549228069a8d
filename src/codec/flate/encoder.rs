use crate::{
    codec::{Codec, Encode},
    util::PartialBuffer,
    Error, Result,
};
use flate2::{Compress, CompressError, Compression, FlushCompress, Status};

#[derive(Debug)]
pub struct FlateEncoder {
    compress: Compress,
    /// Output of a full flush that did not fit in the caller's buffer.
    spill: Vec<u8>,
    spill_start: usize,
}

impl FlateEncoder {
    pub(crate) fn new(level: Compression, zlib_header: bool) -> Self {
        tracing::debug!(level = level.level(), zlib_header, "deflate stream created");
        Self {
            compress: Compress::new(level, zlib_header),
            spill: Vec::new(),
            spill_start: 0,
        }
    }

    fn encode(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
        flush: FlushCompress,
    ) -> Result<Status> {
        let prior_in = self.compress.total_in();
        let prior_out = self.compress.total_out();

        let status = self
            .compress
            .compress(input.unwritten(), output.unwritten_mut(), flush)
            .map_err(translate)?;

        input.advance((self.compress.total_in() - prior_in) as usize);
        output.advance((self.compress.total_out() - prior_out) as usize);

        Ok(status)
    }

    /// Complete a full flush that filled the caller's buffer.
    ///
    /// Deflate only reports a full flush as complete by returning with room
    /// to spare, so the rest of it goes to `spill`, growing it until that
    /// happens.
    fn spill_flush(&mut self) -> Result<()> {
        let mut additional = 64;
        loop {
            self.spill.reserve(additional);
            self.compress
                .compress_vec(&[], &mut self.spill, FlushCompress::Full)
                .map_err(translate)?;

            if self.spill.len() < self.spill.capacity() {
                tracing::trace!(len = self.spill.len(), "full flush spilled");
                return Ok(());
            }
            additional = additional.saturating_mul(2);
        }
    }
}

// deflate only fails on an inconsistent stream state (Z_STREAM_ERROR).
fn translate(err: CompressError) -> Error {
    tracing::debug!(error = %err, "deflate reported an error");
    Error::invalid_parameter(err.to_string())
}

impl Codec for FlateEncoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        // Z_BUF_ERROR only means no progress was possible.
        Ok(self.encode(input, output, FlushCompress::None)? == Status::StreamEnd)
    }
}

impl Encode for FlateEncoder {
    fn flush(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        if self.spill.is_empty() {
            self.encode(&mut PartialBuffer::new(&[][..]), output, FlushCompress::Full)?;

            // A full flush is complete once deflate returns with room to spare.
            if !output.unwritten().is_empty() {
                return Ok(true);
            }
            self.spill_flush()?;
        }

        let pending = &self.spill[self.spill_start..];
        let len = pending.len().min(output.unwritten().len());
        output.unwritten_mut()[..len].copy_from_slice(&pending[..len]);
        output.advance(len);
        self.spill_start += len;

        if self.spill_start < self.spill.len() {
            return Ok(false);
        }
        self.spill.clear();
        self.spill_start = 0;
        Ok(true)
    }

    fn finish(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        match self.encode(&mut PartialBuffer::new(&[][..]), output, FlushCompress::Finish)? {
            Status::StreamEnd => Ok(true),
            Status::Ok | Status::BufError => Ok(false),
        }
    }

    fn bound(&self, len: usize) -> usize {
        super::compress_bound(len)
    }
}
