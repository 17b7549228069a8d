use super::translate;
use crate::{
    codec::{Codec, Encode},
    util::PartialBuffer,
    Error, Result,
};
use bzip2::{Action, Compress, Compression, Status};
use std::fmt;

/// bzip2 compressor.
pub struct BzEncoder {
    compress: Compress,
}

impl fmt::Debug for BzEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BzEncoder {{total_in: {}, total_out: {}}}",
            self.compress.total_in(),
            self.compress.total_out()
        )
    }
}

impl BzEncoder {
    /// `level` selects the block size (1-9, in units of 100 KiB).
    ///
    /// `work_factor` controls how the compression phase behaves when
    /// presented with worst case, highly repetitive input data, from 0 to 250.
    /// 0 selects libbz2's default of 30.
    pub fn new(level: Compression, work_factor: u32) -> Self {
        tracing::debug!(level = level.level(), work_factor, "bzip2 encoder created");
        Self {
            compress: Compress::new(level, work_factor),
        }
    }

    fn encode(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
        action: Action,
    ) -> Result<Status> {
        let prior_in = self.compress.total_in();
        let prior_out = self.compress.total_out();

        let status = self
            .compress
            .compress(input.unwritten(), output.unwritten_mut(), action)
            .map_err(translate)?;

        input.advance((self.compress.total_in() - prior_in) as usize);
        output.advance((self.compress.total_out() - prior_out) as usize);

        Ok(status)
    }
}

fn unexpected(status: Status) -> Error {
    Error::unexpected(format!("unexpected bzip2 status {status:?}"))
}

impl Codec for BzEncoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        match self.encode(input, output, Action::Run)? {
            // The Run action on compression went ok.
            Status::RunOk => Ok(false),
            status => Err(unexpected(status)),
        }
    }
}

impl Encode for BzEncoder {
    fn flush(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        match self.encode(&mut PartialBuffer::new(&[][..]), output, Action::Flush)? {
            // The flush is still in progress.
            Status::FlushOk => Ok(false),
            // libbz2 returns to the running state once everything is flushed.
            Status::RunOk => Ok(true),
            status => Err(unexpected(status)),
        }
    }

    fn finish(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        match self.encode(&mut PartialBuffer::new(&[][..]), output, Action::Finish)? {
            // The Finish action on compression went ok, more output pending.
            Status::FinishOk => Ok(false),
            // The stream's end has been written.
            Status::StreamEnd => Ok(true),
            status => Err(unexpected(status)),
        }
    }

    fn bound(&self, len: usize) -> usize {
        super::compress_bound(len)
    }
}
