use std::fmt;

use liblzma::stream::{Action, Status, Stream};

use super::translate;
use crate::{
    codec::{Codec, Decode, Xz2FileFormat},
    util::PartialBuffer,
    Error, Result,
};

pub struct Xz2Decoder {
    stream: Stream,
    format: Xz2FileFormat,
}

impl fmt::Debug for Xz2Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Xz2Decoder")
            .field("format", &self.format)
            .field("memlimit", &self.stream.memlimit())
            .finish_non_exhaustive()
    }
}

impl Xz2Decoder {
    pub fn new(format: Xz2FileFormat, memlimit: u64) -> Result<Self> {
        let stream = Self::stream(format, memlimit)?;
        tracing::debug!(?format, memlimit, "lzma decoder created");
        Ok(Self { stream, format })
    }

    fn stream(format: Xz2FileFormat, memlimit: u64) -> Result<Stream> {
        match format {
            Xz2FileFormat::Xz => Stream::new_stream_decoder(memlimit, 0),
            Xz2FileFormat::Lzma => Stream::new_lzma_decoder(memlimit),
        }
        .map_err(translate)
    }
}

impl Codec for Xz2Decoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        let previous_in = self.stream.total_in() as usize;
        let previous_out = self.stream.total_out() as usize;

        let status = self
            .stream
            .process(input.unwritten(), output.unwritten_mut(), Action::Run)
            .map_err(translate)?;

        input.advance(self.stream.total_in() as usize - previous_in);
        output.advance(self.stream.total_out() as usize - previous_out);

        match status {
            Status::Ok => Ok(false),
            Status::StreamEnd => Ok(true),
            // LZMA_BUF_ERROR: no progress was possible with the given buffers.
            Status::MemNeeded => Ok(false),
            Status::GetCheck => Err(Error::unexpected("unexpected lzma integrity check")),
        }
    }
}

impl Decode for Xz2Decoder {
    fn reinit(&mut self) -> Result<()> {
        self.stream = Self::stream(self.format, self.stream.memlimit())?;
        Ok(())
    }
}
