use std::fmt;

use liblzma::stream::{Action, Check, LzmaOptions, Status, Stream};

use super::translate;
use crate::{
    codec::{Codec, Encode, Xz2FileFormat},
    util::PartialBuffer,
    Error, Result,
};

pub struct Xz2Encoder {
    stream: Stream,
    format: Xz2FileFormat,
}

impl fmt::Debug for Xz2Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Xz2Encoder")
            .field("format", &self.format)
            .field("total_in", &self.stream.total_in())
            .field("total_out", &self.stream.total_out())
            .finish()
    }
}

impl Xz2Encoder {
    /// `preset` is liblzma's 0-9 compression preset.
    pub fn new(format: Xz2FileFormat, preset: u32) -> Result<Self> {
        let stream = match format {
            Xz2FileFormat::Xz => Stream::new_easy_encoder(preset, Check::Crc64),
            Xz2FileFormat::Lzma => LzmaOptions::new_preset(preset)
                .and_then(|options| Stream::new_lzma_encoder(&options)),
        }
        .map_err(translate)?;

        tracing::debug!(?format, preset, "lzma encoder created");
        Ok(Self { stream, format })
    }

    fn encode(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
        action: Action,
    ) -> Result<bool> {
        let previous_in = self.stream.total_in() as usize;
        let previous_out = self.stream.total_out() as usize;

        let status = self
            .stream
            .process(input.unwritten(), output.unwritten_mut(), action)
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

impl Codec for Xz2Encoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        self.encode(input, output, Action::Run)
    }
}

impl Encode for Xz2Encoder {
    fn flush(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        // liblzma reports LZMA_STREAM_END once the sync flush is complete.
        self.encode(&mut PartialBuffer::new(&[][..]), output, Action::SyncFlush)
    }

    fn finish(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        self.encode(&mut PartialBuffer::new(&[][..]), output, Action::Finish)
    }

    fn bound(&self, len: usize) -> usize {
        super::compress_bound(self.format, len)
    }
}
