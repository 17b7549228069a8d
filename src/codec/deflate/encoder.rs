use crate::{
    codec::{Codec, Encode, FlateEncoder},
    util::PartialBuffer,
    Result,
};

use flate2::Compression;

/// Raw deflate (RFC 1951) compressor.
#[derive(Debug)]
pub struct DeflateEncoder {
    inner: FlateEncoder,
}

impl DeflateEncoder {
    /// `level` ranges from 0 (store) to 9 (smallest output).
    pub fn new(level: Compression) -> Self {
        Self {
            inner: FlateEncoder::new(level, false),
        }
    }
}

impl Codec for DeflateEncoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        self.inner.process(input, output)
    }
}

impl Encode for DeflateEncoder {
    fn flush(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        self.inner.flush(output)
    }

    fn finish(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        self.inner.finish(output)
    }

    fn bound(&self, len: usize) -> usize {
        self.inner.bound(len)
    }
}
