use crate::{
    codec::{Codec, Encode, FlateEncoder},
    util::PartialBuffer,
    Result,
};

use flate2::Compression;

/// zlib (RFC 1950) compressor.
#[derive(Debug)]
pub struct ZlibEncoder {
    inner: FlateEncoder,
}

impl ZlibEncoder {
    /// `level` ranges from 0 (store) to 9 (smallest output).
    pub fn new(level: Compression) -> Self {
        Self {
            inner: FlateEncoder::new(level, true),
        }
    }
}

impl Codec for ZlibEncoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        self.inner.process(input, output)
    }
}

impl Encode for ZlibEncoder {
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
