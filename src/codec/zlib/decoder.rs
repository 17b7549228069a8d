use crate::{
    codec::{Codec, Decode, FlateDecoder},
    util::PartialBuffer,
    Result,
};

/// zlib (RFC 1950) decompressor.
#[derive(Debug)]
pub struct ZlibDecoder {
    inner: FlateDecoder,
}

impl Default for ZlibDecoder {
    fn default() -> Self {
        Self {
            inner: FlateDecoder::new(true),
        }
    }
}

impl ZlibDecoder {
    /// Decompressor expecting a zlib header.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for ZlibDecoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        self.inner.process(input, output)
    }
}

impl Decode for ZlibDecoder {
    fn reinit(&mut self) -> Result<()> {
        self.inner.reinit()
    }
}
