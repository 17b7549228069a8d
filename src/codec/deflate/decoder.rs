use crate::{
    codec::{Codec, Decode, FlateDecoder},
    util::PartialBuffer,
    Result,
};

/// Raw deflate (RFC 1951) decompressor.
#[derive(Debug)]
pub struct DeflateDecoder {
    inner: FlateDecoder,
}

impl Default for DeflateDecoder {
    fn default() -> Self {
        Self {
            inner: FlateDecoder::new(false),
        }
    }
}

impl DeflateDecoder {
    /// Decompressor for a raw deflate stream without header or trailer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for DeflateDecoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        self.inner.process(input, output)
    }
}

impl Decode for DeflateDecoder {
    fn reinit(&mut self) -> Result<()> {
        self.inner.reinit()
    }
}
