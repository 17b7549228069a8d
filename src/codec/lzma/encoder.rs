use crate::{
    codec::{Codec, Encode, Xz2Encoder, Xz2FileFormat},
    util::PartialBuffer,
    Result,
};

/// Legacy `.lzma` (LZMA-alone) compressor.
#[derive(Debug)]
pub struct LzmaEncoder {
    inner: Xz2Encoder,
}

impl LzmaEncoder {
    /// `preset` is liblzma's 0-9 compression preset.
    pub fn new(preset: u32) -> Result<Self> {
        Ok(Self {
            inner: Xz2Encoder::new(Xz2FileFormat::Lzma, preset)?,
        })
    }
}

impl Codec for LzmaEncoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        self.inner.process(input, output)
    }
}

impl Encode for LzmaEncoder {
    fn flush(&mut self, _output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        // Flush on LZMA 1 is not supported
        Ok(true)
    }

    fn finish(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        self.inner.finish(output)
    }

    fn bound(&self, len: usize) -> usize {
        self.inner.bound(len)
    }
}
