use crate::{
    codec::{Codec, Encode, Xz2Encoder, Xz2FileFormat},
    util::PartialBuffer,
    Result,
};

/// `.xz` (LZMA2) compressor.
#[derive(Debug)]
pub struct XzEncoder {
    inner: Xz2Encoder,
}

impl XzEncoder {
    /// `preset` is liblzma's 0-9 compression preset.
    pub fn new(preset: u32) -> Result<Self> {
        Ok(Self {
            inner: Xz2Encoder::new(Xz2FileFormat::Xz, preset)?,
        })
    }
}

impl Codec for XzEncoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        self.inner.process(input, output)
    }
}

impl Encode for XzEncoder {
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
