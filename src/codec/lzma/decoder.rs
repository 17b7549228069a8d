use crate::{
    codec::{Codec, Decode, Xz2Decoder, Xz2FileFormat},
    util::PartialBuffer,
    Result,
};

/// Legacy `.lzma` (LZMA-alone) decompressor.
#[derive(Debug)]
pub struct LzmaDecoder {
    inner: Xz2Decoder,
}

impl LzmaDecoder {
    /// Decompressor without a memory limit.
    pub fn new() -> Result<Self> {
        Self::with_memlimit(u64::MAX)
    }

    /// Fail with [`Error::OutOfMemory`](crate::Error::OutOfMemory) rather
    /// than use more than `memlimit` bytes of memory.
    pub fn with_memlimit(memlimit: u64) -> Result<Self> {
        Ok(Self {
            inner: Xz2Decoder::new(Xz2FileFormat::Lzma, memlimit)?,
        })
    }
}

impl Codec for LzmaDecoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        self.inner.process(input, output)
    }
}

impl Decode for LzmaDecoder {
    fn reinit(&mut self) -> Result<()> {
        self.inner.reinit()
    }
}
