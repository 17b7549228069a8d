use crate::{
    codec::{Codec, Decode, Xz2Decoder, Xz2FileFormat},
    util::PartialBuffer,
    Result,
};

/// `.xz` (LZMA2) decompressor.
#[derive(Debug)]
pub struct XzDecoder {
    inner: Xz2Decoder,
}

impl XzDecoder {
    /// Decompressor without a memory limit.
    pub fn new() -> Result<Self> {
        Self::with_memlimit(u64::MAX)
    }

    /// Fail with [`Error::OutOfMemory`](crate::Error::OutOfMemory) rather
    /// than use more than `memlimit` bytes of memory.
    pub fn with_memlimit(memlimit: u64) -> Result<Self> {
        Ok(Self {
            inner: Xz2Decoder::new(Xz2FileFormat::Xz, memlimit)?,
        })
    }
}

impl Codec for XzDecoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        self.inner.process(input, output)
    }
}

impl Decode for XzDecoder {
    fn reinit(&mut self) -> Result<()> {
        self.inner.reinit()
    }
}
