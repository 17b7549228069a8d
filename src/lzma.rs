//! Legacy `.lzma` (LZMA-alone) streams.
//!
//! The format has no way to flush mid-stream, so a checkpoint only reports
//! success. Creating a native context can fail, so every constructor returns
//! a [`Result`](crate::Result).

algorithm!("lzma", LzmaEncoder, LzmaDecoder, fallible);

fn encoder(level: Level) -> Result<codec::LzmaEncoder> {
    codec::LzmaEncoder::new(level.into_xz2())
}

fn decoder() -> Result<codec::LzmaDecoder> {
    codec::LzmaDecoder::new()
}

/// Upper estimate of the size of an lzma stream holding `len` bytes.
pub fn compress_bound(len: usize) -> usize {
    codec::xz2_bound(codec::Xz2FileFormat::Lzma, len)
}

impl Decompressor {
    /// Create a decompressor that fails with
    /// [`Error::OutOfMemory`](crate::Error::OutOfMemory) rather than use more
    /// than `memlimit` bytes.
    pub fn with_memlimit(memlimit: u64) -> Result<Self> {
        Ok(Self::from_codec(codec::LzmaDecoder::with_memlimit(memlimit)?))
    }
}
