//! bzip2 streams.

algorithm!("bzip2", BzEncoder, BzDecoder);

fn encoder(level: Level) -> codec::BzEncoder {
    codec::BzEncoder::new(level.into_bzip2(), 0)
}

fn decoder() -> codec::BzDecoder {
    codec::BzDecoder::new(false)
}

/// Worst-case size of a bzip2 stream holding `len` bytes.
pub fn compress_bound(len: usize) -> usize {
    codec::bzip2_bound(len)
}

impl Compressor {
    /// Create a compressor with a custom `work_factor`, see
    /// [`BzEncoder::new`](crate::codec::BzEncoder::new).
    pub fn with_work_factor(level: Level, work_factor: u32) -> Self {
        Self::from_codec(codec::BzEncoder::new(level.into_bzip2(), work_factor))
    }
}

impl Decompressor {
    /// Create a decompressor using libbz2's slower algorithm that needs
    /// about half the memory.
    pub fn small() -> Self {
        Self::from_codec(codec::BzDecoder::new(true))
    }
}
