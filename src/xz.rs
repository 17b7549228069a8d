//! `.xz` streams holding LZMA2 data, checked with CRC64.
//!
//! Creating a native context can fail, so every constructor returns a
//! [`Result`](crate::Result).

algorithm!("xz", XzEncoder, XzDecoder, fallible);

fn encoder(level: Level) -> Result<codec::XzEncoder> {
    codec::XzEncoder::new(level.into_xz2())
}

fn decoder() -> Result<codec::XzDecoder> {
    codec::XzDecoder::new()
}

/// Worst-case size of an xz stream holding `len` bytes.
pub fn compress_bound(len: usize) -> usize {
    codec::xz2_bound(codec::Xz2FileFormat::Xz, len)
}

impl Decompressor {
    /// Create a decompressor that fails with
    /// [`Error::OutOfMemory`](crate::Error::OutOfMemory) rather than use more
    /// than `memlimit` bytes.
    pub fn with_memlimit(memlimit: u64) -> Result<Self> {
        Ok(Self::from_codec(codec::XzDecoder::with_memlimit(memlimit)?))
    }
}
