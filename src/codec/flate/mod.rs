mod decoder;
mod encoder;

pub use self::{decoder::FlateDecoder, encoder::FlateEncoder};

/// zlib's `compressBound`, valid for both zlib and raw deflate streams.
pub(crate) fn compress_bound(len: usize) -> usize {
    len.saturating_add((len >> 12) + (len >> 14) + (len >> 25) + 13)
}
