//! Raw deflate (RFC 1951) streams, without the zlib header and checksum.

algorithm!("deflate", DeflateEncoder, DeflateDecoder);

fn encoder(level: Level) -> codec::DeflateEncoder {
    codec::DeflateEncoder::new(level.into_flate2())
}

fn decoder() -> codec::DeflateDecoder {
    codec::DeflateDecoder::new()
}

/// Worst-case size of a raw deflate stream holding `len` bytes.
pub fn compress_bound(len: usize) -> usize {
    codec::flate_bound(len)
}
