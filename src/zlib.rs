//! zlib (RFC 1950) streams.
//!
//! ```
//! use filter_compression::zlib;
//!
//! let compressed = zlib::compress(b"hello hello hello hello")?;
//! assert_eq!(zlib::decompress(&compressed)?, b"hello hello hello hello");
//! # Ok::<(), filter_compression::Error>(())
//! ```

algorithm!("zlib", ZlibEncoder, ZlibDecoder);

fn encoder(level: Level) -> codec::ZlibEncoder {
    codec::ZlibEncoder::new(level.into_flate2())
}

fn decoder() -> codec::ZlibDecoder {
    codec::ZlibDecoder::new()
}

/// Worst-case size of a zlib stream holding `len` bytes.
pub fn compress_bound(len: usize) -> usize {
    codec::flate_bound(len)
}
