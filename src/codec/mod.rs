//! Adapters binding each native compression library to one shared step
//! protocol.
//!
//! Any type implementing [`Encode`] or [`Decode`] can be driven by
//! [`Compressor`](crate::Compressor) or [`Decompressor`](crate::Decompressor).
//!
//! Every adapter owns exactly one native context. It advances the
//! [`PartialBuffer`] cursors by exactly the number of bytes the native
//! library consumed and produced, and translates native status codes into
//! [`Error`](crate::Error) at the point they are reported.

use crate::{util::PartialBuffer, Result};

#[cfg(feature = "bzip2")]
mod bzip2;
#[cfg(feature = "deflate")]
mod deflate;
#[cfg(feature = "flate2")]
mod flate;
#[cfg(feature = "lzma")]
mod lzma;
#[cfg(feature = "xz")]
mod xz;
#[cfg(feature = "lzma")]
mod xz2;
#[cfg(feature = "zlib")]
mod zlib;

#[cfg(feature = "bzip2")]
pub use self::bzip2::{BzDecoder, BzEncoder};
#[cfg(feature = "bzip2")]
pub(crate) use self::bzip2::compress_bound as bzip2_bound;
#[cfg(feature = "deflate")]
pub use self::deflate::{DeflateDecoder, DeflateEncoder};
#[cfg(feature = "flate2")]
pub(crate) use self::flate::{compress_bound as flate_bound, FlateDecoder, FlateEncoder};
#[cfg(feature = "lzma")]
pub use self::lzma::{LzmaDecoder, LzmaEncoder};
#[cfg(feature = "xz")]
pub use self::xz::{XzDecoder, XzEncoder};
#[cfg(feature = "lzma")]
pub(crate) use self::xz2::{compress_bound as xz2_bound, Xz2Decoder, Xz2Encoder, Xz2FileFormat};
#[cfg(feature = "zlib")]
pub use self::zlib::{ZlibDecoder, ZlibEncoder};

/// The native "process one step" primitive.
pub trait Codec {
    /// Consume from `input` and produce into `output` with a single call into
    /// the native library.
    ///
    /// Returns `true` once the native library signals its terminal state.
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool>;
}

/// Abstraction for compressors.
pub trait Encode: Codec {
    /// Emit everything buffered so far without ending the stream.
    ///
    /// Returns `true` iff the internal buffers have been completely flushed.
    fn flush(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool>;

    /// Finish the stream, writing any trailer or checksum.
    ///
    /// Returns `true` iff the stream has been completely written.
    fn finish(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool>;

    /// Worst-case compressed size of `len` input bytes.
    fn bound(&self, len: usize) -> usize;
}

/// Abstraction for decompressors.
pub trait Decode: Codec {
    /// Reinitialize the native context, preparing it to decode a new stream.
    fn reinit(&mut self) -> Result<()>;
}
