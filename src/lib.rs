//! Streaming compression filters over the native zlib, liblzma and libbz2
//! libraries.
//!
//! Every algorithm is driven through the same step protocol: a
//! [`Compressor`] or [`Decompressor`] consumes bytes from an input
//! [`PartialBuffer`], produces bytes into an output one, and reports a
//! [`CompressionStatus`] telling the caller whether to supply more input,
//! make more room, or stop. On top of that sit whole-buffer functions
//! (`compress`, `decompress`, ...) in each algorithm module, and the
//! [`FilterReader`](io::FilterReader) and [`FilterWriter`](io::FilterWriter)
//! adaptors over [`std::io`].
//!
//! ```
//! use std::io::{Read, Write};
//! use filter_compression::{bzip2, Level};
//!
//! let mut writer = bzip2::Writer::new(Vec::new(), Level::Default);
//! writer.write_all(b"a line of text\n")?;
//! let compressed = writer.into_inner()?;
//!
//! let mut text = String::new();
//! bzip2::Reader::new(&compressed[..]).read_to_string(&mut text)?;
//! assert_eq!(text, "a line of text\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!

//! # Feature Organization
//!
//! Each compression algorithm can be selected via a Cargo feature. All of them are enabled by
//! default through the `all-algorithms` group feature.
//!

//!  Feature | Module
//! ---------|------
#![cfg_attr(feature = "bzip2", doc = "`bzip2` | [`bzip2`]")]
#![cfg_attr(not(feature = "bzip2"), doc = "`bzip2` (*inactive*) | `bzip2`")]
#![cfg_attr(feature = "deflate", doc = "`deflate` | [`deflate`]")]
#![cfg_attr(not(feature = "deflate"), doc = "`deflate` (*inactive*) | `deflate`")]
#![cfg_attr(feature = "lzma", doc = "`lzma` | [`lzma`]")]
#![cfg_attr(not(feature = "lzma"), doc = "`lzma` (*inactive*) | `lzma`")]
#![cfg_attr(feature = "xz", doc = "`xz` | [`xz`]")]
#![cfg_attr(not(feature = "xz"), doc = "`xz` (*inactive*) | `xz`")]
#![cfg_attr(feature = "zlib", doc = "`zlib` | [`zlib`]")]
#![cfg_attr(not(feature = "zlib"), doc = "`zlib` (*inactive*) | `zlib`")]
//!

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_copy_implementations,
    missing_debug_implementations
)]
#![cfg_attr(not(feature = "all-algorithms"), allow(unused))]

#[macro_use]
mod macros;

pub mod codec;
mod config;
mod error;
mod filter;
pub mod io;
mod oneshot;
mod status;
mod util;

#[cfg(feature = "bzip2")]
#[cfg_attr(docsrs, doc(cfg(feature = "bzip2")))]
pub mod bzip2;
#[cfg(feature = "deflate")]
#[cfg_attr(docsrs, doc(cfg(feature = "deflate")))]
pub mod deflate;
#[cfg(feature = "lzma")]
#[cfg_attr(docsrs, doc(cfg(feature = "lzma")))]
pub mod lzma;
#[cfg(feature = "xz")]
#[cfg_attr(docsrs, doc(cfg(feature = "xz")))]
pub mod xz;
#[cfg(feature = "zlib")]
#[cfg_attr(docsrs, doc(cfg(feature = "zlib")))]
pub mod zlib;

pub use self::{
    config::FilterConfig,
    error::{Error, Result},
    filter::{Compressor, Decompressor},
    status::CompressionStatus,
    util::PartialBuffer,
};

/// Level of compression data should be compressed with.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Level {
    /// Fastest quality of compression, usually produces bigger size.
    Fastest,
    /// Best quality of compression, usually produces the smallest size.
    Best,
    /// Default quality of compression defined by the selected compression algorithm.
    ///
    /// This is 6 for zlib, deflate, xz and lzma, and 9 for bzip2.
    #[default]
    Default,
    /// Precise quality based on the underlying compression algorithms'
    /// qualities. The interpretation of this depends on the algorithm chosen
    /// and the specific implementation backing it.
    /// Qualities are implicitly clamped to the algorithm's range.
    ///
    /// For bzip2 this is the block size in units of 100 KiB, from 1 to 9.
    Precise(u32),
}

impl Level {
    #[cfg(feature = "bzip2")]
    fn into_bzip2(self) -> ::bzip2::Compression {
        match self {
            Self::Fastest => ::bzip2::Compression::fast(),
            Self::Best | Self::Default => ::bzip2::Compression::best(),
            Self::Precise(quality) => ::bzip2::Compression::new(quality.clamp(1, 9)),
        }
    }

    #[cfg(feature = "flate2")]
    fn into_flate2(self) -> flate2::Compression {
        match self {
            Self::Fastest => flate2::Compression::fast(),
            Self::Best => flate2::Compression::best(),
            Self::Precise(quality) => flate2::Compression::new(quality.min(9)),
            Self::Default => flate2::Compression::new(6),
        }
    }

    #[cfg(feature = "lzma")]
    fn into_xz2(self) -> u32 {
        match self {
            Self::Fastest => 0,
            Self::Best => 9,
            Self::Precise(quality) => quality.min(9),
            Self::Default => 6,
        }
    }
}
