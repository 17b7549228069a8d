/// Generates the public surface of one algorithm module: type aliases for
/// the filters and IO adaptors, their constructors, and the one-shot
/// functions.
///
/// The invoking module provides `fn encoder(level: Level)` and
/// `fn decoder()` building its native codecs. With `fallible` they return
/// [`Result`](crate::Result) and so do the generated constructors.
macro_rules! algorithm {
    (@common $algo_s:literal $encoder:ident $decoder:ident) => {
        use std::io::{Read, Write};

        use crate::{
            codec,
            io::{FilterReader, FilterWriter},
            FilterConfig, Level, Result,
        };

        #[doc = concat!("Push-style ", $algo_s, " compressor.")]
        pub type Compressor = crate::Compressor<codec::$encoder>;

        #[doc = concat!("Push-style ", $algo_s, " decompressor.")]
        pub type Decompressor = crate::Decompressor<codec::$decoder>;

        #[doc = concat!("Reads a ", $algo_s, " stream and yields the decompressed data.")]
        pub type Reader<R> = FilterReader<R, Decompressor>;

        #[doc = concat!("Reads raw data and yields it as a ", $algo_s, " stream.")]
        pub type CompressReader<R> = FilterReader<R, Compressor>;

        #[doc = concat!("Accepts raw data and writes it as a ", $algo_s, " stream.")]
        pub type Writer<W> = FilterWriter<W, Compressor>;

        #[doc = concat!("Accepts a ", $algo_s, " stream and writes the decompressed data.")]
        pub type DecompressWriter<W> = FilterWriter<W, Decompressor>;

        #[doc = concat!("Compress `input` into one complete ", $algo_s, " stream at the default level.")]
        pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
            compress_with_level(input, Level::Default)
        }
    };

    ($algo_s:literal, $encoder:ident, $decoder:ident) => {
        algorithm!(@common $algo_s $encoder $decoder);

        #[doc = concat!("Compress `input` into one complete ", $algo_s, " stream.")]
        pub fn compress_with_level(input: &[u8], level: Level) -> Result<Vec<u8>> {
            crate::oneshot::compress(encoder(level), input)
        }

        #[doc = concat!("Decompress one complete ", $algo_s, " stream.")]
        ///
        /// Fails with [`Error::Data`](crate::Error::Data) if `input` is
        /// corrupt or ends before the stream does.
        pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
            crate::oneshot::decompress(decoder(), input)
        }

        #[doc = concat!("Decompress one complete ", $algo_s, " stream of at most `bound` bytes.")]
        ///
        /// Fails with [`Error::BufferTooSmall`](crate::Error::BufferTooSmall)
        /// if the content is larger.
        pub fn decompress_bound(input: &[u8], bound: usize) -> Result<Vec<u8>> {
            crate::oneshot::decompress_bound(decoder(), input, bound)
        }

        impl Compressor {
            /// Create a compressor writing a new stream at `level`.
            pub fn new(level: Level) -> Self {
                Self::from_codec(encoder(level))
            }
        }

        impl Decompressor {
            /// Create a decompressor expecting a new stream.
            pub fn new() -> Self {
                Self::from_codec(decoder())
            }
        }

        impl Default for Decompressor {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<R: Read> Reader<R> {
            /// Decompress the stream read from `reader`.
            pub fn new(reader: R) -> Self {
                Self::with_config(reader, FilterConfig::default())
            }

            /// Decompress the stream read from `reader`.
            pub fn with_config(reader: R, config: FilterConfig) -> Self {
                Self::with_filter_config(reader, Decompressor::new(), config)
            }
        }

        impl<R: Read> CompressReader<R> {
            /// Compress the data read from `reader` at `level`.
            pub fn new(reader: R, level: Level) -> Self {
                Self::with_config(reader, level, FilterConfig::default())
            }

            /// Compress the data read from `reader` at `level`.
            pub fn with_config(reader: R, level: Level, config: FilterConfig) -> Self {
                Self::with_filter_config(reader, Compressor::new(level), config)
            }
        }

        impl<W: Write> Writer<W> {
            /// Compress everything written at `level` into `writer`.
            pub fn new(writer: W, level: Level) -> Self {
                Self::with_config(writer, level, FilterConfig::default())
            }

            /// Compress everything written at `level` into `writer`.
            pub fn with_config(writer: W, level: Level, config: FilterConfig) -> Self {
                Self::with_filter_config(writer, Compressor::new(level), config)
            }
        }

        impl<W: Write> DecompressWriter<W> {
            /// Decompress the stream written into `writer`.
            pub fn new(writer: W) -> Self {
                Self::with_config(writer, FilterConfig::default())
            }

            /// Decompress the stream written into `writer`.
            pub fn with_config(writer: W, config: FilterConfig) -> Self {
                Self::with_filter_config(writer, Decompressor::new(), config)
            }
        }
    };

    ($algo_s:literal, $encoder:ident, $decoder:ident, fallible) => {
        algorithm!(@common $algo_s $encoder $decoder);

        #[doc = concat!("Compress `input` into one complete ", $algo_s, " stream.")]
        pub fn compress_with_level(input: &[u8], level: Level) -> Result<Vec<u8>> {
            crate::oneshot::compress(encoder(level)?, input)
        }

        #[doc = concat!("Decompress one complete ", $algo_s, " stream.")]
        ///
        /// Fails with [`Error::Data`](crate::Error::Data) if `input` is
        /// corrupt or ends before the stream does.
        pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
            crate::oneshot::decompress(decoder()?, input)
        }

        #[doc = concat!("Decompress one complete ", $algo_s, " stream of at most `bound` bytes.")]
        ///
        /// Fails with [`Error::BufferTooSmall`](crate::Error::BufferTooSmall)
        /// if the content is larger.
        pub fn decompress_bound(input: &[u8], bound: usize) -> Result<Vec<u8>> {
            crate::oneshot::decompress_bound(decoder()?, input, bound)
        }

        impl Compressor {
            /// Create a compressor writing a new stream at `level`.
            pub fn new(level: Level) -> Result<Self> {
                Ok(Self::from_codec(encoder(level)?))
            }
        }

        impl Decompressor {
            /// Create a decompressor expecting a new stream.
            pub fn new() -> Result<Self> {
                Ok(Self::from_codec(decoder()?))
            }
        }

        impl<R: Read> Reader<R> {
            /// Decompress the stream read from `reader`.
            pub fn new(reader: R) -> Result<Self> {
                Self::with_config(reader, FilterConfig::default())
            }

            /// Decompress the stream read from `reader`.
            pub fn with_config(reader: R, config: FilterConfig) -> Result<Self> {
                Ok(Self::with_filter_config(reader, Decompressor::new()?, config))
            }
        }

        impl<R: Read> CompressReader<R> {
            /// Compress the data read from `reader` at `level`.
            pub fn new(reader: R, level: Level) -> Result<Self> {
                Self::with_config(reader, level, FilterConfig::default())
            }

            /// Compress the data read from `reader` at `level`.
            pub fn with_config(reader: R, level: Level, config: FilterConfig) -> Result<Self> {
                Ok(Self::with_filter_config(reader, Compressor::new(level)?, config))
            }
        }

        impl<W: Write> Writer<W> {
            /// Compress everything written at `level` into `writer`.
            pub fn new(writer: W, level: Level) -> Result<Self> {
                Self::with_config(writer, level, FilterConfig::default())
            }

            /// Compress everything written at `level` into `writer`.
            pub fn with_config(writer: W, level: Level, config: FilterConfig) -> Result<Self> {
                Ok(Self::with_filter_config(writer, Compressor::new(level)?, config))
            }
        }

        impl<W: Write> DecompressWriter<W> {
            /// Decompress the stream written into `writer`.
            pub fn new(writer: W) -> Result<Self> {
                Self::with_config(writer, FilterConfig::default())
            }

            /// Decompress the stream written into `writer`.
            pub fn with_config(writer: W, config: FilterConfig) -> Result<Self> {
                Ok(Self::with_filter_config(writer, Decompressor::new()?, config))
            }
        }
    };
}
