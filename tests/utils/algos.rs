macro_rules! algos {
    (@ctors [$($unwrap:tt)*]) => {
        pub fn compressor(level: Level) -> Compressor {
            Compressor::new(level)$($unwrap)*
        }

        pub fn decompressor() -> Decompressor {
            Decompressor::new()$($unwrap)*
        }

        pub fn reader<R: Read>(inner: R, config: FilterConfig) -> Reader<R> {
            Reader::with_config(inner, config)$($unwrap)*
        }

        pub fn compress_reader<R: Read>(inner: R, config: FilterConfig) -> CompressReader<R> {
            CompressReader::with_config(inner, Level::Default, config)$($unwrap)*
        }

        pub fn writer<W: Write>(inner: W, config: FilterConfig) -> Writer<W> {
            Writer::with_config(inner, Level::Default, config)$($unwrap)*
        }

        pub fn decompress_writer<W: Write>(inner: W, config: FilterConfig) -> DecompressWriter<W> {
            DecompressWriter::with_config(inner, config)$($unwrap)*
        }
    };

    ($(pub mod $name:ident($feat:literal, [$($unwrap:tt)*]) { pub mod sync { $($tt:tt)* } })*) => {
        $(
            #[cfg(feature = $feat)]
            pub mod $name {
                pub use filter_compression::$name::*;

                use filter_compression::{FilterConfig, Level};
                use std::io::{Read, Write};

                pub mod sync {
                    use crate::utils::read_to_vec;

                    $($tt)*
                }

                algos!(@ctors [$($unwrap)*]);
            }
        )*
    }
}

algos! {
    pub mod bzip2("bzip2", []) {
        pub mod sync {
            pub fn compress(bytes: &[u8]) -> Vec<u8> {
                use ::bzip2::{read::BzEncoder, Compression};
                read_to_vec(BzEncoder::new(bytes, Compression::fast()))
            }

            pub fn decompress(bytes: &[u8]) -> Vec<u8> {
                use ::bzip2::read::BzDecoder;
                read_to_vec(BzDecoder::new(bytes))
            }
        }
    }

    pub mod deflate("deflate", []) {
        pub mod sync {
            pub fn compress(bytes: &[u8]) -> Vec<u8> {
                use flate2::{read::DeflateEncoder, Compression};
                read_to_vec(DeflateEncoder::new(bytes, Compression::fast()))
            }

            pub fn decompress(bytes: &[u8]) -> Vec<u8> {
                use flate2::read::DeflateDecoder;
                read_to_vec(DeflateDecoder::new(bytes))
            }
        }
    }

    pub mod zlib("zlib", []) {
        pub mod sync {
            pub fn compress(bytes: &[u8]) -> Vec<u8> {
                use flate2::{read::ZlibEncoder, Compression};
                read_to_vec(ZlibEncoder::new(bytes, Compression::fast()))
            }

            pub fn decompress(bytes: &[u8]) -> Vec<u8> {
                use flate2::read::ZlibDecoder;
                read_to_vec(ZlibDecoder::new(bytes))
            }
        }
    }

    pub mod xz("xz", [.unwrap()]) {
        pub mod sync {
            pub fn compress(bytes: &[u8]) -> Vec<u8> {
                use liblzma::read::XzEncoder;
                read_to_vec(XzEncoder::new(bytes, 0))
            }

            pub fn decompress(bytes: &[u8]) -> Vec<u8> {
                use liblzma::read::XzDecoder;
                read_to_vec(XzDecoder::new(bytes))
            }
        }
    }

    pub mod lzma("lzma", [.unwrap()]) {
        pub mod sync {
            pub fn compress(bytes: &[u8]) -> Vec<u8> {
                use liblzma::{
                    read::XzEncoder,
                    stream::{LzmaOptions, Stream},
                };
                let options = LzmaOptions::new_preset(0).unwrap();
                let stream = Stream::new_lzma_encoder(&options).unwrap();
                read_to_vec(XzEncoder::new_stream(bytes, stream))
            }

            pub fn decompress(bytes: &[u8]) -> Vec<u8> {
                use liblzma::{read::XzDecoder, stream::Stream};
                let stream = Stream::new_lzma_decoder(u64::MAX).unwrap();
                read_to_vec(XzDecoder::new_stream(bytes, stream))
            }
        }
    }
}
