mod decoder;
mod encoder;

use crate::Error;

/// Container produced or accepted by a liblzma stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Xz2FileFormat {
    /// `.xz` container holding LZMA2 data.
    Xz,
    /// Legacy `.lzma` (LZMA-alone) container holding LZMA1 data.
    Lzma,
}

pub use self::{decoder::Xz2Decoder, encoder::Xz2Encoder};

/// Worst-case size of a stream in `format` holding `len` bytes.
pub(crate) fn compress_bound(format: Xz2FileFormat, len: usize) -> usize {
    match format {
        // lzma_stream_buffer_bound: 3 bytes per 64 KiB LZMA2 chunk plus
        // block header, check, padding, stream header/footer and index.
        Xz2FileFormat::Xz => len
            .saturating_add(((len >> 16) + 1).saturating_mul(3))
            .saturating_add(1 + 1024 + 64 + 3 + 12 + 12 + 24),
        // liblzma has no bound for LZMA1; this overestimates its expansion.
        Xz2FileFormat::Lzma => len.saturating_add(len >> 2).saturating_add(64),
    }
}

fn translate(err: liblzma::stream::Error) -> Error {
    use liblzma::stream::Error as Native;

    tracing::debug!(error = %err, "liblzma reported an error");
    match err {
        Native::Data | Native::Format => Error::data(err.to_string()),
        Native::Mem | Native::MemLimit => Error::OutOfMemory,
        Native::Options => Error::invalid_parameter(err.to_string()),
        Native::NoCheck | Native::UnsupportedCheck => Error::config(err.to_string()),
        Native::Program => Error::unexpected(err.to_string()),
        #[allow(unreachable_patterns)]
        _ => Error::unexpected(err.to_string()),
    }
}
