mod decoder;
mod encoder;

use crate::Error;

pub use self::{decoder::BzDecoder, encoder::BzEncoder};

/// Worst case documented by libbz2: 1% larger plus 600 bytes.
pub(crate) fn compress_bound(len: usize) -> usize {
    len.saturating_add(len / 100).saturating_add(600)
}

fn translate(err: bzip2::Error) -> Error {
    tracing::debug!(error = %err, "libbz2 reported an error");
    match err {
        bzip2::Error::Data | bzip2::Error::DataMagic => Error::data(err.to_string()),
        bzip2::Error::Param => Error::invalid_parameter(err.to_string()),
        bzip2::Error::Sequence => Error::unexpected(err.to_string()),
        #[allow(unreachable_patterns)]
        _ => Error::unexpected(err.to_string()),
    }
}
