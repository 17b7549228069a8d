use std::{borrow::Cow, io};

/// Errors raised while driving a native codec.
///
/// Native status codes are translated into one of these kinds at the point
/// they are reported. Running out of input or output room is never an
/// error, see [`CompressionStatus`](crate::CompressionStatus).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The compressed input is corrupt or malformed.
    #[error("corrupt compressed data: {0}")]
    Data(Cow<'static, str>),

    /// The native library failed to allocate memory, or a configured memory
    /// limit was reached.
    #[error("compression library ran out of memory")]
    OutOfMemory,

    /// The native library build does not support the requested feature, or
    /// its version does not match the one expected.
    #[error("compression library configuration mismatch: {0}")]
    Config(Cow<'static, str>),

    /// An invalid level or parameter combination was supplied.
    #[error("invalid compression parameter: {0}")]
    InvalidParameter(Cow<'static, str>),

    /// A system-level I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A native status code that has no other classification.
    #[error("unexpected compression library error: {0}")]
    Unexpected(Cow<'static, str>),

    /// The zlib stream was compressed with a preset dictionary.
    #[error("stream requires a preset dictionary (adler32 {adler:#010x})")]
    NeedsDictionary {
        /// Adler-32 checksum of the dictionary the stream expects.
        adler: u32,
    },

    /// The decompressed data does not fit in the bound given by the caller.
    #[error("decompressed data exceeds the supplied bound of {bound} bytes")]
    BufferTooSmall {
        /// The bound supplied by the caller.
        bound: usize,
    },

    /// The native context was released by `close()`.
    #[error("compression filter has been closed")]
    Closed,
}

impl Error {
    pub(crate) fn data(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Data(message.into())
    }

    pub(crate) fn config(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Config(message.into())
    }

    pub(crate) fn invalid_parameter(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidParameter(message.into())
    }

    pub(crate) fn unexpected(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unexpected(message.into())
    }

    /// The [`io::ErrorKind`] this error is surfaced as by the IO adaptors.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Data(_) | Self::NeedsDictionary { .. } => io::ErrorKind::InvalidData,
            Self::OutOfMemory => io::ErrorKind::OutOfMemory,
            Self::InvalidParameter(_) | Self::BufferTooSmall { .. } => io::ErrorKind::InvalidInput,
            Self::Io(err) => err.kind(),
            Self::Config(_) | Self::Unexpected(_) | Self::Closed => io::ErrorKind::Other,
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(err) => err,
            err => io::Error::new(err.kind(), err),
        }
    }
}

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
