//! Whole-buffer compression and decompression on top of the step driver.

use crate::{
    codec::{Decode, Encode},
    util::PartialBuffer,
    CompressionStatus, Compressor, Decompressor, Error, Result,
};

/// Grow `buffer` so it has room past `written`, never beyond `limit` bytes.
fn grow(buffer: &mut Vec<u8>, written: usize, limit: usize) {
    if written == buffer.len() {
        let len = buffer.len().saturating_mul(2).max(64).min(limit);
        buffer.resize(len, 0);
    }
}

fn stalled() -> Error {
    Error::unexpected("compression library made no progress")
}

/// Compress all of `input` as one complete stream.
pub(crate) fn compress<E: Encode>(codec: E, input: &[u8]) -> Result<Vec<u8>> {
    let mut compressor = Compressor::from_codec(codec);
    let mut buffer = vec![0; compressor.bound(input.len()).max(1)];
    let mut input = PartialBuffer::new(input);
    let mut written = 0;

    loop {
        grow(&mut buffer, written, usize::MAX);
        let prior_in = input.written().len();
        let mut output = PartialBuffer::new(&mut buffer[written..]);
        let status = compressor.compress(&mut input, &mut output)?;
        let produced = output.written().len();
        written += produced;

        match status {
            CompressionStatus::NeedInput | CompressionStatus::Eof => break,
            CompressionStatus::NeedOutput
                if produced == 0 && input.written().len() == prior_in && written < buffer.len() =>
            {
                return Err(stalled());
            }
            CompressionStatus::NeedOutput => {}
        }
    }

    loop {
        grow(&mut buffer, written, usize::MAX);
        let mut output = PartialBuffer::new(&mut buffer[written..]);
        let done = compressor.flush(&mut output)?;
        let produced = output.written().len();
        written += produced;

        if done {
            break;
        } else if produced == 0 {
            return Err(stalled());
        }
    }

    buffer.truncate(written);
    tracing::trace!(consumed = input.written().len(), produced = written, "compressed buffer");
    Ok(buffer)
}

/// Decompress one complete stream from `input`, producing at most `limit`
/// bytes.
///
/// Returns `None` if the stream has more than `limit` bytes of content.
fn decompress_limited<D: Decode>(
    codec: D,
    input: &[u8],
    initial: usize,
    limit: usize,
) -> Result<Option<Vec<u8>>> {
    let mut decompressor = Decompressor::from_codec(codec);
    let mut buffer = vec![0; initial.min(limit)];
    let mut input = PartialBuffer::new(input);
    let mut written = 0;

    loop {
        grow(&mut buffer, written, limit);
        let prior_in = input.written().len();
        let mut output = PartialBuffer::new(&mut buffer[written..]);
        let status = decompressor.decompress(&mut input, &mut output)?;
        let produced = output.written().len();
        written += produced;

        match status {
            CompressionStatus::Eof => break,
            CompressionStatus::NeedInput => {
                return Err(Error::data("compressed stream is truncated"));
            }
            CompressionStatus::NeedOutput if written == limit => return Ok(None),
            CompressionStatus::NeedOutput
                if produced == 0 && input.written().len() == prior_in && written < buffer.len() =>
            {
                return Err(stalled());
            }
            CompressionStatus::NeedOutput => {}
        }
    }

    if written > limit {
        return Ok(None);
    }

    buffer.truncate(written);
    tracing::trace!(consumed = input.written().len(), produced = written, "decompressed buffer");
    Ok(Some(buffer))
}

/// Decompress one complete stream from `input`.
pub(crate) fn decompress<D: Decode>(codec: D, input: &[u8]) -> Result<Vec<u8>> {
    let initial = input.len().saturating_mul(4);
    decompress_limited(codec, input, initial, usize::MAX)?
        .ok_or_else(|| Error::unexpected("decompressed data exceeds the address space"))
}

/// Decompress one complete stream from `input` whose content is known to
/// be at most `bound` bytes.
pub(crate) fn decompress_bound<D: Decode>(codec: D, input: &[u8], bound: usize) -> Result<Vec<u8>> {
    // One spare byte tells a stream of exactly `bound` bytes apart from a
    // longer one.
    let limit = bound.saturating_add(1);
    let initial = input.len().saturating_mul(4).max(64);
    match decompress_limited(codec, input, initial, limit)? {
        Some(buffer) if buffer.len() <= bound => Ok(buffer),
        _ => Err(Error::BufferTooSmall { bound }),
    }
}
