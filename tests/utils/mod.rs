#![allow(unused)] // Different tests use a different subset of functions

mod input_stream;
mod track_flushed;
#[macro_use]
mod test_cases;
#[macro_use]
pub mod algos;

pub use self::{
    input_stream::{ChunkedReader, InputStream},
    track_flushed::TrackFlushed,
};
pub use filter_compression::{
    codec::{Decode, Encode},
    CompressionStatus, Compressor, Decompressor, Error, FilterConfig, Level, PartialBuffer,
};
pub use std::iter::FromIterator;

use std::io::Read;

/// The MIT licence text the files in `tests/data` were produced from.
pub const MIT: &[u8] = include_bytes!("../data/mit.txt");

pub fn read_to_vec(mut read: impl Read) -> Vec<u8> {
    let mut output = vec![];
    read.read_to_end(&mut output).unwrap();
    output
}

pub fn random(len: usize) -> Vec<u8> {
    Vec::from_iter((0..len).map(|_| rand::random()))
}

/// Feed `input` chunk by chunk through `compressor`, draining at most
/// `limit` bytes of output per step.
pub fn compress_in_steps<E: Encode>(
    mut compressor: Compressor<E>,
    input: &InputStream,
    limit: usize,
) -> Vec<u8> {
    let mut buffer = vec![0; limit];
    let mut result = vec![];

    for chunk in input.as_ref() {
        let mut input = PartialBuffer::new(&chunk[..]);
        loop {
            let mut output = PartialBuffer::new(&mut buffer[..]);
            let status = compressor.compress(&mut input, &mut output).unwrap();
            result.extend_from_slice(output.written());
            match status {
                CompressionStatus::NeedInput => break,
                CompressionStatus::NeedOutput => {}
                CompressionStatus::Eof => panic!("compressor finished early"),
            }
        }
        assert!(input.unwritten().is_empty());
    }

    loop {
        let mut output = PartialBuffer::new(&mut buffer[..]);
        let done = compressor.flush(&mut output).unwrap();
        result.extend_from_slice(output.written());
        if done {
            break;
        }
    }

    assert!(compressor.is_done());
    result
}

/// Feed `input` chunk by chunk through `decompressor`, draining at most
/// `limit` bytes of output per step, until the end of the stream.
pub fn decompress_in_steps<D: Decode>(
    decompressor: &mut Decompressor<D>,
    input: &InputStream,
    limit: usize,
) -> Vec<u8> {
    let mut buffer = vec![0; limit];
    let mut result = vec![];

    for chunk in input.as_ref() {
        let mut input = PartialBuffer::new(&chunk[..]);
        loop {
            let mut output = PartialBuffer::new(&mut buffer[..]);
            let status = decompressor.decompress(&mut input, &mut output).unwrap();
            result.extend_from_slice(output.written());
            match status {
                CompressionStatus::NeedInput => break,
                CompressionStatus::NeedOutput => {}
                CompressionStatus::Eof => return result,
            }
        }
    }

    panic!("compressed stream ended early");
}
