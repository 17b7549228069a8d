use super::{Filter, State};
use crate::{codec::Encode, io::Transform, util::PartialBuffer, CompressionStatus, Error, Result};

/// Push-style compressor driving one native [`Encode`] codec.
///
/// Feed input with [`compress`](Compressor::compress) until it reports
/// [`NeedInput`](CompressionStatus::NeedInput), then end the stream with
/// [`flush`](Compressor::flush) until it returns `true`.
#[derive(Debug)]
pub struct Compressor<E> {
    filter: Filter<E>,
}

impl<E: Encode> Compressor<E> {
    /// Wrap an already configured codec.
    pub fn from_codec(codec: E) -> Self {
        Self {
            filter: Filter::new(codec),
        }
    }

    /// Compress as much of `input` into `output` as possible.
    ///
    /// A checkpoint or end of stream that did not fit in an earlier output
    /// buffer is completed first, before any new input is consumed.
    pub fn compress(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<CompressionStatus> {
        if let Some(status) = self.filter.resume(output)? {
            return Ok(status);
        }
        self.filter.step(input, output)
    }

    /// End the stream, writing every remaining byte and the trailer.
    ///
    /// Returns `true` once the stream is complete. With a non-empty `output`,
    /// `false` means the trailer did not fit: call again with more room.
    ///
    /// Given an empty `output` this instead schedules a
    /// [`checkpoint`](Compressor::checkpoint) that the next call to
    /// [`compress`](Compressor::compress) completes, and returns `false`
    /// without ending the stream.
    pub fn flush(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        if output.unwritten().is_empty() {
            self.filter.checkpoint(output)
        } else {
            self.filter.finish(output)
        }
    }

    /// Emit everything buffered so far without ending the stream, so the
    /// output written up to here can be decoded on its own.
    ///
    /// Returns `true` once the checkpoint is complete.
    pub fn checkpoint(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        self.filter.checkpoint(output)
    }

    /// Worst-case compressed size of `len` input bytes.
    pub fn bound(&self, len: usize) -> usize {
        self.filter
            .codec
            .as_ref()
            .map_or(len, |codec| codec.bound(len))
    }
}

impl<E> Compressor<E> {
    /// Release the native context. Any output not yet flushed is lost.
    ///
    /// Later calls fail with [`Error::Closed`](crate::Error::Closed).
    pub fn close(&mut self) {
        self.filter.close();
    }

    /// Whether the stream has been completely written.
    pub fn is_done(&self) -> bool {
        self.filter.is_done()
    }
}

impl<E> Drop for Compressor<E> {
    fn drop(&mut self) {
        if self.filter.codec.is_some() && self.filter.state != State::Done {
            tracing::debug!("compressor dropped before the stream was finished");
        }
    }
}

impl<E: Encode> Transform for Compressor<E> {
    fn transform(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<CompressionStatus> {
        self.compress(input, output)
    }

    fn checkpoint(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        self.filter.checkpoint(output)
    }

    fn finish(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        self.filter.finish(output)
    }
}

impl<E: Encode> Filter<E> {
    /// Continue a checkpoint or trailer left incomplete by an earlier call.
    ///
    /// Returns `None` when the filter may go on consuming input.
    fn resume(
        &mut self,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<Option<CompressionStatus>> {
        self.codec()?;

        let state = self.state;
        if state == State::Running || state == State::Done {
            Ok(None)
        } else if output.unwritten().is_empty() {
            Ok(Some(CompressionStatus::NeedOutput))
        } else if state == State::Flushing {
            let done = self.checkpoint(output)?;
            Ok((!done).then_some(CompressionStatus::NeedOutput))
        } else if self.finish(output)? {
            Ok(Some(CompressionStatus::Eof))
        } else {
            Ok(Some(CompressionStatus::NeedOutput))
        }
    }

    fn checkpoint(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        let state = self.state;
        match state {
            State::Done => return self.codec().map(|_| true),
            State::Finishing => return self.finish(output),
            State::Running | State::Flushing => {}
        }

        let codec = self.codec.as_mut().ok_or(Error::Closed)?;
        self.state = State::Flushing;
        if output.unwritten().is_empty() {
            return Ok(false);
        }

        let done = codec.flush(output)?;
        if done {
            tracing::trace!(produced = output.written().len(), "checkpoint complete");
            self.state = State::Running;
            self.pending = false;
        }
        Ok(done)
    }

    fn finish(&mut self, output: &mut PartialBuffer<&mut [u8]>) -> Result<bool> {
        let codec = self.codec.as_mut().ok_or(Error::Closed)?;
        let state = self.state;

        match state {
            State::Done => return Ok(true),
            _ if output.unwritten().is_empty() => return Ok(false),
            State::Flushing => {
                if !codec.flush(output)? {
                    return Ok(false);
                }
            }
            State::Running | State::Finishing => {}
        }

        self.state = State::Finishing;
        if output.unwritten().is_empty() {
            return Ok(false);
        }

        let done = codec.finish(output)?;
        if done {
            tracing::debug!("compressed stream finished");
            self.state = State::Done;
            self.pending = false;
        }
        Ok(done)
    }
}
