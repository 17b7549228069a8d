//! The generic step driver shared by every codec.

mod compressor;
mod decompressor;

pub use self::{compressor::Compressor, decompressor::Decompressor};

use crate::{codec::Codec, util::PartialBuffer, CompressionStatus, Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Accepting input.
    Running,
    /// A mid-stream checkpoint has been requested and is not yet complete.
    Flushing,
    /// The stream trailer is being written.
    Finishing,
    /// The native codec reached its terminal state.
    Done,
}

/// Buffer bookkeeping around one native codec.
#[derive(Debug)]
pub(crate) struct Filter<C> {
    /// `None` once the native context has been released by `close`.
    codec: Option<C>,
    state: State,
    /// The last step filled the output, so the codec may still hold output
    /// for input it has already consumed.
    pending: bool,
}

impl<C> Filter<C> {
    pub(crate) fn new(codec: C) -> Self {
        Self {
            codec: Some(codec),
            state: State::Running,
            pending: false,
        }
    }

    pub(crate) fn close(&mut self) {
        if self.codec.take().is_some() {
            tracing::debug!(state = ?self.state, "native context released");
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.state == State::Done
    }

    fn codec(&mut self) -> Result<&mut C> {
        self.codec.as_mut().ok_or(Error::Closed)
    }
}

impl<C: Codec> Filter<C> {
    /// Drive the native codec once over the given cursors.
    ///
    /// No native call is made when the codec already reached its terminal
    /// state, when there is neither new input nor held-back output, or when
    /// there is no room in `output`.
    pub(crate) fn step(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<CompressionStatus> {
        let codec = self.codec.as_mut().ok_or(Error::Closed)?;

        if self.state == State::Done {
            return Ok(CompressionStatus::Eof);
        } else if input.unwritten().is_empty() && !self.pending {
            return Ok(CompressionStatus::NeedInput);
        } else if output.unwritten().is_empty() {
            return Ok(CompressionStatus::NeedOutput);
        }

        let prior_in = input.written().len();
        let prior_out = output.written().len();

        loop {
            let remaining = (input.unwritten().len(), output.unwritten().len());

            if codec.process(input, output)? {
                self.state = State::Done;
                break;
            }

            let stalled = remaining == (input.unwritten().len(), output.unwritten().len());
            if stalled || input.unwritten().is_empty() || output.unwritten().is_empty() {
                break;
            }
        }

        self.pending = output.unwritten().is_empty();

        let status = classify(
            self.state == State::Done,
            input.unwritten().len(),
            output.unwritten().len(),
        );
        tracing::trace!(
            consumed = input.written().len() - prior_in,
            produced = output.written().len() - prior_out,
            ?status,
            "filter step"
        );
        Ok(status)
    }
}

/// Status of a step that left `input_left` bytes unconsumed and
/// `output_left` bytes of room.
///
/// When the codec stops with both input and room left, it is reported as
/// `NeedOutput`.
fn classify(done: bool, input_left: usize, output_left: usize) -> CompressionStatus {
    if done {
        CompressionStatus::Eof
    } else if output_left == 0 {
        CompressionStatus::NeedOutput
    } else if input_left == 0 {
        CompressionStatus::NeedInput
    } else {
        CompressionStatus::NeedOutput
    }
}
