use super::translate;
use crate::{
    codec::{Codec, Decode},
    util::PartialBuffer,
    Error, Result,
};
use bzip2::{Decompress, Status};
use std::fmt;

/// bzip2 decompressor.
pub struct BzDecoder {
    decompress: Decompress,
    small: bool,
}

impl fmt::Debug for BzDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BzDecoder {{total_in: {}, total_out: {}}}",
            self.decompress.total_in(),
            self.decompress.total_out()
        )
    }
}

impl Default for BzDecoder {
    fn default() -> Self {
        Self::new(false)
    }
}

impl BzDecoder {
    /// `small` selects libbz2's slower, low-memory decoding algorithm.
    pub fn new(small: bool) -> Self {
        tracing::debug!(small, "bzip2 decoder created");
        Self {
            decompress: Decompress::new(small),
            small,
        }
    }
}

impl Codec for BzDecoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        let prior_in = self.decompress.total_in();
        let prior_out = self.decompress.total_out();

        let status = self
            .decompress
            .decompress(input.unwritten(), output.unwritten_mut())
            .map_err(translate)?;

        input.advance((self.decompress.total_in() - prior_in) as usize);
        output.advance((self.decompress.total_out() - prior_out) as usize);

        match status {
            // Decompression went fine, nothing much to report.
            Status::Ok => Ok(false),

            // The stream's end has been met, meaning that no more data can be input.
            Status::StreamEnd => Ok(true),

            // libbz2 could not allocate its decoding tables.
            Status::MemNeeded => Err(Error::OutOfMemory),

            status => Err(Error::unexpected(format!(
                "unexpected bzip2 status {status:?}"
            ))),
        }
    }
}

impl Decode for BzDecoder {
    fn reinit(&mut self) -> Result<()> {
        self.decompress = Decompress::new(self.small);
        Ok(())
    }
}
