use crate::{
    codec::{Codec, Decode},
    util::PartialBuffer,
    Error, Result,
};
use flate2::{Decompress, DecompressError, FlushDecompress, Status};

#[derive(Debug)]
pub struct FlateDecoder {
    decompress: Decompress,
    zlib_header: bool,
}

impl FlateDecoder {
    pub(crate) fn new(zlib_header: bool) -> Self {
        tracing::debug!(zlib_header, "inflate stream created");
        Self {
            decompress: Decompress::new(zlib_header),
            zlib_header,
        }
    }

    fn decode(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
        flush: FlushDecompress,
    ) -> Result<Status> {
        let prior_in = self.decompress.total_in();
        let prior_out = self.decompress.total_out();

        let status = self
            .decompress
            .decompress(input.unwritten(), output.unwritten_mut(), flush)
            .map_err(translate)?;

        input.advance((self.decompress.total_in() - prior_in) as usize);
        output.advance((self.decompress.total_out() - prior_out) as usize);

        Ok(status)
    }
}

fn translate(err: DecompressError) -> Error {
    tracing::debug!(error = %err, "inflate reported an error");
    match err.needs_dictionary() {
        Some(adler) => Error::NeedsDictionary { adler },
        None => Error::data(err.to_string()),
    }
}

impl Codec for FlateDecoder {
    fn process(
        &mut self,
        input: &mut PartialBuffer<&[u8]>,
        output: &mut PartialBuffer<&mut [u8]>,
    ) -> Result<bool> {
        Ok(self.decode(input, output, FlushDecompress::None)? == Status::StreamEnd)
    }
}

impl Decode for FlateDecoder {
    fn reinit(&mut self) -> Result<()> {
        self.decompress.reset(self.zlib_header);
        Ok(())
    }
}
