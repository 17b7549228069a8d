/// Cursor over a buffer that is being consumed (input) or filled (output).
///
/// Everything before the cursor is [`written`](PartialBuffer::written): for
/// an input buffer that is the data a codec has consumed, for an output
/// buffer the data it has produced. Everything after it is
/// [`unwritten`](PartialBuffer::unwritten): input still to be fed, or room
/// still available for output.
#[derive(Debug, Default)]
pub struct PartialBuffer<B: AsRef<[u8]>> {
    /// Underlying buffer.
    buffer: B,
    /// Index up to which data has been consumed or produced.
    index: usize,
}

impl<B: AsRef<[u8]>> PartialBuffer<B> {
    /// Create a new [`PartialBuffer`] with the cursor at the start of `buffer`.
    pub fn new(buffer: B) -> Self {
        Self { buffer, index: 0 }
    }

    /// Part of the buffer before the cursor.
    pub fn written(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.index]
    }

    /// Part of the buffer after the cursor.
    pub fn unwritten(&self) -> &[u8] {
        &self.buffer.as_ref()[self.index..]
    }

    /// Move the cursor forward by `amount` bytes.
    ///
    /// # Panics
    ///
    /// If `amount` exceeds the length of [`unwritten`](PartialBuffer::unwritten).
    pub fn advance(&mut self, amount: usize) {
        assert!(amount <= self.unwritten().len());
        self.index += amount;
    }

    /// Convert the [`PartialBuffer`] back into the underlying buffer.
    pub fn into_inner(self) -> B {
        self.buffer
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> PartialBuffer<B> {
    /// Mutable reference to the part of the buffer after the cursor.
    pub fn unwritten_mut(&mut self) -> &mut [u8] {
        &mut self.buffer.as_mut()[self.index..]
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> From<B> for PartialBuffer<B> {
    fn from(buffer: B) -> Self {
        Self::new(buffer)
    }
}
