/// Outcome of a single filter step.
///
/// Exactly one value is reported per call and it fully determines what the
/// caller does next. Neither `NeedInput` nor `NeedOutput` is an error; failures
/// are reported through [`Error`](crate::Error) instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompressionStatus {
    /// All supplied input has been consumed and there is still room in the
    /// output: supply more input.
    NeedInput,
    /// The output filled up (or the codec could not proceed without more
    /// room) before the input was exhausted: drain or grow the output.
    NeedOutput,
    /// The codec reached its terminal state; no further output will be
    /// produced for this stream.
    Eof,
}

impl CompressionStatus {
    /// Whether this is the terminal [`Eof`](CompressionStatus::Eof) status.
    pub fn is_eof(self) -> bool {
        self == Self::Eof
    }
}
