/// Settings for the buffered IO adaptors.
///
/// ```
/// use filter_compression::FilterConfig;
///
/// let config = FilterConfig::new().with_buffer_size(64 * 1024);
/// assert_eq!(config.buffer_size(), 64 * 1024);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    buffer_size: usize,
}

impl FilterConfig {
    /// Size of each of the raw and filtered buffers unless configured
    /// otherwise.
    pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

    /// Configuration with default settings.
    pub fn new() -> Self {
        Self {
            buffer_size: Self::DEFAULT_BUFFER_SIZE,
        }
    }

    /// Size in bytes of each of the raw and filtered buffers.
    ///
    /// Values below 1 are raised to 1.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Size in bytes of each of the raw and filtered buffers.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new()
    }
}
