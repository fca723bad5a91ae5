/// Size of the extraction window in bytes, i.e. `8192` bits read from the carrier
pub const DEFAULT_WINDOW_SIZE: usize = 1024;

/// Terminator byte appended to every identity before it is hidden
pub const DEFAULT_SENTINEL: u8 = 0;

/// Codec configuration for watermark embedding and extraction
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// Number of bytes that are read back from a carrier image.
    ///
    /// The image does not carry the length of the hidden message, so extraction always
    /// reads a window of this size and leaves the detection of the message end to the
    /// detection heuristic. Images with a smaller capacity yield a zero filled remainder.
    pub window_size: usize,

    /// Byte appended to an identity before embedding, marks the end of the message
    pub sentinel: u8,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            sentinel: DEFAULT_SENTINEL,
        }
    }
}

impl CodecOptions {
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_sentinel(mut self, sentinel: u8) -> Self {
        self.sentinel = sentinel;
        self
    }
}
