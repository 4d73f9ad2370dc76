/// Errors raised while decoding an image descriptor or drawing it
#[derive(Debug, thiserror::Error)]
pub enum PixelError {
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("image of {width}x{height} pixels is too large to address")]
    TooLarge { width: u32, height: u32 },

    #[error("pixel buffer is {actual} chars, expected {expected} for {width}x{height}")]
    BufferLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("invalid hex digits at buffer offset {offset}")]
    InvalidHex { offset: usize },

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("pixel {pixel} refers to palette slot {index}, palette has {len} entries")]
    PaletteIndex { pixel: usize, index: usize, len: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
