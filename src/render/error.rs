//! Error types for the glyph transform pipeline.

/// Errors that can occur while sizing or building grids.
///
/// All variants are malformed-input rejections: the transform performs no
/// partial processing when construction fails.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Channel buffer length does not match the declared frame dimensions.
    #[error(
        "buffer length {actual} does not match a {width}x{height} RGBA frame (expected {expected})"
    )]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Source image dimensions must both be nonzero.
    #[error("invalid source dimensions {width}x{height}: both must be nonzero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Available display width must be nonzero.
    #[error("available display width must be nonzero")]
    ZeroViewport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_mismatch_display() {
        let err = RenderError::BufferSizeMismatch {
            width: 2,
            height: 1,
            expected: 8,
            actual: 7,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("buffer length 7"));
        assert!(msg.contains("2x1"));
        assert!(msg.contains("expected 8"));
    }

    #[test]
    fn test_invalid_dimensions_display() {
        let err = RenderError::InvalidDimensions {
            width: 0,
            height: 480,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("0x480"));
        assert!(msg.contains("nonzero"));
    }
}
