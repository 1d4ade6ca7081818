//! Reshaping flat RGBA channel buffers into rectangular pixel grids.

use crate::render::error::RenderError;
use crate::render::pixel::Pixel;

/// A rectangular, row-major grid of pixels.
///
/// The rectangularity invariant is structural: every row holds exactly
/// `width` pixels and there are exactly `height` rows. A grid can only be
/// built through [`sample`], which rejects mismatched buffers up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    rows: Vec<Vec<Pixel>>,
}

impl PixelGrid {
    /// Width of the grid in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the grid in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The grid's rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    /// Flatten the grid back into an RGBA buffer, filling every alpha slot
    /// with `alpha`. Inverse of [`sample`] up to the discarded alpha channel.
    pub fn to_rgba(&self, alpha: u8) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(4 * self.width as usize * self.height as usize);
        for row in &self.rows {
            for pixel in row {
                buffer.extend_from_slice(&[pixel.r, pixel.g, pixel.b, alpha]);
            }
        }
        buffer
    }
}

/// Reshape a flat RGBA-interleaved buffer into a [`PixelGrid`].
///
/// The buffer must be row-major with channel order R, G, B, A repeating,
/// and exactly `4 * width * height` bytes long. Alpha is read but not
/// retained. The input is never mutated, truncated, or padded.
///
/// # Errors
/// [`RenderError::BufferSizeMismatch`] if the buffer length does not match
/// the declared dimensions.
pub fn sample(buffer: &[u8], width: u32, height: u32) -> Result<PixelGrid, RenderError> {
    let expected = 4 * width as usize * height as usize;
    if buffer.len() != expected {
        return Err(RenderError::BufferSizeMismatch {
            width,
            height,
            expected,
            actual: buffer.len(),
        });
    }

    // Degenerate but consistent: a zero-area grid has no pixel rows to fill.
    if expected == 0 {
        return Ok(PixelGrid {
            width,
            height,
            rows: vec![Vec::new(); height as usize],
        });
    }

    let row_bytes = 4 * width as usize;
    let rows = buffer
        .chunks_exact(row_bytes)
        .map(|row| {
            row.chunks_exact(4)
                .map(|q| Pixel::from_rgba(q[0], q[1], q[2], q[3]))
                .collect()
        })
        .collect();

    Ok(PixelGrid {
        width,
        height,
        rows,
    })
}
