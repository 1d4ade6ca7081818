//! Target raster sizing for viewport-constrained rendering.

use crate::render::error::RenderError;

/// Assumed device-pixel footprint of one output character column.
/// Calibrated from a 150-character line spanning an 1800 px desktop viewport.
pub const PIXEL_WIDTH_PER_CHAR: f32 = 1800.0 / 150.0;

/// Compute target raster dimensions that keep the rendered glyph grid within
/// the available display width while preserving the source aspect ratio.
///
/// If the grid already fits (`PIXEL_WIDTH_PER_CHAR * source_width` is within
/// `available_width_px`), the source dimensions come back unchanged; this
/// function never upscales. Otherwise both dimensions are scaled down, with
/// the height derived from the *rounded* width so the final aspect ratio
/// matches `target_width` exactly rather than the unrounded scale factor.
/// Results are clamped to a minimum of 1.
///
/// # Errors
/// [`RenderError::InvalidDimensions`] if either source dimension is zero,
/// [`RenderError::ZeroViewport`] if the available width is zero.
pub fn compute_fit(
    source_width: u32,
    source_height: u32,
    available_width_px: u32,
) -> Result<(u32, u32), RenderError> {
    if source_width == 0 || source_height == 0 {
        return Err(RenderError::InvalidDimensions {
            width: source_width,
            height: source_height,
        });
    }
    if available_width_px == 0 {
        return Err(RenderError::ZeroViewport);
    }

    let assumed_rendered_width = PIXEL_WIDTH_PER_CHAR * source_width as f32;
    let scale_factor = if assumed_rendered_width <= available_width_px as f32 {
        1.0
    } else {
        available_width_px as f32 / assumed_rendered_width
    };

    let target_width = ((source_width as f32 * scale_factor).round() as u32).max(1);
    let target_height = ((target_width as f32 / source_width as f32 * source_height as f32)
        .round() as u32)
        .max(1);

    Ok((target_width, target_height))
}
