//! Brightness scoring, ramp quantization, and glyph cell construction.

use crate::render::pixel::{BrightnessModel, Pixel};
use crate::render::ramp::GLYPH_RAMP;
use crate::render::sampler::PixelGrid;

/// RGB color annotation for a colorized cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Options driving a single render pass.
///
/// Read fresh from external option state on every pass; nothing here is
/// cached between renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Brightness model used to score each pixel.
    pub model: BrightnessModel,
    /// Map higher brightness to denser glyphs instead of sparser ones
    /// (dark-background convention). Off by default.
    pub invert: bool,
    /// Annotate each cell with its source pixel's color.
    pub colorize: bool,
}

/// One output cell: a glyph, displayed doubled, plus optional color.
///
/// The glyph is repeated twice at display time because monospace characters
/// are roughly half as wide as they are tall; doubling approximates a square
/// footprint per source pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    pub glyph: char,
    pub color: Option<CellColor>,
}

/// A rectangular, row-major grid of glyph cells.
///
/// Always has exactly the dimensions of the [`PixelGrid`] it was mapped from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    width: u32,
    height: u32,
    rows: Vec<Vec<GlyphCell>>,
}

impl GlyphGrid {
    /// Width of the grid in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the grid in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The grid's rows, top to bottom.
    pub fn rows(&self) -> &[Vec<GlyphCell>] {
        &self.rows
    }
}

/// Map one pixel to its output cell.
///
/// Brightness is normalized to [0, 1], flipped unless `invert` is set (the
/// ramp is authored sparse-to-dense, so without the flip bright pixels would
/// come out dense), then quantized with `floor(percent * ramp_len) - 1`,
/// clamped at 0. The `-1` keeps `percent == 1.0` from indexing one past the
/// ramp's final element.
pub fn to_glyph(pixel: Pixel, options: &RenderOptions) -> GlyphCell {
    let mut percent = pixel.brightness(options.model) / 255.0;
    if !options.invert {
        percent = 1.0 - percent;
    }

    let index = ((percent * GLYPH_RAMP.len() as f32).floor() as i64 - 1).max(0) as usize;
    let glyph = match GLYPH_RAMP.get(index) {
        Some(&glyph) => glyph,
        None => {
            // Invariant breach: percent left [0, 1] upstream. Substitute the
            // sparsest glyph so one bad pixel cannot void the whole grid.
            log::warn!(
                "ramp index {} out of range ({} levels) for pixel {:?}; substituting '{}'",
                index,
                GLYPH_RAMP.len(),
                pixel,
                GLYPH_RAMP[0]
            );
            GLYPH_RAMP[0]
        }
    };

    let color = options.colorize.then(|| CellColor {
        r: pixel.r,
        g: pixel.g,
        b: pixel.b,
    });

    GlyphCell { glyph, color }
}

/// Map every pixel of a grid to a glyph cell.
///
/// Cells are independent (no dithering or other cross-pixel state), so this
/// is a plain per-cell map: output dimensions and row-major order always
/// match the input exactly.
pub fn map_grid(grid: &PixelGrid, options: &RenderOptions) -> GlyphGrid {
    let rows = grid
        .rows()
        .iter()
        .map(|row| row.iter().map(|&pixel| to_glyph(pixel, options)).collect())
        .collect();

    GlyphGrid {
        width: grid.width(),
        height: grid.height(),
        rows,
    }
}
