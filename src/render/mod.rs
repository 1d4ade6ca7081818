//! Render module for converting pixel buffers to glyph grids.
//!
//! This module provides the complete image-to-glyph transform:
//!
//! 1. **Fit calculation** - Compute target raster dimensions for a viewport
//! 2. **Pixel sampling** - Reshape a flat RGBA buffer into a pixel grid
//! 3. **Glyph mapping** - Map per-pixel brightness onto the glyph ramp
//! 4. **Writing** - Serialize a glyph grid into a displayable text block
//!
//! # Brightness models
//!
//! Three interchangeable models are available via [`BrightnessModel`]:
//! - `Average` - plain channel mean
//! - `Luminosity` - perceptually weighted mean
//! - `Lightness` - midpoint of the brightest and darkest channel

mod error;
mod fit;
mod mapper;
mod pixel;
mod ramp;
mod sampler;
mod writer;

pub use error::RenderError;
pub use fit::{compute_fit, PIXEL_WIDTH_PER_CHAR};
pub use mapper::{map_grid, to_glyph, CellColor, GlyphCell, GlyphGrid, RenderOptions};
pub use pixel::{BrightnessModel, Pixel};
pub use ramp::GLYPH_RAMP;
pub use sampler::{sample, PixelGrid};
pub use writer::{to_text, to_text_into};
