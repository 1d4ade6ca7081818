//! glyphgrid library crate.
//!
//! Converts a decoded RGBA raster into a grid of printable characters whose
//! density (and optionally color) approximates the source image:
//!
//! 1. **Fit calculation** - size the target raster to the available viewport
//! 2. **Pixel sampling** - reshape the flat channel buffer into a pixel grid
//! 3. **Glyph mapping** - score brightness and quantize onto the glyph ramp
//! 4. **Writing** - serialize the glyph grid into a displayable text block
//!
//! Image acquisition, raster resizing, option controls, and the display
//! surface itself are external collaborators; this crate only receives a
//! pixel buffer plus render options and emits a glyph grid.

pub mod config;
pub mod render;
