//! Serializing glyph grids into displayable text blocks.

use crate::render::mapper::{GlyphCell, GlyphGrid};

/// Serialize a glyph grid into a text block.
///
/// Each row's cells are joined with no separator and terminated with a line
/// break. Uncolored cells emit their glyph doubled; colored cells wrap the
/// doubled glyph in inline color markup carrying the cell's RGB triple.
pub fn to_text(grid: &GlyphGrid) -> String {
    let mut out = String::new();
    to_text_into(grid, &mut out);
    out
}

/// Serialize a glyph grid into an existing string buffer.
///
/// This is the allocation-reusing version of [`to_text`] for callers that
/// re-render repeatedly into the same display surface.
pub fn to_text_into(grid: &GlyphGrid, out: &mut String) {
    out.clear();
    // Two glyph bytes per cell plus the newline; colored cells grow past
    // this, but it is the right floor for the common monochrome case.
    out.reserve(grid.rows().len() * (2 * grid.width() as usize + 1));

    for row in grid.rows() {
        for cell in row {
            push_cell(cell, out);
        }
        out.push('\n');
    }
}

fn push_cell(cell: &GlyphCell, out: &mut String) {
    match cell.color {
        Some(color) => {
            out.push_str(&format!(
                "<span style=\"color:rgb({},{},{});\">{}{}</span>",
                color.r, color.g, color.b, cell.glyph, cell.glyph
            ));
        }
        None => {
            out.push(cell.glyph);
            out.push(cell.glyph);
        }
    }
}
