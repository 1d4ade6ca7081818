//! The glyph ramp: the ordered character catalog for brightness levels.

/// Density ramp shared by every render pass (65 levels).
///
/// Characters ordered from visually sparse (backtick) to visually dense (`$`).
/// The default, non-inverted mapping flips brightness before quantizing, so
/// bright source pixels land on the sparse end (light-background convention).
///
/// Both the ordering and that invert default are a fixed contract: changing
/// either changes all visual output.
#[rustfmt::skip]
pub const GLYPH_RAMP: &[char] = &[
    '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '~', '+', '_',
    '-', '?', ']', '[', '}', '{', '1', ')', '(', '|', '\\', '/', 't',
    'f', 'j', 'r', 'x', 'n', 'u', 'v', 'c', 'z', 'X', 'Y', 'U', 'J',
    'C', 'L', 'Q', '0', 'O', 'Z', 'm', 'w', 'q', 'p', 'd', 'b', 'k',
    'h', 'a', 'o', '*', '#', 'M', 'W', '&', '8', '%', 'B', '@', '$',
];
