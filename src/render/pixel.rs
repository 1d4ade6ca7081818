//! Pixel values and brightness models.

/// Perceptual luminosity weights. They sum to 1.0 and are part of the
/// rendering contract: changing them changes every mapped glyph.
const LUMA_R: f32 = 0.21;
const LUMA_G: f32 = 0.72;
const LUMA_B: f32 = 0.07;

/// Strategy for collapsing a pixel's RGB channels into one intensity scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrightnessModel {
    /// Plain channel mean: (R + G + B) / 3.
    #[default]
    Average,
    /// Perceptually weighted mean: 0.21 R + 0.72 G + 0.07 B.
    Luminosity,
    /// Midpoint of the brightest and darkest channel.
    Lightness,
}

impl BrightnessModel {
    /// Get a human-readable name for the model.
    pub fn name(&self) -> &'static str {
        match self {
            BrightnessModel::Average => "average",
            BrightnessModel::Luminosity => "luminosity",
            BrightnessModel::Lightness => "lightness",
        }
    }

    /// Look up a model by name (case-insensitive).
    ///
    /// Returns `None` for unrecognized names; callers that read names from
    /// configuration fall back to [`BrightnessModel::Average`] instead of
    /// failing (see `config::RenderConfig::to_options`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "average" => Some(BrightnessModel::Average),
            "luminosity" => Some(BrightnessModel::Luminosity),
            "lightness" => Some(BrightnessModel::Lightness),
            _ => None,
        }
    }
}

/// A single RGB pixel sampled from a raster frame.
///
/// Alpha is accepted at construction but not stored: it plays no part in
/// brightness scoring or color annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    /// Build a pixel from an RGBA quad, discarding alpha.
    pub fn from_rgba(r: u8, g: u8, b: u8, _a: u8) -> Self {
        Pixel { r, g, b }
    }

    /// Brightness under the given model, in [0.0, 255.0].
    ///
    /// Black scores 0 and white scores 255 under every model.
    pub fn brightness(&self, model: BrightnessModel) -> f32 {
        let (r, g, b) = (self.r as f32, self.g as f32, self.b as f32);
        match model {
            BrightnessModel::Average => (r + g + b) / 3.0,
            BrightnessModel::Luminosity => LUMA_R * r + LUMA_G * g + LUMA_B * b,
            BrightnessModel::Lightness => {
                let max = self.r.max(self.g).max(self.b) as f32;
                let min = self.r.min(self.g).min(self.b) as f32;
                (max + min) / 2.0
            }
        }
    }
}
