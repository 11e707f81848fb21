pub mod face;
pub mod loader;
pub mod matching;
pub mod metrics;

pub use face::FontFace;
pub use loader::{FontCache, FontKey};
pub use matching::best_font_match;
pub use metrics::{FontExtents, FontMetrics, ScaledFontMetrics};

use crate::error::Result;
use crate::path::OutlineSink;

/// Requested or native style of a font.
///
/// `weight` uses the CSS scale (100-900) and `width` is a percentage of
/// normal width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStyle {
    pub italic: bool,
    pub weight: f32,
    pub width: f32,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            italic: false,
            weight: 400.0,
            width: 100.0,
        }
    }
}

impl FontStyle {
    pub fn bold() -> Self {
        Self {
            weight: 700.0,
            ..Default::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Default::default()
        }
    }

    pub fn bold_italic() -> Self {
        Self {
            italic: true,
            weight: 700.0,
            ..Default::default()
        }
    }

    pub fn with_weight(self, weight: f32) -> Self {
        Self { weight, ..self }
    }
}

/// Synthetic style adjustments applied on top of a font's own outlines.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Synthesis {
    /// Emboldening strength as a fraction of the em.
    pub embolden: Option<f32>,
    /// Horizontal shear: `x += slant * y`.
    pub slant: Option<f32>,
}

impl Synthesis {
    pub fn is_none(&self) -> bool {
        self.embolden.is_none() && self.slant.is_none()
    }
}

/// A font face as seen by layout building and shaping.
///
/// Implementations are expected to be cheap to clone or share; layouts
/// hold them behind `Arc` and never copy font data.
pub trait Font {
    /// Whether the font maps `c` to a glyph.
    fn has_glyph(&self, c: char) -> bool;

    /// The font's native style.
    fn style(&self) -> FontStyle;

    fn weight(&self) -> f32 {
        self.style().weight
    }

    fn is_italic(&self) -> bool {
        self.style().italic
    }

    /// Derive a variant with synthetic emboldening and/or slant. Each
    /// adjustment is only present when requested.
    fn synthesize(&self, embolden_strength: Option<f32>, slant: Option<f32>) -> Result<Self>
    where
        Self: Sized;

    /// Decompose the outline of `glyph_id` into `sink`, in font units.
    fn draw_glyph(&self, glyph_id: u32, sink: &mut dyn OutlineSink) -> Result<()>;
}
