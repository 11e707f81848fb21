use std::sync::Arc;

use swash::scale::ScaleContext;
use swash::zeno::Verb;
use swash::{FontRef, GlyphId, Metrics, Style};

use crate::error::{Error, Result};
use crate::font::{Font, FontExtents, FontMetrics, FontStyle, Synthesis};
use crate::path::{OutlineSink, PathVerb};

/// Loaded font face backed by a font file (TTF/OTF/collection).
///
/// Owns the font bytes behind an `Arc`, so clones and synthesized
/// variants share the same data. Style and metrics are read once at
/// load time.
#[derive(Debug, Clone)]
pub struct FontFace {
    /// Full font data.
    data: Arc<[u8]>,
    /// Face index within a collection.
    index: u32,
    /// Offset to the table directory for this font.
    offset: u32,
    /// Cache key used internally by swash.
    key: swash::CacheKey,
    /// Extracted font metrics in font units.
    metrics: FontMetrics,
    /// Native style from the OS/2 attributes.
    style: FontStyle,
    synthesis: Synthesis,
}

impl FontFace {
    /// Create a font face from raw bytes and a font index within the file.
    pub fn from_bytes(data: Arc<[u8]>, index: u32) -> Result<Self> {
        let font = FontRef::from_index(&data, index as usize).ok_or(Error::InvalidFont)?;
        let metrics = Self::metrics_from_swash(&font);
        let style = Self::style_from_swash(&font);
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            data,
            index,
            offset,
            key,
            metrics,
            style,
            synthesis: Synthesis::default(),
        })
    }

    /// Create a font face from raw bytes owned by a `Vec<u8>`.
    pub fn from_vec(data: Vec<u8>, index: u32) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    /// Create a font face from a font file on disk.
    pub fn from_path(path: impl AsRef<std::path::Path>, index: u32) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, index)
    }

    /// Raw font bytes, shared with every clone of this face.
    pub fn as_bytes(&self) -> Arc<[u8]> {
        self.data.clone()
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Font metrics in font units.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Synthetic adjustments applied by [`Font::synthesize`].
    pub fn synthesis(&self) -> Synthesis {
        self.synthesis
    }

    /// Emboldening strength in font units, if this face is emboldened.
    pub fn embolden_units(&self) -> Option<f32> {
        self.synthesis
            .embolden
            .map(|strength| strength * self.metrics.units_per_em as f32)
    }

    /// Return a transient `FontRef` for interacting with swash APIs.
    fn as_swash_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    fn metrics_from_swash(font: &FontRef<'_>) -> FontMetrics {
        // Use default (no variation) coordinates.
        let Metrics {
            units_per_em,
            ascent,
            descent,
            leading,
            has_vertical_metrics,
            vertical_ascent,
            vertical_descent,
            vertical_leading,
            ..
        } = font.metrics(&[]);

        FontMetrics {
            ascent,
            descent,
            line_gap: leading,
            units_per_em,
            vertical: has_vertical_metrics.then_some(FontExtents {
                ascent: vertical_ascent,
                descent: vertical_descent,
                line_gap: vertical_leading,
            }),
        }
    }

    fn style_from_swash(font: &FontRef<'_>) -> FontStyle {
        let attributes = font.attributes();
        FontStyle {
            // Oblique faces are slanted already; do not shear them again.
            italic: !matches!(attributes.style(), Style::Normal),
            weight: f32::from(attributes.weight().0),
            width: attributes.stretch().to_percentage(),
        }
    }
}

impl Font for FontFace {
    fn has_glyph(&self, c: char) -> bool {
        self.as_swash_ref().charmap().map(c) != 0
    }

    fn style(&self) -> FontStyle {
        self.style
    }

    fn synthesize(&self, embolden_strength: Option<f32>, slant: Option<f32>) -> Result<Self> {
        let mut face = self.clone();
        face.synthesis = Synthesis {
            embolden: embolden_strength,
            slant,
        };
        Ok(face)
    }

    fn draw_glyph(&self, glyph_id: u32, sink: &mut dyn OutlineSink) -> Result<()> {
        let id = GlyphId::try_from(glyph_id).map_err(|_| Error::MalformedOutline { glyph_id })?;
        let mut context = ScaleContext::new();
        // No size: outlines stay in font units.
        let mut scaler = context.builder(self.as_swash_ref()).hint(false).build();
        let Some(mut outline) = scaler.scale_outline(id) else {
            // Glyphs without outlines (spaces, bitmap-only) draw nothing.
            return Ok(());
        };
        if let Some(strength) = self.embolden_units() {
            outline.embolden(strength, strength);
        }

        let slant = self.synthesis.slant.unwrap_or(0.0);
        let mut coords = [0.0f32; 6];
        let mut points = outline.points().iter();
        for verb in outline.verbs() {
            let verb = match verb {
                Verb::MoveTo => PathVerb::MoveTo,
                Verb::LineTo => PathVerb::LineTo,
                Verb::QuadTo => PathVerb::QuadTo,
                Verb::CurveTo => PathVerb::CubicTo,
                Verb::Close => PathVerb::Close,
            };
            let count = verb.num_points();
            for pair in coords.chunks_exact_mut(2).take(count) {
                let point = points.next().ok_or(Error::MalformedOutline { glyph_id })?;
                pair[0] = point.x + slant * point.y;
                pair[1] = point.y;
            }
            sink.path_command(verb, &coords, count * 2);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_font_data() {
        let err = FontFace::from_vec(b"definitely not a font".to_vec(), 0).unwrap_err();
        assert!(matches!(err, Error::InvalidFont));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = FontFace::from_path("/nonexistent/rune-shape/font.ttf", 0).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
