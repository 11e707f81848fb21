use crate::geometry::Transform;

/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Units per em.
    pub units_per_em: u16,
    /// Vertical layout extents from `vhea`, if the font has them.
    pub vertical: Option<FontExtents>,
}

/// Ascent, descent and line gap along one layout axis, in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontExtents {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

impl FontMetrics {
    /// Extents for horizontal layout.
    pub fn horizontal_extents(&self) -> FontExtents {
        FontExtents {
            ascent: self.ascent,
            descent: self.descent,
            line_gap: self.line_gap,
        }
    }

    /// Extents for vertical layout, or `None` without vertical metrics.
    pub fn vertical_extents(&self) -> Option<FontExtents> {
        self.vertical
    }

    /// Calculate line height (ascent + descent + line_gap).
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }

    /// Pixels per font unit at `font_size` px per em.
    pub fn scale(&self, font_size: f32) -> f32 {
        if self.units_per_em != 0 {
            font_size / self.units_per_em as f32
        } else {
            1.0
        }
    }

    /// Scale metrics to pixel size, where `font_size` is in logical pixels
    /// (px per em).
    pub fn scale_to_pixels(&self, font_size: f32) -> ScaledFontMetrics {
        let scale = self.scale(font_size);
        ScaledFontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            line_gap: self.line_gap * scale,
            font_size,
        }
    }

    /// Map design-unit outlines (y up) into a y-down pixel space with the
    /// baseline origin at `(x, y)`.
    pub fn outline_transform(&self, font_size: f32, x: f32, y: f32) -> Transform {
        let scale = self.scale(font_size);
        Transform::scale(scale, -scale).post_translate(x, y)
    }
}

/// Scaled font metrics in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub font_size: f32,
}
