//! rune-shape: styled text to font runs to glyph outlines.
//!
//! - [`LayoutBuilder`] accumulates text with requested [`FontStyle`]s and
//!   splits it into [`FontRun`]s that are uniform in bidi level, script,
//!   style and resolved font, in visual order.
//! - [`Layout::shape_with`] runs a [`Shaper`] over every font run,
//!   synthesizing bold/slanted font variants where the matched font falls
//!   short, and rebuilds each glyph's [`Path`] from the font's outline.
//!
//! The concrete collaborators are [`UnicodeSegmenter`] (unicode-bidi and
//! unicode-script), [`FontFace`] (swash) and [`HarfrustShaper`].

pub mod bidi;
pub mod error;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod path;
pub mod runs;
pub mod shaping;

#[cfg(test)]
mod test_support;

pub use unicode_script::Script;

pub use bidi::{BaseDirection, Paragraph, Segmenter, TextRun, UnicodeSegmenter};
pub use error::{Error, Result};
pub use font::{
    Font, FontCache, FontExtents, FontFace, FontKey, FontMetrics, FontStyle, ScaledFontMetrics,
    Synthesis, best_font_match,
};
pub use geometry::{Point, Transform};
pub use layout::{FontRun, Layout, LayoutBuilder};
pub use path::{OutlineSink, Path, PathCommand, PathIter, PathVerb};
pub use runs::{SplitRun, split_run};
pub use shaping::{Glyph, GlyphRun, HarfrustShaper, ShapeParams, ShapedGlyph, Shaper};
