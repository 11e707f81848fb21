//! Paragraph segmentation into text runs.
//!
//! A text run is a maximal range sharing one bidi embedding level and one
//! script. Levels come from `unicode-bidi` (UAX-9), scripts from
//! `unicode-script` with Common/Inherited characters folded into their
//! neighbours.

pub mod levels;
pub mod script;
pub mod segmenter;

pub use levels::{BaseDirection, ParagraphLevels, char_levels};
pub use script::resolve_scripts;
pub use segmenter::UnicodeSegmenter;

use crate::Script;
use crate::error::Result;

/// A maximal range of characters with one bidi level and one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun {
    pub offset: usize,
    pub len: usize,
    pub bidi_level: u8,
    pub script: Script,
}

impl TextRun {
    pub fn is_rtl(&self) -> bool {
        self.bidi_level & 1 != 0
    }
}

/// Result of segmenting a character buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Embedding level of the (first) paragraph.
    pub base_level: u8,
    /// Text runs in logical order, covering the input exactly once.
    pub runs: Vec<TextRun>,
}

/// Splits text into bidi/script runs.
pub trait Segmenter {
    fn segment(&self, text: &[char]) -> Result<Paragraph>;
}
