//! Layout building: text plus style spans to visually ordered font runs.

pub mod builder;

pub use builder::LayoutBuilder;

use core::ops::Range;
use std::sync::Arc;

use crate::Script;
use crate::font::FontStyle;

/// A maximal range of text with one bidi level, script, requested style
/// and resolved font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontRun {
    /// First character of the run in the layout's buffer.
    pub offset: usize,
    /// Number of characters, always non-zero.
    pub len: usize,
    pub bidi_level: u8,
    pub script: Script,
    /// Index into the layout's font list.
    pub font_index: usize,
    /// Style the caller asked for.
    pub font_style: FontStyle,
    /// The matched font is lighter than requested.
    pub synthetic_bold: bool,
    /// Italic was requested but the matched font is upright.
    pub synthetic_slant: bool,
}

impl FontRun {
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    pub fn is_rtl(&self) -> bool {
        self.bidi_level & 1 != 0
    }

    pub fn needs_synthesis(&self) -> bool {
        self.synthetic_bold || self.synthetic_slant
    }
}

/// A built layout. Read-only once created.
///
/// `font_runs` are in visual order within each text run (reversed for
/// right-to-left runs); text runs themselves follow logical order.
#[derive(Debug)]
pub struct Layout<F> {
    pub(crate) fonts: Arc<[Arc<F>]>,
    pub(crate) font_runs: Vec<FontRun>,
    pub(crate) paragraph_base_level: u8,
    pub(crate) unichars: Vec<char>,
}

impl<F> Clone for Layout<F> {
    fn clone(&self) -> Self {
        Self {
            fonts: self.fonts.clone(),
            font_runs: self.font_runs.clone(),
            paragraph_base_level: self.paragraph_base_level,
            unichars: self.unichars.clone(),
        }
    }
}

impl<F> Layout<F> {
    pub(crate) fn empty(fonts: Arc<[Arc<F>]>) -> Self {
        Self {
            fonts,
            font_runs: Vec::new(),
            paragraph_base_level: 0,
            unichars: Vec::new(),
        }
    }

    /// Fonts shared with the builder that produced this layout.
    pub fn fonts(&self) -> &[Arc<F>] {
        &self.fonts
    }

    pub fn font_runs(&self) -> &[FontRun] {
        &self.font_runs
    }

    pub fn paragraph_base_level(&self) -> u8 {
        self.paragraph_base_level
    }

    pub fn unichars(&self) -> &[char] {
        &self.unichars
    }

    /// Characters covered by `run`.
    pub fn text(&self, run: &FontRun) -> &[char] {
        &self.unichars[run.range()]
    }

    pub fn is_empty(&self) -> bool {
        self.unichars.is_empty()
    }
}
