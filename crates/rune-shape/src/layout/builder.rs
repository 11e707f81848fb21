use std::collections::VecDeque;
use std::sync::Arc;

use crate::bidi::{Segmenter, TextRun, UnicodeSegmenter};
use crate::error::{Error, Result};
use crate::font::{Font, FontStyle, best_font_match};
use crate::layout::{FontRun, Layout};
use crate::runs::split_run;

/// Accumulates styled text spans and turns them into a [`Layout`].
///
/// Every `append` records its own style entry, even when the style equals
/// an earlier one; adjacent characters with equal styles still end up in
/// one run because runs are split on style values, not on entries.
#[derive(Debug)]
pub struct LayoutBuilder<F> {
    fonts: Arc<[Arc<F>]>,
    unichars: Vec<char>,
    styles: Vec<FontStyle>,
    style_indices: Vec<usize>,
}

impl<F> Clone for LayoutBuilder<F> {
    fn clone(&self) -> Self {
        Self {
            fonts: self.fonts.clone(),
            unichars: self.unichars.clone(),
            styles: self.styles.clone(),
            style_indices: self.style_indices.clone(),
        }
    }
}

impl<F: Font> LayoutBuilder<F> {
    /// Create a builder over a non-empty, priority-ordered font list.
    pub fn new(fonts: impl Into<Arc<[Arc<F>]>>) -> Result<Self> {
        let fonts = fonts.into();
        if fonts.is_empty() {
            return Err(Error::EmptyFontList);
        }
        Ok(Self {
            fonts,
            unichars: Vec::new(),
            styles: Vec::new(),
            style_indices: Vec::new(),
        })
    }

    pub fn fonts(&self) -> &[Arc<F>] {
        &self.fonts
    }

    /// Number of accumulated characters.
    pub fn len(&self) -> usize {
        self.unichars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unichars.is_empty()
    }

    /// Append `text` requested in `font_style`.
    pub fn append(&mut self, text: &str, font_style: FontStyle) {
        let start = self.unichars.len();
        self.unichars.extend(text.chars());
        let added = self.unichars.len() - start;
        let style_index = self.styles.len();
        self.styles.push(font_style);
        self.style_indices.extend(std::iter::repeat_n(style_index, added));
    }

    /// Reset to the empty state, keeping the font list.
    pub fn clear(&mut self) {
        self.unichars.clear();
        self.styles.clear();
        self.style_indices.clear();
    }

    /// Whether some accumulated character is covered by none of the fonts.
    pub fn has_missing_glyphs(&self) -> bool {
        self.unichars
            .iter()
            .any(|&c| !self.fonts.iter().any(|font| font.has_glyph(c)))
    }

    /// Build with the Unicode bidi/script segmenter.
    pub fn build(&self) -> Result<Layout<F>> {
        self.build_with(&UnicodeSegmenter::default())
    }

    /// Build with a caller-supplied segmenter.
    pub fn build_with<S: Segmenter + ?Sized>(&self, segmenter: &S) -> Result<Layout<F>> {
        if self.unichars.is_empty() {
            return Ok(Layout::empty(self.fonts.clone()));
        }

        let paragraph = segmenter.segment(&self.unichars)?;
        self.check_coverage(&paragraph.runs)?;

        let mut font_runs = Vec::with_capacity(paragraph.runs.len());
        for text_run in &paragraph.runs {
            tracing::trace!(
                offset = text_run.offset,
                len = text_run.len,
                bidi_level = text_run.bidi_level,
                script = ?text_run.script,
                "text run"
            );
            font_runs.extend(self.font_runs(text_run));
        }

        tracing::debug!(
            chars = self.unichars.len(),
            text_runs = paragraph.runs.len(),
            font_runs = font_runs.len(),
            base_level = paragraph.base_level,
            "built layout"
        );

        Ok(Layout {
            fonts: self.fonts.clone(),
            font_runs,
            paragraph_base_level: paragraph.base_level,
            unichars: self.unichars.clone(),
        })
    }

    /// Font runs of one text run, in visual order.
    fn font_runs(&self, text_run: &TextRun) -> VecDeque<FontRun> {
        let rtl = text_run.is_rtl();
        let mut runs = VecDeque::new();
        let style_at = |index: usize| self.styles[self.style_indices[index]];
        for (offset, len, style) in
            split_run(text_run.offset, text_run.len, FontStyle::default(), style_at)
        {
            for (offset, len, font_index) in
                split_run(offset, len, 0, |index| self.match_font(index, style))
            {
                let font = &self.fonts[font_index];
                let run = FontRun {
                    offset,
                    len,
                    bidi_level: text_run.bidi_level,
                    script: text_run.script,
                    font_index,
                    font_style: style,
                    synthetic_bold: style.weight > font.weight(),
                    synthetic_slant: style.italic && !font.is_italic(),
                };
                tracing::trace!(?run, "font run");
                if rtl {
                    runs.push_front(run);
                } else {
                    runs.push_back(run);
                }
            }
        }
        runs
    }

    fn match_font(&self, index: usize, style: FontStyle) -> usize {
        let c = self.unichars[index];
        best_font_match(&self.fonts, c, style).unwrap_or_else(|| {
            tracing::warn!(
                "No fonts with a {}/U+{:04X} character were found.",
                c,
                c as u32
            );
            0
        })
    }

    /// Segmenter output must tile the buffer with non-empty runs.
    fn check_coverage(&self, runs: &[TextRun]) -> Result<()> {
        let mut next = 0;
        for run in runs {
            if run.offset != next || run.len == 0 {
                return Err(Error::Segmentation(format!(
                    "text run {}..{} does not continue at {}",
                    run.offset,
                    run.offset + run.len,
                    next
                )));
            }
            next += run.len;
        }
        if next != self.unichars.len() {
            return Err(Error::Segmentation(format!(
                "text runs cover {} of {} characters",
                next,
                self.unichars.len()
            )));
        }
        Ok(())
    }
}
