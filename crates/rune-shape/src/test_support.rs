//! Fakes for the font, segmenter and shaper seams.

use crate::bidi::{Paragraph, Segmenter, TextRun};
use crate::error::{Error, Result};
use crate::font::{Font, FontStyle, Synthesis};
use crate::layout::FontRun;
use crate::path::{OutlineSink, PathVerb};
use crate::shaping::{ShapedGlyph, Shaper};
use crate::Script;

pub(crate) const ADVANCE: i32 = 500;

/// Font with configurable style and coverage. Glyph ids are the
/// character's scalar value.
#[derive(Debug, Clone)]
pub(crate) struct TestFont {
    pub style: FontStyle,
    pub covers: Option<Vec<char>>,
    pub synthesis: Synthesis,
    pub fail_synthesis: bool,
}

impl TestFont {
    pub fn new(weight: f32, italic: bool) -> Self {
        Self {
            style: FontStyle {
                italic,
                weight,
                width: 100.0,
            },
            covers: None,
            synthesis: Synthesis::default(),
            fail_synthesis: false,
        }
    }

    pub fn covering(mut self, chars: &str) -> Self {
        self.covers = Some(chars.chars().collect());
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.style.width = width;
        self
    }

    pub fn failing_synthesis(mut self) -> Self {
        self.fail_synthesis = true;
        self
    }
}

impl Font for TestFont {
    fn has_glyph(&self, c: char) -> bool {
        self.covers.as_ref().is_none_or(|chars| chars.contains(&c))
    }

    fn style(&self) -> FontStyle {
        self.style
    }

    fn synthesize(&self, embolden_strength: Option<f32>, slant: Option<f32>) -> Result<Self> {
        if self.fail_synthesis {
            return Err(Error::InvalidFont);
        }
        Ok(Self {
            synthesis: Synthesis {
                embolden: embolden_strength,
                slant,
            },
            ..self.clone()
        })
    }

    /// Draws a box whose size is the glyph id, reusing one scratch buffer
    /// so stale coordinates are left behind between commands.
    fn draw_glyph(&self, glyph_id: u32, sink: &mut dyn OutlineSink) -> Result<()> {
        let size = glyph_id as f32;
        let slant = self.synthesis.slant.unwrap_or(0.0);
        let mut scratch = [f32::NAN; 6];
        let commands: [(PathVerb, &[(f32, f32)]); 5] = [
            (PathVerb::MoveTo, &[(0.0, 0.0)]),
            (PathVerb::LineTo, &[(size, 0.0)]),
            (PathVerb::QuadTo, &[(size, size), (0.0, size)]),
            (PathVerb::CubicTo, &[(0.0, size), (0.0, 0.0), (0.0, 0.0)]),
            (PathVerb::Close, &[]),
        ];
        for (verb, points) in commands {
            for (pair, &(x, y)) in scratch.chunks_exact_mut(2).zip(points) {
                pair[0] = x + slant * y;
                pair[1] = y;
            }
            sink.path_command(verb, &scratch, points.len() * 2);
        }
        Ok(())
    }
}

/// Segmenter returning a fixed paragraph.
#[derive(Debug, Clone, Default)]
pub(crate) struct FixedSegmenter {
    pub paragraph: Paragraph,
}

impl FixedSegmenter {
    pub fn new(base_level: u8, runs: &[(usize, usize, u8)]) -> Self {
        Self {
            paragraph: Paragraph {
                base_level,
                runs: runs
                    .iter()
                    .map(|&(offset, len, bidi_level)| TextRun {
                        offset,
                        len,
                        bidi_level,
                        script: Script::Latin,
                    })
                    .collect(),
            },
        }
    }
}

impl Segmenter for FixedSegmenter {
    fn segment(&self, _text: &[char]) -> Result<Paragraph> {
        Ok(self.paragraph.clone())
    }
}

pub(crate) struct FailingSegmenter;

impl Segmenter for FailingSegmenter {
    fn segment(&self, _text: &[char]) -> Result<Paragraph> {
        Err(Error::Segmentation("no paragraph".into()))
    }
}

/// One glyph per character, in visual order, with emboldened faces
/// reporting wider advances.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CharShaper {
    pub fail_on_font: Option<usize>,
}

impl Shaper<TestFont> for CharShaper {
    fn shape_run(
        &self,
        font: &TestFont,
        text: &[char],
        run: &FontRun,
        emit: &mut dyn FnMut(ShapedGlyph) -> Result<()>,
    ) -> Result<()> {
        if self.fail_on_font == Some(run.font_index) {
            return Err(Error::Shaping(format!("font {} rejected", run.font_index)));
        }
        let extra = if font.synthesis.embolden.is_some() { 20 } else { 0 };
        let chars = &text[run.range()];
        let mut emit_char = |c: char| {
            emit(ShapedGlyph {
                glyph_id: c as u32,
                x_offset: 0,
                y_offset: 0,
                x_advance: ADVANCE + extra,
                y_advance: 0,
            })
        };
        if run.is_rtl() {
            chars.iter().rev().try_for_each(|&c| emit_char(c))
        } else {
            chars.iter().try_for_each(|&c| emit_char(c))
        }
    }
}
