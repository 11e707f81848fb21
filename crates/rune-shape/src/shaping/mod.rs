//! Shaping a built layout into positioned glyphs with outlines.

pub mod shaper;

pub use shaper::HarfrustShaper;

use rune_config::{DEFAULT_EMBOLDEN_STRENGTH, DEFAULT_SLANT, ShapingConfig};

use crate::error::Result;
use crate::font::{Font, FontFace};
use crate::layout::{FontRun, Layout};
use crate::path::Path;

/// One glyph as reported by a shaping engine, in font design units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapedGlyph {
    pub glyph_id: u32,
    pub x_offset: i32,
    pub y_offset: i32,
    pub x_advance: i32,
    pub y_advance: i32,
}

/// Shaping engine seam.
///
/// `shape_run` shapes `text[run.range()]` with `font` and calls `emit`
/// once per output glyph, in visual order for the run. The rest of `text`
/// is context only (cursive joining across run boundaries). An error
/// from `emit` must be returned unchanged.
pub trait Shaper<F> {
    fn shape_run(
        &self,
        font: &F,
        text: &[char],
        run: &FontRun,
        emit: &mut dyn FnMut(ShapedGlyph) -> Result<()>,
    ) -> Result<()>;
}

/// A shaped glyph with its outline in font units.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub glyph_id: u32,
    pub x_offset: i32,
    pub y_offset: i32,
    pub x_advance: i32,
    pub y_advance: i32,
    /// Empty when path emission is disabled.
    pub path: Path,
}

/// Glyphs produced for one font run.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    pub font_run: FontRun,
    pub glyphs: Vec<Glyph>,
}

/// Parameters for [`Layout::shape`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    /// Emboldening strength as a fraction of the em, for synthetic bold.
    pub embolden_strength: f32,
    /// Horizontal shear per unit of height, for synthetic slant.
    pub slant: f32,
    /// Decompose every glyph outline into [`Glyph::path`].
    pub emit_path_commands: bool,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            embolden_strength: DEFAULT_EMBOLDEN_STRENGTH,
            slant: DEFAULT_SLANT,
            emit_path_commands: true,
        }
    }
}

impl From<&ShapingConfig> for ShapeParams {
    fn from(config: &ShapingConfig) -> Self {
        Self {
            embolden_strength: config.embolden_strength,
            slant: config.slant,
            emit_path_commands: config.emit_path_commands,
        }
    }
}

impl From<ShapingConfig> for ShapeParams {
    fn from(config: ShapingConfig) -> Self {
        Self::from(&config)
    }
}

impl<F: Font> Layout<F> {
    /// Shape every font run with `shaper`, in the layout's visual order.
    ///
    /// Runs flagged for synthesis are shaped with a synthesized variant of
    /// their font. Any collaborator error aborts the whole call.
    pub fn shape_with<S>(&self, shaper: &S, params: &ShapeParams) -> Result<Vec<GlyphRun>>
    where
        S: Shaper<F> + ?Sized,
    {
        let mut glyph_runs = Vec::with_capacity(self.font_runs.len());
        let mut glyph_count = 0;
        for run in &self.font_runs {
            let base = &*self.fonts[run.font_index];
            let synthesized;
            let font = if run.needs_synthesis() {
                synthesized = base.synthesize(
                    run.synthetic_bold.then_some(params.embolden_strength),
                    run.synthetic_slant.then_some(params.slant),
                )?;
                &synthesized
            } else {
                base
            };

            let mut glyphs = Vec::with_capacity(run.len);
            shaper.shape_run(font, &self.unichars, run, &mut |shaped| {
                let mut path = Path::new();
                if params.emit_path_commands {
                    font.draw_glyph(shaped.glyph_id, &mut path)?;
                }
                glyphs.push(Glyph {
                    glyph_id: shaped.glyph_id,
                    x_offset: shaped.x_offset,
                    y_offset: shaped.y_offset,
                    x_advance: shaped.x_advance,
                    y_advance: shaped.y_advance,
                    path,
                });
                Ok(())
            })?;

            tracing::trace!(
                offset = run.offset,
                font_index = run.font_index,
                synthetic_bold = run.synthetic_bold,
                synthetic_slant = run.synthetic_slant,
                glyphs = glyphs.len(),
                "shaped font run"
            );
            glyph_count += glyphs.len();
            glyph_runs.push(GlyphRun {
                font_run: *run,
                glyphs,
            });
        }

        tracing::debug!(
            runs = glyph_runs.len(),
            glyphs = glyph_count,
            emit_path_commands = params.emit_path_commands,
            "shaped layout"
        );
        Ok(glyph_runs)
    }
}

impl Layout<FontFace> {
    /// Shape with [`HarfrustShaper`].
    pub fn shape(&self, params: &ShapeParams) -> Result<Vec<GlyphRun>> {
        self.shape_with(&HarfrustShaper, params)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::Error;
    use crate::font::FontStyle;
    use crate::layout::LayoutBuilder;
    use crate::path::PathVerb;
    use crate::test_support::{ADVANCE, CharShaper, FixedSegmenter, TestFont};

    fn layout_of(
        fonts: Vec<TestFont>,
        spans: &[(&str, FontStyle)],
        segmenter: &FixedSegmenter,
    ) -> Layout<TestFont> {
        let fonts: Vec<_> = fonts.into_iter().map(Arc::new).collect();
        let mut builder = LayoutBuilder::new(fonts).unwrap();
        for &(text, style) in spans {
            builder.append(text, style);
        }
        builder.build_with(segmenter).unwrap()
    }

    fn glyph_ids(runs: &[GlyphRun]) -> Vec<u32> {
        runs.iter()
            .flat_map(|run| run.glyphs.iter().map(|glyph| glyph.glyph_id))
            .collect()
    }

    #[test]
    fn default_params() {
        let params = ShapeParams::default();
        assert_eq!(params.embolden_strength, 0.02);
        assert_eq!(params.slant, 0.25);
        assert!(params.emit_path_commands);
        assert_eq!(ShapeParams::from(ShapingConfig::default()), params);
    }

    #[test]
    fn paths_satisfy_point_count_invariant() {
        let layout = layout_of(
            vec![TestFont::new(400.0, false)],
            &[("ab", FontStyle::default()), ("c", FontStyle::italic())],
            &FixedSegmenter::new(0, &[(0, 3, 0)]),
        );
        let runs = layout.shape_with(&CharShaper::default(), &ShapeParams::default()).unwrap();
        assert_eq!(runs.len(), 2);
        for glyph in runs.iter().flat_map(|run| &run.glyphs) {
            let expected: usize = glyph.path.verbs.iter().map(|v| v.num_points()).sum();
            assert_eq!(glyph.path.points.len(), expected);
            assert_eq!(
                glyph.path.verbs,
                vec![
                    PathVerb::MoveTo,
                    PathVerb::LineTo,
                    PathVerb::QuadTo,
                    PathVerb::CubicTo,
                    PathVerb::Close
                ]
            );
            assert!(glyph.path.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }

    #[test]
    fn glyph_runs_follow_visual_order() {
        let layout = layout_of(
            vec![TestFont::new(400.0, false)],
            &[
                ("ab", FontStyle::default()),
                ("cd", FontStyle::bold()),
                ("ef", FontStyle::default()),
            ],
            &FixedSegmenter::new(1, &[(0, 4, 1), (4, 2, 2)]),
        );
        let runs = layout.shape_with(&CharShaper::default(), &ShapeParams::default()).unwrap();
        let offsets: Vec<_> = runs.iter().map(|run| run.font_run.offset).collect();
        assert_eq!(offsets, vec![2, 0, 4]);
        assert_eq!(
            glyph_ids(&runs),
            "dcbaef".chars().map(|c| c as u32).collect::<Vec<_>>()
        );
        let font_runs: Vec<_> = runs.iter().map(|run| run.font_run).collect();
        assert_eq!(font_runs, layout.font_runs());
    }

    #[test]
    fn synthesis_follows_run_flags() {
        let layout = layout_of(
            vec![TestFont::new(400.0, false)],
            &[
                ("a", FontStyle::default()),
                ("b", FontStyle::bold()),
                ("c", FontStyle::italic()),
            ],
            &FixedSegmenter::new(0, &[(0, 3, 0)]),
        );
        let params = ShapeParams::default();
        let runs = layout.shape_with(&CharShaper::default(), &params).unwrap();
        let advances: Vec<_> = runs.iter().map(|run| run.glyphs[0].x_advance).collect();
        assert_eq!(advances, vec![ADVANCE, ADVANCE + 20, ADVANCE]);

        // The slanted glyph's top edge is sheared by `slant` times its height.
        let slanted = &runs[2].glyphs[0];
        let size = 'c' as u32 as f32;
        assert_eq!(slanted.path.points[2].x, size + params.slant * size);
        let upright = &runs[0].glyphs[0];
        let size = 'a' as u32 as f32;
        assert_eq!(upright.path.points[2].x, size);
    }

    #[test]
    fn paths_can_be_skipped() {
        let layout = layout_of(
            vec![TestFont::new(400.0, false)],
            &[("abc", FontStyle::bold_italic())],
            &FixedSegmenter::new(0, &[(0, 3, 0)]),
        );
        let params = ShapeParams {
            emit_path_commands: false,
            ..Default::default()
        };
        let runs = layout.shape_with(&CharShaper::default(), &params).unwrap();
        assert_eq!(runs[0].glyphs.len(), 3);
        assert!(runs[0].glyphs.iter().all(|glyph| glyph.path.is_empty()));
        assert_eq!(runs[0].glyphs[0].x_advance, ADVANCE + 20);
    }

    #[test]
    fn empty_layout_shapes_to_nothing() {
        let fonts = vec![Arc::new(TestFont::new(400.0, false))];
        let layout = LayoutBuilder::new(fonts)
            .unwrap()
            .build_with(&FixedSegmenter::default())
            .unwrap();
        let runs = layout.shape_with(&CharShaper::default(), &ShapeParams::default()).unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn shaper_errors_abort_shaping() {
        let layout = layout_of(
            vec![
                TestFont::new(400.0, false).covering("ab"),
                TestFont::new(400.0, false).covering("cd"),
            ],
            &[("abcd", FontStyle::default())],
            &FixedSegmenter::new(0, &[(0, 4, 0)]),
        );
        let shaper = CharShaper {
            fail_on_font: Some(1),
        };
        let err = layout.shape_with(&shaper, &ShapeParams::default()).unwrap_err();
        assert!(matches!(err, Error::Shaping(_)));
    }

    #[test]
    fn synthesis_errors_abort_shaping() {
        let layout = layout_of(
            vec![TestFont::new(400.0, false).failing_synthesis()],
            &[("a", FontStyle::default()), ("b", FontStyle::bold())],
            &FixedSegmenter::new(0, &[(0, 2, 0)]),
        );
        let err = layout
            .shape_with(&CharShaper::default(), &ShapeParams::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidFont));
    }
}
