use harfrust::{
    Direction as HbDirection,
    FontRef as HbFontRef,
    Script as HbScript,
    ShaperData,
    ShaperInstance,
    Tag as HbTag,
    UnicodeBuffer as HbUnicodeBuffer,
};

use crate::Script;
use crate::error::{Error, Result};
use crate::font::FontFace;
use crate::layout::FontRun;

use super::{ShapedGlyph, Shaper};

/// Characters of surrounding text handed to harfrust on each side of a run.
const CONTEXT_CHARS: usize = 5;

/// Shaper built on harfrust (pure-Rust HarfBuzz port).
///
/// Positions are reported in font design units. Direction comes from the
/// run's bidi level and glyphs are emitted in visual order. Text next to
/// the run is passed as context, so cursive scripts keep joining across
/// style and font changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarfrustShaper;

impl HarfrustShaper {
    pub fn new() -> Self {
        Self
    }
}

impl Shaper<FontFace> for HarfrustShaper {
    fn shape_run(
        &self,
        font: &FontFace,
        text: &[char],
        run: &FontRun,
        emit: &mut dyn FnMut(ShapedGlyph) -> Result<()>,
    ) -> Result<()> {
        let font_data = font.as_bytes();
        let font_ref = HbFontRef::from_index(&font_data, font.index()).map_err(Error::shaping)?;

        // Default (no variations) instance.
        let data = ShaperData::new(&font_ref);
        let instance =
            ShaperInstance::from_variations(&font_ref, core::iter::empty::<harfrust::Variation>());
        let shaper = data
            .shaper(&font_ref)
            .instance(Some(&instance))
            .point_size(None)
            .build();

        let mut buffer = HbUnicodeBuffer::new();
        let pre_context: String = text[run.offset.saturating_sub(CONTEXT_CHARS)..run.offset]
            .iter()
            .collect();
        buffer.set_pre_context(&pre_context);
        let run_text: String = text[run.range()].iter().collect();
        buffer.push_str(&run_text);
        let run_end = run.offset + run.len;
        let post_context: String = text[run_end..text.len().min(run_end + CONTEXT_CHARS)]
            .iter()
            .collect();
        buffer.set_post_context(&post_context);
        buffer.set_direction(if run.is_rtl() {
            HbDirection::RightToLeft
        } else {
            HbDirection::LeftToRight
        });
        if let Some(script) = harfrust_script(run.script) {
            buffer.set_script(script);
        }
        // Fill in whatever the run did not pin down.
        buffer.guess_segment_properties();

        let glyph_buffer = shaper.shape(buffer, &[]);
        let infos = glyph_buffer.glyph_infos();
        let positions = glyph_buffer.glyph_positions();
        let embolden = font.embolden_units().map(|units| units.round() as i32);

        tracing::trace!(
            offset = run.offset,
            len = run.len,
            glyphs = infos.len(),
            "shaped run with harfrust"
        );

        for (info, pos) in infos.iter().zip(positions) {
            let x_advance = match embolden {
                Some(extra) if pos.x_advance != 0 => pos.x_advance + extra,
                _ => pos.x_advance,
            };
            emit(ShapedGlyph {
                glyph_id: info.glyph_id,
                x_offset: pos.x_offset,
                y_offset: pos.y_offset,
                x_advance,
                y_advance: pos.y_advance,
            })?;
        }
        Ok(())
    }
}

/// Map a Unicode script onto harfrust's ISO 15924 scripts. Neutral
/// scripts are left for harfrust to guess.
fn harfrust_script(script: Script) -> Option<HbScript> {
    if matches!(script, Script::Common | Script::Inherited | Script::Unknown) {
        return None;
    }
    let tag: [u8; 4] = script.short_name().as_bytes().try_into().ok()?;
    HbScript::from_iso15924_tag(HbTag::new(&tag))
}
