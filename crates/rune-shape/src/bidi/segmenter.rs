use unicode_script::Script;

use super::levels::{BaseDirection, ParagraphLevels, char_levels};
use super::script::resolve_scripts;
use super::{Paragraph, Segmenter, TextRun};
use crate::error::{Error, Result};
use crate::runs::split_run;

/// Segmenter backed by `unicode-bidi` and `unicode-script`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter {
    base_direction: BaseDirection,
}

impl UnicodeSegmenter {
    pub fn new(base_direction: BaseDirection) -> Self {
        Self { base_direction }
    }

    pub fn base_direction(&self) -> BaseDirection {
        self.base_direction
    }
}

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &[char]) -> Result<Paragraph> {
        if text.is_empty() {
            return Ok(Paragraph::default());
        }

        let string: String = text.iter().collect();
        let ParagraphLevels { base_level, levels } = char_levels(&string, self.base_direction);
        if levels.len() != text.len() {
            return Err(Error::Segmentation(format!(
                "resolved {} levels for {} characters",
                levels.len(),
                text.len()
            )));
        }

        let mut runs = Vec::new();
        for (offset, len, bidi_level) in split_run(0, text.len(), base_level, |i| levels[i]) {
            // Scripts are resolved per bidi run so neutrals never borrow a
            // script across a direction change.
            let scripts = resolve_scripts(&text[offset..offset + len]);
            for (offset, len, script) in
                split_run(offset, len, Script::Unknown, |i| scripts[i - offset])
            {
                runs.push(TextRun {
                    offset,
                    len,
                    bidi_level,
                    script,
                });
            }
        }

        Ok(Paragraph { base_level, runs })
    }
}
