use unicode_bidi::{BidiInfo, LTR_LEVEL, Level, RTL_LEVEL};

/// Base direction hint for paragraph analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BaseDirection {
    /// Detect paragraph base direction from text (first strong char),
    /// falling back to left-to-right.
    #[default]
    Auto,
    /// Force overall left-to-right base direction.
    Ltr,
    /// Force overall right-to-left base direction.
    Rtl,
}

impl BaseDirection {
    pub fn to_level(self) -> Option<Level> {
        match self {
            BaseDirection::Auto => None,
            BaseDirection::Ltr => Some(LTR_LEVEL),
            BaseDirection::Rtl => Some(RTL_LEVEL),
        }
    }
}

/// Embedding levels for every character of a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphLevels {
    /// Level of the first paragraph (0 for empty text).
    pub base_level: u8,
    /// One level per `char`, after line-level rule L1.
    pub levels: Vec<u8>,
}

/// Resolve per-character embedding levels for `text`.
///
/// Every paragraph is treated as a single line, so trailing whitespace
/// and separators fall back to their paragraph's level.
pub fn char_levels(text: &str, base_dir: BaseDirection) -> ParagraphLevels {
    let info = BidiInfo::new(text, base_dir.to_level());
    let base_level = info
        .paragraphs
        .first()
        .map_or(0, |para| para.level.number());

    let mut levels = vec![base_level; text.chars().count()];
    for para in &info.paragraphs {
        // Levels per character for the full text, with this paragraph's
        // line reordering applied (rule L1).
        let para_levels = info.reordered_levels_per_char(para, para.range.clone());
        for (char_idx, (byte_idx, _ch)) in text.char_indices().enumerate() {
            if para.range.contains(&byte_idx) {
                levels[char_idx] = para_levels[char_idx].number();
            }
        }
    }

    ParagraphLevels { base_level, levels }
}
