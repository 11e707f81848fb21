//! Per-character font selection.
//!
//! Among the fonts that cover a character, pick the one whose native
//! style is closest to the request. Width dominates, then italic, then
//! weight, following the CSS font-matching bands.

use std::sync::Arc;

use super::{Font, FontStyle};

const MAX_WIDTH_SCORE: f64 = 225.0;
const ITALIC_MATCH_SCORE: f64 = 3.0;
const ITALIC_MISMATCH_SCORE: f64 = 1.0;
const MAX_WEIGHT_SCORE: f64 = 1000.0;
const NORMAL_WEIGHT: f64 = 400.0;
const MEDIUM_WEIGHT: f64 = 500.0;
const WIDTH_SCORE_MULTIPLIER: f64 = 1e7;
const ITALIC_SCORE_MULTIPLIER: f64 = 1e4;

/// Index of the best font for `c` under `style`, or `None` if no font
/// covers it. Ties go to the earliest font.
pub fn best_font_match<F: Font>(fonts: &[Arc<F>], c: char, style: FontStyle) -> Option<usize> {
    let mut max_score = 0.0f64;
    let mut max_index = None;
    for (index, font) in fonts.iter().enumerate() {
        if !font.has_glyph(c) {
            continue;
        }
        let score = match_score(&font.style(), &style);
        if max_score < score {
            max_score = score;
            max_index = Some(index);
        }
    }
    max_index
}

/// Combined score of a font with style `font` for the request `wanted`.
/// Higher is better; every covering font scores above zero. Computed in
/// `f64` so the weight term survives next to the width term.
pub fn match_score(font: &FontStyle, wanted: &FontStyle) -> f64 {
    width_score(font.width.into(), wanted.width.into()) * WIDTH_SCORE_MULTIPLIER
        + italic_score(font.italic, wanted.italic) * ITALIC_SCORE_MULTIPLIER
        + weight_score(font.weight.into(), wanted.weight.into())
}

fn width_score(width: f64, wanted: f64) -> f64 {
    if wanted <= 100.0 {
        // Condensed or normal: prefer narrower, closest first.
        if width <= wanted {
            MAX_WIDTH_SCORE - wanted + width
        } else {
            MAX_WIDTH_SCORE - width
        }
    } else if width > wanted {
        MAX_WIDTH_SCORE + wanted - width
    } else {
        width
    }
}

fn italic_score(italic: bool, wanted: bool) -> f64 {
    if italic == wanted {
        ITALIC_MATCH_SCORE
    } else {
        ITALIC_MISMATCH_SCORE
    }
}

fn weight_score(weight: f64, wanted: f64) -> f64 {
    if weight == wanted {
        MAX_WEIGHT_SCORE
    } else if wanted < NORMAL_WEIGHT {
        if weight <= wanted {
            MAX_WEIGHT_SCORE - wanted + weight
        } else {
            MAX_WEIGHT_SCORE - weight
        }
    } else if wanted <= MEDIUM_WEIGHT {
        if weight >= wanted && weight <= MEDIUM_WEIGHT {
            MAX_WEIGHT_SCORE + wanted - weight
        } else if weight <= wanted {
            MEDIUM_WEIGHT + weight
        } else {
            MAX_WEIGHT_SCORE - weight
        }
    } else if weight > wanted {
        MAX_WEIGHT_SCORE + wanted - weight
    } else {
        weight
    }
}
