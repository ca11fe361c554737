//! Query-to-font selection (made by FontLab https://www.fontlab.com/)

use log::trace;

use crate::font::Font;
use crate::normalize::{clean_query, extract_family};
use crate::similarity::{family_score, font_style_score};

/// Minimum family similarity for a registry family to count as recognised.
pub const FAMILY_MATCH_THRESHOLD: f64 = 0.9;

/// Family similarity a candidate needs before its style words are scored.
pub const STYLE_BONUS_GATE: f64 = 0.85;

/// Minimum combined family + style score accepted by [`match_font`].
pub const FONT_MATCH_THRESHOLD: f64 = 0.9;

/// Minimum name/family similarity when identifying an unknown filename.
pub const FILENAME_CONFIRM_THRESHOLD: f64 = 0.98;

/// Pick the candidate whose family and style best fit `query`.
///
/// Earlier candidates win ties. Returns `None` when even the best candidate
/// scores below [`FONT_MATCH_THRESHOLD`].
pub fn match_font(query: &str, candidates: &[Font]) -> Option<Font> {
    let query = clean_query(query);
    let query_family = extract_family(&query);

    let mut best: Option<(&Font, f64)> = None;
    for font in candidates {
        let mut score = family_score(&query_family, &font.family);
        if score >= STYLE_BONUS_GATE {
            score += font_style_score(&query, &font.name);
        }
        if best.map_or(true, |(_, max)| score > max) {
            best = Some((font, score));
        }
    }

    match best {
        Some((font, score)) if score >= FONT_MATCH_THRESHOLD => {
            trace!("{query:?} matched {:?} with score {score:.3}", font.name);
            Some(font.clone())
        }
        Some((font, score)) => {
            trace!("{query:?} best candidate {:?} scored only {score:.3}", font.name);
            None
        }
        None => None,
    }
}

/// The pool member whose style words best fit `query`; earlier members win ties.
pub fn best_style_match(query: &str, pool: &[Font]) -> Option<Font> {
    let mut best: Option<(&Font, f64)> = None;
    for font in pool {
        let score = font_style_score(query, &font.name);
        if best.map_or(true, |(_, max)| score > max) {
            best = Some((font, score));
        }
    }

    best.map(|(font, _)| font.clone())
}
