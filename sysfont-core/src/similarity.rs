//! String similarity metrics and font scoring (made by FontLab https://www.fontlab.com/)

use std::collections::HashMap;

use crate::font::Font;
use crate::normalize::{clean_query, extract_styles, CATEGORY_TOKENS};

/// A string similarity metric returning a score in `[0, 1]`.
pub type Similarity = fn(&str, &str) -> f64;

/// N-gram length used by [`sorensen_dice`].
pub const NGRAM_SIZE: usize = 4;

/// Bonus granted to unstyled or regular faces when the style words share nothing.
pub const UNSTYLED_BONUS: f64 = 0.1;

/// Bonus granted for each of `mono`, `sans`, `serif` present on both sides.
pub const CATEGORY_BONUS: f64 = 0.1;

const FAMILY_METRIC: Similarity = jaro_winkler;
const STYLE_METRIC: Similarity = sorensen_dice;

/// Prefix-weighted character similarity (Jaro-Winkler).
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    strsim::jaro_winkler(a, b)
}

/// Sorensen-Dice coefficient over character 4-grams.
///
/// Inputs shorter than the n-gram length count as a single gram. Two empty
/// strings are identical; an empty string shares nothing with a non-empty one.
pub fn sorensen_dice(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let grams_a = ngram_counts(a, NGRAM_SIZE);
    let grams_b = ngram_counts(b, NGRAM_SIZE);

    let total: usize = grams_a.values().sum::<usize>() + grams_b.values().sum::<usize>();
    let common: usize = grams_a
        .iter()
        .map(|(gram, count)| (*count).min(grams_b.get(gram).copied().unwrap_or(0)))
        .sum();

    2.0 * common as f64 / total as f64
}

fn ngram_counts(text: &str, size: usize) -> HashMap<&str, usize> {
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .collect();
    let chars = bounds.len() - 1;

    let mut counts = HashMap::new();
    if chars < size {
        counts.insert(text, 1);
        return counts;
    }

    for start in 0..=chars - size {
        *counts
            .entry(&text[bounds[start]..bounds[start + size]])
            .or_insert(0) += 1;
    }
    counts
}

/// Similarity between a query family and a family name, after cleaning both.
pub fn family_score(query: &str, family: &str) -> f64 {
    FAMILY_METRIC(&clean_query(query), &clean_query(family))
}

/// Mean of the name and family similarities of `font`, ignoring case.
pub fn font_score(query: &str, query_family: &str, font: &Font) -> f64 {
    let query = query.to_lowercase();
    let query_family = query_family.to_lowercase();
    let name = font.name.to_lowercase();
    let family = font.family.to_lowercase();

    (FAMILY_METRIC(&query, &name) + FAMILY_METRIC(&query_family, &family)) / 2.0
}

/// How well the style words of `font_name` agree with those of `query`.
///
/// Not bounded by 1: the unstyled and category bonuses stack on top of the
/// n-gram overlap.
pub fn font_style_score(query: &str, font_name: &str) -> f64 {
    let query_styles = extract_styles(query);
    let font_styles = extract_styles(font_name);

    let mut score = STYLE_METRIC(&query_styles, &font_styles);
    if score == 0.0 && (font_styles.is_empty() || has_token(&font_styles, "regular")) {
        score += UNSTYLED_BONUS;
    }

    for category in CATEGORY_TOKENS {
        if has_token(&query_styles, category) && has_token(&font_styles, category) {
            score += CATEGORY_BONUS;
        }
    }

    score
}

fn has_token(styles: &str, token: &str) -> bool {
    styles.split_whitespace().any(|t| t == token)
}
