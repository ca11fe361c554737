//! Query cleanup and style/family extraction (made by FontLab https://www.fontlab.com/)
//!
//! Font names arrive in every shape: `Arial-BoldItalicMT`, `times_new_roman.ttf`,
//! `DejaVu Sans Mono Oblique`. Everything downstream compares the cleaned form
//! produced here, so scores never depend on punctuation or case.

/// Style keywords recognised inside font names, in extraction order.
///
/// Compound weights precede the words they contain so that family extraction
/// removes `semibold` whole instead of leaving `semi` behind.
pub const STYLE_TOKENS: &[&str] = &[
    "regular",
    "normal",
    "medium",
    "hairline",
    "thin",
    "extralight",
    "ultralight",
    "light",
    "semibold",
    "demibold",
    "extrabold",
    "ultrabold",
    "bold",
    "heavy",
    "black",
    "italic",
    "oblique",
    "condensed",
    "narrow",
    "compressed",
    "expanded",
    "extended",
    "mono",
    "sans",
    "serif",
];

/// Broad classification tokens; agreement on these earns a bonus when scoring styles.
pub const CATEGORY_TOKENS: &[&str] = &["mono", "sans", "serif"];

/// Lowercase `query` and rejoin its letter/digit runs with single spaces.
pub fn clean_query(query: &str) -> String {
    query
        .to_lowercase()
        .split(|c: char| !c.is_alphabetic() && !c.is_numeric())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Space-joined style tokens contained in `query`, in catalog order.
pub fn extract_styles(query: &str) -> String {
    let query = clean_query(query);

    STYLE_TOKENS
        .iter()
        .copied()
        .filter(|style| query.contains(style))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `query` with every style token removed.
///
/// Removal is plain substring deletion without word boundaries, so a family
/// whose own name contains a token (`Monotype Corsiva`) loses that part too.
pub fn extract_family(query: &str) -> String {
    let mut family = clean_query(query);
    for style in STYLE_TOKENS {
        family = family.replace(style, "");
    }

    clean_query(&family)
}
