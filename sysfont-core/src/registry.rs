//! Known-font registry and filename identification (made by FontLab https://www.fontlab.com/)
//!
//! The registry is a read-only table built once per process. It answers three
//! questions: which faces live in a file with a given basename, which family a
//! noisy string refers to, and which installed families may substitute for a
//! missing one.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::font::Font;
use crate::matcher::{match_font, FAMILY_MATCH_THRESHOLD, FILENAME_CONFIRM_THRESHOLD};
use crate::normalize::{clean_query, extract_family};
use crate::registry_data::{ALTERNATIVES, DEFAULTS, FONTS};
use crate::similarity::{family_score, font_score};

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new(
        FONTS
            .iter()
            .map(|(file, family, name)| Font::new(*family, *name, *file))
            .collect(),
        ALTERNATIVES
            .iter()
            .map(|group| group.iter().map(|s| s.to_string()).collect())
            .collect(),
        DEFAULTS.iter().map(|s| s.to_string()).collect(),
    )
});

/// Outcome of [`Registry::match_family`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMatch {
    /// Registry family when `matched`, otherwise the family extracted from the query.
    pub family: String,
    /// Whether `family` names a registry family.
    pub matched: bool,
}

#[derive(Debug, Clone)]
struct FamilyEntry {
    name: String,
    variants: Vec<Font>,
}

/// Immutable table of known fonts, alternative groups and default families.
#[derive(Debug, Clone)]
pub struct Registry {
    filenames: HashMap<String, Vec<Font>>,
    families: IndexMap<String, FamilyEntry>,
    alternatives: Vec<Vec<String>>,
    defaults: Vec<String>,
}

impl Registry {
    /// Build a registry from canonical records whose `filename` is a bare basename.
    ///
    /// Basenames differing only in case share one entry, and a face listed
    /// twice under the same entry is kept once.
    pub fn new(fonts: Vec<Font>, alternatives: Vec<Vec<String>>, defaults: Vec<String>) -> Self {
        let mut filenames: HashMap<String, Vec<Font>> = HashMap::new();
        let mut families: IndexMap<String, FamilyEntry> = IndexMap::new();

        for font in fonts {
            let key = basename_key(&font.filename);
            let indexed = filenames.entry(key).or_default();
            if !indexed
                .iter()
                .any(|f| f.family == font.family && f.name == font.name)
            {
                indexed.push(font.clone());
            }

            let entry = families
                .entry(font.family.to_lowercase())
                .or_insert_with(|| FamilyEntry {
                    name: font.family.clone(),
                    variants: Vec::new(),
                });
            if !entry
                .variants
                .iter()
                .any(|f| f.name.eq_ignore_ascii_case(&font.name))
            {
                entry.variants.push(font);
            }
        }

        Self {
            filenames,
            families,
            alternatives,
            defaults,
        }
    }

    /// The registry compiled into this crate.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Canonical family names, in dataset order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.values().map(|entry| entry.name.as_str())
    }

    /// Known variants of `family`, looked up case-insensitively.
    pub fn variants(&self, family: &str) -> &[Font] {
        self.families
            .get(&family.to_lowercase())
            .map(|entry| entry.variants.as_slice())
            .unwrap_or(&[])
    }

    pub fn alternative_groups(&self) -> &[Vec<String>] {
        &self.alternatives
    }

    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    /// Registry faces stored under the basename of `path`, relocated to `path`.
    pub fn fonts_by_filename(&self, path: &Path) -> Vec<Font> {
        self.indexed(path)
            .iter()
            .map(|font| font.relocated(path))
            .collect()
    }

    fn indexed(&self, path: &Path) -> &[Font] {
        self.filenames
            .get(&basename_key(path))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Identify the faces stored in a discovered font file.
    ///
    /// Known basenames resolve directly. Unknown ones go through family
    /// recognition and variant matching on the filename stem, and only faces
    /// that then agree almost exactly with the stem are returned. An empty
    /// result means the file could not be identified.
    pub fn match_fonts_by_filename(&self, path: &Path) -> Vec<Font> {
        let direct = self.fonts_by_filename(path);
        if !direct.is_empty() {
            return direct;
        }

        let Some(stem) = path.file_stem() else {
            return Vec::new();
        };
        let query = clean_query(&stem.to_string_lossy());

        let family = self.match_family(&query);
        if !family.matched {
            trace!("no registry family for {}", path.display());
            return Vec::new();
        }

        let Some(variant) = match_font(&query, self.variants(&family.family)) else {
            trace!("no {} variant for {}", family.family, path.display());
            return Vec::new();
        };

        let fonts: Vec<Font> = self
            .indexed(&variant.filename)
            .iter()
            .filter(|font| font_score(&query, &family.family, font) >= FILENAME_CONFIRM_THRESHOLD)
            .map(|font| font.relocated(path))
            .collect();

        if !fonts.is_empty() {
            debug!(
                "identified {} as {} by fuzzy filename match",
                path.display(),
                variant.name
            );
        }
        fonts
    }

    /// Recognise the registry family a free-form query refers to.
    pub fn match_family(&self, query: &str) -> FamilyMatch {
        let query_family = extract_family(query);

        let mut best: Option<(&str, f64)> = None;
        for entry in self.families.values() {
            let score = family_score(&query_family, &entry.name);
            if best.map_or(true, |(_, max)| score > max) {
                best = Some((entry.name.as_str(), score));
            }
        }

        match best {
            Some((family, score)) if score >= FAMILY_MATCH_THRESHOLD => FamilyMatch {
                family: family.to_string(),
                matched: true,
            },
            _ => FamilyMatch {
                family: query_family,
                matched: false,
            },
        }
    }

    /// Members of `candidates` whose family may stand in for `query_family`.
    ///
    /// Every alternative group naming `query_family` contributes its families;
    /// with no such group the default families apply. Input order is kept.
    pub fn alternatives(&self, query_family: &str, candidates: &[Font]) -> Vec<Font> {
        let query_family = query_family.to_lowercase();

        let mut accepted: HashSet<String> = self
            .alternatives
            .iter()
            .filter(|group| group.iter().any(|f| f.to_lowercase() == query_family))
            .flatten()
            .map(|f| f.to_lowercase())
            .collect();

        if accepted.is_empty() {
            accepted = self.defaults.iter().map(|f| f.to_lowercase()).collect();
        }

        candidates
            .iter()
            .filter(|font| accepted.contains(&font.family.to_lowercase()))
            .cloned()
            .collect()
    }
}

fn basename_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
