//! Installed-font finder (made by FontLab https://www.fontlab.com/)
//!
//! A [`Finder`] owns the fonts found during one discovery run and answers
//! queries against them, borrowing the shared [`Registry`] for everything it
//! knows about font names.

use std::path::{Path, PathBuf};

use log::debug;

use crate::discovery::{
    default_font_dirs, normalize_extensions, FontDiscovery, PathDiscovery, DEFAULT_EXTENSIONS,
};
use crate::font::Font;
use crate::matcher::{best_style_match, match_font};
use crate::normalize::clean_query;
use crate::registry::Registry;

/// Where to look for fonts and which files count as fonts.
#[derive(Debug, Clone)]
pub struct FinderOptions {
    /// Accepted extensions (`.ttf` style); empty accepts every file.
    pub extensions: Vec<String>,
    /// Directories to walk; empty means [`default_font_dirs`].
    pub search_paths: Vec<PathBuf>,
    pub follow_symlinks: bool,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            extensions: normalize_extensions(DEFAULT_EXTENSIONS),
            search_paths: Vec::new(),
            follow_symlinks: false,
        }
    }
}

impl FinderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = normalize_extensions(extensions);
        self
    }

    pub fn with_search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    fn discovery(&self) -> PathDiscovery {
        let roots = if self.search_paths.is_empty() {
            default_font_dirs()
        } else {
            self.search_paths.clone()
        };

        PathDiscovery::new(roots)
            .with_extensions(&self.extensions)
            .follow_symlinks(self.follow_symlinks)
    }
}

/// Identifies installed fonts and matches user queries against them.
#[derive(Debug, Clone)]
pub struct Finder<'r> {
    registry: &'r Registry,
    fonts: Vec<Font>,
}

impl Finder<'static> {
    /// Walk the configured directories and identify every font file found.
    pub fn discover(opts: &FinderOptions) -> Self {
        Self::discover_with(Registry::builtin(), opts)
    }
}

impl<'r> Finder<'r> {
    pub fn discover_with(registry: &'r Registry, opts: &FinderOptions) -> Self {
        Self::from_discovery(registry, &opts.discovery())
    }

    /// Identify the files reported by `discovery`, in the order reported.
    pub fn from_discovery(registry: &'r Registry, discovery: &impl FontDiscovery) -> Self {
        let fonts: Vec<Font> = discovery
            .discover()
            .into_iter()
            .flat_map(|file| identify(registry, &file.path))
            .collect();

        debug!("discovered {} font faces", fonts.len());
        Self { registry, fonts }
    }

    /// Finder over an already identified font list.
    pub fn from_fonts(registry: &'r Registry, fonts: Vec<Font>) -> Self {
        Self { registry, fonts }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Copies of every discovered font, in discovery order.
    pub fn list(&self) -> Vec<Font> {
        self.fonts.clone()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Best installed font for `query`, or a substitute from an alternative family.
    ///
    /// Returns `None` only when no installed font matches and no installed
    /// family may stand in for the requested one.
    pub fn match_query(&self, query: &str) -> Option<Font> {
        if let Some(font) = match_font(query, &self.fonts) {
            return Some(font);
        }

        let pool = self.alternatives(query);
        let found = best_style_match(query, &pool);
        match &found {
            Some(font) => debug!("{query:?} resolved to substitute {:?}", font.name),
            None => debug!("{query:?} has no installed match or substitute"),
        }
        found
    }

    /// Installed fonts whose family may substitute for the family named in `query`.
    pub fn alternatives(&self, query: &str) -> Vec<Font> {
        let family = self.registry.match_family(query);
        self.registry.alternatives(&family.family, &self.fonts)
    }
}

/// Registry faces stored in `path`, or a single record guessed from its name.
fn identify(registry: &Registry, path: &Path) -> Vec<Font> {
    let fonts = registry.match_fonts_by_filename(path);
    if !fonts.is_empty() {
        return fonts;
    }

    let family = path
        .file_stem()
        .map(|stem| clean_query(&stem.to_string_lossy()))
        .unwrap_or_default();
    debug!("unregistered font file {}", path.display());
    vec![Font::new(family, "", path)]
}
