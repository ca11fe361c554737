//! sysfont-core: finds the fonts a machine already has, and the one you meant
//!
//! Ask for "Arial Bold" and you get the file that holds Arial Bold. Ask for a
//! face that isn't installed and you get its closest metric-compatible cousin
//! instead (Liberation Sans standing in for Arial, Nimbus Roman for Times).
//!
//! ## How a query travels
//!
//! **Discovery**: walk the font directories, keep files with known extensions
//! - Platform defaults for Linux (XDG), macOS and Windows
//! - `SYSFONT_FONT_DIRS` overrides them
//!
//! **Identification**: name every discovered file
//! - Exact basename lookup in the compiled-in registry
//! - Fuzzy family/variant recovery when the basename is unknown
//! - A filename-derived family when nothing fits
//!
//! **Matching**: resolve free-form queries
//! - Family extraction and Jaro-Winkler scoring against discovered fonts
//! - Style agreement scored with 4-gram Sorensen-Dice
//! - Alternative families and defaults when no installed face clears the bar
//!
//! ## A Sample Conversation
//!
//! ```rust,no_run
//! use sysfont_core::finder::{Finder, FinderOptions};
//!
//! let finder = Finder::discover(&FinderOptions::default());
//!
//! for font in finder.list() {
//!     println!("{} / {} ({})", font.family, font.name, font.filename.display());
//! }
//!
//! if let Some(font) = finder.match_query("Arial Bold") {
//!     println!("Arial Bold -> {}", font.filename.display());
//! }
//! ```
//!
//! ---
//!
//! Crafted with care at FontLab https://www.fontlab.com/

pub mod discovery;
pub mod finder;
pub mod font;
pub mod matcher;
pub mod normalize;
pub mod output;
pub mod registry;
mod registry_data;
pub mod similarity;

pub use finder::{Finder, FinderOptions};
pub use font::Font;
pub use registry::Registry;
