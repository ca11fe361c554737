//! Font records (made by FontLab https://www.fontlab.com/)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A font face located on disk, or known to the registry.
///
/// Records are plain values: cloning one never aliases another, and two
/// records are the same font exactly when their fields agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Font {
    /// Family the face belongs to, e.g. `Arial`.
    pub family: String,
    /// Full face name, e.g. `Arial Bold Italic`. Empty for unidentified files.
    #[serde(default)]
    pub name: String,
    /// Path of the file holding the face.
    pub filename: PathBuf,
}

impl Font {
    pub fn new(
        family: impl Into<String>,
        name: impl Into<String>,
        filename: impl Into<PathBuf>,
    ) -> Self {
        Self {
            family: family.into(),
            name: name.into(),
            filename: filename.into(),
        }
    }

    /// Copy of this record pointing at another file.
    pub fn relocated(&self, filename: &Path) -> Self {
        Self {
            family: self.family.clone(),
            name: self.name.clone(),
            filename: filename.to_path_buf(),
        }
    }

    /// Whether the record carries a registry face name.
    pub fn is_identified(&self) -> bool {
        !self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relocated_keeps_names_and_swaps_path() {
        let font = Font::new("Arial", "Arial Bold", "arialbd.ttf");
        let moved = font.relocated(Path::new("/fonts/ARIALBD.TTF"));

        assert_eq!(moved.family, "Arial");
        assert_eq!(moved.name, "Arial Bold");
        assert_eq!(moved.filename, PathBuf::from("/fonts/ARIALBD.TTF"));
        assert_eq!(font.filename, PathBuf::from("arialbd.ttf"));
    }

    #[test]
    fn synthetic_records_are_not_identified() {
        assert!(!Font::new("mystery", "", "/fonts/mystery.ttf").is_identified());
        assert!(Font::new("Arial", "Arial", "/fonts/arial.ttf").is_identified());
    }
}
