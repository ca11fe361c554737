//! Font discovery helpers for sysfont-core (made by FontLab https://www.fontlab.com/)

use std::env;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

/// Environment variable overriding the platform font directories (`:` or `;` separated).
pub const FONT_DIRS_ENV: &str = "SYSFONT_FONT_DIRS";

/// Extensions reported when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".ttf", ".ttc", ".otf"];

/// Path to a candidate font file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFileRef {
    pub path: PathBuf,
}

/// Trait for enumerating candidate font files from some backing store.
pub trait FontDiscovery {
    fn discover(&self) -> Vec<FontFileRef>;
}

/// Recursive filesystem walker filtering files by extension.
///
/// Roots are walked in order and entries in name order, so repeated runs over
/// the same tree report files identically. Missing roots and unreadable
/// entries are skipped.
#[derive(Debug, Clone)]
pub struct PathDiscovery {
    roots: Vec<PathBuf>,
    extensions: Vec<String>,
    follow_symlinks: bool,
}

impl PathDiscovery {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots = roots.into_iter().map(Into::into).collect();
        Self {
            roots,
            extensions: normalize_extensions(DEFAULT_EXTENSIONS),
            follow_symlinks: false,
        }
    }

    /// Restrict reported files to these extensions; an empty list accepts every file.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = normalize_extensions(extensions);
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        match extension_of(path) {
            Some(ext) => self.extensions.contains(&ext),
            None => false,
        }
    }
}

impl FontDiscovery for PathDiscovery {
    fn discover(&self) -> Vec<FontFileRef> {
        let mut found = Vec::new();

        for root in &self.roots {
            if !root.exists() {
                debug!("skipping missing font root {}", root.display());
                continue;
            }

            let walker = WalkDir::new(root)
                .follow_links(self.follow_symlinks)
                .sort_by_file_name();

            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        debug!("skipping unreadable entry: {err}");
                        continue;
                    }
                };

                if !entry.file_type().is_dir() && self.accepts(entry.path()) {
                    found.push(FontFileRef {
                        path: entry.path().to_path_buf(),
                    });
                }
            }
        }

        found
    }
}

/// Lowercase extensions with a leading dot, dropping blanks.
pub fn normalize_extensions<I, S>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for ext in extensions {
        let ext = ext.as_ref().trim().trim_start_matches('.').to_lowercase();
        if ext.is_empty() {
            continue;
        }
        let ext = format!(".{ext}");
        if !normalized.contains(&ext) {
            normalized.push(ext);
        }
    }
    normalized
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

/// Directories fonts are installed into on this platform.
///
/// [`FONT_DIRS_ENV`] replaces the platform list when set. Directories are
/// returned whether or not they exist; discovery skips missing ones.
pub fn default_font_dirs() -> Vec<PathBuf> {
    if let Ok(raw) = env::var(FONT_DIRS_ENV) {
        let overrides = split_dir_list(&raw);
        if !overrides.is_empty() {
            return overrides;
        }
    }

    dedup_paths(platform_font_dirs())
}

fn split_dir_list(raw: &str) -> Vec<PathBuf> {
    dedup_paths(
        raw.split([':', ';'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect(),
    )
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut unique: Vec<PathBuf> = Vec::with_capacity(paths.len());
    for path in paths {
        if !unique.contains(&path) {
            unique.push(path);
        }
    }
    unique
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let home = env::var_os("HOME").map(PathBuf::from);

    let data_home = env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| home.as_ref().map(|h| h.join(".local/share")));
    if let Some(data_home) = data_home {
        dirs.push(data_home.join("fonts"));
    }
    if let Some(home) = &home {
        dirs.push(home.join(".fonts"));
    }

    let data_dirs = env::var("XDG_DATA_DIRS")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());
    for dir in data_dirs.split(':').filter(|s| !s.is_empty()) {
        dirs.push(Path::new(dir).join("fonts"));
    }

    dirs.push(PathBuf::from("/usr/share/fonts"));
    dirs.push(PathBuf::from("/usr/local/share/fonts"));
    dirs
}

#[cfg(target_os = "macos")]
fn platform_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(home) = env::var_os("HOME") {
        dirs.push(PathBuf::from(home).join("Library/Fonts"));
    }
    dirs.push(PathBuf::from("/Library/Fonts"));
    dirs.push(PathBuf::from("/System/Library/Fonts"));
    dirs.push(PathBuf::from("/Network/Library/Fonts"));
    dirs
}

#[cfg(windows)]
fn platform_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(system_root) = env::var_os("SYSTEMROOT").or_else(|| env::var_os("windir")) {
        dirs.push(PathBuf::from(system_root).join("Fonts"));
    }
    if let Some(local_appdata) = env::var_os("LOCALAPPDATA") {
        dirs.push(PathBuf::from(local_appdata).join("Microsoft/Windows/Fonts"));
    }
    dirs
}

#[cfg(not(any(unix, windows)))]
fn platform_font_dirs() -> Vec<PathBuf> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn recognises_configured_extensions() {
        let discovery = PathDiscovery::new(Vec::<PathBuf>::new());
        assert!(discovery.accepts("/A/B/font.ttf".as_ref()));
        assert!(discovery.accepts("/A/B/font.OTF".as_ref()));
        assert!(!discovery.accepts("/A/B/font.txt".as_ref()));
        assert!(!discovery.accepts("/A/B/font".as_ref()));

        let any = PathDiscovery::new(Vec::<PathBuf>::new()).with_extensions(Vec::<String>::new());
        assert!(any.accepts("/A/B/font".as_ref()));
    }

    #[test]
    fn extensions_are_normalized() {
        assert_eq!(
            normalize_extensions(["TTF", ".otf", " ", ".ttf"]),
            vec![".ttf".to_string(), ".otf".to_string()]
        );
    }

    #[test]
    fn discovers_nested_fonts_in_name_order() {
        let tmp = tempdir().expect("tempdir");
        let nested = tmp.path().join("a/b");
        fs::create_dir_all(&nested).expect("mkdir");
        fs::write(nested.join("zeta.ttf"), b"").expect("touch");
        fs::write(nested.join("alpha.ttf"), b"").expect("touch");

        let fonts = PathDiscovery::new([tmp.path()]).discover();
        let names: Vec<_> = fonts
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["alpha.ttf", "zeta.ttf"]);
    }

    #[test]
    fn missing_roots_are_skipped() {
        let tmp = tempdir().expect("tempdir");
        fs::write(tmp.path().join("kept.otf"), b"").expect("touch");

        let discovery = PathDiscovery::new([
            PathBuf::from("/nonexistent/sysfont-fonts"),
            tmp.path().to_path_buf(),
        ]);
        assert_eq!(discovery.discover().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinks_when_enabled() {
        use std::os::unix::fs::symlink;

        let tmp = tempdir().expect("tempdir");
        let real_dir = tmp.path().join("real");
        let link_dir = tmp.path().join("link");
        fs::create_dir_all(&real_dir).expect("mkdir real");
        fs::write(real_dir.join("linked.otf"), b"").expect("touch font");
        symlink(&real_dir, &link_dir).expect("symlink");

        let discovery = PathDiscovery::new([&link_dir]).follow_symlinks(true);
        let fonts = discovery.discover();

        assert!(fonts.iter().any(|f| f.path.ends_with("linked.otf")));
    }

    #[test]
    fn dir_list_splits_and_dedups() {
        assert_eq!(
            split_dir_list("/a:/b;/a::"),
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }
}
