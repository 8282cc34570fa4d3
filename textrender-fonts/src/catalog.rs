//! Font catalog: system font discovery keyed by display name.
//!
//! Scans the configured font directories once, names every font file by
//! its preferred family name, and maps those display names to file paths.
//! A synthetic `"default"` entry always leads the list and maps to no path,
//! meaning "use the fallback font".
//!
//! ## Architecture
//!
//! ```text
//! FontCatalogCache ── get_or_build() ──► Arc<FontCatalog>   (built once)
//!                                            ├── names: Vec<String>          (sorted, "default" first)
//!                                            └── paths: HashMap<String, Option<PathBuf>>
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use glob::MatchOptions;

use crate::config::CatalogConfig;
use crate::names::read_family_name;

/// Display name of the fallback entry.
pub const DEFAULT_FONT_NAME: &str = "default";

/// File extensions picked up by discovery (matched case-insensitively).
const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

// ── Font selection ──────────────────────────────────────────────────

/// Which font a render should use, as resolved by the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSelection {
    /// The OS fallback face.
    Fallback,
    /// A font file found during discovery.
    File(PathBuf),
}

// ── Font catalog ────────────────────────────────────────────────────

/// Immutable display-name → font-path mapping.
#[derive(Clone, Debug)]
pub struct FontCatalog {
    /// Display names in presentation order (`"default"` first, rest sorted).
    names: Vec<String>,
    /// Display name → font path (`None` = fallback font).
    paths: HashMap<String, Option<PathBuf>>,
    /// How long discovery took (for diagnostics).
    discovery_time_ms: f64,
}

impl FontCatalog {
    /// Scan `config.font_dirs` and build the catalog.
    ///
    /// Missing directories and unreadable fonts are skipped; a scan that
    /// finds nothing still yields a catalog containing `"default"`.
    pub fn discover(config: &CatalogConfig) -> Self {
        let start = Instant::now();
        let files = collect_font_files(&config.font_dirs);

        let mut paths: HashMap<String, Option<PathBuf>> = HashMap::new();
        for path in files {
            let family = match read_family_name(&path) {
                Ok(name) => name,
                Err(e) => {
                    log::debug!("FontCatalog: {e}; naming by file stem");
                    file_stem(&path)
                }
            };
            let display = unique_name(&family, |candidate| paths.contains_key(candidate));
            paths.insert(display, Some(path));
        }

        let catalog = Self::from_entries(paths, start.elapsed().as_secs_f64() * 1000.0);
        log::info!(
            "FontCatalog: {} fonts from {} directories ({:.1}ms)",
            catalog.len() - 1,
            config.font_dirs.len(),
            catalog.discovery_time_ms,
        );
        catalog
    }

    /// A catalog holding only the `"default"` entry.
    pub fn empty() -> Self {
        Self::from_entries(HashMap::new(), 0.0)
    }

    fn from_entries(mut paths: HashMap<String, Option<PathBuf>>, discovery_time_ms: f64) -> Self {
        // A font literally named "default" yields to the synthetic entry.
        if let Some(Some(shadowed)) = paths.remove(DEFAULT_FONT_NAME) {
            let display = unique_name(DEFAULT_FONT_NAME, |c| c == DEFAULT_FONT_NAME || paths.contains_key(c));
            paths.insert(display, Some(shadowed));
        }

        let mut names: Vec<String> = paths.keys().cloned().collect();
        names.sort();
        names.insert(0, DEFAULT_FONT_NAME.to_string());
        paths.insert(DEFAULT_FONT_NAME.to_string(), None);

        Self {
            names,
            paths,
            discovery_time_ms,
        }
    }

    /// Display names in presentation order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of entries, `"default"` included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: `"default"` is always present.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is a catalog entry.
    pub fn contains(&self, name: &str) -> bool {
        self.paths.contains_key(name)
    }

    /// Path of a catalog entry. `None` for unknown names and for `"default"`.
    pub fn path(&self, name: &str) -> Option<&Path> {
        self.paths.get(name).and_then(|p| p.as_deref())
    }

    /// Discovery time in milliseconds.
    pub fn discovery_time_ms(&self) -> f64 {
        self.discovery_time_ms
    }

    /// Resolve a requested font name.
    ///
    /// `"default"`, unknown names and path-less entries all resolve to
    /// [`FontSelection::Fallback`].
    pub fn resolve(&self, name: &str) -> FontSelection {
        match self.path(name) {
            Some(path) => FontSelection::File(path.to_path_buf()),
            None => FontSelection::Fallback,
        }
    }
}

impl fmt::Display for FontCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FontCatalog({} entries, {:.1}ms)",
            self.names.len(),
            self.discovery_time_ms,
        )
    }
}

// ── Process-lifetime cache ──────────────────────────────────────────

/// Lazily built, never invalidated catalog.
///
/// The first [`get_or_build`](Self::get_or_build) scans the disk; every later
/// call returns the same `Arc`. Fonts installed afterwards are not seen until
/// a new cache (in practice, a new process) is created.
pub struct FontCatalogCache {
    config: CatalogConfig,
    catalog: OnceLock<Arc<FontCatalog>>,
}

impl Default for FontCatalogCache {
    fn default() -> Self {
        Self::new(CatalogConfig::platform_default())
    }
}

impl FontCatalogCache {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            catalog: OnceLock::new(),
        }
    }

    /// The cached catalog, discovering it on first access.
    pub fn get_or_build(&self) -> Arc<FontCatalog> {
        self.catalog
            .get_or_init(|| Arc::new(FontCatalog::discover(&self.config)))
            .clone()
    }

    /// Whether discovery has already run.
    pub fn is_built(&self) -> bool {
        self.catalog.get().is_some()
    }
}

// ── Discovery internals ─────────────────────────────────────────────

/// Recursively list font files under every existing directory.
///
/// Each directory's hits are sorted so collision suffixes are stable.
fn collect_font_files(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };

    let mut files = Vec::new();
    for dir in dirs {
        if !dir.is_dir() {
            log::debug!("FontCatalog: skipping missing directory {}", dir.display());
            continue;
        }
        let mut found = Vec::new();
        for ext in FONT_EXTENSIONS {
            let root = glob::Pattern::escape(&dir.to_string_lossy());
            let pattern = format!("{}/**/*.{ext}", root.trim_end_matches(['/', '\\']));
            let Ok(entries) = glob::glob_with(&pattern, options) else {
                log::debug!("FontCatalog: unusable glob pattern {pattern}");
                continue;
            };
            found.extend(entries.filter_map(Result::ok).filter(|p| p.is_file()));
        }
        found.sort();
        found.dedup();
        files.extend(found);
    }
    files
}

/// `family`, or `family (n)` with the smallest n ≥ 1 that is not taken.
fn unique_name(family: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(family) {
        return family.to_string();
    }
    (1..)
        .map(|n| format!("{family} ({n})"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| family.to_string())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

// ===================================================================
// Tests
// ===================================================================
