//! Font directory configuration.
//!
//! The scan list follows each platform's conventional install locations.
//! Home-relative entries are resolved through `dirs` and silently dropped
//! when the process has no home directory.

use std::path::{Path, PathBuf};

/// Directories scanned (recursively) by [`FontCatalog::discover`](crate::FontCatalog::discover).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub font_dirs: Vec<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl CatalogConfig {
    /// Scan exactly these directories.
    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            font_dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// The conventional font locations for the target OS.
    pub fn platform_default() -> Self {
        let home = dirs::home_dir();
        Self {
            font_dirs: platform_dirs(home.as_deref()),
        }
    }
}

fn platform_dirs(home: Option<&Path>) -> Vec<PathBuf> {
    let (system, user): (&[&str], &[&str]) = if cfg!(target_os = "windows") {
        (
            &["C:/Windows/Fonts/"],
            &["AppData/Local/Microsoft/Windows/Fonts/"],
        )
    } else if cfg!(target_os = "macos") {
        (
            &["/System/Library/Fonts/", "/Library/Fonts/"],
            &["Library/Fonts/"],
        )
    } else {
        (
            &["/usr/share/fonts/", "/usr/local/share/fonts/"],
            &[".fonts/", ".local/share/fonts/"],
        )
    };

    let mut dirs: Vec<PathBuf> = system.iter().map(PathBuf::from).collect();
    if let Some(home) = home {
        dirs.extend(user.iter().map(|rel| home.join(rel)));
    }
    dirs
}
