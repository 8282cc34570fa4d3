use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading font files or asking the OS for a fallback.
///
/// None of these are fatal to a render: the catalog turns name failures into
/// file-stem names, and the loader turns load failures into the fallback font.
#[derive(Error, Debug)]
pub enum FontError {
    #[error("Failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse font {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
    #[error("No usable family name record in {0}")]
    NoFamilyName(PathBuf),
    #[error("Font file is empty: {0}")]
    Empty(PathBuf),
    #[error("No fallback font available: {0}")]
    NoFallback(String),
}
