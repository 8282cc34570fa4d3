//! Font loading with an explicit fallback policy.
//!
//! [`load_font_file`] and [`fallback_font`] are plain fallible loads.
//! [`load_selection`] is the render-time policy on top of them: a catalog
//! font that fails to load is replaced by the OS fallback face, and a
//! missing fallback leaves the render without glyphs. Neither case aborts.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use font_kit::family_name::FamilyName;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use ttf_parser::Face;

use crate::catalog::FontSelection;
use crate::error::FontError;

/// Where loaded font bytes came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    File(PathBuf),
    /// The OS's best sans-serif face.
    Fallback,
}

/// Raw bytes of a font that parsed successfully.
#[derive(Clone, Debug)]
pub struct FontData {
    pub bytes: Arc<Vec<u8>>,
    pub origin: FontOrigin,
}

impl FontData {
    pub fn is_fallback(&self) -> bool {
        self.origin == FontOrigin::Fallback
    }

    /// Whether the first face maps `c` to a glyph.
    pub fn has_glyph(&self, c: char) -> bool {
        Face::parse(&self.bytes, 0)
            .map(|face| face.glyph_index(c).is_some())
            .unwrap_or(false)
    }
}

/// Read and validate a font file.
pub fn load_font_file(path: &Path) -> Result<FontData, FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(FontError::Empty(path.to_path_buf()));
    }
    Face::parse(&bytes, 0).map_err(|e| FontError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(FontData {
        bytes: Arc::new(bytes),
        origin: FontOrigin::File(path.to_path_buf()),
    })
}

/// Ask the OS for its default sans-serif face.
pub fn fallback_font() -> Result<FontData, FontError> {
    let source = SystemSource::new();
    let handle = source
        .select_best_match(&[FamilyName::SansSerif], &Properties::new())
        .map_err(|e| FontError::NoFallback(format!("{e:?}")))?;
    let font = handle
        .load()
        .map_err(|e| FontError::NoFallback(format!("{e:?}")))?;
    let bytes = font
        .copy_font_data()
        .ok_or_else(|| FontError::NoFallback(format!("{} has no font data", font.family_name())))?;

    Ok(FontData {
        bytes,
        origin: FontOrigin::Fallback,
    })
}

/// Load the selected font, substituting the fallback face on failure.
///
/// Returns `None` only when the fallback itself is unavailable.
pub fn load_selection(selection: &FontSelection) -> Option<FontData> {
    if let FontSelection::File(path) = selection {
        match load_font_file(path) {
            Ok(data) => return Some(data),
            Err(e) => log::warn!("Font load failed, using fallback font: {e}"),
        }
    }

    match fallback_font() {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!("Rendering without glyphs: {e}");
            None
        }
    }
}
