//! Family-name lookup from the OpenType `name` table.
//!
//! Only name IDs 16 (typographic family) and 1 (family) are considered.
//! Records are ranked by language first, then by name ID:
//!
//! ```text
//! Windows / ja-JP  >  Windows / en-US  >  other Windows  >  Macintosh
//!        (within each bucket: ID 16 > ID 1)
//! ```

use std::path::Path;

use encoding_rs::MACINTOSH;
use ttf_parser::name::Name;
use ttf_parser::{name_id, Face, PlatformId};

use crate::error::FontError;

const LANG_JAPANESE: u16 = 0x0411;
const LANG_ENGLISH_US: u16 = 0x0409;
const MAC_ENCODING_ROMAN: u16 = 0;

/// Language bucket of a name record (lower = preferred).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum LanguageRank {
    Japanese,
    EnglishUs,
    OtherWindows,
    Macintosh,
}

/// Read the preferred family name of the font at `path`.
///
/// Collections (`.ttc`) are read through their first face.
pub fn read_family_name(path: &Path) -> Result<String, FontError> {
    let data = std::fs::read(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let face = Face::parse(&data, 0).map_err(|e| FontError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    best_family_name(&face).ok_or_else(|| FontError::NoFamilyName(path.to_path_buf()))
}

/// Pick the best family name record of an already parsed face.
pub fn best_family_name(face: &Face<'_>) -> Option<String> {
    let mut best: Option<((LanguageRank, u8), String)> = None;

    for name in face.names() {
        let kind = match name.name_id {
            name_id::TYPOGRAPHIC_FAMILY => 0u8,
            name_id::FAMILY => 1,
            _ => continue,
        };
        let Some(rank) = language_rank(&name) else {
            continue;
        };
        // Undecodable encodings are skipped, not fatal.
        let Some(value) = decode_name(&name) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let key = (rank, kind);
        if best.as_ref().map_or(true, |(current, _)| key < *current) {
            best = Some((key, value.to_string()));
        }
    }

    best.map(|(_, name)| name)
}

/// Record text: Unicode encodings via ttf-parser, Mac Roman via encoding_rs.
fn decode_name(name: &Name<'_>) -> Option<String> {
    if name.platform_id == PlatformId::Macintosh && name.encoding_id == MAC_ENCODING_ROMAN {
        let (text, _) = MACINTOSH.decode_without_bom_handling(name.name);
        return Some(text.into_owned());
    }
    name.to_string()
}

fn language_rank(name: &Name<'_>) -> Option<LanguageRank> {
    match name.platform_id {
        PlatformId::Windows if name.language_id == LANG_JAPANESE => Some(LanguageRank::Japanese),
        PlatformId::Windows if name.language_id == LANG_ENGLISH_US => Some(LanguageRank::EnglishUs),
        PlatformId::Windows => Some(LanguageRank::OtherWindows),
        PlatformId::Macintosh => Some(LanguageRank::Macintosh),
        _ => None,
    }
}

// ===================================================================
// Test support: minimal sfnt files carrying only a `name` table
// ===================================================================
