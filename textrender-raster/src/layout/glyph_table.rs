//! Per-character tables for vertical layout.
//!
//! Offsets are fractions of the font size, applied to the right-top anchor
//! of an upright glyph. Characters in the rotate set are turned 90° instead.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Punctuation sits in the upper-right of a vertical cell.
const PUNCTUATION_OFFSET: (f32, f32) = (0.6, -0.6);
/// Small kana are nudged slightly up and right.
const SMALL_KANA_OFFSET: (f32, f32) = (0.1, -0.1);

const PUNCTUATION: &str = "、。，．";
const SMALL_KANA: &str = "ぁぃぅぇぉっゃゅょゎゕゖァィゥェォッャュョヮヵヶ";

/// Long vowel marks, dashes, ellipses, wave dashes and brackets.
const ROTATED: &str = "ーｰ—―‐－…‥〜～「」『』（）【】〔〕［］｛｝〈〉《》＜＞";

static GLYPH_OFFSETS: LazyLock<HashMap<char, (f32, f32)>> = LazyLock::new(|| {
    PUNCTUATION
        .chars()
        .map(|c| (c, PUNCTUATION_OFFSET))
        .chain(SMALL_KANA.chars().map(|c| (c, SMALL_KANA_OFFSET)))
        .collect()
});

static ROTATE_SET: LazyLock<HashSet<char>> = LazyLock::new(|| ROTATED.chars().collect());

/// `(dx, dy)` nudge for `c` as multiples of the font size.
pub fn glyph_offset(c: char) -> Option<(f32, f32)> {
    GLYPH_OFFSETS.get(&c).copied()
}

/// Whether `c` is drawn rotated in a vertical column.
pub fn is_rotated(c: char) -> bool {
    ROTATE_SET.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_offsets() {
        assert_eq!(glyph_offset('。'), Some((0.6, -0.6)));
        assert_eq!(glyph_offset('、'), Some((0.6, -0.6)));
    }

    #[test]
    fn test_small_kana_offsets() {
        for c in ['っ', 'ゃ', 'ッ', 'ョ', 'ヶ'] {
            assert_eq!(glyph_offset(c), Some((0.1, -0.1)), "{c}");
        }
    }

    #[test]
    fn test_regular_characters_have_no_offset() {
        for c in ['あ', '字', 'A', 'ー'] {
            assert_eq!(glyph_offset(c), None, "{c}");
        }
    }

    #[test]
    fn test_rotate_set() {
        for c in ['ー', '…', '〜', '「', '」', '（', '）', '【'] {
            assert!(is_rotated(c), "{c} should rotate");
        }
        for c in ['あ', '。', 'A'] {
            assert!(!is_rotated(c), "{c} should stay upright");
        }
    }

    #[test]
    fn test_tables_are_disjoint() {
        for c in ROTATED.chars() {
            assert_eq!(glyph_offset(c), None, "{c} is in both tables");
        }
    }
}
