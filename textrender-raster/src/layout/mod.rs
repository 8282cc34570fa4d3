//! Text placement on the canvas.
//!
//! - [`horizontal`]: one block, aligned horizontally, centered vertically.
//! - [`vertical`]: right-to-left columns with rotated runs and nudged kana.
//! - [`glyph_table`]: static per-character tables for vertical layout.

pub mod glyph_table;
pub mod horizontal;
pub mod vertical;

pub use horizontal::layout_horizontal;
pub use vertical::layout_vertical;
