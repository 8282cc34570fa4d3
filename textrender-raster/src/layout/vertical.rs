//! Vertical (tategaki) layout.
//!
//! Lines become columns running top to bottom, placed right to left.
//! Within a column every character is one of three kinds:
//!
//! ```text
//! ASCII run      → drawn horizontally on a scratch canvas, turned 90° clockwise
//! rotate-set     → drawn alone on a square scratch canvas, turned 90° clockwise
//! anything else  → drawn upright, right-top anchored, nudged by the offset table
//! ```
//!
//! Axes are swapped relative to horizontal mode: the alignment offset is
//! computed exactly as for a horizontal line (against the canvas width) and
//! then used as the row where the column starts. The running line cursor
//! moves columns leftwards across the canvas width.

use crate::canvas::Canvas;
use crate::engine::{Paint, TextEngine};
use crate::layout::glyph_table::{glyph_offset, is_rotated};
use crate::request::Align;

/// Bottom padding under a rotated ASCII run, as a fraction of the font size.
const ASCII_RUN_PADDING: f32 = 0.5;
/// Leftward shift of a rotated ASCII run, as a multiple of the line height.
const ASCII_RUN_SHIFT: f32 = 1.2;

/// Per-line placement state.
struct Column {
    /// Right edge of the column.
    x_v: i32,
    /// Ink height of the whole line; the per-character pitch.
    text_height: i32,
    margin: i32,
}

/// Draw `text` as vertical columns.
///
/// An empty line advances the column cursor by the previous line's height.
pub fn layout_vertical(
    engine: &mut TextEngine,
    canvas: &mut Canvas,
    text: &str,
    align: Align,
    paint: &Paint,
) {
    let margin = engine.font_size() as i32 / 10;
    let canvas_width = canvas.width() as i32;

    let mut old_y = 0;
    let mut previous_height = 0;
    for line in text.split('\n') {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            old_y += previous_height + margin;
            continue;
        }

        let bounds = engine.measure(line);
        let x = align.offset(canvas_width, bounds.width);
        let column = Column {
            x_v: canvas_width - old_y - 2 * bounds.height,
            text_height: bounds.height,
            margin,
        };
        log::debug!(
            "layout_vertical: column at x={} starting y={x} ({} chars)",
            column.x_v,
            line.chars().count()
        );
        draw_column(engine, canvas, line, x, &column, paint);

        old_y += bounds.height + margin;
        previous_height = bounds.height;
    }
}

fn draw_column(
    engine: &mut TextEngine,
    canvas: &mut Canvas,
    line: &str,
    start: i32,
    column: &Column,
    paint: &Paint,
) {
    let chars: Vec<char> = line.chars().collect();
    let mut y_v = start;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii() {
            let end = chars[i..]
                .iter()
                .position(|c| !c.is_ascii())
                .map_or(chars.len(), |n| i + n);
            let run: String = chars[i..end].iter().collect();
            y_v += draw_ascii_run(engine, canvas, &run, y_v, column, paint);
            i = end;
            continue;
        }

        if is_rotated(c) {
            draw_rotated_char(engine, canvas, c, y_v, column, paint);
        } else {
            draw_upright_char(engine, canvas, c, y_v, column, paint);
        }
        y_v += column.text_height + column.margin;
        i += 1;
    }
}

/// Draw an ASCII run turned clockwise, left of the column edge.
///
/// Returns the cursor advance: the rotated scratch's height (its extent
/// down the column) plus the margin.
fn draw_ascii_run(
    engine: &mut TextEngine,
    canvas: &mut Canvas,
    run: &str,
    y_v: i32,
    column: &Column,
    paint: &Paint,
) -> i32 {
    let coverage = engine.coverage(run);
    let bounds = coverage.bounds();
    let reach = paint.outline_reach();
    let padding = (engine.font_size() * ASCII_RUN_PADDING) as i32;

    let width = bounds.width.max(bounds.advance).max(1) + 2 * reach;
    let height = bounds.height.max(1) + padding + 2 * reach;
    let mut scratch = Canvas::transparent(width as u32, height as u32);
    if !coverage.is_empty() {
        coverage.paint(&mut scratch, (reach - bounds.left, reach - bounds.top), paint);
    }

    let rotated = scratch.rotated_clockwise();
    let x = column.x_v - (ASCII_RUN_SHIFT * column.text_height as f32) as i32;
    canvas.composite(&rotated, x, y_v);

    rotated.height() as i32 + column.margin
}

fn draw_rotated_char(
    engine: &mut TextEngine,
    canvas: &mut Canvas,
    c: char,
    y_v: i32,
    column: &Column,
    paint: &Paint,
) {
    let coverage = engine.coverage(c.encode_utf8(&mut [0; 4]));
    let bounds = coverage.bounds();
    let side = (engine.font_size() as i32)
        .max(bounds.width)
        .max(bounds.height)
        + 2 * paint.outline_reach();

    let mut scratch = Canvas::transparent(side as u32, side as u32);
    if !coverage.is_empty() {
        let origin = (
            (side - bounds.width) / 2 - bounds.left,
            (side - bounds.height) / 2 - bounds.top,
        );
        coverage.paint(&mut scratch, origin, paint);
    }

    // Bottom-left corner of the square on the cursor.
    let (x, y) = rotated_square_origin(column.x_v, y_v, side);
    canvas.composite(&scratch.rotated_clockwise(), x, y);
}

/// Top-left of a rotated square of `side` whose bottom-left sits at the cursor.
fn rotated_square_origin(x_v: i32, y_v: i32, side: i32) -> (i32, i32) {
    (x_v, y_v - side)
}

fn draw_upright_char(
    engine: &mut TextEngine,
    canvas: &mut Canvas,
    c: char,
    y_v: i32,
    column: &Column,
    paint: &Paint,
) {
    let coverage = engine.coverage(c.encode_utf8(&mut [0; 4]));
    let origin = upright_origin(c, column.x_v, y_v, engine.font_size(), coverage.advance());
    coverage.paint(canvas, origin, paint);
}

/// Layout origin of an upright glyph: the right-top corner of its layout box
/// goes to the cursor, nudged by the glyph's offset-table entry.
fn upright_origin(c: char, x_v: i32, y_v: i32, font_size: f32, advance: i32) -> (i32, i32) {
    let (dx, dy) = glyph_offset(c).unwrap_or((0.0, 0.0));
    let anchor_x = x_v + (dx * font_size) as i32;
    let anchor_y = y_v + (dy * font_size) as i32;
    (anchor_x - advance, anchor_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use textrender_fonts::{fallback_font, FontData};

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    /// Composites onto a clear canvas copy scratch pixels verbatim, so faint
    /// edge pixels survive and ink bounds are exact.
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn font() -> Option<FontData> {
        fallback_font().map_err(|e| eprintln!("skipping: {e}")).ok()
    }

    fn render(font: &FontData, text: &str, size: u32) -> Canvas {
        let mut engine = TextEngine::new(Some(font), size as f32);
        let mut canvas = Canvas::new(512, 512, BLACK);
        layout_vertical(&mut engine, &mut canvas, text, Align::Left, &Paint::new(WHITE, 0, BLACK));
        canvas
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let Some(font) = font() else { return };
        assert_eq!(render(&font, "", 48).ink_bounds(BLACK), None);
        assert_eq!(render(&font, "\n\n", 48).ink_bounds(BLACK), None);
    }

    #[test]
    fn test_ascii_run_turns_tall() {
        let Some(font) = font() else { return };
        let canvas = render(&font, "ABCDEFGH", 48);
        let (x0, y0, x1, y1) = canvas.ink_bounds(BLACK).expect("rotated run should be drawn");
        assert!(y1 - y0 > x1 - x0, "cluster should be taller than wide");
    }

    #[test]
    fn test_columns_advance_leftwards() {
        let Some(font) = font() else { return };
        let first = render(&font, "AB", 48).ink_bounds(BLACK).unwrap();
        let both = render(&font, "AB\nAB", 48).ink_bounds(BLACK).unwrap();
        // Second column lands left of the first.
        assert!(both.0 < first.0);
        assert_eq!(both.2, first.2);
    }

    #[test]
    fn test_blank_line_reuses_previous_height() {
        let Some(font) = font() else { return };
        let tight = render(&font, "AB\nAB", 48).ink_bounds(BLACK).unwrap();
        let spaced = render(&font, "AB\n\nAB", 48).ink_bounds(BLACK).unwrap();
        assert!(spaced.0 < tight.0);
    }

    #[test]
    fn test_non_ascii_char_draws() {
        let Some(font) = font() else { return };
        let Some(c) = ['あ', '字', 'é', 'Ω'].into_iter().find(|&c| font.has_glyph(c)) else {
            return;
        };
        let canvas = render(&font, &c.to_string(), 64);
        assert!(canvas.ink_bounds(BLACK).is_some());
    }

    fn column(x_v: i32, text_height: i32, margin: i32) -> Column {
        Column {
            x_v,
            text_height,
            margin,
        }
    }

    fn plain() -> Paint {
        Paint::new(WHITE, 0, BLACK)
    }

    #[test]
    fn test_rotated_square_anchor() {
        assert_eq!(rotated_square_origin(100, 200, 48), (100, 152));
    }

    #[test]
    fn test_upright_origin_applies_offsets() {
        // No table entry: right-top of the layout box on the cursor.
        assert_eq!(upright_origin('あ', 300, 40, 50.0, 50), (250, 40));
        // Punctuation: +0.6 / -0.6 of the size.
        assert_eq!(upright_origin('。', 300, 40, 50.0, 50), (280, 10));
        // Small kana: +0.1 / -0.1 of the size.
        assert_eq!(upright_origin('っ', 300, 40, 50.0, 50), (255, 35));
    }

    #[test]
    fn test_rotated_char_sits_above_right_of_cursor() {
        let Some(font) = font() else { return };
        let Some(c) = ['ー', '—', '―'].into_iter().find(|&c| font.has_glyph(c)) else {
            return;
        };
        let mut engine = TextEngine::new(Some(&font), 48.0);
        let mut canvas = Canvas::transparent(400, 400);
        draw_rotated_char(&mut engine, &mut canvas, c, 200, &column(100, 40, 4), &plain());

        let (x0, y0, x1, y1) = canvas.ink_bounds(CLEAR).expect("dash should be drawn");
        let side = 48.max(engine.measure(&c.to_string()).width) as u32;
        assert!(x0 >= 100 && x1 < 100 + side, "x {x0}..{x1}");
        assert!(y0 >= 200 - side && y1 < 200, "y {y0}..{y1}");
        // A dash is wide and flat upright; turned, it is tall and thin.
        assert!(y1 - y0 > x1 - x0);
    }

    #[test]
    fn test_rotated_chars_advance_by_line_pitch() {
        let Some(font) = font() else { return };
        let Some(c) = ['ー', '—', '―'].into_iter().find(|&c| font.has_glyph(c)) else {
            return;
        };
        let mut engine = TextEngine::new(Some(&font), 48.0);
        let col = column(100, 40, 4);

        let mut one = Canvas::transparent(400, 400);
        draw_column(&mut engine, &mut one, &c.to_string(), 150, &col, &plain());
        let mut two = Canvas::transparent(400, 400);
        draw_column(&mut engine, &mut two, &format!("{c}{c}"), 150, &col, &plain());

        let a = one.ink_bounds(CLEAR).unwrap();
        let b = two.ink_bounds(CLEAR).unwrap();
        assert_eq!(b.1, a.1);
        assert_eq!(b.3, a.3 + 44);
    }

    #[test]
    fn test_upright_char_placement() {
        let Some(font) = font() else { return };
        let mut engine = TextEngine::new(Some(&font), 50.0);
        for c in ['。', 'っ', 'é', 'Ω'] {
            if !font.has_glyph(c) {
                continue;
            }
            let coverage = engine.coverage(&c.to_string());
            let bounds = coverage.bounds();
            if bounds.is_empty() {
                continue;
            }
            let mut canvas = Canvas::new(400, 400, BLACK);
            draw_upright_char(&mut engine, &mut canvas, c, 200, &column(300, 50, 5), &plain());

            let (ox, oy) = upright_origin(c, 300, 200, 50.0, coverage.advance());
            let (x0, y0, _, _) = canvas.ink_bounds(BLACK).expect("glyph should be drawn");
            assert_eq!((x0 as i32, y0 as i32), (ox + bounds.left, oy + bounds.top), "{c}");
        }
    }

    #[test]
    fn test_ascii_run_shift_and_advance() {
        let Some(font) = font() else { return };
        let mut engine = TextEngine::new(Some(&font), 48.0);
        let run = "Hello";
        let bounds = engine.measure(run);
        let h = bounds.height;
        let col = column(300, h, 4);

        let mut canvas = Canvas::transparent(512, 512);
        let advance = draw_ascii_run(&mut engine, &mut canvas, run, 100, &col, &plain());
        assert_eq!(advance, bounds.width.max(bounds.advance) + 4);

        // Scratch is (h + 24) tall with ink in its top h rows; turned clockwise
        // that ink fills the rightmost h columns of a block placed at 300 - 1.2h.
        let (x0, y0, x1, _) = canvas.ink_bounds(CLEAR).expect("run should be drawn");
        let left = 300 - (1.2 * h as f32) as i32;
        assert_eq!(x1 as i32, left + h + 24 - 1);
        assert_eq!(x0 as i32, left + 24);
        // The run's first inked column becomes its first inked row.
        assert_eq!(y0, 100);
    }

    #[test]
    fn test_alignment_uses_canvas_width() {
        let Some(font) = font() else { return };
        let mut engine = TextEngine::new(Some(&font), 48.0);
        let width = engine.measure("ABCD").width;

        let mut canvas = Canvas::transparent(512, 1024);
        layout_vertical(&mut engine, &mut canvas, "ABCD", Align::Center, &plain());
        let (_, y0, _, _) = canvas.ink_bounds(CLEAR).expect("column should be drawn");
        assert_eq!(y0 as i32, (512 - width).div_euclid(2));
    }
}
