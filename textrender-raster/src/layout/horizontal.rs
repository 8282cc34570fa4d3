use crate::canvas::Canvas;
use crate::engine::{Paint, TextEngine};
use crate::request::Align;

/// Draw `text` as one block: aligned per `align`, centered vertically.
///
/// The block's ink box is what gets positioned, so `Left` puts the first
/// inked column exactly at the edge margin.
pub fn layout_horizontal(
    engine: &mut TextEngine,
    canvas: &mut Canvas,
    text: &str,
    align: Align,
    paint: &Paint,
) {
    let coverage = engine.coverage(text);
    if coverage.is_empty() {
        return;
    }
    let bounds = coverage.bounds();

    let x = align.offset(canvas.width() as i32, bounds.width);
    let y = (canvas.height() as i32 - bounds.height).div_euclid(2);
    log::debug!(
        "layout_horizontal: {}x{} ink block at ({x}, {y})",
        bounds.width,
        bounds.height
    );

    coverage.paint(canvas, (x - bounds.left, y - bounds.top), paint);
}
