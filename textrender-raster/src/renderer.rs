//! One render: request in, canvas or tensor out.

use textrender_fonts::FontCatalog;

use crate::canvas::Canvas;
use crate::engine::{Paint, TextEngine};
use crate::layout::{layout_horizontal, layout_vertical};
use crate::quoted::extract_quoted;
use crate::request::{Direction, RenderRequest};
use crate::tensor::ImageTensor;

/// The text actually laid out for `request`.
pub fn effective_text(request: &RenderRequest) -> String {
    if request.extract_double_quoted_text {
        extract_quoted(&request.text)
    } else {
        request.text.clone()
    }
}

/// Render `request` onto a fresh canvas of exactly the requested size.
///
/// Font problems never fail the render; see
/// [`load_selection`](textrender_fonts::load_selection).
pub fn render_canvas(request: &RenderRequest, catalog: &FontCatalog) -> Canvas {
    let mut canvas = Canvas::new(request.width, request.height, request.bg_color.rgba());

    let selection = catalog.resolve(&request.font_name);
    let mut engine = TextEngine::from_selection(&selection, request.font_size as f32);
    let paint = Paint::new(
        request.text_color.rgba(),
        request.outline_width,
        request.outline_color.rgba(),
    );

    let text = effective_text(request);
    match request.direction {
        Direction::Horizontal => {
            layout_horizontal(&mut engine, &mut canvas, &text, request.align, &paint)
        }
        Direction::Vertical => {
            layout_vertical(&mut engine, &mut canvas, &text, request.align, &paint)
        }
    }
    canvas
}

/// Render `request` into a `[1, H, W, 3]` tensor.
pub fn render(request: &RenderRequest, catalog: &FontCatalog) -> ImageTensor {
    ImageTensor::from_canvas(&render_canvas(request, catalog))
}
