//! Input form advertised to the host.
//!
//! Shape: `{"required": {name: [TYPE, {options}]}}`, where an enum input
//! is the list of its choices in place of `TYPE`. Fields keep insertion
//! order (`serde_json` `preserve_order`); the host lays widgets out in it.

use serde_json::{json, Map, Value};
use textrender_fonts::FontCatalog;
use textrender_raster::request::{IntInput, CANVAS_SIDE, DEFAULT_TEXT, FONT_SIZE, OUTLINE_WIDTH};
use textrender_raster::{Align, BackgroundColor, Direction, TextColor};

/// Which optional inputs a node variant exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchemaOptions {
    pub direction: bool,
    pub extract_quoted: bool,
}

fn int_input(input: IntInput) -> Value {
    json!([
        "INT",
        { "default": input.default, "min": input.min, "max": input.max, "step": input.step }
    ])
}

fn choices<'a>(names: impl IntoIterator<Item = &'a str>) -> Value {
    json!([names.into_iter().collect::<Vec<_>>()])
}

/// Build the input form, listing `catalog`'s font names.
pub fn input_types(catalog: &FontCatalog, options: SchemaOptions) -> Value {
    let mut required = Map::new();
    required.insert(
        "text".into(),
        json!(["STRING", { "multiline": true, "default": DEFAULT_TEXT }]),
    );
    if options.extract_quoted {
        required.insert(
            "extract_double_quoted_text".into(),
            json!(["BOOLEAN", { "default": false }]),
        );
    }
    if options.direction {
        required.insert("direction".into(), choices(Direction::ALL.map(Direction::name)));
    }
    required.insert("font_size".into(), int_input(FONT_SIZE));
    required.insert("width".into(), int_input(CANVAS_SIDE));
    required.insert("height".into(), int_input(CANVAS_SIDE));
    required.insert(
        "font_name".into(),
        choices(catalog.names().iter().map(String::as_str)),
    );
    required.insert("text_color".into(), choices(TextColor::ALL.map(TextColor::name)));
    required.insert(
        "bg_color".into(),
        choices(BackgroundColor::ALL.map(BackgroundColor::name)),
    );
    required.insert("align".into(), choices(Align::ALL.map(Align::name)));
    required.insert("outline_width".into(), int_input(OUTLINE_WIDTH));
    required.insert(
        "outline_color".into(),
        choices(TextColor::OUTLINE_ORDER.map(TextColor::name)),
    );

    json!({ "required": required })
}

// ===================================================================
// Tests
// ===================================================================
