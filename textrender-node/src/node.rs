//! The two render-text nodes.

use std::sync::Arc;

use serde_json::Value;
use textrender_fonts::FontCatalogCache;
use textrender_raster::{render, Direction, ImageTensor, RenderRequest};

use crate::error::NodeError;
use crate::schema::{input_types, SchemaOptions};

pub const CATEGORY: &str = "image/text";
pub const RETURN_TYPES: [&str; 1] = ["IMAGE"];
pub const FUNCTION: &str = "render_text";

/// A host-facing node: a declared input form and one execute entry point.
pub trait Node: Send + Sync {
    fn class_name(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    fn category(&self) -> &'static str {
        CATEGORY
    }

    fn return_types(&self) -> &'static [&'static str] {
        &RETURN_TYPES
    }

    fn function(&self) -> &'static str {
        FUNCTION
    }

    /// The input form; `font_name` lists the current catalog.
    fn input_types(&self) -> Value;

    /// Decode `inputs` and render.
    fn execute(&self, inputs: &Value) -> Result<ImageTensor, NodeError>;
}

/// Decode and range-check host inputs; absent fields take their defaults.
pub fn decode_request(inputs: &Value) -> Result<RenderRequest, NodeError> {
    let request: RenderRequest = serde_json::from_value(inputs.clone())?;
    request.validate()?;
    Ok(request)
}

fn run(catalog: &FontCatalogCache, request: &RenderRequest) -> ImageTensor {
    log::debug!(
        "render_text: {:?} {}x{} '{}' {}px",
        request.direction,
        request.width,
        request.height,
        request.font_name,
        request.font_size
    );
    render(request, &catalog.get_or_build())
}

// ── Horizontal node ─────────────────────────────────────────────────

/// Horizontal-only renderer.
///
/// `direction` and `extract_double_quoted_text` are not part of its form
/// and are ignored if a host sends them anyway.
pub struct TextRenderNode {
    catalog: Arc<FontCatalogCache>,
}

impl TextRenderNode {
    pub fn new(catalog: Arc<FontCatalogCache>) -> Self {
        Self { catalog }
    }
}

impl Node for TextRenderNode {
    fn class_name(&self) -> &'static str {
        "TextRenderNode"
    }

    fn display_name(&self) -> &'static str {
        "Render Text to Image"
    }

    fn input_types(&self) -> Value {
        input_types(&self.catalog.get_or_build(), SchemaOptions::default())
    }

    fn execute(&self, inputs: &Value) -> Result<ImageTensor, NodeError> {
        let request = RenderRequest {
            direction: Direction::Horizontal,
            extract_double_quoted_text: false,
            ..decode_request(inputs)?
        };
        Ok(run(&self.catalog, &request))
    }
}

// ── Vertical-capable node ───────────────────────────────────────────

/// Renderer with vertical layout and quoted-text extraction.
pub struct VerticalTextRenderNode {
    catalog: Arc<FontCatalogCache>,
}

impl VerticalTextRenderNode {
    pub fn new(catalog: Arc<FontCatalogCache>) -> Self {
        Self { catalog }
    }
}

impl Node for VerticalTextRenderNode {
    fn class_name(&self) -> &'static str {
        "VerticalTextRenderNode"
    }

    fn display_name(&self) -> &'static str {
        "Render Text to Image (Vertical)"
    }

    fn input_types(&self) -> Value {
        let options = SchemaOptions {
            direction: true,
            extract_quoted: true,
        };
        input_types(&self.catalog.get_or_build(), options)
    }

    fn execute(&self, inputs: &Value) -> Result<ImageTensor, NodeError> {
        let request = decode_request(inputs)?;
        Ok(run(&self.catalog, &request))
    }
}

// ===================================================================
// Tests
// ===================================================================
