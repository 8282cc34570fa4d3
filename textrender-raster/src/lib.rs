//! # textrender-raster
//!
//! Rasterizes a text string into an RGB image tensor: fonts via
//! `textrender-fonts`, shaping and glyph coverage via `cosmic-text`, pixels
//! via `image`, and the output batch via `ndarray`.
//!
//! ## Architecture
//!
//! ```text
//! RenderRequest ──► renderer::render_canvas
//!                       │  catalog.resolve(font_name) → TextEngine (cosmic-text)
//!                       │  quoted::extract_quoted (optional)
//!                       ▼
//!           layout::{horizontal, vertical} ──► Canvas (RGBA)
//!                                                │
//!                                                ▼
//!                                   ImageTensor [1, H, W, 3] in [0, 1]
//! ```
//!
//! - **`engine`**: font face loading, shaping, glyph coverage, outline stamping.
//! - **`layout`**: horizontal block and vertical column placement.
//! - **`canvas`**: RGBA surface: blend, composite, rotate, flatten.
//! - **`tensor`**: canvas → `ndarray` batch.

pub mod canvas;
pub mod color;
pub mod engine;
pub mod layout;
pub mod quoted;
pub mod renderer;
pub mod request;
pub mod tensor;

// Re-exports for ergonomic use.
pub use canvas::Canvas;
pub use color::{BackgroundColor, TextColor};
pub use engine::{Coverage, Outline, Paint, TextBounds, TextEngine};
pub use quoted::extract_quoted;
pub use renderer::{effective_text, render, render_canvas};
pub use request::{Align, Direction, RenderRequest, RequestError};
pub use tensor::ImageTensor;
