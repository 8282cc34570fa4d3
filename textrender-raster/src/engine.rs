//! Text engine. Shapes text and rasterizes glyphs using `cosmic-text`.
//!
//! Each engine owns a private `FontSystem` whose database holds exactly the
//! one face chosen for the render, so no other installed font can leak in.
//! Text is rasterized once into a [`Coverage`] (glyph pixels relative to the
//! layout origin), which can then be measured and stamped any number of
//! times without reshaping.

use cosmic_text::{
    fontdb, Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, SwashContent,
};
use image::Rgba;
use textrender_fonts::{load_selection, FontData, FontSelection};

use crate::canvas::Canvas;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// ── Measurements ────────────────────────────────────────────────────

/// Ink bounding box relative to the layout origin, plus layout advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    /// Widest laid-out line, in whole pixels.
    pub advance: i32,
}

impl TextBounds {
    /// True when nothing would be painted.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// ── Paint ───────────────────────────────────────────────────────────

/// Outline stamped around the glyphs before the main pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outline {
    pub width: i32,
    pub color: Rgba<u8>,
}

/// Colors for one draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paint {
    pub color: Rgba<u8>,
    pub outline: Option<Outline>,
}

impl Paint {
    /// `outline_width == 0` disables the outline pass entirely.
    pub fn new(color: Rgba<u8>, outline_width: u32, outline_color: Rgba<u8>) -> Self {
        let outline = (outline_width > 0).then_some(Outline {
            width: outline_width as i32,
            color: outline_color,
        });
        Self { color, outline }
    }

    /// Extra room needed on each side of a scratch canvas.
    pub fn outline_reach(&self) -> i32 {
        self.outline.map_or(0, |o| o.width)
    }
}

// ── Coverage ────────────────────────────────────────────────────────

/// Rasterized glyph pixels `(x, y, coverage)` of one piece of text.
#[derive(Clone, Debug, Default)]
pub struct Coverage {
    points: Vec<(i32, i32, u8)>,
    advance: i32,
}

impl Coverage {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Layout advance of the widest line.
    pub fn advance(&self) -> i32 {
        self.advance
    }

    pub fn bounds(&self) -> TextBounds {
        let mut iter = self.points.iter();
        let Some(&(x, y, _)) = iter.next() else {
            return TextBounds {
                advance: self.advance,
                ..TextBounds::default()
            };
        };
        let (mut x0, mut y0, mut x1, mut y1) = (x, y, x, y);
        for &(x, y, _) in iter {
            x0 = x0.min(x);
            y0 = y0.min(y);
            x1 = x1.max(x);
            y1 = y1.max(y);
        }
        TextBounds {
            left: x0,
            top: y0,
            width: x1 - x0 + 1,
            height: y1 - y0 + 1,
            advance: self.advance,
        }
    }

    /// Blend every glyph pixel into `canvas`, shifted by `origin`.
    pub fn stamp(&self, canvas: &mut Canvas, origin: (i32, i32), color: Rgba<u8>) {
        let (ox, oy) = origin;
        for &(x, y, coverage) in &self.points {
            canvas.blend(ox + x, oy + y, color, coverage);
        }
    }

    /// Outline pass (every offset in `[-w, w]²` but the center), then the fill.
    pub fn paint(&self, canvas: &mut Canvas, origin: (i32, i32), paint: &Paint) {
        if let Some(outline) = paint.outline {
            let w = outline.width;
            for dx in -w..=w {
                for dy in -w..=w {
                    if dx != 0 || dy != 0 {
                        self.stamp(canvas, (origin.0 + dx, origin.1 + dy), outline.color);
                    }
                }
            }
        }
        self.stamp(canvas, origin, paint.color);
    }
}

// ── Engine ──────────────────────────────────────────────────────────

/// Core text engine wrapping cosmic-text.
pub struct TextEngine {
    font_system: FontSystem,
    swash_cache: SwashCache,
    /// Family of the single loaded face; `None` when no font could be loaded.
    family: Option<String>,
    font_size: f32,
    line_height: f32,
}

impl TextEngine {
    /// Build an engine around `font`. `None` gives an engine that draws nothing.
    pub fn new(font: Option<&FontData>, font_size: f32) -> Self {
        let mut db = fontdb::Database::new();
        let family = font.and_then(|data| {
            db.load_font_data(data.bytes.to_vec());
            db.faces()
                .next()
                .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
        });

        match (&family, font) {
            (Some(name), Some(data)) => {
                log::debug!("TextEngine: using '{name}' ({:?}) at {font_size}px", data.origin)
            }
            (None, Some(data)) => {
                log::warn!("TextEngine: {:?} produced no usable face", data.origin)
            }
            _ => {}
        }

        Self {
            font_system: FontSystem::new_with_locale_and_db("en-US".to_string(), db),
            swash_cache: SwashCache::new(),
            family,
            font_size,
            line_height: font_size * LINE_HEIGHT_FACTOR,
        }
    }

    /// Load `selection` with the fallback policy and build an engine.
    pub fn from_selection(selection: &FontSelection, font_size: f32) -> Self {
        let font = load_selection(selection);
        Self::new(font.as_ref(), font_size)
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Whether a face is loaded.
    pub fn has_font(&self) -> bool {
        self.family.is_some()
    }

    /// Shape `text` without wrapping; `None` when no face is loaded.
    fn layout(&mut self, text: &str) -> Option<Buffer> {
        let family = self.family.as_deref()?;
        let metrics = Metrics::new(self.font_size, self.line_height);

        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(
            &mut self.font_system,
            text,
            Attrs::new().family(Family::Name(family)),
            Shaping::Advanced,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);
        Some(buffer)
    }

    /// Rasterize `text` with its layout origin at `(0, 0)`.
    pub fn coverage(&mut self, text: &str) -> Coverage {
        let Some(buffer) = self.layout(text) else {
            return Coverage::default();
        };

        let mut points = Vec::new();
        let mut advance: f32 = 0.0;

        // Iterate layout runs → glyphs.
        for run in buffer.layout_runs() {
            advance = advance.max(run.line_w);

            for glyph in run.glyphs.iter() {
                let physical = glyph.physical((0.0, run.line_y), 1.0);

                // Rasterize via swash.
                let image = match self
                    .swash_cache
                    .get_image(&mut self.font_system, physical.cache_key)
                {
                    Some(img) => img,
                    None => continue, // whitespace or missing glyph
                };

                let width = image.placement.width as usize;
                let height = image.placement.height as usize;
                if width == 0 || height == 0 {
                    continue;
                }

                let left = physical.x + image.placement.left;
                let top = physical.y - image.placement.top;
                let stride = match image.content {
                    SwashContent::Mask => 1,
                    SwashContent::Color | SwashContent::SubpixelMask => 4,
                };

                for row in 0..height {
                    for col in 0..width {
                        let i = (row * width + col) * stride;
                        let Some(px) = image.data.get(i..i + stride) else {
                            continue;
                        };
                        let alpha = match image.content {
                            SwashContent::Mask => px[0],
                            SwashContent::Color => px[3],
                            SwashContent::SubpixelMask => px[0].max(px[1]).max(px[2]),
                        };
                        if alpha > 0 {
                            points.push((left + col as i32, top + row as i32, alpha));
                        }
                    }
                }
            }
        }

        Coverage {
            points,
            advance: advance.ceil() as i32,
        }
    }

    /// Ink bounds of `text` relative to its layout origin.
    pub fn measure(&mut self, text: &str) -> TextBounds {
        self.coverage(text).bounds()
    }
}

// ===================================================================
// Tests
// ===================================================================
