//! RGBA drawing surface.
//!
//! Glyph coverage is painted by blending every channel, alpha included,
//! toward the paint color. Scratch canvases are merged with source-over
//! compositing. Writes outside the surface are clipped.

use image::{imageops, Rgb, RgbImage, Rgba, RgbaImage};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// A canvas filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Rgba<u8>) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, fill),
        }
    }

    /// A fully transparent scratch canvas.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Rgba([0, 0, 0, 0]))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Blend `color` into `(x, y)` with the given coverage (0 = untouched).
    pub fn blend(&mut self, x: i32, y: i32, color: Rgba<u8>, coverage: u8) {
        if coverage == 0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width() || y >= self.height() {
            return;
        }

        let a = coverage as u32;
        let dst = self.pixels.get_pixel_mut(x, y);
        for (d, s) in dst.0.iter_mut().zip(color.0) {
            *d = ((*d as u32 * (255 - a) + s as u32 * a + 127) / 255) as u8;
        }
    }

    /// Alpha-composite `top` with its top-left corner at `(x, y)`.
    pub fn composite(&mut self, top: &Canvas, x: i32, y: i32) {
        imageops::overlay(&mut self.pixels, &top.pixels, x as i64, y as i64);
    }

    /// A copy turned 90° clockwise (a −90° turn in counter-clockwise terms).
    pub fn rotated_clockwise(&self) -> Canvas {
        Canvas {
            pixels: imageops::rotate90(&self.pixels),
        }
    }

    /// Drop the alpha channel.
    pub fn to_rgb(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            let [r, g, b, _] = self.pixels.get_pixel(x, y).0;
            Rgb([r, g, b])
        })
    }

    /// Bounding box `(x0, y0, x1, y1)` (inclusive) of pixels differing from `background`.
    pub fn ink_bounds(&self, background: Rgba<u8>) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (x, y, pixel) in self.pixels.enumerate_pixels() {
            if *pixel == background {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn test_new_fills() {
        let canvas = Canvas::new(4, 3, RED);
        assert_eq!((canvas.width(), canvas.height()), (4, 3));
        assert!(canvas.as_image().pixels().all(|p| *p == RED));
    }

    #[test]
    fn test_blend_full_and_partial() {
        let mut canvas = Canvas::new(2, 1, BLACK);
        canvas.blend(0, 0, RED, 255);
        canvas.blend(1, 0, RED, 128);
        assert_eq!(canvas.pixel(0, 0), RED);
        assert_eq!(canvas.pixel(1, 0), Rgba([128, 0, 0, 255]));
    }

    #[test]
    fn test_blend_on_transparent_raises_alpha() {
        let mut canvas = Canvas::transparent(1, 1);
        canvas.blend(0, 0, RED, 255);
        assert_eq!(canvas.pixel(0, 0), RED);
    }

    #[test]
    fn test_blend_clips() {
        let mut canvas = Canvas::new(2, 2, BLACK);
        canvas.blend(-1, 0, RED, 255);
        canvas.blend(0, 2, RED, 255);
        canvas.blend(5, 5, RED, 255);
        assert_eq!(canvas.ink_bounds(BLACK), None);
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let mut canvas = Canvas::transparent(4, 2);
        canvas.blend(0, 0, RED, 255);
        let rotated = canvas.rotated_clockwise();
        assert_eq!((rotated.width(), rotated.height()), (2, 4));
        // Top-left turns clockwise into top-right.
        assert_eq!(rotated.pixel(1, 0), RED);
    }

    #[test]
    fn test_composite_skips_transparent() {
        let mut base = Canvas::new(3, 3, BLACK);
        let mut top = Canvas::transparent(2, 2);
        top.blend(1, 1, RED, 255);
        base.composite(&top, 1, 1);
        assert_eq!(base.pixel(2, 2), RED);
        assert_eq!(base.pixel(1, 1), BLACK);
        assert_eq!(base.ink_bounds(BLACK), Some((2, 2, 2, 2)));
    }

    #[test]
    fn test_composite_clips_negative_offset() {
        let mut base = Canvas::new(2, 2, BLACK);
        let top = Canvas::new(2, 2, RED);
        base.composite(&top, -1, -1);
        assert_eq!(base.pixel(0, 0), RED);
        assert_eq!(base.pixel(1, 1), BLACK);
    }

    #[test]
    fn test_to_rgb_drops_alpha() {
        let mut canvas = Canvas::transparent(1, 1);
        canvas.blend(0, 0, Rgba([200, 100, 50, 255]), 255);
        assert_eq!(*canvas.to_rgb().get_pixel(0, 0), Rgb([200, 100, 50]));
        assert_eq!(*Canvas::transparent(1, 1).to_rgb().get_pixel(0, 0), Rgb([0, 0, 0]));
    }
}
