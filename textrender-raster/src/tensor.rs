//! Host-facing image tensor.

use ndarray::Array4;

use crate::canvas::Canvas;

/// A single-image batch in `[batch, height, width, channel]` layout,
/// RGB, values in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageTensor {
    data: Array4<f32>,
}

impl ImageTensor {
    /// Flatten `canvas` to RGB (alpha is dropped) and normalize.
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let rgb = canvas.to_rgb();
        let (width, height) = rgb.dimensions();
        let data = Array4::from_shape_fn(
            (1, height as usize, width as usize, 3),
            |(_, y, x, c)| rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0,
        );
        Self { data }
    }

    /// `[1, height, width, 3]`.
    pub fn shape(&self) -> [usize; 4] {
        let dim = self.data.dim();
        [dim.0, dim.1, dim.2, dim.3]
    }

    pub fn width(&self) -> usize {
        self.data.dim().2
    }

    pub fn height(&self) -> usize {
        self.data.dim().1
    }

    /// RGB values of the pixel at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> [f32; 3] {
        [
            self.data[[0, y, x, 0]],
            self.data[[0, y, x, 1]],
            self.data[[0, y, x, 2]],
        ]
    }

    pub fn as_array(&self) -> &Array4<f32> {
        &self.data
    }

    pub fn into_array(self) -> Array4<f32> {
        self.data
    }
}
