use crate::foundation::core::{Color, Dimensions};
use crate::foundation::error::{GraphError, GraphResult};

/// A `height x width` grid of colors.
///
/// Row 0 is the bottom row of the graph (`y` grows upwards, like the data axis). Buffers have
/// value semantics: kernel passes never mutate their input, they return a fresh buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    dims: Dimensions,
    data: Vec<Color>,
}

impl PixelBuffer {
    /// Buffer with every pixel set to `color`.
    pub fn filled(dims: Dimensions, color: Color) -> Self {
        Self {
            dims,
            data: vec![color; dims.pixel_count()],
        }
    }

    /// Buffer whose pixel `(x, y)` is `f(x, y)`, evaluated row by row.
    pub fn from_fn(dims: Dimensions, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        let mut data = Vec::with_capacity(dims.pixel_count());
        for y in 0..dims.height {
            for x in 0..dims.width {
                data.push(f(x, y));
            }
        }
        Self { dims, data }
    }

    /// Wrap row-major pixel data.
    pub fn from_vec(dims: Dimensions, data: Vec<Color>) -> GraphResult<Self> {
        if data.len() != dims.pixel_count() {
            return Err(GraphError::dimension(format!(
                "pixel data has {} entries, {}x{} buffer needs {}",
                data.len(),
                dims.width,
                dims.height,
                dims.pixel_count()
            )));
        }
        Ok(Self { dims, data })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Color at `(x, y)`.
    ///
    /// Panics when the coordinate is outside the buffer.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        assert!(
            x < self.dims.width && y < self.dims.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.dims.width,
            self.dims.height
        );
        self.data[y as usize * self.dims.width as usize + x as usize]
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn try_get(&self, x: i64, y: i64) -> Option<Color> {
        if x < 0 || y < 0 || x >= i64::from(self.dims.width) || y >= i64::from(self.dims.height) {
            return None;
        }
        Some(self.data[y as usize * self.dims.width as usize + x as usize])
    }

    /// Row-major pixels, bottom row first.
    pub fn as_slice(&self) -> &[Color] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<Color> {
        self.data
    }

    /// Straight RGBA8 bytes with the top row first (image orientation), alpha fixed at 255.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let w = self.dims.width as usize;
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for row in self.data.chunks_exact(w.max(1)).rev() {
            for c in row {
                let [r, g, b] = c.to_rgb8();
                out.extend_from_slice(&[r, g, b, 255]);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/buffer.rs"]
mod tests;
