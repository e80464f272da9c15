use crate::foundation::core::{Color, Dimensions, Point};
use crate::render::buffer::PixelBuffer;
use crate::render::dispatch::PixelKernel;
use crate::transform::coords::CoordTransform;

/// Stamps a filled disc of `brush_size` pixels around a data point.
///
/// Distance is measured in pixels (each data-space component is rescaled by its axis scale
/// factor), so the disc stays round under non-uniform axis scaling.
#[derive(Clone, Copy, Debug)]
pub struct PlotKernel {
    dims: Dimensions,
    transform: CoordTransform,
    point: Point,
    brush_size: f64,
    brush_color: Color,
}

impl PlotKernel {
    pub fn new(
        dims: Dimensions,
        transform: CoordTransform,
        point: Point,
        brush_size: f64,
        brush_color: Color,
    ) -> Self {
        Self {
            dims,
            transform,
            point,
            brush_size,
            brush_color,
        }
    }

    /// `true` when pixel `(x, y)` lies within the brush disc.
    #[inline]
    pub fn hits(&self, x: u32, y: u32) -> bool {
        let p = self.transform.pixel_to_data(f64::from(x), f64::from(y));
        let s = self.transform.scale();
        let dx = (p.x - self.point.x) * s.x;
        let dy = (p.y - self.point.y) * s.y;
        (dx * dx + dy * dy).sqrt() <= self.brush_size
    }

    pub fn brush_color(&self) -> Color {
        self.brush_color
    }
}

impl PixelKernel for PlotKernel {
    fn name(&self) -> &'static str {
        "plot"
    }

    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn shade(&self, prior: &PixelBuffer, x: u32, y: u32) -> Color {
        if self.hits(x, y) {
            self.brush_color
        } else {
            prior.get(x, y)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernels/plot.rs"]
mod tests;
