//! Data-space <-> pixel-space mapping and the visible data window.

use crate::foundation::core::{Axis, Dimensions, Offsets, Point, ScaleFactors, Vec2};

/// Maps pixel coordinates onto data coordinates and back.
///
/// A transform is fully described by the per-axis scale factors and the data coordinate that
/// lands on pixel `(0, 0)`. Reciprocal scales are cached so the per-pixel direction costs
/// only multiplications.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordTransform {
    scale: ScaleFactors,
    inv_scale: Vec2,
    origin: Point,
}

impl CoordTransform {
    /// Transform for a freshly constructed graph.
    ///
    /// `X = x/xScale - W*(yOffset/100)/xScale` and `Y = y/yScale - H*(xOffset/100)/yScale`.
    /// The x offset feeds the Y term and the y offset feeds the X term.
    pub fn new(dims: Dimensions, scale: ScaleFactors, offsets: Offsets) -> Self {
        let origin = Point::new(
            -(f64::from(dims.width) * (offsets.y / 100.0)) / scale.x,
            -(f64::from(dims.height) * (offsets.x / 100.0)) / scale.y,
        );
        Self::with_origin(scale, origin)
    }

    /// Transform whose pixel `(0, 0)` shows the lower corner of `window`.
    pub fn from_window(window: &VisibleWindow, scale: ScaleFactors) -> Self {
        Self::with_origin(scale, Point::new(window.x[0], window.y[0]))
    }

    fn with_origin(scale: ScaleFactors, origin: Point) -> Self {
        Self {
            scale,
            inv_scale: Vec2::new(1.0 / scale.x, 1.0 / scale.y),
            origin,
        }
    }

    /// Scale factors this transform was built with.
    pub fn scale(&self) -> ScaleFactors {
        self.scale
    }

    /// Data units per pixel along each axis.
    pub fn inv_scale(&self) -> Vec2 {
        self.inv_scale
    }

    /// Data coordinate shown at pixel `(0, 0)`.
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn pixel_to_data(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.origin.x + x * self.inv_scale.x,
            self.origin.y + y * self.inv_scale.y,
        )
    }

    #[inline]
    pub fn data_to_pixel(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.origin.x) * self.scale.x,
            (p.y - self.origin.y) * self.scale.y,
        )
    }

    /// Pixel position of the data origin `(0, 0)`. May lie outside the buffer.
    pub fn origin_pixel(&self) -> Point {
        self.data_to_pixel(Point::ORIGIN)
    }
}

/// Data-space rectangle currently mapped onto the pixel buffer.
///
/// Always satisfies `hi - lo == extent / scale` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisibleWindow {
    /// `[lo, hi]` on the x axis.
    pub x: [f64; 2],
    /// `[lo, hi]` on the y axis.
    pub y: [f64; 2],
}

impl VisibleWindow {
    /// Window for a freshly constructed graph.
    pub fn from_view(dims: Dimensions, scale: ScaleFactors, offsets: Offsets) -> Self {
        let span_x = f64::from(dims.width) / scale.x;
        let span_y = f64::from(dims.height) / scale.y;
        Self {
            x: [
                0.0 - (offsets.y / 100.0) * span_x,
                span_x - (offsets.y / 100.0) * span_x,
            ],
            y: [
                0.0 - (offsets.x / 100.0) * span_y,
                span_y - (offsets.x / 100.0) * span_y,
            ],
        }
    }

    pub fn bounds(&self, axis: Axis) -> [f64; 2] {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    fn bounds_mut(&mut self, axis: Axis) -> &mut [f64; 2] {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    /// `hi - lo` along `axis`.
    pub fn span(&self, axis: Axis) -> f64 {
        let [lo, hi] = self.bounds(axis);
        hi - lo
    }

    /// Translate both bounds on `axis` by `delta` data units.
    pub fn shift(&mut self, axis: Axis, delta: f64) {
        let b = self.bounds_mut(axis);
        b[0] += delta;
        b[1] += delta;
    }

    /// Stretch the window on `axis` about the data origin by `1 / factor`.
    pub fn squeeze(&mut self, axis: Axis, factor: f64) {
        let b = self.bounds_mut(axis);
        b[0] /= factor;
        b[1] /= factor;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/coords.rs"]
mod tests;
