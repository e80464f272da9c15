use crate::foundation::core::{Axis, Color, Dimensions};
use crate::render::buffer::PixelBuffer;
use crate::render::dispatch::PixelKernel;
use crate::transform::coords::CoordTransform;

/// Pixel positions of the two axis lines, fixed when a graph is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLines {
    /// Row holding the x axis (data `y == 0`).
    pub row: Option<u32>,
    /// Column holding the y axis (data `x == 0`).
    pub column: Option<u32>,
    pub color: Color,
}

impl AxisLines {
    /// Locate the axes of `transform` inside `dims`. Lines that fall outside the buffer, or
    /// all lines when `enabled` is `false`, are omitted.
    pub fn new(dims: Dimensions, transform: &CoordTransform, color: Color, enabled: bool) -> Self {
        if !enabled {
            return Self::none(color);
        }
        let origin = transform.origin_pixel();
        Self {
            row: pixel_index(origin.y, dims.height),
            column: pixel_index(origin.x, dims.width),
            color,
        }
    }

    /// No axis lines.
    pub fn none(color: Color) -> Self {
        Self {
            row: None,
            column: None,
            color,
        }
    }

    /// Color for a pixel revealed by moving content along `axis`.
    ///
    /// Only the axis line running parallel to `axis` is extended; the perpendicular one moves
    /// with the content.
    #[inline]
    pub(crate) fn fill(&self, axis: Axis, x: u32, y: u32, background: Color) -> Color {
        let on_line = match axis {
            Axis::X => self.row == Some(y),
            Axis::Y => self.column == Some(x),
        };
        if on_line { self.color } else { background }
    }

    #[inline]
    fn on_either(&self, x: u32, y: u32) -> bool {
        self.row == Some(y) || self.column == Some(x)
    }
}

fn pixel_index(v: f64, extent: u32) -> Option<u32> {
    let v = v.round();
    (v >= 0.0 && v < f64::from(extent)).then_some(v as u32)
}

/// Background everywhere, axis color on the axis lines. Ignores the prior buffer.
#[derive(Clone, Copy, Debug)]
pub struct BlankKernel {
    dims: Dimensions,
    background: Color,
    axes: AxisLines,
}

impl BlankKernel {
    pub fn new(dims: Dimensions, background: Color, axes: AxisLines) -> Self {
        Self {
            dims,
            background,
            axes,
        }
    }
}

impl PixelKernel for BlankKernel {
    fn name(&self) -> &'static str {
        "blank"
    }

    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn shade(&self, _prior: &PixelBuffer, x: u32, y: u32) -> Color {
        if self.axes.on_either(x, y) {
            self.axes.color
        } else {
            self.background
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernels/blank.rs"]
mod tests;
