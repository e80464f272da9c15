use crate::foundation::core::{Axis, Color, Dimensions};
use crate::kernels::blank::AxisLines;
use crate::render::buffer::PixelBuffer;
use crate::render::dispatch::PixelKernel;

/// Shifts the buffer `progress` pixels toward the low end of `axis`.
///
/// Content pushed past the edge is dropped; the strip revealed at the high end is filled with
/// background, continuing the axis line that runs along `axis`.
#[derive(Clone, Copy, Debug)]
pub struct ScrollKernel {
    dims: Dimensions,
    axis: Axis,
    progress: u32,
    background: Color,
    axes: AxisLines,
}

impl ScrollKernel {
    pub fn new(
        dims: Dimensions,
        axis: Axis,
        progress: u32,
        background: Color,
        axes: AxisLines,
    ) -> Self {
        Self {
            dims,
            axis,
            progress,
            background,
            axes,
        }
    }
}

impl PixelKernel for ScrollKernel {
    fn name(&self) -> &'static str {
        "scroll"
    }

    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn shade(&self, prior: &PixelBuffer, x: u32, y: u32) -> Color {
        let (sx, sy) = match self.axis {
            Axis::X => (x.checked_add(self.progress), Some(y)),
            Axis::Y => (Some(x), y.checked_add(self.progress)),
        };
        match (sx, sy) {
            (Some(sx), Some(sy)) if sx < self.dims.width && sy < self.dims.height => {
                prior.get(sx, sy)
            }
            _ => self.axes.fill(self.axis, x, y, self.background),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernels/scroll.rs"]
mod tests;
