use crate::foundation::core::{Axis, Color, Dimensions};
use crate::kernels::blank::AxisLines;
use crate::render::buffer::PixelBuffer;
use crate::render::dispatch::PixelKernel;

/// Compresses the buffer along `axis` toward the data origin by `factor` (`0 < factor <= 1`).
///
/// Output pixel `p` takes the nearest prior pixel to `origin + (p - origin) / factor`, where
/// `origin` is the pixel coordinate of data `0` on that axis. Samples that land outside the
/// prior buffer become background.
#[derive(Clone, Copy, Debug)]
pub struct SqueezeKernel {
    dims: Dimensions,
    axis: Axis,
    factor: f64,
    origin: f64,
    background: Color,
    axes: AxisLines,
}

impl SqueezeKernel {
    pub fn new(
        dims: Dimensions,
        axis: Axis,
        factor: f64,
        origin: f64,
        background: Color,
        axes: AxisLines,
    ) -> Self {
        Self {
            dims,
            axis,
            factor,
            origin,
            background,
            axes,
        }
    }

    #[inline]
    fn source(&self, p: u32) -> i64 {
        (self.origin + (f64::from(p) - self.origin) / self.factor).round() as i64
    }
}

impl PixelKernel for SqueezeKernel {
    fn name(&self) -> &'static str {
        "squeeze"
    }

    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn shade(&self, prior: &PixelBuffer, x: u32, y: u32) -> Color {
        let sampled = match self.axis {
            Axis::X => prior.try_get(self.source(x), i64::from(y)),
            Axis::Y => prior.try_get(i64::from(x), self.source(y)),
        };
        sampled.unwrap_or_else(|| self.axes.fill(self.axis, x, y, self.background))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernels/squeeze.rs"]
mod tests;
