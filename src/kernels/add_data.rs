use crate::foundation::core::{Color, Dimensions};
use crate::kernels::interpolate::InterpolateKernel;
use crate::kernels::plot::PlotKernel;
use crate::render::buffer::PixelBuffer;
use crate::render::dispatch::PixelKernel;

/// One pass drawing a new sample: the connecting segment from the previous sample plus the
/// brush disc at the new one. The brush wins where both apply.
#[derive(Clone, Copy, Debug)]
pub struct AddDataKernel {
    brush: PlotKernel,
    line: InterpolateKernel,
}

impl AddDataKernel {
    /// Both parts must have been built for the same dimensions.
    pub fn new(brush: PlotKernel, line: InterpolateKernel) -> Self {
        debug_assert_eq!(brush.dimensions(), line.dimensions());
        Self { brush, line }
    }
}

impl PixelKernel for AddDataKernel {
    fn name(&self) -> &'static str {
        "add_data"
    }

    fn dimensions(&self) -> Dimensions {
        self.brush.dimensions()
    }

    fn shade(&self, prior: &PixelBuffer, x: u32, y: u32) -> Color {
        if self.brush.hits(x, y) {
            return self.brush.brush_color();
        }
        self.line.shade_with(prior.get(x, y), x, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernels/add_data.rs"]
mod tests;
