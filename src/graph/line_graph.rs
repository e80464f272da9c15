use crate::foundation::core::{Axis, Point, ProgressionMode, ScaleFactors};
use crate::foundation::error::{GraphError, GraphResult};
use crate::graph::opts::GraphOpts;
use crate::kernels::add_data::AddDataKernel;
use crate::kernels::blank::{AxisLines, BlankKernel};
use crate::kernels::interpolate::InterpolateKernel;
use crate::kernels::plot::PlotKernel;
use crate::kernels::scroll::ScrollKernel;
use crate::kernels::squeeze::SqueezeKernel;
use crate::render::buffer::PixelBuffer;
use crate::render::dispatch::KernelRunner;
use crate::transform::coords::{CoordTransform, VisibleWindow};

/// One value pushed onto a graph.
///
/// Built from bare numbers or a single-element array, so `graph.add_data(3.0)` and
/// `graph.add_data([3.0])` are equivalent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample(pub f64);

impl From<f64> for Sample {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<f32> for Sample {
    fn from(v: f32) -> Self {
        Self(f64::from(v))
    }
}

impl From<i32> for Sample {
    fn from(v: i32) -> Self {
        Self(f64::from(v))
    }
}

impl From<[f64; 1]> for Sample {
    fn from([v]: [f64; 1]) -> Self {
        Self(v)
    }
}

/// A streaming line graph rendered into a fixed-size [`PixelBuffer`].
///
/// Each sample is drawn as a segment from the previous sample plus a brush disc. Sample `n`
/// sits at coordinate `n` on the progressive axis and at its value on the other axis. When
/// samples reach the end of the visible window the graph scrolls (overflow), rescales
/// (squeeze), or leaves scrolling to [`tick`](Self::tick) (continuous).
///
/// All methods take `&mut self`; kernel passes run to completion before a call returns.
#[derive(Debug)]
pub struct LineGraph {
    opts: GraphOpts,
    runner: KernelRunner,
    axes: AxisLines,
    pixels: PixelBuffer,
    scale: ScaleFactors,
    limits: VisibleWindow,
    data_index: u64,
    last_value: f64,
    last_progress: f64,
    num_progress: u64,
    time: f64,
}

impl LineGraph {
    /// Validate `opts` and build a graph with a blank (background + axes) buffer.
    #[tracing::instrument(
        skip(opts),
        fields(width = opts.dimensions.width, height = opts.dimensions.height)
    )]
    pub fn new(opts: GraphOpts) -> GraphResult<Self> {
        opts.validate()?;
        let runner = KernelRunner::new(&opts.threading)?;

        let dims = opts.dimensions;
        let scale = opts.scale_factors();
        let transform = CoordTransform::new(dims, scale, opts.offsets());
        let axes = AxisLines::new(dims, &transform, opts.axes_color, opts.draw_axes);
        let pixels = runner.run(
            &PixelBuffer::filled(dims, opts.bg_color),
            &BlankKernel::new(dims, opts.bg_color, axes),
        )?;

        Ok(Self {
            limits: VisibleWindow::from_view(dims, scale, opts.offsets()),
            opts,
            runner,
            axes,
            pixels,
            scale,
            data_index: 1,
            last_value: 0.0,
            last_progress: 0.0,
            num_progress: 0,
            time: 0.0,
        })
    }

    pub fn opts(&self) -> &GraphOpts {
        &self.opts
    }

    /// Current buffer.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Data-space rectangle currently shown.
    pub fn limits(&self) -> &VisibleWindow {
        &self.limits
    }

    pub fn scale_factors(&self) -> ScaleFactors {
        self.scale
    }

    /// Progressive-axis coordinate the next sample will be drawn at.
    pub fn sample_index(&self) -> u64 {
        self.data_index
    }

    /// Total pixels scrolled since construction or the last reset.
    pub fn progress_count(&self) -> u64 {
        self.num_progress
    }

    /// Internal clock advanced by [`draw`](Self::draw).
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Pixel/data mapping for the current window.
    pub fn transform(&self) -> CoordTransform {
        CoordTransform::from_window(&self.limits, self.scale)
    }

    /// Push one sample.
    ///
    /// Non-finite values are rejected. In squeeze mode the call fails with
    /// [`GraphError::NumericDecay`], leaving the graph untouched, once making room would push
    /// the progressive scale factor below `min_scale_factor`.
    pub fn add_data(&mut self, value: impl Into<Sample>) -> GraphResult<&mut Self> {
        let Sample(value) = value.into();
        self.push(value)?;
        Ok(self)
    }

    #[tracing::instrument(level = "debug", skip(self), fields(index = self.data_index))]
    fn push(&mut self, value: f64) -> GraphResult<()> {
        if !value.is_finite() {
            return Err(GraphError::validation(format!(
                "sample values must be finite, got {value}"
            )));
        }

        let axis = self.opts.progressive_axis;
        let next_index = self.data_index + 1;
        let overflows = next_index as f64 >= self.limits.bounds(axis)[1];
        let squeeze_by = (overflows && self.opts.progression_mode == ProgressionMode::Squeeze)
            .then(|| self.squeeze_factor(next_index))
            .transpose()?;

        let prev = self.sample_point(self.data_index - 1, self.last_value);
        let next = self.sample_point(self.data_index, value);
        self.pixels = self.runner.run(&self.pixels, &self.add_data_kernel(prev, next))?;
        self.data_index = next_index;
        self.last_value = value;

        if !overflows {
            return Ok(());
        }
        match self.opts.progression_mode {
            ProgressionMode::Overflow => self.scroll(self.scale.get(axis).ceil()),
            ProgressionMode::Squeeze => match squeeze_by {
                Some(factor) => self.squeeze(factor),
                None => Ok(()),
            },
            ProgressionMode::Continuous => Ok(()),
        }
    }

    /// Continuous mode: scroll one pixel if `progress_interval` has elapsed since the last step.
    ///
    /// Returns whether the graph advanced. Always `false` in other modes. Non-finite times
    /// are rejected.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, time: f64) -> GraphResult<bool> {
        if !time.is_finite() {
            return Err(GraphError::validation(format!(
                "tick time must be finite, got {time}"
            )));
        }
        if self.opts.progression_mode != ProgressionMode::Continuous
            || time - self.last_progress < self.opts.progress_interval
        {
            return Ok(false);
        }
        self.scroll(1.0)?;
        self.last_progress = time;
        Ok(true)
    }

    /// Advance the internal clock by `time_step` `num_draws` times, ticking after each step.
    pub fn draw(&mut self, num_draws: u32) -> GraphResult<&mut Self> {
        for _ in 0..num_draws {
            self.time += self.opts.time_step;
            self.tick(self.time)?;
        }
        Ok(self)
    }

    /// Restore counters, clock, scale factors and window to their construction values.
    ///
    /// The buffer is kept; see [`clear`](Self::clear).
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) -> &mut Self {
        self.data_index = 1;
        self.last_value = 0.0;
        self.last_progress = 0.0;
        self.num_progress = 0;
        self.time = 0.0;
        self.scale = self.opts.scale_factors();
        self.limits =
            VisibleWindow::from_view(self.opts.dimensions, self.scale, self.opts.offsets());
        self
    }

    /// Replace the buffer with a blank one (background + axes).
    pub fn clear(&mut self) -> GraphResult<&mut Self> {
        let dims = self.opts.dimensions;
        self.pixels = self.runner.run(
            &self.pixels,
            &BlankKernel::new(dims, self.opts.bg_color, self.axes),
        )?;
        Ok(self)
    }

    fn sample_point(&self, index: u64, value: f64) -> Point {
        let i = index as f64;
        match self.opts.progressive_axis {
            Axis::X => Point::new(i, value),
            Axis::Y => Point::new(value, i),
        }
    }

    fn add_data_kernel(&self, prev: Point, next: Point) -> AddDataKernel {
        let dims = self.opts.dimensions;
        let transform = self.transform();
        AddDataKernel::new(
            PlotKernel::new(
                dims,
                transform,
                next,
                self.opts.brush_size,
                self.opts.brush_color,
            ),
            InterpolateKernel::new(
                dims,
                transform,
                prev,
                next,
                self.opts.line_thickness,
                self.opts.line_color,
                self.opts.line_style,
            ),
        )
    }

    fn squeeze_factor(&self, index: u64) -> GraphResult<f64> {
        let axis = self.opts.progressive_axis;
        let i = index as f64;
        let factor = i / (i + 1.0);
        let scaled = self.scale.get(axis) * factor;
        if scaled < self.opts.min_scale_factor {
            return Err(GraphError::numeric_decay(format!(
                "squeezing {axis:?} scale factor to {scaled:e} would drop below minScaleFactor {:e}",
                self.opts.min_scale_factor
            )));
        }
        Ok(factor)
    }

    /// Scroll by `progress` whole pixels. The window moves by the full amount; the pixel shift
    /// saturates at the buffer extent, past which everything is revealed anyway.
    fn scroll(&mut self, progress: f64) -> GraphResult<()> {
        let axis = self.opts.progressive_axis;
        let extent = self.opts.dimensions.extent(axis);
        let kernel = ScrollKernel::new(
            self.opts.dimensions,
            axis,
            progress.min(f64::from(extent)) as u32,
            self.opts.bg_color,
            self.axes,
        );
        self.pixels = self.runner.run(&self.pixels, &kernel)?;
        self.limits.shift(axis, progress / self.scale.get(axis));
        self.num_progress = self.num_progress.saturating_add(progress as u64);
        tracing::debug!(
            ?axis,
            progress,
            lo = self.limits.bounds(axis)[0],
            hi = self.limits.bounds(axis)[1],
            "scrolled"
        );
        Ok(())
    }

    fn squeeze(&mut self, factor: f64) -> GraphResult<()> {
        let axis = self.opts.progressive_axis;
        let origin = self.transform().origin_pixel();
        let origin = match axis {
            Axis::X => origin.x,
            Axis::Y => origin.y,
        };
        let kernel = SqueezeKernel::new(
            self.opts.dimensions,
            axis,
            factor,
            origin,
            self.opts.bg_color,
            self.axes,
        );
        self.pixels = self.runner.run(&self.pixels, &kernel)?;
        *self.scale.get_mut(axis) *= factor;
        self.limits.squeeze(axis, factor);
        tracing::debug!(
            ?axis,
            factor,
            scale = self.scale.get(axis),
            hi = self.limits.bounds(axis)[1],
            "squeezed"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/line_graph.rs"]
mod tests;
