//! realgraph renders streaming numeric data as a scrolling or squeezing line graph.
//!
//! Every rendering step is a *kernel*: a pure function evaluated independently for each pixel
//! of a fixed-size [`PixelBuffer`], reading the previous buffer and returning a new one.
//! [`KernelRunner`] dispatches kernels on a rayon thread pool (or sequentially, with identical
//! output).
//!
//! # Pipeline overview
//!
//! 1. **Push**: [`LineGraph::add_data`] maps the previous and the new sample into data space.
//! 2. **Draw**: an [`AddDataKernel`] pass draws the connecting segment ([`InterpolateKernel`])
//!    and the brush disc ([`PlotKernel`]).
//! 3. **Progress**: once samples reach the end of the [`VisibleWindow`] the graph either
//!    scrolls ([`ScrollKernel`]) or rescales ([`SqueezeKernel`]) depending on its
//!    [`ProgressionMode`]. Continuous graphs scroll from [`LineGraph::tick`] instead.
//!
//! Color channels are never clamped by the kernels; out-of-range colors propagate until
//! [`PixelBuffer::to_rgba8`] saturates them on export.
#![forbid(unsafe_code)]

mod foundation;
mod graph;
mod kernels;
mod render;
mod transform;

pub use foundation::core::{
    Axis, Color, Dimensions, Offsets, Point, ProgressionMode, ScaleFactors, Vec2,
};
pub use foundation::error::{GraphError, GraphResult};
pub use graph::line_graph::{LineGraph, Sample};
pub use graph::opts::GraphOpts;
pub use kernels::add_data::AddDataKernel;
pub use kernels::blank::{AxisLines, BlankKernel};
pub use kernels::interpolate::{InterpolateKernel, LineStyle};
pub use kernels::plot::PlotKernel;
pub use kernels::scroll::ScrollKernel;
pub use kernels::squeeze::SqueezeKernel;
pub use render::buffer::PixelBuffer;
pub use render::dispatch::{KernelRunner, PixelKernel, Threading};
pub use transform::coords::{CoordTransform, VisibleWindow};
