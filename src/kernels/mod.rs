//! Per-pixel kernels. Every kernel reads the prior buffer and writes exactly one output pixel.

pub(crate) mod add_data;
pub(crate) mod blank;
pub(crate) mod interpolate;
pub(crate) mod plot;
pub(crate) mod scroll;
pub(crate) mod squeeze;
