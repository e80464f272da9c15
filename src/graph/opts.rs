use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::core::{Axis, Color, Dimensions, Offsets, ProgressionMode, ScaleFactors};
use crate::foundation::error::{GraphError, GraphResult};
use crate::kernels::interpolate::LineStyle;
use crate::render::dispatch::Threading;

/// Construction-time configuration of a [`LineGraph`](crate::LineGraph).
///
/// Every field has a default, so a JSON config only needs the fields it changes. Field names
/// are camelCase in JSON (`xScaleFactor`, `progressionMode`, ...).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GraphOpts {
    /// Buffer size `[width, height]`. Default `[800, 600]`.
    pub dimensions: Dimensions,
    /// Pixels per data unit along x. Default `10`.
    pub x_scale_factor: f64,
    /// Pixels per data unit along y. Default `1`.
    pub y_scale_factor: f64,
    /// Height percentage where the x axis sits. Default `10`.
    pub x_offset: f64,
    /// Width percentage where the y axis sits. Default `10`.
    pub y_offset: f64,
    /// Default black.
    pub bg_color: Color,
    /// Default white.
    pub axes_color: Color,
    /// Draw axis lines on blank buffers. Default `true`.
    pub draw_axes: bool,

    /// Axis that advances with each sample. Default `x`.
    pub progressive_axis: Axis,
    /// Default `overflow`.
    pub progression_mode: ProgressionMode,
    /// Time units between continuous-mode steps. Default `1`.
    pub progress_interval: f64,

    /// Radius in pixels of the disc stamped at each sample. Default `1`.
    pub brush_size: f64,
    /// Default white.
    pub brush_color: Color,
    /// Half-width in data units of the connecting segments. Default `0.05`.
    pub line_thickness: f64,
    /// Default dark green `[0, 0.5, 0]`.
    pub line_color: Color,
    /// Default `antiAliased`.
    pub line_style: LineStyle,

    /// Clock increment per [`LineGraph::draw`](crate::LineGraph::draw) call. Default `1/60`.
    pub time_step: f64,
    /// Squeezing below this scale factor fails instead of drifting toward zero.
    /// Default `1e-9`.
    pub min_scale_factor: f64,
    pub threading: Threading,
}

impl Default for GraphOpts {
    fn default() -> Self {
        Self {
            dimensions: Dimensions {
                width: 800,
                height: 600,
            },
            x_scale_factor: 10.0,
            y_scale_factor: 1.0,
            x_offset: 10.0,
            y_offset: 10.0,
            bg_color: Color::BLACK,
            axes_color: Color::WHITE,
            draw_axes: true,
            progressive_axis: Axis::X,
            progression_mode: ProgressionMode::Overflow,
            progress_interval: 1.0,
            brush_size: 1.0,
            brush_color: Color::WHITE,
            line_thickness: 0.05,
            line_color: Color::rgb(0.0, 0.5, 0.0),
            line_style: LineStyle::AntiAliased,
            time_step: 1.0 / 60.0,
            min_scale_factor: 1e-9,
            threading: Threading::default(),
        }
    }
}

impl GraphOpts {
    /// Parse a JSON config.
    pub fn from_json_str(s: &str) -> GraphResult<Self> {
        serde_json::from_str(s).map_err(|e| GraphError::serde(format!("parse graph opts: {e}")))
    }

    /// Read a JSON config from disk.
    pub fn from_path(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GraphError::validation(format!("open graph opts '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            GraphError::serde(format!("parse graph opts '{}': {e}", path.display()))
        })
    }

    pub fn scale_factors(&self) -> ScaleFactors {
        ScaleFactors {
            x: self.x_scale_factor,
            y: self.y_scale_factor,
        }
    }

    pub fn offsets(&self) -> Offsets {
        Offsets {
            x: self.x_offset,
            y: self.y_offset,
        }
    }

    /// Check every numeric option. Colors are deliberately not range-checked.
    pub fn validate(&self) -> GraphResult<()> {
        self.dimensions.validate()?;

        positive("xScaleFactor", self.x_scale_factor)?;
        positive("yScaleFactor", self.y_scale_factor)?;
        percentage("xOffset", self.x_offset)?;
        percentage("yOffset", self.y_offset)?;
        positive("progressInterval", self.progress_interval)?;
        non_negative("brushSize", self.brush_size)?;
        non_negative("lineThickness", self.line_thickness)?;
        positive("timeStep", self.time_step)?;
        positive("minScaleFactor", self.min_scale_factor)?;

        if self.x_scale_factor < self.min_scale_factor || self.y_scale_factor < self.min_scale_factor
        {
            return Err(GraphError::validation(
                "scale factors must be >= minScaleFactor",
            ));
        }
        if let Some(n) = self.threading.threads
            && n == 0
        {
            return Err(GraphError::validation(
                "threading.threads must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

fn positive(name: &str, v: f64) -> GraphResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(GraphError::validation(format!(
            "{name} must be finite and > 0, got {v}"
        )));
    }
    Ok(())
}

fn non_negative(name: &str, v: f64) -> GraphResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(GraphError::validation(format!(
            "{name} must be finite and >= 0, got {v}"
        )));
    }
    Ok(())
}

fn percentage(name: &str, v: f64) -> GraphResult<()> {
    if !(0.0..=100.0).contains(&v) {
        return Err(GraphError::validation(format!(
            "{name} must be within 0..=100, got {v}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/graph/opts.rs"]
mod tests;
