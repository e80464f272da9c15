use crate::foundation::error::{GraphError, GraphResult};

pub use kurbo::{Point, Vec2};

/// Pixel buffer size. Fixed for the lifetime of a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create validated dimensions with both sides `> 0`.
    pub fn new(width: u32, height: u32) -> GraphResult<Self> {
        let dims = Self { width, height };
        dims.validate()?;
        Ok(dims)
    }

    /// Reject empty buffers.
    pub fn validate(self) -> GraphResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GraphError::validation(format!(
                "dimensions must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Number of pixels in a buffer of this size.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Extent along `axis` in pixels.
    pub fn extent(self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

impl From<[u32; 2]> for Dimensions {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}

impl From<Dimensions> for [u32; 2] {
    fn from(d: Dimensions) -> Self {
        [d.width, d.height]
    }
}

/// Linear RGB color, channels nominally in `[0, 1]`.
///
/// Channels are never clamped by the kernels; out-of-range values propagate as-is and only
/// saturate when exported with [`Color::to_rgb8`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Color(pub [f32; 3]);

impl Color {
    /// Black (`[0, 0, 0]`).
    pub const BLACK: Self = Self([0.0, 0.0, 0.0]);
    /// White (`[1, 1, 1]`).
    pub const WHITE: Self = Self([1.0, 1.0, 1.0]);

    /// Build a color from its channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    /// Red channel.
    pub fn r(self) -> f32 {
        self.0[0]
    }

    /// Green channel.
    pub fn g(self) -> f32 {
        self.0[1]
    }

    /// Blue channel.
    pub fn b(self) -> f32 {
        self.0[2]
    }

    /// `t * toward + (1 - t) * self`, per channel.
    pub fn mix(self, toward: Self, t: f32) -> Self {
        let inv = 1.0 - t;
        Self([
            t * toward.0[0] + inv * self.0[0],
            t * toward.0[1] + inv * self.0[1],
            t * toward.0[2] + inv * self.0[2],
        ])
    }

    /// Quantize to 8-bit channels, saturating at the ends of the range.
    pub fn to_rgb8(self) -> [u8; 3] {
        fn q(c: f32) -> u8 {
            (c * 255.0).round().clamp(0.0, 255.0) as u8
        }
        [q(self.0[0]), q(self.0[1]), q(self.0[2])]
    }
}

impl From<[f32; 3]> for Color {
    fn from(c: [f32; 3]) -> Self {
        Self(c)
    }
}

/// Graph axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal axis.
    #[default]
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// The perpendicular axis.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// How the visible window reacts once data reaches its edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressionMode {
    /// Scroll only once the window is completely filled.
    #[default]
    Overflow,
    /// Scroll one pixel every `progress_interval` time units, regardless of data.
    #[serde(alias = "continous")]
    Continuous,
    /// Never scroll; rescale existing content to make room.
    Squeeze,
}

/// Pixels per data unit along each axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScaleFactors {
    /// Pixels per data unit on the x axis.
    pub x: f64,
    /// Pixels per data unit on the y axis.
    pub y: f64,
}

impl ScaleFactors {
    /// Scale factor along `axis`.
    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Mutable scale factor along `axis`.
    pub fn get_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

/// Origin offsets as percentages (`0..=100`) of the buffer size.
///
/// `x` positions the x axis, so it shifts the origin vertically; `y` positions the y axis and
/// shifts the origin horizontally.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Offsets {
    /// Height percentage at which the x axis sits.
    pub x: f64,
    /// Width percentage at which the y axis sits.
    pub y: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
