use crate::foundation::core::{Color, Dimensions, Point, Vec2};
use crate::render::buffer::PixelBuffer;
use crate::render::dispatch::PixelKernel;
use crate::transform::coords::CoordTransform;

/// Rasterization variant used for line segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineStyle {
    /// Pixels are either fully `line_color` or untouched.
    HardEdge,
    /// 3x3 box-filtered coverage blended over the prior color.
    #[default]
    AntiAliased,
}

/// Offsets of the 3x3 supersampling window, in pixels.
const AA_TAPS: [f64; 3] = [-1.0, 0.0, 1.0];

/// Data-space geometry of one segment, precomputed once per kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Segment {
    p1: Point,
    p2: Point,
    min: Point,
    max: Point,
    // Zero for a degenerate segment; the corridor test is skipped then.
    len: f64,
    sin: f64,
    cos: f64,
}

impl Segment {
    pub(crate) fn new(p1: Point, p2: Point) -> Self {
        let d = p2 - p1;
        let len2 = d.hypot2();
        let (len, sin, cos) = if len2 == 0.0 {
            (0.0, 0.0, 0.0)
        } else {
            let len = len2.sqrt();
            (len, (d.y / len).abs(), (d.x / len).abs())
        };
        Self {
            p1,
            p2,
            min: Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point::new(p1.x.max(p2.x), p1.y.max(p2.y)),
            len,
            sin,
            cos,
        }
    }

    pub(crate) fn is_degenerate(&self) -> bool {
        self.len == 0.0
    }

    /// Corridor or end-cap test at half thickness `t`.
    #[inline]
    pub(crate) fn covers(&self, p: Point, t: f64) -> bool {
        self.in_corridor(p, t) || self.in_caps(p, t)
    }

    /// Distance from the infinite line through the segment, bounded to the segment's
    /// bounding box grown by `t * |sin|` horizontally and `t * |cos|` vertically.
    #[inline]
    fn in_corridor(&self, p: Point, t: f64) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let (x1, y1) = (self.p1.x, self.p1.y);
        let (x2, y2) = (self.p2.x, self.p2.y);
        let eqn = p.x * (y1 - y2) - x1 * (y1 - y2) - p.y * (x1 - x2) + y1 * (x1 - x2);
        let dist = eqn.abs() / self.len;

        dist <= t
            && p.x <= self.max.x + t * self.sin
            && p.x >= self.min.x - t * self.sin
            && p.y <= self.max.y + t * self.cos
            && p.y >= self.min.y - t * self.cos
    }

    #[inline]
    fn in_caps(&self, p: Point, t: f64) -> bool {
        let t2 = t * t;
        (p - self.p1).hypot2() <= t2 || (p - self.p2).hypot2() <= t2
    }
}

/// Draws a thick line segment between two data points.
///
/// `thickness` is a half-width in data units. The hard-edge variant maps every pixel into data
/// space; the anti-aliased variant maps the first endpoint into pixel space once and rescales
/// per-pixel deltas by the reciprocal scale factors, which is the same geometry.
#[derive(Clone, Copy, Debug)]
pub struct InterpolateKernel {
    dims: Dimensions,
    transform: CoordTransform,
    segment: Segment,
    thickness: f64,
    color: Color,
    style: LineStyle,
    anchor_px: Point,
    pad: f64,
}

impl InterpolateKernel {
    pub fn new(
        dims: Dimensions,
        transform: CoordTransform,
        p1: Point,
        p2: Point,
        thickness: f64,
        color: Color,
        style: LineStyle,
    ) -> Self {
        let inv = transform.inv_scale();
        Self {
            dims,
            transform,
            segment: Segment::new(p1, p2),
            thickness,
            color,
            style,
            anchor_px: transform.data_to_pixel(p1),
            // One pixel, in data units, along the coarser axis.
            pad: inv.x.max(inv.y),
        }
    }

    pub fn style(&self) -> LineStyle {
        self.style
    }

    /// Line coverage of pixel `(x, y)`.
    ///
    /// `None` means the pixel is outside the candidate region and keeps its prior color.
    /// Hard-edge candidates always report `1.0`. Anti-aliased candidates report the fraction
    /// of the 3x3 neighborhood within the true thickness, in ninths; this can be `0.0` for
    /// pixels that are near the line but not on it.
    pub fn intensity(&self, x: u32, y: u32) -> Option<f32> {
        match self.style {
            LineStyle::HardEdge => {
                let p = self.transform.pixel_to_data(f64::from(x), f64::from(y));
                self.segment.covers(p, self.thickness).then_some(1.0)
            }
            LineStyle::AntiAliased => self.aa_intensity(x, y),
        }
    }

    fn aa_intensity(&self, x: u32, y: u32) -> Option<f32> {
        let inv = self.transform.inv_scale();
        let delta = Vec2::new(
            (f64::from(x) - self.anchor_px.x) * inv.x,
            (f64::from(y) - self.anchor_px.y) * inv.y,
        );
        let p = self.segment.p1 + delta;

        if !self.segment.covers(p, self.thickness + self.pad) {
            return None;
        }

        let mut hits = 0u8;
        for dy in AA_TAPS {
            for dx in AA_TAPS {
                let n = p + Vec2::new(dx * inv.x, dy * inv.y);
                if self.segment.covers(n, self.thickness) {
                    hits += 1;
                }
            }
        }
        Some(f32::from(hits) / 9.0)
    }

    pub(crate) fn shade_with(&self, prior: Color, x: u32, y: u32) -> Color {
        match (self.intensity(x, y), self.style) {
            (None, _) => prior,
            (Some(_), LineStyle::HardEdge) => self.color,
            (Some(i), LineStyle::AntiAliased) => prior.mix(self.color, i),
        }
    }
}

impl PixelKernel for InterpolateKernel {
    fn name(&self) -> &'static str {
        match self.style {
            LineStyle::HardEdge => "interpolate",
            LineStyle::AntiAliased => "interpolate_aa",
        }
    }

    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn shade(&self, prior: &PixelBuffer, x: u32, y: u32) -> Color {
        self.shade_with(prior.get(x, y), x, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernels/interpolate.rs"]
mod tests;
