//! Geometric primitives shared by the codec, the classifier and the resampler.

use std::fmt;

use glam::DVec2;

/// Pixels per inch, the CSS reference ratio SVG user agents use.
pub const PX_PER_INCH: f64 = 96.0;

/// A 2-D coordinate as read from (or written to) SVG geometry attributes.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// View as a glam vector for the math.
    #[inline]
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.to_vec().distance(other.to_vec())
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

/// Renders as `x,y`, the pair syntax of the `points` attribute.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Ordered point list; the order is the drawing order.
pub type PointSequence = Vec<Point>;

/// User unit of a document, taken from the root element's `width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Px,
    In,
}

impl Unit {
    /// `in` when the declared width ends with `in`, `px` otherwise (including no width).
    pub fn from_width(width: Option<&str>) -> Unit {
        match width {
            Some(w) if w.ends_with("in") => Unit::In,
            _ => Unit::Px,
        }
    }

    /// Express a pixel quantity in this unit.
    pub fn from_px(self, px: f64) -> f64 {
        match self {
            Unit::Px => px,
            Unit::In => crate::codec::to_inches(px),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::In => "in",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
