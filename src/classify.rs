//! Shape classification: which rewrite rule applies to a start tag.

use crate::codec::parse_points;
use crate::rewrite::tag::{Attribute, StartTag, attribute_value};

/// Cross-product tolerance for collinearity in [`is_straight_path_data`].
pub const COLLINEAR_EPSILON: f64 = 0.1;

/// The rewrite applied to an element, in dispatch precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteRule {
    /// `polyline` / `polygon`: resample `points` in place
    Poly,
    /// `line`: becomes a `polyline`
    Line,
    /// `rect`: becomes a `polygon`
    Rect,
    /// `path`: becomes a `polyline` when straight, else unchanged
    Path,
    /// `text`: configured typography forced onto it
    Text,
    /// Everything else
    PassThrough,
}

/// Pick the rule for `tag`. `text` is only rewritten when a font family is configured.
pub fn classify(tag: &StartTag, fonts_configured: bool) -> RewriteRule {
    let name = tag.name.as_str();
    let attrs = tag.attributes.as_slice();

    if is_polyline_or_polygon(name, attrs) {
        RewriteRule::Poly
    } else if is_line(name) {
        RewriteRule::Line
    } else if is_rectangle(name, attrs) {
        RewriteRule::Rect
    } else if is_path(name) {
        RewriteRule::Path
    } else if fonts_configured && is_text(name) {
        RewriteRule::Text
    } else {
        RewriteRule::PassThrough
    }
}

/// Only `stroke="none"` hides a shape.
pub fn is_visible(attributes: &[Attribute]) -> bool {
    attribute_value(attributes, "stroke") != Some("none")
}

pub fn is_polyline_or_polygon(name: &str, attributes: &[Attribute]) -> bool {
    is_visible(attributes)
        && (name.eq_ignore_ascii_case("polyline") || name.eq_ignore_ascii_case("polygon"))
}

/// Exact, case-sensitive match on `rect`.
pub fn is_rectangle(name: &str, attributes: &[Attribute]) -> bool {
    is_visible(attributes) && name == "rect"
}

pub fn is_line(name: &str) -> bool {
    name.eq_ignore_ascii_case("line")
}

pub fn is_path(name: &str) -> bool {
    name.eq_ignore_ascii_case("path")
}

pub fn is_text(name: &str) -> bool {
    name.eq_ignore_ascii_case("text")
}

/// Whether path data describes a single straight segment.
///
/// Arcs and quadratic curves are never straight. Otherwise every point between
/// the first and the last must lie on the segment joining them: collinear
/// within [`COLLINEAR_EPSILON`], not behind the start, not past the end.
/// Data without any point is not straight.
pub fn is_straight_path_data(d: &str) -> bool {
    if d.chars().any(|c| matches!(c, 'a' | 'A' | 'q' | 'Q')) {
        return false;
    }

    let points = parse_points(d);
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return false;
    };

    let start = first.to_vec();
    let along = last.to_vec() - start;
    let squared_len = along.length_squared();

    let between = points
        .get(1..points.len().saturating_sub(1))
        .unwrap_or_default();

    between.iter().all(|p| {
        let offset = p.to_vec() - start;
        let cross = offset.perp_dot(along);
        let dot = offset.dot(along);
        !(cross.abs() > COLLINEAR_EPSILON || dot < 0.0 || dot > squared_len)
    })
}
