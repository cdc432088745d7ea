//! The per-element rewrite rules.
//!
//! Every rule produces the opening tag to emit and, when the element was
//! renamed, the name its end tag has to use.

use rand::RngCore;

use super::tag::StartTag;
use crate::codec::{format_points, parse_number, parse_optional_points, parse_points};
use crate::classify::is_straight_path_data;
use crate::errors::WaggleError;
use crate::log::warn;
use crate::types::{Point, PointSequence};
use crate::wobble::Wobble;

const LINE_COORDINATES: [&str; 4] = ["x1", "y1", "x2", "y2"];
const RECT_GEOMETRY: [&str; 4] = ["x", "y", "width", "height"];
/// Attributes left off the polygon a `rect` becomes.
const RECT_ONLY_ATTRIBUTES: [&str; 6] = ["x", "y", "width", "height", "rx", "ry"];

/// Output of one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Rewritten {
    pub markup: String,
    /// Name for the matching end tag, if the element changed type
    pub rename: Option<&'static str>,
}

impl Rewritten {
    fn kept(markup: String) -> Self {
        Self {
            markup,
            rename: None,
        }
    }

    fn renamed(markup: String, rename: &'static str) -> Self {
        Self {
            markup,
            rename: Some(rename),
        }
    }
}

/// `polyline` / `polygon`: wobble the `points` in place.
pub fn rewrite_poly(
    tag: &StartTag,
    wobble: &Wobble,
    rng: &mut dyn RngCore,
) -> Result<Rewritten, WaggleError> {
    let points = parse_optional_points(tag.attribute("points"));
    if points.is_empty() {
        warn!(element = %tag.name, "no points to wobble, keeping element as is");
        return Ok(pass_through(tag));
    }
    let wobbled = format_points(&wobble.resample(&points, rng)?);
    Ok(Rewritten::kept(tag.render_as(
        &tag.name,
        &["points"],
        &[("points", &wobbled)],
    )))
}

/// `line`: becomes a two-point `polyline`.
pub fn rewrite_line(
    tag: &StartTag,
    wobble: &Wobble,
    rng: &mut dyn RngCore,
) -> Result<Rewritten, WaggleError> {
    let [x1, y1, x2, y2] = LINE_COORDINATES.map(|name| coordinate(tag, name));
    let points = vec![Point::new(x1, y1), Point::new(x2, y2)];
    let wobbled = format_points(&wobble.resample(&points, rng)?);
    Ok(Rewritten::renamed(
        tag.render_as("polyline", &LINE_COORDINATES, &[("points", &wobbled)]),
        "polyline",
    ))
}

/// `rect`: becomes a `polygon` through its corners, clockwise from the top left.
pub fn rewrite_rect(
    tag: &StartTag,
    wobble: &Wobble,
    rng: &mut dyn RngCore,
) -> Result<Rewritten, WaggleError> {
    let [x, y, width, height] = RECT_GEOMETRY.map(|name| coordinate(tag, name));
    let wobbled = format_points(&wobble.resample(&rect_corners(x, y, width, height), rng)?);
    Ok(Rewritten::renamed(
        tag.render_as("polygon", &RECT_ONLY_ATTRIBUTES, &[("points", &wobbled)]),
        "polygon",
    ))
}

/// `path`: straight ones become a `polyline`, curved ones are left alone.
pub fn rewrite_path(
    tag: &StartTag,
    wobble: &Wobble,
    rng: &mut dyn RngCore,
) -> Result<Rewritten, WaggleError> {
    let Some(d) = tag.attribute("d").filter(|d| is_straight_path_data(d)) else {
        return Ok(pass_through(tag));
    };
    let wobbled = format_points(&wobble.resample(&parse_points(d), rng)?);
    Ok(Rewritten::renamed(
        tag.render_as("polyline", &["d"], &[("points", &wobbled)]),
        "polyline",
    ))
}

/// `text`: force the configured font onto it.
pub fn rewrite_text(tag: &StartTag, font_family: &str, font_size: &str) -> Rewritten {
    Rewritten::kept(tag.render_as(
        &tag.name,
        &["font-family", "font-size"],
        &[("font-family", font_family), ("font-size", font_size)],
    ))
}

/// Anything else: re-emit as it came.
pub fn pass_through(tag: &StartTag) -> Rewritten {
    Rewritten::kept(tag.render())
}

fn coordinate(tag: &StartTag, name: &str) -> f64 {
    tag.attribute(name).map(parse_number).unwrap_or(f64::NAN)
}

fn rect_corners(x: f64, y: f64, width: f64, height: f64) -> PointSequence {
    vec![
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn still() -> StepRng {
        StepRng::new(0, 0)
    }

    fn calm() -> Wobble {
        Wobble::new(10.0, 0.0)
    }

    #[test]
    fn poly_replaces_points_last() {
        let tag = StartTag::new("polyline")
            .with_attribute("points", "0,0 20,0")
            .with_attribute("stroke", "black");
        let out = rewrite_poly(&tag, &calm(), &mut still()).unwrap();
        assert_eq!(
            out.markup,
            r#"<polyline stroke="black" points="0,0 10,0 20,0">"#
        );
        assert_eq!(out.rename, None);
    }

    #[test]
    fn poly_without_points_is_kept() {
        let tag = StartTag::new("polygon").with_attribute("fill", "red");
        let out = rewrite_poly(&tag, &calm(), &mut still()).unwrap();
        assert_eq!(out.markup, r#"<polygon fill="red">"#);
    }

    #[test]
    fn line_becomes_polyline() {
        let tag = StartTag::new("line")
            .with_prefix("svg")
            .with_attribute("x1", "0")
            .with_attribute("y1", "0")
            .with_attribute("x2", "0")
            .with_attribute("y2", "20")
            .with_attribute("stroke-width", "2");
        let out = rewrite_line(&tag, &calm(), &mut still()).unwrap();
        assert_eq!(
            out.markup,
            r#"<svg:polyline stroke-width="2" points="0,0 0,10 0,20">"#
        );
        assert_eq!(out.rename, Some("polyline"));
    }

    #[test]
    fn rect_becomes_polygon() {
        let tag = StartTag::new("rect")
            .with_attribute("x", "0")
            .with_attribute("y", "0")
            .with_attribute("width", "10")
            .with_attribute("height", "10")
            .with_attribute("fill", "none");
        let out = rewrite_rect(&tag, &calm(), &mut still()).unwrap();
        assert_eq!(
            out.markup,
            r#"<polygon fill="none" points="0,0 10,0 10,10 0,10">"#
        );
        assert_eq!(out.rename, Some("polygon"));
    }

    #[test]
    fn rect_corner_radii_are_dropped() {
        let tag = StartTag::new("rect")
            .with_attribute("x", "0")
            .with_attribute("y", "0")
            .with_attribute("width", "5")
            .with_attribute("height", "5")
            .with_attribute("rx", "2")
            .with_attribute("ry", "1")
            .with_attribute("stroke", "black");
        let out = rewrite_rect(&tag, &calm(), &mut still()).unwrap();
        assert_eq!(
            out.markup,
            r#"<polygon stroke="black" points="0,0 5,0 5,5 0,5">"#
        );
    }

    #[test]
    fn straight_path_becomes_polyline() {
        let tag = StartTag::new("path")
            .with_attribute("d", "M0,0 C5,0 10,0")
            .with_attribute("stroke", "black");
        let out = rewrite_path(&tag, &calm(), &mut still()).unwrap();
        assert_eq!(
            out.markup,
            r#"<polyline stroke="black" points="0,0 5,0 10,0">"#
        );
        assert_eq!(out.rename, Some("polyline"));
    }

    #[test]
    fn curved_path_is_kept() {
        let tag = StartTag::new("path").with_attribute("d", "M0,0 C5,5 10,0");
        let out = rewrite_path(&tag, &calm(), &mut still()).unwrap();
        assert_eq!(out.markup, r#"<path d="M0,0 C5,5 10,0">"#);
        assert_eq!(out.rename, None);
    }

    #[test]
    fn path_without_data_is_kept() {
        let tag = StartTag::new("path").with_attribute("fill", "red");
        let out = rewrite_path(&tag, &calm(), &mut still()).unwrap();
        assert_eq!(out.markup, r#"<path fill="red">"#);
    }

    #[test]
    fn text_gets_configured_font() {
        let tag = StartTag::new("text")
            .with_attribute("font-family", "X")
            .with_attribute("x", "1")
            .with_attribute("y", "2");
        let out = rewrite_text(&tag, "TestFont", "10");
        assert_eq!(
            out.markup,
            r#"<text x="1" y="2" font-family="TestFont" font-size="10">"#
        );
    }

    #[test]
    fn missing_coordinates_are_nan() {
        let tag = StartTag::new("line").with_attribute("x1", "oops");
        assert!(coordinate(&tag, "x1").is_nan());
        assert!(coordinate(&tag, "y1").is_nan());
    }
}
