//! Point-list codec for `points` and straight `d` attributes.
//!
//! Parsing is lenient: commas and whitespace are interchangeable,
//! command letters are dropped, and a token that is not a number becomes NaN
//! instead of failing the whole document.

use crate::types::{PX_PER_INCH, Point, PointSequence};

/// Parse `"x,y x,y …"` (or path data such as `"M0,0 C5,0 10,0"`) into points.
///
/// Consecutive numeric tokens are paired; a trailing unpaired x gets a NaN y.
pub fn parse_points(text: &str) -> PointSequence {
    let cleared: String = text
        .chars()
        .map(|c| if c == ',' || c.is_ascii_alphabetic() { ' ' } else { c })
        .collect();

    let tokens: Vec<f64> = cleared.split_whitespace().map(parse_number).collect();

    tokens
        .chunks(2)
        .map(|pair| Point::new(pair[0], pair.get(1).copied().unwrap_or(f64::NAN)))
        .collect()
}

/// Like [`parse_points`] for an attribute that may be missing.
pub fn parse_optional_points(text: Option<&str>) -> PointSequence {
    text.map(parse_points).unwrap_or_default()
}

/// Parse one numeric token, NaN when it is not a number.
pub fn parse_number(token: &str) -> f64 {
    token.trim().parse().unwrap_or(f64::NAN)
}

/// Render points as `x,y` pairs joined by single spaces.
pub fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pixels to inches.
pub fn to_inches(px: f64) -> f64 {
    px / PX_PER_INCH
}

/// Inches to pixels.
pub fn to_pixels(inches: f64) -> f64 {
    inches * PX_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_pairs() {
        assert_eq!(
            parse_points("45,54.3 23,43"),
            vec![Point::new(45.0, 54.3), Point::new(23.0, 43.0)]
        );
    }

    #[test]
    fn parses_space_separated_pairs() {
        assert_eq!(
            parse_points("45 54.3  23\t43"),
            vec![Point::new(45.0, 54.3), Point::new(23.0, 43.0)]
        );
    }

    #[test]
    fn parses_negative_numbers() {
        assert_eq!(
            parse_points("45,-54.4 23,-43"),
            vec![Point::new(45.0, -54.4), Point::new(23.0, -43.0)]
        );
    }

    #[test]
    fn strips_path_commands() {
        assert_eq!(
            parse_points("M245.84,-45C262.291,-45 280.343,-45 295.875,-45"),
            vec![
                Point::new(245.84, -45.0),
                Point::new(262.291, -45.0),
                Point::new(280.343, -45.0),
                Point::new(295.875, -45.0),
            ]
        );
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        assert!(parse_points("").is_empty());
        assert!(parse_points("   ").is_empty());
        assert!(parse_optional_points(None).is_empty());
    }

    #[test]
    fn garbage_becomes_nan() {
        let points = parse_points("1,# 3");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].x, 1.0);
        assert!(points[0].y.is_nan());
        assert_eq!(points[1].x, 3.0);
        assert!(points[1].y.is_nan());
    }

    #[test]
    fn formats_pairs() {
        let points = vec![Point::new(45.0, 54.3), Point::new(23.0, 43.0)];
        assert_eq!(format_points(&points), "45,54.3 23,43");
        assert_eq!(format_points(&[]), "");
    }

    #[test]
    fn unit_conversions() {
        assert_eq!(to_inches(96.0), 1.0);
        assert_eq!(to_pixels(0.5), 48.0);
        assert_eq!(to_inches(1.5), 0.015625);
    }
}
