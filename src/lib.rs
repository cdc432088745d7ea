//! Make SVG drawings look hand-drawn.
//!
//! Straight geometry (`line`, `rect`, `polyline`, `polygon` and straight
//! `path`s) is resampled into short segments whose points are randomly nudged,
//! so strokes come out slightly wobbly. Curves and everything else pass
//! through.
//!
//! ```
//! use waggly_svg::{Config, waggle};
//!
//! let config = Config::waggly().with_seed(1);
//! let svg = waggle(r#"<svg><line x1="0" y1="0" x2="50" y2="0"/></svg>"#, &config).unwrap();
//! assert!(svg.starts_with(r#"<svg><polyline points="0,0 "#));
//! ```

pub mod classify;
pub mod codec;
pub mod config;
pub mod errors;
pub mod events;
pub mod log;
pub mod rewrite;
pub mod transformer;
pub mod types;
pub mod wobble;

pub use config::Config;
pub use errors::WaggleError;
pub use transformer::{Transformer, create};
pub use types::{Point, PointSequence, Unit};
pub use wobble::Wobble;

use rand::RngCore;

/// Transform SVG markup.
///
/// Returns the input unchanged when `config` is not waggly.
pub fn waggle(source: &str, config: &Config) -> Result<String, WaggleError> {
    if !config.is_waggly() {
        return Ok(source.to_string());
    }
    let mut rng = transformer::random_source(config);
    waggle_with_rng(source, config, rng.as_mut())
}

/// Like [`waggle`], drawing the wobble from `rng`.
///
/// The random source is used even when `config` carries a seed.
pub fn waggle_with_rng(
    source: &str,
    config: &Config,
    rng: &mut dyn RngCore,
) -> Result<String, WaggleError> {
    if !config.is_waggly() {
        return Ok(source.to_string());
    }
    rewrite::rewrite_document(transformer::INPUT_NAME, source, config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn calm() -> Config {
        Config::waggly().with_wobble_size(0.0)
    }

    #[test]
    fn disabled_is_identity() {
        let input = "<svg>\n  <rect x=\"0\" y=\"0\" width=\"5\" height=\"5\"/>\n</svg>\n";
        assert_eq!(waggle(input, &Config::new()).unwrap(), input);
    }

    #[test]
    fn polyline_equal_to_interval() {
        let out = waggle_with_rng(
            r#"<polyline points="0,0 10,0" stroke="black"/>"#,
            &calm(),
            &mut StepRng::new(0, 0),
        )
        .unwrap();
        assert_eq!(
            out,
            r#"<polyline stroke="black" points="0,0 10,0"></polyline>"#
        );
    }

    #[test]
    fn invisible_polyline_is_untouched() {
        let out = waggle(
            r#"<polyline points="0,0 100,0" stroke="none"/>"#,
            &Config::waggly(),
        )
        .unwrap();
        assert_eq!(
            out,
            r#"<polyline points="0,0 100,0" stroke="none"></polyline>"#
        );
    }

    #[test]
    fn text_font_is_forced() {
        let config = Config::waggly().with_font_family("TestFont");
        let out = waggle(r#"<text font-family="X" x="1" y="2">Hi</text>"#, &config).unwrap();
        assert_eq!(
            out,
            r#"<text x="1" y="2" font-family="TestFont" font-size="10">Hi</text>"#
        );
    }

    #[test]
    fn text_untouched_without_font() {
        let out = waggle(r#"<text font-family="X">Hi</text>"#, &Config::waggly()).unwrap();
        assert_eq!(out, r#"<text font-family="X">Hi</text>"#);
    }

    #[test]
    fn prefixed_polygon_keeps_prefix() {
        let out = waggle_with_rng(
            r#"<ns0:polygon fill="white" points="0,0 20,0 20,20" stroke="black"/>"#,
            &calm(),
            &mut StepRng::new(0, 0),
        )
        .unwrap();
        insta::assert_snapshot!(out, @r#"<ns0:polygon fill="white" stroke="black" points="0,0 10,0 20,0 20,10 20,20"></ns0:polygon>"#);
    }

    #[test]
    fn curved_path_keeps_every_attribute() {
        let input = r#"<path d="M0,0 Q5,5 10,0" fill="none" stroke="red"/>"#;
        let out = waggle(input, &Config::waggly()).unwrap();
        assert_eq!(
            out,
            r#"<path d="M0,0 Q5,5 10,0" fill="none" stroke="red"></path>"#
        );
    }
}
