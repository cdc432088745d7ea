//! Transformation settings and their defaults.
//!
//! Sizes are given in pixels; documents measured in inches get them scaled
//! down through [`Config::wobble`].

use crate::types::Unit;
use crate::wobble::Wobble;

/// Distance between resampled points, in pixels.
pub const DEFAULT_WOBBLE_INTERVAL: f64 = 10.0;
/// Maximum per-axis offset of a resampled point, in pixels.
pub const DEFAULT_WOBBLE_SIZE: f64 = 1.5;
/// `font-size` forced onto `<text>` when only a family is configured.
pub const DEFAULT_FONT_SIZE: &str = "10";

/// Options for one transformation run. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    waggly: bool,
    wobble: Wobble,
    font_family: Option<String>,
    font_size: Option<String>,
    seed: Option<u64>,
}

impl Config {
    /// Disabled: documents pass through untouched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enabled, with default interval and size.
    pub fn waggly() -> Self {
        Self::default().with_waggly(true)
    }

    pub fn with_waggly(mut self, waggly: bool) -> Self {
        self.waggly = waggly;
        self
    }

    /// Zero, negative or NaN intervals fall back to [`DEFAULT_WOBBLE_INTERVAL`].
    pub fn with_wobble_interval(mut self, interval: f64) -> Self {
        self.wobble = Wobble::new(interval, self.wobble.size());
        self
    }

    /// Negative or NaN sizes fall back to [`DEFAULT_WOBBLE_SIZE`]; zero disables jitter.
    pub fn with_wobble_size(mut self, size: f64) -> Self {
        self.wobble = Wobble::new(self.wobble.interval(), size);
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    /// Seed the random source so output is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn is_waggly(&self) -> bool {
        self.waggly
    }

    pub fn wobble_interval(&self) -> f64 {
        self.wobble.interval()
    }

    pub fn wobble_size(&self) -> f64 {
        self.wobble.size()
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Configured size, or [`DEFAULT_FONT_SIZE`].
    pub fn font_size(&self) -> &str {
        self.font_size.as_deref().unwrap_or(DEFAULT_FONT_SIZE)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Wobble parameters expressed in `unit`.
    pub fn wobble(&self, unit: Unit) -> Wobble {
        Wobble::new(
            unit.from_px(self.wobble.interval()),
            unit.from_px(self.wobble.size()),
        )
    }
}
