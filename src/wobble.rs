//! The wobble resampler.
//!
//! A shape's outline is walked segment by segment. Long segments get evenly
//! spaced intermediate points, and every emitted point except the very first
//! is pushed by a random offset in `[0, size)` on each axis. The offset is
//! one-sided (always positive); the first point anchors the shape and is never
//! moved.

use rand::Rng;

use crate::config::{DEFAULT_WOBBLE_INTERVAL, DEFAULT_WOBBLE_SIZE};
use crate::errors::WaggleError;
use crate::log::warn;
use crate::types::{Point, PointSequence};

/// Upper bound on the points inserted into a single segment.
pub const MAX_STEPS_PER_SEGMENT: usize = 1 << 16;

/// Resampling parameters, already expressed in the document's unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wobble {
    interval: f64,
    size: f64,
}

impl Default for Wobble {
    fn default() -> Self {
        Wobble {
            interval: DEFAULT_WOBBLE_INTERVAL,
            size: DEFAULT_WOBBLE_SIZE,
        }
    }
}

impl Wobble {
    /// Non-positive (or NaN) intervals fall back to the default, negative (or NaN)
    /// sizes likewise.
    pub fn new(interval: f64, size: f64) -> Self {
        Wobble {
            interval: coerce_interval(interval),
            size: coerce_size(size),
        }
    }

    /// Maximum distance between consecutive points before subdividing.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Exclusive upper bound of the per-axis offset.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Resample and perturb `points`.
    ///
    /// For a segment of length `d > interval`, `floor(d / interval) - 1`
    /// intermediate points are inserted. The segment's end point is always
    /// emitted. An empty input is a caller bug and is reported as
    /// [`WaggleError::EmptyPointSequence`].
    pub fn resample<R: Rng + ?Sized>(
        &self,
        points: &[Point],
        rng: &mut R,
    ) -> Result<PointSequence, WaggleError> {
        let (&anchor, rest) = points
            .split_first()
            .ok_or(WaggleError::EmptyPointSequence)?;

        let mut out = Vec::with_capacity(points.len());
        out.push(anchor);

        let mut prev = anchor;
        for &next in rest {
            let dist = prev.distance(next);
            if dist > self.interval {
                let steps = self.step_count(dist);
                let from = prev.to_vec();
                let delta = next.to_vec() - from;
                for count in 1..steps {
                    let on_line = from + delta * (count as f64 / steps as f64);
                    out.push(self.perturb(on_line.x, on_line.y, rng));
                }
            }
            out.push(self.perturb(next.x, next.y, rng));
            prev = next;
        }

        Ok(out)
    }

    fn step_count(&self, dist: f64) -> usize {
        let steps = (dist / self.interval).floor();
        if steps > MAX_STEPS_PER_SEGMENT as f64 {
            warn!(dist, interval = self.interval, "segment subdivision clamped");
            MAX_STEPS_PER_SEGMENT
        } else {
            steps as usize
        }
    }

    fn perturb<R: Rng + ?Sized>(&self, x: f64, y: f64, rng: &mut R) -> Point {
        let dx = rng.r#gen::<f64>() * self.size;
        let dy = rng.r#gen::<f64>() * self.size;
        Point::new(x + dx, y + dy)
    }
}

/// Resample `points` with the given interval and jitter size.
pub fn resample<R: Rng + ?Sized>(
    points: &[Point],
    interval: f64,
    jitter_size: f64,
    rng: &mut R,
) -> Result<PointSequence, WaggleError> {
    Wobble::new(interval, jitter_size).resample(points, rng)
}

fn coerce_interval(interval: f64) -> f64 {
    if interval > 0.0 {
        interval
    } else {
        DEFAULT_WOBBLE_INTERVAL
    }
}

fn coerce_size(size: f64) -> f64 {
    if size >= 0.0 {
        size
    } else {
        DEFAULT_WOBBLE_SIZE
    }
}
