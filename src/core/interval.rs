use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Closed real interval `[start, end]`.
///
/// Intervals describe both data-space axis windows and device-space viewport
/// extents. Endpoints are not required to be ordered; mapping is affine in
/// either direction. A degenerate interval (`start == end`) is legal, for
/// example the natural y-interval of a flat single-point series, and has a
/// defined mapping policy (see [`map_value`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> PlotResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PlotError::InvalidData(
                "interval endpoints must be finite".to_owned(),
            ));
        }

        Ok(Self { start, end })
    }

    /// Unit interval `[0, 1]`, the fallback for series without data.
    #[must_use]
    pub const fn unit() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
        }
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    /// Signed width `end - start`.
    #[must_use]
    pub fn width(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        self.start + 0.5 * (self.end - self.start)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// Grows the interval to include `value`.
    #[must_use]
    pub fn including(self, value: f64) -> Self {
        Self {
            start: self.start.min(value),
            end: self.end.max(value),
        }
    }
}

/// Affine map of `value` from `from` onto `to`.
///
/// `from.start` lands on `to.start` and `from.end` on `to.end`; values
/// outside `from` extrapolate linearly. A degenerate `from` has no usable
/// scale factor, so the map collapses to the midpoint of `to` instead of
/// dividing by zero.
#[must_use]
pub fn map_value(value: f64, from: Interval, to: Interval) -> f64 {
    if from.is_degenerate() {
        return to.midpoint();
    }

    to.start + (value - from.start) / from.width() * to.width()
}
