use serde::{Deserialize, Serialize};

use crate::core::interval::Interval;
use crate::error::{PlotError, PlotResult};

/// Point in data space (arbitrary real units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Point in device space (surface units, typically pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DevicePoint {
    pub x: f64,
    pub y: f64,
}

impl DevicePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in device units.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Device-space rectangle the renderer currently occupies.
///
/// Supplied by the windowing collaborator on each draw or hit-test call; the
/// origin is not assumed to be zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> PlotResult<Self> {
        let viewport = Self {
            x,
            y,
            width,
            height,
        };
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport { width, height });
        }
        Ok(viewport)
    }

    /// Viewport anchored at the device origin.
    pub fn with_size(width: f64, height: f64) -> PlotResult<Self> {
        Self::new(0.0, 0.0, width, height)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Horizontal device extent `[x, x + width]`.
    pub fn x_extent(self) -> PlotResult<Interval> {
        self.require_valid()?;
        Interval::new(self.x, self.x + self.width)
    }

    /// Vertical device extent `[y, y + height]`.
    pub fn y_extent(self) -> PlotResult<Interval> {
        self.require_valid()?;
        Interval::new(self.y, self.y + self.height)
    }

    pub(crate) fn require_valid(self) -> PlotResult<()> {
        if !self.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
