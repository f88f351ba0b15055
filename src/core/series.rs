use serde::{Deserialize, Serialize};

use crate::core::interval::Interval;
use crate::core::types::DataPoint;
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Shape drawn at each data point.
///
/// Payloads are device units: radius for the round variants, side length for
/// the square ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum MarkerKind {
    #[default]
    None,
    Ring(f64),
    Disk(f64),
    Square(f64),
    FilledSquare(f64),
}

impl MarkerKind {
    pub fn validate(self) -> PlotResult<()> {
        let size = match self {
            Self::None => return Ok(()),
            Self::Ring(radius) | Self::Disk(radius) => radius,
            Self::Square(side) | Self::FilledSquare(side) => side,
        };
        if !size.is_finite() || size < 0.0 {
            return Err(PlotError::InvalidData(
                "marker size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Visual attributes of a point series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    /// Stroke width for the connecting polyline, in device units.
    pub line_width: f64,
    /// Polyline color; the stroke pass is skipped when absent.
    pub line_color: Option<Color>,
    /// Area fill color; the fill pass is skipped when absent.
    pub fill_color: Option<Color>,
    /// Marker color; falls back to `line_color`, then black.
    pub point_color: Option<Color>,
    pub marker: MarkerKind,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            line_color: None,
            fill_color: None,
            point_color: None,
            marker: MarkerKind::None,
        }
    }
}

impl SeriesStyle {
    pub fn validate(self) -> PlotResult<()> {
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(PlotError::InvalidData(
                "line width must be finite and >= 0".to_owned(),
            ));
        }
        for color in [self.line_color, self.fill_color, self.point_color]
            .into_iter()
            .flatten()
        {
            color.validate()?;
        }
        self.marker.validate()
    }
}

/// Ordered point sequence plus its drawing style.
///
/// Insertion order is semantically meaningful: it defines the connection
/// order of the polyline, and points are not sorted by x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSeries {
    points: Vec<DataPoint>,
    style: SeriesStyle,
}

impl PointSeries {
    pub fn new(points: Vec<DataPoint>, style: SeriesStyle) -> PlotResult<Self> {
        for point in &points {
            if !point.is_finite() {
                return Err(PlotError::InvalidData(
                    "series points must be finite".to_owned(),
                ));
            }
        }
        style.validate()?;
        Ok(Self { points, style })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            style: SeriesStyle::default(),
        }
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn style(&self) -> SeriesStyle {
        self.style
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Natural x bounds of the data, used as default axis bounds.
    ///
    /// Empty series fall back to the unit interval; a single point yields a
    /// degenerate interval, which the mapper centers in the viewport.
    #[must_use]
    pub fn natural_x_interval(&self) -> Interval {
        self.natural_interval(|point| point.x)
    }

    /// Natural y bounds of the data, used as default axis bounds.
    #[must_use]
    pub fn natural_y_interval(&self) -> Interval {
        self.natural_interval(|point| point.y)
    }

    fn natural_interval(&self, axis: impl Fn(&DataPoint) -> f64) -> Interval {
        let mut points = self.points.iter();
        let Some(first) = points.next() else {
            return Interval::unit();
        };

        let seed = axis(first);
        // Endpoints stay finite: construction rejected non-finite points.
        let mut interval =
            Interval::new(seed, seed).unwrap_or_else(|_| Interval::unit());
        for point in points {
            interval = interval.including(axis(point));
        }
        interval
    }
}
