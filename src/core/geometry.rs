use serde::{Deserialize, Serialize};

use crate::core::interval::{Interval, map_value};
use crate::core::types::{DataPoint, DevicePoint, Viewport};
use crate::error::PlotResult;

/// Device-space path produced by projecting a series.
///
/// `closed` marks the fill-polygon contour; backends close it themselves
/// instead of the path repeating its first vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicePath {
    pub vertices: Vec<DevicePoint>,
    pub closed: bool,
}

impl DevicePath {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            closed: false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Maps one data point into device space.
///
/// The two axes are independent 1D affine maps (x-interval onto the
/// horizontal extent, y-interval onto the vertical extent); no aspect-ratio
/// coupling.
pub fn convert_to_device(
    point: DataPoint,
    x_interval: Interval,
    y_interval: Interval,
    viewport: Viewport,
) -> PlotResult<DevicePoint> {
    let x = map_value(point.x, x_interval, viewport.x_extent()?);
    let y = map_value(point.y, y_interval, viewport.y_extent()?);
    Ok(DevicePoint::new(x, y))
}

/// Projects series points into an open polyline in original order.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// same geometry. Empty input yields an empty path; a single point yields
/// one vertex and no segments.
pub fn project_open_path(
    points: &[DataPoint],
    x_interval: Interval,
    y_interval: Interval,
    viewport: Viewport,
) -> PlotResult<DevicePath> {
    if points.is_empty() {
        return Ok(DevicePath::empty());
    }

    let mut vertices = Vec::with_capacity(points.len());
    for point in points {
        vertices.push(convert_to_device(*point, x_interval, y_interval, viewport)?);
    }

    Ok(DevicePath {
        vertices,
        closed: false,
    })
}

/// Projects the area-under-curve fill region, closed against the data
/// baseline y = 0.
///
/// The contour runs from the first point's x at the baseline, through every
/// mapped point in order, down to the last point's x at the baseline. Vertex
/// count is therefore point count + 2. When 0 lies outside `y_interval` the
/// baseline is extrapolated, which matches fill-to-baseline semantics.
pub fn project_fill_polygon(
    points: &[DataPoint],
    x_interval: Interval,
    y_interval: Interval,
    viewport: Viewport,
) -> PlotResult<DevicePath> {
    if points.is_empty() {
        return Ok(DevicePath::empty());
    }

    let x_extent = viewport.x_extent()?;
    let y_extent = viewport.y_extent()?;
    let baseline_y = map_value(0.0, y_interval, y_extent);

    let mut vertices = Vec::with_capacity(points.len() + 2);
    let first_x = map_value(points[0].x, x_interval, x_extent);
    vertices.push(DevicePoint::new(first_x, baseline_y));

    for point in points {
        vertices.push(DevicePoint::new(
            map_value(point.x, x_interval, x_extent),
            map_value(point.y, y_interval, y_extent),
        ));
    }

    let last_x = map_value(points[points.len() - 1].x, x_interval, x_extent);
    vertices.push(DevicePoint::new(last_x, baseline_y));

    Ok(DevicePath {
        vertices,
        closed: true,
    })
}
