use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::convert_to_device;
use crate::core::interval::Interval;
use crate::core::types::{DataPoint, DevicePoint, Viewport};
use crate::error::PlotResult;

/// Acceptance radius for interactive point lookup, in device units.
pub const HIT_RADIUS: f64 = 8.0;

/// Nearest-point query result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitSample {
    /// Index of the matched point in series order.
    pub index: usize,
    /// The matched point in data space.
    pub point: DataPoint,
    /// The matched point mapped into device space.
    pub device: DevicePoint,
    /// Euclidean distance from the query location, in device units.
    pub distance: f64,
}

/// Finds the series point nearest to `location` within [`HIT_RADIUS`].
///
/// Linear scan in series order; the current best is replaced only on a
/// strictly smaller distance, so the first of several equidistant points
/// wins. One query per input event, so O(n) is fine.
pub fn nearest_point(
    points: &[DataPoint],
    x_interval: Interval,
    y_interval: Interval,
    viewport: Viewport,
    location: DevicePoint,
) -> PlotResult<Option<HitSample>> {
    let mut best: Option<(OrderedFloat<f64>, HitSample)> = None;

    for (index, point) in points.iter().enumerate() {
        let device = convert_to_device(*point, x_interval, y_interval, viewport)?;
        let distance = OrderedFloat(location.distance_to(device));

        match best {
            Some((current, _)) if current <= distance => {}
            _ => {
                best = Some((
                    distance,
                    HitSample {
                        index,
                        point: *point,
                        device,
                        distance: distance.into_inner(),
                    },
                ));
            }
        }
    }

    Ok(best
        .filter(|(distance, _)| distance.into_inner() < HIT_RADIUS)
        .map(|(_, sample)| sample))
}
