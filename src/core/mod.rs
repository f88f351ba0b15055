pub mod geometry;
pub mod interval;
pub mod series;
pub mod types;

pub use geometry::{DevicePath, convert_to_device, project_fill_polygon, project_open_path};
pub use interval::{Interval, map_value};
pub use series::{MarkerKind, PointSeries, SeriesStyle};
pub use types::{DataPoint, DevicePoint, Viewport};
