//! plotline-rs: point-series rendering primitive.
//!
//! Projects an ordered set of 2D data points into device space, strokes the
//! connecting polyline, fills the area against the data baseline, draws
//! per-point markers, and answers nearest-point queries. Axes, labels, and
//! window lifecycle belong to the embedding host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PointSeriesRenderer, RedrawRequest, RedrawTopic};
pub use error::{PlotError, PlotResult};
