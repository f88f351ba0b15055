mod primitives;
mod recording;

pub use primitives::{Color, Rect};
pub use recording::{DrawCall, RecordingSurface};

use crate::core::DevicePath;
use crate::error::PlotResult;

/// Contract implemented by any 2D drawing backend.
///
/// The renderer emits geometry through these operations only; rasterization,
/// clipping, and compositing stay with the backend. Color state is sticky:
/// stroke operations use the last stroke color set, fill operations the last
/// fill color. Stroke widths are passed per call, in device units.
pub trait Surface {
    fn set_stroke_color(&mut self, color: Color) -> PlotResult<()>;
    fn set_fill_color(&mut self, color: Color) -> PlotResult<()>;
    fn stroke_path(&mut self, path: &DevicePath, width: f64) -> PlotResult<()>;
    fn fill_path(&mut self, path: &DevicePath) -> PlotResult<()>;
    fn stroke_ellipse_in_rect(&mut self, rect: Rect, width: f64) -> PlotResult<()>;
    fn fill_ellipse_in_rect(&mut self, rect: Rect) -> PlotResult<()>;
    fn stroke_rect(&mut self, rect: Rect, width: f64) -> PlotResult<()>;
    fn fill_rect(&mut self, rect: Rect) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
