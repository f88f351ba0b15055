mod invalidation;
mod renderer;

pub use invalidation::{RedrawRequest, RedrawTopic};
pub use renderer::PointSeriesRenderer;
