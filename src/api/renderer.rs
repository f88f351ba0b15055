use tracing::{debug, trace};

use crate::api::invalidation::{RedrawRequest, RedrawTopic};
use crate::core::{
    DevicePath, DevicePoint, Interval, MarkerKind, PointSeries, SeriesStyle, Viewport,
    convert_to_device, project_fill_polygon, project_open_path,
};
use crate::error::PlotResult;
use crate::interaction::{HitSample, nearest_point};
use crate::render::{Color, Rect, Surface};

/// Stroke width for ring and square marker outlines, in device units.
const MARKER_STROKE_WIDTH: f64 = 1.0;

/// Leaf visual element that renders one point series.
///
/// Owns the series (copy-in), the data-space axis intervals, and the current
/// device viewport. A higher-level composition layer overlays axes and
/// decorations; this type only produces series geometry, markers, and
/// nearest-point answers.
///
/// Single-threaded by design: `render` and the hit-test queries are
/// read-only, and the host serializes setter calls against them. Each setter
/// raises a redraw topic the host drains via
/// [`PointSeriesRenderer::take_redraw_request`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointSeriesRenderer {
    series: PointSeries,
    x_interval: Interval,
    y_interval: Interval,
    viewport: Viewport,
    pending_redraw: RedrawRequest,
}

impl PointSeriesRenderer {
    /// Creates a renderer whose axis intervals default to the series'
    /// natural data bounds.
    pub fn new(series: PointSeries, viewport: Viewport) -> PlotResult<Self> {
        viewport.require_valid()?;
        let x_interval = series.natural_x_interval();
        let y_interval = series.natural_y_interval();
        Ok(Self {
            series,
            x_interval,
            y_interval,
            viewport,
            pending_redraw: RedrawRequest::none(),
        })
    }

    /// Overrides the x-axis window shown (zoom/pan by the caller).
    #[must_use]
    pub fn with_x_interval(mut self, interval: Interval) -> Self {
        self.x_interval = interval;
        self
    }

    /// Overrides the y-axis window shown.
    #[must_use]
    pub fn with_y_interval(mut self, interval: Interval) -> Self {
        self.y_interval = interval;
        self
    }

    #[must_use]
    pub fn series(&self) -> &PointSeries {
        &self.series
    }

    #[must_use]
    pub fn x_interval(&self) -> Interval {
        self.x_interval
    }

    #[must_use]
    pub fn y_interval(&self) -> Interval {
        self.y_interval
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replaces the series wholesale and raises a redraw request.
    pub fn set_series(&mut self, series: PointSeries) {
        debug!(points = series.len(), "series replaced");
        self.series = series;
        self.raise(RedrawTopic::Series);
    }

    pub fn set_x_interval(&mut self, interval: Interval) {
        self.x_interval = interval;
        self.raise(RedrawTopic::XInterval);
    }

    pub fn set_y_interval(&mut self, interval: Interval) {
        self.y_interval = interval;
        self.raise(RedrawTopic::YInterval);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> PlotResult<()> {
        viewport.require_valid()?;
        self.viewport = viewport;
        self.raise(RedrawTopic::Viewport);
        Ok(())
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        !self.pending_redraw.is_none()
    }

    /// Drains and returns the pending redraw topics.
    pub fn take_redraw_request(&mut self) -> RedrawRequest {
        std::mem::take(&mut self.pending_redraw)
    }

    /// Open polyline of the series in device space.
    pub fn open_path(&self) -> PlotResult<DevicePath> {
        project_open_path(
            self.series.points(),
            self.x_interval,
            self.y_interval,
            self.viewport,
        )
    }

    /// Area fill region of the series, closed against the data baseline.
    pub fn fill_polygon(&self) -> PlotResult<DevicePath> {
        project_fill_polygon(
            self.series.points(),
            self.x_interval,
            self.y_interval,
            self.viewport,
        )
    }

    /// Draw callback: polyline stroke, baseline fill, then markers.
    ///
    /// Channels without a configured color are skipped; an empty series
    /// draws nothing. Geometry is recomputed from current state on every
    /// call.
    pub fn render(&self, surface: &mut dyn Surface) -> PlotResult<()> {
        let style = self.series.style();
        if self.series.is_empty() {
            trace!("render skipped: empty series");
            return Ok(());
        }

        if let Some(line_color) = style.line_color {
            let path = self.open_path()?;
            surface.set_stroke_color(line_color)?;
            surface.stroke_path(&path, style.line_width)?;
        }

        if let Some(fill_color) = style.fill_color {
            let polygon = self.fill_polygon()?;
            surface.set_fill_color(fill_color)?;
            surface.fill_path(&polygon)?;
        }

        self.render_markers(surface, style)?;

        trace!(
            points = self.series.len(),
            marker = ?style.marker,
            "render pass complete"
        );
        Ok(())
    }

    fn render_markers(&self, surface: &mut dyn Surface, style: SeriesStyle) -> PlotResult<()> {
        if matches!(style.marker, MarkerKind::None) {
            return Ok(());
        }

        let color = marker_color(style);
        match style.marker {
            MarkerKind::Ring(_) | MarkerKind::Square(_) => surface.set_stroke_color(color)?,
            MarkerKind::Disk(_) | MarkerKind::FilledSquare(_) => surface.set_fill_color(color)?,
            MarkerKind::None => {}
        }

        for point in self.series.points() {
            let device =
                convert_to_device(*point, self.x_interval, self.y_interval, self.viewport)?;
            match style.marker {
                MarkerKind::None => {}
                MarkerKind::Ring(radius) => {
                    let bounds = Rect::centered(device, 2.0 * radius, 2.0 * radius);
                    surface.stroke_ellipse_in_rect(bounds, MARKER_STROKE_WIDTH)?;
                }
                MarkerKind::Disk(radius) => {
                    let bounds = Rect::centered(device, 2.0 * radius, 2.0 * radius);
                    surface.fill_ellipse_in_rect(bounds)?;
                }
                MarkerKind::Square(side) => {
                    let bounds = Rect::centered(device, side, side);
                    surface.stroke_rect(bounds, MARKER_STROKE_WIDTH)?;
                }
                MarkerKind::FilledSquare(side) => {
                    let bounds = Rect::centered(device, side, side);
                    surface.fill_rect(bounds)?;
                }
            }
        }
        Ok(())
    }

    /// Hit-test callback: data-space y of the nearest point within the
    /// acceptance radius, else `None`.
    ///
    /// An unmappable state (for example an invalidated viewport) also
    /// answers `None`; hit testing never fails the caller.
    #[must_use]
    pub fn value_at(&self, location: DevicePoint) -> Option<f64> {
        self.hit_test(location).ok()?.map(|sample| sample.point.y)
    }

    /// Full nearest-point query for hosts that need more than the y value.
    pub fn hit_test(&self, location: DevicePoint) -> PlotResult<Option<HitSample>> {
        nearest_point(
            self.series.points(),
            self.x_interval,
            self.y_interval,
            self.viewport,
            location,
        )
    }

    fn raise(&mut self, topic: RedrawTopic) {
        self.pending_redraw = self.pending_redraw.with_topic(topic);
    }
}

/// First configured color wins: point color, then line color, then black.
fn marker_color(style: SeriesStyle) -> Color {
    style
        .point_color
        .or(style.line_color)
        .unwrap_or(Color::BLACK)
}
