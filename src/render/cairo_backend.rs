use cairo::{Context, Format, ImageSurface};
use std::f64::consts::PI;

use crate::core::DevicePath;
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, Rect, Surface};

/// Cairo backend for [`Surface`].
///
/// Supports two modes:
/// - offscreen image-surface rendering through [`CairoSurface::new`]
/// - in-place rendering on an external Cairo context (for example a GTK
///   `DrawingArea` callback) through [`CairoSurface::from_context`]
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    stroke_color: Color,
    fill_color: Color,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            context,
            image: Some(image),
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
        })
    }

    /// Wraps an external context owned by the host.
    #[must_use]
    pub fn from_context(context: Context) -> Self {
        Self {
            context,
            image: None,
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    /// Offscreen image surface, when constructed through [`CairoSurface::new`].
    #[must_use]
    pub fn image_surface(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    pub fn clear(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        apply_color(&self.context, color);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    fn append_path(&self, path: &DevicePath) {
        let mut vertices = path.vertices.iter();
        let Some(first) = vertices.next() else {
            return;
        };

        self.context.new_path();
        self.context.move_to(first.x, first.y);
        for vertex in vertices {
            self.context.line_to(vertex.x, vertex.y);
        }
        if path.closed {
            self.context.close_path();
        }
    }

    fn append_ellipse(&self, rect: Rect) -> PlotResult<()> {
        // Unit circle scaled into the rect; guard against zero extents so the
        // transform stays invertible.
        let rx = (0.5 * rect.width).max(f64::EPSILON);
        let ry = (0.5 * rect.height).max(f64::EPSILON);
        let center = rect.center();

        self.context.new_path();
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        self.context.translate(center.x, center.y);
        self.context.scale(rx, ry);
        self.context.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn stroke_current(&self, color: Color, width: f64) -> PlotResult<()> {
        apply_color(&self.context, color);
        self.context.set_line_width(width);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill_current(&self, color: Color) -> PlotResult<()> {
        apply_color(&self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }
}

impl Surface for CairoSurface {
    fn set_stroke_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.stroke_color = color;
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.fill_color = color;
        Ok(())
    }

    fn stroke_path(&mut self, path: &DevicePath, width: f64) -> PlotResult<()> {
        if path.is_empty() {
            return Ok(());
        }
        self.append_path(path);
        self.stroke_current(self.stroke_color, width)
    }

    fn fill_path(&mut self, path: &DevicePath) -> PlotResult<()> {
        if path.is_empty() {
            return Ok(());
        }
        self.append_path(path);
        self.fill_current(self.fill_color)
    }

    fn stroke_ellipse_in_rect(&mut self, rect: Rect, width: f64) -> PlotResult<()> {
        rect.validate()?;
        self.append_ellipse(rect)?;
        self.stroke_current(self.stroke_color, width)
    }

    fn fill_ellipse_in_rect(&mut self, rect: Rect) -> PlotResult<()> {
        rect.validate()?;
        self.append_ellipse(rect)?;
        self.fill_current(self.fill_color)
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64) -> PlotResult<()> {
        rect.validate()?;
        self.context.new_path();
        self.context
            .rectangle(rect.x, rect.y, rect.width, rect.height);
        self.stroke_current(self.stroke_color, width)
    }

    fn fill_rect(&mut self, rect: Rect) -> PlotResult<()> {
        rect.validate()?;
        self.context.new_path();
        self.context
            .rectangle(rect.x, rect.y, rect.width, rect.height);
        self.fill_current(self.fill_color)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::InvalidData(format!("{prefix}: {err}"))
}
