use serde::{Deserialize, Serialize};

use crate::core::DevicePath;
use crate::error::PlotResult;
use crate::render::{Color, Rect, Surface};

/// One captured drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCall {
    SetStrokeColor(Color),
    SetFillColor(Color),
    StrokePath { path: DevicePath, width: f64 },
    FillPath { path: DevicePath },
    StrokeEllipse { rect: Rect, width: f64 },
    FillEllipse { rect: Rect },
    StrokeRect { rect: Rect, width: f64 },
    FillRect { rect: Rect },
}

/// Surface that records draw calls instead of rasterizing.
///
/// Used by tests and headless hosts. Inputs are still validated so invalid
/// geometry is caught before a real backend is involved.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Recorded calls excluding color-state changes.
    #[must_use]
    pub fn geometry_calls(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|call| {
                !matches!(
                    call,
                    DrawCall::SetStrokeColor(_) | DrawCall::SetFillColor(_)
                )
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn set_stroke_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.calls.push(DrawCall::SetStrokeColor(color));
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.calls.push(DrawCall::SetFillColor(color));
        Ok(())
    }

    fn stroke_path(&mut self, path: &DevicePath, width: f64) -> PlotResult<()> {
        self.calls.push(DrawCall::StrokePath {
            path: path.clone(),
            width,
        });
        Ok(())
    }

    fn fill_path(&mut self, path: &DevicePath) -> PlotResult<()> {
        self.calls.push(DrawCall::FillPath { path: path.clone() });
        Ok(())
    }

    fn stroke_ellipse_in_rect(&mut self, rect: Rect, width: f64) -> PlotResult<()> {
        rect.validate()?;
        self.calls.push(DrawCall::StrokeEllipse { rect, width });
        Ok(())
    }

    fn fill_ellipse_in_rect(&mut self, rect: Rect) -> PlotResult<()> {
        rect.validate()?;
        self.calls.push(DrawCall::FillEllipse { rect });
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64) -> PlotResult<()> {
        rect.validate()?;
        self.calls.push(DrawCall::StrokeRect { rect, width });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> PlotResult<()> {
        rect.validate()?;
        self.calls.push(DrawCall::FillRect { rect });
        Ok(())
    }
}
