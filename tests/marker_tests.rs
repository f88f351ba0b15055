use plotline_rs::api::PointSeriesRenderer;
use plotline_rs::core::{DataPoint, MarkerKind, PointSeries, SeriesStyle, Viewport};
use plotline_rs::render::{Color, DrawCall, RecordingSurface};

fn renderer_with_marker(marker: MarkerKind) -> PointSeriesRenderer {
    let style = SeriesStyle {
        marker,
        ..SeriesStyle::default()
    };
    let series = PointSeries::new(
        vec![DataPoint::new(0.0, 0.0), DataPoint::new(100.0, 100.0)],
        style,
    )
    .expect("series");
    let viewport = Viewport::with_size(100.0, 100.0).expect("viewport");
    // Natural intervals are [0, 100] on both axes, so mapping is identity.
    PointSeriesRenderer::new(series, viewport).expect("renderer")
}

#[test]
fn marker_none_emits_no_draw_calls() {
    let renderer = renderer_with_marker(MarkerKind::None);
    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface).expect("render");
    assert!(surface.calls().is_empty());
}

#[test]
fn disk_marker_fills_one_ellipse_per_point_with_centered_bounds() {
    let renderer = renderer_with_marker(MarkerKind::Disk(4.0));
    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface).expect("render");

    let fills: Vec<_> = surface
        .calls()
        .iter()
        .filter_map(|call| match call {
            DrawCall::FillEllipse { rect } => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 2);

    // First point maps to (0, 0); bounds are center ± radius.
    assert!((fills[0].x - -4.0).abs() <= 1e-9);
    assert!((fills[0].y - -4.0).abs() <= 1e-9);
    assert!((fills[0].width - 8.0).abs() <= 1e-9);
    assert!((fills[0].height - 8.0).abs() <= 1e-9);

    // Second point maps to (100, 100).
    assert!((fills[1].x - 96.0).abs() <= 1e-9);
    assert!((fills[1].y - 96.0).abs() <= 1e-9);
}

#[test]
fn ring_marker_strokes_ellipses() {
    let renderer = renderer_with_marker(MarkerKind::Ring(3.0));
    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface).expect("render");

    let strokes = surface
        .calls()
        .iter()
        .filter(|call| matches!(call, DrawCall::StrokeEllipse { .. }))
        .count();
    assert_eq!(strokes, 2);
    assert!(
        !surface
            .calls()
            .iter()
            .any(|call| matches!(call, DrawCall::FillEllipse { .. }))
    );
}

#[test]
fn square_markers_dispatch_to_rect_calls() {
    let stroked = renderer_with_marker(MarkerKind::Square(6.0));
    let mut surface = RecordingSurface::new();
    stroked.render(&mut surface).expect("render");
    let rects: Vec<_> = surface
        .calls()
        .iter()
        .filter_map(|call| match call {
            DrawCall::StrokeRect { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 2);
    assert!((rects[0].x - -3.0).abs() <= 1e-9);
    assert!((rects[0].width - 6.0).abs() <= 1e-9);

    let filled = renderer_with_marker(MarkerKind::FilledSquare(6.0));
    let mut surface = RecordingSurface::new();
    filled.render(&mut surface).expect("render");
    let fills = surface
        .calls()
        .iter()
        .filter(|call| matches!(call, DrawCall::FillRect { .. }))
        .count();
    assert_eq!(fills, 2);
}

#[test]
fn marker_color_prefers_point_color_over_line_color() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let style = SeriesStyle {
        line_color: Some(blue),
        point_color: Some(red),
        marker: MarkerKind::Disk(2.0),
        ..SeriesStyle::default()
    };
    let series = PointSeries::new(vec![DataPoint::new(50.0, 50.0)], style).expect("series");
    let viewport = Viewport::with_size(100.0, 100.0).expect("viewport");
    let renderer = PointSeriesRenderer::new(series, viewport).expect("renderer");

    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface).expect("render");

    let fill_colors: Vec<_> = surface
        .calls()
        .iter()
        .filter_map(|call| match call {
            DrawCall::SetFillColor(color) => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(fill_colors, vec![red]);
}

#[test]
fn marker_color_falls_back_to_line_color_then_black() {
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let style = SeriesStyle {
        line_color: Some(blue),
        marker: MarkerKind::Disk(2.0),
        ..SeriesStyle::default()
    };
    let series = PointSeries::new(vec![DataPoint::new(50.0, 50.0)], style).expect("series");
    let viewport = Viewport::with_size(100.0, 100.0).expect("viewport");
    let renderer = PointSeriesRenderer::new(series, viewport).expect("renderer");

    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface).expect("render");
    assert!(
        surface
            .calls()
            .iter()
            .any(|call| matches!(call, DrawCall::SetFillColor(color) if *color == blue))
    );

    // No colors configured at all: markers default to black.
    let style = SeriesStyle {
        marker: MarkerKind::Disk(2.0),
        ..SeriesStyle::default()
    };
    let series = PointSeries::new(vec![DataPoint::new(50.0, 50.0)], style).expect("series");
    let renderer = PointSeriesRenderer::new(series, viewport).expect("renderer");
    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface).expect("render");
    assert!(
        surface
            .calls()
            .iter()
            .any(|call| matches!(call, DrawCall::SetFillColor(color) if *color == Color::BLACK))
    );
}

#[test]
fn negative_marker_size_is_rejected_at_construction() {
    let style = SeriesStyle {
        marker: MarkerKind::Disk(-1.0),
        ..SeriesStyle::default()
    };
    assert!(PointSeries::new(vec![DataPoint::new(0.0, 0.0)], style).is_err());
}
