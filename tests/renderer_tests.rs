use plotline_rs::api::{PointSeriesRenderer, RedrawTopic};
use plotline_rs::core::{
    DataPoint, Interval, MarkerKind, PointSeries, SeriesStyle, Viewport,
};
use plotline_rs::render::{Color, DrawCall, RecordingSurface};

fn sample_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(0.0, 10.0),
        DataPoint::new(50.0, 60.0),
        DataPoint::new(100.0, 30.0),
    ]
}

fn styled_renderer(style: SeriesStyle) -> PointSeriesRenderer {
    let series = PointSeries::new(sample_points(), style).expect("series");
    let viewport = Viewport::with_size(200.0, 100.0).expect("viewport");
    PointSeriesRenderer::new(series, viewport).expect("renderer")
}

#[test]
fn empty_series_renders_nothing() {
    let viewport = Viewport::with_size(200.0, 100.0).expect("viewport");
    let renderer = PointSeriesRenderer::new(PointSeries::empty(), viewport).expect("renderer");

    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface).expect("render");
    assert!(surface.calls().is_empty());
}

#[test]
fn line_stroke_is_skipped_without_line_color() {
    let style = SeriesStyle {
        fill_color: Some(Color::rgb(0.2, 0.4, 0.8)),
        ..SeriesStyle::default()
    };
    let renderer = styled_renderer(style);

    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface).expect("render");
    assert!(
        !surface
            .calls()
            .iter()
            .any(|call| matches!(call, DrawCall::StrokePath { .. }))
    );
    assert!(
        surface
            .calls()
            .iter()
            .any(|call| matches!(call, DrawCall::FillPath { .. }))
    );
}

#[test]
fn line_stroke_uses_configured_width_and_color() {
    let green = Color::rgb(0.0, 0.8, 0.2);
    let style = SeriesStyle {
        line_width: 2.5,
        line_color: Some(green),
        ..SeriesStyle::default()
    };
    let renderer = styled_renderer(style);

    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface).expect("render");

    assert_eq!(surface.calls().len(), 2);
    assert_eq!(surface.calls()[0], DrawCall::SetStrokeColor(green));
    match &surface.calls()[1] {
        DrawCall::StrokePath { path, width } => {
            assert_eq!(path.vertices.len(), 3);
            assert!(!path.closed);
            assert!((width - 2.5).abs() <= 1e-9);
        }
        other => panic!("expected stroke path, got {other:?}"),
    }
}

#[test]
fn fill_pass_emits_closed_baseline_polygon() {
    let style = SeriesStyle {
        fill_color: Some(Color::rgba(0.2, 0.4, 0.8, 0.5)),
        ..SeriesStyle::default()
    };
    let renderer = styled_renderer(style);

    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface).expect("render");

    let polygon = surface
        .calls()
        .iter()
        .find_map(|call| match call {
            DrawCall::FillPath { path } => Some(path.clone()),
            _ => None,
        })
        .expect("fill path recorded");
    assert!(polygon.closed);
    assert_eq!(polygon.vertices.len(), sample_points().len() + 2);
}

#[test]
fn stroke_runs_before_fill_and_markers() {
    let style = SeriesStyle {
        line_color: Some(Color::rgb(0.0, 0.0, 0.0)),
        fill_color: Some(Color::rgb(0.9, 0.9, 0.9)),
        marker: MarkerKind::Disk(3.0),
        ..SeriesStyle::default()
    };
    let renderer = styled_renderer(style);

    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface).expect("render");

    let stroke_at = surface
        .calls()
        .iter()
        .position(|call| matches!(call, DrawCall::StrokePath { .. }))
        .expect("stroke pass");
    let fill_at = surface
        .calls()
        .iter()
        .position(|call| matches!(call, DrawCall::FillPath { .. }))
        .expect("fill pass");
    let marker_at = surface
        .calls()
        .iter()
        .position(|call| matches!(call, DrawCall::FillEllipse { .. }))
        .expect("marker pass");
    assert!(stroke_at < fill_at);
    assert!(fill_at < marker_at);
}

#[test]
fn interval_replacement_changes_mapping_without_reconstruction() {
    let style = SeriesStyle::default();
    let mut renderer = styled_renderer(style);

    let before = renderer.open_path().expect("path");
    assert!((before.vertices[1].x - 100.0).abs() <= 1e-9);

    renderer.set_x_interval(Interval::new(0.0, 200.0).expect("x interval"));
    let after = renderer.open_path().expect("path");
    assert!((after.vertices[1].x - 50.0).abs() <= 1e-9);

    renderer.set_y_interval(Interval::new(0.0, 120.0).expect("y interval"));
    let rescaled = renderer.open_path().expect("path");
    assert!((rescaled.vertices[1].y - 50.0).abs() <= 1e-9);
}

#[test]
fn setters_raise_redraw_topics_until_drained() {
    let mut renderer = styled_renderer(SeriesStyle::default());
    assert!(!renderer.needs_redraw());

    renderer.set_series(PointSeries::empty());
    renderer.set_x_interval(Interval::new(0.0, 1.0).expect("x interval"));
    assert!(renderer.needs_redraw());

    let request = renderer.take_redraw_request();
    assert!(request.contains(RedrawTopic::Series));
    assert!(request.contains(RedrawTopic::XInterval));
    assert!(!request.contains(RedrawTopic::YInterval));
    assert!(!renderer.needs_redraw());
}

#[test]
fn viewport_replacement_is_validated_and_raises_redraw() {
    let mut renderer = styled_renderer(SeriesStyle::default());

    let bad = Viewport {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 10.0,
    };
    assert!(renderer.set_viewport(bad).is_err());
    assert!(!renderer.needs_redraw());

    let good = Viewport::with_size(400.0, 300.0).expect("viewport");
    renderer.set_viewport(good).expect("set viewport");
    assert!(renderer.take_redraw_request().contains(RedrawTopic::Viewport));
    assert_eq!(renderer.viewport(), good);
}

#[test]
fn renderer_defaults_to_series_natural_intervals() {
    let renderer = styled_renderer(SeriesStyle::default());
    assert_eq!(renderer.x_interval().start(), 0.0);
    assert_eq!(renderer.x_interval().end(), 100.0);
    assert_eq!(renderer.y_interval().start(), 10.0);
    assert_eq!(renderer.y_interval().end(), 60.0);
}
