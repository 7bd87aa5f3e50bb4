//! Cross-module smoke tests: the documented touch ordering contract,
//! stepped/curved geometry shapes, and exact lerp endpoints for every
//! chart family.

use glint_charts::prelude::*;
use glint_core::{Color, Point, Rect};

/// View where data space coincides with pixel space.
fn identity_view(bounds: DataBounds) -> ChartView {
    ChartView::new(
        bounds,
        Rect::new(
            bounds.x.min,
            bounds.y.max,
            bounds.x.span(),
            -bounds.y.span(),
        ),
    )
}

#[test]
fn touch_matches_stack_by_descending_y() {
    let series = [
        Series::new(vec![Spot::new(0.0, 1.0), Spot::new(1.0, 5.0)]),
        Series::new(vec![Spot::new(0.0, 1.0), Spot::new(1.0, 2.0)]),
    ];
    let view = identity_view(data_bounds(&series));

    let out = resolve_touch(Point::new(1.0, 0.0), &series, &view, &XDistance, 10.0);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].series, 0);
    assert_eq!(out[0].spot, Spot::new(1.0, 5.0));
    assert_eq!(out[1].series, 1);
    assert_eq!(out[1].spot, Spot::new(1.0, 2.0));
}

#[test]
fn touch_far_outside_threshold_matches_nothing() {
    let series = [Series::new(vec![Spot::new(0.0, 0.0), Spot::new(1.0, 1.0)])];
    let view = identity_view(data_bounds(&series));
    let out = resolve_touch(Point::new(500.0, 0.0), &series, &view, &XDistance, 10.0);
    assert!(out.is_empty());
}

#[test]
fn stepped_corners_follow_direction() {
    let spots = [Spot::new(0.0, 0.0), Spot::new(2.0, 4.0)];

    let forward = build_segments(&spots, &SegmentStyle::Stepped { direction: 0.0 });
    assert!(forward.contains(&PathCommand::LineTo(Point::new(2.0, 0.0))));

    let backward = build_segments(&spots, &SegmentStyle::Stepped { direction: 1.0 });
    assert!(backward.contains(&PathCommand::LineTo(Point::new(0.0, 4.0))));
}

#[test]
fn curved_controls_stay_inside_tolerated_range() {
    let spots = [Spot::new(0.0, 0.0), Spot::new(1.0, 100.0), Spot::new(2.0, 0.0)];
    let threshold = 1.0;
    let cmds = build_segments(
        &spots,
        &SegmentStyle::Curved(Curvature {
            smoothness: 0.8,
            prevent_overshoot: true,
            overshoot_threshold: threshold,
        }),
    );
    for c in &cmds {
        if let PathCommand::CubicTo { c1, c2, .. } = c {
            for y in [c1.y, c2.y] {
                assert!(y <= 100.0 + threshold);
                assert!(y >= 0.0 - threshold);
            }
        }
    }
}

#[test]
fn line_chart_lerp_is_exact_at_endpoints() {
    let mut style = LineSeriesStyle::default();
    style.fill = Some(AreaFill::solid(Color::rgba(0.2, 0.4, 0.9, 0.3)));
    style.segment_style = SegmentStyle::Curved(Curvature::default());

    let a = LineChartData::new(vec![LineSeries::new(Series::new(vec![
        Spot::new(0.0, 0.0),
        Spot::GAP,
        Spot::new(2.0, 2.0),
    ]))
    .with_style(style.clone())])
    .with_bounds(BoundsInput::new().with_min_y(0.0));

    let mut b = a.clone();
    b.series[0].series = b.series[0]
        .series
        .with_spots(vec![Spot::new(0.0, 3.0), Spot::GAP, Spot::new(2.0, 1.0)]);
    b.series[0].style.stroke_width = 5.0;
    b.bounds = BoundsInput::new().with_min_y(-1.0).with_max_y(4.0);

    assert_eq!(LineChartData::lerp(&a, &b, 0.0), a);
    assert_eq!(LineChartData::lerp(&a, &b, 1.0), b);
}

#[test]
fn every_family_lerps_exactly_at_endpoints() {
    let bar_a = BarChartData::new(vec![
        BarGroup::new(0.0, vec![BarRod::new(3.0)]).unwrap()
    ]);
    let mut bar_b = bar_a.clone();
    bar_b.groups[0].rods[0].to_y = 7.0;
    assert_eq!(BarChartData::lerp(&bar_a, &bar_b, 0.0), bar_a);
    assert_eq!(BarChartData::lerp(&bar_a, &bar_b, 1.0), bar_b);

    let pie_a = PieChartData::new(vec![PieSection::new(1.0)]).unwrap();
    let mut pie_b = pie_a.clone();
    pie_b.sections[0].value = 4.0;
    assert_eq!(PieChartData::lerp(&pie_a, &pie_b, 0.0), pie_a);
    assert_eq!(PieChartData::lerp(&pie_a, &pie_b, 1.0), pie_b);

    let sc_a = ScatterChartData::new(vec![ScatterSpot::new(Spot::new(0.0, 0.0))]).unwrap();
    let mut sc_b = sc_a.clone();
    sc_b.spots[0].spot = Spot::new(1.0, 1.0);
    assert_eq!(ScatterChartData::lerp(&sc_a, &sc_b, 0.0), sc_a);
    assert_eq!(ScatterChartData::lerp(&sc_a, &sc_b, 1.0), sc_b);

    let ra = RadarChartData::new(vec![RadarDataSet::new(vec![1.0, 2.0, 3.0])]).unwrap();
    let mut rb = ra.clone();
    rb.data_sets[0].entries = vec![3.0, 2.0, 1.0];
    assert_eq!(RadarChartData::lerp(&ra, &rb, 0.0), ra);
    assert_eq!(RadarChartData::lerp(&ra, &rb, 1.0), rb);
}

#[test]
fn lerp_between_equal_snapshots_is_identity_for_any_t() {
    let d = LineChartData::new(vec![LineSeries::new(Series::new(vec![
        Spot::new(0.0, 1.0),
        Spot::GAP,
        Spot::new(2.0, 3.0),
    ]))])
    .with_bounds(BoundsInput::new().with_max_y(10.0));

    for t in [-0.5, 0.0, 0.3, 1.0, 2.5] {
        assert_eq!(LineChartData::lerp(&d, &d, t), d);
    }
}

#[test]
fn interpolated_snapshot_is_usable_by_the_rest_of_the_engine() {
    let a = LineChartData::new(vec![LineSeries::new(Series::new(vec![
        Spot::new(0.0, 0.0),
        Spot::new(1.0, 2.0),
        Spot::new(2.0, 0.0),
    ]))]);
    let mut b = a.clone();
    b.series[0].series = b.series[0].series.with_spots(vec![
        Spot::new(0.0, 4.0),
        Spot::new(1.0, 0.0),
        Spot::new(2.0, 4.0),
    ]);

    let mid = LineChartData::lerp(&a, &b, 0.5);
    let bounds = mid.resolved_bounds();
    assert_eq!(bounds.y, AxisBounds::new(1.0, 2.0));

    let view = identity_view(bounds);
    let hits = mid.resolve_touch(Point::new(1.0, 1.0), &view, &XDistance, 0.25);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 1);

    let path = mid.series[0].path();
    assert_eq!(path[0], PathCommand::MoveTo(Point::new(0.0, 2.0)));
}
