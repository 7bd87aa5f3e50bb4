//! Gap sentinels must flow consistently through every engine stage:
//! excluded from bounds, propagated by interpolation, skipped by touch
//! resolution, and splitting path geometry into disconnected subpaths.

use glint_charts::prelude::*;
use glint_core::{Point, Rect};

fn gappy_series() -> Series {
    Series::new(vec![
        Spot::new(0.0, 1.0),
        Spot::new(1.0, 3.0),
        Spot::GAP,
        Spot::new(3.0, 2.0),
        Spot::new(4.0, 5.0),
        Spot::GAP,
    ])
}

#[test]
fn bounds_ignore_gaps_everywhere() {
    let s = gappy_series();
    let b = data_bounds(std::slice::from_ref(&s));
    assert_eq!(b.x, AxisBounds::new(0.0, 4.0));
    assert_eq!(b.y, AxisBounds::new(1.0, 5.0));

    for (_, spot) in s.concrete() {
        assert!(b.x.contains(spot.x) && b.y.contains(spot.y));
    }
}

#[test]
fn lerp_preserves_gap_positions_for_all_t() {
    let a = gappy_series();
    let b = a.with_spots(vec![
        Spot::new(0.0, 5.0),
        Spot::new(1.0, 1.0),
        Spot::GAP,
        Spot::new(3.0, 0.0),
        Spot::new(4.0, 0.0),
        Spot::GAP,
    ]);
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let out = Series::lerp(&a, &b, t);
        assert!(out.spots()[2].is_gap());
        assert!(out.spots()[5].is_gap());
        assert!(!out.spots()[0].is_gap());
    }
}

#[test]
fn geometry_splits_into_one_subpath_per_run() {
    let s = gappy_series();
    for style in [
        SegmentStyle::Straight,
        SegmentStyle::Curved(Curvature::default()),
        SegmentStyle::Stepped { direction: 0.5 },
    ] {
        let cmds = build_segments(s.spots(), &style);
        let moves = cmds
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count();
        // Two runs; the trailing gap adds nothing.
        assert_eq!(moves, 2, "style {style:?}");
    }
}

#[test]
fn touch_skips_gaps_but_still_matches_concrete_spots() {
    let s = gappy_series();
    let bounds = data_bounds(std::slice::from_ref(&s));
    let view = ChartView::new(bounds, Rect::new(0.0, 100.0, 400.0, -100.0));

    // Pointer at the pixel position where the gap index (x = 2.0) would be.
    let pointer = Point::new(view.x_to_px(2.0), 0.0);
    let out = resolve_touch(pointer, std::slice::from_ref(&s), &view, &XDistance, 1e9);
    assert_eq!(out.len(), 1);
    // Nearest concrete spots are x=1 and x=3, equidistant; the earlier
    // index wins deterministically.
    assert_eq!(out[0].index, 1);
}

#[test]
fn all_gap_chart_falls_back_to_unit_bounds() {
    let d = LineChartData::new(vec![LineSeries::new(Series::new(vec![
        Spot::GAP,
        Spot::GAP,
    ]))]);
    assert_eq!(d.resolved_bounds(), DataBounds::UNIT);
}
