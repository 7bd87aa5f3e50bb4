use glint_core::{Color, Gradient, Point};

use crate::bounds::{BoundsInput, DataBounds};
use crate::interpolate::{lerp_f64, lerp_opt, Lerp};
use crate::segments::{build_area, build_segments, Curvature, PathCommand, SegmentStyle};
use crate::series::Series;
use crate::touch::{resolve_touch, DistanceMetric, TouchMatch};
use crate::view::ChartView;

/// Fill under (or above) a line, down to a cutoff baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaFill {
    pub color: Color,
    pub gradient: Option<Gradient>,
    /// Baseline in data-space y; `None` fills to the bottom of the resolved
    /// bounds.
    pub cutoff_y: Option<f64>,
}

impl AreaFill {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            gradient: None,
            cutoff_y: None,
        }
    }
}

impl Lerp for AreaFill {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        AreaFill {
            color: Lerp::lerp(&a.color, &b.color, t),
            gradient: Lerp::lerp(&a.gradient, &b.gradient, t),
            cutoff_y: lerp_opt(a.cutoff_y, b.cutoff_y, t),
        }
    }
}

/// Same-variant styles interpolate their parameters; a variant change is a
/// discrete switch and snaps to the end style.
impl Lerp for SegmentStyle {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return *a;
        }
        if t == 1.0 {
            return *b;
        }
        match (a, b) {
            (SegmentStyle::Straight, SegmentStyle::Straight) => SegmentStyle::Straight,
            (SegmentStyle::Curved(ca), SegmentStyle::Curved(cb)) => {
                SegmentStyle::Curved(Curvature {
                    smoothness: lerp_f64(ca.smoothness, cb.smoothness, t),
                    prevent_overshoot: cb.prevent_overshoot,
                    overshoot_threshold: lerp_f64(
                        ca.overshoot_threshold,
                        cb.overshoot_threshold,
                        t,
                    ),
                })
            }
            (
                SegmentStyle::Stepped { direction: da },
                SegmentStyle::Stepped { direction: db },
            ) => SegmentStyle::Stepped {
                direction: lerp_f64(*da, *db, t),
            },
            _ => *b,
        }
    }
}

/// Visual styling for one line series.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeriesStyle {
    pub color: Color,
    pub gradient: Option<Gradient>,
    pub stroke_width: f64,
    pub segment_style: SegmentStyle,
    pub fill: Option<AreaFill>,
    pub show_dots: bool,
}

impl Default for LineSeriesStyle {
    fn default() -> Self {
        Self {
            color: Color::rgba(0.35, 0.65, 1.0, 1.0),
            gradient: None,
            stroke_width: 2.0,
            segment_style: SegmentStyle::Straight,
            fill: None,
            show_dots: false,
        }
    }
}

impl Lerp for LineSeriesStyle {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        LineSeriesStyle {
            color: Lerp::lerp(&a.color, &b.color, t),
            gradient: Lerp::lerp(&a.gradient, &b.gradient, t),
            stroke_width: lerp_f64(a.stroke_width, b.stroke_width, t),
            segment_style: Lerp::lerp(&a.segment_style, &b.segment_style, t),
            fill: Lerp::lerp(&a.fill, &b.fill, t),
            show_dots: b.show_dots,
        }
    }
}

/// One line of a line chart: data plus styling.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub series: Series,
    pub style: LineSeriesStyle,
}

impl LineSeries {
    pub fn new(series: Series) -> Self {
        Self {
            series,
            style: LineSeriesStyle::default(),
        }
    }

    pub fn with_style(mut self, style: LineSeriesStyle) -> Self {
        self.style = style;
        self
    }

    /// Path commands for the stroke of this series.
    pub fn path(&self) -> Vec<PathCommand> {
        build_segments(self.series.spots(), &self.style.segment_style)
    }

    /// Closed path commands for the area fill, or `None` when no fill is
    /// configured. The cutoff defaults to the bottom of `bounds`.
    pub fn area_path(&self, bounds: &DataBounds) -> Option<Vec<PathCommand>> {
        let fill = self.style.fill.as_ref()?;
        let cutoff = fill.cutoff_y.unwrap_or(bounds.y.min);
        Some(build_area(
            self.series.spots(),
            &self.style.segment_style,
            cutoff,
        ))
    }
}

impl Lerp for LineSeries {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        LineSeries {
            series: Lerp::lerp(&a.series, &b.series, t),
            style: Lerp::lerp(&a.style, &b.style, t),
        }
    }
}

/// Full line-chart configuration snapshot.
///
/// An immutable value object: the widget layer holds a "before" and an
/// "after" snapshot and asks for `Lerp::lerp(&before, &after, t)` on every
/// frame of a transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineChartData {
    pub series: Vec<LineSeries>,
    pub bounds: BoundsInput,
}

impl LineChartData {
    pub fn new(series: Vec<LineSeries>) -> Self {
        Self {
            series,
            bounds: BoundsInput::default(),
        }
    }

    pub fn with_bounds(mut self, bounds: BoundsInput) -> Self {
        self.bounds = bounds;
        self
    }

    /// Pinned bounds merged with data-derived ones.
    pub fn resolved_bounds(&self) -> DataBounds {
        self.bounds.resolve(self.series.iter().map(|s| &s.series))
    }

    /// Resolve a pointer position against all line series.
    pub fn resolve_touch<M: DistanceMetric + ?Sized>(
        &self,
        pointer: Point,
        view: &ChartView,
        metric: &M,
        threshold: f64,
    ) -> Vec<TouchMatch> {
        resolve_touch(
            pointer,
            self.series.iter().map(|s| &s.series),
            view,
            metric,
            threshold,
        )
    }
}

impl Lerp for LineChartData {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        assert_eq!(
            a.series.len(),
            b.series.len(),
            "cannot interpolate line charts with differing series counts ({} vs {})",
            a.series.len(),
            b.series.len()
        );
        LineChartData {
            series: Lerp::lerp(&a.series, &b.series, t),
            bounds: Lerp::lerp(&a.bounds, &b.bounds, t),
        }
    }
}
