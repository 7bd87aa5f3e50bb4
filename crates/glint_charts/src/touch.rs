use glint_core::Point;

use crate::series::Series;
use crate::spot::Spot;
use crate::view::ChartView;

/// Pluggable distance between the pointer and a candidate spot, both in
/// local pixel space.
///
/// Implemented for closures, so ad-hoc metrics can be passed inline.
pub trait DistanceMetric {
    fn distance(&self, pointer: Point, candidate: Point) -> f64;
}

/// Chart convention default: touches select by x-proximity, independent of
/// vertical offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct XDistance;

impl DistanceMetric for XDistance {
    fn distance(&self, pointer: Point, candidate: Point) -> f64 {
        (pointer.x - candidate.x).abs()
    }
}

/// Full 2D distance, for charts where vertical offset matters (scatter).
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanDistance;

impl DistanceMetric for EuclideanDistance {
    fn distance(&self, pointer: Point, candidate: Point) -> f64 {
        pointer.distance(candidate)
    }
}

impl<F> DistanceMetric for F
where
    F: Fn(Point, Point) -> f64,
{
    fn distance(&self, pointer: Point, candidate: Point) -> f64 {
        self(pointer, candidate)
    }
}

/// One resolved pointer hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchMatch {
    /// Index of the series the match belongs to.
    pub series: usize,
    /// Index of the matched spot within that series.
    pub index: usize,
    /// The matched spot, in data space.
    pub spot: Spot,
    /// The matched spot projected to local pixel space.
    pub position: Point,
    pub distance: f64,
}

/// Resolve a pointer position to the closest qualifying spot of each series.
///
/// Per series, every non-gap spot is projected through `view` and measured
/// with `metric`; only the single closest spot with distance <= `threshold`
/// survives (ties keep the earliest index). Empty and all-gap series simply
/// contribute no match.
///
/// The result is ordered by descending data-space y of the matched spot,
/// ties broken by ascending series index. This ordering determines the
/// stacking of on-screen indicators and tooltips, so it is part of the
/// contract.
pub fn resolve_touch<'a, I, M>(
    pointer: Point,
    series: I,
    view: &ChartView,
    metric: &M,
    threshold: f64,
) -> Vec<TouchMatch>
where
    I: IntoIterator<Item = &'a Series>,
    M: DistanceMetric + ?Sized,
{
    let mut matches = Vec::new();

    for (series_idx, s) in series.into_iter().enumerate() {
        let mut best: Option<TouchMatch> = None;
        for (spot_idx, spot) in s.concrete() {
            let position = view.spot_to_px(spot);
            let distance = metric.distance(pointer, position);
            if distance > threshold {
                continue;
            }
            if best.as_ref().map(|b| distance < b.distance).unwrap_or(true) {
                best = Some(TouchMatch {
                    series: series_idx,
                    index: spot_idx,
                    spot,
                    position,
                    distance,
                });
            }
        }
        if let Some(m) = best {
            matches.push(m);
        }
    }

    matches.sort_by(|a, b| b.spot.y.total_cmp(&a.spot.y).then(a.series.cmp(&b.series)));
    matches
}
