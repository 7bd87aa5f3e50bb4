use glint_core::Color;

use crate::bounds::AxisBounds;
use crate::interpolate::{lerp_f64, Lerp};

/// One polygon of a radar chart: a value per spoke.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarDataSet {
    pub entries: Vec<f64>,
    pub border_color: Color,
    pub fill_color: Color,
    pub stroke_width: f64,
}

impl RadarDataSet {
    pub fn new(entries: Vec<f64>) -> Self {
        Self {
            entries,
            border_color: Color::rgba(0.35, 0.65, 1.0, 0.85),
            fill_color: Color::rgba(0.35, 0.65, 1.0, 0.20),
            stroke_width: 2.0,
        }
    }
}

impl Lerp for RadarDataSet {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        assert_eq!(
            a.entries.len(),
            b.entries.len(),
            "cannot interpolate radar data sets with differing entry counts ({} vs {})",
            a.entries.len(),
            b.entries.len()
        );
        RadarDataSet {
            entries: Lerp::lerp(&a.entries, &b.entries, t),
            border_color: Lerp::lerp(&a.border_color, &b.border_color, t),
            fill_color: Lerp::lerp(&a.fill_color, &b.fill_color, t),
            stroke_width: lerp_f64(a.stroke_width, b.stroke_width, t),
        }
    }
}

/// Full radar-chart configuration snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarChartData {
    pub data_sets: Vec<RadarDataSet>,
    /// Number of concentric guide rings; discrete, snaps on transition.
    pub tick_count: usize,
}

impl RadarChartData {
    pub fn new(data_sets: Vec<RadarDataSet>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            !data_sets.is_empty(),
            "RadarChartData requires at least one data set"
        );
        let spokes = data_sets[0].entries.len();
        anyhow::ensure!(spokes >= 3, "RadarChartData requires at least 3 spokes");
        anyhow::ensure!(
            data_sets.iter().all(|d| d.entries.len() == spokes),
            "every radar data set must have the same entry count"
        );
        Ok(Self {
            data_sets,
            tick_count: 4,
        })
    }

    pub fn spoke_count(&self) -> usize {
        self.data_sets.first().map_or(0, |d| d.entries.len())
    }

    /// Min/max over all entries; unit fallback when nothing is finite.
    pub fn value_bounds(&self) -> AxisBounds {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in self.data_sets.iter().flat_map(|d| d.entries.iter()) {
            if !v.is_finite() {
                continue;
            }
            min = min.min(*v);
            max = max.max(*v);
        }
        if !min.is_finite() || !max.is_finite() {
            tracing::trace!("radar chart has no finite entries, using unit bounds");
            return AxisBounds::UNIT;
        }
        AxisBounds::new(min, max)
    }
}

impl Lerp for RadarChartData {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        assert_eq!(
            a.data_sets.len(),
            b.data_sets.len(),
            "cannot interpolate radar charts with differing data set counts ({} vs {})",
            a.data_sets.len(),
            b.data_sets.len()
        );
        RadarChartData {
            data_sets: Lerp::lerp(&a.data_sets, &b.data_sets, t),
            tick_count: b.tick_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_enforces_shape() {
        assert!(RadarChartData::new(vec![]).is_err());
        assert!(RadarChartData::new(vec![RadarDataSet::new(vec![1.0, 2.0])]).is_err());
        assert!(RadarChartData::new(vec![
            RadarDataSet::new(vec![1.0, 2.0, 3.0]),
            RadarDataSet::new(vec![1.0, 2.0]),
        ])
        .is_err());
        assert!(RadarChartData::new(vec![RadarDataSet::new(vec![1.0, 2.0, 3.0])]).is_ok());
    }

    #[test]
    fn value_bounds_span_all_data_sets() {
        let d = RadarChartData::new(vec![
            RadarDataSet::new(vec![1.0, 5.0, 3.0]),
            RadarDataSet::new(vec![-2.0, 0.0, 4.0]),
        ])
        .unwrap();
        assert_eq!(d.value_bounds(), AxisBounds::new(-2.0, 5.0));
    }

    #[test]
    fn lerp_animates_entries_and_snaps_tick_count() {
        let a = RadarChartData::new(vec![RadarDataSet::new(vec![0.0, 2.0, 4.0])]).unwrap();
        let mut b = RadarChartData::new(vec![RadarDataSet::new(vec![4.0, 2.0, 0.0])]).unwrap();
        b.tick_count = 8;
        let mid = RadarChartData::lerp(&a, &b, 0.5);
        assert_eq!(mid.data_sets[0].entries, vec![2.0, 2.0, 2.0]);
        assert_eq!(mid.tick_count, 8);
        assert_eq!(RadarChartData::lerp(&a, &b, 0.0), a);
        assert_eq!(RadarChartData::lerp(&a, &b, 1.0), b);
    }
}
