use glint_core::{Color, Point};

use crate::bounds::{BoundsInput, DataBounds};
use crate::interpolate::{lerp_f64, Lerp};
use crate::series::Series;
use crate::spot::Spot;
use crate::touch::{resolve_touch, DistanceMetric, TouchMatch};
use crate::view::ChartView;

/// One scatter point with its own size and color.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterSpot {
    pub spot: Spot,
    pub radius: f64,
    pub color: Color,
}

impl ScatterSpot {
    pub fn new(spot: Spot) -> Self {
        Self {
            spot,
            radius: 4.0,
            color: Color::rgba(0.35, 0.65, 1.0, 0.85),
        }
    }
}

impl Lerp for ScatterSpot {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        ScatterSpot {
            spot: Lerp::lerp(&a.spot, &b.spot, t),
            radius: lerp_f64(a.radius, b.radius, t),
            color: Lerp::lerp(&a.color, &b.color, t),
        }
    }
}

/// Full scatter-chart configuration snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScatterChartData {
    pub spots: Vec<ScatterSpot>,
    pub bounds: BoundsInput,
}

impl ScatterChartData {
    pub fn new(spots: Vec<ScatterSpot>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            spots.iter().all(|s| s.radius.is_finite() && s.radius >= 0.0),
            "ScatterChartData radii must be finite and non-negative"
        );
        Ok(Self {
            spots,
            bounds: BoundsInput::default(),
        })
    }

    /// The scatter points as one series (gap entries are legal and skipped
    /// by bounds/touch like everywhere else).
    pub fn as_series(&self) -> Series {
        Series::new(self.spots.iter().map(|s| s.spot).collect())
    }

    pub fn resolved_bounds(&self) -> DataBounds {
        let series = self.as_series();
        self.bounds.resolve(std::iter::once(&series))
    }

    /// Scatter selection cares about vertical offset too, so the natural
    /// metric here is Euclidean — but any metric can be injected.
    pub fn resolve_touch<M: DistanceMetric + ?Sized>(
        &self,
        pointer: Point,
        view: &ChartView,
        metric: &M,
        threshold: f64,
    ) -> Vec<TouchMatch> {
        let series = self.as_series();
        resolve_touch(pointer, std::iter::once(&series), view, metric, threshold)
    }
}

impl Lerp for ScatterChartData {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        assert_eq!(
            a.spots.len(),
            b.spots.len(),
            "cannot interpolate scatter charts with differing spot counts ({} vs {})",
            a.spots.len(),
            b.spots.len()
        );
        ScatterChartData {
            spots: Lerp::lerp(&a.spots, &b.spots, t),
            bounds: Lerp::lerp(&a.bounds, &b.bounds, t),
        }
    }
}
