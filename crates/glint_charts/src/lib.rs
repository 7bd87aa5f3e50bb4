//! glint_charts
//!
//! Chart geometry and interpolation engine for Glint.
//!
//! This crate is the pure core behind the chart widgets: it derives axis
//! bounds from data, interpolates configuration snapshots for animated
//! transitions, resolves pointer positions to data points, and builds the
//! path geometry (straight / curved / stepped, with gap handling) that the
//! painting layer strokes. It owns no canvas, no clock, and no gesture
//! recognizer — the host toolkit supplies pointer positions, rectangles and
//! a progress fraction, and replays the returned path commands.

mod bounds;
mod interpolate;
mod segments;
mod series;
mod spot;
mod touch;
mod view;

pub mod bar;
pub mod line;
pub mod pie;
pub mod radar;
pub mod scatter;

pub use bounds::{data_bounds, AxisBounds, BoundsInput, DataBounds};
pub use interpolate::{lerp_f64, lerp_opt, Lerp};
pub use segments::{build_area, build_segments, runs_by_gap, Curvature, PathCommand, SegmentStyle};
pub use series::{Series, SeriesExtremes};
pub use spot::Spot;
pub use touch::{resolve_touch, DistanceMetric, EuclideanDistance, TouchMatch, XDistance};
pub use view::ChartView;

/// Common imports for chart users.
pub mod prelude {
    pub use crate::bar::{BarChartData, BarGroup, BarRod};
    pub use crate::bounds::{data_bounds, AxisBounds, BoundsInput, DataBounds};
    pub use crate::interpolate::{lerp_f64, lerp_opt, Lerp};
    pub use crate::line::{AreaFill, LineChartData, LineSeries, LineSeriesStyle};
    pub use crate::pie::{PieChartData, PieSection};
    pub use crate::radar::{RadarChartData, RadarDataSet};
    pub use crate::scatter::{ScatterChartData, ScatterSpot};
    pub use crate::segments::{
        build_area, build_segments, runs_by_gap, Curvature, PathCommand, SegmentStyle,
    };
    pub use crate::series::{Series, SeriesExtremes};
    pub use crate::spot::Spot;
    pub use crate::touch::{
        resolve_touch, DistanceMetric, EuclideanDistance, TouchMatch, XDistance,
    };
    pub use crate::view::ChartView;
}
