use glint_core::Color;

use crate::bounds::{AxisBounds, BoundsInput, DataBounds};
use crate::interpolate::{lerp_f64, Lerp};

/// One drawn bar: a vertical rod from `from_y` to `to_y`.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRod {
    pub from_y: f64,
    pub to_y: f64,
    pub width: f64,
    pub color: Color,
}

impl BarRod {
    pub fn new(to_y: f64) -> Self {
        Self {
            from_y: 0.0,
            to_y,
            width: 8.0,
            color: Color::rgba(0.35, 0.65, 1.0, 1.0),
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Lerp for BarRod {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        BarRod {
            from_y: lerp_f64(a.from_y, b.from_y, t),
            to_y: lerp_f64(a.to_y, b.to_y, t),
            width: lerp_f64(a.width, b.width, t),
            color: Lerp::lerp(&a.color, &b.color, t),
        }
    }
}

/// Rods sharing one x position.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGroup {
    pub x: f64,
    pub rods: Vec<BarRod>,
    /// Horizontal space between rods of the group.
    pub bars_space: f64,
}

impl BarGroup {
    pub fn new(x: f64, rods: Vec<BarRod>) -> anyhow::Result<Self> {
        anyhow::ensure!(x.is_finite(), "BarGroup x must be finite");
        anyhow::ensure!(
            rods.iter().all(|r| r.width.is_finite() && r.width >= 0.0),
            "BarGroup rod widths must be finite and non-negative"
        );
        Ok(Self {
            x,
            rods,
            bars_space: 2.0,
        })
    }

    /// Total drawn width of the group.
    pub fn width(&self) -> f64 {
        if self.rods.is_empty() {
            return 0.0;
        }
        let rods: f64 = self.rods.iter().map(|r| r.width).sum();
        rods + self.bars_space * (self.rods.len() - 1) as f64
    }
}

impl Lerp for BarGroup {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        assert_eq!(
            a.rods.len(),
            b.rods.len(),
            "cannot interpolate bar groups with differing rod counts ({} vs {})",
            a.rods.len(),
            b.rods.len()
        );
        BarGroup {
            x: lerp_f64(a.x, b.x, t),
            rods: Lerp::lerp(&a.rods, &b.rods, t),
            bars_space: lerp_f64(a.bars_space, b.bars_space, t),
        }
    }
}

/// Full bar-chart configuration snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarChartData {
    pub groups: Vec<BarGroup>,
    pub bounds: BoundsInput,
}

impl BarChartData {
    pub fn new(groups: Vec<BarGroup>) -> Self {
        Self {
            groups,
            bounds: BoundsInput::default(),
        }
    }

    pub fn with_bounds(mut self, bounds: BoundsInput) -> Self {
        self.bounds = bounds;
        self
    }

    /// Bounds across group positions and rod extents, honoring pinned sides.
    ///
    /// Rods span `[from_y, to_y]` in either direction, so both ends count.
    pub fn resolved_bounds(&self) -> DataBounds {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for g in &self.groups {
            min_x = min_x.min(g.x);
            max_x = max_x.max(g.x);
            for r in &g.rods {
                min_y = min_y.min(r.from_y.min(r.to_y));
                max_y = max_y.max(r.from_y.max(r.to_y));
            }
        }

        let derived = if min_x.is_finite() && max_x.is_finite() && min_y.is_finite() {
            DataBounds::new(AxisBounds::new(min_x, max_x), AxisBounds::new(min_y, max_y))
        } else {
            tracing::trace!("bar chart has no rods, using unit bounds");
            DataBounds::UNIT
        };

        let mut out = DataBounds::new(
            AxisBounds::new(
                self.bounds.min_x.unwrap_or(derived.x.min),
                self.bounds.max_x.unwrap_or(derived.x.max),
            ),
            AxisBounds::new(
                self.bounds.min_y.unwrap_or(derived.y.min),
                self.bounds.max_y.unwrap_or(derived.y.max),
            ),
        );
        if out.x.min > out.x.max {
            std::mem::swap(&mut out.x.min, &mut out.x.max);
        }
        if out.y.min > out.y.max {
            std::mem::swap(&mut out.y.min, &mut out.y.max);
        }
        out
    }
}

impl Lerp for BarChartData {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        assert_eq!(
            a.groups.len(),
            b.groups.len(),
            "cannot interpolate bar charts with differing group counts ({} vs {})",
            a.groups.len(),
            b.groups.len()
        );
        BarChartData {
            groups: Lerp::lerp(&a.groups, &b.groups, t),
            bounds: Lerp::lerp(&a.bounds, &b.bounds, t),
        }
    }
}
