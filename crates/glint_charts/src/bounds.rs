use tracing::trace;

use crate::series::Series;

/// 1D numeric bounds (min..max).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Fallback when no data exists to derive from.
    pub const UNIT: AxisBounds = AxisBounds { min: 0.0, max: 1.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max >= self.min
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Evenly spaced tick values including both endpoints.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let n = count.max(2);
        let span = self.span();
        (0..n)
            .map(|i| self.min + span * (i as f64 / (n - 1) as f64))
            .collect()
    }
}

/// Derived bounds on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x: AxisBounds,
    pub y: AxisBounds,
}

impl DataBounds {
    pub const UNIT: DataBounds = DataBounds {
        x: AxisBounds::UNIT,
        y: AxisBounds::UNIT,
    };

    pub fn new(x: AxisBounds, y: AxisBounds) -> Self {
        Self { x, y }
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }
}

/// Minimal bounds spanning all concrete spots of all series.
///
/// Uses the extremes each series cached at construction, so this is O(series)
/// here and O(total spots) overall. Series that are empty or all gaps are
/// skipped; if nothing remains, the unit fallback is returned so charts can
/// still lay out an empty plot.
pub fn data_bounds<'a, I>(series: I) -> DataBounds
where
    I: IntoIterator<Item = &'a Series>,
{
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for s in series {
        let Some(ex) = s.extremes() else {
            continue;
        };
        min_x = min_x.min(ex.leftmost.x);
        max_x = max_x.max(ex.rightmost.x);
        min_y = min_y.min(ex.bottommost.y);
        max_y = max_y.max(ex.topmost.y);
    }

    if !min_x.is_finite() || !max_x.is_finite() || !min_y.is_finite() || !max_y.is_finite() {
        trace!("no concrete spots in any series, using unit bounds");
        return DataBounds::UNIT;
    }

    DataBounds::new(AxisBounds::new(min_x, max_x), AxisBounds::new(min_y, max_y))
}

/// Caller-pinned bounds; `None` sides are derived from data on resolve.
///
/// Two-phase construction: build the input with whatever the caller pinned,
/// then call [`BoundsInput::resolve`] once to get a fully-populated
/// [`DataBounds`]. Pinned sides are never overwritten by derived values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundsInput {
    pub min_x: Option<f64>,
    pub max_x: Option<f64>,
    pub min_y: Option<f64>,
    pub max_y: Option<f64>,
}

impl BoundsInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_x(mut self, v: f64) -> Self {
        self.min_x = Some(v);
        self
    }

    pub fn with_max_x(mut self, v: f64) -> Self {
        self.max_x = Some(v);
        self
    }

    pub fn with_min_y(mut self, v: f64) -> Self {
        self.min_y = Some(v);
        self
    }

    pub fn with_max_y(mut self, v: f64) -> Self {
        self.max_y = Some(v);
        self
    }

    pub fn is_fully_pinned(&self) -> bool {
        self.min_x.is_some() && self.max_x.is_some() && self.min_y.is_some() && self.max_y.is_some()
    }

    /// Merge pinned sides with data-derived ones.
    ///
    /// Derivation only runs for unpinned sides. If a pinned/derived pair ends
    /// up reversed, the pair is swapped so `min <= max` holds on output.
    pub fn resolve<'a, I>(&self, series: I) -> DataBounds
    where
        I: IntoIterator<Item = &'a Series>,
    {
        let derived = if self.is_fully_pinned() {
            DataBounds::UNIT // unused
        } else {
            data_bounds(series)
        };

        let mut min_x = self.min_x.unwrap_or(derived.x.min);
        let mut max_x = self.max_x.unwrap_or(derived.x.max);
        let mut min_y = self.min_y.unwrap_or(derived.y.min);
        let mut max_y = self.max_y.unwrap_or(derived.y.max);

        if min_x > max_x {
            std::mem::swap(&mut min_x, &mut max_x);
        }
        if min_y > max_y {
            std::mem::swap(&mut min_y, &mut max_y);
        }

        DataBounds::new(AxisBounds::new(min_x, max_x), AxisBounds::new(min_y, max_y))
    }
}
