//! Keyframe interpolation over chart values.
//!
//! The host toolkit drives animation by calling these with a monotonically
//! increasing progress fraction `t`; the engine has no notion of time. `t`
//! values outside [0, 1] extrapolate linearly — they are not clamped.
//!
//! Endpoint exactness is a contract, not an approximation: `lerp(a, b, 0.0)`
//! is deep-equal to `a` and `lerp(a, b, 1.0)` deep-equal to `b`, including
//! fields that do not interpolate continuously. Composite implementations
//! early-return a clone of the endpoint to guarantee this.

use glint_core::{Color, Gradient, GradientStop};

use crate::bounds::{AxisBounds, BoundsInput, DataBounds};
use crate::series::Series;
use crate::spot::Spot;

/// Linear interpolation, exact at both endpoints, unclamped elsewhere.
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    if t == 0.0 {
        a
    } else if t == 1.0 {
        b
    } else {
        a + (b - a) * t
    }
}

/// Interpolate optional scalars; an absent side short-circuits to the other
/// side's exact value so no undefined numeric result propagates.
pub fn lerp_opt(a: Option<f64>, b: Option<f64>, t: f64) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(lerp_f64(a, b, t)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Linear interpolation between two values of the same type.
///
/// Implemented for every value type in the chart configuration tree. List
/// implementations interpolate element-wise by index; interpolating lists of
/// differing lengths is a precondition violation and panics (pad or resample
/// before animating a shape change).
pub trait Lerp {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp_f64(*a, *b, t)
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp_f64(*a as f64, *b as f64, t) as f32
    }
}

/// A gap on either side stays a gap: discontinuities are never smoothed away.
impl Lerp for Spot {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if a.is_gap() || b.is_gap() {
            return Spot::GAP;
        }
        Spot::new(lerp_f64(a.x, b.x, t), lerp_f64(a.y, b.y, t))
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Color::rgba(
            Lerp::lerp(&a.r, &b.r, t),
            Lerp::lerp(&a.g, &b.g, t),
            Lerp::lerp(&a.b, &b.b, t),
            Lerp::lerp(&a.a, &b.a, t),
        )
    }
}

impl Lerp for GradientStop {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        GradientStop {
            offset: Lerp::lerp(&a.offset, &b.offset, t),
            color: Lerp::lerp(&a.color, &b.color, t),
        }
    }
}

impl Lerp for Gradient {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        assert_eq!(
            a.stops.len(),
            b.stops.len(),
            "cannot interpolate gradients with differing stop counts"
        );
        Gradient {
            begin: glint_core::Point::new(
                lerp_f64(a.begin.x, b.begin.x, t),
                lerp_f64(a.begin.y, b.begin.y, t),
            ),
            end: glint_core::Point::new(
                lerp_f64(a.end.x, b.end.x, t),
                lerp_f64(a.end.y, b.end.y, t),
            ),
            stops: Lerp::lerp(&a.stops, &b.stops, t),
        }
    }
}

/// An absent side short-circuits to the present side, cloned exactly.
impl<T: Lerp + Clone> Lerp for Option<T> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Some(a), Some(b)) => Some(Lerp::lerp(a, b, t)),
            (Some(a), None) => Some(a.clone()),
            (None, Some(b)) => Some(b.clone()),
            (None, None) => None,
        }
    }
}

/// Element-wise by index. Differing lengths are a contract violation.
impl<T: Lerp> Lerp for Vec<T> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        assert_eq!(
            a.len(),
            b.len(),
            "cannot interpolate lists of differing lengths ({} vs {})",
            a.len(),
            b.len()
        );
        a.iter().zip(b).map(|(a, b)| Lerp::lerp(a, b, t)).collect()
    }
}

impl Lerp for AxisBounds {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        AxisBounds::new(lerp_f64(a.min, b.min, t), lerp_f64(a.max, b.max, t))
    }
}

impl Lerp for DataBounds {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        DataBounds::new(Lerp::lerp(&a.x, &b.x, t), Lerp::lerp(&a.y, &b.y, t))
    }
}

/// Pinned sides interpolate; a side pinned on only one endpoint snapshot
/// short-circuits to that snapshot's value.
impl Lerp for BoundsInput {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        BoundsInput {
            min_x: lerp_opt(a.min_x, b.min_x, t),
            max_x: lerp_opt(a.max_x, b.max_x, t),
            min_y: lerp_opt(a.min_y, b.min_y, t),
            max_y: lerp_opt(a.max_y, b.max_y, t),
        }
    }
}

/// Interpolates the spot lists and rebuilds the derived extremes.
impl Lerp for Series {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        assert_eq!(
            a.len(),
            b.len(),
            "cannot interpolate series with differing spot counts ({} vs {})",
            a.len(),
            b.len()
        );
        Series::new(
            a.spots()
                .iter()
                .zip(b.spots())
                .map(|(a, b)| Lerp::lerp(a, b, t))
                .collect(),
        )
    }
}
