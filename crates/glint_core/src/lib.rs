//! glint_core
//!
//! Toolkit-neutral value types shared by the Glint chart crates: 2D geometry
//! (points, sizes, rectangles) and color/gradient primitives. Everything here
//! is a plain immutable value — no drawing, no state, no I/O.

mod color;
mod geometry;

pub use color::{Color, Gradient, GradientStop};
pub use geometry::{Point, Rect, Size};
