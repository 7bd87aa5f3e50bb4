use glint_core::{Point, Rect};

use crate::bounds::DataBounds;
use crate::spot::Spot;

/// Mapping between data space and a chart's local pixel rectangle.
///
/// Pure value: callers construct one per layout pass from resolved bounds and
/// the plot rectangle the host toolkit measured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartView {
    pub bounds: DataBounds,
    pub rect: Rect,
}

impl ChartView {
    pub fn new(bounds: DataBounds, rect: Rect) -> Self {
        Self { bounds, rect }
    }

    pub fn x_to_px(&self, x: f64) -> f64 {
        let span = self.bounds.x.span();
        if span.abs() < 1e-12 {
            return self.rect.left();
        }
        let t = (x - self.bounds.x.min) / span;
        self.rect.left() + t * self.rect.width()
    }

    /// y increases downward in screen coords.
    pub fn y_to_px(&self, y: f64) -> f64 {
        let span = self.bounds.y.span();
        if span.abs() < 1e-12 {
            return self.rect.top();
        }
        let t = (y - self.bounds.y.min) / span;
        self.rect.top() + (1.0 - t) * self.rect.height()
    }

    pub fn spot_to_px(&self, s: Spot) -> Point {
        Point::new(self.x_to_px(s.x), self.y_to_px(s.y))
    }

    pub fn px_to_x(&self, px: f64) -> f64 {
        let w = self.rect.width();
        if w.abs() < 1e-12 {
            return self.bounds.x.min;
        }
        let t = (px - self.rect.left()) / w;
        self.bounds.x.min + t * self.bounds.x.span()
    }

    pub fn px_to_y(&self, py: f64) -> f64 {
        let h = self.rect.height();
        if h.abs() < 1e-12 {
            return self.bounds.y.min;
        }
        let t = (py - self.rect.top()) / h;
        self.bounds.y.min + (1.0 - t) * self.bounds.y.span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::AxisBounds;

    fn view() -> ChartView {
        ChartView::new(
            DataBounds::new(AxisBounds::new(0.0, 10.0), AxisBounds::new(0.0, 100.0)),
            Rect::new(0.0, 0.0, 200.0, 100.0),
        )
    }

    #[test]
    fn maps_corners() {
        let v = view();
        assert_eq!(v.x_to_px(0.0), 0.0);
        assert_eq!(v.x_to_px(10.0), 200.0);
        // Max y is at the top of the rect.
        assert_eq!(v.y_to_px(100.0), 0.0);
        assert_eq!(v.y_to_px(0.0), 100.0);
    }

    #[test]
    fn round_trips() {
        let v = view();
        for x in [0.0, 2.5, 7.1, 10.0] {
            assert!((v.px_to_x(v.x_to_px(x)) - x).abs() < 1e-9);
        }
        for y in [0.0, 33.0, 100.0] {
            assert!((v.px_to_y(v.y_to_px(y)) - y).abs() < 1e-9);
        }
    }

    #[test]
    fn degenerate_span_collapses_to_range_start() {
        let v = ChartView::new(
            DataBounds::new(AxisBounds::new(5.0, 5.0), AxisBounds::new(0.0, 1.0)),
            Rect::new(10.0, 0.0, 100.0, 50.0),
        );
        assert_eq!(v.x_to_px(5.0), 10.0);
    }
}
