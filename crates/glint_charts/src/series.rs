use crate::spot::Spot;

/// Directional extremes of a series, ignoring gaps.
///
/// Derived once when the spot list is set; `None` when the series is empty
/// or contains only gaps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesExtremes {
    pub leftmost: Spot,
    pub rightmost: Spot,
    pub topmost: Spot,
    pub bottommost: Spot,
}

impl SeriesExtremes {
    /// Single pass over `spots`, skipping gaps.
    pub fn derive(spots: &[Spot]) -> Option<Self> {
        let mut it = spots.iter().filter(|s| !s.is_gap());
        let first = *it.next()?;
        let mut ex = SeriesExtremes {
            leftmost: first,
            rightmost: first,
            topmost: first,
            bottommost: first,
        };
        for &s in it {
            if s.x < ex.leftmost.x {
                ex.leftmost = s;
            }
            if s.x > ex.rightmost.x {
                ex.rightmost = s;
            }
            if s.y > ex.topmost.y {
                ex.topmost = s;
            }
            if s.y < ex.bottommost.y {
                ex.bottommost = s;
            }
        }
        Some(ex)
    }
}

/// One drawable line's ordered list of data points.
///
/// Insertion order is significant: it defines draw order and adjacency for
/// curve/step geometry. The spot list is never mutated in place — use
/// [`Series::with_spots`] to replace it, which rebuilds the cached extremes.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    spots: Vec<Spot>,
    extremes: Option<SeriesExtremes>,
}

impl Series {
    pub fn new(spots: Vec<Spot>) -> Self {
        let extremes = SeriesExtremes::derive(&spots);
        Self { spots, extremes }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Functional update: replace the spot list, recomputing derived caches.
    pub fn with_spots(&self, spots: Vec<Spot>) -> Self {
        Self::new(spots)
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// True when there is no concrete (non-gap) spot.
    pub fn is_all_gaps(&self) -> bool {
        self.extremes.is_none()
    }

    pub fn extremes(&self) -> Option<&SeriesExtremes> {
        self.extremes.as_ref()
    }

    pub fn leftmost(&self) -> Option<Spot> {
        self.extremes.map(|e| e.leftmost)
    }

    pub fn rightmost(&self) -> Option<Spot> {
        self.extremes.map(|e| e.rightmost)
    }

    pub fn topmost(&self) -> Option<Spot> {
        self.extremes.map(|e| e.topmost)
    }

    pub fn bottommost(&self) -> Option<Spot> {
        self.extremes.map(|e| e.bottommost)
    }

    /// Concrete spots with their original indices, gaps skipped.
    pub fn concrete(&self) -> impl Iterator<Item = (usize, Spot)> + '_ {
        self.spots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_gap())
            .map(|(i, &s)| (i, s))
    }
}

impl From<Vec<Spot>> for Series {
    fn from(spots: Vec<Spot>) -> Self {
        Series::new(spots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_skip_gaps() {
        let s = Series::new(vec![
            Spot::new(1.0, 5.0),
            Spot::GAP,
            Spot::new(-2.0, 0.5),
            Spot::new(4.0, -3.0),
        ]);
        let ex = s.extremes().unwrap();
        assert_eq!(ex.leftmost, Spot::new(-2.0, 0.5));
        assert_eq!(ex.rightmost, Spot::new(4.0, -3.0));
        assert_eq!(ex.topmost, Spot::new(1.0, 5.0));
        assert_eq!(ex.bottommost, Spot::new(4.0, -3.0));
    }

    #[test]
    fn all_gap_series_has_no_extremes() {
        let s = Series::new(vec![Spot::GAP, Spot::GAP]);
        assert!(s.is_all_gaps());
        assert!(s.leftmost().is_none());
        assert!(Series::empty().is_all_gaps());
    }

    #[test]
    fn with_spots_recomputes_caches() {
        let s = Series::new(vec![Spot::new(0.0, 0.0)]);
        let s2 = s.with_spots(vec![Spot::new(10.0, 10.0)]);
        assert_eq!(s.rightmost(), Some(Spot::new(0.0, 0.0)));
        assert_eq!(s2.rightmost(), Some(Spot::new(10.0, 10.0)));
    }

    #[test]
    fn extremes_keep_first_on_ties() {
        let s = Series::new(vec![Spot::new(0.0, 1.0), Spot::new(0.0, 2.0)]);
        let ex = s.extremes().unwrap();
        assert_eq!(ex.leftmost, Spot::new(0.0, 1.0));
        assert_eq!(ex.rightmost, Spot::new(0.0, 1.0));
    }
}
