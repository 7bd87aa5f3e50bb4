use glint_core::Point;

use crate::spot::Spot;

/// Return contiguous runs of concrete (non-gap) spots as half-open index
/// ranges `[start, end)`.
///
/// Gap sentinels delimit runs and never appear inside one; consecutive or
/// trailing gaps produce no empty runs.
pub fn runs_by_gap(spots: &[Spot], out: &mut Vec<(usize, usize)>) {
    out.clear();
    let mut start: Option<usize> = None;
    for (i, s) in spots.iter().enumerate() {
        if s.is_gap() {
            if let Some(st) = start.take() {
                out.push((st, i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(st) = start {
        out.push((st, spots.len()));
    }
}

/// One drawing-surface instruction. The painter replays these verbatim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
    Close,
}

/// Parameters for curved segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curvature {
    /// Tangent scale; 0.0 degenerates to straight segments.
    pub smoothness: f64,
    pub prevent_overshoot: bool,
    /// Allowed excursion of control points beyond the local data range when
    /// `prevent_overshoot` is set.
    pub overshoot_threshold: f64,
}

impl Default for Curvature {
    fn default() -> Self {
        Self {
            smoothness: 0.35,
            prevent_overshoot: false,
            overshoot_threshold: 10.0,
        }
    }
}

/// How consecutive spots are joined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentStyle {
    Straight,
    Curved(Curvature),
    /// Step insertion point between spot i and i+1: 0.0 steps at the second
    /// spot's x (horizontal-then-vertical), 1.0 at the first spot's x
    /// (vertical-then-horizontal), 0.5 splits at the midpoint.
    Stepped { direction: f64 },
}

impl Default for SegmentStyle {
    fn default() -> Self {
        SegmentStyle::Straight
    }
}

/// Build path commands for a spot sequence, one disconnected subpath per
/// gap-delimited run. Control points are never computed across a gap.
pub fn build_segments(spots: &[Spot], style: &SegmentStyle) -> Vec<PathCommand> {
    let mut runs = Vec::new();
    runs_by_gap(spots, &mut runs);

    let mut out = Vec::new();
    for &(start, end) in &runs {
        emit_run(&spots[start..end], style, &mut out);
    }
    out
}

/// Build a closed area path: the line geometry of each run, closed down to
/// the `cutoff_y` baseline with vertical edges. Single-spot runs have no
/// horizontal extent and are skipped.
pub fn build_area(spots: &[Spot], style: &SegmentStyle, cutoff_y: f64) -> Vec<PathCommand> {
    let mut runs = Vec::new();
    runs_by_gap(spots, &mut runs);

    let mut out = Vec::new();
    for &(start, end) in &runs {
        if end - start < 2 {
            continue;
        }
        let run = &spots[start..end];
        emit_run(run, style, &mut out);
        let first = run[0];
        let last = run[run.len() - 1];
        out.push(PathCommand::LineTo(Point::new(last.x, cutoff_y)));
        out.push(PathCommand::LineTo(Point::new(first.x, cutoff_y)));
        out.push(PathCommand::Close);
    }
    out
}

fn emit_run(run: &[Spot], style: &SegmentStyle, out: &mut Vec<PathCommand>) {
    debug_assert!(run.iter().all(|s| !s.is_gap()));
    let Some(&first) = run.first() else {
        return;
    };
    out.push(PathCommand::MoveTo(first.to_point()));
    if run.len() < 2 {
        return;
    }

    match *style {
        SegmentStyle::Straight => {
            for s in &run[1..] {
                out.push(PathCommand::LineTo(s.to_point()));
            }
        }
        SegmentStyle::Stepped { direction } => emit_stepped(run, direction, out),
        SegmentStyle::Curved(curvature) => emit_curved(run, curvature, out),
    }
}

fn emit_stepped(run: &[Spot], direction: f64, out: &mut Vec<PathCommand>) {
    let direction = direction.clamp(0.0, 1.0);
    let mut last = run[0].to_point();
    for w in run.windows(2) {
        let (p, q) = (w[0].to_point(), w[1].to_point());
        // direction 0.0 -> corner at q.x, 1.0 -> corner at p.x.
        let corner_x = p.x + (q.x - p.x) * (1.0 - direction);
        for candidate in [
            Point::new(corner_x, p.y),
            Point::new(corner_x, q.y),
            q,
        ] {
            if candidate != last {
                out.push(PathCommand::LineTo(candidate));
                last = candidate;
            }
        }
    }
}

fn emit_curved(run: &[Spot], curvature: Curvature, out: &mut Vec<PathCommand>) {
    let smoothness = curvature.smoothness;
    // Outgoing tangent carried from the previous segment.
    let mut tangent = Point::ZERO;

    for i in 1..run.len() {
        let current = run[i].to_point();
        let previous = run[i - 1].to_point();
        let next = run[usize::min(i + 1, run.len() - 1)].to_point();

        let mut c1 = previous + tangent;
        tangent = (next - previous) * 0.5 * smoothness;
        let mut c2 = current - tangent;

        if curvature.prevent_overshoot {
            c1 = clamp_control(c1, previous, current, curvature.overshoot_threshold);
            c2 = clamp_control(c2, previous, current, curvature.overshoot_threshold);
        }

        out.push(PathCommand::CubicTo {
            c1,
            c2,
            to: current,
        });
    }
}

/// Heuristic anti-overshoot: pull a control point's y back inside the local
/// range of the segment's two data values, plus the configured tolerance.
fn clamp_control(control: Point, a: Point, b: Point, threshold: f64) -> Point {
    let lo = a.y.min(b.y) - threshold;
    let hi = a.y.max(b.y) + threshold;
    control.with_y(control.y.clamp(lo, hi))
}
