//! Vesica Piscis: two equal circles, each through the other's center.

use crate::error::GenerationError;
use crate::geometry::{Circle, GeometryOutput, Point, Polyline, Segment};
use crate::primitives::{arc_steps, circle_intersections, sample_arc};

/// Generate the vesica plate.
///
/// Besides the two circles this traces the lens they share as one closed
/// polyline (sampled at `detail` steps per full turn) and draws the two
/// axes: the chord through the intersection points and the line through
/// both centers out to the circles' far edges.
pub fn generate_vesica_piscis(unit: f64, detail: u32) -> Result<GeometryOutput, GenerationError> {
    let left = Circle::new(-unit / 2.0, 0.0, unit);
    let right = Circle::new(unit / 2.0, 0.0, unit);

    let (p, q) = circle_intersections(&left, &right).ok_or_else(|| GenerationError::Degenerate {
        pattern: "vesica-piscis",
        reason: "circles do not intersect".into(),
    })?;

    let lens = lens_outline(&left, &right, p, q, detail);

    let segments = vec![
        Segment::new(p, q),
        Segment::new(
            Point::new(left.cx - left.r, 0.0),
            Point::new(right.cx + right.r, 0.0),
        ),
    ];

    Ok(GeometryOutput {
        circles: vec![left, right],
        polylines: vec![lens],
        segments,
    })
}

/// Closed outline of the overlap between two intersecting circles.
///
/// Walks `right`'s arc from `p` to `q` (the lens's left edge), then
/// `left`'s arc from `q` back to `p`.
fn lens_outline(left: &Circle, right: &Circle, p: Point, q: Point, detail: u32) -> Polyline {
    let angle = |c: &Circle, at: Point| (at.y - c.cy).atan2(at.x - c.cx);

    let mut points = arc_between(right, angle(right, p), angle(right, q), detail);
    let back = arc_between(left, angle(left, q), angle(left, p), detail);
    points.extend(back.into_iter().skip(1));

    // Close exactly; the last sample only lands on `p` up to rounding.
    if let Some(first) = points.first().copied() {
        if let Some(last) = points.last_mut() {
            *last = first;
        }
    }
    Polyline::new(points)
}

/// Counter-clockwise arc of `circle` from angle `from` to angle `to`.
fn arc_between(circle: &Circle, from: f64, to: f64, detail: u32) -> Vec<Point> {
    let sweep = (to - from).rem_euclid(std::f64::consts::TAU);
    sample_arc(circle.center(), circle.r, from, sweep, arc_steps(detail, sweep))
}
