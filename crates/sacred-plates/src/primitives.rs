//! Shared geometric primitives for plate generators.
//!
//! Every generator is a handful of calls into this module: regular polygon
//! vertices, hexagonal circle packing, intersections, and arc sampling.
//! Angles are always computed as `offset + TAU * k / n` from an integer
//! step index rather than accumulated, so results never drift with the
//! number of steps taken.

use std::f64::consts::TAU;

use lyon_geom::{Angle, Arc, point, vector};

use crate::geometry::{Circle, Point};

/// Angle of step `k` out of `n` equal steps around the circle, starting at `offset`.
#[inline]
pub fn angle_step(k: usize, n: usize, offset: f64) -> f64 {
    offset + TAU * k as f64 / n as f64
}

/// Vertices of a regular `n`-gon centered on `center`.
///
/// The first vertex sits at `rotation` radians; the rest follow
/// counter-clockwise. The loop is not closed.
pub fn regular_polygon(center: Point, n: usize, radius: f64, rotation: f64) -> Vec<Point> {
    (0..n)
        .map(|k| {
            let p = Point::polar(radius, angle_step(k, n, rotation));
            center.offset(p.x, p.y)
        })
        .collect()
}

/// Centers of hexagonal ring `ring` in a lattice with the given spacing.
///
/// Ring 0 is the single center point; ring `k` holds `6k` points. Corners
/// lie at `k * spacing` along the six lattice directions and the points in
/// between are evenly spaced along each edge of the hexagon.
pub fn hex_ring(center: Point, ring: usize, spacing: f64, rotation: f64) -> Vec<Point> {
    if ring == 0 {
        return vec![center];
    }

    let corners = regular_polygon(center, 6, ring as f64 * spacing, rotation);
    let mut points = Vec::with_capacity(6 * ring);

    for i in 0..6 {
        let from = corners[i];
        let to = corners[(i + 1) % 6];
        for j in 0..ring {
            let t = j as f64 / ring as f64;
            points.push(Point::new(
                from.x + (to.x - from.x) * t,
                from.y + (to.y - from.y) * t,
            ));
        }
    }

    points
}

/// Circles of equal radius centered on every lattice point out to `rings`.
///
/// Ordered ring by ring from the center outward.
pub fn hex_packing(center: Point, rings: usize, spacing: f64, radius: f64, rotation: f64) -> Vec<Circle> {
    (0..=rings)
        .flat_map(|ring| hex_ring(center, ring, spacing, rotation))
        .map(|p| Circle::at(p, radius))
        .collect()
}

/// `count` circles whose centers sit evenly around a ring of `ring_radius`.
pub fn circle_ring(center: Point, count: usize, ring_radius: f64, radius: f64, rotation: f64) -> Vec<Circle> {
    regular_polygon(center, count, ring_radius, rotation)
        .into_iter()
        .map(|p| Circle::at(p, radius))
        .collect()
}

/// Intersection points of two circles.
///
/// Returns `None` when the circles are concentric, separate, or one lies
/// wholly inside the other. Tangent circles return the touching point twice.
pub fn circle_intersections(a: &Circle, b: &Circle) -> Option<(Point, Point)> {
    let dx = b.cx - a.cx;
    let dy = b.cy - a.cy;
    let d = (dx * dx + dy * dy).sqrt();

    // Concentric within rounding of the larger radius
    if d <= 1e-12 * a.r.max(b.r) || d > a.r + b.r || d < (a.r - b.r).abs() {
        return None;
    }

    // Distance from a's center to the chord's midpoint
    let along = (a.r * a.r - b.r * b.r + d * d) / (2.0 * d);
    let half_chord = (a.r * a.r - along * along).max(0.0).sqrt();

    let mx = a.cx + dx * along / d;
    let my = a.cy + dy * along / d;
    let ox = -dy * half_chord / d;
    let oy = dx * half_chord / d;

    Some((Point::new(mx + ox, my + oy), Point::new(mx - ox, my - oy)))
}

/// Intersection of the infinite lines through `p1 p2` and `p3 p4`.
///
/// Returns `None` for parallel or coincident lines.
pub fn line_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let d1x = p2.x - p1.x;
    let d1y = p2.y - p1.y;
    let d2x = p4.x - p3.x;
    let d2y = p4.y - p3.y;

    // Cross product relative to the direction lengths, so the test is scale-free
    let denom = d1x * d2y - d1y * d2x;
    if denom.abs() <= 1e-12 * d1x.hypot(d1y) * d2x.hypot(d2y) {
        return None;
    }

    let t = ((p3.x - p1.x) * d2y - (p3.y - p1.y) * d2x) / denom;
    Some(Point::new(p1.x + d1x * t, p1.y + d1y * t))
}

/// Steps needed for an arc of `sweep` radians when a full turn gets `detail` steps.
///
/// Never fewer than 2, so even coarse arcs keep a visible bend.
#[inline]
pub fn arc_steps(detail: u32, sweep: f64) -> u32 {
    ((detail as f64 * (sweep.abs() / TAU)).ceil() as u32).max(2)
}

/// Sample a circular arc into `steps + 1` points, both ends included.
///
/// `start` and `sweep` are in radians; a negative sweep runs clockwise.
/// Sampling goes through `lyon_geom::Arc` at uniform parameter steps.
pub fn sample_arc(center: Point, radius: f64, start: f64, sweep: f64, steps: u32) -> Vec<Point> {
    let steps = steps.max(1);
    let arc = Arc {
        center: point(center.x, center.y),
        radii: vector(radius, radius),
        start_angle: Angle::radians(start),
        sweep_angle: Angle::radians(sweep),
        x_rotation: Angle::radians(0.0),
    };

    (0..=steps)
        .map(|i| {
            let p = arc.sample(i as f64 / steps as f64);
            Point::new(p.x, p.y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn regular_polygon_vertices_on_circle() {
        let verts = regular_polygon(Point::ORIGIN, 5, 2.0, FRAC_PI_2);
        assert_eq!(verts.len(), 5);
        for v in &verts {
            assert_abs_diff_eq!(v.distance(Point::ORIGIN), 2.0, epsilon = 1e-12);
        }
        // First vertex points straight up the +y axis
        assert_abs_diff_eq!(verts[0].x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(verts[0].y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn hex_ring_sizes() {
        assert_eq!(hex_ring(Point::ORIGIN, 0, 1.0, 0.0).len(), 1);
        assert_eq!(hex_ring(Point::ORIGIN, 1, 1.0, 0.0).len(), 6);
        assert_eq!(hex_ring(Point::ORIGIN, 2, 1.0, 0.0).len(), 12);
        assert_eq!(hex_ring(Point::ORIGIN, 3, 1.0, 0.0).len(), 18);
    }

    #[test]
    fn hex_ring_two_has_corners_and_midpoints() {
        let ring = hex_ring(Point::ORIGIN, 2, 1.0, 0.0);
        let mut corner = 0;
        let mut mid = 0;
        for p in &ring {
            let d = p.distance(Point::ORIGIN);
            if (d - 2.0).abs() < 1e-9 {
                corner += 1;
            } else if (d - 3.0_f64.sqrt()).abs() < 1e-9 {
                mid += 1;
            }
        }
        assert_eq!((corner, mid), (6, 6));
    }

    #[test]
    fn hex_packing_counts() {
        assert_eq!(hex_packing(Point::ORIGIN, 2, 1.0, 1.0, 0.0).len(), 19);
    }

    #[test]
    fn unit_circles_one_apart_meet_at_sixty_degrees() {
        let a = Circle::new(0.0, 0.0, 1.0);
        let b = Circle::new(1.0, 0.0, 1.0);
        let (p, q) = circle_intersections(&a, &b).unwrap();
        assert_abs_diff_eq!(p.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(q.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y.abs(), 3.0_f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, -q.y, epsilon = 1e-12);
    }

    #[test]
    fn separate_circles_do_not_meet() {
        let a = Circle::new(0.0, 0.0, 1.0);
        let b = Circle::new(5.0, 0.0, 1.0);
        assert!(circle_intersections(&a, &b).is_none());
        assert!(circle_intersections(&a, &a).is_none());
    }

    #[test]
    fn crossing_lines_intersect() {
        let p = line_intersection(
            Point::new(-1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
            Point::new(1.0, -1.0),
        )
        .unwrap();
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let p = line_intersection(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        );
        assert!(p.is_none());
    }

    #[test]
    fn intersections_hold_at_tiny_scales() {
        let s = 1e-9;
        let a = Circle::new(0.0, 0.0, s);
        let b = Circle::new(s, 0.0, s);
        let (p, _) = circle_intersections(&a, &b).unwrap();
        assert_abs_diff_eq!(p.x / s, 0.5, epsilon = 1e-9);
        assert!(circle_intersections(&a, &a).is_none());

        let p = line_intersection(
            Point::new(-s, -s),
            Point::new(s, s),
            Point::new(-s, s),
            Point::new(s, -s),
        )
        .unwrap();
        assert_abs_diff_eq!(p.x / s, 0.0, epsilon = 1e-9);
        assert!(line_intersection(Point::ORIGIN, Point::new(s, 0.0), Point::new(0.0, s), Point::new(s, s)).is_none());
    }

    #[test]
    fn arc_steps_scale_with_detail() {
        assert_eq!(arc_steps(140, TAU), 140);
        assert_eq!(arc_steps(140, FRAC_PI_2), 35);
        assert_eq!(arc_steps(1, FRAC_PI_2), 2);
    }

    #[test]
    fn arc_samples_include_both_ends() {
        let pts = sample_arc(Point::ORIGIN, 1.0, 0.0, PI, 8);
        assert_eq!(pts.len(), 9);
        assert_abs_diff_eq!(pts[0].x, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[8].x, -1.0, epsilon = 1e-9);
        for p in &pts {
            assert_abs_diff_eq!(p.distance(Point::ORIGIN), 1.0, epsilon = 1e-9);
        }
    }
}
