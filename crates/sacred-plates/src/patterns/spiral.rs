//! Golden (Fibonacci) spiral: quarter arcs through a growing square tiling.
//!
//! Squares are attached counter-clockwise (right, top, left, bottom) to
//! the rectangle built so far. Each new square's side equals the side of
//! the rectangle it attaches to, which yields the Fibonacci sequence. A
//! quarter arc inside each square continues the spiral from the previous
//! one.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::geometry::{GeometryOutput, Point, Polyline};
use crate::primitives::{arc_steps, sample_arc};

/// Number of squares (and quarter turns) in the plate.
const TURNS: usize = 8;

/// Generate the golden spiral plate.
///
/// Polylines: one closed outline per square in attachment order, then the
/// spiral itself as one continuous run. Quarter arcs get `detail` steps
/// per full turn.
pub fn generate_golden_spiral(unit: f64, detail: u32) -> GeometryOutput {
    // Rectangle covered so far: (x0, y0, x1, y1), starting with a unit square
    let (mut x0, mut y0, mut x1, mut y1) = (0.0, 0.0, 1.0, 1.0);

    let mut squares = vec![square(0.0, 0.0, 1.0)];
    // The seed square's arc bends around its top-right corner
    let mut arcs = vec![(Point::new(1.0, 1.0), 1.0, PI)];

    for k in 1..TURNS {
        match k % 4 {
            1 => {
                let s = y1 - y0;
                squares.push(square(x1, y0, s));
                arcs.push((Point::new(x1, y1), s, -FRAC_PI_2));
                x1 += s;
            }
            2 => {
                let s = x1 - x0;
                squares.push(square(x0, y1, s));
                arcs.push((Point::new(x0, y1), s, 0.0));
                y1 += s;
            }
            3 => {
                let s = y1 - y0;
                squares.push(square(x0 - s, y0, s));
                arcs.push((Point::new(x0, y0), s, FRAC_PI_2));
                x0 -= s;
            }
            _ => {
                let s = x1 - x0;
                squares.push(square(x0, y0 - s, s));
                arcs.push((Point::new(x1, y0), s, PI));
                y0 -= s;
            }
        }
    }

    // Center the tiling on the origin and scale its long side to 6r
    let cx = (x0 + x1) / 2.0;
    let cy = (y0 + y1) / 2.0;
    let scale = 6.0 * unit / (x1 - x0).max(y1 - y0);
    let place = |p: Point| Point::new((p.x - cx) * scale, (p.y - cy) * scale);

    let mut spiral: Vec<Point> = Vec::new();
    let steps = arc_steps(detail, FRAC_PI_2);
    for (center, radius, start) in arcs {
        let arc = sample_arc(center, radius, start, FRAC_PI_2, steps);
        // Consecutive arcs share an endpoint; keep only one copy
        let skip = usize::from(!spiral.is_empty());
        spiral.extend(arc.into_iter().skip(skip).map(place));
    }

    let mut polylines: Vec<Polyline> = squares
        .into_iter()
        .map(|corners| Polyline::closed(corners.into_iter().map(place).collect()))
        .collect();
    polylines.push(Polyline::new(spiral));

    GeometryOutput {
        circles: Vec::new(),
        polylines,
        segments: Vec::new(),
    }
}

/// Corners of the axis-aligned square with lower-left corner (x, y).
fn square(x: f64, y: f64, side: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + side, y),
        Point::new(x + side, y + side),
        Point::new(x, y + side),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side(poly: &Polyline) -> f64 {
        poly.points[0].distance(poly.points[1])
    }

    #[test]
    fn square_sides_follow_fibonacci() {
        let geometry = generate_golden_spiral(1.0, 48);
        assert_eq!(geometry.polylines.len(), TURNS + 1);

        let sides: Vec<f64> = geometry.polylines[..TURNS].iter().map(side).collect();
        for k in 2..TURNS {
            let expected = sides[k - 1] + sides[k - 2];
            assert!((sides[k] - expected).abs() < 1e-9, "square {} breaks the sequence", k);
        }
    }

    #[test]
    fn spiral_is_continuous() {
        let geometry = generate_golden_spiral(1.0, 64);
        let spiral = geometry.polylines.last().unwrap();
        let longest_step = spiral
            .points
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .fold(0.0, f64::max);
        // Largest quarter arc has radius ~3.7 at this scale; 16 steps per
        // quarter keeps each chord well under one unit.
        assert!(longest_step < 0.5, "gap of {} in the spiral", longest_step);
    }

    #[test]
    fn tiling_is_centered() {
        let geometry = generate_golden_spiral(1.0, 24);
        let (min_x, min_y, max_x, max_y) = geometry.bounding_box().unwrap();
        assert!((min_x + max_x).abs() < 1e-9);
        assert!((min_y + max_y).abs() < 1e-9);
        assert!((max_x - min_x - 6.0).abs() < 1e-9);
    }
}
