//! Sri Yantra: nine interlocking triangles inside lotus rings and a square enclosure.
//!
//! The triangle proportions come from a fixed table rather than an
//! iterative concurrency solve, so the figure is exact and reproducible.
//! The two outermost triangles have their base corners on the inner circle.

use crate::geometry::{Circle, GeometryOutput, Point, Polyline};

/// One triangle as fractions of the inner circle's radius:
/// (base y, apex y, base half-width). Apex above base points upward.
type TriangleSpec = (f64, f64, f64);

/// Four upward (Shiva) triangles, outermost first.
const UPWARD: [TriangleSpec; 4] = [
    (-0.68, 1.00, 0.733),
    (-0.50, 0.76, 0.700),
    (-0.32, 0.55, 0.580),
    (-0.13, 0.30, 0.380),
];

/// Five downward (Shakti) triangles, outermost first.
const DOWNWARD: [TriangleSpec; 5] = [
    (0.79, -1.00, 0.613),
    (0.59, -0.82, 0.700),
    (0.39, -0.63, 0.620),
    (0.22, -0.40, 0.460),
    (0.08, -0.18, 0.250),
];

/// Lotus ring radii and the bindu, relative to the inner circle.
const LOTUS_RINGS: [f64; 2] = [1.12, 1.24];
const BINDU: f64 = 0.025;

/// Half side of the square enclosure (bhupura).
const ENCLOSURE: f64 = 1.4;

/// Generate the Sri Yantra plate.
///
/// Circles: inner circle, two lotus rings, bindu. Polylines: the four
/// upward triangles, the five downward triangles, then the enclosure.
pub fn generate_sri_yantra(unit: f64) -> GeometryOutput {
    let radius = 2.0 * unit;

    let mut circles = vec![Circle::at(Point::ORIGIN, radius)];
    circles.extend(LOTUS_RINGS.iter().map(|k| Circle::at(Point::ORIGIN, radius * k)));
    circles.push(Circle::at(Point::ORIGIN, radius * BINDU));

    let mut polylines: Vec<Polyline> = UPWARD
        .iter()
        .chain(DOWNWARD.iter())
        .map(|&spec| triangle(spec, radius))
        .collect();

    let h = radius * ENCLOSURE;
    polylines.push(Polyline::closed(vec![
        Point::new(-h, -h),
        Point::new(h, -h),
        Point::new(h, h),
        Point::new(-h, h),
    ]));

    GeometryOutput {
        circles,
        polylines,
        segments: Vec::new(),
    }
}

fn triangle((base_y, apex_y, half_width): TriangleSpec, radius: f64) -> Polyline {
    Polyline::closed(vec![
        Point::new(0.0, apex_y * radius),
        Point::new(-half_width * radius, base_y * radius),
        Point::new(half_width * radius, base_y * radius),
    ])
}
