//! Metatron's Cube and the Vector Equilibrium.

use std::f64::consts::FRAC_PI_2;

use crate::geometry::{Circle, GeometryOutput, Point, Polyline, Segment};
use crate::primitives::regular_polygon;

use super::lattice::fruit_centers;

/// Metatron's Cube: the Fruit of Life with every pair of centers joined.
///
/// 13 circles and 13·12/2 = 78 segments, emitted in (i, j) order with i < j.
pub fn generate_metatrons_cube(unit: f64) -> GeometryOutput {
    let centers = fruit_centers(unit);

    let mut segments = Vec::with_capacity(centers.len() * (centers.len() - 1) / 2);
    for (i, &a) in centers.iter().enumerate() {
        for &b in &centers[i + 1..] {
            segments.push(Segment::new(a, b));
        }
    }

    GeometryOutput {
        circles: centers.into_iter().map(|c| Circle::at(c, unit)).collect(),
        polylines: Vec::new(),
        segments,
    }
}

/// Vector Equilibrium seen along a 3-fold axis.
///
/// A hexagon with its bounding circle, the six radii from the center, and
/// the inner star joining every second vertex.
pub fn generate_vector_equilibrium(unit: f64) -> GeometryOutput {
    let radius = 2.0 * unit;
    let hex = regular_polygon(Point::ORIGIN, 6, radius, FRAC_PI_2);

    let mut segments: Vec<Segment> = hex.iter().map(|&v| Segment::new(Point::ORIGIN, v)).collect();
    for i in 0..6 {
        segments.push(Segment::new(hex[i], hex[(i + 2) % 6]));
    }

    GeometryOutput {
        circles: vec![Circle::at(Point::ORIGIN, radius)],
        polylines: vec![Polyline::closed(hex)],
        segments,
    }
}
