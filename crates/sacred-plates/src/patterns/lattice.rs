//! Circle-lattice plates: Flower, Seed, Egg and Fruit of Life, and the torus.
//!
//! All of these are equal circles placed on hexagonal lattice points, so
//! they only differ in lattice spacing and how many rings they take.
//! Rings are rotated a quarter turn so a column of circles runs vertically
//! through the center, the way these figures are traditionally drawn.

use std::f64::consts::FRAC_PI_2;

use crate::geometry::{Circle, GeometryOutput, Point};
use crate::primitives::{circle_ring, hex_packing, regular_polygon};

/// Flower of Life: 19 circles, two hexagonal rings at spacing `r`.
///
/// Every circle passes through the centers of its six neighbours.
pub fn generate_flower_of_life(unit: f64) -> GeometryOutput {
    GeometryOutput {
        circles: hex_packing(Point::ORIGIN, 2, unit, unit, FRAC_PI_2),
        ..GeometryOutput::default()
    }
}

/// Seed of Life: the center circle and its first ring of six.
pub fn generate_seed_of_life(unit: f64) -> GeometryOutput {
    GeometryOutput {
        circles: hex_packing(Point::ORIGIN, 1, unit, unit, FRAC_PI_2),
        ..GeometryOutput::default()
    }
}

/// Egg of Life: seven circles that touch without overlapping.
pub fn generate_egg_of_life(unit: f64) -> GeometryOutput {
    GeometryOutput {
        circles: hex_packing(Point::ORIGIN, 1, 2.0 * unit, unit, FRAC_PI_2),
        ..GeometryOutput::default()
    }
}

/// Centers of the 13 Fruit of Life circles: center, inner hexagon at `2r`,
/// outer hexagon at `4r` along the same six directions.
pub(crate) fn fruit_centers(unit: f64) -> Vec<Point> {
    let mut centers = vec![Point::ORIGIN];
    centers.extend(regular_polygon(Point::ORIGIN, 6, 2.0 * unit, FRAC_PI_2));
    centers.extend(regular_polygon(Point::ORIGIN, 6, 4.0 * unit, FRAC_PI_2));
    centers
}

/// Fruit of Life: 13 non-overlapping circles.
pub fn generate_fruit_of_life(unit: f64) -> GeometryOutput {
    GeometryOutput {
        circles: fruit_centers(unit)
            .into_iter()
            .map(|c| Circle::at(c, unit))
            .collect(),
        ..GeometryOutput::default()
    }
}

/// Circles around the torus ring. Twelve is the traditional count.
const TORUS_CIRCLES: usize = 12;

/// Torus: twelve circles whose centers sit on a ring of radius `r`,
/// so each passes through the origin, enclosed by a boundary circle.
pub fn generate_torus(unit: f64) -> GeometryOutput {
    let mut circles = circle_ring(Point::ORIGIN, TORUS_CIRCLES, unit, unit, FRAC_PI_2);
    circles.push(Circle::at(Point::ORIGIN, 2.0 * unit));
    GeometryOutput {
        circles,
        ..GeometryOutput::default()
    }
}
