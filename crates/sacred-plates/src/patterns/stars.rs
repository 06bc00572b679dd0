//! Star polygons: hexagram, pentagram and the star of Lakshmi.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::error::GenerationError;
use crate::geometry::{Circle, GeometryOutput, Point, Polyline};
use crate::primitives::{line_intersection, regular_polygon};

/// Hexagram: two interlaced triangles with a small circle on each of the
/// six points.
pub fn generate_hexagram(unit: f64) -> GeometryOutput {
    let radius = 2.0 * unit;
    let up = regular_polygon(Point::ORIGIN, 3, radius, FRAC_PI_2);
    let down = regular_polygon(Point::ORIGIN, 3, radius, -FRAC_PI_2);

    // Star points alternate between the two triangles
    let circles = regular_polygon(Point::ORIGIN, 6, radius, FRAC_PI_2)
        .into_iter()
        .map(|p| Circle::at(p, unit / 3.0))
        .collect();

    GeometryOutput {
        circles,
        polylines: vec![Polyline::closed(up), Polyline::closed(down)],
        segments: Vec::new(),
    }
}

/// Pentagram: the {5/2} star inside its pentagon, plus the inner pentagon
/// where the star's chords cross, with circles through both vertex sets.
pub fn generate_pentagram(unit: f64) -> Result<GeometryOutput, GenerationError> {
    let radius = 2.0 * unit;
    let outer = regular_polygon(Point::ORIGIN, 5, radius, FRAC_PI_2);

    let star: Vec<Point> = (0..5).map(|k| outer[(2 * k) % 5]).collect();

    // Inner vertex k: chord (k, k+2) crossed by chord (k+1, k+4)
    let inner = (0..5)
        .map(|k| {
            line_intersection(outer[k], outer[(k + 2) % 5], outer[(k + 1) % 5], outer[(k + 4) % 5])
                .ok_or_else(|| GenerationError::Degenerate {
                    pattern: "pentagram",
                    reason: format!("star chords {} and {} are parallel", k, k + 1),
                })
        })
        .collect::<Result<Vec<Point>, _>>()?;

    let inner_radius = inner[0].distance(Point::ORIGIN);

    Ok(GeometryOutput {
        circles: vec![
            Circle::at(Point::ORIGIN, radius),
            Circle::at(Point::ORIGIN, inner_radius),
        ],
        polylines: vec![
            Polyline::closed(outer),
            Polyline::closed(star),
            Polyline::closed(inner),
        ],
        segments: Vec::new(),
    })
}

/// Star of Lakshmi: two squares offset by 45°, with the circle through
/// their corners and the circle both squares enclose.
pub fn generate_star_of_lakshmi(unit: f64) -> GeometryOutput {
    let radius = 2.0 * unit;
    let square = regular_polygon(Point::ORIGIN, 4, radius, FRAC_PI_2);
    let diamond = regular_polygon(Point::ORIGIN, 4, radius, FRAC_PI_2 + FRAC_PI_4);

    // Inradius of a square with circumradius R is R·cos(π/4)
    let inner = radius * (PI / 4.0).cos();

    GeometryOutput {
        circles: vec![
            Circle::at(Point::ORIGIN, radius),
            Circle::at(Point::ORIGIN, inner),
        ],
        polylines: vec![Polyline::closed(square), Polyline::closed(diamond)],
        segments: Vec::new(),
    }
}
