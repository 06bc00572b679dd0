//! Tree of Life: ten sephirot joined by twenty-two paths.

use crate::geometry::{Circle, GeometryOutput, Point, Segment};

/// Sephirot centers in units of `r`, Keter first, Malkuth last.
/// Three pillars at x = -1.5, 0, 1.5.
const SEPHIROT: [(f64, f64); 10] = [
    (0.0, 4.0),   // Keter
    (1.5, 3.0),   // Chokmah
    (-1.5, 3.0),  // Binah
    (1.5, 1.0),   // Chesed
    (-1.5, 1.0),  // Geburah
    (0.0, 0.0),   // Tiphareth
    (1.5, -1.0),  // Netzach
    (-1.5, -1.0), // Hod
    (0.0, -2.0),  // Yesod
    (0.0, -3.5),  // Malkuth
];

/// The twenty-two paths as zero-based sephirah index pairs.
const PATHS: [(usize, usize); 22] = [
    (0, 1), (0, 2), (0, 5),
    (1, 2), (1, 3), (1, 5),
    (2, 4), (2, 5),
    (3, 4), (3, 5), (3, 6),
    (4, 5), (4, 7),
    (5, 6), (5, 7), (5, 8),
    (6, 7), (6, 8), (6, 9),
    (7, 8), (7, 9),
    (8, 9),
];

/// Sephirah radius in units of `r`.
const SEPHIRAH_RADIUS: f64 = 0.42;

/// Generate the Tree of Life plate.
///
/// Paths are trimmed to the sephirah rims so no line crosses a circle.
pub fn generate_tree_of_life(unit: f64) -> GeometryOutput {
    let radius = SEPHIRAH_RADIUS * unit;
    let centers: Vec<Point> = SEPHIROT
        .iter()
        .map(|&(x, y)| Point::new(x * unit, y * unit))
        .collect();

    let segments = PATHS
        .iter()
        .map(|&(i, j)| trimmed(centers[i], centers[j], radius))
        .collect();

    GeometryOutput {
        circles: centers.into_iter().map(|c| Circle::at(c, radius)).collect(),
        polylines: Vec::new(),
        segments,
    }
}

/// Segment from `a` to `b` with `inset` removed from both ends.
fn trimmed(a: Point, b: Point, inset: f64) -> Segment {
    let length = a.distance(b);
    let ux = (b.x - a.x) / length;
    let uy = (b.y - a.y) / length;
    Segment::new(a.offset(ux * inset, uy * inset), b.offset(-ux * inset, -uy * inset))
}
