//! Line-set conversion for 3-D curve and tube builders.
//!
//! Flattens a [`GeometryOutput`] into plain point runs on the z = 0 plane:
//! circles first, then polylines, then segments, each in source order.
//! No validation happens here; NaNs in, NaNs out.

use std::f64::consts::TAU;

use crate::geometry::{Circle, GeometryOutput, LineSet, Point3, Polyline3D};

/// Convert geometry to a line set.
///
/// Every circle becomes a closed loop of `detail + 1` points sampled at
/// `TAU * i / detail`. The final sample reuses angle zero, so the loop's
/// last point equals its first exactly. A `detail` of 0 is treated as 1.
pub fn to_line_set(geometry: &GeometryOutput, detail: u32) -> LineSet {
    let detail = detail.max(1);
    let mut set = Vec::with_capacity(geometry.element_count());

    set.extend(geometry.circles.iter().map(|c| circle_loop(c, detail)));
    set.extend(
        geometry
            .polylines
            .iter()
            .map(|line| line.points.iter().map(|p| p.lift()).collect::<Polyline3D>()),
    );
    set.extend(geometry.segments.iter().map(|s| vec![s.a.lift(), s.b.lift()]));

    set
}

fn circle_loop(circle: &Circle, detail: u32) -> Polyline3D {
    (0..=detail)
        .map(|i| {
            let angle = TAU * (i % detail) as f64 / detail as f64;
            Point3 {
                x: circle.cx + circle.r * angle.cos(),
                y: circle.cy + circle.r * angle.sin(),
                z: 0.0,
            }
        })
        .collect()
}
