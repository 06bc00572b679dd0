//! Core geometry types for sacred-plates.
//!
//! Generators describe a plate in a canonical coordinate space centered on
//! the origin. Nothing here knows about canvases, pixels, or SVG; the
//! renderer and the line-set converter each take a [`GeometryOutput`] and
//! map it to their own space.
//!
//! ## Rust Lesson #2: Structs & Derives
//!
//! `#[derive(Serialize, Deserialize)]` comes from serde. It writes the
//! JSON conversion code for us, the same way `Debug` writes the printing
//! code. The CLI uses it to hand line sets to 3-D consumers.

use serde::{Deserialize, Serialize};

/// A 2D point in canonical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A circle given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// An open or closed run of points. Closed runs repeat their first point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
}

/// A straight segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

/// Renderer-agnostic description of one plate.
///
/// The three collections are ordered; renderers and converters preserve
/// that order so output is reproducible element by element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeometryOutput {
    pub circles: Vec<Circle>,
    pub polylines: Vec<Polyline>,
    pub segments: Vec<Segment>,
}

/// Parameters shared by every generator.
///
/// `size` scales the pattern; `detail` controls how finely curved
/// polylines are sampled. Neither changes how many circles a plate has.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryParameters {
    pub size: f64,
    pub detail: u32,
}

/// A point lifted into 3-D for curve and tube builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One continuous 3-D curve.
pub type Polyline3D = Vec<Point3>;

/// Every curve of a plate, in emission order.
pub type LineSet = Vec<Polyline3D>;

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin of canonical space.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Point at `radius` from the origin along `angle` (radians).
    #[inline]
    pub fn polar(radius: f64, angle: f64) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin())
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Lift onto the z = 0 plane.
    #[inline]
    pub fn lift(&self) -> Point3 {
        Point3 { x: self.x, y: self.y, z: 0.0 }
    }
}

impl Circle {
    #[inline]
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self { cx, cy, r }
    }

    /// Circle of radius `r` centered on `center`.
    #[inline]
    pub fn at(center: Point, r: f64) -> Self {
        Self::new(center.x, center.y, r)
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cx.is_finite() && self.cy.is_finite() && self.r.is_finite()
    }
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build a closed loop: the first point is repeated at the end.
    pub fn closed(mut points: Vec<Point>) -> Self {
        if let Some(&first) = points.first() {
            points.push(first);
        }
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the run ends where it starts.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => self.points.len() > 2 && a == b,
            _ => false,
        }
    }
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }
}

impl GeometryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when all three collections are empty. Valid, but draws nothing.
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.polylines.is_empty() && self.segments.is_empty()
    }

    /// Number of drawable elements (one per circle, polyline and segment).
    pub fn element_count(&self) -> usize {
        self.circles.len() + self.polylines.len() + self.segments.len()
    }

    /// Get the bounding box as (min_x, min_y, max_x, max_y).
    ///
    /// Circles contribute their full extent (center ± radius), not just
    /// their centers. Returns `None` for empty geometry.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut any = false;

        let mut include = |x0: f64, y0: f64, x1: f64, y1: f64| {
            min_x = min_x.min(x0);
            min_y = min_y.min(y0);
            max_x = max_x.max(x1);
            max_y = max_y.max(y1);
            any = true;
        };

        for c in &self.circles {
            let r = c.r.abs();
            include(c.cx - r, c.cy - r, c.cx + r, c.cy + r);
        }
        for p in self.polylines.iter().flat_map(|line| line.points.iter()) {
            include(p.x, p.y, p.x, p.y);
        }
        for s in &self.segments {
            include(s.a.x, s.a.y, s.a.x, s.a.y);
            include(s.b.x, s.b.y, s.b.x, s.b.y);
        }

        any.then_some((min_x, min_y, max_x, max_y))
    }

    /// Describe the first element holding a NaN or infinite value, if any.
    pub fn first_non_finite(&self) -> Option<String> {
        if let Some(i) = self.circles.iter().position(|c| !c.is_finite()) {
            return Some(format!("circle #{}", i));
        }
        if let Some(i) = self
            .polylines
            .iter()
            .position(|line| line.points.iter().any(|p| !p.is_finite()))
        {
            return Some(format!("polyline #{}", i));
        }
        self.segments
            .iter()
            .position(|s| !s.a.is_finite() || !s.b.is_finite())
            .map(|i| format!("segment #{}", i))
    }
}

impl Default for GeometryParameters {
    fn default() -> Self {
        Self { size: 2.0, detail: 48 }
    }
}

impl GeometryParameters {
    pub fn new(size: f64, detail: u32) -> Self {
        Self { size, detail }
    }
}
