//! Plane geometry for the mesh: points and triangles.

/// A point in the pattern plane, in pixel coordinates.
///
/// The origin is the top-left corner; `x` grows rightward and `y` downward,
/// matching both canvas and SVG conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A triangle over three mesh points.
///
/// Vertex order is whatever the triangulation produced; no winding is
/// guaranteed or required by any consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// The arithmetic mean of the three vertices.
    pub fn centroid(&self) -> Point {
        Point {
            x: (self.a.x + self.b.x + self.c.x) / 3.0,
            y: (self.a.y + self.b.y + self.c.y) / 3.0,
        }
    }

    /// Unsigned area via the shoelace formula.
    pub fn area(&self) -> f64 {
        let twice = (self.b.x - self.a.x) * (self.c.y - self.a.y)
            - (self.c.x - self.a.x) * (self.b.y - self.a.y);
        twice.abs() / 2.0
    }

    /// The three vertices in stored order.
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }
}
