//! Triangulation of the point set into a mesh.
//!
//! The triangulation contract is narrow on purpose: points in, index triples
//! out. The default implementation delegates to the `delaunator` crate; any
//! other strategy (fan triangulation, a fixed mesh in tests) can be swapped
//! in through the [`Triangulator`] trait.

use crate::geom::{Point, Triangle};

/// Turns a point slice into triangle index triples.
///
/// Implementations decide nothing about point validity: degenerate input
/// (fewer than three points, all collinear) yields whatever the underlying
/// algorithm produces, which for Delaunay is an empty list.
pub trait Triangulator {
    fn triangulate(&self, points: &[Point]) -> Vec<[usize; 3]>;
}

/// Delaunay triangulation via the `delaunator` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Delaunay;

impl Triangulator for Delaunay {
    fn triangulate(&self, points: &[Point]) -> Vec<[usize; 3]> {
        let input: Vec<delaunator::Point> = points
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect();
        delaunator::triangulate(&input)
            .triangles
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect()
    }
}

/// Maps index triples back onto the point set, in emission order.
pub fn build_triangles(points: &[Point], triangulator: &dyn Triangulator) -> Vec<Triangle> {
    triangulator
        .triangulate(points)
        .into_iter()
        .map(|[a, b, c]| Triangle::new(points[a], points[b], points[c]))
        .collect()
}
