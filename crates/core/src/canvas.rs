//! Rendering sinks for triangle painting.
//!
//! The [`Canvas`] trait is the whole sink contract: stroke and fill one
//! closed triangle path. [`RasterCanvas`] is the built-in CPU implementation
//! over an RGBA8 buffer; anything else that can paint a triangle (a GPU
//! surface, a plotter, a recording mock) slots in behind the same trait.

use crate::color::Srgb;
use crate::geom::Triangle;

/// A surface that can paint one filled-and-stroked triangle.
pub trait Canvas {
    /// Fills the triangle, then strokes its three edges.
    fn paint_triangle(&mut self, triangle: &Triangle, fill: Srgb, stroke: Srgb);
}

/// CPU raster surface over a row-major RGBA8 buffer.
///
/// The buffer is `width * height * 4` bytes, alpha always 255, initialized
/// to white. Geometry outside the surface is clipped silently. Painting the
/// same triangles again overwrites the same pixels, so redraws are
/// idempotent.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Quantizes a color to four RGBA bytes, alpha 255.
fn to_rgba8(color: Srgb) -> [u8; 4] {
    let r = (color.r.clamp(0.0, 1.0) * 255.0).round() as u8;
    let g = (color.g.clamp(0.0, 1.0) * 255.0).round() as u8;
    let b = (color.b.clamp(0.0, 1.0) * 255.0).round() as u8;
    [r, g, b, 255]
}

impl RasterCanvas {
    /// Creates a white canvas of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        };
        canvas.clear(Srgb::WHITE);
        canvas
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8 buffer, row-major, `width * height * 4` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the canvas, returning the RGBA8 buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The RGBA bytes at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Floods the whole surface with one color.
    pub fn clear(&mut self, color: Srgb) {
        let rgba = to_rgba8(color);
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    fn set_pixel(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    fn fill_triangle(&mut self, t: &Triangle, rgba: [u8; 4]) {
        let min_x = t.a.x.min(t.b.x).min(t.c.x).floor().max(0.0) as i64;
        let min_y = t.a.y.min(t.b.y).min(t.c.y).floor().max(0.0) as i64;
        let max_x = (t.a.x.max(t.b.x).max(t.c.x).ceil() as i64).min(i64::from(self.width) - 1);
        let max_y = (t.a.y.max(t.b.y).max(t.c.y).ceil() as i64).min(i64::from(self.height) - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Test the pixel center.
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;
                if point_in_triangle(px, py, t) {
                    self.set_pixel(x, y, rgba);
                }
            }
        }
    }

    fn stroke_triangle(&mut self, t: &Triangle, rgba: [u8; 4]) {
        let corners = [
            (t.a.x.round() as i64, t.a.y.round() as i64),
            (t.b.x.round() as i64, t.b.y.round() as i64),
            (t.c.x.round() as i64, t.c.y.round() as i64),
        ];
        for i in 0..3 {
            let (x0, y0) = corners[i];
            let (x1, y1) = corners[(i + 1) % 3];
            self.draw_line(x0, y0, x1, y1, rgba);
        }
    }

    fn draw_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, rgba: [u8; 4]) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.set_pixel(x, y, rgba);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Sign-based inside test accepting both windings; points on an edge count
/// as inside.
fn point_in_triangle(px: f64, py: f64, t: &Triangle) -> bool {
    let cross = |ax: f64, ay: f64, bx: f64, by: f64| (px - bx) * (ay - by) - (ax - bx) * (py - by);
    let d1 = cross(t.a.x, t.a.y, t.b.x, t.b.y);
    let d2 = cross(t.b.x, t.b.y, t.c.x, t.c.y);
    let d3 = cross(t.c.x, t.c.y, t.a.x, t.a.y);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

impl Canvas for RasterCanvas {
    fn paint_triangle(&mut self, triangle: &Triangle, fill: Srgb, stroke: Srgb) {
        let fill = to_rgba8(fill);
        let stroke = to_rgba8(stroke);
        self.fill_triangle(triangle, fill);
        self.stroke_triangle(triangle, stroke);
    }
}
