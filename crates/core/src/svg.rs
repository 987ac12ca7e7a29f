//! SVG serialization of a colored triangle list.
//!
//! One `<polygon>` per triangle inside a single `<svg>` root, no whitespace
//! between elements. Coordinates and colors cannot contain XML-special
//! characters, so no escaping is involved and the output of a given pattern
//! is byte-stable.

use crate::colorize::ColoredTriangle;

/// Serializes colored triangles into a standalone SVG document string.
///
/// The root carries `viewBox="0 0 {width} {height}"`; each triangle becomes
/// `<polygon points="x0,y0 x1,y1 x2,y2" fill="#..." stroke="#..." />` with
/// fill and stroke both set to the triangle color, in input order.
pub fn render_svg(width: u32, height: u32, triangles: &[ColoredTriangle]) -> String {
    let mut polygons = String::new();
    for colored in triangles {
        let t = &colored.triangle;
        let color = colored.color.to_hex();
        polygons.push_str(&format!(
            r#"<polygon points="{},{} {},{} {},{}" fill="{color}" stroke="{color}" />"#,
            t.a.x, t.a.y, t.b.x, t.b.y, t.c.x, t.c.y
        ));
    }
    format!(
        r#"<svg viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">{polygons}</svg>"#
    )
}
