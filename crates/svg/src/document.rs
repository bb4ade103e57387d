//! Export of flattened shapes as a standalone SVG document.

use crate::shape::Shape;
use crate::style::serialize_style;
use crate::path::serialize_polyline;
use std::fmt::Write;

const MIN_DOCUMENT_SIZE: f64 = 100.0;
const DOCUMENT_MARGIN: f64 = 1.1;

/// Writes the shapes as `<path>` elements of an `<svg>` document.
///
/// The document is at least 100 units wide and high, and 10% larger than the furthest
/// point of any shape.
pub fn serialize_document(shapes: &[Shape]) -> String {
    let mut width = MIN_DOCUMENT_SIZE;
    let mut height = MIN_DOCUMENT_SIZE;
    for p in shapes.iter().flat_map(|shape| shape.polyline.points.iter()) {
        width = width.max(p.x);
        height = height.max(p.y);
    }

    let mut output = String::new();
    let _ = writeln!(
        output,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
        width * DOCUMENT_MARGIN,
        height * DOCUMENT_MARGIN,
    );
    for shape in shapes {
        let _ = writeln!(
            output,
            "  <path d=\"{}\" style=\"{}\"/>",
            serialize_polyline(&shape.polyline),
            escape_attribute(&serialize_style(&shape.style)),
        );
    }
    output.push_str("</svg>\n");

    output
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
use crate::shape::ShapeKind;
#[cfg(test)]
use crate::style::{Paint, Style};
#[cfg(test)]
use crate::path::{math::point, Polyline};

#[test]
fn document_size_and_content() {
    let shapes = vec![
        Shape {
            kind: ShapeKind::Rect,
            polyline: Polyline::new(
                vec![point(0.0, 0.0), point(200.0, 0.0), point(200.0, 50.0)],
                true,
            ),
            style: Style {
                fill: Some(Paint::Color("\"red\"".to_string())),
                ..Style::default()
            },
        },
        Shape {
            kind: ShapeKind::Path,
            polyline: Polyline::new(vec![point(10.0, 10.0), point(20.0, 20.0)], false),
            style: Style::default(),
        },
    ];

    let document = serialize_document(&shapes);
    assert!(document.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"220"));
    assert!(document.contains(" height=\"110"));
    assert!(document.contains("<path d=\"M 0,0 L 200,0 L 200,50 Z\" style=\"fill:&quot;red&quot;;stroke:none;\"/>"));
    assert!(document.contains("<path d=\"M 10,10 L 20,20\" style=\"fill:none;stroke:none;\"/>"));
    assert!(document.ends_with("</svg>\n"));
}
