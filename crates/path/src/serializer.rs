//! Writes polylines back as path strings.

use crate::polygon::Polyline;
use std::fmt::Write;

/// Serializes a polyline as `M x,y L x,y ... Z`.
///
/// Only straight segments are emitted, `Z` is appended when the polyline is closed.
pub fn serialize_polyline(polyline: &Polyline) -> String {
    let mut output = String::new();

    for (idx, p) in polyline.points.iter().enumerate() {
        if idx == 0 {
            let _ = write!(output, "M {},{}", p.x, p.y);
        } else {
            let _ = write!(output, " L {},{}", p.x, p.y);
        }
    }

    if polyline.closed && !polyline.points.is_empty() {
        output.push_str(" Z");
    }

    output
}

#[cfg(test)]
use crate::interpreter::{flatten_path, FlattenOptions};
#[cfg(test)]
use crate::math::point;

#[test]
fn serialize_square() {
    let polyline = Polyline::new(
        vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.5)],
        true,
    );
    assert_eq!(serialize_polyline(&polyline), "M 0,0 L 10,0 L 10,10.5 Z");

    let open = Polyline::new(vec![point(-1.0, 2.0), point(3.0, 4.0)], false);
    assert_eq!(serialize_polyline(&open), "M -1,2 L 3,4");

    assert_eq!(serialize_polyline(&Polyline::new(Vec::new(), true)), "");
}

#[test]
fn reparse_serialized_curve() {
    let options = FlattenOptions::DEFAULT;
    let curve = flatten_path("M0 0 C 0 10 10 10 10 0 Z", &options).unwrap();
    let serialized = serialize_polyline(&curve);
    assert!(!serialized.contains('C'));

    let reparsed = flatten_path(&serialized, &options).unwrap();
    assert_eq!(reparsed, curve);
}
