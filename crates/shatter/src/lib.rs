#![deny(bare_trait_objects)]

//! Flatten 2D shapes into polygons, cut them along lines and split the pieces into
//! triangles.
//!
//! This crate reexports the `shatter_*` crates and adds the few entry points tying them
//! together.
//!
//! ## Example
//!
//! ```
//! use shatter::math::point;
//! use shatter::svg::{Primitive, ShapeDescriptor};
//!
//! let descriptor = ShapeDescriptor::new(Primitive::Rect {
//!     x: 0.0,
//!     y: 0.0,
//!     width: 10.0,
//!     height: 10.0,
//! });
//! let square = shatter::flatten_shape(&descriptor).unwrap();
//!
//! let halves = shatter::slice_polygon(&square, point(5.0, -5.0), point(5.0, 15.0));
//! assert_eq!(halves.len(), 2);
//!
//! for half in &halves {
//!     let triangles = shatter::triangulate(half).unwrap();
//!     assert_eq!(triangles.len(), 2);
//! }
//! ```

pub extern crate shatter_algorithms;
pub extern crate shatter_svg;
pub extern crate shatter_tessellation;

pub use shatter_algorithms as algorithms;
pub use shatter_svg as svg;
pub use shatter_tessellation as tessellation;
pub use tessellation::geom;
pub use tessellation::path;

pub use path::math;

mod fragment;

pub use crate::fragment::Fragment;
pub use crate::tessellation::{triangulate, TriangulationError};

use crate::geom::utils::fuzzy_eq_point;
use crate::geom::Line;
use crate::math::Point;
use crate::path::Polygon;
use crate::svg::{ImportOptions, ShapeDescriptor, ShapeError};

/// Flattens a shape descriptor into a polygon, with the default import options.
pub fn flatten_shape(descriptor: &ShapeDescriptor) -> Result<Polygon, ShapeError> {
    flatten_shape_with_options(descriptor, &ImportOptions::DEFAULT)
}

/// Flattens a shape descriptor into a polygon.
///
/// Open paths are closed implicitly.
pub fn flatten_shape_with_options(
    descriptor: &ShapeDescriptor,
    options: &ImportOptions,
) -> Result<Polygon, ShapeError> {
    Ok(descriptor.extract(options)?.to_polygon())
}

/// Cuts the polygon along the infinite line going through `p0` and `p1`.
///
/// Returns the polygon unchanged when both points are the same.
pub fn slice_polygon(polygon: &Polygon, p0: Point, p1: Point) -> Vec<Polygon> {
    if fuzzy_eq_point(p0, p1) {
        return vec![polygon.clone()];
    }

    algorithms::slice::slice(polygon, &Line::through(p0, p1))
}

#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::svg::Primitive;

#[test]
fn flatten_rect() {
    let descriptor = ShapeDescriptor::new(Primitive::Rect {
        x: 0.0,
        y: 0.0,
        width: 10.0,
        height: 10.0,
    });
    let polygon = flatten_shape(&descriptor).unwrap();

    assert_eq!(polygon.len(), 4);
    assert_eq!(
        algorithms::winding::loopwise(&polygon),
        algorithms::winding::Winding::Clockwise
    );
    assert_eq!(algorithms::area::area(&polygon, false), 100.0);
}

#[test]
fn slice_with_identical_points() {
    let square = Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ]);

    assert_eq!(
        slice_polygon(&square, point(5.0, 5.0), point(5.0, 5.0)),
        vec![square.clone()]
    );
    assert_eq!(
        slice_polygon(&square, point(5.0, 5.0), point(5.0, 6.0)).len(),
        2
    );
}
