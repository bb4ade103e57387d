#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Polygon algorithms: area and winding, hit testing, line intersections and slicing.
//!
//! Polygons are expected in y-down coordinates, where a positive signed area means the
//! vertices turn clockwise on screen.
//!
//! This crate is reexported in `shatter`.

pub extern crate shatter_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod area;
pub mod hit_test;
pub mod impulse;
pub mod intersection;
pub mod slice;
pub mod winding;

pub use crate::path::geom;
pub use crate::path::math;
