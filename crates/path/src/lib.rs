#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Polylines, polygons and SVG path commands.
//!
//! This crate is reexported in `shatter`.
//!
//! # Examples
//!
//! ```
//! use shatter_path::{flatten_path, FlattenOptions};
//!
//! let polyline = flatten_path("M 0 0 L 10 0 Q 10 10 0 10 Z", &FlattenOptions::DEFAULT).unwrap();
//!
//! assert!(polyline.closed);
//! assert_eq!(polyline.points.len(), 12);
//! ```
//!

pub use shatter_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod commands;
mod interpreter;
pub mod parser;
pub mod polygon;
mod serializer;

#[doc(inline)]
pub use crate::commands::PathCommand;
pub use crate::interpreter::{flatten_path, interpret, FlattenOptions};
pub use crate::parser::parse_commands;
#[doc(inline)]
pub use crate::polygon::{Polygon, Polyline};
pub use crate::serializer::serialize_polyline;

pub mod math {
    //! The shatter_geom types used everywhere. Most other shatter crates reexport them.

    pub use crate::geom::{point, vector, Angle, Box2D, Point, Transform, Vector};
}
