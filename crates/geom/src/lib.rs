#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in `shatter`.
//!
//! # Overview.
//!
//! This crate implements some of the maths to work with:
//!
//! - points and vectors, with epsilon-aware comparisons,
//! - lines and line segments,
//! - quadratic and cubic bézier curves,
//! - elliptic arcs, in center form and in SVG's endpoint form,
//! - triangles.
//!
//! # Flattening
//!
//! Flattening is the action of approximating a curve with a succession of line segments.
//!
//! Unlike a tolerance-driven flattener, curves here are always sampled at a fixed number
//! of evenly spaced parameter values. A curve flattened with `n` segments produces `n + 1`
//! points, both endpoints included.

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod bezier;
mod error;
mod line;
mod triangle;
pub mod utils;

#[doc(inline)]
pub use crate::arc::{approximate_arc, approximate_arc_with_endpoints, Arc, ArcFlags, SvgArc};
#[doc(inline)]
pub use crate::bezier::{
    approximate_bezier, line_quadratic_intersections, CubicBezierSegment, QuadraticBezierSegment,
};
pub use crate::error::{ArcError, ZeroVectorError};
#[doc(inline)]
pub use crate::line::{Line, LineSegment};
#[doc(inline)]
pub use crate::triangle::{point_in_triangle, Triangle};

/// Values closer than this are considered equal.
pub const EPSILON: f64 = 1e-6;

/// Alias for `euclid::default::Point2D<f64>`.
pub type Point = euclid::default::Point2D<f64>;

/// Alias for `euclid::default::Vector2D<f64>`.
pub type Vector = euclid::default::Vector2D<f64>;

/// Alias for `euclid::default::Box2D<f64>`.
pub type Box2D = euclid::default::Box2D<f64>;

/// Alias for `euclid::default::Transform2D<f64>`.
pub type Transform = euclid::default::Transform2D<f64>;

/// An angle in radians.
pub type Angle = euclid::Angle<f64>;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}
