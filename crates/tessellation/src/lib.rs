#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]

//! Triangulation of simple polygons.
//!
//! This crate is reexported in `shatter`.
//!
//! ## Overview
//!
//! * [`Triangulator`](struct.Triangulator.html) - An ear clipping triangulator for simple
//!   polygons, convex or not.
//! * [`triangulate`](fn.triangulate.html) - A shorthand for one-off triangulations.
//!
//! Self-intersecting polygons are not supported. When the triangulator runs out of ears
//! it reports a [`TriangulationError`](enum.TriangulationError.html) instead of looping
//! forever.

pub extern crate shatter_algorithms as algorithms;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod ear_clipping;
mod error;

pub use crate::algorithms::{geom, math, path};
pub use crate::ear_clipping::{triangulate, Triangulator};
pub use crate::error::TriangulationError;
pub use crate::geom::Triangle;
