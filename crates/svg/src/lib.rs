#![deny(bare_trait_objects)]

//! Utilities to turn SVG shape elements into flattened polylines and back.
//!
//! This crate does not parse XML: it receives element names and attribute maps from
//! whatever DOM traversal the application uses.
//!
//! This crate is reexported in `shatter`.

pub use shatter_path as path;
pub use shatter_path::math;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod document;
mod error;
pub mod shape;
pub mod style;
pub mod transform;

pub use crate::document::serialize_document;
pub use crate::error::ShapeError;
#[doc(inline)]
pub use crate::shape::{
    extract_shape, ImportOptions, Primitive, Shape, ShapeDescriptor, ShapeKind,
};
#[doc(inline)]
pub use crate::style::{serialize_style, LineCap, LineJoin, Paint, Style};
pub use crate::transform::{apply_transform_chain, parse_transform_chain, TransformOp};
