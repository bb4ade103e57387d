use crate::path::geom::ArcError;
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ShapeError {
    #[error("Unsupported element <{0}>.")]
    UnsupportedElement(String),
    #[error(transparent)]
    Arc(#[from] ArcError),
}
