use shatter::math::Point;
use shatter::svg::{ImportOptions, ShapeError};
use shatter::TriangulationError;
use std::io;

pub struct FlattenCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub options: ImportOptions,
    pub count: bool,
}

pub struct SliceCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub options: ImportOptions,
    pub line: (Point, Point),
    pub impulses: bool,
    pub count: bool,
}

pub struct TriangulateCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub options: ImportOptions,
    pub count: bool,
}

#[derive(Debug)]
pub enum CommandError {
    Io(io::Error),
    Shape(ShapeError),
    Triangulation(TriangulationError),
}

impl ::std::convert::From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::Io(err)
    }
}

impl ::std::convert::From<ShapeError> for CommandError {
    fn from(err: ShapeError) -> Self {
        CommandError::Shape(err)
    }
}

impl ::std::convert::From<TriangulationError> for CommandError {
    fn from(err: TriangulationError) -> Self {
        CommandError::Triangulation(err)
    }
}

impl ::std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        match self {
            CommandError::Io(err) => write!(f, "I/O error: {}", err),
            CommandError::Shape(err) => write!(f, "Invalid shape: {}", err),
            CommandError::Triangulation(err) => write!(f, "Triangulation failed: {}", err),
        }
    }
}
