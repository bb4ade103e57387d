use thiserror::Error;

/// The triangulator's error enumeration.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriangulationError {
    /// None of the remaining vertices forms a valid ear. This only happens with polygons
    /// that are not simple, for example self-intersecting ones.
    #[error("No ear found among the {remaining} remaining vertices after {attempts} attempts.")]
    InvalidPolygon { remaining: usize, attempts: usize },
}
