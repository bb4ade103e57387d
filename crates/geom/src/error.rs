use thiserror::Error;

/// Returned when normalizing a vector whose length is (nearly) zero.
#[derive(Error, Copy, Clone, Debug, PartialEq)]
#[error("Unit vector cannot be computed from a zero vector ({x}, {y}).")]
pub struct ZeroVectorError {
    pub x: f64,
    pub y: f64,
}

/// An elliptic arc that cannot be built from the given parameters.
#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum ArcError {
    /// The endpoints are further apart than the ellipse allows at the given radii.
    ///
    /// `radius_ratio` is the normalized radius over half the normalized endpoint distance,
    /// it must be at least 1 for an arc to exist.
    #[error("Arc is not realizable at the given radii (radius ratio {radius_ratio}).")]
    Unrealizable { radius_ratio: f64 },
    #[error("Arc endpoints are identical.")]
    CoincidentEndpoints,
    #[error("Arc radius is zero.")]
    ZeroRadius,
}
