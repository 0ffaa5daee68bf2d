use thiserror::Error;

/// Top-level error type for the planar geometry library.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to degenerate geometric input.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate segment: endpoints ({x}, {y}) coincide")]
    DegenerateSegment { x: f64, y: f64 },

    #[error("coincident vertices: {0}")]
    CoincidentVertices(String),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
