use thiserror::Error;

/// Top-level error type for the trigon crate.
#[derive(Debug, Error)]
pub enum TrigonError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Errors related to constructing geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to the bouncing-circle simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid simulation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`TrigonError`].
pub type Result<T> = std::result::Result<T, TrigonError>;
