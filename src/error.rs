use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    Shape { expected: usize, actual: usize },

    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// The inversion routine could not produce an inverse.
    #[error("matrix has no inverse")]
    NotInvertible,

    /// The reciprocal condition number of the matrix is below the requested tolerance.
    #[error("matrix is ill-conditioned: reciprocal condition {rcond:e} is below {tolerance:e}")]
    IllConditioned { rcond: f64, tolerance: f64 },

    /// Failure reported by a custom [`Backend`](crate::Backend).
    #[error("backend failure: {0}")]
    Backend(String),
}
