use crate::{
    error::{Error, Result},
    matrix::Matrix,
};

/// The numeric routines a [`Runtime`](crate::Runtime) delegates to.
///
/// Cells never look inside a backend: `determinant` is only compared against exact zero, and
/// `invert` receives the caller's options untouched.
pub trait Backend {
    fn determinant(&self, matrix: &Matrix) -> Result<f64>;
    fn invert(&self, matrix: &Matrix, options: &InvertOptions) -> Result<Matrix>;
}

/// Options forwarded verbatim to [`Backend::invert`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvertOptions {
    /// [`Dense`] rejects inverses whose reciprocal condition number (1-norm) is below this.
    /// The test is independent of the magnitude of the entries.
    pub tolerance: f64,
}

impl Default for InvertOptions {
    fn default() -> Self {
        InvertOptions {
            tolerance: f64::EPSILON,
        }
    }
}

impl InvertOptions {
    pub fn strict() -> Self {
        InvertOptions { tolerance: 1e-10 }
    }

    /// Accept any inverse the decomposition produces.
    pub fn permissive() -> Self {
        InvertOptions { tolerance: 0.0 }
    }
}

/// Determinant and inverse from `nalgebra`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dense;

impl Backend for Dense {
    fn determinant(&self, matrix: &Matrix) -> Result<f64> {
        ensure_square(matrix)?;
        Ok(matrix.determinant())
    }

    fn invert(&self, matrix: &Matrix, options: &InvertOptions) -> Result<Matrix> {
        ensure_square(matrix)?;
        let inverse = matrix.clone().try_inverse().ok_or(Error::NotInvertible)?;

        let rcond = 1.0 / (norm_1(matrix) * norm_1(&inverse));
        if rcond.is_nan() || rcond < options.tolerance {
            return Err(Error::IllConditioned {
                rcond,
                tolerance: options.tolerance,
            });
        }
        Ok(inverse)
    }
}

/// Maximum absolute column sum.
fn norm_1(matrix: &Matrix) -> f64 {
    matrix
        .column_iter()
        .map(|column| column.iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

fn ensure_square(matrix: &Matrix) -> Result<()> {
    if !matrix.is_square() {
        return Err(Error::NotSquare {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        });
    }
    Ok(())
}
