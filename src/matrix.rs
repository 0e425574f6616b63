use crate::error::{Error, Result};
use nalgebra::DMatrix;

/// A dense, heap allocated `f64` matrix.
pub type Matrix = DMatrix<f64>;

/// Construction and comparison helpers on top of [`Matrix`].
pub trait MatrixExt: Sized {
    /// Builds a matrix from row slices. Ragged input is rejected.
    fn from_row_slices(rows: &[&[f64]]) -> Result<Self>;

    /// Builds a matrix from column slices, e.g. `[[1, 2, 3], [4, 5, 6]]` becomes a 3x2 matrix
    /// whose first column is `1, 2, 3`.
    fn from_column_slices(columns: &[&[f64]]) -> Result<Self>;

    /// The value a cell holds when it is created without one.
    fn placeholder() -> Self;

    /// Rounds every element to `digits` decimal places.
    ///
    /// `digits` is clamped to `-308..=308`. Elements that would overflow when scaled are
    /// returned unchanged.
    fn rounded(&self, digits: i32) -> Self;

    /// Element-wise comparison within `tolerance`. Different shapes never compare equal.
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool;
}

impl MatrixExt for Matrix {
    fn from_row_slices(rows: &[&[f64]]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::new();
        for row in rows {
            if row.len() != cols {
                return Err(Error::Shape {
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix::from_row_slice(rows.len(), cols, &data))
    }

    fn from_column_slices(columns: &[&[f64]]) -> Result<Self> {
        Ok(Matrix::from_row_slices(columns)?.transpose())
    }

    fn placeholder() -> Self {
        Matrix::identity(1, 1)
    }

    fn rounded(&self, digits: i32) -> Self {
        let scale = 10f64.powi(digits.clamp(-308, 308));
        self.map(|v| {
            let scaled = v * scale;
            if scaled.is_finite() {
                // `+ 0.0` folds `-0.0` into `0.0`.
                scaled.round() / scale + 0.0
            } else {
                v
            }
        })
    }

    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}
