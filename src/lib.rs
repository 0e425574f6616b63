//! A matrix cell that memoizes its inverse.
//!
//! ```
//! use inverse_cache::{Matrix, MatrixExt, Runtime};
//!
//! let rt = Runtime::new();
//! let mut cell = rt.cell(Matrix::from_row_slices(&[&[4.0, 7.0], &[2.0, 6.0]]).unwrap());
//! let first = cell.inverse().unwrap();
//! // Served from the cell, no recomputation.
//! assert_eq!(cell.inverse().unwrap(), first);
//! ```

mod cell;
mod error;
mod inverse;
mod matrix;
mod notify;
mod numeric;
mod runtime;

pub use cell::{CacheCell, Cached};
pub use error::{Error, Result};
pub use inverse::cached_inverse;
pub use matrix::{Matrix, MatrixExt};
pub use notify::{Notice, Notify, Recorder, TracingSink};
pub use numeric::{Backend, Dense, InvertOptions};
pub use runtime::Runtime;
