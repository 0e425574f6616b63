use crate::{
    cell::{CacheCell, Cached},
    error::Result,
    notify::Notice,
    numeric::InvertOptions,
};
use tracing::debug;

/// Return the inverse of the cell's matrix, computing it only if the slot is unset.
///
/// A filled slot, including [`Cached::Singular`], is returned as is after a
/// [`Notice::CacheHit`]. On a miss, a matrix whose determinant is exactly zero is cached as
/// [`Cached::Singular`] with a [`Notice::Singular`]; every other matrix goes to the backend's
/// `invert` together with `options`. Backend errors are returned unchanged and leave the slot
/// unset.
pub fn cached_inverse(cell: &mut CacheCell, options: &InvertOptions) -> Result<Cached> {
    let runtime = cell.runtime().clone();

    let cached = cell.get_cached_inverse();
    if !cached.is_unset() {
        runtime.sink().notify(Notice::CacheHit);
        return Ok(cached.clone());
    }

    let matrix = cell.get();
    // Exact comparison: near singular matrices are left to the backend.
    let computed = if runtime.backend().determinant(matrix)? == 0.0 {
        runtime.sink().notify(Notice::Singular);
        Cached::Singular
    } else {
        debug!(rows = matrix.nrows(), cols = matrix.ncols(), "computing inverse");
        Cached::Valid(runtime.backend().invert(matrix, options)?)
    };

    cell.set_cached_inverse(computed.clone());
    Ok(computed)
}

impl CacheCell {
    /// [`cached_inverse`] with default options.
    pub fn inverse(&mut self) -> Result<Cached> {
        cached_inverse(self, &InvertOptions::default())
    }
}
