use crate::{matrix::Matrix, runtime::Runtime};
use std::rc::Rc;
use tracing::trace;

/// The derived value slot of a [`CacheCell`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cached {
    /// Not computed since the cell was created, set, or invalidated.
    #[default]
    Unset,
    Valid(Matrix),
    /// The held matrix has a zero determinant. Cached like any other result.
    Singular,
}

impl Cached {
    pub fn is_unset(&self) -> bool {
        matches!(self, Cached::Unset)
    }

    pub fn is_singular(&self) -> bool {
        matches!(self, Cached::Singular)
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Cached::Valid(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn into_matrix(self) -> Option<Matrix> {
        match self {
            Cached::Valid(matrix) => Some(matrix),
            _ => None,
        }
    }

    fn state(&self) -> &'static str {
        match self {
            Cached::Unset => "unset",
            Cached::Valid(_) => "valid",
            Cached::Singular => "singular",
        }
    }
}

/// A matrix paired with its lazily computed inverse.
///
/// The inverse slot always describes the matrix currently held: every operation that replaces the
/// matrix resets the slot to [`Cached::Unset`] in the same call.
pub struct CacheCell {
    runtime: Rc<Runtime>,
    value: Matrix,
    cached: Cached,
}

impl CacheCell {
    pub(crate) fn new(runtime: &Rc<Runtime>, value: Matrix) -> Self {
        CacheCell {
            runtime: runtime.clone(),
            value,
            cached: Cached::Unset,
        }
    }

    pub fn get(&self) -> &Matrix {
        &self.value
    }

    pub fn set(&mut self, value: Matrix) {
        self.value = value;
        self.invalidate();
    }

    /// Replace the matrix by a function of the current one.
    ///
    /// Aborts the process if `f` panics, so the cell never ends up without a matrix.
    pub fn apply(&mut self, f: impl FnOnce(Matrix) -> Matrix) {
        replace_with::replace_with_or_abort(&mut self.value, f);
        self.invalidate();
    }

    pub fn get_cached_inverse(&self) -> &Cached {
        &self.cached
    }

    /// Overwrite the inverse slot without validation.
    pub fn set_cached_inverse(&mut self, cached: Cached) {
        trace!(from = self.cached.state(), to = cached.state(), "inverse slot");
        self.cached = cached;
    }

    pub fn invalidate(&mut self) {
        self.set_cached_inverse(Cached::Unset);
    }

    pub fn is_cached(&self) -> bool {
        !self.cached.is_unset()
    }

    pub fn runtime(&self) -> &Rc<Runtime> {
        &self.runtime
    }
}
