use crate::{
    cell::CacheCell,
    matrix::{Matrix, MatrixExt},
    notify::{Notify, TracingSink},
    numeric::{Backend, Dense},
};
use std::rc::Rc;

/// The collaborators cells use to compute and report inverses.
///
/// A runtime is shared by all cells created from it. Cells are not `Send`, so a runtime and its
/// cells stay on one thread.
pub struct Runtime {
    backend: Box<dyn Backend>,
    sink: Box<dyn Notify>,
}

impl Runtime {
    pub fn new() -> Rc<Runtime> {
        Runtime::with(Dense, TracingSink)
    }

    pub fn with(backend: impl Backend + 'static, sink: impl Notify + 'static) -> Rc<Runtime> {
        Rc::new(Runtime {
            backend: Box::new(backend),
            sink: Box::new(sink),
        })
    }

    pub fn cell(self: &Rc<Self>, value: Matrix) -> CacheCell {
        CacheCell::new(self, value)
    }

    /// Create a cell holding [`MatrixExt::placeholder`].
    pub fn cell_default(self: &Rc<Self>) -> CacheCell {
        CacheCell::new(self, Matrix::placeholder())
    }

    pub fn backend(&self) -> &dyn Backend {
        &*self.backend
    }

    pub fn sink(&self) -> &dyn Notify {
        &*self.sink
    }
}
