use std::{cell::RefCell, fmt, rc::Rc};

/// A user visible message emitted by [`cached_inverse`](crate::cached_inverse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    CacheHit,
    Singular,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CacheHit => f.write_str("getting cached inverse"),
            Notice::Singular => f.write_str("matrix is singular, no inverse exists"),
        }
    }
}

/// Fire and forget receiver of notices.
pub trait Notify {
    fn notify(&self, notice: Notice);
}

impl<F> Notify for F
where
    F: Fn(Notice),
{
    fn notify(&self, notice: Notice) {
        self(notice)
    }
}

/// Forwards notices to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl Notify for TracingSink {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::CacheHit => tracing::debug!("{notice}"),
            Notice::Singular => tracing::warn!("{notice}"),
        }
    }
}

/// Keeps every notice it receives. Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct Recorder(Rc<RefCell<Vec<Notice>>>);

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.0.borrow().clone()
    }

    pub fn count(&self, notice: Notice) -> usize {
        self.0.borrow().iter().filter(|n| **n == notice).count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Notify for Recorder {
    fn notify(&self, notice: Notice) {
        self.0.borrow_mut().push(notice);
    }
}
