//! Once-only registration of page-lifetime event handlers.

use std::cell::Cell;

/// Tracks whether a group of handlers has already been attached.
///
/// Setup code claims the guard before binding; a second setup call finds it
/// taken and binds nothing.
#[derive(Debug, Default)]
pub struct BindGuard {
    bound: Cell<bool>,
}

impl BindGuard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bound: Cell::new(false),
        }
    }

    /// Returns `true` exactly once, for the caller that should bind.
    pub fn claim(&self) -> bool {
        !self.bound.replace(true)
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound.get()
    }

    /// Forget the binding, for test fixtures that rebuild the page.
    pub fn release(&self) {
        self.bound.set(false);
    }
}
