//! Shared ownership for value nodes.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted handle to a value node.
///
/// Construction is restricted to the `value` module so every heap
/// allocation goes through a `Value::` factory. Cloning is cheap and
/// shares the allocation.
///
/// Nodes are immutable while shared. [`Heap::make_mut`] is the only way
/// to get `&mut T`, and it clones the node first when another owner
/// exists.
#[repr(transparent)]
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// Whether both handles point at the same allocation.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Whether this handle is the only owner of the node.
    pub fn is_unique(this: &Self) -> bool {
        Arc::strong_count(&this.0) == 1
    }
}

impl<T: Clone> Heap<T> {
    /// Mutable access, cloning the node if it is shared.
    pub fn make_mut(this: &mut Self) -> &mut T {
        Arc::make_mut(&mut this.0)
    }

    /// Take the node out, cloning it if it is shared.
    pub fn unwrap_or_clone(this: Self) -> T {
        Arc::unwrap_or_clone(this.0)
    }
}

impl<T> Clone for Heap<T> {
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Heap<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        Heap::ptr_eq(self, other) || *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Heap<T> {}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
