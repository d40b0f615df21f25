use std::any::{type_name, Any};
use std::fmt;

use crate::error::SequenceError;
use crate::sequence::FixedSequence;

/// A capability interface over mutable, indexable sequences.
///
/// The contract is purely the operation set `{element_at, len}`: any
/// conforming type may stand behind a `&mut dyn SequenceView<T>` or
/// `Box<dyn SequenceView<T>>` handle and be substituted without the
/// consumer's knowledge. Dropping a boxed handle runs the concrete type's
/// own teardown, so no resource leaks across the abstraction boundary.
///
/// The `as_any` hooks expose the concrete type for checked runtime recovery
/// via [`downcast_view`] / [`downcast_view_mut`].
pub trait SequenceView<T> {
    /// Returns a mutable reference to the element at `index`.
    ///
    /// Bounds are the caller's responsibility; implementations may panic on
    /// an out-of-range index but must never exhibit undefined behavior.
    fn element_at(&mut self, index: usize) -> &mut T;

    /// Returns the number of elements behind the view.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The concrete type behind the view, for checked downcasting.
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Attempts to recover the concrete type `V` behind a view handle.
///
/// # Errors
/// Returns `SequenceError::FailedCast` if the runtime type of the view is
/// not `V`. The failure is reported, never a crash or a wild pointer.
pub fn downcast_view<V, T>(view: &dyn SequenceView<T>) -> Result<&V, SequenceError>
where
    V: SequenceView<T> + 'static,
{
    view.as_any()
        .downcast_ref::<V>()
        .ok_or(SequenceError::FailedCast {
            requested: type_name::<V>(),
        })
}

/// Mutable variant of [`downcast_view`].
///
/// # Errors
/// Returns `SequenceError::FailedCast` if the runtime type of the view is
/// not `V`.
pub fn downcast_view_mut<V, T>(view: &mut dyn SequenceView<T>) -> Result<&mut V, SequenceError>
where
    V: SequenceView<T> + 'static,
{
    view.as_any_mut()
        .downcast_mut::<V>()
        .ok_or(SequenceError::FailedCast {
            requested: type_name::<V>(),
        })
}

/// Binds a [`FixedSequence`] behind the [`SequenceView`] interface.
///
/// Every operation delegates to the underlying sequence. `element_at` takes
/// the fast path (panic-on-out-of-bounds slice indexing, no `Result`); the
/// checked accessors remain available on the sequence itself via
/// [`sequence`](SequenceAdapter::sequence).
pub struct SequenceAdapter<T> {
    inner: FixedSequence<T>,
}

impl<T: Default> SequenceAdapter<T> {
    /// Creates an adapter over a fresh sequence of `len` default-valued
    /// elements.
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidSize` if `len < 0`.
    pub fn with_len(len: isize) -> Result<Self, SequenceError> {
        Ok(Self {
            inner: FixedSequence::with_len(len)?,
        })
    }
}

impl<T> SequenceAdapter<T> {
    // --- Underlying sequence access ---

    pub fn sequence(&self) -> &FixedSequence<T> {
        &self.inner
    }

    pub fn sequence_mut(&mut self) -> &mut FixedSequence<T> {
        &mut self.inner
    }

    /// Consumes the adapter and returns the underlying sequence.
    pub fn into_inner(self) -> FixedSequence<T> {
        self.inner
    }
}

impl<T> From<FixedSequence<T>> for SequenceAdapter<T> {
    fn from(sequence: FixedSequence<T>) -> Self {
        Self { inner: sequence }
    }
}

impl<T: 'static> SequenceView<T> for SequenceAdapter<T> {
    fn element_at(&mut self, index: usize) -> &mut T {
        &mut self.inner[index]
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<T: Clone> Clone for SequenceAdapter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SequenceAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SequenceAdapter").field(&self.inner).finish()
    }
}

// --- Test Suite ---
