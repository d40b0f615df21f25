use core::ops::{Deref, DerefMut};
use core::slice;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::SequenceError;

/// An owning, contiguous sequence whose length is fixed at construction.
///
/// # Behavior
/// * **Single allocation:** The buffer is allocated exactly once at
///   construction (`capacity == length`) and released exactly once on drop.
///   There is no push, resize, or reallocation.
/// * **Access duality:** `at`/`at_mut` validate bounds and return
///   `Err(OutOfRange)` on violation; `get_unchecked`/`get_unchecked_mut` are
///   `unsafe` and trust the caller's bounds guarantee.
/// * **Interface:** Implements `Deref<Target=[T]>`, so all slice methods
///   (iter, split, chunks) and `seq[i]` indexing work automatically.
/// * **Ownership:** Exclusive. `Clone` deep-copies the buffer; moving
///   transfers ownership. Shallow aliasing of the buffer is not expressible.
pub struct FixedSequence<T> {
    elems: Box<[T]>,
}

impl<T: Default> FixedSequence<T> {
    /// Creates a sequence of `len` default-valued elements.
    ///
    /// The length is accepted as a signed integer so that a negative request
    /// is a reportable error rather than a silent wrap.
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidSize` if `len < 0`.
    pub fn with_len(len: isize) -> Result<Self, SequenceError> {
        if len < 0 {
            return Err(SequenceError::InvalidSize { requested: len });
        }
        let elems = (0..len).map(|_| T::default()).collect();
        Ok(Self { elems })
    }
}

impl<T: Clone> FixedSequence<T> {
    /// Creates a sequence holding a copy of `values`, in order.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            elems: values.to_vec().into_boxed_slice(),
        }
    }
}

impl<T> FixedSequence<T> {
    // --- Inspection ---

    /// Returns the number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Extracts a slice containing the entire sequence.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    /// Extracts a mutable slice containing the entire sequence.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    // --- Checked access ---

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns `SequenceError::OutOfRange` if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&T, SequenceError> {
        let len = self.elems.len();
        self.elems
            .get(index)
            .ok_or(SequenceError::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns `SequenceError::OutOfRange` if `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        let len = self.elems.len();
        self.elems
            .get_mut(index)
            .ok_or(SequenceError::OutOfRange { index, len })
    }

    // --- Unchecked access ---

    /// Returns a reference to the element at `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be less than `self.len()`. Violating this is undefined
    /// behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.elems.len(), "unchecked index out of bounds");
        unsafe { self.elems.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without a
    /// bounds check.
    ///
    /// # Safety
    /// `index` must be less than `self.len()`. Violating this is undefined
    /// behavior.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.elems.len(), "unchecked index out of bounds");
        unsafe { self.elems.get_unchecked_mut(index) }
    }

    // --- Iteration ---

    /// Returns a front-to-back iterator over the elements.
    ///
    /// Each call re-derives the iterator, so iteration is restartable.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elems.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.elems.iter_mut()
    }

    // --- Conversion ---

    /// Consumes the sequence and returns its elements as a standard `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.elems.into_vec()
    }
}

// --- Constructors from literal element lists ---

impl<T, const N: usize> From<[T; N]> for FixedSequence<T> {
    fn from(values: [T; N]) -> Self {
        let elems: Box<[T]> = Box::from(values);
        Self { elems }
    }
}

impl<T> From<Vec<T>> for FixedSequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            elems: values.into_boxed_slice(),
        }
    }
}

impl<T> FromIterator<T> for FixedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elems: iter.into_iter().collect(),
        }
    }
}

// --- Trait Implementations ---

// 1. Deref / DerefMut (Slice access)
impl<T> Deref for FixedSequence<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.elems
    }
}

impl<T> DerefMut for FixedSequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.elems
    }
}

// 2. Clone (deep copy; the buffer is never shared between two sequences)
impl<T: Clone> Clone for FixedSequence<T> {
    fn clone(&self) -> Self {
        Self {
            elems: self.elems.clone(),
        }
    }
}

// 3. Debug
impl<T: fmt::Debug> fmt::Debug for FixedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

// 4. Default (empty sequence, no `T: Default` bound)
impl<T> Default for FixedSequence<T> {
    fn default() -> Self {
        Self {
            elems: Box::default(),
        }
    }
}

// 5. PartialEq / Eq
impl<T: PartialEq> PartialEq for FixedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self[..] == other[..]
    }
}
impl<T: Eq> Eq for FixedSequence<T> {}

// 6. Hash
impl<T: Hash> Hash for FixedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

// 7. PartialOrd / Ord (lexicographical, same as slices)
impl<T: PartialOrd> PartialOrd for FixedSequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for FixedSequence<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

// 8. AsRef / AsMut
impl<T> AsRef<[T]> for FixedSequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for FixedSequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// --- Iterators ---

impl<T> IntoIterator for FixedSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FixedSequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FixedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// --- Test Suite ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_with_len_basic() {
        let seq: FixedSequence<f64> = FixedSequence::with_len(5).unwrap();
        assert_eq!(seq.len(), 5);
        assert!(!seq.is_empty());
        assert!(seq.iter().all(|&x| x == 0.0));

        let empty: FixedSequence<f64> = FixedSequence::with_len(0).unwrap();
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_seq_with_len_negative_fails() {
        let err = FixedSequence::<i32>::with_len(-1).unwrap_err();
        assert_eq!(err, SequenceError::InvalidSize { requested: -1 });

        let err = FixedSequence::<String>::with_len(-42).unwrap_err();
        assert_eq!(err, SequenceError::InvalidSize { requested: -42 });
    }

    #[test]
    fn test_seq_literal_construction_preserves_order() {
        let seq = FixedSequence::from([10, 20, 30]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.as_slice(), &[10, 20, 30]);

        let from_vec = FixedSequence::from(vec!["a", "b"]);
        assert_eq!(from_vec.as_slice(), &["a", "b"]);

        let from_slice = FixedSequence::from_slice(&[1.5, 2.5]);
        assert_eq!(from_slice.as_slice(), &[1.5, 2.5]);

        let collected: FixedSequence<i32> = (0..4).collect();
        assert_eq!(collected.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_seq_checked_access_in_bounds() {
        let mut seq = FixedSequence::from([1, 2, 3]);
        assert_eq!(seq.at(0), Ok(&1));
        assert_eq!(seq.at(2), Ok(&3));

        *seq.at_mut(1).unwrap() = 20;
        assert_eq!(seq.at(1), Ok(&20));
    }

    #[test]
    fn test_seq_checked_access_out_of_range() {
        let mut seq = FixedSequence::from([1, 2, 3]);
        assert_eq!(
            seq.at(3),
            Err(SequenceError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            seq.at(usize::MAX),
            Err(SequenceError::OutOfRange {
                index: usize::MAX,
                len: 3
            })
        );
        assert_eq!(
            seq.at_mut(5).unwrap_err(),
            SequenceError::OutOfRange { index: 5, len: 3 }
        );

        // An empty sequence rejects every index.
        let empty = FixedSequence::<i32>::default();
        assert_eq!(
            empty.at(0),
            Err(SequenceError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_seq_unchecked_access_agrees_with_source() {
        let values = [7, 8, 9];
        let mut seq = FixedSequence::from(values);
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(unsafe { *seq.get_unchecked(i) }, v);
        }

        unsafe {
            *seq.get_unchecked_mut(0) = 70;
        }
        assert_eq!(seq[0], 70);
    }

    #[test]
    fn test_seq_iteration_is_restartable() {
        let seq = FixedSequence::from([1, 2, 3]);

        let first: Vec<i32> = seq.iter().copied().collect();
        let second: Vec<i32> = seq.iter().copied().collect();
        assert_eq!(first, [1, 2, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_seq_iter_mut_and_into_iter() {
        let mut seq = FixedSequence::from([1, 2, 3]);
        for x in seq.iter_mut() {
            *x *= 10;
        }
        assert_eq!(seq.as_slice(), &[10, 20, 30]);

        // &seq / &mut seq forms
        let sum: i32 = (&seq).into_iter().sum();
        assert_eq!(sum, 60);
        for x in &mut seq {
            *x += 1;
        }

        // By-value form consumes the sequence.
        let collected: Vec<i32> = seq.into_iter().collect();
        assert_eq!(collected, vec![11, 21, 31]);
    }

    #[test]
    fn test_seq_clone_is_deep() {
        let original = FixedSequence::from([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy[0] = 100;
        assert_eq!(original[0], 1);
        assert_eq!(copy[0], 100);
    }

    #[test]
    fn test_seq_drop_releases_each_element_once() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let counter = Rc::new(RefCell::new(0));

        struct Dropper(Rc<RefCell<i32>>);
        impl Drop for Dropper {
            fn drop(&mut self) {
                *self.0.borrow_mut() += 1;
            }
        }

        {
            let _seq: FixedSequence<Dropper> = (0..4)
                .map(|_| Dropper(counter.clone()))
                .collect();
        }
        assert_eq!(*counter.borrow(), 4);

        // A moved-from binding must not double-drop.
        *counter.borrow_mut() = 0;
        {
            let seq: FixedSequence<Dropper> =
                (0..2).map(|_| Dropper(counter.clone())).collect();
            let moved = seq;
            assert_eq!(moved.len(), 2);
        }
        assert_eq!(*counter.borrow(), 2);
    }

    #[test]
    fn test_seq_deref_slice_interface() {
        let mut seq = FixedSequence::from([3, 1, 2]);
        assert_eq!(seq[1], 1);
        seq[1] = 4;
        assert_eq!(seq[1], 4);

        // Slice methods come through Deref.
        assert!(seq.contains(&3));
        assert_eq!(seq.first(), Some(&3));
        seq.sort();
        assert_eq!(seq.as_slice(), &[2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_seq_deref_index_panics_out_of_bounds() {
        let seq = FixedSequence::from([1, 2]);
        let _ = seq[2];
    }

    #[test]
    fn test_seq_traits_exhaustive() {
        let seq = FixedSequence::from([3, 1, 2]);

        // Hash
        let mut s = std::collections::hash_map::DefaultHasher::new();
        seq.hash(&mut s);
        let _ = s.finish();

        // PartialOrd / Ord
        let other = FixedSequence::from([1, 2, 3]);
        assert!(seq > other);
        assert_eq!(seq.cmp(&other), Ordering::Greater);

        // AsRef / AsMut
        let mut seq2 = seq.clone();
        let _: &[i32] = seq2.as_ref();
        let _: &mut [i32] = seq2.as_mut();

        // Debug formats like a slice
        assert_eq!(format!("{:?}", other), "[1, 2, 3]");

        // Default is empty
        let def: FixedSequence<i32> = FixedSequence::default();
        assert!(def.is_empty());

        // into_vec round trip
        assert_eq!(other.into_vec(), vec![1, 2, 3]);
    }
}
