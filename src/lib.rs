//! # Fixed Sequence
//!
//! Fixed-length, bounds-checked owning sequences, decoupled from their
//! consumers by a dynamic capability interface.
//!
//! This crate provides [`FixedSequence`], a contiguous sequence whose length
//! is fixed at construction, and [`SequenceView`], a trait that lets generic
//! code traverse and mutate any conforming sequence without knowing its
//! concrete representation. [`SequenceAdapter`] bridges the two.
//!
//! ## Key Features
//!
//! * **Single Allocation:** A `FixedSequence` allocates its buffer exactly
//!   once at construction and releases it exactly once on drop. There is no
//!   growth, so `capacity == length` always holds.
//! * **Checked / Unchecked Duality:** `at`/`at_mut` report
//!   [`SequenceError::OutOfRange`] on a bad index; the `unsafe`
//!   `get_unchecked`/`get_unchecked_mut` pair trusts the caller instead.
//!   Both are first-class, deliberately distinct operations.
//! * **Exclusive Ownership:** `Clone` deep-copies the buffer and moves
//!   transfer it; two sequences can never alias one buffer, so double-free
//!   is unrepresentable.
//! * **Open Interface:** Any type can implement [`SequenceView`]; handles
//!   are ordinary trait objects, and [`downcast_view`] recovers the concrete
//!   type as a checked, fallible operation.
//!
//! ## Examples
//!
//! ### FixedSequence
//!
//! ```rust
//! use fixed_sequence::{FixedSequence, SequenceError};
//!
//! // Sized construction: 4 default-valued elements.
//! let zeros: FixedSequence<f64> = FixedSequence::with_len(4)?;
//! assert_eq!(zeros.len(), 4);
//!
//! // Literal-list construction preserves order.
//! let seq = FixedSequence::from([10, 20, 30]);
//! assert_eq!(seq.at(1), Ok(&20));
//! assert!(seq.at(3).is_err());
//!
//! // Slice interface via Deref: indexing, iteration, the lot.
//! let doubled: Vec<i32> = seq.iter().map(|x| x * 2).collect();
//! assert_eq!(doubled, vec![20, 40, 60]);
//! # Ok::<(), SequenceError>(())
//! ```
//!
//! ### Generic traversal over a view
//!
//! ```rust
//! use fixed_sequence::{SequenceAdapter, SequenceView};
//!
//! // Works on ANY view implementation, without knowing the concrete type.
//! fn fill_ramp(view: &mut dyn SequenceView<f64>) {
//!     for i in 0..view.len() {
//!         *view.element_at(i) = (i + 1) as f64;
//!     }
//! }
//!
//! let mut adapter = SequenceAdapter::<f64>::with_len(3).unwrap();
//! fill_ramp(&mut adapter);
//! assert_eq!(adapter.sequence().as_slice(), &[1.0, 2.0, 3.0]);
//! ```
//!
//! ### Checked downcast
//!
//! ```rust
//! use fixed_sequence::{downcast_view, FixedSequence, SequenceAdapter, SequenceView};
//!
//! let seq = FixedSequence::from([1.0, 2.0]);
//! let boxed: Box<dyn SequenceView<f64>> = Box::new(SequenceAdapter::from(seq));
//!
//! // Recovering the concrete type is fallible, never a wild cast.
//! let concrete = downcast_view::<SequenceAdapter<f64>, f64>(boxed.as_ref()).unwrap();
//! assert_eq!(concrete.sequence().len(), 2);
//! ```

// --- Module Declarations ---

pub mod error;
pub mod sequence;
pub mod view;

// --- Re-exports ---

pub use error::SequenceError;
pub use sequence::FixedSequence;
pub use view::{downcast_view, downcast_view_mut, SequenceAdapter, SequenceView};
