use thiserror::Error;

/// Errors reported by the fallible operations in this crate.
///
/// All failures are surfaced synchronously to the direct caller; no partial
/// object is ever returned and no internal recovery is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A negative length was requested at construction.
    #[error("invalid sequence length {requested}")]
    InvalidSize { requested: isize },

    /// A checked index access fell outside `[0, len)`.
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A checked downcast was attempted against a view whose runtime type
    /// does not match the requested concrete type.
    #[error("view is not a `{requested}`")]
    FailedCast { requested: &'static str },
}
