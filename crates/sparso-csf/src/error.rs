//! Error types for CSF encoding
//!
//! All variants are caller input errors: the encoder validates its inputs
//! once, before traversal begins, and never fails mid-recursion. On error the
//! output structure is never constructed, so no partial state is observable.

use thiserror::Error;

/// Errors reported by the CSF encoder's precondition checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsfError {
    /// The density mode sequence does not line up with the tensor's axes.
    #[error("Mode count mismatch: tensor has {rank} axes but {modes} density modes were given")]
    ShapeMismatch { rank: usize, modes: usize },

    /// Rank-0 tensors carry no axes to encode.
    #[error("Shape cannot be empty")]
    EmptyShape,

    /// Zero-extent axes are rejected; shapes must be non-degenerate.
    #[error("Shape cannot contain zeros: axis {axis} has extent 0")]
    InvalidExtent { axis: usize },

    /// A `position` or `index` entry could exceed the configured index width.
    ///
    /// The largest possible `position` entry is the tensor's total element
    /// count, and every `index` entry is bounded by it, so the check is a
    /// single comparison of that count against the width's limit.
    #[error("Index width overflow: {elements} elements cannot be addressed with {width}-bit indices")]
    NumericOverflow { elements: u128, width: u8 },
}

/// Result type alias for CSF encoding operations
pub type CsfResult<T> = Result<T, CsfError>;
