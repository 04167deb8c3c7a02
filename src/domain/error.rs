//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors describe why a sequence is not a BST post-order traversal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty sequence")]
    EmptySequence,

    /// `value` sits in the right partition of `root` but is smaller than it.
    #[error("value {value} at index {index} is smaller than subtree root {root}")]
    OutOfOrder { index: usize, value: i64, root: i64 },

    #[error("duplicate value: {0}")]
    DuplicateValue(i64),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
