use thiserror::Error;

/// Errors reported by the indirect sort engine, permutations and the harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Malformed arguments or mismatched lengths.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The supplied order relation is not a strict weak order. Only detected when order
    /// verification is enabled.
    #[error("violated order invariant: {0}")]
    ViolatedOrderInvariant(OrderViolation),
}

/// The way in which a comparison function broke strict weak ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderViolation {
    /// `is_less(x, x)` returned true for the element at original index `index`.
    #[error("element {index} compares less than itself")]
    LessThanItself { index: usize },

    /// The element at sorted position `position + 1` compares less than its predecessor.
    #[error("sorted position {} compares less than position {position}", .position + 1)]
    OutOfOrder { position: usize },

    /// The element at original index `last` compares less than the element at original index
    /// `first` although it is sorted after it and their neighbours are in order. Only happens for
    /// relations that are not transitive, cyclic ones for example.
    #[error("element {last} compares less than element {first} sorted before it")]
    NotTransitive { first: usize, last: usize },
}

pub type Result<T> = std::result::Result<T, SortError>;

impl SortError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        SortError::InvalidInput(msg.into())
    }
}
