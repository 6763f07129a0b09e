//! Errors

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Queue errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing implementation name is not known
    #[error("unsupported queue implementation: {0}")]
    UnsupportedImplementation(String),

    /// Tried to pop from a queue with no elements
    #[error("queue is empty")]
    EmptyQueue,

    /// The element type does not match the type already established by the queue
    #[error("expected element of type {expected} but got {found}")]
    TypeMismatch {
        /// The established element type
        expected: &'static str,
        /// The offending element type
        found: &'static str,
    },

    /// Initial items were given in a form that is not an ordered sequence
    #[error("initial items must be an ordered sequence")]
    InvalidInitialItems,

    /// Load factor outside the open range (0, 1)
    #[error("invalid load factor {0}, expected a value between 0 and 1")]
    InvalidLoadFactor(f64),

    /// Serde json error
    #[error("failed to deserialize queue configuration: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
