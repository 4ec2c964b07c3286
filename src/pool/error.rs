// ABOUTME: Error taxonomy for phone-number pool operations
//
// Every pool operation reports failure through its return value; the UI layer
// owns user messaging and decides whether to re-prompt. Nothing here is
// retried internally.

use super::PhoneState;
use thiserror::Error;

/// Failures raised by pool, binding, and catalog operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Number string fails the 11-digit syntax check
    #[error("invalid phone number: {0:?}")]
    InvalidNumber(String),

    /// Segment prefix fails the segment syntax check
    #[error("invalid segment prefix: {0:?}")]
    InvalidSegment(String),

    /// A generation request asked for zero numbers
    #[error("generation count must be at least 1")]
    InvalidCount,

    /// Number is not present in the pool
    #[error("number {0} is not in the pool")]
    NotFound(String),

    /// Entry is not in a state that permits the requested transition,
    /// or is owned by a different subscriber
    #[error("number {number} is {state} and cannot make the requested transition")]
    StateConflict {
        /// Number whose transition was refused
        number: String,
        /// State the entry was found in
        state: PhoneState,
    },

    /// Subscriber already holds the maximum number of assigned numbers
    #[error("subscriber {subscriber} already holds {limit} numbers")]
    CapacityExceeded {
        /// Subscriber that hit the cap
        subscriber: i32,
        /// The per-subscriber limit
        limit: usize,
    },

    /// No numbers could be produced: every candidate already existed,
    /// or no FREE entry matched the request
    #[error("no numbers available for this request")]
    Exhausted,
}
