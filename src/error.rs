//! Error values surfaced by the queue's checked operations.

use thiserror::Error;

/// Error value returned by the checked queue operations.
///
/// The queue performs no I/O and has no partial-failure modes: an operation
/// either fully succeeds or fails atomically with one of these conditions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum QueueError {
    /// A required removal was invoked on an empty queue.
    ///
    /// Only surfaced by [`remove_front`]; the optional-returning variants
    /// ([`front`], [`pop_front`]) report emptiness as `None` instead.
    ///
    /// [`remove_front`]: crate::CircularQueue::remove_front
    /// [`front`]: crate::CircularQueue::front
    /// [`pop_front`]: crate::CircularQueue::pop_front
    #[error("remove from an empty queue")]
    Empty,

    /// Element removal was attempted through an iterator.
    #[error("element removal through an iterator is not supported")]
    UnsupportedRemove,
}
