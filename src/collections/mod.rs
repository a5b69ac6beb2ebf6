//! Containers.
//!
//! # Overview
//! ```text
//! GrowableArray<T>     contiguous, doubles its capacity when full
//! DoublyLinkedList<T>  slot arena with prev/next links and a free list
//! RingBuffer<T>        fixed capacity, wraps head/tail, refuses to grow
//! ```
//!
//! Lookups that may miss return `Option`. Mutations that can be refused
//! return [`CollectionResult`].

pub mod array;
pub mod linked_list;
pub mod ring_buffer;

use thiserror::Error;

pub use array::GrowableArray;
pub use linked_list::DoublyLinkedList;
pub use ring_buffer::RingBuffer;

/// Errors returned by container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Index outside `0..len` (or `0..=len` for inserts).
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// Removal from an empty container.
    #[error("container is empty")]
    Empty,

    /// Push into a ring buffer with no free slot.
    #[error("ring buffer is full (capacity {capacity})")]
    Full { capacity: usize },
}

/// Result type for container operations.
pub type CollectionResult<T> = Result<T, CollectionError>;
