//! Fixed-capacity ring buffer.
//!
//! `push` writes at the tail. `pop` takes back the newest element,
//! `deque` takes the oldest from the head. Both indices wrap modulo the
//! capacity. A full buffer refuses further pushes.

use crate::collections::{CollectionError, CollectionResult};

#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn push(&mut self, value: T) -> CollectionResult<()> {
        if self.is_full() {
            return Err(CollectionError::Full {
                capacity: self.capacity(),
            });
        }

        self.slots[self.tail] = Some(value);
        self.tail = (self.tail + 1) % self.capacity();
        self.len += 1;
        Ok(())
    }

    /// Remove the most recently pushed element.
    pub fn pop(&mut self) -> CollectionResult<T> {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }

        let capacity = self.capacity();
        self.tail = (self.tail + capacity - 1) % capacity;
        self.len -= 1;
        self.slots[self.tail].take().ok_or(CollectionError::Empty)
    }

    /// Remove the oldest element.
    pub fn deque(&mut self) -> CollectionResult<T> {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }

        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        value.ok_or(CollectionError::Empty)
    }

    /// Element `index` positions after the oldest one.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[(self.head + index) % self.capacity()].as_ref()
    }
}
