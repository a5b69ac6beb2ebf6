//! Growable array.

use crate::collections::{CollectionError, CollectionResult};

/// Contiguous array that doubles its capacity whenever an insert finds it
/// full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowableArray<T> {
    elements: Vec<T>,
    capacity: usize,
}

impl<T> GrowableArray<T> {
    /// Create an empty array. A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn append(&mut self, value: T) {
        if self.is_full() {
            self.expand();
        }
        self.elements.push(value);
    }

    pub fn prepend(&mut self, value: T) {
        if self.is_full() {
            self.expand();
        }
        self.elements.insert(0, value);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Insert before `index`; `index == len` appends.
    pub fn insert_at(&mut self, value: T, index: usize) -> CollectionResult<()> {
        if index > self.elements.len() {
            return Err(self.out_of_bounds(index));
        }
        if self.is_full() {
            self.expand();
        }
        self.elements.insert(index, value);
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        if index >= self.elements.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.elements.remove(index))
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> CollectionResult<T> {
        self.elements.pop().ok_or(CollectionError::Empty)
    }

    fn out_of_bounds(&self, index: usize) -> CollectionError {
        CollectionError::OutOfBounds {
            index,
            len: self.elements.len(),
        }
    }

    fn expand(&mut self) {
        let capacity = self.capacity * 2;
        self.elements.reserve_exact(capacity - self.elements.len());
        tracing::trace!(from = self.capacity, to = capacity, "expanding array");
        self.capacity = capacity;
    }
}

impl<T: PartialEq> GrowableArray<T> {
    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == value)
    }

    /// Remove the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.index_of(value)?;
        Some(self.elements.remove(index))
    }
}
