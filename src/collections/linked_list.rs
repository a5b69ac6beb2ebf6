//! Doubly linked list.
//!
//! Nodes live in a slot arena (`Vec<Option<Node<T>>>`) and link to each
//! other by slot index. Freed slots are reused before the arena grows.

use crate::collections::{CollectionError, CollectionResult};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked list with O(1) prepend/append and index walks from
/// whichever end is closer.
#[derive(Debug, Clone)]
pub struct DoublyLinkedList<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    pub fn prepend(&mut self, value: T) {
        let old_head = self.head;
        let slot = self.alloc(Node {
            value,
            prev: None,
            next: old_head,
        });

        match old_head.and_then(|h| self.node_mut(h)) {
            Some(head) => head.prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    pub fn append(&mut self, value: T) {
        let old_tail = self.tail;
        let slot = self.alloc(Node {
            value,
            prev: old_tail,
            next: None,
        });

        match old_tail.and_then(|t| self.node_mut(t)) {
            Some(tail) => tail.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Insert before `index`; `index == len` appends.
    pub fn insert_at(&mut self, value: T, index: usize) -> CollectionResult<()> {
        if index > self.len {
            return Err(self.out_of_bounds(index));
        }
        if index == self.len {
            self.append(value);
            return Ok(());
        }
        if index == 0 {
            self.prepend(value);
            return Ok(());
        }

        let next = self
            .slot_at(index)
            .ok_or_else(|| self.out_of_bounds(index))?;
        let prev = self.node(next).and_then(|n| n.prev);
        let slot = self.alloc(Node {
            value,
            prev,
            next: Some(next),
        });

        if let Some(node) = self.node_mut(next) {
            node.prev = Some(slot);
        }
        if let Some(node) = prev.and_then(|p| self.node_mut(p)) {
            node.next = Some(slot);
        }
        self.len += 1;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        let slot = self.slot_at(index)?;
        self.node(slot).map(|n| &n.value)
    }

    pub fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        let err = self.out_of_bounds(index);
        let slot = self.slot_at(index).ok_or(err)?;
        self.unlink(slot).ok_or(err)
    }

    fn out_of_bounds(&self, index: usize) -> CollectionError {
        CollectionError::OutOfBounds {
            index,
            len: self.len,
        }
    }

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.nodes.get(slot)?.as_ref()
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(slot)?.as_mut()
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index <= self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = self.node(cursor?)?.next;
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(self.len - 1 - index) {
                cursor = self.node(cursor?)?.prev;
            }
            cursor
        }
    }

    fn unlink(&mut self, slot: usize) -> Option<T> {
        let node = self.nodes.get_mut(slot)?.take()?;

        match node.prev.and_then(|p| self.node_mut(p)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|n| self.node_mut(n)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }

        self.free.push(slot);
        self.len -= 1;
        Some(node.value)
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Remove the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = self.node(slot)?;
            if node.value == *value {
                return self.unlink(slot);
            }
            cursor = node.next;
        }
        None
    }
}

/// Front-to-back iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let list = self.list;
        let node = list.node(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &DoublyLinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_operations() {
        let mut list = DoublyLinkedList::new();

        list.append(5);
        list.append(7);
        list.append(9);
        assert_eq!(list.get(2), Some(&9));
        assert_eq!(list.remove_at(1), Ok(7));
        assert_eq!(list.len(), 2);

        list.append(11);
        assert_eq!(list.remove_at(1), Ok(9));
        assert_eq!(
            list.remove_at(9),
            Err(CollectionError::OutOfBounds { index: 9, len: 2 })
        );
        assert_eq!(list.remove_at(0), Ok(5));
        assert_eq!(list.remove_at(0), Ok(11));
        assert!(list.is_empty());

        list.prepend(5);
        list.prepend(7);
        list.prepend(9);
        assert_eq!(list.get(2), Some(&5));
        assert_eq!(list.get(0), Some(&9));
        assert_eq!(list.remove(&9), Some(9));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Some(&7));

        list.insert_at(3, 1).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(collect(&list), vec![7, 3, 5]);
        assert_eq!(list.index_of(&5), Some(2));
    }

    #[test]
    fn test_links_stay_consistent_both_ways() {
        let mut list = DoublyLinkedList::new();
        for v in 0..6 {
            list.append(v);
        }
        list.insert_at(40, 4).unwrap();
        assert_eq!(list.remove(&5), Some(5));
        assert_eq!(list.remove_at(0), Ok(0));

        assert_eq!(collect(&list), vec![1, 2, 3, 40, 4]);
        // indices past the midpoint walk back from the tail
        let by_index: Vec<i32> = (0..list.len()).map(|i| *list.get(i).unwrap()).collect();
        assert_eq!(by_index, vec![1, 2, 3, 40, 4]);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut list = DoublyLinkedList::new();
        list.append(1);
        list.append(2);
        list.remove_at(0).unwrap();
        list.append(3);
        assert_eq!(list.nodes.len(), 2);
        assert_eq!(collect(&list), vec![2, 3]);
    }

    #[test]
    fn test_empty_and_missing() {
        let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert_eq!(list.get(0), None);
        assert_eq!(list.index_of(&1), None);
        assert_eq!(list.remove(&1), None);
        assert_eq!(
            list.remove_at(0),
            Err(CollectionError::OutOfBounds { index: 0, len: 0 })
        );
        assert_eq!(
            list.insert_at(1, 1),
            Err(CollectionError::OutOfBounds { index: 1, len: 0 })
        );

        list.insert_at(1, 0).unwrap();
        list.remove(&1).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }
}
