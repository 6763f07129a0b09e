use std::fmt::{self, Display};

use super::Fifo;
use crate::error::{Error, Result};
use crate::storage::{Iter, NodeKey, SinglyLinkedList};

/// A queue backed by a `SinglyLinkedList`.
///
/// `front` and `rear` mirror the head and tail of the list and are refreshed
/// after every mutation.
#[derive(Debug)]
pub struct LinkedListQueue<T> {
    list: SinglyLinkedList<T>,
    front: Option<NodeKey>,
    rear: Option<NodeKey>,
    size: usize,
}

impl<T> LinkedListQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            list: SinglyLinkedList::new(),
            front: None,
            rear: None,
            size: 0,
        }
    }

    /// Create a queue holding `items`, the first item being the front
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut queue = Self::new();
        queue.extend(items);
        queue
    }

    /// Node holding the head element
    pub fn front(&self) -> Option<NodeKey> {
        self.front
    }

    /// Node holding the most recently appended element
    pub fn rear(&self) -> Option<NodeKey> {
        self.rear
    }

    /// Read the value of a node that is still in the queue
    pub fn get(&self, key: NodeKey) -> Option<&T> {
        self.list.get(key)
    }

    /// Elements from front to rear
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Fifo<T> for LinkedListQueue<T> {
    fn append(&mut self, value: T) {
        self.size += 1;
        self.list.append(value);
        if self.front.is_none() {
            self.front = self.list.head();
        }
        self.rear = self.list.tail();
    }

    fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyQueue);
        }

        self.size -= 1;
        let value = self
            .list
            .pop_front()
            .expect("a non-empty queue has a head node");
        self.front = self.list.head();
        self.rear = self.list.tail();
        Ok(value)
    }

    fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn len(&self) -> usize {
        self.size
    }
}

impl<T> Extend<T> for LinkedListQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.append(value));
    }
}

impl<T> Default for LinkedListQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for LinkedListQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::display_items(f, self.iter())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn append_and_pop() {
        let mut queue = LinkedListQueue::new();
        queue.append("a");
        queue.append("b");
        assert_eq!(queue.pop_front().unwrap(), "a");

        queue.append("c");
        assert_eq!(queue.pop_front().unwrap(), "b");
        assert_eq!(queue.pop_front().unwrap(), "c");
        assert!(queue.is_empty());
        assert!(matches!(queue.pop_front(), Err(Error::EmptyQueue)));
    }

    #[test]
    fn front_and_rear_follow_list() {
        let mut queue = LinkedListQueue::new();
        assert!(queue.front().is_none());
        assert!(queue.rear().is_none());

        queue.append(1);
        assert_eq!(queue.front(), queue.rear());

        queue.append(2);
        assert_eq!(queue.get(queue.front().unwrap()), Some(&1));
        assert_eq!(queue.get(queue.rear().unwrap()), Some(&2));

        queue.pop_front().unwrap();
        assert_eq!(queue.front(), queue.rear());
        assert_eq!(queue.get(queue.front().unwrap()), Some(&2));

        queue.pop_front().unwrap();
        assert!(queue.front().is_none());
        assert!(queue.rear().is_none());
    }

    #[test]
    fn from_items() {
        let queue = LinkedListQueue::from_items(vec![3, 2, 1]);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.to_string(), "[3, 2, 1]");
    }

    #[test]
    fn empty_pop_does_not_mutate() {
        let mut queue = LinkedListQueue::<u8>::new();
        assert!(queue.pop_front().is_err());
        assert_eq!(queue.len(), 0);
        assert!(queue.front().is_none());
        assert!(queue.rear().is_none());
    }
}
