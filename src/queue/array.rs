use std::fmt::{self, Display};

use super::Fifo;
use crate::error::{Error, Result};
use crate::storage::{DynamicArray, Resize};

/// A queue backed by a `DynamicArray`.
///
/// Popping leaves a hole at the front of the array, so the queue keeps the
/// index of its current head. The rear is always the last filled slot of the
/// array.
///
/// ```
/// use fifokit::{ArrayQueue, Fifo};
///
/// let mut queue = ArrayQueue::new();
/// queue.append(1);
/// queue.append(2);
/// assert_eq!(queue.pop_front().unwrap(), 1);
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug)]
pub struct ArrayQueue<T> {
    items: DynamicArray<T>,
    front: Option<usize>,
}

impl<T> ArrayQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            items: DynamicArray::new(),
            front: None,
        }
    }

    /// Create an empty queue whose array compacts below `load_factor`
    pub fn with_load_factor(load_factor: f64) -> Result<Self> {
        Ok(Self {
            items: DynamicArray::with_load_factor(load_factor)?,
            front: None,
        })
    }

    /// Create a queue holding `items`, the first item being the front
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut queue = Self::new();
        queue.fill(items);
        queue
    }

    pub(crate) fn fill(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.fill(items);
        self.front = if self.items.is_empty() { None } else { Some(0) };
    }

    /// Index of the head element in the backing array
    pub fn front_index(&self) -> Option<usize> {
        self.front
    }

    /// Index of the most recently appended element in the backing array
    pub fn rear_index(&self) -> Option<usize> {
        self.items.last_filled()
    }

    /// Number of allocated slots in the backing array
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The backing array
    pub fn items(&self) -> &DynamicArray<T> {
        &self.items
    }

    /// Elements from front to rear
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Fifo<T> for ArrayQueue<T> {
    fn append(&mut self, value: T) {
        if self.is_empty() {
            self.front = Some(0);
        }
        if let Resize::Compacted = self.items.append(value) {
            self.front = Some(0);
        }
    }

    fn pop_front(&mut self) -> Result<T> {
        let Some(old_front) = self.front else {
            return Err(Error::EmptyQueue);
        };

        let compacts = self.items.would_compact_on_delete();
        self.front = if self.front == self.rear_index() {
            None
        } else if compacts {
            Some(0)
        } else {
            Some(old_front + 1)
        };

        let (value, resize) = self
            .items
            .delete(old_front)
            .expect("the front index always refers to a live element");
        debug_assert_eq!(compacts, resize == Resize::Compacted);
        Ok(value)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for ArrayQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::display_items(f, self.iter())
    }
}
