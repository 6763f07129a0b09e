use std::fmt::{self, Display};

pub use self::array::ArrayQueue;
pub use self::linked::LinkedListQueue;
use crate::config::Implementation;
use crate::error::Result;

mod array;
mod linked;

/// First in, first out.
///
/// Values are appended at the back and removed from the front.
/// Every implementation behaves the same through this trait.
pub trait Fifo<T> {
    /// Insert a value at the back
    fn append(&mut self, value: T);

    /// Remove and return the value at the front.
    ///
    /// Fails with `Error::EmptyQueue` if there are no values, leaving the
    /// queue untouched.
    fn pop_front(&mut self) -> Result<T>;

    /// `true` if there are no values
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of values in the queue
    fn len(&self) -> usize;
}

/// A queue using one of the available backing implementations.
///
/// ```
/// use fifokit::{Fifo, Queue};
///
/// let mut queue = Queue::named("linked-list").unwrap();
/// queue.append("a");
/// queue.append("b");
/// assert_eq!(queue.pop_front().unwrap(), "a");
///
/// assert!(Queue::<u8>::named("ring").is_err());
/// ```
#[derive(Debug)]
pub enum Queue<T> {
    /// Array backed queue
    Array(ArrayQueue<T>),
    /// Linked list backed queue
    LinkedList(LinkedListQueue<T>),
}

impl<T> Queue<T> {
    /// Create an empty array backed queue
    pub fn new() -> Self {
        Self::Array(ArrayQueue::new())
    }

    /// Create an empty queue with the given backing implementation
    pub fn with_implementation(implementation: Implementation) -> Self {
        Self::from_items(implementation, [])
    }

    /// Create an empty queue, looking up the backing implementation by name.
    ///
    /// Fails with `Error::UnsupportedImplementation` for unknown names.
    pub fn named(implementation: &str) -> Result<Self> {
        Ok(Self::with_implementation(implementation.parse()?))
    }

    /// Create a queue holding `items`, the first item being the front
    pub fn from_items(implementation: Implementation, items: impl IntoIterator<Item = T>) -> Self {
        let queue = match implementation {
            Implementation::Array => Self::Array(ArrayQueue::from_items(items)),
            Implementation::LinkedList => Self::LinkedList(LinkedListQueue::from_items(items)),
        };
        log::debug!("created {implementation} queue holding {} items", queue.len());
        queue
    }

    /// The backing implementation
    pub fn implementation(&self) -> Implementation {
        match self {
            Self::Array(_) => Implementation::Array,
            Self::LinkedList(_) => Implementation::LinkedList,
        }
    }

    /// Elements from front to rear
    pub fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            Self::Array(queue) => Box::new(queue.iter()),
            Self::LinkedList(queue) => Box::new(queue.iter()),
        }
    }
}

impl<T> Fifo<T> for Queue<T> {
    fn append(&mut self, value: T) {
        match self {
            Self::Array(queue) => queue.append(value),
            Self::LinkedList(queue) => queue.append(value),
        }
    }

    fn pop_front(&mut self) -> Result<T> {
        match self {
            Self::Array(queue) => queue.pop_front(),
            Self::LinkedList(queue) => queue.pop_front(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Array(queue) => queue.is_empty(),
            Self::LinkedList(queue) => queue.is_empty(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Array(queue) => queue.len(),
            Self::LinkedList(queue) => queue.len(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.append(value));
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(Implementation::Array, iter)
    }
}

impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_items(f, self.iter())
    }
}

fn display_items<'a, T: Display + 'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a T>,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}
