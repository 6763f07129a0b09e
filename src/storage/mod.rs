//! Backing containers for the queues

pub use self::array::{DynamicArray, Resize, DEFAULT_LOAD_FACTOR};
pub use self::list::{Iter, NodeKey, SinglyLinkedList};

mod array;
mod list;
mod slab;
