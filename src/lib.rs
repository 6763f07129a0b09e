#![deny(missing_docs)]
//! FIFO queues backed by either a compacting dynamic array or a singly linked
//! list. Both implementations behave the same through the `Fifo` trait.

mod config;
pub mod error;
mod queue;
pub mod storage;
mod value;

pub use config::{Implementation, QueueConfig};
pub use error::{Error, Result};
pub use queue::{ArrayQueue, Fifo, LinkedListQueue, Queue};
pub use value::{AnyQueue, AnyValue, ElementType};
