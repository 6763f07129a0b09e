//! Queue configuration
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::queue::{ArrayQueue, Fifo, Queue};
use crate::storage::DEFAULT_LOAD_FACTOR;

/// Backing implementation of a queue
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Implementation {
    /// A dynamic array that compacts when it becomes sparse
    #[default]
    Array,
    /// A singly linked list
    LinkedList,
}

impl Implementation {
    /// The name used to select this implementation
    pub const fn name(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::LinkedList => "linked-list",
        }
    }
}

impl Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Implementation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let implementation = match s {
            "array" => Self::Array,
            "linked-list" | "linkedlist" => Self::LinkedList,
            name => return Err(Error::UnsupportedImplementation(name.to_string())),
        };
        Ok(implementation)
    }
}

/// Describes how to build a queue.
///
/// ```
/// use fifokit::{Fifo, Queue, QueueConfig};
///
/// let config = QueueConfig::from_json(r#"{ "implementation": "linked-list", "items": [1, 2] }"#).unwrap();
/// let mut queue = Queue::<u32>::from_config(&config).unwrap();
/// assert_eq!(queue.pop_front().unwrap(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Name of the backing implementation, `"array"` or `"linked-list"`
    pub implementation: String,
    /// Compaction threshold of the array implementation
    pub load_factor: f64,
    /// Initial items, front first. Has to be a JSON array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
}

impl QueueConfig {
    /// Parse a configuration from json
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The selected backing implementation
    pub fn implementation(&self) -> Result<Implementation> {
        self.implementation.parse()
    }

    fn items<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        match &self.items {
            None => Ok(Vec::new()),
            Some(items @ Value::Array(_)) => Ok(serde_json::from_value(items.clone())?),
            Some(_) => Err(Error::InvalidInitialItems),
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            implementation: Implementation::default().name().to_string(),
            load_factor: DEFAULT_LOAD_FACTOR,
            items: None,
        }
    }
}

impl<T: DeserializeOwned> Queue<T> {
    /// Build a queue from a configuration.
    ///
    /// Fails if the implementation is unknown, the items are not a JSON array
    /// or cannot be deserialized as `T`, or the load factor is out of range.
    pub fn from_config(config: &QueueConfig) -> Result<Self> {
        let implementation = config.implementation()?;
        let items = config.items::<T>()?;
        match implementation {
            Implementation::Array => {
                let mut queue = ArrayQueue::with_load_factor(config.load_factor)?;
                queue.fill(items);
                log::debug!(
                    "created array queue holding {} items, load factor {}",
                    queue.len(),
                    config.load_factor
                );
                Ok(Self::Array(queue))
            }
            Implementation::LinkedList => Ok(Self::from_items(implementation, items)),
        }
    }
}
