//! Queues holding values whose type is only known at runtime
use std::any::{type_name, Any, TypeId};
use std::fmt;

use crate::config::Implementation;
use crate::error::{Error, Result};
use crate::queue::{Fifo, Queue};

/// A type erased value
pub type AnyValue = Box<dyn Any + Send>;

/// The type of the elements held by an `AnyQueue`
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ElementType {
    id: TypeId,
    name: &'static str,
}

impl ElementType {
    /// The element type for `T`
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Name of the type, for diagnostics only
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn check(self, found: Self) -> Result<()> {
        if self != found {
            return Err(Error::TypeMismatch {
                expected: self.name,
                found: found.name,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)
    }
}

/// A queue of type erased values that only accepts values of a single type.
///
/// The element type is either given up front or fixed by the first value
/// appended. Appending a value of another type fails with
/// `Error::TypeMismatch` and leaves the queue untouched.
///
/// An array backed queue takes on the type of the next value whenever it is
/// empty, while a linked list backed queue keeps its element type for good.
///
/// ```
/// use fifokit::{AnyQueue, Implementation};
///
/// let mut queue = AnyQueue::new(Implementation::LinkedList, None);
/// queue.append(1u32).unwrap();
/// assert!(queue.append("two").is_err());
/// assert_eq!(queue.pop_front::<u32>().unwrap(), 1);
/// ```
pub struct AnyQueue {
    inner: Queue<AnyValue>,
    dtype: Option<ElementType>,
}

impl AnyQueue {
    /// Create an empty queue, optionally with a fixed element type
    pub fn new(implementation: Implementation, dtype: Option<ElementType>) -> Self {
        Self {
            inner: Queue::with_implementation(implementation),
            dtype,
        }
    }

    /// Create a queue holding `items`, the first item being the front.
    ///
    /// The element type is `V` unless there are no items, in which case it is
    /// `dtype`. A `dtype` given alongside items has to agree with `V`.
    pub fn from_items<V: Any + Send>(
        implementation: Implementation,
        items: Vec<V>,
        dtype: Option<ElementType>,
    ) -> Result<Self> {
        let dtype = match (dtype, items.is_empty()) {
            (dtype, true) => dtype,
            (Some(dtype), false) => {
                dtype.check(ElementType::of::<V>())?;
                Some(dtype)
            }
            (None, false) => Some(ElementType::of::<V>()),
        };

        let items = items.into_iter().map(|item| Box::new(item) as AnyValue);
        Ok(Self {
            inner: Queue::from_items(implementation, items),
            dtype,
        })
    }

    /// The established element type, if any
    pub fn element_type(&self) -> Option<ElementType> {
        self.dtype
    }

    /// The backing implementation
    pub fn implementation(&self) -> Implementation {
        self.inner.implementation()
    }

    /// Insert a value at the back
    pub fn append<V: Any + Send>(&mut self, value: V) -> Result<()> {
        let found = ElementType::of::<V>();
        match (self.inner.implementation(), self.dtype) {
            (Implementation::Array, _) if self.inner.is_empty() => self.dtype = Some(found),
            (_, None) => self.dtype = Some(found),
            (_, Some(dtype)) => dtype.check(found)?,
        }
        self.inner.append(Box::new(value));
        Ok(())
    }

    /// Remove and return the value at the front as a `V`.
    ///
    /// Fails with `Error::TypeMismatch` without removing anything if the
    /// queue does not hold `V`s.
    pub fn pop_front<V: Any>(&mut self) -> Result<V> {
        if self.inner.is_empty() {
            return Err(Error::EmptyQueue);
        }
        if let Some(dtype) = self.dtype {
            dtype.check(ElementType::of::<V>())?;
        }

        let value = self.inner.pop_front()?;
        match value.downcast::<V>() {
            Ok(value) => Ok(*value),
            Err(_) => unreachable!("every value in the queue has the element type"),
        }
    }

    /// Remove and return the value at the front
    pub fn pop_front_any(&mut self) -> Result<AnyValue> {
        self.inner.pop_front()
    }

    /// `true` if there are no values
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of values in the queue
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl fmt::Debug for AnyQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyQueue")
            .field("implementation", &self.implementation())
            .field("dtype", &self.dtype)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn type_fixed_by_first_append() {
        for implementation in [Implementation::Array, Implementation::LinkedList] {
            let mut queue = AnyQueue::new(implementation, None);
            assert!(queue.element_type().is_none());

            queue.append(1i32).unwrap();
            assert_eq!(queue.element_type(), Some(ElementType::of::<i32>()));
        }
    }

    #[test]
    fn mismatch_leaves_queue_untouched() {
        for implementation in [Implementation::Array, Implementation::LinkedList] {
            let mut queue = AnyQueue::new(implementation, None);
            queue.append(1i32).unwrap();

            let Err(Error::TypeMismatch { expected, found }) = queue.append("one") else {
                panic!("expected a type mismatch")
            };
            assert_eq!(expected, "i32");
            assert_eq!(found, "&str");
            assert_eq!(queue.len(), 1);
            assert_eq!(queue.pop_front::<i32>().unwrap(), 1);
        }
    }

    #[test]
    fn array_adopts_type_when_empty() {
        let mut queue = AnyQueue::new(Implementation::Array, Some(ElementType::of::<u8>()));
        queue.append(String::from("a")).unwrap();
        assert_eq!(queue.element_type(), Some(ElementType::of::<String>()));

        queue.pop_front::<String>().unwrap();
        queue.append(2.5f64).unwrap();
        assert_eq!(queue.pop_front::<f64>().unwrap(), 2.5);
    }

    #[test]
    fn linked_list_keeps_type_when_empty() {
        let mut queue = AnyQueue::new(Implementation::LinkedList, Some(ElementType::of::<u8>()));
        assert!(matches!(queue.append(1u16), Err(Error::TypeMismatch { .. })));
        assert!(queue.is_empty());

        queue.append(1u8).unwrap();
        queue.pop_front::<u8>().unwrap();
        assert!(matches!(queue.append(1u16), Err(Error::TypeMismatch { .. })));
        assert!(queue.is_empty());
    }

    #[test]
    fn pop_wrong_type() {
        let mut queue = AnyQueue::new(Implementation::Array, None);
        queue.append(7u64).unwrap();

        assert!(matches!(queue.pop_front::<u32>(), Err(Error::TypeMismatch { .. })));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_front::<u64>().unwrap(), 7);
    }

    #[test]
    fn pop_empty() {
        let mut queue = AnyQueue::new(Implementation::LinkedList, None);
        assert!(matches!(queue.pop_front::<u8>(), Err(Error::EmptyQueue)));
        assert!(matches!(queue.pop_front_any(), Err(Error::EmptyQueue)));
    }

    #[test]
    fn pop_any() {
        let mut queue = AnyQueue::new(Implementation::LinkedList, None);
        queue.append('x').unwrap();

        let value = queue.pop_front_any().unwrap();
        assert_eq!(*value.downcast::<char>().unwrap(), 'x');
    }

    #[test]
    fn from_items_infers_type() {
        let mut queue = AnyQueue::from_items(Implementation::Array, vec![1i32, 2, 3], None).unwrap();
        assert_eq!(queue.element_type(), Some(ElementType::of::<i32>()));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop_front::<i32>().unwrap(), 1);
    }

    #[test]
    fn from_items_with_conflicting_type() {
        let result = AnyQueue::from_items(
            Implementation::LinkedList,
            vec!["a", "b"],
            Some(ElementType::of::<String>()),
        );
        assert!(matches!(result, Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn from_no_items_keeps_given_type() {
        let queue = AnyQueue::from_items::<u8>(
            Implementation::LinkedList,
            vec![],
            Some(ElementType::of::<String>()),
        )
        .unwrap();
        assert_eq!(queue.element_type(), Some(ElementType::of::<String>()));

        let queue = AnyQueue::from_items::<u8>(Implementation::Array, vec![], None).unwrap();
        assert!(queue.element_type().is_none());
    }
}
