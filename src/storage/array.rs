use crate::error::{Error, Result};

/// Default ratio of live elements to capacity below which the array compacts.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.25;

/// What happened to the backing storage during a mutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resize {
    /// Storage was left as is
    Unchanged,
    /// Storage was reallocated with a larger capacity, indices are preserved
    Grew,
    /// Live elements were moved to the start of a smaller allocation,
    /// previously held indices are no longer valid
    Compacted,
}

/// A growable array that compacts itself once it becomes too sparse.
///
/// Deleting an element leaves a hole in its slot rather than shifting the
/// following elements. When the ratio of live elements to capacity drops below
/// the load factor, the live elements are moved to the front of a new
/// allocation of `2 * len + 1` slots.
///
/// A full array grows to `2 * capacity + 1` slots on append.
#[derive(Debug)]
pub struct DynamicArray<T> {
    slots: Vec<Option<T>>,
    len: usize,
    last_filled: Option<usize>,
    load_factor: f64,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with no allocated slots
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            last_filled: None,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Create an empty array with a custom load factor.
    ///
    /// The load factor has to be within the open range `(0, 1)`.
    pub fn with_load_factor(load_factor: f64) -> Result<Self> {
        if !(load_factor > 0.0 && load_factor < 1.0) {
            return Err(Error::InvalidLoadFactor(load_factor));
        }
        Ok(Self {
            load_factor,
            ..Self::new()
        })
    }

    /// Replace the contents with `items`, filling every slot.
    pub(crate) fn fill(&mut self, items: impl IntoIterator<Item = T>) {
        self.slots = items.into_iter().map(Some).collect();
        self.len = self.slots.len();
        self.last_filled = self.len.checked_sub(1);
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if there are no live elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the highest occupied slot
    pub fn last_filled(&self) -> Option<usize> {
        self.last_filled
    }

    /// The compaction threshold
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Read the element at `index`, if the slot is occupied
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Live elements in slot order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let end = self.last_filled.map_or(0, |last| last + 1);
        self.slots[..end].iter().flatten()
    }

    /// Whether deleting a single live element would make the array compact.
    ///
    /// This is the same check `delete` applies after removing the element,
    /// made available up front so callers holding indices can tell whether
    /// they are about to be invalidated.
    pub fn would_compact_on_delete(&self) -> bool {
        match self.len {
            0 => false,
            len => self.is_sparse(len - 1),
        }
    }

    /// Append a value after the last filled slot
    pub fn append(&mut self, value: T) -> Resize {
        let next = self.last_filled.map_or(0, |last| last + 1);
        let mut resize = Resize::Unchanged;
        if next == self.capacity() {
            let capacity = 2 * self.capacity() + 1;
            log::trace!("growing array from {} to {capacity} slots", self.capacity());
            self.slots.resize_with(capacity, || None);
            resize = Resize::Grew;
        }

        self.slots[next] = Some(value);
        self.last_filled = Some(next);
        self.len += 1;

        match self.compact_if_sparse() {
            Resize::Unchanged => resize,
            compacted => compacted,
        }
    }

    /// Remove the element at `index`, leaving a hole.
    ///
    /// Returns `None` if the slot is out of bounds or empty.
    /// The array may compact as a result, see `would_compact_on_delete`.
    pub fn delete(&mut self, index: usize) -> Option<(T, Resize)> {
        let value = self.slots.get_mut(index)?.take()?;
        self.len -= 1;
        if self.last_filled == Some(index) {
            self.last_filled = self.slots[..index].iter().rposition(Option::is_some);
        }
        Some((value, self.compact_if_sparse()))
    }

    fn is_sparse(&self, len: usize) -> bool {
        (len as f64) / (self.capacity() as f64) < self.load_factor
    }

    fn compact_if_sparse(&mut self) -> Resize {
        if self.capacity() == 0 || !self.is_sparse(self.len) {
            return Resize::Unchanged;
        }

        let capacity = 2 * self.len + 1;
        log::trace!(
            "compacting array of {} live elements from {} to {capacity} slots",
            self.len,
            self.capacity()
        );

        let mut slots: Vec<Option<T>> = self.slots.drain(..).flatten().map(Some).collect();
        self.last_filled = slots.len().checked_sub(1);
        slots.resize_with(capacity, || None);
        self.slots = slots;
        Resize::Compacted
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn array_of(n: usize) -> DynamicArray<usize> {
        let mut array = DynamicArray::new();
        array.fill(0..n);
        array
    }

    #[test]
    fn append_grows() {
        let mut array = DynamicArray::new();
        assert_eq!(array.capacity(), 0);

        assert_eq!(array.append(1), Resize::Grew);
        assert_eq!(array.capacity(), 1);

        assert_eq!(array.append(2), Resize::Grew);
        assert_eq!(array.capacity(), 3);

        assert_eq!(array.append(3), Resize::Unchanged);
        assert_eq!(array.capacity(), 3);
        assert_eq!(array.last_filled(), Some(2));
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn fill() {
        let array = array_of(4);
        assert_eq!(array.len(), 4);
        assert_eq!(array.capacity(), 4);
        assert_eq!(array.last_filled(), Some(3));
        assert_eq!(*array.get(2).unwrap(), 2);
    }

    #[test]
    fn delete_leaves_hole() {
        let mut array = array_of(4);
        let (value, resize) = array.delete(0).unwrap();

        assert_eq!(value, 0);
        assert_eq!(resize, Resize::Unchanged);
        assert!(array.get(0).is_none());
        assert_eq!(*array.get(1).unwrap(), 1);
        assert_eq!(array.len(), 3);
        assert_eq!(array.last_filled(), Some(3));
    }

    #[test]
    fn delete_missing() {
        let mut array = array_of(2);
        array.delete(0);

        assert!(array.delete(0).is_none());
        assert!(array.delete(10).is_none());
        assert_eq!(array.len(), 1);
    }

    #[test]
    fn delete_compacts() {
        let mut array = array_of(8);
        // 2 / 8 is not below the threshold
        for index in 0..6 {
            assert!(!array.would_compact_on_delete());
            let (_, resize) = array.delete(index).unwrap();
            assert_eq!(resize, Resize::Unchanged);
        }

        assert!(array.would_compact_on_delete());
        let (value, resize) = array.delete(6).unwrap();
        assert_eq!(value, 6);
        assert_eq!(resize, Resize::Compacted);
        assert_eq!(array.capacity(), 3);
        assert_eq!(array.last_filled(), Some(0));
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn delete_last_moves_last_filled_back() {
        let mut array = array_of(3);
        array.delete(2);
        assert_eq!(array.last_filled(), Some(1));
    }

    #[test]
    fn delete_everything() {
        let mut array = array_of(1);
        assert!(array.would_compact_on_delete());

        let (_, resize) = array.delete(0).unwrap();
        assert_eq!(resize, Resize::Compacted);
        assert_eq!(array.capacity(), 1);
        assert_eq!(array.last_filled(), None);
        assert!(array.is_empty());
    }

    #[test]
    fn prediction_matches_delete() {
        let mut array = DynamicArray::new();
        for i in 0..50 {
            array.append(i);
        }

        let mut front = 0;
        while !array.is_empty() {
            let predicted = array.would_compact_on_delete();
            let (_, resize) = array.delete(front).unwrap();
            assert_eq!(predicted, resize == Resize::Compacted);
            front = if predicted { 0 } else { front + 1 };
        }
    }

    #[test]
    fn invalid_load_factor() {
        assert!(matches!(
            DynamicArray::<u8>::with_load_factor(0.0),
            Err(Error::InvalidLoadFactor(_))
        ));
        assert!(matches!(
            DynamicArray::<u8>::with_load_factor(1.0),
            Err(Error::InvalidLoadFactor(_))
        ));
        assert!(DynamicArray::<u8>::with_load_factor(0.5).is_ok());
    }
}
