use std::mem::swap;

#[derive(Debug)]
enum Entry<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

impl<T> Entry<T> {
    #[cfg(test)]
    fn is_occupied(&self) -> bool {
        match self {
            Entry::Occupied(_) => true,
            Entry::Vacant(_) => false,
        }
    }
}

/// Node storage for the linked list.
/// Removed slots are threaded into a free list and reused by the next insert.
#[derive(Debug)]
pub(crate) struct Slab<T> {
    inner: Vec<Entry<T>>,
    next_key: Option<usize>,
    len: usize,
}

impl<T> Slab<T> {
    pub(crate) fn new() -> Self {
        Self {
            inner: vec![],
            next_key: None,
            len: 0,
        }
    }

    pub(crate) fn insert(&mut self, value: T) -> usize {
        self.len += 1;
        match self.next_key.take() {
            None => {
                let key = self.inner.len();
                self.inner.push(Entry::Occupied(value));
                key
            }
            Some(key) => {
                let mut entry = Entry::Occupied(value);
                swap(&mut self.inner[key], &mut entry);
                let Entry::Vacant(next) = entry else { unreachable!("free list points at an occupied entry") };
                self.next_key = next;
                key
            }
        }
    }

    pub(crate) fn remove(&mut self, key: usize) -> Option<T> {
        match self.inner.get(key) {
            Some(Entry::Occupied(_)) => {}
            _ => return None,
        }

        let mut entry = Entry::Vacant(self.next_key.take());
        swap(&mut self.inner[key], &mut entry);
        self.next_key = Some(key);
        self.len -= 1;
        let Entry::Occupied(value) = entry else { unreachable!() };
        Some(value)
    }

    pub(crate) fn get(&self, key: usize) -> Option<&T> {
        self.inner.get(key).and_then(|entry| match entry {
            Entry::Occupied(value) => Some(value),
            _ => None,
        })
    }

    pub(crate) fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        self.inner.get_mut(key).and_then(|entry| match entry {
            Entry::Occupied(value) => Some(value),
            _ => None,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub(crate) fn count(&self) -> usize {
        self.inner.iter().filter(|e| e.is_occupied()).count()
    }
}
