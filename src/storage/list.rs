use super::slab::Slab;

/// Reference to a node in a `SinglyLinkedList`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey(usize);

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// A singly linked list with a tail reference, so both appending and
/// removing from the head are O(1).
///
/// Nodes live in a slab and link to each other by key.
#[derive(Debug)]
pub struct SinglyLinkedList<T> {
    nodes: Slab<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> SinglyLinkedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
        }
    }

    /// First node
    pub fn head(&self) -> Option<NodeKey> {
        self.head.map(NodeKey)
    }

    /// Last node
    pub fn tail(&self) -> Option<NodeKey> {
        self.tail.map(NodeKey)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Value stored in the node, if the node is still part of the list
    pub fn get(&self, key: NodeKey) -> Option<&T> {
        self.nodes.get(key.0).map(|node| &node.value)
    }

    /// Add a value after the current tail
    pub fn append(&mut self, value: T) -> NodeKey {
        let key = self.nodes.insert(Node { value, next: None });
        match self.tail.and_then(|tail| self.nodes.get_mut(tail)) {
            Some(tail) => tail.next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        NodeKey(key)
    }

    /// Remove the head and return its value
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self
            .nodes
            .remove(head)
            .expect("the head always refers to a live node");
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(node.value)
    }

    /// Values from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the values of a `SinglyLinkedList`
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next?)?;
        self.next = node.next;
        Some(&node.value)
    }
}
