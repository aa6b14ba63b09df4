use crate::arena::{Arena, NodeId};
use crate::error::{Error, Result};
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;


/// `list!` builds a [`List`] the same way `vec!` builds a `Vec`.
#[macro_export]
macro_rules! list {
    ($($x:expr),*$(,)?) => {{
        #[allow(unused_mut)]
        let mut list = $crate::List::new();
	$(
	    list.append($x);
	)*
	list
    }};
}

/// Converts an index given by the caller into a position. Negative indices
/// are the only values that fail to convert.
fn position<I: TryInto<usize>>(index: I) -> Result<usize> {
    index.try_into().map_err(|_| Error::InvalidIndex)
}

/// A single element of a [`List`], holding a value and the link to its
/// successor.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value, next: None }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Handle of the next node in the chain, `None` for the tail.
    pub fn next_id(&self) -> Option<NodeId> {
        self.next
    }
}

/// # Summary
///
/// `List` is a singly linked list. Its nodes are stored in an arena it
/// exclusively owns, and are chained from `head` to `tail` by [`NodeId`]
/// handles. Keeping `tail` makes [`List::append`] O(1); everything else
/// walks the chain from the head.
///
/// # Invariants
///
/// * `length == 0` iff `head` and `tail` are both `None`.
/// * Following `next` `length - 1` times from `head` reaches `tail`, whose
///   `next` is `None`.
/// * The arena holds exactly the `length` nodes of the chain.
#[derive(Clone)]
pub struct List<T> {
    arena: Arena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    length: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            head: None,
            tail: None,
            length: 0,
        }
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut list = Self::with_capacity(values.len());
        list.extend(values.iter().cloned());
        list
    }

    /// Adds a node to the end of the list.
    pub fn append(&mut self, value: T) -> &mut Self {
        let new = self.arena.alloc(Node::new(value));
        match self.tail {
            Some(tail) => self.arena[tail].next = Some(new),
            None => self.head = Some(new),
        }
        self.tail = Some(new);
        self.length += 1;
        debug_assert_eq!(self.arena.len(), self.length);
        self
    }

    /// Adds a node to the beginning of the list.
    pub fn prepend(&mut self, value: T) -> &mut Self {
        let new = self.arena.alloc(Node {
            value,
            next: self.head,
        });
        if self.tail.is_none() {
            self.tail = Some(new);
        }
        self.head = Some(new);
        self.length += 1;
        self
    }

    /// Inserts `value` so that it ends up at the 0-based `index`. Indices
    /// past the end append.
    pub fn insert<I: TryInto<usize>>(&mut self, index: I, value: T) -> Result<&mut Self> {
        let index = position(index)?;
        if self.length == 0 || index >= self.length {
            return Ok(self.append(value));
        }
        if index == 0 {
            return Ok(self.prepend(value));
        }

        let before = self.id_at(index - 1);
        let new = self.arena.alloc(Node {
            value,
            next: self.arena[before].next,
        });
        self.arena[before].next = Some(new);
        self.length += 1;
        log::trace!("linked {} after {} at index {}", new, before, index);
        Ok(self)
    }

    /// Gets the node at the given 0-based index.
    pub fn get_by_index<I: TryInto<usize>>(&self, index: I) -> Result<&Node<T>> {
        let id = self.checked_id(index)?;
        Ok(&self.arena[id])
    }

    pub fn get_by_index_mut<I: TryInto<usize>>(&mut self, index: I) -> Result<&mut Node<T>> {
        let id = self.checked_id(index)?;
        Ok(&mut self.arena[id])
    }

    /// Removes every node whose value equals `value`.
    pub fn delete(&mut self, value: &T) -> &mut Self
    where
        T: PartialEq,
    {
        let mut removed = 0;
        let mut before = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            cursor = self.arena[id].next;
            if self.arena[id].value == *value {
                self.unlink(before, id);
                removed += 1;
            } else {
                before = Some(id);
            }
        }
        if removed > 0 {
            log::debug!("deleted {} node(s), {} left", removed, self.length);
        }
        self
    }

    /// Removes the node at the given 0-based index. Returns whether a node
    /// was removed.
    pub fn delete_index<I: TryInto<usize>>(&mut self, index: I) -> bool {
        let index = match position(index) {
            Ok(index) if index < self.length => index,
            _ => return false,
        };
        let before = index.checked_sub(1).map(|i| self.id_at(i));
        let id = match before {
            Some(before) => self.arena[before].next,
            None => self.head,
        };
        match id {
            Some(id) => {
                self.unlink(before, id);
                true
            }
            None => false,
        }
    }

    /// Removes the head and returns its value.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(None, head))
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.map(|id| &self.arena[id])
    }

    pub fn tail(&self) -> Option<&Node<T>> {
        self.tail.map(|id| &self.arena[id])
    }

    /// The node following `node`, which must belong to this list.
    pub fn next(&self, node: &Node<T>) -> Option<&Node<T>> {
        node.next.map(|id| &self.arena[id])
    }

    /// Looks a node up by handle. Handles of removed nodes may be reused by
    /// later insertions.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The values of the list, from head to tail.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.nodes(),
        }
    }

    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            arena: &self.arena,
            next: self.head,
            remaining: self.length,
        }
    }

    /// Handle of the node at `index`, which must be below `length`.
    fn id_at(&self, index: usize) -> NodeId {
        let mut ids = self.ids();
        match ids.nth(index) {
            Some(id) => id,
            None => panic!("index {} out of a list of length {}", index, self.length),
        }
    }

    fn checked_id<I: TryInto<usize>>(&self, index: I) -> Result<NodeId> {
        let index = position(index)?;
        if self.length == 0 {
            return Err(Error::EmptyList);
        }
        self.ids().nth(index).ok_or(Error::InvalidIndex)
    }

    fn ids(&self) -> Ids<'_, T> {
        Ids {
            arena: &self.arena,
            next: self.head,
        }
    }

    /// Unlinks `id`, whose predecessor is `before` (`None` for the head),
    /// and releases it.
    fn unlink(&mut self, before: Option<NodeId>, id: NodeId) -> T {
        let node = self.arena.release(id);
        match before {
            Some(before) => self.arena[before].next = node.next,
            None => self.head = node.next,
        }
        if node.next.is_none() {
            self.tail = before;
        }
        self.length -= 1;
        debug_assert_eq!(self.arena.len(), self.length);
        log::trace!("unlinked {}", id);
        node.value
    }
}

struct Ids<'a, T> {
    arena: &'a Arena<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Ids<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.arena[id].next;
        Some(id)
    }
}

pub struct Nodes<'a, T> {
    arena: &'a Arena<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let node = &arena[self.next?];
        self.next = node.next;
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Nodes<'a, T> {}

pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(Node::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(values: Vec<T>) -> Self {
        let mut list = Self::with_capacity(values.len());
        list.extend(values);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.extend(values);
        list
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "[]")
        } else {
            write!(f, "{}", self.iter().format(" -> "))
        }
    }
}

impl<T: Serialize> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
