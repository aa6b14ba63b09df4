use crate::error::{Error, Result};
use crate::{List, Node};


/// A node found by a search, together with its 0-based position.
#[derive(Debug, Clone, Copy)]
pub struct Match<'a, T> {
    position: usize,
    node: &'a Node<T>,
}

impl<'a, T> Match<'a, T> {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn node(&self) -> &'a Node<T> {
        self.node
    }

    pub fn value(&self) -> &'a T {
        self.node.value()
    }
}

impl<T> List<T> {
    fn matches<'a>(&'a self, value: &'a T) -> impl Iterator<Item = Match<'a, T>> + 'a
    where
        T: PartialEq,
    {
        self.nodes()
            .enumerate()
            .filter(move |(_, node)| node.value() == value)
            .map(|(position, node)| Match { position, node })
    }

    /// Whether any node holds a value equal to `value`.
    pub fn exists(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    pub fn find_first<'a>(&'a self, value: &'a T) -> Option<Match<'a, T>>
    where
        T: PartialEq,
    {
        self.matches(value).next()
    }

    /// Every node equal to `value`, in list order. `None` when there are
    /// none.
    pub fn find_all<'a>(&'a self, value: &'a T) -> Option<Vec<Match<'a, T>>>
    where
        T: PartialEq,
    {
        let found = self.matches(value).collect::<Vec<_>>();
        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }

    /// # Summary
    ///
    /// Returns the node at index `length / 2`: the exact middle for an odd
    /// length, the upper middle for an even one.
    ///
    /// The chain is walked once, `fast` moving two links for each link of
    /// `slow`, so the length is never consulted.
    pub fn middle(&self) -> Result<&Node<T>> {
        let mut slow = self.head().ok_or(Error::EmptyList)?;
        let mut fast = Some(slow);
        while let Some(after) = fast.and_then(|node| self.next(node)) {
            let Some(next) = self.next(slow) else {
                break;
            };
            slow = next;
            fast = self.next(after);
        }
        Ok(slow)
    }
}
