use crate::Node;
use std::fmt;
use std::ops::{Index, IndexMut};


/// Handle of a node inside the arena of the list that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant,
}

/// # Summary
///
/// `Arena` owns every node of a list. Nodes refer to each other through
/// [`NodeId`] handles instead of pointers; releasing a node makes its slot
/// vacant, and vacant slots are handed out again by [`Arena::alloc`].
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<NodeId>,
    occupied: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            occupied: 0,
        }
    }
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.occupied
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        self.occupied += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Slot::Occupied(node);
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of its slot. The caller must have unlinked it
    /// beforehand: `id` is dangling afterwards.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<T> {
        match std::mem::replace(&mut self.slots[id.0], Slot::Vacant) {
            Slot::Occupied(node) => {
                self.occupied -= 1;
                self.free.push(id);
                node
            }
            Slot::Vacant => panic!("node {} released twice", id),
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.occupied = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.get(id) {
            Some(node) => node,
            None => panic!("dangling node {}", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("dangling node {}", id),
        }
    }
}
