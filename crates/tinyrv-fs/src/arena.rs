//! Fixed-capacity node arena.
//!
//! Bump allocation over a pool sized once at construction. Slots are never
//! reclaimed: deleting a node only detaches it from the tree, so a handle
//! stays valid (and unreachable) for the life of the arena.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::core::{FsError, FsResult, Node, NodeId};

/// Arena occupancy snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaUsage {
    /// Slots handed out so far
    pub used: usize,
    /// Total slots
    pub capacity: usize,
}

impl ArenaUsage {
    /// Slots still available.
    pub fn remaining(&self) -> usize {
        self.capacity - self.used
    }
}

/// Node pool.
pub struct NodeArena {
    slots: Vec<Node>,
    capacity: usize,
}

impl NodeArena {
    /// Reserve an arena of `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Hand out a fresh node.
    ///
    /// The node is zeroed: empty name and content, no children, no parent,
    /// read+write permissions, no flags.
    pub fn allocate(&mut self) -> FsResult<NodeId> {
        if self.slots.len() >= self.capacity {
            return Err(FsError::Exhausted);
        }
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Node::default());
        Ok(id)
    }

    /// Look up a node by handle.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index())
    }

    /// Look up a node by handle for mutation.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.index())
    }

    /// Number of slots handed out.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if nothing has been allocated.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if the next allocation will fail.
    pub fn is_exhausted(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Occupancy snapshot.
    pub fn usage(&self) -> ArenaUsage {
        ArenaUsage {
            used: self.slots.len(),
            capacity: self.capacity,
        }
    }
}

// Handles are only minted by `allocate`, so indexing with one from this
// arena is always in bounds.
impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.slots[id.index()]
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.slots[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Permissions;

    #[test]
    fn test_allocate_hands_out_increasing_ids() {
        let mut arena = NodeArena::with_capacity(3);
        assert_eq!(arena.allocate().unwrap(), NodeId(0));
        assert_eq!(arena.allocate().unwrap(), NodeId(1));
        assert_eq!(arena.allocate().unwrap(), NodeId(2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_allocate_fails_when_exhausted() {
        let mut arena = NodeArena::with_capacity(1);
        arena.allocate().unwrap();
        assert!(arena.is_exhausted());
        assert_eq!(arena.allocate(), Err(FsError::Exhausted));
        // Exhaustion is permanent
        assert_eq!(arena.allocate(), Err(FsError::Exhausted));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_allocated_node_is_zeroed() {
        let mut arena = NodeArena::with_capacity(2);
        let id = arena.allocate().unwrap();
        let node = arena.get(id).unwrap();
        assert!(node.name.is_empty());
        assert!(node.children.is_empty());
        assert_eq!(node.parent, None);
        assert_eq!(node.permissions, Permissions::file_default());
    }

    #[test]
    fn test_usage() {
        let mut arena = NodeArena::with_capacity(4);
        arena.allocate().unwrap();
        let usage = arena.usage();
        assert_eq!(usage.used, 1);
        assert_eq!(usage.capacity, 4);
        assert_eq!(usage.remaining(), 3);
    }

    #[test]
    fn test_unknown_handle_is_none() {
        let arena = NodeArena::with_capacity(4);
        assert!(arena.get(NodeId(2)).is_none());
    }
}
