//! Tree model: parent/child links over the node arena.
//!
//! Holds the root and the current-directory cursor. Attach and detach are
//! edits to handle lists; nodes are never moved or freed.

use alloc::string::String;
use alloc::vec::Vec;

use crate::arena::{ArenaUsage, NodeArena};
use crate::config::FsConfig;
use crate::core::{
    render_absolute, truncate_str, FsError, FsResult, Node, NodeFlags, NodeId, NodeKind,
    Permissions,
};

/// Directory tree with a cursor.
pub struct Tree {
    arena: NodeArena,
    root: NodeId,
    cwd: NodeId,
    config: FsConfig,
}

impl Tree {
    /// Create a tree holding only the root directory.
    ///
    /// The root has full permissions and the System flag. Fails with
    /// `Exhausted` if the arena has no slot at all.
    pub fn new(config: FsConfig) -> FsResult<Self> {
        let mut arena = NodeArena::with_capacity(config.max_nodes);
        let root = arena.allocate()?;
        {
            let node = &mut arena[root];
            node.kind = NodeKind::Directory;
            node.permissions = Permissions::all();
            node.flags = NodeFlags::SYSTEM;
        }
        Ok(Self {
            arena,
            root,
            cwd: root,
            config,
        })
    }

    /// Capacities this tree was built with.
    pub fn config(&self) -> &FsConfig {
        &self.config
    }

    /// The root directory.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The current-directory cursor.
    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    /// Move the cursor. The target must be an attached directory.
    pub(crate) fn set_cwd(&mut self, dir: NodeId) {
        debug_assert!(self.arena[dir].is_directory());
        self.cwd = dir;
    }

    /// Access a node.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.arena[id]
    }

    /// Access a node by a handle that may come from elsewhere.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    /// Parent of a node; `None` for the root and for detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent
    }

    /// Children of a directory in insertion order.
    pub fn children(&self, dir: NodeId) -> &[NodeId] {
        &self.arena[dir].children
    }

    /// Arena occupancy.
    pub fn usage(&self) -> ArenaUsage {
        self.arena.usage()
    }

    /// Find a child by exact, case-sensitive name.
    pub fn find_child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.arena[dir]
            .children
            .iter()
            .copied()
            .find(|&child| self.arena[child].name == name)
    }

    /// Cut a requested name to the configured name length.
    pub fn truncate_name<'a>(&self, name: &'a str) -> &'a str {
        truncate_str(name, self.config.max_name_len)
    }

    /// Allocate a node and append it to `parent`'s children.
    ///
    /// Checks only capacity: the caller has already checked permissions and
    /// name uniqueness. The directory limit is checked before allocation so a
    /// full directory never consumes a slot. Names starting with `.` are
    /// marked hidden.
    pub fn create_child(
        &mut self,
        parent: NodeId,
        name: &str,
        kind: NodeKind,
        permissions: Permissions,
    ) -> FsResult<NodeId> {
        debug_assert!(self.arena[parent].is_directory());
        let name = truncate_str(name, self.config.max_name_len);

        if self.arena[parent].children.len() >= self.config.max_children {
            return Err(FsError::DirectoryFull);
        }
        let id = self.arena.allocate()?;

        let node = &mut self.arena[id];
        node.name = String::from(name);
        node.kind = kind;
        node.permissions = permissions;
        node.parent = Some(parent);
        if name.starts_with('.') {
            node.flags.insert(NodeFlags::HIDDEN);
        }

        self.arena[parent].children.push(id);
        Ok(id)
    }

    /// Remove a node from its parent's children, keeping sibling order.
    ///
    /// The slot is not reclaimed; the node simply becomes unreachable.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.arena[id].parent.take() {
            self.arena[parent].children.retain(|&child| child != id);
        }
    }

    /// Check if a node is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        while let Some(parent) = self.arena[current].parent {
            current = parent;
        }
        current == self.root
    }

    /// Absolute path of a node, rendered root-to-leaf.
    ///
    /// Walks parent links into a stack instead of recursing.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut names: Vec<&str> = Vec::new();
        let mut current = id;
        while let Some(parent) = self.arena[current].parent {
            names.push(self.arena[current].name.as_str());
            current = parent;
        }
        render_absolute(names.into_iter().rev())
    }
}
