//! Filesystem operations.
//!
//! `Filesystem` is the context object the kernel owns and threads through
//! every command. Each path-taking operation splits its path into parent
//! path and leaf, resolves the parent, then applies its checks in a fixed
//! order so the first failing check decides the error.

use alloc::string::String;
use alloc::vec::Vec;

use crate::arena::ArenaUsage;
use crate::bootstrap;
use crate::config::FsConfig;
use crate::core::{
    content_prefix, is_special, split_parent, DirEntry, FsError, FsResult, Node, NodeId,
    NodeKind, NodeStat, Permissions,
};
use crate::service::{
    can_execute, is_hidden, require_execute, require_read, require_unprotected, require_write,
};
use crate::tree::Tree;

/// In-memory hierarchical filesystem.
pub struct Filesystem {
    tree: Tree,
}

impl Filesystem {
    /// Build the root and the protected bootstrap tree.
    ///
    /// Fails if `config` is too small to hold the bootstrap entries.
    pub fn new(config: FsConfig) -> FsResult<Self> {
        let mut tree = Tree::new(config)?;
        bootstrap::seed(&mut tree)?;
        Ok(Self { tree })
    }

    /// Capacities this filesystem was built with.
    pub fn config(&self) -> &FsConfig {
        self.tree.config()
    }

    /// The underlying tree, for read-only inspection.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn cwd(&self) -> NodeId {
        self.tree.cwd()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.tree.node(id)
    }

    /// Arena nodes used and total.
    pub fn usage(&self) -> ArenaUsage {
        self.tree.usage()
    }

    /// Resolve a directory path, optionally creating what is missing.
    pub fn resolve(&mut self, path: &str, create_missing: bool) -> FsResult<NodeId> {
        self.tree.resolve(path, create_missing)
    }

    /// Find the node a path names, file or directory.
    ///
    /// The parent part must resolve to a directory; the leaf may be either
    /// kind. A trailing `.` or `..` names the parent or its parent.
    pub fn locate(&self, path: &str) -> FsResult<NodeId> {
        let (parent_path, leaf) = split_parent(path);
        let parent = self.tree.lookup(parent_path)?;
        match leaf {
            "" | "." => Ok(parent),
            ".." => Ok(self.tree.parent(parent).unwrap_or(parent)),
            name => self
                .tree
                .find_child(parent, self.tree.truncate_name(name))
                .ok_or(FsError::NotFound),
        }
    }

    /// Shared body of the mkdir/touch family.
    fn create(
        &mut self,
        path: &str,
        kind: NodeKind,
        permissions: Permissions,
    ) -> FsResult<NodeId> {
        let (parent_path, leaf) = split_parent(path);
        if leaf.is_empty() || is_special(leaf) {
            return Err(FsError::InvalidName);
        }
        let name = self.tree.truncate_name(leaf);

        let parent = self.tree.lookup(parent_path)?;
        require_write(self.tree.node(parent))?;
        if self.tree.find_child(parent, name).is_some() {
            return Err(FsError::AlreadyExists);
        }
        self.tree.create_child(parent, name, kind, permissions)
    }

    /// Create a directory with `rwx`.
    pub fn mkdir(&mut self, path: &str) -> FsResult<NodeId> {
        self.create(path, NodeKind::Directory, Permissions::dir_default())
    }

    /// Create a directory and every missing directory above it.
    ///
    /// Succeeds without change if the whole path already exists.
    pub fn mkdir_p(&mut self, path: &str) -> FsResult<NodeId> {
        self.tree.resolve(path, true)
    }

    /// Create an empty `rw-` file.
    pub fn touch(&mut self, path: &str) -> FsResult<NodeId> {
        self.touch_with(path, Permissions::file_default())
    }

    /// Create an empty `r--` file.
    pub fn touchro(&mut self, path: &str) -> FsResult<NodeId> {
        self.touch_with(path, Permissions::read_only())
    }

    /// Create an empty file with the given permissions.
    pub fn touch_with(&mut self, path: &str, permissions: Permissions) -> FsResult<NodeId> {
        self.create(path, NodeKind::File, permissions)
    }

    /// Checks shared by rm and rmdir; returns the parent.
    fn removable(&self, id: NodeId, kind: NodeKind) -> FsResult<NodeId> {
        let node = self.tree.node(id);
        if node.kind != kind {
            return Err(FsError::WrongType);
        }
        require_unprotected(node)?;
        // Only the root lacks a parent, and the root is always System
        let parent = self.tree.parent(id).ok_or(FsError::NotFound)?;
        require_write(self.tree.node(parent))?;
        Ok(parent)
    }

    /// Remove a file.
    pub fn rm(&mut self, path: &str) -> FsResult<()> {
        let id = self.locate(path)?;
        self.removable(id, NodeKind::File)?;
        self.tree.detach(id);
        Ok(())
    }

    /// Remove an empty directory.
    ///
    /// If the cursor is inside the removed directory it moves to the parent.
    pub fn rmdir(&mut self, path: &str) -> FsResult<()> {
        let id = self.locate(path)?;
        let parent = self.removable(id, NodeKind::Directory)?;
        if !self.tree.children(id).is_empty() {
            return Err(FsError::NotEmpty);
        }
        self.tree.detach(id);
        if self.tree.cwd() == id {
            self.tree.set_cwd(parent);
        }
        Ok(())
    }

    /// List a directory in insertion order.
    ///
    /// Hidden entries are skipped unless `show_hidden` is set.
    pub fn ls(&self, path: &str, show_hidden: bool) -> FsResult<Vec<DirEntry>> {
        let dir = self.tree.lookup(path)?;
        require_read(self.tree.node(dir))?;
        Ok(self
            .tree
            .children(dir)
            .iter()
            .map(|&child| self.tree.node(child))
            .filter(|node| show_hidden || !is_hidden(node))
            .map(DirEntry::from)
            .collect())
    }

    /// Move the cursor.
    pub fn cd(&mut self, path: &str) -> FsResult<()> {
        let dir = self.tree.lookup(path)?;
        require_execute(self.tree.node(dir))?;
        self.tree.set_cwd(dir);
        Ok(())
    }

    /// Absolute path of the cursor.
    pub fn pwd(&self) -> String {
        self.tree.path_of(self.tree.cwd())
    }

    /// Replace a file's content.
    ///
    /// Text stops at the first NUL and is cut to the content capacity.
    /// Returns the number of bytes stored.
    pub fn write(&mut self, path: &str, text: &str) -> FsResult<usize> {
        let id = self.locate(path)?;
        let node = self.tree.node(id);
        if !node.is_file() {
            return Err(FsError::WrongType);
        }
        require_write(node)?;

        let stored = content_prefix(text, self.config().max_content_len);
        let node = self.tree.node_mut(id);
        node.content.clear();
        node.content.extend_from_slice(stored.as_bytes());
        Ok(stored.len())
    }

    /// Read a file's content.
    pub fn cat(&self, path: &str) -> FsResult<&[u8]> {
        let id = self.locate(path)?;
        let node = self.tree.node(id);
        if !node.is_file() {
            return Err(FsError::WrongType);
        }
        require_read(node)?;
        Ok(&node.content)
    }

    /// Replace a node's permissions with a numeric mode.
    pub fn chmod(&mut self, path: &str, mode: u32) -> FsResult<()> {
        let id = self.locate(path)?;
        require_unprotected(self.tree.node(id))?;
        let permissions = Permissions::from_mode(mode).ok_or(FsError::InvalidValue(mode))?;
        self.tree.node_mut(id).permissions = permissions;
        Ok(())
    }

    /// Metadata for a node.
    pub fn stat(&self, path: &str) -> FsResult<NodeStat> {
        let id = self.locate(path)?;
        let node = self.tree.node(id);
        let name = if id == self.tree.root() {
            String::from("/")
        } else {
            node.name.clone()
        };
        Ok(NodeStat {
            name,
            kind: node.kind,
            permissions: node.permissions,
            flags: node.flags,
            size: node.size(),
        })
    }

    /// Content of a runnable file.
    ///
    /// `None` unless the path names a file with Execute set. Read is not
    /// required, so a `--x` script runs but cannot be `cat`ed.
    pub fn get_executable(&self, path: &str) -> Option<&[u8]> {
        let id = self.locate(path).ok()?;
        let node = self.tree.node(id);
        if node.is_file() && can_execute(node) {
            Some(&node.content)
        } else {
            None
        }
    }
}
