//! Core types for the filesystem layer.
//!
//! Defines the node record, its handle, the permission triad and the
//! protection flags, plus the listing and stat views handed to callers.

use alloc::string::String;
use alloc::vec::Vec;
use bitflags::bitflags;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Stable handle to a node slot in the arena.
///
/// Handles are minted in strictly increasing order and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Slot index in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Type of filesystem entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Regular file with a bounded content buffer
    #[default]
    File,

    /// Directory with a bounded, ordered child list
    Directory,
}

impl NodeKind {
    /// Single-character type marker used in listings.
    pub fn marker(self) -> char {
        match self {
            NodeKind::File => '-',
            NodeKind::Directory => 'd',
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => write!(f, "file"),
            NodeKind::Directory => write!(f, "directory"),
        }
    }
}

bitflags! {
    /// Unix-like permission triad.
    ///
    /// Files: READ/WRITE gate content access, EXECUTE marks runnable scripts.
    /// Directories: READ gates listing, WRITE gates adding/removing children,
    /// EXECUTE gates entering.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Permissions: u8 {
        const READ = 0b100;
        const WRITE = 0b010;
        const EXECUTE = 0b001;
    }
}

impl Permissions {
    /// Default for freshly allocated nodes and plain files (rw-)
    pub const fn file_default() -> Self {
        Self::READ.union(Self::WRITE)
    }

    /// Default for directories created by mkdir or path creation (rwx)
    pub const fn dir_default() -> Self {
        Self::all()
    }

    /// Read-only (r--)
    pub const fn read_only() -> Self {
        Self::READ
    }

    /// Read and enter/run (r-x)
    pub const fn read_execute() -> Self {
        Self::READ.union(Self::EXECUTE)
    }

    /// Parse a numeric mode, accepting only 0-7.
    pub fn from_mode(mode: u32) -> Option<Self> {
        if mode > 7 {
            return None;
        }
        Self::from_bits(mode as u8)
    }

    /// Numeric mode (0-7).
    pub fn mode(&self) -> u8 {
        self.bits()
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::file_default()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |flag: Permissions, c: char| if self.contains(flag) { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(Permissions::READ, 'r'),
            bit(Permissions::WRITE, 'w'),
            bit(Permissions::EXECUTE, 'x')
        )
    }
}

bitflags! {
    /// Protection flags carried by a node.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct NodeFlags: u8 {
        /// Undeletable, permissions immutable
        const SYSTEM = 0b01;
        /// Omitted from default listings
        const HIDDEN = 0b10;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for NodeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = if self.contains(NodeFlags::SYSTEM) { 'S' } else { '-' };
        let h = if self.contains(NodeFlags::HIDDEN) { 'H' } else { '-' };
        write!(f, "{}{}", s, h)
    }
}

/// Filesystem node.
///
/// `content` is meaningful only for files and `children` only for
/// directories. The root is the only node whose `parent` is `None` while
/// attached.
#[derive(Clone, Debug, Default)]
pub struct Node {
    /// Entry name, unique among siblings
    pub name: String,

    /// Type of node
    pub kind: NodeKind,

    /// File content (bounded)
    pub content: Vec<u8>,

    /// Child handles in insertion order (bounded)
    pub children: Vec<NodeId>,

    /// Owning directory
    pub parent: Option<NodeId>,

    /// Access permissions
    pub permissions: Permissions,

    /// Protection flags
    pub flags: NodeFlags,
}

impl Node {
    /// Check if this is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory)
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File)
    }

    /// Content bytes for files, child count for directories.
    pub fn size(&self) -> usize {
        match self.kind {
            NodeKind::File => self.content.len(),
            NodeKind::Directory => self.children.len(),
        }
    }
}

/// Directory entry returned by `ls`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Entry name
    pub name: String,

    /// Entry type
    pub kind: NodeKind,

    /// Permission triad
    pub permissions: Permissions,

    /// System/hidden flags
    pub flags: NodeFlags,
}

impl From<&Node> for DirEntry {
    fn from(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            kind: node.kind,
            permissions: node.permissions,
            flags: node.flags,
        }
    }
}

/// One listing line: `drwx S- name/`
impl fmt::Display for DirEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {} {}",
            self.kind.marker(),
            self.permissions,
            self.flags,
            self.name
        )?;
        if self.kind == NodeKind::Directory {
            write!(f, "/")?;
        }
        Ok(())
    }
}

/// Metadata returned by `stat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStat {
    /// Entry name (`/` for the root)
    pub name: String,

    /// Entry type
    pub kind: NodeKind,

    /// Permission triad
    pub permissions: Permissions,

    /// System/hidden flags
    pub flags: NodeFlags,

    /// Content size for files, child count for directories
    pub size: usize,
}

impl fmt::Display for NodeStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Name: {}", self.name)?;
        writeln!(f, "  Type: {}", self.kind)?;
        writeln!(
            f,
            "  Perms: {} ({})",
            self.permissions,
            self.permissions.mode()
        )?;
        write!(f, "  Flags:")?;
        if self.flags.is_empty() {
            write!(f, " none")?;
        }
        if self.flags.contains(NodeFlags::SYSTEM) {
            write!(f, " system")?;
        }
        if self.flags.contains(NodeFlags::HIDDEN) {
            write!(f, " hidden")?;
        }
        writeln!(f)?;
        match self.kind {
            NodeKind::File => write!(f, "  Size: {} bytes", self.size),
            NodeKind::Directory => write!(f, "  Children: {}", self.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_permission_modes() {
        assert_eq!(Permissions::from_mode(7), Some(Permissions::all()));
        assert_eq!(Permissions::from_mode(4), Some(Permissions::READ));
        assert_eq!(Permissions::from_mode(0), Some(Permissions::empty()));
        assert_eq!(Permissions::from_mode(8), None);
        assert_eq!(Permissions::file_default().mode(), 6);
        assert_eq!(Permissions::read_execute().mode(), 5);
    }

    #[test]
    fn test_permission_triad_display() {
        assert_eq!(Permissions::all().to_string(), "rwx");
        assert_eq!(Permissions::read_only().to_string(), "r--");
        assert_eq!(Permissions::read_execute().to_string(), "r-x");
        assert_eq!(Permissions::empty().to_string(), "---");
    }

    #[test]
    fn test_fresh_node_defaults() {
        let node = Node::default();
        assert!(node.name.is_empty());
        assert!(node.is_file());
        assert!(node.content.is_empty());
        assert!(node.children.is_empty());
        assert_eq!(node.parent, None);
        assert_eq!(node.permissions, Permissions::READ | Permissions::WRITE);
        assert!(node.flags.is_empty());
    }

    #[test]
    fn test_dir_entry_display() {
        let entry = DirEntry {
            name: "bin".to_string(),
            kind: NodeKind::Directory,
            permissions: Permissions::read_execute(),
            flags: NodeFlags::SYSTEM,
        };
        assert_eq!(entry.to_string(), "dr-x S- bin/");

        let entry = DirEntry {
            name: "a.txt".to_string(),
            kind: NodeKind::File,
            permissions: Permissions::file_default(),
            flags: NodeFlags::empty(),
        };
        assert_eq!(entry.to_string(), "-rw- -- a.txt");
    }

    #[test]
    fn test_stat_display_reports_size_or_children() {
        let stat = NodeStat {
            name: "a.txt".to_string(),
            kind: NodeKind::File,
            permissions: Permissions::read_only(),
            flags: NodeFlags::SYSTEM,
            size: 5,
        };
        let text = stat.to_string();
        assert!(text.contains("Perms: r-- (4)"));
        assert!(text.contains("Flags: system"));
        assert!(text.contains("Size: 5 bytes"));
    }
}
