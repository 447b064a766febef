//! Filesystem capacity configuration.

use serde::{Deserialize, Serialize};

/// Default arena capacity (root and bootstrap entries included)
pub const DEFAULT_MAX_NODES: usize = 64;

/// Default child limit per directory
pub const DEFAULT_MAX_CHILDREN: usize = 16;

/// Default name length in bytes (16-byte buffer, one byte reserved for the terminator)
pub const DEFAULT_MAX_NAME_LEN: usize = 15;

/// Default file content length in bytes (128-byte buffer, one byte reserved)
pub const DEFAULT_MAX_CONTENT_LEN: usize = 127;

/// Fixed capacities of a filesystem instance.
///
/// Chosen once at construction; nothing grows past these limits and no
/// slot is ever reclaimed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsConfig {
    /// Arena capacity
    pub max_nodes: usize,

    /// Children per directory
    pub max_children: usize,

    /// Bytes kept of a node name
    pub max_name_len: usize,

    /// Bytes kept of file content
    pub max_content_len: usize,
}

impl Default for FsConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            max_children: DEFAULT_MAX_CHILDREN,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_content_len: DEFAULT_MAX_CONTENT_LEN,
        }
    }
}

impl FsConfig {
    /// Default limits with a different arena capacity.
    pub fn with_max_nodes(max_nodes: usize) -> Self {
        Self {
            max_nodes,
            ..Self::default()
        }
    }
}
