//! Filesystem bootstrap.
//!
//! Seeds the protected system area once, right after the root exists:
//! ```text
//! /            rwx  system
//! ├── bin/     r-x  system
//! ├── etc/     r-x  system
//! │   └── fsinfo   r--  system   (FsConfig as JSON)
//! ├── sys/     r-x  system
//! └── .boot/   r-x  system, hidden
//! ```
//! The shape is fixed so protection tests can rely on it without setup.

use crate::core::{truncate_str, FsError, FsResult, NodeFlags, NodeId, NodeKind, Permissions};
use crate::tree::Tree;

/// Protected directories under the root, in listing order.
pub const SYSTEM_DIRS: [&str; 4] = ["bin", "etc", "sys", ".boot"];

/// Path of the capacity description file.
pub const FSINFO_PATH: &str = "/etc/fsinfo";

/// Number of arena slots the bootstrap tree occupies, root included.
pub const BOOTSTRAP_NODES: usize = 1 + SYSTEM_DIRS.len() + 1;

fn protected(
    tree: &mut Tree,
    parent: NodeId,
    name: &str,
    kind: NodeKind,
    permissions: Permissions,
) -> FsResult<NodeId> {
    let id = tree.create_child(parent, name, kind, permissions)?;
    tree.node_mut(id).flags.insert(NodeFlags::SYSTEM);
    Ok(id)
}

/// Create the system directories and `/etc/fsinfo` under the root.
pub(crate) fn seed(tree: &mut Tree) -> FsResult<()> {
    let root = tree.root();
    let mut etc = root;
    for name in SYSTEM_DIRS {
        let id = protected(tree, root, name, NodeKind::Directory, Permissions::read_execute())?;
        if name == "etc" {
            etc = id;
        }
    }

    let config = *tree.config();
    let json = serde_json::to_string(&config).map_err(|_| FsError::Serialization)?;
    let content = truncate_str(&json, config.max_content_len);

    let fsinfo = protected(tree, etc, "fsinfo", NodeKind::File, Permissions::read_only())?;
    tree.node_mut(fsinfo)
        .content
        .extend_from_slice(content.as_bytes());
    Ok(())
}
