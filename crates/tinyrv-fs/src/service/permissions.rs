//! Permission checking utilities for the filesystem layer.
//!
//! The `can_*`/`is_*` predicates never mutate and never fail. The
//! `require_*` wrappers turn a failed predicate into the matching
//! `PermissionDenied` so operations can chain them with `?`.

use crate::core::{Denied, FsError, FsResult, Node, NodeFlags, Permissions};

/// Check if the node's Read bit is set.
pub fn can_read(node: &Node) -> bool {
    node.permissions.contains(Permissions::READ)
}

/// Check if the node's Write bit is set.
pub fn can_write(node: &Node) -> bool {
    node.permissions.contains(Permissions::WRITE)
}

/// Check if the node's Execute bit is set.
pub fn can_execute(node: &Node) -> bool {
    node.permissions.contains(Permissions::EXECUTE)
}

/// Check if the node is undeletable and permission-immutable.
pub fn is_system(node: &Node) -> bool {
    node.flags.contains(NodeFlags::SYSTEM)
}

/// Check if the node is omitted from default listings.
pub fn is_hidden(node: &Node) -> bool {
    node.flags.contains(NodeFlags::HIDDEN)
}

pub fn require_read(node: &Node) -> FsResult<()> {
    if can_read(node) {
        Ok(())
    } else {
        Err(FsError::PermissionDenied(Denied::Read))
    }
}

pub fn require_write(node: &Node) -> FsResult<()> {
    if can_write(node) {
        Ok(())
    } else {
        Err(FsError::PermissionDenied(Denied::Write))
    }
}

pub fn require_execute(node: &Node) -> FsResult<()> {
    if can_execute(node) {
        Ok(())
    } else {
        Err(FsError::PermissionDenied(Denied::Execute))
    }
}

/// Refuse System-flagged nodes regardless of their permission bits.
pub fn require_unprotected(node: &Node) -> FsResult<()> {
    if is_system(node) {
        Err(FsError::PermissionDenied(Denied::System))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(mode: u32, flags: NodeFlags) -> Node {
        Node {
            permissions: Permissions::from_mode(mode).unwrap(),
            flags,
            ..Node::default()
        }
    }

    #[test]
    fn test_each_bit_is_checked_independently() {
        let r = node(4, NodeFlags::empty());
        assert!(can_read(&r));
        assert!(!can_write(&r));
        assert!(!can_execute(&r));

        let w = node(2, NodeFlags::empty());
        assert!(!can_read(&w));
        assert!(can_write(&w));

        let x = node(1, NodeFlags::empty());
        assert!(can_execute(&x));
        assert!(!can_read(&x));
    }

    #[test]
    fn test_require_reports_blocking_bit() {
        let none = node(0, NodeFlags::empty());
        assert_eq!(
            require_read(&none),
            Err(FsError::PermissionDenied(Denied::Read))
        );
        assert_eq!(
            require_write(&none),
            Err(FsError::PermissionDenied(Denied::Write))
        );
        assert_eq!(
            require_execute(&none),
            Err(FsError::PermissionDenied(Denied::Execute))
        );
        assert!(require_read(&node(7, NodeFlags::empty())).is_ok());
    }

    #[test]
    fn test_system_flag_ignores_permission_bits() {
        let sys = node(7, NodeFlags::SYSTEM);
        assert!(is_system(&sys));
        assert!(!is_hidden(&sys));
        assert_eq!(
            require_unprotected(&sys),
            Err(FsError::PermissionDenied(Denied::System))
        );
        assert!(require_unprotected(&node(0, NodeFlags::HIDDEN)).is_ok());
    }
}
