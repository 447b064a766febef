//! Core filesystem types and utilities

mod error;
mod path;
mod types;

pub use error::{Denied, FsError, FsResult};
pub use path::{
    components, content_prefix, is_absolute, is_special, render_absolute, split_parent,
    truncate_str, SEPARATOR,
};
pub use types::{DirEntry, Node, NodeFlags, NodeId, NodeKind, NodeStat, Permissions};
