//! TinyRV in-memory filesystem
//!
//! A bounded, hierarchical filesystem for a single-threaded kernel with no
//! storage device:
//!
//! - **Arena**: fixed pool of nodes, bump-allocated and never reclaimed
//! - **Tree**: parent/child handle links, the root and the cwd cursor
//! - **Resolve**: the one path walker every operation goes through
//! - **Service**: permission predicates and the System/Hidden protection rules
//! - **Filesystem**: mkdir, touch, rm, rmdir, ls, cd, pwd, write, cat, chmod, stat
//! - **Bootstrap**: the protected system area seeded at construction
//!
//! # Design Principles
//!
//! 1. **Fixed capacity**: every limit comes from `FsConfig`; running out is an
//!    error the caller reports, never a crash
//! 2. **Explicit context**: no globals; the kernel owns a `Filesystem` value
//! 3. **Pure**: no I/O and no logging; the shell decides what to print
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Filesystem                            │
//! │   mkdir/touch/rm/rmdir  ls/cd/pwd  write/cat  chmod/stat      │
//! └───────────────┬──────────────────────────────┬────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐  ┌───────────────────────────┐
//! │          Resolver             │  │     Permission layer      │
//! │  split_parent + walk path     │  │  can_read/can_write/...   │
//! └───────────────┬───────────────┘  └───────────────────────────┘
//!                 ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │             Tree (root, cwd) over NodeArena                   │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![no_std]
extern crate alloc;

pub mod arena;
pub mod bootstrap;
pub mod config;
pub mod core;
pub mod filesystem;
pub mod resolve;
pub mod service;
pub mod tree;

// Convenient re-exports at crate root
pub use arena::{ArenaUsage, NodeArena};
pub use bootstrap::{BOOTSTRAP_NODES, FSINFO_PATH, SYSTEM_DIRS};
pub use config::FsConfig;
pub use crate::core::{split_parent, truncate_str};
pub use crate::core::{
    Denied, DirEntry, FsError, FsResult, Node, NodeFlags, NodeId, NodeKind, NodeStat, Permissions,
};
pub use filesystem::Filesystem;
pub use service::{can_execute, can_read, can_write, is_hidden, is_system};
pub use tree::Tree;
