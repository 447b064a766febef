//! Error types for the filesystem layer.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Result alias used across the filesystem crate.
pub type FsResult<T> = Result<T, FsError>;

/// The permission bit or protection flag that blocked an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Denied {
    /// Read bit missing
    Read,
    /// Write bit missing
    Write,
    /// Execute bit missing
    Execute,
    /// Target carries the System flag
    System,
}

impl fmt::Display for Denied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denied::Read => write!(f, "no read permission"),
            Denied::Write => write!(f, "no write permission"),
            Denied::Execute => write!(f, "no execute permission"),
            Denied::System => write!(f, "system entry is protected"),
        }
    }
}

/// Errors from filesystem operations.
///
/// Every variant is recoverable: the caller reports it and keeps accepting
/// commands. `Exhausted` and `DirectoryFull` are permanent for the life of
/// the filesystem because slots are never reclaimed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsError {
    /// Path component or target missing
    NotFound,

    /// A file was used where a directory is required
    NotADirectory,

    /// Target exists but is the wrong kind for this operation
    WrongType,

    /// Name already present in the parent directory
    AlreadyExists,

    /// Parent directory reached its child limit
    DirectoryFull,

    /// Node arena reached its capacity
    Exhausted,

    /// Blocked by a permission bit or the System flag
    PermissionDenied(Denied),

    /// rmdir on a directory that still has children
    NotEmpty,

    /// chmod value outside 0-7
    InvalidValue(u32),

    /// Empty name, or `.`/`..` used as a new entry name
    InvalidName,

    /// Bootstrap metadata could not be encoded
    Serialization,
}

impl FsError {
    /// Check if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound)
    }

    /// Check if this is a permission error.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, FsError::PermissionDenied(_))
    }

    /// Check if this error can never clear because storage is not reclaimed.
    pub fn is_capacity(&self) -> bool {
        matches!(self, FsError::Exhausted | FsError::DirectoryFull)
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::NotFound => write!(f, "no such file or directory"),
            FsError::NotADirectory => write!(f, "not a directory"),
            FsError::WrongType => write!(f, "wrong node type for this operation"),
            FsError::AlreadyExists => write!(f, "name already exists"),
            FsError::DirectoryFull => write!(f, "directory full"),
            FsError::Exhausted => write!(f, "node limit reached"),
            FsError::PermissionDenied(why) => write!(f, "permission denied ({})", why),
            FsError::NotEmpty => write!(f, "directory not empty"),
            FsError::InvalidValue(v) => write!(f, "invalid permission value {} (expected 0-7)", v),
            FsError::InvalidName => write!(f, "invalid name"),
            FsError::Serialization => write!(f, "metadata encoding failed"),
        }
    }
}
