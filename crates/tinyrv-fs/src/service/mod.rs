//! Permission and protection checks

mod permissions;

pub use permissions::{
    can_execute, can_read, can_write, is_hidden, is_system, require_execute, require_read,
    require_unprotected, require_write,
};
