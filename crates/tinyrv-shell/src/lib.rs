//! Shell and kernel loop for the tinyrv kernel
//!
//! Everything between the console and the filesystem:
//!
//! - **Line**: byte-at-a-time line editing over the HAL console
//! - **Command**: parsing a line into a typed command
//! - **Shell**: dispatch to filesystem operations, script runner, help
//! - **Kernel**: boot, prompt loop, shutdown
//!
//! Console output is what the user sees. Every mutating filesystem call,
//! script start/stop, boot and shutdown also goes to the HAL debug log,
//! tagged `[fs]`, `[script]`, `[shell]` or `[kernel]`.

#![no_std]
extern crate alloc;

pub mod command;
pub mod error;
pub mod kernel;
pub mod line;
pub mod shell;

pub use command::{Command, COMMANDS};
pub use error::ShellError;
pub use kernel::{Kernel, BANNER, PROMPT};
pub use line::{LineReader, LINE_CAPACITY};
pub use shell::{Flow, Shell, MAX_SCRIPT_DEPTH};
