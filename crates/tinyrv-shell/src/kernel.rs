//! Kernel main loop.
//!
//! Boots the filesystem, then reads, dispatches and repeats until
//! `shutdown` or until the console closes.

use alloc::format;

use tinyrv_fs::{Filesystem, FsConfig, FsError};
use tinyrv_hal::HAL;

use crate::line::LineReader;
use crate::shell::{Flow, Shell};

/// Prompt printed before each line
pub const PROMPT: &str = "> ";

/// Printed once at boot
pub const BANNER: &str = "tinyrv kernel: ready!\nType 'help' for a list of commands.\n";

/// The kernel, generic over HAL implementation.
pub struct Kernel<H: HAL> {
    shell: Shell<H>,
    reader: LineReader,
}

impl<H: HAL> Kernel<H> {
    /// Build the filesystem and its bootstrap tree.
    ///
    /// Fails only if `config` cannot hold the bootstrap tree.
    pub fn boot(hal: H, config: FsConfig) -> Result<Self, FsError> {
        hal.debug_write(&format!(
            "[kernel] booting: {} nodes, {} children per directory",
            config.max_nodes, config.max_children
        ));
        let fs = match Filesystem::new(config) {
            Ok(fs) => fs,
            Err(e) => {
                hal.debug_write(&format!("[kernel] filesystem bootstrap failed: {}", e));
                return Err(e);
            }
        };
        let usage = fs.usage();
        hal.debug_write(&format!(
            "[kernel] filesystem ready ({}/{} nodes)",
            usage.used, usage.capacity
        ));

        Ok(Self {
            shell: Shell::new(hal, fs),
            reader: LineReader::default(),
        })
    }

    /// Get a reference to the HAL
    pub fn hal(&self) -> &H {
        self.shell.hal()
    }

    pub fn shell(&self) -> &Shell<H> {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut Shell<H> {
        &mut self.shell
    }

    /// Run until `shutdown` or end of input, then power off.
    pub fn run(&mut self) {
        self.shell.print(BANNER);

        loop {
            self.shell.print(PROMPT);
            let Some(line) = self.reader.read_line(self.shell.hal()) else {
                self.hal().debug_write("[kernel] console input closed");
                break;
            };
            if self.shell.execute(&line) == Flow::Shutdown {
                break;
            }
        }

        self.hal().debug_write("[kernel] shutting down");
        if let Err(e) = self.hal().shutdown() {
            self.hal()
                .debug_write(&format!("[kernel] shutdown failed: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyrv_hal::TestHal;

    #[test]
    fn test_boot_with_default_config() {
        let kernel = Kernel::boot(TestHal::new(), FsConfig::default()).unwrap();
        assert_eq!(kernel.shell().fs().pwd(), "/");
    }

    #[test]
    fn test_boot_rejects_tiny_arena() {
        let result = Kernel::boot(TestHal::new(), FsConfig::with_max_nodes(2));
        assert_eq!(result.err(), Some(FsError::Exhausted));
    }

    #[test]
    fn test_run_returns_when_input_closes() {
        let mut kernel = Kernel::boot(TestHal::new(), FsConfig::default()).unwrap();
        kernel.run();
    }
}
