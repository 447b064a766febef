//! Hardware Abstraction Layer trait for the tinyrv kernel
//!
//! This crate defines the HAL trait that lets the kernel shell run on
//! different platforms (QEMU UART, host terminal, test harness) by
//! abstracting the few hardware services it needs.
//!
//! # Platform Implementations
//!
//! - **QEMU virt**: 16550 UART at `0x1000_0000`, SBI shutdown
//! - **Host**: stdin/stdout (see `tools/tinyrv-host`)
//! - **Tests**: `TestHal` here, `MockHal` in `tinyrv-hal-mock`

#![no_std]

use core::fmt;

/// Hardware Abstraction Layer trait
///
/// Implementations provide platform-specific functionality for:
/// - Byte console (serial transmit/receive)
/// - Debug output
/// - Platform shutdown
///
/// The kernel is single-threaded: `read_byte` is the only blocking point and
/// it blocks the whole system until a byte arrives.
pub trait HAL {
    // === Console ===

    /// Transmit one byte to the console
    fn write_byte(&self, byte: u8);

    /// Receive one byte from the console (blocking)
    ///
    /// # Returns
    /// * `Some(byte)` - The next input byte
    /// * `None` - The input source is closed (host EOF, exhausted test script)
    fn read_byte(&self) -> Option<u8>;

    /// Check if the console already displays typed bytes itself
    ///
    /// A raw UART does not, so the line reader echoes. A host terminal in
    /// cooked mode does, and echoing again would double every character.
    fn echoes_input(&self) -> bool {
        false
    }

    /// Transmit a string to the console
    fn write_str(&self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }

    // === Debug ===

    /// Write a debug message to the platform's log
    ///
    /// On QEMU this shares the UART; on the host it goes to stderr.
    fn debug_write(&self, msg: &str);

    // === Power ===

    /// Request platform shutdown
    ///
    /// # Returns
    /// * `Ok(())` - Shutdown accepted (on real hardware this never returns)
    /// * `Err(HalError::NotSupported)` - Platform cannot power off
    fn shutdown(&self) -> Result<(), HalError> {
        Err(HalError::NotSupported)
    }
}

/// HAL errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HalError {
    /// Operation not supported on this platform
    NotSupported,
    /// I/O error
    IoError,
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalError::NotSupported => write!(f, "operation not supported"),
            HalError::IoError => write!(f, "i/o error"),
        }
    }
}

/// `fmt::Write` adapter over a HAL console
///
/// Lets callers use `write!` against the console without allocating.
pub struct ConsoleWriter<'a, H: HAL + ?Sized> {
    hal: &'a H,
}

impl<'a, H: HAL + ?Sized> ConsoleWriter<'a, H> {
    pub fn new(hal: &'a H) -> Self {
        Self { hal }
    }
}

impl<H: HAL + ?Sized> fmt::Write for ConsoleWriter<'_, H> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.hal.write_str(s);
        Ok(())
    }
}

/// A minimal test HAL for unit testing
///
/// Swallows all output and never produces input, suitable for unit tests
/// that don't need console interaction.
#[derive(Default)]
pub struct TestHal;

impl TestHal {
    pub fn new() -> Self {
        Self
    }
}

impl HAL for TestHal {
    fn write_byte(&self, _byte: u8) {}

    fn read_byte(&self) -> Option<u8> {
        None
    }

    fn debug_write(&self, _msg: &str) {
        // No-op for tests
    }
}
