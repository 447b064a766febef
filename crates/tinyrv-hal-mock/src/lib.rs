//! Mock HAL implementation for testing the tinyrv kernel
//!
//! This provides a mock implementation of the HAL trait that can be used
//! for testing the shell and kernel loop without a UART or a terminal.

#![no_std]
extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use tinyrv_hal::{HalError, HAL};

/// Mock HAL for unit testing
///
/// Provides scripted console input, captured console output, a captured
/// debug log and a shutdown flag.
pub struct MockHal {
    /// Bytes waiting to be read by the kernel
    input: RefCell<VecDeque<u8>>,
    /// Everything the kernel wrote to the console
    output: RefCell<Vec<u8>>,
    /// Captured debug messages
    debug_log: RefCell<Vec<String>>,
    /// Set once the kernel requested shutdown
    shutdown_requested: Cell<bool>,
    /// Pretend the console echoes typed bytes itself
    local_echo: Cell<bool>,
}

impl MockHal {
    /// Create a new mock HAL with no pending input
    pub fn new() -> Self {
        Self {
            input: RefCell::new(VecDeque::new()),
            output: RefCell::new(Vec::new()),
            debug_log: RefCell::new(Vec::new()),
            shutdown_requested: Cell::new(false),
            local_echo: Cell::new(false),
        }
    }

    /// Create a mock HAL whose console will deliver `input`
    pub fn with_input(input: &str) -> Self {
        let hal = Self::new();
        hal.push_input(input);
        hal
    }

    /// Queue more bytes on the console input
    pub fn push_input(&self, input: &str) {
        self.input.borrow_mut().extend(input.bytes());
    }

    /// Queue raw bytes (control characters) on the console input
    pub fn push_input_bytes(&self, bytes: &[u8]) {
        self.input.borrow_mut().extend(bytes.iter().copied());
    }

    /// Number of input bytes not yet consumed
    pub fn pending_input(&self) -> usize {
        self.input.borrow().len()
    }

    /// Console output so far, lossily decoded
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output.borrow()).into_owned()
    }

    /// Clear captured console output
    pub fn clear_output(&self) {
        self.output.borrow_mut().clear();
    }

    /// Check if the console output contains a substring
    pub fn output_contains(&self, substr: &str) -> bool {
        self.output().contains(substr)
    }

    /// Get all captured debug messages
    pub fn get_debug_log(&self) -> Vec<String> {
        self.debug_log.borrow().clone()
    }

    /// Clear the debug log
    pub fn clear_debug_log(&self) {
        self.debug_log.borrow_mut().clear();
    }

    /// Check if a specific message was logged
    pub fn has_log_containing(&self, substr: &str) -> bool {
        self.debug_log
            .borrow()
            .iter()
            .any(|msg| msg.contains(substr))
    }

    /// Get the number of debug messages
    pub fn debug_log_count(&self) -> usize {
        self.debug_log.borrow().len()
    }

    /// Make the console behave like a cooked host terminal
    pub fn set_local_echo(&self, on: bool) {
        self.local_echo.set(on);
    }

    /// Whether the kernel asked the platform to power off
    pub fn shutdown_requested(&self) -> bool {
        self.shutdown_requested.get()
    }
}

impl Default for MockHal {
    fn default() -> Self {
        Self::new()
    }
}

impl HAL for MockHal {
    fn write_byte(&self, byte: u8) {
        self.output.borrow_mut().push(byte);
    }

    fn read_byte(&self) -> Option<u8> {
        self.input.borrow_mut().pop_front()
    }

    fn echoes_input(&self) -> bool {
        self.local_echo.get()
    }

    fn debug_write(&self, msg: &str) {
        self.debug_log.borrow_mut().push(String::from(msg));
    }

    fn shutdown(&self) -> Result<(), HalError> {
        self.shutdown_requested.set(true);
        self.debug_log
            .borrow_mut()
            .push(String::from("[mock-hal] Shutdown requested"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_hal_debug_log() {
        let hal = MockHal::new();

        hal.debug_write("Hello");
        hal.debug_write("World");

        let log = hal.get_debug_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], "Hello");
        assert_eq!(log[1], "World");

        assert!(hal.has_log_containing("Hello"));
        assert!(!hal.has_log_containing("Foo"));
    }

    #[test]
    fn test_mock_hal_scripted_input() {
        let hal = MockHal::with_input("ls\n");
        assert_eq!(hal.pending_input(), 3);
        assert_eq!(hal.read_byte(), Some(b'l'));
        assert_eq!(hal.read_byte(), Some(b's'));
        assert_eq!(hal.read_byte(), Some(b'\n'));
        assert_eq!(hal.read_byte(), None);
    }

    #[test]
    fn test_mock_hal_captures_output() {
        let hal = MockHal::new();
        hal.write_str("hello ");
        hal.write_byte(b'!');
        assert_eq!(hal.output(), "hello !");
        assert!(hal.output_contains("llo"));

        hal.clear_output();
        assert_eq!(hal.output(), "");
    }

    #[test]
    fn test_mock_hal_local_echo() {
        let hal = MockHal::new();
        assert!(!hal.echoes_input());
        hal.set_local_echo(true);
        assert!(hal.echoes_input());
    }

    #[test]
    fn test_mock_hal_shutdown() {
        let hal = MockHal::new();
        assert!(!hal.shutdown_requested());
        hal.shutdown().unwrap();
        assert!(hal.shutdown_requested());
        assert_eq!(hal.debug_log_count(), 1);
    }
}
