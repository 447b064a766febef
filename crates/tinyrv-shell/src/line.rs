//! Console line reader.
//!
//! Collects bytes from the HAL until Enter, with backspace editing and a
//! fixed buffer. Input past the buffer is dropped, not wrapped.

use alloc::string::String;
use alloc::vec::Vec;
use tinyrv_hal::HAL;

/// Line buffer size in bytes, one of which is reserved
pub const LINE_CAPACITY: usize = 100;

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7f;

/// Reads one edited line at a time from the console.
pub struct LineReader {
    buf: Vec<u8>,
    limit: usize,
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new(LINE_CAPACITY)
    }
}

impl LineReader {
    /// Reader for a buffer of `capacity` bytes; `capacity - 1` are usable.
    pub fn new(capacity: usize) -> Self {
        let limit = capacity.saturating_sub(1);
        Self {
            buf: Vec::with_capacity(limit),
            limit,
        }
    }

    /// Bytes a line can hold.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Read until `\r` or `\n`.
    ///
    /// Returns `None` once the console is closed and nothing was typed. A
    /// line cut short by a closed console is returned as is.
    pub fn read_line<H: HAL + ?Sized>(&mut self, hal: &H) -> Option<String> {
        self.buf.clear();
        let echo = !hal.echoes_input();

        loop {
            let Some(byte) = hal.read_byte() else {
                if self.buf.is_empty() {
                    return None;
                }
                break;
            };

            match byte {
                b'\r' | b'\n' => {
                    if echo {
                        hal.write_str("\r\n");
                    }
                    break;
                }
                BACKSPACE | DELETE => {
                    if self.erase_char() && echo {
                        hal.write_str("\x08 \x08");
                    }
                }
                // Other control bytes (escape sequences, tabs) are ignored
                b if b < 0x20 => {}
                b => {
                    if self.buf.len() < self.limit {
                        self.buf.push(b);
                        if echo {
                            hal.write_byte(b);
                        }
                    }
                }
            }
        }

        Some(String::from_utf8_lossy(&self.buf).into_owned())
    }

    /// Drop the last character, including every byte of a multi-byte one.
    fn erase_char(&mut self) -> bool {
        let Some(mut last) = self.buf.pop() else {
            return false;
        };
        // Continuation bytes are 0b10xx_xxxx; keep popping to the lead byte
        while last & 0xc0 == 0x80 {
            match self.buf.pop() {
                Some(b) => last = b,
                None => break,
            }
        }
        true
    }
}
