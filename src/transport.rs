//! Byte-level transport behind a printer session.
//!
//! The acknowledgment handshake performs a handful of primitive operations
//! on the device handle. They are lifted into a trait so the session logic
//! runs unchanged against the real port or a scripted test double.

use crate::constants::POLL_INTERVAL_MS;
use crate::error::Result;
use serialport::SerialPort;
use std::io::{Read, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Primitive operations a session performs on its device.
pub trait Transport: Send {
    /// Discard anything already buffered on the receive side.
    fn clear_input(&mut self) -> Result<()>;

    /// Queue bytes for transmission.
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;

    /// Block until queued bytes start draining to the wire or `timeout`
    /// elapses. `false` means nothing left the queue within the window.
    fn wait_write_done(&mut self, timeout: Duration) -> Result<bool>;

    /// Bytes still queued for transmission.
    fn bytes_to_write(&mut self) -> Result<u32>;

    /// Block until at least one byte is readable or `timeout` elapses.
    fn wait_read_ready(&mut self, timeout: Duration) -> Result<bool>;

    /// Read up to `buf.len()` of the bytes already available.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

/// Production transport over a host serial port.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    pub fn new(port: Box<dyn SerialPort>) -> Self {
        SerialTransport { port }
    }
}

impl Transport for SerialTransport {
    fn clear_input(&mut self) -> Result<()> {
        self.port.clear(serialport::ClearBuffer::Input)?;
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.port.write_all(bytes)?;
        Ok(())
    }

    fn wait_write_done(&mut self, timeout: Duration) -> Result<bool> {
        let initial = self.port.bytes_to_write()?;
        if initial == 0 {
            return Ok(true);
        }
        let deadline = Instant::now() + timeout;
        loop {
            let queued = self.port.bytes_to_write()?;
            if queued == 0 {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                // Partial progress still counts as written; the caller's
                // queue check reports the leftovers.
                return Ok(queued < initial);
            }
            thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
        }
    }

    fn bytes_to_write(&mut self) -> Result<u32> {
        Ok(self.port.bytes_to_write()?)
    }

    fn wait_read_ready(&mut self, timeout: Duration) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.port.bytes_to_read()? > 0 {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.port.read(buf)?)
    }
}
