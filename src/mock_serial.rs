//! Scripted transport double for handshake tests.

use crate::constants::ACK;
use crate::error::Result;
use crate::transport::Transport;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Transport whose drain and response behavior is scripted up front.
///
/// The waits return immediately with their scripted outcome, so tests never
/// sit through real timeout windows. Everything handed to `write_all` is
/// captured for inspection through a shared buffer.
pub struct MockTransport {
    /// Whether the drain wait reports that bytes were written
    drains: bool,
    /// Bytes reported still queued after the drain wait
    leftover: u32,
    /// Signal readiness even with nothing staged to read
    force_ready: bool,
    response: VecDeque<u8>,
    written: Arc<Mutex<Vec<u8>>>,
}

impl MockTransport {
    /// A well-behaved printer: drains writes and answers with ACK.
    pub fn acknowledging() -> Self {
        Self::responding(&[ACK])
    }

    /// Drains writes and answers with the given bytes, one read at a time.
    pub fn responding(bytes: &[u8]) -> Self {
        MockTransport {
            drains: true,
            leftover: 0,
            force_ready: false,
            response: bytes.iter().copied().collect(),
            written: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Nothing ever leaves the write queue.
    pub fn stalled() -> Self {
        MockTransport {
            drains: false,
            leftover: 0,
            force_ready: false,
            response: VecDeque::new(),
            written: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The drain wait returns, but `remaining` bytes stay queued.
    pub fn partial_write(remaining: u32) -> Self {
        MockTransport {
            drains: true,
            leftover: remaining,
            force_ready: false,
            response: VecDeque::new(),
            written: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Writes drain but the printer never responds.
    pub fn silent() -> Self {
        Self::responding(&[])
    }

    /// Readiness is signaled, yet the read returns no data.
    pub fn ready_but_empty() -> Self {
        MockTransport {
            drains: true,
            leftover: 0,
            force_ready: true,
            response: VecDeque::new(),
            written: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the capture buffer; stays valid after the mock is boxed.
    pub fn written(&self) -> Arc<Mutex<Vec<u8>>> {
        Arc::clone(&self.written)
    }
}

impl Transport for MockTransport {
    fn clear_input(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.written.lock().unwrap().extend_from_slice(bytes);
        Ok(())
    }

    fn wait_write_done(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(self.drains)
    }

    fn bytes_to_write(&mut self) -> Result<u32> {
        Ok(self.leftover)
    }

    fn wait_read_ready(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(self.force_ready || !self.response.is_empty())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let count = buf.len().min(self.response.len());
        for (slot, byte) in buf.iter_mut().zip(self.response.drain(..count)) {
            *slot = byte;
        }
        Ok(count)
    }
}
