//! Session reporting hooks.
//!
//! Logging is injected rather than wired into the control flow: a session
//! reports through an observer when one is attached and stays silent
//! otherwise.

use log::{debug, warn};

/// Receives session lifecycle and traffic events.
///
/// Every method has a no-op default; implementors pick what they care about.
pub trait PortObserver: Send {
    /// Port opened at the given baud rate.
    fn on_open(&self, _port: &str, _baud_rate: u32) {}

    /// Framed bytes handed to the transport.
    fn on_tx(&self, _bytes: &[u8]) {}

    /// Acknowledgment byte received.
    fn on_ack(&self, _byte: u8) {}

    /// An open or send failed; `detail` is the rendered error.
    fn on_error(&self, _detail: &str) {}

    /// Port closed.
    fn on_close(&self, _port: &str) {}
}

/// Observer that forwards events to the `log` facade.
pub struct LogObserver;

impl PortObserver for LogObserver {
    fn on_open(&self, port: &str, baud_rate: u32) {
        debug!("opened {} at {} baud", port, baud_rate);
    }

    fn on_tx(&self, bytes: &[u8]) {
        let rendered: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
        debug!("TX: {}", rendered.join(" "));
    }

    fn on_ack(&self, byte: u8) {
        debug!("RX: {:02X}", byte);
    }

    fn on_error(&self, detail: &str) {
        warn!("{}", detail);
    }

    fn on_close(&self, port: &str) {
        debug!("closed {}", port);
    }
}
