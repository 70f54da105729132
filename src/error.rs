//! Error types for printer protocol operations.

use thiserror::Error;

/// Result type alias for printer operations.
pub type Result<T> = std::result::Result<T, CijError>;

/// Error types for CIJ printer communication.
///
/// Every variant is recoverable by the caller; the crate never retries on
/// its own. Handshake failures keep the "send failed" phrasing in their
/// messages so a rendered error reads as one condition with a cause.
#[derive(Error, Debug)]
pub enum CijError {
    /// Requested port absent from the host enumeration
    #[error("serial port {port} not found")]
    DeviceNotFound {
        /// Port name that was requested
        port: String,
    },

    /// Platform refused to open the port
    #[error("failed to open serial port: {0}")]
    OpenFailed(#[source] serialport::Error),

    /// open called while the session already owns an open device
    #[error("serial port already open")]
    AlreadyOpen,

    /// send called on a session that is not open
    #[error("serial port not open")]
    NotOpen,

    /// Malformed hex in the command text
    #[error("send failed: bad hex command text: {0}")]
    Encoding(String),

    /// Nothing left the write queue within the drain window
    #[error("send failed: write timed out")]
    WriteTimeout,

    /// The drain wait returned with bytes still queued
    #[error("send failed: {remaining} bytes left unwritten")]
    IncompleteWrite {
        /// Bytes still queued for transmission
        remaining: u32,
    },

    /// No response arrived within the read window
    #[error("send failed: timed out waiting for response")]
    ReadTimeout,

    /// Readiness was signaled but the read returned no data
    #[error("send failed: expected 06H, got no response")]
    EmptyResponse,

    /// The response byte was not the ACK sentinel
    #[error("send failed: expected 06H, got {byte:02X}H")]
    UnexpectedResponse {
        /// Byte actually received
        byte: u8,
    },

    /// Serial port layer error
    #[error("serial port error: {0}")]
    SerialPort(#[from] serialport::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
