//! Protocol constants for CIJ printer communication.
//!
//! This module defines all the constants used on the printer's serial link,
//! including frame markers, the acknowledgment sentinel, message-field
//! addressing bytes, and timing parameters.

/// Start-of-text marker prepended to every framed command
pub const STX: u8 = 0x02;

/// End-of-text marker appended to every framed command
pub const ETX: u8 = 0x03;

/// Acknowledgment byte the printer returns after accepting a frame
pub const ACK: u8 = 0x06;

/// Data-link-escape byte that introduces a message-field selector
pub const DLE: u8 = 0x10;

/// Selector for the first message field
pub const FIRST_FIELD: u8 = 0x31;

/// Selector for the last message field covered by the clear command
pub const LAST_FIELD: u8 = 0x4F;

/// Characters a field holds before the text encoder advances to the next one
pub const FIELD_WIDTH: usize = 10;

/// Time allowed for queued bytes to drain to the wire, in milliseconds
pub const WRITE_TIMEOUT_MS: u64 = 1000;

/// Time allowed for the acknowledgment byte to arrive, in milliseconds
pub const READ_TIMEOUT_MS: u64 = 1000;

/// Interval between queue polls while waiting on the port, in milliseconds
pub const POLL_INTERVAL_MS: u64 = 5;

/// Read timeout configured on the device handle at open, in milliseconds.
/// Reads happen only after readiness is confirmed, so this is a backstop.
pub const PORT_TIMEOUT_MS: u64 = 100;
