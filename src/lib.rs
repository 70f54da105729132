//! # CIJ Protocol Library
//!
//! A Rust library for driving continuous-inkjet (CIJ) coding printers via serial
//! communication. Commands are written as hex text, framed with STX/ETX control
//! bytes, and pushed over the port one at a time; the printer answers every
//! frame with a single ACK byte.
//!
//! ## Features
//!
//! - Enumerate serial ports and open a printer only against a known port name
//! - Send framed commands with write-drain and acknowledgment handshakes
//! - Build label commands (field-addressed text encoding, buffer clear)
//! - Compose dated label lines the way the printed code carries them
//! - Optional observer hook for logging protocol traffic
//!
//! ## Example
//!
//! ```no_run
//! use cij_protocol::{clear_command, Printer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut printer = Printer::new();
//!     printer.open("/dev/ttyUSB0", 9600)?;
//!     printer.send(&clear_command())?;
//!     printer.close();
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod error;
pub mod message;
pub mod observer;
pub mod protocol;
pub mod registry;
pub mod transport;
pub mod types;

#[cfg(test)]
mod mock_serial;

pub use error::{CijError, Result};
pub use message::{clear_command, compose_label, decode_hex, encode_text, format_print_date, frame};
pub use observer::{LogObserver, PortObserver};
pub use protocol::Printer;
pub use registry::{available_ports, port_names};
pub use types::*;
