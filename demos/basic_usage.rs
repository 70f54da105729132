//! Basic Usage Example
//!
//! This example demonstrates the core functionality of the CIJ protocol library:
//! - Listing and selecting serial ports
//! - Opening a printer session
//! - Clearing the printer's message buffer
//! - Encoding and sending label text
//! - Debug output for protocol analysis
//!
//! Usage:
//!   cargo run --example basic_usage                  # Interactive mode
//!   cargo run --example basic_usage -- COM3          # Specify port
//!   cargo run --example basic_usage -- /dev/ttyUSB0
//!
//! Set RUST_LOG environment variable to control logging:
//!   RUST_LOG=debug cargo run --example basic_usage
//!   RUST_LOG=info cargo run --example basic_usage

use cij_protocol::{available_ports, clear_command, encode_text, LogObserver, Printer, Result};
use inquire::Select;
use log::info;

/// Interactive serial port selection using inquire
fn select_port() -> Result<String> {
    let ports = available_ports()?;

    if ports.is_empty() {
        eprintln!("No serial ports found!");
        std::process::exit(1);
    }

    let port_names: Vec<String> = ports
        .iter()
        .map(|p| format!("{} - {:?}", p.port_name, p.port_type))
        .collect();

    let selection = Select::new("Select a serial port:", port_names)
        .prompt()
        .map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Selection cancelled: {}", e),
            )
        })?;

    // Extract just the port name (before " - ")
    let port_name = selection.split(" - ").next().unwrap().to_string();
    Ok(port_name)
}

fn main() -> Result<()> {
    // Initialize logger with default info level if RUST_LOG is not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Get port name from command line argument or interactive selection
    let port_name = std::env::args()
        .nth(1)
        .map(Ok)
        .unwrap_or_else(|| select_port())?;

    info!("Connecting to printer on {}...", port_name);
    let mut printer = Printer::with_observer(Box::new(LogObserver));
    printer.open(&port_name, 9600)?;
    info!("✓ Printer session open");

    // Wipe whatever message is loaded before writing a new one
    info!("=== Clearing Printer Buffer ===");
    printer.send(&clear_command())?;
    info!("✓ Printer acknowledged the clear command");

    info!("=== Writing a Test Message ===");
    printer.send(&encode_text("HELLO|WORLD"))?;
    info!("✓ Printer acknowledged the message");

    printer.close();
    info!("=== Basic Usage Complete ===");

    Ok(())
}
