//! Print Label Example
//!
//! This example composes a dated product label and pushes it to the printer
//! as a clear-then-write batch. It includes:
//! - Interactive serial port selection (or command-line argument)
//! - Label composition with the printed date token
//! - Field encoding of the composed label
//! - Batch sending through a port configuration
//!
//! Usage:
//!   cargo run --example print_label              # Interactive mode
//!   cargo run --example print_label -- COM3      # Specify port
//!   cargo run --example print_label -- /dev/ttyUSB0
//!
//! Set RUST_LOG environment variable to control logging:
//!   RUST_LOG=debug cargo run --example print_label
//!   RUST_LOG=info cargo run --example print_label

use chrono::Local;
use cij_protocol::{
    available_ports, clear_command, compose_label, encode_text, PortConfig, Printer, Result,
};
use inquire::{Select, Text};
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

    let text = Text::new("Label text (fields separated by '|'):")
        .with_default("ABC | 123456 | LOT42")
        .prompt()
        .map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("Input cancelled: {}", e))
        })?;

    let label = compose_label(&text, Local::now().date_naive());
    info!("Composed label: {}", label);

    let config = PortConfig::new(&port_name, 9600);
    let clear = clear_command();
    let message = encode_text(&label);
    let commands = [clear.as_str(), message.as_str()];

    info!("=== Printing Label on {} ===", config.port);
    let outcome = Printer::send_batch(&config, &commands)?;
    info!("✓ Batch finished: {:?}", outcome);

    Ok(())
}
