use crate::constants::*;
use crate::error::{CijError, Result};
use crate::message;
use crate::observer::PortObserver;
use crate::registry;
use crate::transport::{SerialTransport, Transport};
use crate::types::{BatchOutcome, PortConfig};
use std::time::Duration;

/// Main printer protocol interface.
///
/// A session is either closed or open; there is no state in between. It is
/// created closed, opened against an enumerated port name, and closed either
/// explicitly or on drop, so the device handle is released on every exit
/// path.
pub struct Printer {
    handle: Option<OpenHandle>,
    observer: Option<Box<dyn PortObserver>>,
}

struct OpenHandle {
    transport: Box<dyn Transport>,
    port: String,
}

impl Printer {
    /// A closed session with no observer attached.
    pub fn new() -> Self {
        Printer {
            handle: None,
            observer: None,
        }
    }

    /// A closed session that reports through `observer`.
    pub fn with_observer(observer: Box<dyn PortObserver>) -> Self {
        Printer {
            handle: None,
            observer: Some(observer),
        }
    }

    /// Attach or replace the session observer.
    pub fn set_observer(&mut self, observer: Box<dyn PortObserver>) {
        self.observer = Some(observer);
    }

    /// Names of the serial ports available on the host.
    pub fn list_ports() -> Result<Vec<String>> {
        registry::port_names()
    }

    /// Open `port` for read and write at `baud_rate`.
    ///
    /// The name must be present in the current host enumeration; opening a
    /// session that is already open is a caller bug and is rejected.
    pub fn open(&mut self, port: &str, baud_rate: u32) -> Result<()> {
        let result = self.try_open(port, baud_rate);
        if let Err(err) = &result {
            if let Some(observer) = &self.observer {
                observer.on_error(&err.to_string());
            }
        }
        result
    }

    fn try_open(&mut self, port: &str, baud_rate: u32) -> Result<()> {
        if self.handle.is_some() {
            return Err(CijError::AlreadyOpen);
        }
        let known = registry::port_names()?;
        if !known.iter().any(|name| name == port) {
            return Err(CijError::DeviceNotFound {
                port: port.to_string(),
            });
        }
        let device = serialport::new(port, baud_rate)
            .timeout(Duration::from_millis(PORT_TIMEOUT_MS))
            .open()
            .map_err(CijError::OpenFailed)?;
        self.handle = Some(OpenHandle {
            transport: Box::new(SerialTransport::new(device)),
            port: port.to_string(),
        });
        if let Some(observer) = &self.observer {
            observer.on_open(port, baud_rate);
        }
        Ok(())
    }

    /// Send hex command text and wait for the printer's acknowledgment.
    ///
    /// The text decodes to the payload, the frame adds STX/ETX, and the call
    /// blocks until the single ACK byte arrives or a timeout expires; worst
    /// case is the write-drain window plus the response window. One attempt,
    /// no retry; there is no partial success, and a failure leaves the
    /// session open for the caller to decide what to do with it.
    pub fn send(&mut self, hex_text: &str) -> Result<()> {
        let result = self.try_send(hex_text);
        if let Err(err) = &result {
            if let Some(observer) = &self.observer {
                observer.on_error(&err.to_string());
            }
        }
        result
    }

    fn try_send(&mut self, hex_text: &str) -> Result<()> {
        let handle = self.handle.as_mut().ok_or(CijError::NotOpen)?;
        let payload = message::decode_hex(hex_text)?;
        let framed = message::frame(&payload);
        handle.transport.clear_input()?;
        if let Some(observer) = &self.observer {
            observer.on_tx(&framed);
        }
        handle.transport.write_all(&framed)?;
        let ack = Self::wait_for_acknowledgment(handle.transport.as_mut())?;
        if let Some(observer) = &self.observer {
            observer.on_ack(ack);
        }
        Ok(())
    }

    /// The drain wait, response wait, and ACK validation that complete every
    /// send.
    fn wait_for_acknowledgment(transport: &mut dyn Transport) -> Result<u8> {
        if !transport.wait_write_done(Duration::from_millis(WRITE_TIMEOUT_MS))? {
            return Err(CijError::WriteTimeout);
        }
        let remaining = transport.bytes_to_write()?;
        if remaining > 0 {
            return Err(CijError::IncompleteWrite { remaining });
        }
        if !transport.wait_read_ready(Duration::from_millis(READ_TIMEOUT_MS))? {
            return Err(CijError::ReadTimeout);
        }
        let mut response = [0u8; 1];
        let read = transport.read(&mut response)?;
        if read == 0 {
            return Err(CijError::EmptyResponse);
        }
        if response[0] != ACK {
            return Err(CijError::UnexpectedResponse { byte: response[0] });
        }
        Ok(response[0])
    }

    /// Close the device if open. Safe to call any number of times.
    pub fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(observer) = &self.observer {
                observer.on_close(&handle.port);
            }
        }
    }

    /// Whether the session currently owns an open device.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Name of the open device, if any.
    pub fn port_name(&self) -> Option<&str> {
        self.handle.as_ref().map(|handle| handle.port.as_str())
    }

    /// Open the configured port, send every command in order, and close the
    /// port again on every path.
    ///
    /// A disabled config is skipped without touching the device. The first
    /// failure wins; the port is still closed before it propagates.
    pub fn send_batch(config: &PortConfig, commands: &[&str]) -> Result<BatchOutcome> {
        if !config.enabled {
            return Ok(BatchOutcome::Skipped);
        }
        let mut printer = Printer::new();
        printer.open(&config.port, config.baud_rate)?;
        Self::send_all(&mut printer, commands)
    }

    fn send_all(printer: &mut Printer, commands: &[&str]) -> Result<BatchOutcome> {
        let sent = commands.iter().try_for_each(|command| printer.send(command));
        printer.close();
        sent.map(|_| BatchOutcome::Completed)
    }

    #[cfg(test)]
    pub(crate) fn with_transport(transport: Box<dyn Transport>) -> Self {
        Printer {
            handle: Some(OpenHandle {
                transport,
                port: "mock".to_string(),
            }),
            observer: None,
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Printer {
    fn drop(&mut self) {
        self.close();
    }
}
