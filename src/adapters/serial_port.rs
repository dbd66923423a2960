//! Serial port adapter using the `serialport` crate
//!
//! Implements `SerialOpener` and `SerialConnection`.
//! `SerialPortOpener` has no instance data; it only knows how to open ports.

use std::io::{Read, Write};
use std::time::Duration;

use crate::domain::{RigError, RigResult};
use crate::ports::{SerialConnection, SerialOpener};

/// Read/write timeout on an open port
const PORT_TIMEOUT_MS: u64 = 100;

/// Zero-sized opener for real serial ports.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialPortOpener;

impl SerialOpener for SerialPortOpener {
    fn open(&self, port: &str, baud_rate: u32) -> RigResult<Box<dyn SerialConnection>> {
        let serial = serialport::new(port, baud_rate)
            .timeout(Duration::from_millis(PORT_TIMEOUT_MS))
            .open()
            .map_err(|e| RigError::PortOpen(format!("Failed to open {port}: {e}")))?;

        log::debug!("Opened {port} at {baud_rate} baud");
        Ok(Box::new(SerialPortConnection { port: Some(serial) }))
    }
}

/// An open serial port connection wrapping the `serialport` crate.
/// The port is dropped, and so released by the OS, on `close()`.
pub struct SerialPortConnection {
    port: Option<Box<dyn serialport::SerialPort>>,
}

impl SerialPortConnection {
    fn port(&mut self) -> RigResult<&mut Box<dyn serialport::SerialPort>> {
        self.port
            .as_mut()
            .ok_or_else(|| RigError::Io("Serial port already closed".to_string()))
    }
}

impl SerialConnection for SerialPortConnection {
    fn write(&mut self, data: &[u8]) -> RigResult<usize> {
        let port = self.port()?;
        port.write_all(data)
            .and_then(|()| port.flush())
            .map_err(|e| RigError::Io(format!("Write failed: {e}")))?;
        Ok(data.len())
    }

    fn read(&mut self, buffer: &mut [u8]) -> RigResult<usize> {
        self.port()?
            .read(buffer)
            .map_err(|e| RigError::Io(format!("Read failed: {e}")))
    }

    fn close(&mut self) -> RigResult<()> {
        self.port = None;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.port.is_some()
    }
}
