//! Serial port traits
//!
//! Split into two traits:
//! - `SerialOpener` — acquires a handle for a device path and baud rate
//! - `SerialConnection` — instance methods for reading/writing data
//!
//! The opener is handed to the serial sender when it is built, so tests can
//! pass a fake one without touching any shared state.

use crate::domain::RigResult;

/// Opens serial connections.
pub trait SerialOpener {
    /// Open a serial port at the given baud rate, returning a boxed connection
    fn open(&self, port: &str, baud_rate: u32) -> RigResult<Box<dyn SerialConnection>>;
}

impl<T: SerialOpener + ?Sized> SerialOpener for Box<T> {
    fn open(&self, port: &str, baud_rate: u32) -> RigResult<Box<dyn SerialConnection>> {
        (**self).open(port, baud_rate)
    }
}

/// Trait for an open serial port connection.
pub trait SerialConnection: Send {
    /// Write bytes to the port
    fn write(&mut self, data: &[u8]) -> RigResult<usize>;

    /// Read bytes from the port (with timeout)
    fn read(&mut self, buffer: &mut [u8]) -> RigResult<usize>;

    /// Close the connection
    fn close(&mut self) -> RigResult<()>;

    /// Check if the port is still open
    fn is_connected(&self) -> bool;
}
