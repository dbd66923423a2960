//! Adapters: implementations of the port traits against real I/O.

pub mod mock_serial;
pub mod process;
pub mod serial_port;

pub use mock_serial::MockSerialOpener;
pub use process::SystemProcessRunner;
pub use serial_port::SerialPortOpener;
