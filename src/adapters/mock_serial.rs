//! Dry-run serial adapter for development without hardware.
//!
//! Activate with `--dry-run` or by setting MOCK_SERIAL=1 in the environment:
//!
//!   MOCK_SERIAL=1 RUST_LOG=radio_console_lib=info radio-console set-freq IC-7300 7035000
//!
//! Every open/write/close is logged at INFO level so you can verify
//! exactly what would go out to a real radio.

use crate::domain::RigResult;
use crate::ports::{SerialConnection, SerialOpener};

/// Opener that accepts any path and never touches a device.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockSerialOpener;

impl SerialOpener for MockSerialOpener {
    fn open(&self, port: &str, baud_rate: u32) -> RigResult<Box<dyn SerialConnection>> {
        log::info!("[MOCK SERIAL] OPEN {port} @ {baud_rate} baud");
        Ok(Box::new(MockSerialConnection {
            port: port.to_string(),
            open: true,
        }))
    }
}

pub struct MockSerialConnection {
    port: String,
    open: bool,
}

impl SerialConnection for MockSerialConnection {
    fn write(&mut self, data: &[u8]) -> RigResult<usize> {
        log::info!(
            "[MOCK SERIAL] {} ← {:?}",
            self.port,
            String::from_utf8_lossy(data)
        );
        Ok(data.len())
    }

    fn read(&mut self, _buffer: &mut [u8]) -> RigResult<usize> {
        Ok(0)
    }

    fn close(&mut self) -> RigResult<()> {
        log::info!("[MOCK SERIAL] CLOSE {}", self.port);
        self.open = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.open
    }
}
