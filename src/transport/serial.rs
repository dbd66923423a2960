//! Serial backend: writes one CAT line and lets go of the port.

use crate::cat;
use crate::domain::{Response, RigResult};
use crate::ports::SerialOpener;

use super::reported;

/// Writes CAT lines through whatever `SerialOpener` it was built with.
pub struct SerialSender<O: SerialOpener> {
    opener: O,
}

impl<O: SerialOpener> SerialSender<O> {
    pub fn new(opener: O) -> Self {
        Self { opener }
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Open `port`, write `command` + newline, close.
    ///
    /// Once the port is open, `close()` is called exactly once whether or
    /// not the write succeeded. Nothing is read back.
    pub fn send(&self, port: &str, baud_rate: u32, command: &str) -> RigResult<Response> {
        let mut conn = self.opener.open(port, baud_rate).map_err(reported)?;
        log::debug!("Serial TX {port}: {command}");

        let written = conn.write(&cat::line(command));
        if let Err(e) = conn.close() {
            log::warn!("Error closing serial port {port}: {e}");
        }

        let bytes = written.map_err(|e| {
            log::error!("Error writing to serial port {port}: {e}");
            e
        })?;
        Ok(Response::Written { bytes })
    }
}
