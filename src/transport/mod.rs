//! Transport backends: the three ways a command reaches a radio.
//!
//! - `tcp`: CAT line over a TCP socket, one reply read back
//! - `serial`: CAT line written to a serial port, no read-back
//! - `rigctl`: Hamlib's `rigctl` invoked as a child process
//!
//! Every backend makes exactly one attempt, logs any failure where it
//! happens, and hands the typed error back to the caller.

pub mod rigctl;
pub mod serial;
pub mod tcp;

pub use rigctl::RigctlSender;
pub use serial::SerialSender;
pub use tcp::TcpSender;

use crate::domain::RigError;

/// Log a transport failure and pass it on.
fn reported(err: RigError) -> RigError {
    log::error!("{err}");
    err
}
