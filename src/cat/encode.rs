//! Pure encoding: CatCommand → CAT wire string.
//!
//! No I/O, no side effects. Easy to unit-test without any transport.

use super::{CatCommand, LINE_TERMINATOR};

/// Encode a CatCommand into the wire string (including the `;` terminator).
pub fn encode(cmd: &CatCommand) -> String {
    match cmd {
        CatCommand::SetFrequencyA(freq) => format!("FA{freq};"),
    }
}

/// Bytes put on the wire for an encoded command
pub fn line(command: &str) -> Vec<u8> {
    format!("{command}{LINE_TERMINATOR}").into_bytes()
}
