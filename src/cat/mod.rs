//! CAT (Computer Aided Transceiver) command layer.
//!
//! Only the frequency-set command is supported. The frequency travels as
//! the operator typed it; nothing here parses or range-checks it.

pub mod encode;

pub use encode::{encode, line};

/// Line terminator appended when a command goes out on TCP or serial
pub const LINE_TERMINATOR: &str = "\n";

/// High-level CAT commands
#[derive(Debug, PartialEq, Clone)]
pub enum CatCommand {
    /// Set VFO-A frequency, raw text
    SetFrequencyA(String),
}
