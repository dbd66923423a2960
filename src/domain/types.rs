//! Core domain types

use serde::Serialize;

/// The transport a profile resolves to, borrowing from the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Tcp { host: &'a str, port: &'a str },
    Serial { port: &'a str, baud_rate: u32 },
    /// `None` means the rigctl backend's default model
    Rigctl { model: Option<u32> },
}

/// What a successful send produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Response {
    /// Raw reply read back from a TCP radio (one read, unparsed)
    Reply(String),
    /// Bytes written to a serial port; serial is fire-and-forget
    Written { bytes: usize },
    /// Captured stdout + stderr of the control process
    Output(String),
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Reply(text) => write!(f, "Radio response: {}", text.trim_end()),
            Response::Written { bytes } => write!(f, "Wrote {bytes} bytes to serial port"),
            Response::Output(text) => write!(f, "rigctl output: {}", text.trim_end()),
        }
    }
}
