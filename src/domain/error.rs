//! Domain error types

use thiserror::Error;

/// Errors that can occur while pushing a command to a radio
#[derive(Error, Debug)]
pub enum RigError {
    /// TCP dial failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Write or read failure on any transport
    #[error("I/O error: {0}")]
    Io(String),

    /// Serial handle could not be acquired
    #[error("Serial port open error: {0}")]
    PortOpen(String),

    /// Spawn failure or non-zero exit of the control process
    #[error("Process error: {message}")]
    Process {
        message: String,
        /// Captured stdout + stderr, empty if the process never ran
        output: String,
    },

    /// Unknown radio identifier or unroutable profile
    #[error("Selection error: {0}")]
    Selection(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for radio console operations
pub type RigResult<T> = Result<T, RigError>;
