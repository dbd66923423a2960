//! Radio Console
//!
//! Pushes a frequency to one of several configured radios over whatever
//! transport that radio uses: a TCP socket, a serial port, or Hamlib's
//! `rigctl`.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Radio profiles, routes, responses, errors (no I/O)
//! - `cat/` - CAT command encoding (pure)
//! - `ports/` - Trait definitions for the serial port and child processes
//! - `adapters/` - Implementations of ports (serialport, std::process, dry-run)
//! - `transport/` - The TCP, serial and rigctl senders
//! - `dispatch` - Routes a (radio id, frequency) request to a sender
//! - `store` - JSON configuration persistence
//! - `commands/` - Handlers driven by the command-line front-end
//! - `state` - Application state

// Core domain (pure, no I/O)
pub mod cat;
pub mod domain;
pub mod ports;

// Adapters and transports (external I/O)
pub mod adapters;
pub mod dispatch;
pub mod store;
pub mod transport;

// Front-end integration
pub mod cli;
pub mod commands;
pub mod state;

pub use dispatch::Dispatcher;
pub use domain::{ProfileCollection, RadioProfile, Response, RigError, RigResult};
