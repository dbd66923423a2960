//! Command handlers driven by the command-line front-end.
//!
//! Handlers map errors to `String` so the front-end only has to print them.

pub mod config;
pub mod radio;
