//! Port traits (interfaces)
//!
//! These traits define the boundaries between the transports and the
//! hardware or operating system. Adapters implement them for real use;
//! tests implement them with fakes.

pub mod process;
pub mod serial;

pub use process::*;
pub use serial::*;
