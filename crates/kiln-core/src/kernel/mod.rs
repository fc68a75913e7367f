//! # Kiln Core Kernel
//!
//! Application bootstrap: wires configuration, the provider container and the
//! plugin manager together and drives the startup sequence
//! (discover, apply disabled list, boot, register with the panel).
pub mod bootstrap;
pub mod constants;
pub mod error;

pub use bootstrap::Application;
pub use error::{Error, Result};
