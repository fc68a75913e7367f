//! # Kiln Core Storage
//!
//! Loading the host configuration from JSON, TOML or YAML files.
pub mod config;
pub mod error;

/// Re-export key types
pub use config::{ConfigFormat, DiscoveryConfig, KilnConfig};
pub use error::StorageSystemError;

// Test module declaration
#[cfg(test)]
mod tests;
