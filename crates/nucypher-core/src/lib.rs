//! Shared types for the nucypher configuration crates.

pub mod error;
pub mod types;

pub use error::ConfigurationError;
pub use types::OperatingMode;
