//! Utility types for configuration handling.

mod error;

pub use error::{ConfigDiagnostics, ConfigError};
