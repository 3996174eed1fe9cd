//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `relative_display`)
//! - [`route`]: URL string helpers (`is_external_link`, `strip_query_fragment`, ...)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, relative_display};
