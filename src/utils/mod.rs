//! Shared helpers with no knowledge of the rewrite pipeline.

pub mod path;
pub mod plural;
pub mod title;

pub use plural::{plural_count, plural_s};
