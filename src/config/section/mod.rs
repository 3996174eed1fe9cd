//! Configuration section definitions.
//!
//! Each module corresponds to a section in `relink.toml`:
//!
//! | Module      | TOML Section    | Purpose                              |
//! |-------------|-----------------|--------------------------------------|
//! | `site`      | `[site]`        | Deployment URL and base segment      |
//! | `output`    | `[build]`       | Output and page-template extensions  |
//! | `provision` | `[provision]`   | Required placeholder sections        |
//! | `rewrite`   | `[rewrite]`     | Label-driven anchor rules            |
//!
//! The `[routes]` table is a plain alias -> canonical map and lives on
//! [`RelinkConfig`](super::RelinkConfig) directly.

mod output;
mod provision;
mod rewrite;
mod site;

pub use output::BuildConfig;
pub use provision::{DEFAULT_REQUIRED_PATHS, ProvisionConfig};
pub use rewrite::{LabelRule, RewriteConfig};
pub use site::SiteConfig;
