//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://drunkonjava.github.io/HelloWorldGitHub"
//! # base = "/HelloWorldGitHub"   # explicit base wins over the url path
//! ```

use serde::{Deserialize, Serialize};

use crate::config::util::extract_url_path;

/// Base segment the GitHub Pages deployment is served under.
pub const DEFAULT_BASE: &str = "/HelloWorldGitHub";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public URL of the deployed site.
    pub url: Option<String>,

    /// Deployment base segment. Empty string disables base handling.
    pub base: Option<String>,
}

impl SiteConfig {
    /// Resolve the effective base segment: `/name` or `""`.
    ///
    /// Priority: `base`, then the path of `url`, then [`DEFAULT_BASE`].
    pub fn resolved_base(&self) -> String {
        let raw = match (&self.base, &self.url) {
            (Some(base), _) => base.clone(),
            (None, Some(url)) => extract_url_path(url).unwrap_or_default(),
            (None, None) => DEFAULT_BASE.to_string(),
        };
        normalize_base(&raw)
    }
}

/// `HelloWorldGitHub/` -> `/HelloWorldGitHub`, `/` -> ``.
fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
