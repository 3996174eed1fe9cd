//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output_ext = "html"     # documents the rewriter walks and links resolve to
//! template_ext = "astro"  # page-template sources that map to <dir>/index.html
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Extension of generated documents, without the dot.
    pub output_ext: String,

    /// Extension of page-template sources, without the dot.
    pub template_ext: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_ext: "html".to_string(),
            template_ext: "astro".to_string(),
        }
    }
}

impl BuildConfig {
    /// `index.<output_ext>`
    pub fn index_file(&self) -> String {
        format!("index.{}", self.output_ext)
    }

    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        for (field, ext) in [
            ("build.output_ext", &self.output_ext),
            ("build.template_ext", &self.template_ext),
        ] {
            if ext.is_empty() {
                diag.error(field, "extension must not be empty");
            } else if ext.contains('.') || ext.contains('/') {
                diag.error_with_hint(
                    field,
                    format!("invalid extension `{ext}`"),
                    "write the extension without a leading dot, e.g. \"html\"",
                );
            }
        }
        if self.output_ext == self.template_ext {
            diag.error(
                "build.template_ext",
                "template extension must differ from the output extension",
            );
        }
    }
}
