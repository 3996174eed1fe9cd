//! Configuration management for `relink.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site], [build], [provision], [rewrite]
//! ├── types/         # ConfigError, ConfigDiagnostics
//! ├── util.rs        # url path extraction, config file search
//! └── mod.rs         # RelinkConfig (this file)
//! ```
//!
//! The config file is optional. Without one every section falls back to
//! the built-in values of the knowledge base site, so a bare `relink` in the
//! output directory needs no setup.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildConfig, LabelRule, ProvisionConfig, RewriteConfig, SiteConfig};
pub use types::{ConfigDiagnostics, ConfigError};

use crate::cli::Cli;
use crate::utils::path::normalize_path;
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing relink.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelinkConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Output root the rewriter walks (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Deployment URL and base segment
    pub site: SiteConfig,

    /// Extensions
    pub build: BuildConfig,

    /// Extra alias -> canonical routes, merged over the built-in table
    pub routes: BTreeMap<String, String>,

    /// Required placeholder sections
    pub provision: ProvisionConfig,

    /// Label-driven anchor rules
    pub rewrite: RewriteConfig,
}

impl RelinkConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// The output root is `--root` or the current directory. The config file
    /// is searched upward from the root; when none exists the built-in
    /// defaults are used.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => normalize_path(root),
            None => std::env::current_dir().context("Failed to get current working directory")?,
        };

        let mut config = match find_config_file(&root, &cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "no {} found, using built-in defaults", cli.config.display());
                Self::default()
            }
        };

        config.root = root;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} are ignored:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.build.validate(&mut diag);
        self.provision.validate(&mut diag);
        self.rewrite.validate(&mut diag);
        self.validate_routes(&mut diag);

        diag.into_result()
    }

    /// Canonical route targets must be relative paths ending in a file name.
    fn validate_routes(&self, diag: &mut ConfigDiagnostics) {
        for (alias, canonical) in &self.routes {
            let field = format!("routes.{alias}");
            if alias.is_empty() {
                diag.error(field, "route alias must not be empty");
                continue;
            }

            let file_name = canonical.rsplit('/').next().unwrap_or_default();
            if canonical.starts_with('/') {
                diag.error_with_hint(
                    field,
                    format!("`{canonical}` must be relative to the output root"),
                    "drop the leading slash",
                );
            } else if file_name.is_empty() || !file_name.contains('.') {
                diag.error_with_hint(
                    field,
                    format!("`{canonical}` does not end in a file name"),
                    format!("point at a document, e.g. \"{}/{}\"",
                        canonical.trim_end_matches('/'), self.build.index_file()),
                );
            }
        }
    }

    /// Get the output root directory path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Effective deployment base segment (`/name` or empty).
    pub fn base(&self) -> String {
        self.site.resolved_base()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RelinkConfig::from_str("").unwrap();
        assert_eq!(config.build.output_ext, "html");
        assert_eq!(config.build.template_ext, "astro");
        assert_eq!(config.base(), "/HelloWorldGitHub");
        assert!(config.routes.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let config = RelinkConfig::from_str(
            r#"
            [site]
            url = "https://example.github.io/kb"

            [build]
            output_ext = "htm"

            [routes]
            "/old/dosing" = "guides/dosing/index.htm"

            [provision]
            required = ["guides/dosing"]
            "#,
        )
        .unwrap();

        assert_eq!(config.base(), "/kb");
        assert_eq!(config.build.index_file(), "index.htm");
        assert_eq!(
            config.routes.get("/old/dosing").map(String::as_str),
            Some("guides/dosing/index.htm")
        );
        assert_eq!(config.provision.required_paths(), vec!["guides/dosing".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (_, ignored) = RelinkConfig::parse_with_ignored(
            r#"
            [site]
            bsae = "/typo"
            "#,
        )
        .unwrap();
        assert_eq!(ignored, vec!["site.bsae".to_string()]);
    }

    #[test]
    fn test_route_targets_must_be_files() {
        let config = RelinkConfig::from_str(
            r#"
            [routes]
            "/a" = "a/"
            "/b" = "/b/index.html"
            "/c" = "c/index.html"
            "#,
        )
        .unwrap();

        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            RelinkConfig::from_str("[site"),
            Err(ConfigError::Toml(_))
        ));
    }
}
