//! `[provision]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [provision]
//! required = ["health", "training", "resources/calculators"]
//! ```
//!
//! When `required` is present it replaces the built-in list.

use serde::{Deserialize, Serialize};

/// Sections that always get at least a placeholder index page.
pub const DEFAULT_REQUIRED_PATHS: &[&str] = &[
    "resources/calculators",
    "resources/research",
    "guides/success-stories",
    "guides/compounds",
    "legal/disclaimer",
    "legal/terms",
    "health",
    "training",
    "nutrition",
    "protocols",
    "compounds",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionConfig {
    /// Override for the required section list.
    pub required: Option<Vec<String>>,
}

impl ProvisionConfig {
    /// Effective list, with surrounding slashes trimmed.
    pub fn required_paths(&self) -> Vec<String> {
        match &self.required {
            Some(paths) => paths
                .iter()
                .map(|p| p.trim_matches('/').to_string())
                .collect(),
            None => DEFAULT_REQUIRED_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        let Some(paths) = &self.required else { return };
        for (i, path) in paths.iter().enumerate() {
            let field = format!("provision.required[{i}]");
            let trimmed = path.trim_matches('/');
            if trimmed.is_empty() {
                diag.error(field, "required path must not be empty");
            } else if trimmed.split('/').any(|seg| seg == ".." || seg == "." || seg.is_empty()) {
                diag.error_with_hint(
                    field,
                    format!("`{path}` is not a plain relative directory"),
                    "use segments like \"legal/terms\" without `.` or `..`",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDiagnostics;

    #[test]
    fn test_defaults_used_when_unset() {
        let paths = ProvisionConfig::default().required_paths();
        assert_eq!(paths.len(), DEFAULT_REQUIRED_PATHS.len());
        assert!(paths.iter().any(|p| p == "resources/calculators"));
    }

    #[test]
    fn test_override_trims_slashes() {
        let config = ProvisionConfig {
            required: Some(vec!["/health/".into()]),
        };
        assert_eq!(config.required_paths(), vec!["health".to_string()]);
    }

    #[test]
    fn test_rejects_parent_segments() {
        let config = ProvisionConfig {
            required: Some(vec!["../etc".into(), "ok/path".into(), "".into()]),
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
