//! Errors raised while loading `relink.toml`.
//!
//! Validation problems are collected into [`ConfigDiagnostics`] so a single
//! run reports every bad field, not only the first one.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("relink.toml is not valid TOML")]
    Toml(#[from] toml::de::Error),

    // No #[from]: the diagnostics already print themselves in full
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One rejected field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Dotted field path, e.g. `routes./compounds`.
    pub field: String,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} {}: {}", "✗".red(), self.field.cyan(), self.message)?;
        match &self.hint {
            Some(hint) => write!(f, "\n    {} {}", "hint:".yellow(), hint),
            None => Ok(()),
        }
    }
}

/// Field errors gathered across every config section.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(field.into(), message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(field.into(), message.into(), Some(hint.into()));
    }

    fn push(&mut self, field: String, message: String, hint: Option<String>) {
        self.errors.push(ConfigDiagnostic { field, message, hint });
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// `Ok` when nothing was rejected.
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Diagnostics(self))
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} rejected)",
            "invalid relink.toml".red().bold(),
            self.len()
        )?;
        for err in self.errors() {
            write!(f, "\n{err}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_diagnostics_is_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }

    #[test]
    fn test_diagnostics_collect_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error("build.output_ext", "must not be empty");
        diag.error_with_hint("routes./a", "bad target", "end the path with a file name");
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("end the path with a file name"));
        assert!(matches!(diag.into_result(), Err(ConfigError::Diagnostics(_))));
    }

    #[test]
    fn test_display_lists_every_field() {
        owo_colors::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.error("build.output_ext", "must not be empty");
        diag.error_with_hint("routes./a", "bad target", "drop the slash");

        let text = diag.to_string();
        assert!(text.starts_with("invalid relink.toml (2 rejected)"));
        assert!(text.contains("build.output_ext: must not be empty"));
        assert!(text.contains("hint: drop the slash"));
    }
}
