//! `[rewrite]` section configuration.
//!
//! Label rules pick an anchor by its visible text, not by any stable id.
//! That makes them sensitive to wording: "Blood Work" matches, "Bloodwork
//! panel" does not.
//!
//! # Example
//!
//! ```toml
//! [[rewrite.labels]]
//! label = "Blood Work"
//! target = "safety/bloodwork"
//! placeholder_only = true   # only rewrite href="#"
//! ```
//!
//! When `labels` is present it replaces the built-in list.

use serde::{Deserialize, Serialize};

/// A label-driven anchor rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRule {
    /// Visible anchor text prefix. Words match with optional whitespace.
    pub label: String,
    /// Path handed to the resolver.
    pub target: String,
    /// Only rewrite anchors whose href is the `#` placeholder.
    #[serde(default = "default_placeholder_only")]
    pub placeholder_only: bool,
}

const fn default_placeholder_only() -> bool {
    true
}

/// Built-in label rules, in application order.
///
/// Rules that accept any href run first, so "Compound Guide" resolves to
/// the compound index even when its href is `#`. The later placeholder rule
/// for the same label only sees anchors the first one missed.
pub const DEFAULT_LABEL_RULES: &[(&str, &str, bool)] = &[
    ("Compound Database", "compounds", false),
    ("Compound Guide", "compounds", false),
    ("Blood Work", "safety/bloodwork", true),
    ("Calculators", "resources/calculators", true),
    ("Side Effects", "safety/side-effects", true),
    ("Success Stories", "guides/success-stories", true),
    ("Research", "resources/research", true),
    ("Disclaimer", "legal/disclaimer", true),
    ("Terms", "legal/terms", true),
    ("Compound Guide", "guides/compounds", true),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Override for the label rule list.
    pub labels: Option<Vec<LabelRule>>,
}

impl RewriteConfig {
    /// Effective label rules in application order.
    pub fn label_rules(&self) -> Vec<LabelRule> {
        match &self.labels {
            Some(rules) => rules.clone(),
            None => DEFAULT_LABEL_RULES
                .iter()
                .map(|&(label, target, placeholder_only)| LabelRule {
                    label: label.to_string(),
                    target: target.to_string(),
                    placeholder_only,
                })
                .collect(),
        }
    }

    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        let Some(rules) = &self.labels else { return };
        for (i, rule) in rules.iter().enumerate() {
            if rule.label.trim().is_empty() {
                diag.error(format!("rewrite.labels[{i}].label"), "label must not be empty");
            }
            if rule.target.trim().is_empty() {
                diag.error(format!("rewrite.labels[{i}].target"), "target must not be empty");
            }
        }
    }
}
