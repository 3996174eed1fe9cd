//! Label-driven anchor rules.
//!
//! These pick anchors by their visible text. The label must start right
//! after the `>` that closes the anchor's opening tag; words inside the label
//! may be separated by any whitespace, or none.

use std::borrow::Cow;

use regex::{Captures, Regex};

use super::{RewriteContext, Rule};
use crate::config::LabelRule;
use crate::core::LinkKind;

/// Rewrite the href of anchors labelled `label` to the resolved `target`.
pub struct LabelledAnchor {
    target: String,
    pattern: Regex,
}

impl LabelledAnchor {
    pub fn new(rule: &LabelRule) -> Result<Self, regex::Error> {
        let label = rule
            .label
            .split_whitespace()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\s*");
        let href = if rule.placeholder_only { "#" } else { r#"[^"]*"# };
        let pattern = Regex::new(&format!(r#"href="({href})"([^>]*>{label})"#))?;

        Ok(Self {
            target: rule.target.clone(),
            pattern,
        })
    }
}

impl Rule for LabelledAnchor {
    fn name(&self) -> &'static str {
        "labelled-anchor"
    }

    fn apply<'t>(&self, text: &'t str, cx: &mut RewriteContext<'_>) -> Cow<'t, str> {
        self.pattern.replace_all(text, |caps: &Captures| {
            if !LinkKind::parse(&caps[1]).is_rewritable() {
                return caps[0].to_string();
            }
            let url = cx.resolve(&self.target);
            format!(r#"href="{url}"{}"#, &caps[2])
        })
    }
}
