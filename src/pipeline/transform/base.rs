//! Deployment base artifacts.
//!
//! Builds that prefixed links with the base segment more than once leave
//! values like `/HelloWorldGitHub/HelloWorldGitHub/guides/`. These rules run
//! before anything that strips the base, so that stripping sees at most one.

use std::borrow::Cow;

use regex::Regex;

use super::{RewriteContext, Rule, escaped_base, rewrite_hrefs};

// =============================================================================
// GluedBase
// =============================================================================

/// `{base}{base}compounds` -> `/compounds`.
///
/// The second copy of the base lost its trailing slash, gluing it onto the
/// section name.
pub struct GluedBase {
    pattern: Option<Regex>,
}

impl GluedBase {
    pub fn new(base: &str) -> Result<Self, regex::Error> {
        let pattern = escaped_base(base)
            .map(|b| Regex::new(&format!("{b}{b}compounds")))
            .transpose()?;
        Ok(Self { pattern })
    }
}

impl Rule for GluedBase {
    fn name(&self) -> &'static str {
        "collapse-glued-base"
    }

    fn apply<'t>(&self, text: &'t str, _cx: &mut RewriteContext<'_>) -> Cow<'t, str> {
        let Some(pattern) = &self.pattern else {
            return Cow::Borrowed(text);
        };
        rewrite_hrefs(text, |value| match pattern.replace_all(value, "/compounds") {
            Cow::Owned(new) => Some(new),
            Cow::Borrowed(_) => None,
        })
    }
}

// =============================================================================
// RepeatedBase
// =============================================================================

/// Two or more consecutive base segments collapse to one.
///
/// `/B/B/x` and `/B/B/B/x` both become `/B/x`; a single `/B/x` is left alone.
pub struct RepeatedBase {
    pattern: Option<Regex>,
    base: String,
}

impl RepeatedBase {
    pub fn new(base: &str) -> Result<Self, regex::Error> {
        let pattern = escaped_base(base)
            .map(|b| Regex::new(&format!("(?:{b}){{2,}}(?P<tail>/|[?#]|$)")))
            .transpose()?;
        Ok(Self {
            pattern,
            base: base.to_string(),
        })
    }
}

impl Rule for RepeatedBase {
    fn name(&self) -> &'static str {
        "collapse-repeated-base"
    }

    fn apply<'t>(&self, text: &'t str, _cx: &mut RewriteContext<'_>) -> Cow<'t, str> {
        let Some(pattern) = &self.pattern else {
            return Cow::Borrowed(text);
        };
        let replacement = format!("{}${{tail}}", self.base.replace('$', "$$"));
        rewrite_hrefs(text, |value| {
            match pattern.replace_all(value, replacement.as_str()) {
                Cow::Owned(new) => Some(new),
                Cow::Borrowed(_) => None,
            }
        })
    }
}
