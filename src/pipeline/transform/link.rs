//! Href value rules.
//!
//! Each rule here looks at one `href` value at a time through
//! [`rewrite_hrefs`], so external, protocol-relative and template links never
//! reach them.
//!
//! | Rule             | Before                                 | After                               |
//! |------------------|----------------------------------------|-------------------------------------|
//! | [`ContentPrefix`]| `/pages/compounds/x`                   | `compounds/x`                       |
//! | [`CompoundPage`] | `../compounds/testosterone.html`       | `compounds/testosterone/index.html` |
//! | [`RootRelative`] | `/B/safety/pct/`                       | `safety/pct/`                       |
//! | [`LegacyRoute`]  | `pages/compounds/nandrolone/nandrolone.html` | `compounds/nandrolone/index.html` |

use std::borrow::Cow;

use regex::Regex;

use super::{RewriteContext, Rule, escaped_base, rewrite_hrefs};

/// Optional base prefix for a value pattern.
fn optional_base(base: &str) -> String {
    escaped_base(base)
        .map(|b| format!("(?:{b})?"))
        .unwrap_or_default()
}

// =============================================================================
// ContentPrefix
// =============================================================================

/// Strip a leading slash and `pages/` in front of the compounds section.
///
/// A base prefix is left in place: `/B/compounds/x.html` must still carry a
/// prefix when it reaches [`CompoundPage`].
pub struct ContentPrefix {
    pattern: Regex,
}

impl ContentPrefix {
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = Regex::new("^/?(?:pages/)?compounds")?;
        Ok(Self { pattern })
    }
}

impl Rule for ContentPrefix {
    fn name(&self) -> &'static str {
        "strip-content-prefix"
    }

    fn apply<'t>(&self, text: &'t str, _cx: &mut RewriteContext<'_>) -> Cow<'t, str> {
        rewrite_hrefs(text, |value| {
            let new = self.pattern.replace(value, "compounds");
            (new != value).then(|| new.into_owned())
        })
    }
}

// =============================================================================
// CompoundPage
// =============================================================================

/// `<prefix>/compounds/<name>.html` -> resolved `compounds/<name>`.
///
/// A prefix is required: values already starting at `compounds/` are left
/// alone. A trailing `/index` on the name is dropped so that
/// `x/compounds/tren/index.html` does not gain a second index level.
pub struct CompoundPage {
    pattern: Regex,
}

impl CompoundPage {
    pub fn new(output_ext: &str) -> Result<Self, regex::Error> {
        let ext = regex::escape(output_ext);
        let pattern = Regex::new(&format!(r"^(?:.+)/compounds/(.+)\.{ext}$"))?;
        Ok(Self { pattern })
    }
}

impl Rule for CompoundPage {
    fn name(&self) -> &'static str {
        "compound-pages"
    }

    fn apply<'t>(&self, text: &'t str, cx: &mut RewriteContext<'_>) -> Cow<'t, str> {
        rewrite_hrefs(text, |value| {
            let caps = self.pattern.captures(value)?;
            let name = &caps[1];
            let name = name.strip_suffix("/index").unwrap_or(name);
            Some(cx.resolve(&format!("compounds/{name}")))
        })
    }
}

// =============================================================================
// RootRelative
// =============================================================================

/// `[{base}]/<path>` -> `<path>`.
///
/// A value that is only the base (`/B`, `/B/`, optionally followed by a
/// query or fragment) points at the site root and is kept.
pub struct RootRelative {
    pattern: Regex,
    base: String,
}

impl RootRelative {
    pub fn new(base: &str) -> Result<Self, regex::Error> {
        let prefix = optional_base(base);
        let pattern = Regex::new(&format!("^{prefix}/([^/].*)$"))?;
        Ok(Self {
            pattern,
            base: base.to_string(),
        })
    }

    fn is_base_only(&self, value: &str) -> bool {
        !self.base.is_empty()
            && value
                .strip_prefix(self.base.as_str())
                .map(|rest| rest.strip_prefix('/').unwrap_or(rest))
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(['?', '#']))
    }
}

impl Rule for RootRelative {
    fn name(&self) -> &'static str {
        "root-relative"
    }

    fn apply<'t>(&self, text: &'t str, _cx: &mut RewriteContext<'_>) -> Cow<'t, str> {
        rewrite_hrefs(text, |value| {
            if self.is_base_only(value) {
                return None;
            }
            let caps = self.pattern.captures(value)?;
            Some(caps[1].to_string())
        })
    }
}

// =============================================================================
// LegacyRoute
// =============================================================================

/// Route-table lookup for values ending in the output or template extension.
///
/// Tried in order: the value itself, the value without extension, and that
/// without a trailing `/index`. The first alias hit is resolved to its
/// canonical path; values with no hit are kept.
pub struct LegacyRoute {
    pattern: Regex,
}

impl LegacyRoute {
    pub fn new(output_ext: &str, template_ext: &str) -> Result<Self, regex::Error> {
        let output = regex::escape(output_ext);
        let template = regex::escape(template_ext);
        let pattern = Regex::new(&format!(r"^(.+)\.(?:{output}|{template})$"))?;
        Ok(Self { pattern })
    }

    fn candidates<'v>(&self, value: &'v str) -> Option<[Option<&'v str>; 3]> {
        let stem = self.pattern.captures(value)?.get(1)?.as_str();
        Some([Some(value), Some(stem), stem.strip_suffix("/index")])
    }
}

impl Rule for LegacyRoute {
    fn name(&self) -> &'static str {
        "legacy-routes"
    }

    fn apply<'t>(&self, text: &'t str, cx: &mut RewriteContext<'_>) -> Cow<'t, str> {
        rewrite_hrefs(text, |value| {
            let routes = cx.resolver.routes();
            let canonical = self
                .candidates(value)?
                .into_iter()
                .flatten()
                .find_map(|candidate| routes.lookup_normalized(candidate))?
                .to_string();
            let url = cx.resolve(&canonical);
            (url != value).then_some(url)
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
