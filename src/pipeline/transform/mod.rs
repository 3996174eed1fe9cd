//! Rewrite rules (text -> text).
//!
//! Each rule is a [`Rule`] applied to the full document text. Rules are
//! independent of each other except through ordering, which
//! [`RewritePipeline`](super::RewritePipeline) fixes in one place.
//!
//! | Rule                     | Module  | Touches                          |
//! |--------------------------|---------|----------------------------------|
//! | [`GluedBase`]            | `base`  | href values                      |
//! | [`RepeatedBase`]         | `base`  | href values                      |
//! | [`ContentPrefix`]        | `link`  | href values                      |
//! | [`LabelledAnchor`]       | `label` | `href` + following anchor text   |
//! | [`CompoundPage`]         | `link`  | href values                      |
//! | [`RootRelative`]         | `link`  | href values                      |
//! | [`LegacyRoute`]          | `link`  | href values                      |
//!
//! Every rule must be a fixed point of its own output: applying it to text it
//! already rewrote changes nothing.

mod base;
mod label;
mod link;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::address::{ResolveState, Resolver};
use crate::core::LinkKind;

pub use base::{GluedBase, RepeatedBase};
pub use label::LabelledAnchor;
pub use link::{CompoundPage, ContentPrefix, LegacyRoute, RootRelative};

/// Everything a rule may consult or mutate while rewriting one document.
pub struct RewriteContext<'a> {
    pub resolver: Resolver<'a>,
    /// Source document, relative to the output root.
    pub source: &'a str,
    pub state: &'a mut ResolveState,
}

impl RewriteContext<'_> {
    /// Resolve `raw` on behalf of the current document.
    #[inline]
    pub fn resolve(&mut self, raw: &str) -> String {
        self.resolver.resolve(raw, self.source, self.state)
    }
}

/// A single text substitution.
pub trait Rule {
    /// Short kebab-case name for logs.
    fn name(&self) -> &'static str;

    /// Rewrite `text`, borrowing it back when nothing matched.
    fn apply<'t>(&self, text: &'t str, cx: &mut RewriteContext<'_>) -> Cow<'t, str>;
}

/// `href="..."` with a double-quoted value.
static HREF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"href="([^"]*)""#).unwrap());

/// Rewrite every rewritable href value with `f`.
///
/// External, protocol-relative and template values are never passed to `f`.
/// Returning `None` keeps the value.
pub(crate) fn rewrite_hrefs<'t>(
    text: &'t str,
    mut f: impl FnMut(&str) -> Option<String>,
) -> Cow<'t, str> {
    HREF.replace_all(text, |caps: &Captures| {
        let whole = &caps[0];
        let value = &caps[1];
        if !LinkKind::parse(value).is_rewritable() {
            return whole.to_string();
        }
        match f(value) {
            Some(new) => format!(r#"href="{new}""#),
            None => whole.to_string(),
        }
    })
}

/// Regex alternation-safe form of the base segment, or `None` when the
/// deployment has no base.
pub(crate) fn escaped_base(base: &str) -> Option<String> {
    (!base.is_empty()).then(|| regex::escape(base))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_hrefs_skips_external_and_templates() {
        let text = r##"<a href="https://example.com/x">e</a><a href="#${id}">t</a><a href="/a">a</a>"##;
        let out = rewrite_hrefs(text, |v| Some(format!("X{v}")));
        assert_eq!(
            out,
            r##"<a href="https://example.com/x">e</a><a href="#${id}">t</a><a href="X/a">a</a>"##
        );
    }

    #[test]
    fn test_rewrite_hrefs_borrows_when_unchanged() {
        let text = r#"<p>no links</p>"#;
        assert!(matches!(rewrite_hrefs(text, |_| None), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escaped_base() {
        assert_eq!(escaped_base(""), None);
        assert_eq!(escaped_base("/kb.v2").as_deref(), Some(r"/kb\.v2"));
    }
}
