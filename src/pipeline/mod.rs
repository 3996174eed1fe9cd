//! Link rewriting pipeline.
//!
//! Runs the [`transform`] rules over one document's text in a fixed order.
//! The pipeline itself never touches the disk; rules only consult it through
//! the [`Resolver`](crate::address::Resolver) in the [`RewriteContext`].
//!
//! # Rule Order
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  collapse-glued-base -> collapse-repeated-base   │  base artifacts
//! │  strip-content-prefix                            │
//! │  labelled-anchor (config order)                  │  anchor text
//! │  compound-pages -> root-relative -> legacy-routes│  href values
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Base collapsing must run before anything that strips the base, and the
//! any-href label rules come before the `href="#"` ones.

pub mod transform;

use std::borrow::Cow;

use anyhow::{Context, Result};

use crate::config::{BuildConfig, LabelRule, RelinkConfig};
use crate::debug;

pub use transform::{
    CompoundPage, ContentPrefix, GluedBase, LabelledAnchor, LegacyRoute, RepeatedBase,
    RewriteContext, RootRelative, Rule,
};

/// Ordered rule set, built once per run.
pub struct RewritePipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl RewritePipeline {
    pub fn from_config(config: &RelinkConfig) -> Result<Self> {
        Self::new(&config.base(), &config.build, &config.rewrite.label_rules())
    }

    pub fn new(base: &str, build: &BuildConfig, labels: &[LabelRule]) -> Result<Self> {
        let mut rules: Vec<Box<dyn Rule>> = vec![
            Box::new(GluedBase::new(base).context("invalid base path pattern")?),
            Box::new(RepeatedBase::new(base).context("invalid base path pattern")?),
            Box::new(ContentPrefix::new()?),
        ];

        for rule in labels {
            let anchor = LabelledAnchor::new(rule)
                .with_context(|| format!("invalid rewrite rule for label `{}`", rule.label))?;
            rules.push(Box::new(anchor));
        }

        rules.push(Box::new(CompoundPage::new(&build.output_ext)?));
        rules.push(Box::new(RootRelative::new(base)?));
        rules.push(Box::new(LegacyRoute::new(&build.output_ext, &build.template_ext)?));

        Ok(Self { rules })
    }

    /// Rule names in application order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Apply every rule in order.
    pub fn rewrite(&self, input: &str, cx: &mut RewriteContext<'_>) -> String {
        let mut text = Cow::Borrowed(input);

        for rule in &self.rules {
            let changed = match rule.apply(&text, cx) {
                Cow::Owned(new) if new != *text => Some(new),
                _ => None,
            };
            if let Some(new) = changed {
                debug!("rewrite"; "{}: {}", cx.source, rule.name());
                text = Cow::Owned(new);
            }
        }

        text.into_owned()
    }
}
