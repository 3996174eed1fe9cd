//! Link classification utilities.

use crate::utils::path::route::{is_external_link, is_template_placeholder};

/// Syntactic classification of an `href` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Protocol-relative link (`//cdn.example.com/x`).
    ProtocolRelative(&'a str),
    /// Value containing a template interpolation (`#${id}`). Never rewritten.
    Template(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/about, /guides/pct).
    SiteRoot(&'a str),
    /// File-relative path (compounds/index.html, ../other).
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_template_placeholder(link) {
            Self::Template(link)
        } else if is_external_link(link) {
            Self::External(link)
        } else if link.starts_with("//") {
            Self::ProtocolRelative(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }

    /// Whether the rewrite rules may touch this link at all.
    ///
    /// External, protocol-relative and template links pass through every
    /// rule untouched.
    #[inline]
    pub const fn is_rewritable(&self) -> bool {
        !matches!(
            self,
            Self::External(_) | Self::ProtocolRelative(_) | Self::Template(_)
        )
    }
}
