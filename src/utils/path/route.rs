//! URL string helpers.
//!
//! Every function here works on plain `&str` and never touches the disk.

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Drop the query string, then the fragment.
///
/// `/a/b?x=1#top` -> `/a/b`, `#top` -> ``.
#[inline]
pub fn strip_query_fragment(link: &str) -> &str {
    let path = link.split('?').next().unwrap_or_default();
    path.split('#').next().unwrap_or_default()
}

/// Strip every leading slash: `///a/b` -> `a/b`.
#[inline]
pub fn strip_leading_slashes(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Convert platform separators to URL separators.
#[inline]
pub fn to_url_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Check if a link carries a template interpolation such as `#${id}`.
#[inline]
pub fn is_template_placeholder(link: &str) -> bool {
    link.contains("${")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.html"));
        assert!(!is_external_link("#section"));
        assert!(!is_external_link(":nothing"));
    }

    #[test]
    fn test_strip_query_fragment() {
        assert_eq!(strip_query_fragment("/a/b?x=1#top"), "/a/b");
        assert_eq!(strip_query_fragment("/a/b#top?x"), "/a/b");
        assert_eq!(strip_query_fragment("#top"), "");
        assert_eq!(strip_query_fragment(""), "");
    }

    #[test]
    fn test_strip_leading_slashes() {
        assert_eq!(strip_leading_slashes("///a/b"), "a/b");
        assert_eq!(strip_leading_slashes("a/b"), "a/b");
        assert_eq!(strip_leading_slashes("/"), "");
    }

    #[test]
    fn test_to_url_path() {
        assert_eq!(to_url_path(r"guides\pct\index.html"), "guides/pct/index.html");
    }

    #[test]
    fn test_is_template_placeholder() {
        assert!(is_template_placeholder("#${compound.id}"));
        assert!(!is_template_placeholder("#section"));
    }
}
