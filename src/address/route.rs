//! Route table: legacy and alias paths mapped to canonical output files.

use rustc_hash::FxHashMap;

use crate::config::RelinkConfig;
use crate::utils::path::route::{strip_leading_slashes, to_url_path};

/// Routes the site has accumulated across its routing schemes.
///
/// Keys are matched exactly. Values are relative paths ending in a file name.
pub const DEFAULT_ROUTES: &[(&str, &str)] = &[
    ("pages/compounds/index.html", "compounds/index.html"),
    ("/pages/compounds/index.html", "compounds/index.html"),
    ("/compounds/index.html", "compounds/index.html"),
    ("/compounds/database", "compounds/index.html"),
    ("/compounds", "compounds/index.html"),
    ("pages/compounds/testosterone/testosterone.html", "compounds/testosterone/index.html"),
    ("pages/compounds/nandrolone/nandrolone.html", "compounds/nandrolone/index.html"),
    ("pages/compounds/trenbolone/trenbolone.html", "compounds/trenbolone/index.html"),
    ("/guides/first-cycle", "guides/first-cycle/index.html"),
    ("/guides/success-stories", "guides/success-stories/index.html"),
    ("/guides/compounds", "guides/compounds/index.html"),
    ("/safety/bloodwork", "safety/bloodwork/index.html"),
    ("/safety/pct", "safety/pct/index.html"),
    ("/safety/side-effects", "safety/side-effects/index.html"),
    ("/resources/research", "resources/research/index.html"),
    ("/legal/disclaimer", "legal/disclaimer/index.html"),
    ("/legal/terms", "legal/terms/index.html"),
];

/// Immutable alias -> canonical lookup.
///
/// Several aliases may share a canonical target; one alias never has two.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    exact: FxHashMap<String, String>,
    /// Aliases with leading slashes stripped, for loose matching of hrefs.
    normalized: FxHashMap<String, String>,
}

impl RouteTable {
    /// Build a table from `(alias, canonical)` pairs. Later pairs replace
    /// earlier ones with the same alias.
    pub fn new<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut exact = FxHashMap::default();
        for (alias, canonical) in pairs {
            exact.insert(alias.to_string(), canonical.to_string());
        }

        // Sorted so that colliding normalized keys resolve the same way every run
        let mut aliases: Vec<&String> = exact.keys().collect();
        aliases.sort();
        let mut normalized = FxHashMap::default();
        for alias in aliases {
            normalized
                .entry(normalize_alias(alias))
                .or_insert_with(|| exact[alias].clone());
        }

        Self { exact, normalized }
    }

    /// Built-in routes only.
    #[cfg(test)]
    pub fn builtin() -> Self {
        Self::new(DEFAULT_ROUTES.iter().copied())
    }

    /// Built-in routes with `[routes]` from the config merged on top.
    pub fn from_config(config: &RelinkConfig) -> Self {
        let overrides = config
            .routes
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()));
        Self::new(DEFAULT_ROUTES.iter().copied().chain(overrides))
    }

    /// Exact alias lookup.
    #[inline]
    pub fn lookup(&self, alias: &str) -> Option<&str> {
        self.exact.get(alias).map(String::as_str)
    }

    /// Lookup ignoring leading slashes and separator style.
    #[inline]
    pub fn lookup_normalized(&self, path: &str) -> Option<&str> {
        self.normalized
            .get(&normalize_alias(path))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }
}

fn normalize_alias(alias: &str) -> String {
    to_url_path(strip_leading_slashes(alias))
}
