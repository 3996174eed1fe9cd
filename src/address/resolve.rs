//! Path resolution: raw href -> canonical url path.
//!
//! Resolution never fails. Every input degrades to a best-effort url path;
//! targets that do not exist are recorded in the [`LinkReport`], and targets
//! under a required section get a [`Placeholder`] scheduled.

use std::collections::BTreeMap;
use std::path::Path;

use super::{LinkReport, Placeholder, RequiredPaths, RouteTable};
use crate::config::BuildConfig;
use crate::debug;
use crate::utils::path::route::{strip_leading_slashes, strip_query_fragment, to_url_path};

// ============================================================================
// Resolve State
// ============================================================================

/// Mutable state threaded through one run.
#[derive(Debug, Default)]
pub struct ResolveState {
    /// Unresolved links per source document.
    pub report: LinkReport,
    /// Placeholders to write, keyed by url path.
    pending: BTreeMap<String, Placeholder>,
}

impl ResolveState {
    /// Schedule an index placeholder for every required section lacking one.
    pub fn seed_required(&mut self, root: &Path, required: &RequiredPaths, index_file: &str) {
        for dir in required.iter() {
            let url_path = format!("{dir}/{index_file}");
            if !root.join(&url_path).exists() {
                self.schedule(Placeholder::for_url(&url_path, index_file));
            }
        }
    }

    /// Check if `url_path` will be created by this run.
    #[inline]
    pub fn is_pending(&self, url_path: &str) -> bool {
        self.pending.contains_key(url_path)
    }

    /// Schedule a placeholder; the first one scheduled for a path wins.
    pub fn schedule(&mut self, placeholder: Placeholder) {
        self.pending
            .entry(placeholder.url_path.clone())
            .or_insert(placeholder);
    }

    /// Scheduled placeholders in path order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.pending.values()
    }

    pub fn placeholder_count(&self) -> usize {
        self.pending.len()
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Resolves hrefs against the route table and the output tree.
///
/// Holds only borrowed, immutable context; all mutation goes through the
/// [`ResolveState`] passed to [`resolve`](Self::resolve).
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    root: &'a Path,
    routes: &'a RouteTable,
    required: &'a RequiredPaths,
    output_ext: &'a str,
    template_ext: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(
        root: &'a Path,
        routes: &'a RouteTable,
        required: &'a RequiredPaths,
        build: &'a BuildConfig,
    ) -> Self {
        Self {
            root,
            routes,
            required,
            output_ext: &build.output_ext,
            template_ext: &build.template_ext,
        }
    }

    pub fn routes(&self) -> &'a RouteTable {
        self.routes
    }

    /// `index.<output_ext>`
    pub fn index_file(&self) -> String {
        format!("index.{}", self.output_ext)
    }

    /// Normalize a raw href into a url path without touching the disk.
    ///
    /// 1. strip query string and fragment, use forward slashes
    /// 2. replace an exact route alias with its canonical path
    /// 3. map template/extensionless/trailing-slash paths to index documents
    /// 4. strip leading slashes
    pub fn normalize(&self, raw: &str) -> String {
        let path = to_url_path(strip_query_fragment(raw));
        let path = self.routes.lookup(&path).unwrap_or(path.as_str());
        let document = self.to_document_path(path);
        strip_leading_slashes(&document).to_string()
    }

    /// Normalize `raw` and check it against the output tree.
    ///
    /// Missing targets are recorded against `source`; when the target lies
    /// under a required section a placeholder is scheduled and the record
    /// is marked fixed. Returns the url path either way.
    pub fn resolve(&self, raw: &str, source: &str, state: &mut ResolveState) -> String {
        let url_path = self.normalize(raw);

        if self.root.join(&url_path).exists() || state.is_pending(&url_path) {
            return url_path;
        }

        let fixed = self.required.covers(&url_path);
        if fixed {
            state.schedule(Placeholder::for_url(&url_path, &self.index_file()));
        }
        debug!("resolve"; "{} -> {} ({})", raw, url_path,
            if fixed { "provisioned" } else { "broken" });
        state.report.record(source, url_path.clone(), fixed);

        url_path
    }

    /// Extension-based routing to a concrete document path.
    ///
    /// - `guides/pct.astro` -> `guides/pct/index.html`
    /// - `guides/index.astro` -> `guides/index.html`
    /// - `guides/pct/` -> `guides/pct/index.html`
    /// - `guides/pct` -> `guides/pct/index.html`
    /// - `guides/pct.html` -> unchanged
    fn to_document_path(&self, path: &str) -> String {
        let index = self.index_file();

        if let Some(stem) = path
            .strip_suffix(self.template_ext)
            .and_then(|p| p.strip_suffix('.'))
        {
            return match stem.rsplit_once('/') {
                Some((dir, "index")) => format!("{dir}/{index}"),
                None if stem == "index" => index,
                _ => format!("{stem}/{index}"),
            };
        }

        if path.ends_with('/') {
            return format!("{path}{index}");
        }

        let has_output_ext = path
            .strip_suffix(self.output_ext)
            .is_some_and(|p| p.ends_with('.'));
        if has_output_ext {
            path.to_string()
        } else {
            format!("{path}/{index}")
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::DEFAULT_ROUTES;
    use crate::config::section::DEFAULT_REQUIRED_PATHS;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        temp: TempDir,
        routes: RouteTable,
        required: RequiredPaths,
        build: BuildConfig,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                temp: TempDir::new().unwrap(),
                routes: RouteTable::builtin(),
                required: RequiredPaths::new(DEFAULT_REQUIRED_PATHS.iter().copied()),
                build: BuildConfig::default(),
            }
        }

        fn resolver(&self) -> Resolver<'_> {
            Resolver::new(self.temp.path(), &self.routes, &self.required, &self.build)
        }

        fn touch(&self, rel: &str) {
            let path = self.temp.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "<html></html>").unwrap();
        }
    }

    #[test]
    fn test_extension_normalization() {
        let fx = Fixture::new();
        let r = fx.resolver();
        assert_eq!(r.normalize("/guides/first-cycle"), "guides/first-cycle/index.html");
        assert_eq!(r.normalize("/safety/pct/"), "safety/pct/index.html");
        assert_eq!(r.normalize("page.html"), "page.html");
        assert_eq!(r.normalize("/guides/dosing"), "guides/dosing/index.html");
    }

    #[test]
    fn test_template_extension() {
        let fx = Fixture::new();
        let r = fx.resolver();
        assert_eq!(r.normalize("/guides/pct.astro"), "guides/pct/index.html");
        assert_eq!(r.normalize("/guides/index.astro"), "guides/index.html");
        assert_eq!(r.normalize("index.astro"), "index.html");
    }

    #[test]
    fn test_query_and_fragment_stripped() {
        let fx = Fixture::new();
        let r = fx.resolver();
        assert_eq!(r.normalize("/safety/pct?tab=2#top"), "safety/pct/index.html");
        assert_eq!(r.normalize("page.html#section"), "page.html");
    }

    #[test]
    fn test_alias_correctness() {
        let fx = Fixture::new();
        let r = fx.resolver();
        for (alias, canonical) in DEFAULT_ROUTES {
            assert_eq!(r.normalize(alias), r.normalize(canonical), "alias {alias}");
            assert_eq!(r.normalize(alias), *canonical, "alias {alias}");
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let fx = Fixture::new();
        let r = fx.resolver();
        for raw in ["/compounds", "/guides/x/", "a.astro", "", "///", "x.html?y"] {
            let once = r.normalize(raw);
            assert_eq!(r.normalize(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_malformed_input_degrades() {
        let fx = Fixture::new();
        let r = fx.resolver();
        assert_eq!(r.normalize(""), "index.html");
        assert_eq!(r.normalize("/"), "index.html");
        assert_eq!(r.normalize("?#"), "index.html");
        assert_eq!(r.normalize(r"guides\pct\"), "guides/pct/index.html");
    }

    #[test]
    fn test_existing_target_not_reported() {
        let fx = Fixture::new();
        fx.touch("safety/bloodwork/index.html");
        let mut state = ResolveState::default();

        let url = fx.resolver().resolve("/safety/bloodwork", "index.html", &mut state);
        assert_eq!(url, "safety/bloodwork/index.html");
        assert!(state.report.is_empty());
        assert_eq!(state.placeholder_count(), 0);
    }

    #[test]
    fn test_broken_link_reported_not_fixed() {
        let fx = Fixture::new();
        let mut state = ResolveState::default();

        let url = fx.resolver().resolve("/nowhere/page", "index.html", &mut state);
        assert_eq!(url, "nowhere/page/index.html");
        let records = state.report.links_for("index.html");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].link, "nowhere/page/index.html");
        assert!(!records[0].fixed);
        assert_eq!(state.placeholder_count(), 0);
    }

    #[test]
    fn test_required_target_scheduled() {
        let fx = Fixture::new();
        let mut state = ResolveState::default();

        let url = fx
            .resolver()
            .resolve("resources/calculators", "index.html", &mut state);
        assert_eq!(url, "resources/calculators/index.html");
        assert!(state.report.links_for("index.html")[0].fixed);

        let placeholders: Vec<_> = state.placeholders().collect();
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].title, "Calculators");
        // Nothing touches the disk during resolution
        assert!(!fx.temp.path().join("resources").exists());
    }

    #[test]
    fn test_pending_target_counts_as_present() {
        let fx = Fixture::new();
        let mut state = ResolveState::default();
        let r = fx.resolver();

        r.resolve("/health", "a.html", &mut state);
        r.resolve("/health/", "b.html", &mut state);

        assert_eq!(state.report.file_count(), 1);
        assert!(state.report.links_for("b.html").is_empty());
        assert_eq!(state.placeholder_count(), 1);
    }

    #[test]
    fn test_seed_required_skips_existing() {
        let fx = Fixture::new();
        fx.touch("health/index.html");
        let mut state = ResolveState::default();

        state.seed_required(fx.temp.path(), &fx.required, "index.html");

        assert_eq!(state.placeholder_count(), DEFAULT_REQUIRED_PATHS.len() - 1);
        assert!(!state.is_pending("health/index.html"));
        assert!(state.is_pending("legal/terms/index.html"));
        assert!(state.report.is_empty());
    }
}
