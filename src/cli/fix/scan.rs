//! Plan pass: read and rewrite every document in memory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;

use crate::address::{RequiredPaths, ResolveState, Resolver, RouteTable};
use crate::config::RelinkConfig;
use crate::debug;
use crate::pipeline::{RewriteContext, RewritePipeline};
use crate::utils::path::relative_display;

/// A document whose rewritten content differs from what is on disk.
#[derive(Debug)]
pub struct Rewritten {
    pub path: PathBuf,
    /// Path relative to the output root.
    pub source: String,
    pub content: String,
}

/// Outcome of the read-only pass.
#[derive(Debug, Default)]
pub struct Plan {
    /// Number of documents read.
    pub scanned: usize,
    pub rewritten: Vec<Rewritten>,
    pub state: ResolveState,
}

/// Collect documents with `ext` under `root`, hidden entries skipped, in path order.
///
/// Any directory that cannot be read fails the walk.
pub fn collect_documents(root: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("output root {} is not a directory", root.display());
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(root).skip_hidden(true).sort(true) {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|e| e == ext) {
            documents.push(path);
        }
    }
    Ok(documents)
}

/// Rewrite every document under the configured root without writing.
///
/// Required sections are seeded first so that links into them count as
/// present from the first document on.
pub fn plan(config: &RelinkConfig) -> Result<Plan> {
    let root = config.root();
    let routes = RouteTable::from_config(config);
    let required = RequiredPaths::from_config(config);
    let pipeline = RewritePipeline::from_config(config)?;
    let resolver = Resolver::new(root, &routes, &required, &config.build);
    debug!("plan"; "{} routes, {} required sections, {} rules",
        routes.len(), required.len(), pipeline.rule_names().count());

    let mut plan = Plan::default();
    plan.state
        .seed_required(root, &required, &config.build.index_file());

    for path in collect_documents(root, &config.build.output_ext)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let source = relative_display(&path, root);

        let mut cx = RewriteContext {
            resolver,
            source: &source,
            state: &mut plan.state,
        };
        let rewritten = pipeline.rewrite(&content, &mut cx);

        plan.scanned += 1;
        if rewritten != content {
            plan.rewritten.push(Rewritten {
                path,
                source,
                content: rewritten,
            });
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Output root below the temp dir; the temp dir's own name is hidden.
    fn site(temp: &TempDir) -> PathBuf {
        let root = temp.path().join("site");
        fs::create_dir_all(&root).unwrap();
        root
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_collect_documents_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        let root = site(&temp);
        write(&root, "b/index.html", "");
        write(&root, "a.html", "");
        write(&root, "style.css", "");
        write(&root, ".cache/x.html", "");

        let files: Vec<_> = collect_documents(&root, "html")
            .unwrap()
            .iter()
            .map(|p| relative_display(p, &root))
            .collect();
        assert_eq!(files, ["a.html", "b/index.html"]);
    }

    #[test]
    fn test_unreadable_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        assert!(collect_documents(&missing, "html").is_err());

        let mut config = RelinkConfig::default();
        config.root = missing;
        let err = plan(&config).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn test_plan_keeps_only_changed_documents() {
        let temp = TempDir::new().unwrap();
        let root = site(&temp);
        write(&root, "index.html", r#"<a href="/safety/pct">PCT</a>"#);
        write(&root, "about.html", r#"<a href="https://example.com">x</a>"#);

        let mut config = RelinkConfig::default();
        config.root = root.clone();
        let plan = plan(&config).unwrap();

        assert_eq!(plan.scanned, 2);
        assert_eq!(plan.rewritten.len(), 1);
        assert_eq!(plan.rewritten[0].source, "index.html");
        assert_eq!(
            plan.rewritten[0].content,
            r#"<a href="safety/pct">PCT</a>"#
        );
        // Nothing written during planning
        assert!(!root.join("health").exists());
        assert_eq!(
            fs::read_to_string(root.join("index.html")).unwrap(),
            r#"<a href="/safety/pct">PCT</a>"#
        );
    }

    #[test]
    fn test_plan_seeds_required_sections() {
        let temp = TempDir::new().unwrap();
        let mut config = RelinkConfig::default();
        config.root = site(&temp);
        config.provision.required = Some(vec!["health".into(), "training".into()]);

        let plan = plan(&config).unwrap();
        assert_eq!(plan.scanned, 0);
        assert_eq!(plan.state.placeholder_count(), 2);
        assert!(plan.state.is_pending("health/index.html"));
    }
}
