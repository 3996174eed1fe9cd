//! Broken/fixed link accumulator and its console rendering.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::{plural_count, plural_s};

/// One unresolved link seen while rewriting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// Normalized url path the link pointed at.
    pub link: String,
    /// A placeholder was (or will be) provisioned for it.
    pub fixed: bool,
}

/// Unresolved links grouped by source document.
///
/// Created empty per run and threaded through the traversal explicitly.
#[derive(Debug, Default)]
pub struct LinkReport {
    broken: BTreeMap<String, Vec<LinkRecord>>,
}

impl LinkReport {
    /// Record an unresolved link found in `source`.
    ///
    /// A link already recorded for the same source is kept once; several
    /// rules may resolve the same href while rewriting one document.
    pub fn record(&mut self, source: &str, link: String, fixed: bool) {
        let links = self.broken.entry(source.to_string()).or_default();
        if !links.iter().any(|r| r.link == link) {
            links.push(LinkRecord { link, fixed });
        }
    }

    /// Records for one source document.
    pub fn links_for(&self, source: &str) -> &[LinkRecord] {
        self.broken.get(source).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Count of documents with at least one unresolved link.
    pub fn file_count(&self) -> usize {
        self.broken.len()
    }

    /// Links still broken after provisioning.
    pub fn broken_count(&self) -> usize {
        self.records().filter(|r| !r.fixed).count()
    }

    /// Links resolved by provisioning a placeholder.
    pub fn fixed_count(&self) -> usize {
        self.records().filter(|r| r.fixed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.broken.is_empty()
    }

    fn records(&self) -> impl Iterator<Item = &LinkRecord> {
        self.broken.values().flatten()
    }

    /// Print the grouped report to stderr.
    pub fn print(&self) {
        if self.broken.is_empty() {
            return;
        }
        eprintln!();
        eprintln!(
            "{} {}",
            "links".yellow().bold(),
            format!(
                "(broken links in {})",
                plural_count(self.file_count(), "file")
            )
            .dimmed()
        );

        for (source, links) in &self.broken {
            eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
            for record in links {
                if record.fixed {
                    eprintln!("{} {}", "✓".green(), record.link);
                } else {
                    eprintln!("{} {}", "✗".red(), record.link);
                }
            }
        }
        eprintln!();
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", "no broken links found".green());
        }

        let broken = self.broken_count();
        let fixed = self.fixed_count();
        write!(
            f,
            "{} {} {}, {} {}",
            "found".dimmed(),
            broken.to_string().red().bold(),
            format!("broken link{}", plural_s(broken)).dimmed(),
            fixed.to_string().green().bold(),
            "provisioned".dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_groups_by_source() {
        let mut report = LinkReport::default();
        report.record("index.html", "safety/bloodwork/index.html".into(), false);
        report.record("index.html", "health/index.html".into(), true);
        report.record("guides/index.html", "nowhere/index.html".into(), false);

        assert_eq!(report.file_count(), 2);
        assert_eq!(report.broken_count(), 2);
        assert_eq!(report.fixed_count(), 1);
        assert_eq!(report.links_for("index.html").len(), 2);
        assert!(report.links_for("missing.html").is_empty());
    }

    #[test]
    fn test_duplicate_link_recorded_once() {
        let mut report = LinkReport::default();
        report.record("a.html", "x/index.html".into(), false);
        report.record("a.html", "x/index.html".into(), false);
        report.record("b.html", "x/index.html".into(), false);
        assert_eq!(report.links_for("a.html").len(), 1);
        assert_eq!(report.broken_count(), 2);
    }

    #[test]
    fn test_order_within_source_preserved() {
        let mut report = LinkReport::default();
        report.record("a.html", "z/index.html".into(), false);
        report.record("a.html", "b/index.html".into(), false);
        let links: Vec<_> = report.links_for("a.html").iter().map(|r| r.link.as_str()).collect();
        assert_eq!(links, vec!["z/index.html", "b/index.html"]);
    }

    #[test]
    fn test_display_summary() {
        owo_colors::set_override(false);
        assert_eq!(LinkReport::default().to_string(), "no broken links found");

        let mut report = LinkReport::default();
        report.record("a.html", "x/index.html".into(), false);
        report.record("a.html", "health/index.html".into(), true);
        assert_eq!(report.to_string(), "found 1 broken link, 1 provisioned");
    }
}
