//! Fix command: rewrite links and provision placeholder pages.
//!
//! Runs in two passes. [`scan::plan`] reads and rewrites every document in
//! memory and collects the link report; [`apply::apply`] then writes. `check`
//! stops after the first pass.

mod apply;
mod scan;

use anyhow::Result;

use crate::config::RelinkConfig;
use crate::utils::plural_count;
use crate::{debug, log};

pub use apply::Applied;

/// Run `fix`, or `check` when `dry_run` is set.
pub fn run(config: &RelinkConfig, dry_run: bool) -> Result<Applied> {
    let module = if dry_run { "check" } else { "fix" };
    let root = config.root();

    let plan = scan::plan(config)?;
    if plan.scanned == 0 {
        log!(module; "no .{} files found in {}", config.build.output_ext, root.display());
    } else {
        log!(module; "scanned {}", plural_count(plan.scanned, "document"));
    }

    let applied = if dry_run {
        for doc in &plan.rewritten {
            debug!("check"; "would rewrite {}", doc.source);
        }
        for placeholder in plan.state.placeholders() {
            debug!("check"; "would provision {}", placeholder.url_path);
        }
        log!("check"; "{} to rewrite, {} to provision",
            plural_count(plan.rewritten.len(), "document"),
            plural_count(plan.state.placeholder_count(), "placeholder"));
        Applied::default()
    } else {
        let applied = apply::apply(root, &plan)?;
        log!("fix"; "rewrote {}, provisioned {}",
            plural_count(applied.rewritten, "document"),
            plural_count(applied.provisioned, "placeholder"));
        applied
    };

    plan.state.report.print();
    log!(module; "{}", plan.state.report);
    log!(module; "link fixing complete");

    Ok(applied)
}
