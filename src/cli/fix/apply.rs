//! Apply pass: persist placeholders and rewritten documents.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::scan::Plan;
use crate::{debug, log};

/// What the apply pass wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub provisioned: usize,
    pub rewritten: usize,
}

/// Write everything the plan collected under `root`.
///
/// Placeholders go first and never replace an existing file.
pub fn apply(root: &Path, plan: &Plan) -> Result<Applied> {
    let mut applied = Applied::default();

    for placeholder in plan.state.placeholders() {
        let path = root.join(&placeholder.url_path);
        if path.exists() {
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, placeholder.render())
            .with_context(|| format!("failed to write placeholder {}", path.display()))?;
        log!("provision"; "{}", placeholder.url_path);
        applied.provisioned += 1;
    }

    for doc in &plan.rewritten {
        fs::write(&doc.path, &doc.content)
            .with_context(|| format!("failed to write {}", doc.path.display()))?;
        debug!("fix"; "rewrote {}", doc.source);
        applied.rewritten += 1;
    }

    Ok(applied)
}
