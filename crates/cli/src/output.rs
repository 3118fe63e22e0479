//! Writing artifacts to disk and comparing them with what is already there.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use console::style;
use similar::{ChangeTag, TextDiff};
use tgtypes_core::{Artifact, Artifacts};
use tracing::debug;

/// Write every artifact into `out_dir`, creating it if needed.
///
/// Returns the written paths in write order.
pub(crate) async fn write_artifacts(
    out_dir: &Path,
    artifacts: &Artifacts,
    extension: &str,
) -> Result<Vec<PathBuf>, String> {
    tokio::fs::create_dir_all(out_dir).await.map_err(|err| {
        format!(
            "Failed to create output directory {}: {err}",
            out_dir.display()
        )
    })?;

    let mut written = Vec::new();
    for (artifact, text) in artifacts.iter() {
        let path = out_dir.join(artifact.file_name(extension));
        tokio::fs::write(&path, text)
            .await
            .map_err(|err| format!("Failed to write {}: {err}", path.display()))?;
        debug!(path = %path.display(), bytes = text.len(), "Wrote artifact.");
        written.push(path);
    }
    Ok(written)
}

/// An artifact whose file on disk does not match the generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StaleFile {
    pub artifact: Artifact,
    pub path: PathBuf,
    /// `None` when the file does not exist.
    pub existing: Option<String>,
    pub generated: String,
}

impl StaleFile {
    /// Unified diff from the file on disk to the generated text.
    pub(crate) fn render_diff(&self) -> String {
        let name = self.path.display();
        let existing = self.existing.as_deref().unwrap_or_default();
        let diff = TextDiff::from_lines(existing, self.generated.as_str());

        let mut output = String::new();
        let current = if self.existing.is_some() {
            format!("--- {name} (current)")
        } else {
            format!("--- {name} (missing)")
        };
        output.push_str(&format!("{}\n", style(current).bold()));
        output.push_str(&format!("{}\n", style(format!("+++ {name} (generated)")).bold()));

        for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
            if idx > 0 {
                output.push_str("...\n");
            }
            for op in group {
                for change in diff.iter_changes(op) {
                    let line = match change.tag() {
                        ChangeTag::Delete => style(format!("-{}", change.value())).red(),
                        ChangeTag::Insert => style(format!("+{}", change.value())).green(),
                        ChangeTag::Equal => style(format!(" {}", change.value())),
                    };
                    output.push_str(&line.to_string());
                    if change.missing_newline() {
                        output.push('\n');
                    }
                }
            }
        }
        output
    }
}

/// Artifacts in `out_dir` that are missing or differ from `artifacts`.
pub(crate) async fn stale_files(
    out_dir: &Path,
    artifacts: &Artifacts,
    extension: &str,
) -> Result<Vec<StaleFile>, String> {
    let mut stale = Vec::new();
    for (artifact, text) in artifacts.iter() {
        let path = out_dir.join(artifact.file_name(extension));
        let existing = match tokio::fs::read_to_string(&path).await {
            Ok(existing) => Some(existing),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => return Err(format!("Failed to read {}: {err}", path.display())),
        };
        if existing.as_deref() == Some(text) {
            continue;
        }
        debug!(path = %path.display(), missing = existing.is_none(), "Artifact is stale.");
        stale.push(StaleFile {
            artifact,
            path,
            existing,
            generated: text.to_string(),
        });
    }
    Ok(stale)
}
