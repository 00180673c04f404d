// ============================================================
// Layer 4 — Split File Writer
// ============================================================
// The inverse of SplitFileLoader: writes a Dataset out as
// `<split>.context`, `<split>.question` and `<split>.answer`,
// one record per line, newline-terminated.
//
// Used by the `split` command to materialise the val/test/train
// subsets so other tools can read them as ordinary splits.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::loader::{ANSWER_EXT, CONTEXT_EXT, QUESTION_EXT};
use crate::domain::dataset::Dataset;

pub struct SplitFileWriter {
    dir: PathBuf,
}

impl SplitFileWriter {
    /// Create a writer for `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write the three column files for `split`, replacing any existing ones.
    pub fn write(&self, split: &str, dataset: &Dataset) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create directory '{}'", self.dir.display()))?;

        for (ext, column) in [
            (CONTEXT_EXT, dataset.contexts()),
            (QUESTION_EXT, dataset.questions()),
            (ANSWER_EXT, dataset.answers()),
        ] {
            let path = self.dir.join(format!("{split}.{ext}"));
            let mut body = String::new();
            for line in column {
                body.push_str(line);
                body.push('\n');
            }
            fs::write(&path, body)
                .with_context(|| format!("Cannot write '{}'", path.display()))?;
        }

        tracing::debug!(
            "Wrote {} records as split '{}' to '{}'",
            dataset.len(),
            split,
            self.dir.display()
        );
        Ok(())
    }
}
