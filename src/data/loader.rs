// ============================================================
// Layer 4 — Split File Loader
// ============================================================
// Loads one SQuAD-style split from three line-delimited files:
//
//   <dir>/<split>.context    one passage per line
//   <dir>/<split>.question   one question per line
//   <dir>/<split>.answer     one answer per line
//
// Line N of each file belongs to record N. Lines are already
// tokenised and space-joined (raw words or vocabulary ids; the
// scorer treats tokens as opaque substrings either way).
// Trailing whitespace, including a Windows '\r', is stripped.
//
// Column lengths are checked by Dataset::from_columns, so a
// short file is a DataConsistency error, never a silent truncation.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::dataset::Dataset;
use crate::domain::traits::DatasetSource;

/// Extensions of the three column files, in record-field order
pub const CONTEXT_EXT:  &str = "context";
pub const QUESTION_EXT: &str = "question";
pub const ANSWER_EXT:   &str = "answer";

/// Loads `<split>.{context,question,answer}` from a directory.
pub struct SplitFileLoader {
    dir:   PathBuf,
    split: String,
}

impl SplitFileLoader {
    pub fn new(dir: impl Into<PathBuf>, split: impl Into<String>) -> Self {
        Self { dir: dir.into(), split: split.into() }
    }

    /// Path of one column file for this split
    pub fn column_path(&self, ext: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", self.split, ext))
    }
}

impl DatasetSource for SplitFileLoader {
    fn load(&self) -> Result<Dataset> {
        let contexts  = read_lines(&self.column_path(CONTEXT_EXT))?;
        let questions = read_lines(&self.column_path(QUESTION_EXT))?;
        let answers   = read_lines(&self.column_path(ANSWER_EXT))?;

        let dataset = Dataset::from_columns(contexts, questions, answers)
            .with_context(|| {
                format!(
                    "Split '{}' in '{}' is inconsistent",
                    self.split,
                    self.dir.display()
                )
            })?;

        tracing::info!(
            "Loaded {} records from split '{}' in '{}'",
            dataset.len(),
            self.split,
            self.dir.display()
        );
        Ok(dataset)
    }
}

/// Read a file as one string per line, trailing whitespace removed.
/// A file that is not valid UTF-8 is rejected.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("'{}' is not valid UTF-8", path.display()))?;

    let lines: Vec<String> = text
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();

    tracing::debug!("Read {} lines from '{}'", lines.len(), path.display());
    Ok(lines)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::BaselineError;
    use crate::domain::record::RecordRef;

    fn write_split(dir: &Path, split: &str, context: &str, question: &str, answer: &str) {
        fs::write(dir.join(format!("{split}.context")), context).unwrap();
        fs::write(dir.join(format!("{split}.question")), question).unwrap();
        fs::write(dir.join(format!("{split}.answer")), answer).unwrap();
    }

    #[test]
    fn test_loads_aligned_lines() {
        let dir = tempfile::tempdir().unwrap();
        write_split(
            dir.path(),
            "val",
            "Bobby ate a sandwich , quickly .\nThe sky is blue .\n",
            "Who ate a sandwich ?\nWhat colour is the sky ?\n",
            "Bobby\nblue\n",
        );

        let ds = SplitFileLoader::new(dir.path(), "val").load().unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(
            ds.get(1).unwrap(),
            RecordRef {
                context:  "The sky is blue .",
                question: "What colour is the sky ?",
                answer:   "blue",
            }
        );
    }

    #[test]
    fn test_strips_trailing_whitespace_and_crlf() {
        let dir = tempfile::tempdir().unwrap();
        write_split(dir.path(), "dev", "ctx  \r\n", "q\t\r\n", "ans \r\n");

        let ds = SplitFileLoader::new(dir.path(), "dev").load().unwrap();
        assert_eq!(ds.contexts(), &["ctx"]);
        assert_eq!(ds.questions(), &["q"]);
        assert_eq!(ds.answers(), &["ans"]);
    }

    #[test]
    fn test_mismatched_files_are_a_consistency_error() {
        let dir = tempfile::tempdir().unwrap();
        write_split(dir.path(), "val", "c1\nc2\n", "q1\nq2\n", "a1\n");

        let err = SplitFileLoader::new(dir.path(), "val").load().unwrap_err();
        assert_eq!(
            err.downcast_ref::<BaselineError>(),
            Some(&BaselineError::DataConsistency { contexts: 2, questions: 2, answers: 1 })
        );
    }

    #[test]
    fn test_invalid_utf8_is_rejected_with_path() {
        let dir = tempfile::tempdir().unwrap();
        write_split(dir.path(), "val", "c1\n", "q1\n", "a1\n");
        fs::write(dir.path().join("val.question"), [b'q', 0xff, b'\n']).unwrap();

        let err = SplitFileLoader::new(dir.path(), "val").load().unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("val.question"));
        assert!(msg.contains("not valid UTF-8"));
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = SplitFileLoader::new(dir.path(), "val").load().unwrap_err();
        assert!(format!("{err}").contains("val.context"));
    }
}
