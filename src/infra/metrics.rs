// ============================================================
// Layer 6 — Baseline Metrics
// ============================================================
// Per-record scores, their dataset-wide means, and a CSV logger
// that writes one row per scored record.
//
// Output file: <output_dir>/records.csv
//
// Example CSV output:
//   index,source_index,over_correct,over_predicted,average,degenerate
//   0,3,1.000000,0.250000,0.625000,false
//   1,7,0.000000,0.000000,0.000000,true
//   ...
//
// `index` is the position within the evaluated subset,
// `source_index` the line number in the original split files.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::error::BaselineError;
use crate::ml::scorer::OverlapScores;

/// Scores for one record of the evaluated dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMetrics {
    /// Position of the record in the evaluated dataset
    pub index: usize,

    /// The phrase the baseline picked as its answer
    pub predicted: String,

    pub scores: OverlapScores,

    /// True if the record scored zero because an operand had no words
    pub degenerate: bool,
}

/// Arithmetic means of every per-record metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub records:             usize,
    pub degenerate:          usize,
    pub mean_over_correct:   f64,
    pub mean_over_predicted: f64,
    pub mean_average:        f64,
}

impl AggregateMetrics {
    /// Average the per-record scores.
    ///
    /// # Errors
    /// `EmptyDataset` when `records` is empty.
    pub fn from_records(records: &[RecordMetrics]) -> Result<Self, BaselineError> {
        if records.is_empty() {
            return Err(BaselineError::EmptyDataset);
        }

        let n = records.len() as f64;
        let mean = |metric: fn(&OverlapScores) -> f64| {
            records.iter().map(|r| metric(&r.scores)).sum::<f64>() / n
        };

        Ok(Self {
            records:             records.len(),
            degenerate:          records.iter().filter(|r| r.degenerate).count(),
            mean_over_correct:   mean(|s: &OverlapScores| s.over_correct),
            mean_over_predicted: mean(|s: &OverlapScores| s.over_predicted),
            mean_average:        mean(|s: &OverlapScores| s.average),
        })
    }
}

/// Writes per-record metrics to a CSV file.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    pub const FILE_NAME: &'static str = "records.csv";

    /// Create a logger writing to `<dir>/records.csv`.
    /// Creates the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;
        Ok(Self { csv_path: dir.join(Self::FILE_NAME) })
    }

    /// Write the header and one row per record, replacing any previous file.
    ///
    /// `source_indices[i]` is the original line of `records[i]`;
    /// a missing entry is written as an empty field.
    pub fn log_records(&self, records: &[RecordMetrics], source_indices: &[usize]) -> Result<()> {
        let file = File::create(&self.csv_path)
            .with_context(|| format!("Cannot create '{}'", self.csv_path.display()))?;
        let mut f = BufWriter::new(file);

        writeln!(f, "index,source_index,over_correct,over_predicted,average,degenerate")?;
        for m in records {
            let source = source_indices
                .get(m.index)
                .map(|i| i.to_string())
                .unwrap_or_default();
            writeln!(
                f,
                "{},{},{:.6},{:.6},{:.6},{}",
                m.index,
                source,
                m.scores.over_correct,
                m.scores.over_predicted,
                m.scores.average,
                m.degenerate,
            )?;
        }
        f.flush()?;

        tracing::debug!(
            "Logged {} record metrics to '{}'",
            records.len(),
            self.csv_path.display()
        );
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
