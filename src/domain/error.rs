// ============================================================
// Layer 3 — Core Error Type
// ============================================================
// Every failure the partitioner, scorer and predictor can report.
// The application layer wraps these in anyhow::Error with extra
// context; the core never logs-and-continues on any of them.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side of an overlap ratio had no words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    Predicted,
    Correct,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Predicted => f.write_str("predicted"),
            Operand::Correct   => f.write_str("correct"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BaselineError {
    /// The context, question and answer columns have different lengths.
    #[error(
        "data consistency error: {contexts} contexts, {questions} questions \
         and {answers} answers do not line up"
    )]
    DataConsistency {
        contexts:  usize,
        questions: usize,
        answers:   usize,
    },

    /// More validation + test records were requested than exist.
    #[error(
        "sample range error: {requested} records requested for validation and test, \
         only {available} available"
    )]
    SampleRange { requested: usize, available: usize },

    /// A word-overlap ratio would divide by zero.
    #[error("degenerate input: {operand} answer has no words{}", record_suffix(.record))]
    DegenerateInput {
        operand: Operand,
        record:  Option<usize>,
    },

    /// Aggregate metrics were requested over zero records.
    #[error("cannot aggregate metrics over an empty dataset")]
    EmptyDataset,
}

impl BaselineError {
    /// Attach a record index to a `DegenerateInput` error.
    /// Other variants are returned unchanged.
    pub fn at_record(self, index: usize) -> Self {
        match self {
            BaselineError::DegenerateInput { operand, .. } => {
                BaselineError::DegenerateInput { operand, record: Some(index) }
            }
            other => other,
        }
    }
}

fn record_suffix(record: &Option<usize>) -> String {
    record.map(|i| format!(" (record {i})")).unwrap_or_default()
}
