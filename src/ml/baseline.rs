// ============================================================
// Layer 5 — Phrase-Overlap Baseline Predictor
// ============================================================
// For every (passage, question, answer) record:
//
//   1. split the passage into phrases on . ; , ( )
//   2. count how many words of each phrase occur in the question
//   3. keep the phrase with the strictly highest count
//      (ties go to the earliest phrase; before any positive
//       count the prediction is the empty string)
//   4. score that phrase against the gold answer
//
// and finally average each metric across the dataset.
//
// A record whose prediction or gold answer has no words cannot
// be scored. DegeneratePolicy decides what happens then:
//   Zero  → the record scores 0.0 on every metric and is counted
//   Abort → the whole run fails with DegenerateInput
//
// Per-record diagnostics go to tracing at debug/trace level.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::data::phrases::split_phrases;
use crate::domain::dataset::Dataset;
use crate::domain::error::BaselineError;
use crate::infra::metrics::{AggregateMetrics, RecordMetrics};
use crate::ml::scorer::{count_common_words, OverlapScores};

/// What to do with a record whose overlap ratio would divide by zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    #[default]
    Zero,
    Abort,
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegeneratePolicy::Zero  => f.write_str("zero"),
            DegeneratePolicy::Abort => f.write_str("abort"),
        }
    }
}

impl FromStr for DegeneratePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero"  => Ok(DegeneratePolicy::Zero),
            "abort" => Ok(DegeneratePolicy::Abort),
            other   => Err(format!("unknown degenerate policy '{other}' (expected zero or abort)")),
        }
    }
}

/// Everything one baseline run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineReport {
    pub aggregate: AggregateMetrics,
    pub records:   Vec<RecordMetrics>,
}

/// Return the phrase of `passage` sharing the most words with
/// `question`, together with its overlap count.
pub fn best_phrase<'a>(passage: &'a str, question: &str) -> (&'a str, usize) {
    let mut best       = "";
    let mut best_count = 0usize;

    for phrase in split_phrases(passage) {
        let count = count_common_words(question, phrase);
        if count > best_count {
            best_count = count;
            best       = phrase;
        }
    }

    (best, best_count)
}

pub struct BaselinePredictor {
    policy: DegeneratePolicy,
}

impl BaselinePredictor {
    pub fn new(policy: DegeneratePolicy) -> Self {
        Self { policy }
    }

    /// Predict and score every record of `dataset`, in order.
    ///
    /// # Errors
    /// `EmptyDataset` for an empty dataset; `DegenerateInput` (with
    /// the record index) under `DegeneratePolicy::Abort`.
    pub fn predict(&self, dataset: &Dataset) -> Result<BaselineReport, BaselineError> {
        if dataset.is_empty() {
            return Err(BaselineError::EmptyDataset);
        }

        let mut records = Vec::with_capacity(dataset.len());

        for (index, record) in dataset.iter().enumerate() {
            tracing::trace!("Record {index} passage: {}", record.context);
            tracing::trace!("Record {index} phrases: {:?}", split_phrases(record.context));

            let (predicted, overlap) = best_phrase(record.context, record.question);
            tracing::debug!(
                "Record {index}: picked {:?} ({overlap} words shared with question)",
                predicted
            );

            let (scores, degenerate) = match OverlapScores::compute(predicted, record.answer) {
                Ok(scores) => (scores, false),
                Err(err) => match self.policy {
                    DegeneratePolicy::Abort => return Err(err.at_record(index)),
                    DegeneratePolicy::Zero => {
                        tracing::warn!("Scoring record {index} as zero: {err}");
                        (OverlapScores::ZERO, true)
                    }
                },
            };

            records.push(RecordMetrics {
                index,
                predicted: predicted.to_string(),
                scores,
                degenerate,
            });
        }

        let aggregate = AggregateMetrics::from_records(&records)?;
        tracing::info!(
            "Baseline over {} records: over_correct={:.4}, over_predicted={:.4}, average={:.4}",
            aggregate.records,
            aggregate.mean_over_correct,
            aggregate.mean_over_predicted,
            aggregate.mean_average,
        );

        Ok(BaselineReport { aggregate, records })
    }
}
