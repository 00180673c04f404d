// ============================================================
// Layer 3 — Dataset
// ============================================================
// An ordered sequence of records, stored as three aligned columns
// (contexts, questions, answers) exactly as they come off disk.
//
// Invariant: all three columns have the same length.
// The only way to build a Dataset from raw columns is
// `from_columns`, which rejects mismatched lengths with
// BaselineError::DataConsistency.
//
// Reference: Rust Book §8 (Vectors)
//            Rust Book §9 (Recoverable Errors with Result)

use crate::domain::error::BaselineError;
use crate::domain::record::{Record, RecordRef};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    contexts:  Vec<String>,
    questions: Vec<String>,
    answers:   Vec<String>,
}

impl Dataset {
    /// Build a dataset from three parallel columns.
    pub fn from_columns(
        contexts:  Vec<String>,
        questions: Vec<String>,
        answers:   Vec<String>,
    ) -> Result<Self, BaselineError> {
        if contexts.len() != questions.len() || contexts.len() != answers.len() {
            return Err(BaselineError::DataConsistency {
                contexts:  contexts.len(),
                questions: questions.len(),
                answers:   answers.len(),
            });
        }
        Ok(Self { contexts, questions, answers })
    }

    /// Build a dataset from owned records. Always consistent.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut dataset = Self::default();
        for r in records {
            dataset.contexts.push(r.context);
            dataset.questions.push(r.question);
            dataset.answers.push(r.answer);
        }
        dataset
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Borrow the record at `index`, if present
    pub fn get(&self, index: usize) -> Option<RecordRef<'_>> {
        Some(RecordRef {
            context:  self.contexts.get(index)?,
            question: self.questions.get(index)?,
            answer:   self.answers.get(index)?,
        })
    }

    /// Iterate records in dataset order
    pub fn iter(&self) -> impl Iterator<Item = RecordRef<'_>> + '_ {
        self.contexts
            .iter()
            .zip(&self.questions)
            .zip(&self.answers)
            .map(|((context, question), answer)| RecordRef { context, question, answer })
    }

    /// Copy the records at `indices`, in the order given.
    /// Indices past the end are skipped.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset::from_records(
            indices
                .iter()
                .filter_map(|&i| self.get(i))
                .map(|r| r.to_owned_record()),
        )
    }

    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }
}
