// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// One (passage, question, answer) triple from a SQuAD-style split.
//
// A record has no identity of its own: it is identified by its
// position in the parallel context/question/answer files it was
// loaded from.
//
// Example:
//   Context:  "Bobby ate a sandwich, quickly."
//   Question: "Who ate a sandwich ?"
//   Answer:   "Bobby"
//
// Reference: Rust Book §5 (Structs)
//            Rust Book §10 (Lifetimes)

use serde::{Deserialize, Serialize};

/// An owned question-answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The passage the answer is drawn from
    pub context: String,

    /// The question asked about the passage
    pub question: String,

    /// The gold answer text
    pub answer: String,
}

impl Record {
    pub fn new(
        context:  impl Into<String>,
        question: impl Into<String>,
        answer:   impl Into<String>,
    ) -> Self {
        Self {
            context:  context.into(),
            question: question.into(),
            answer:   answer.into(),
        }
    }
}

/// A borrowed view of one record inside a `Dataset`.
/// Iterating a dataset hands these out so no strings are copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRef<'a> {
    pub context:  &'a str,
    pub question: &'a str,
    pub answer:   &'a str,
}

impl RecordRef<'_> {
    /// Copy the borrowed fields into an owned `Record`
    pub fn to_owned_record(&self) -> Record {
        Record::new(self.context, self.question, self.answer)
    }
}
