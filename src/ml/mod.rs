// ============================================================
// Layer 5 — Prediction and Scoring
// ============================================================
//   scorer.rs   — word-overlap ratios between two answers
//
//   baseline.rs — the phrase-overlap baseline: picks the passage
//                 phrase closest to the question and scores it
//                 against the gold answer over a whole dataset
//
// Both are pure, synchronous computations over in-memory data.

/// Word-overlap metrics
pub mod scorer;

/// Phrase-overlap baseline predictor
pub mod baseline;
