// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the split files on disk and the records
// the baseline predictor reads:
//
//   <split>.context / .question / .answer
//       │
//       ▼
//   SplitFileLoader   → reads the three columns into a Dataset
//       │
//       ▼
//   partitioner       → draws val/test, leaves train
//       │
//       ├──► SplitFileWriter → writes each subset back to disk
//       │
//       ▼
//   phrases           → splits a passage into candidate answers
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads a split from line-delimited files
pub mod loader;

/// Writes a dataset back out as line-delimited files
pub mod writer;

/// Random validation/test/train partitioning
pub mod partitioner;

/// Delimiter-based phrase splitting
pub mod phrases;
