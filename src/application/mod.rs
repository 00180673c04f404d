// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: each use case wires the data,
// ml and infra layers together for one command. No scoring
// logic and no printing happen here.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Partition a split and write the subsets to disk
pub mod split_use_case;

// Partition, then run and score the phrase-overlap baseline
pub mod baseline_use_case;
