// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Output written after a run:
//
//   run_store.rs — JSON persistence of the effective config,
//                  the partition (seed + indices) and the
//                  aggregate summary; loads saved configs back
//
//   metrics.rs   — per-record and aggregate baseline metrics,
//                  plus the records.csv logger
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Run configuration, partition and summary persistence
pub mod run_store;

/// Baseline metrics and CSV logging
pub mod metrics;
