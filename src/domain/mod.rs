// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing the data the
// tool works on. No file I/O and no scoring logic live here.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One (passage, question, answer) triple
pub mod record;

// Three aligned columns of records
pub mod dataset;

// Typed failures reported by the core
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
