// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams the rest of the system is written against:
//
//   DatasetSource — anything that can produce a Dataset
//                   (split files on disk, an in-memory fixture)
//
//   IndexPicker   — the source of randomness the partitioner
//                   draws from. Every rand::Rng is one, so a
//                   seeded StdRng gives reproducible partitions;
//                   tests can also script the exact draws.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use rand::Rng;

use crate::domain::dataset::Dataset;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can load a full dataset.
///
/// Implementations:
///   - SplitFileLoader → reads `<split>.context/.question/.answer`
pub trait DatasetSource {
    fn load(&self) -> Result<Dataset>;
}

// ─── IndexPicker ──────────────────────────────────────────────────────────────
/// Picks one position out of a pool of `len` candidates.
pub trait IndexPicker {
    /// Return a position in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexPicker for R {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}
