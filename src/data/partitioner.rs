// ============================================================
// Layer 4 — Validation / Test / Train Partitioner
// ============================================================
// Draws a validation set and a test set out of one dataset,
// without replacement, and leaves everything else for training.
//
//   pool = [0, 1, ..., N-1]
//   repeat num_val  times: pick a pool position, remove it → val
//   repeat num_test times: pick a pool position, remove it → test
//   whatever is left in the pool                            → train
//
// Removing from the pool keeps the remaining indices in their
// original order, so:
//   - val and test are in draw order
//   - train is in original dataset order
//
// The random source is an IndexPicker (any rand::Rng). Passing a
// seeded StdRng reproduces the same partition every time.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation (Rng::gen_range)

use serde::{Deserialize, Serialize};

use crate::domain::dataset::Dataset;
use crate::domain::error::BaselineError;
use crate::domain::traits::IndexPicker;

/// Source positions of every record in each subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionIndices {
    pub val:   Vec<usize>,
    pub test:  Vec<usize>,
    pub train: Vec<usize>,
}

/// The three subsets plus the indices they were copied from.
#[derive(Debug, Clone)]
pub struct Partition {
    pub indices: PartitionIndices,
    pub val:     Dataset,
    pub test:    Dataset,
    pub train:   Dataset,
}

/// Partition `dataset` into (val, test, train).
///
/// # Errors
/// `SampleRange` if `num_val + num_test` exceeds the dataset size.
/// The check happens before any draw, so the picker is untouched
/// on failure.
pub fn partition<P: IndexPicker + ?Sized>(
    dataset:  &Dataset,
    num_val:  usize,
    num_test: usize,
    picker:   &mut P,
) -> Result<Partition, BaselineError> {
    let available = dataset.len();
    let requested = num_val.saturating_add(num_test);
    if requested > available {
        return Err(BaselineError::SampleRange { requested, available });
    }

    let mut pool: Vec<usize> = (0..available).collect();
    let val   = draw(&mut pool, num_val, picker)?;
    let test  = draw(&mut pool, num_test, picker)?;
    let train = pool;

    tracing::debug!(
        "Partitioned {} records: {} validation, {} test, {} training",
        available,
        val.len(),
        test.len(),
        train.len(),
    );

    Ok(Partition {
        val:     dataset.select(&val),
        test:    dataset.select(&test),
        train:   dataset.select(&train),
        indices: PartitionIndices { val, test, train },
    })
}

/// Remove `count` indices from `pool`, one uniform pick at a time.
///
/// A pick outside the current pool is a `SampleRange` error naming
/// the position asked for and the pool size at that draw.
fn draw<P: IndexPicker + ?Sized>(
    pool:   &mut Vec<usize>,
    count:  usize,
    picker: &mut P,
) -> Result<Vec<usize>, BaselineError> {
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let pos = picker.pick(pool.len());
        if pos >= pool.len() {
            return Err(BaselineError::SampleRange { requested: pos + 1, available: pool.len() });
        }
        drawn.push(pool.remove(pos));
    }
    Ok(drawn)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::{HashSet, VecDeque};

    /// Replays a fixed list of pool positions
    struct ScriptedPicks(VecDeque<usize>);

    impl IndexPicker for ScriptedPicks {
        fn pick(&mut self, _len: usize) -> usize {
            self.0.pop_front().unwrap_or(0)
        }
    }

    fn numbered(n: usize) -> Dataset {
        Dataset::from_records(
            (0..n).map(|i| Record::new(format!("c{i}"), format!("q{i}"), format!("a{i}"))),
        )
    }

    #[test]
    fn test_sizes_disjoint_and_complete() {
        for (n, num_val, num_test) in [(10, 2, 2), (1, 0, 1), (7, 3, 4), (25, 0, 0), (0, 0, 0)] {
            let ds      = numbered(n);
            let mut rng = StdRng::seed_from_u64(n as u64);
            let p       = partition(&ds, num_val, num_test, &mut rng).unwrap();

            assert_eq!(p.val.len(), num_val);
            assert_eq!(p.test.len(), num_test);
            assert_eq!(p.train.len(), n - num_val - num_test);

            let all: Vec<usize> = p.indices.val.iter()
                .chain(&p.indices.test)
                .chain(&p.indices.train)
                .copied()
                .collect();
            let unique: HashSet<usize> = all.iter().copied().collect();
            assert_eq!(all.len(), n, "no index appears twice");
            assert_eq!(unique, (0..n).collect::<HashSet<_>>());
        }
    }

    #[test]
    fn test_same_seed_same_partition() {
        let ds = numbered(50);
        let a  = partition(&ds, 5, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        let b  = partition(&ds, 5, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.indices, b.indices);
        assert_eq!(a.train, b.train);
    }

    #[test]
    fn test_scripted_draws_follow_draw_order() {
        // pool [0..6]: pick pos 4 → 4, pool [0,1,2,3,5]
        //              pick pos 0 → 0, pool [1,2,3,5]
        //              pick pos 3 → 5, pool [1,2,3]
        let ds         = numbered(6);
        let mut script = ScriptedPicks(VecDeque::from(vec![4, 0, 3]));
        let p          = partition(&ds, 2, 1, &mut script).unwrap();

        assert_eq!(p.indices.val, vec![4, 0]);
        assert_eq!(p.indices.test, vec![5]);
        assert_eq!(p.indices.train, vec![1, 2, 3]);
        assert_eq!(p.val.answers(), &["a4", "a0"]);
        assert_eq!(p.train.contexts(), &["c1", "c2", "c3"]);
    }

    #[test]
    fn test_out_of_range_pick_is_reported() {
        // pool [0..6]: pos 1 is fine, then pos 9 of a 5-slot pool is not
        let ds         = numbered(6);
        let mut script = ScriptedPicks(VecDeque::from(vec![1, 9]));
        let err        = partition(&ds, 2, 0, &mut script).unwrap_err();
        assert_eq!(err, BaselineError::SampleRange { requested: 10, available: 5 });
    }

    #[test]
    fn test_train_keeps_original_order() {
        let ds      = numbered(30);
        let mut rng = StdRng::seed_from_u64(7);
        let p       = partition(&ds, 8, 8, &mut rng).unwrap();

        assert!(p.indices.train.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_requesting_too_many_records_fails() {
        let ds      = numbered(3);
        let mut rng = StdRng::seed_from_u64(1);
        let err     = partition(&ds, 2, 2, &mut rng).unwrap_err();
        assert_eq!(err, BaselineError::SampleRange { requested: 4, available: 3 });
    }

    #[test]
    fn test_everything_drawn_leaves_empty_train() {
        let ds      = numbered(4);
        let mut rng = StdRng::seed_from_u64(3);
        let p       = partition(&ds, 2, 2, &mut rng).unwrap();
        assert!(p.train.is_empty());
    }
}
