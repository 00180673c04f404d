// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Partitions one split into validation / test / train subsets
// and writes each subset back out as ordinary split files:
//
//   Step 1: Load <split>.context/.question/.answer   (Layer 4 - data)
//   Step 2: Partition with a seeded RNG              (Layer 4 - data)
//   Step 3: Write val.*, test.*, train.*             (Layer 4 - data)
//   Step 4: Save run_config.json + partition.json    (Layer 6 - infra)
//
// `SplitConfig` and `partition_dataset` are shared with the
// baseline use case so both draw partitions the same way.

use anyhow::{Context, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::SplitFileLoader,
    partitioner::{partition, Partition},
    writer::SplitFileWriter,
};
use crate::domain::{dataset::Dataset, traits::DatasetSource};
use crate::infra::run_store::{PartitionManifest, RunStore};

// ─── Partition Configuration ──────────────────────────────────────────────────
/// How many records go to validation and test, and the RNG seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub num_val:  usize,
    pub num_test: usize,
    /// Fixed seed for a reproducible partition; drawn fresh when absent
    pub seed:     Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            num_val:  204,
            num_test: 204,
            seed:     None,
        }
    }
}

impl SplitConfig {
    /// The configured seed, or a fresh one from the thread RNG.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }
}

/// A partition together with the seed that produced it
#[derive(Debug)]
pub struct SeededPartition {
    pub seed:      u64,
    pub partition: Partition,
}

impl SeededPartition {
    pub fn manifest(&self, num_records: usize) -> PartitionManifest<'_> {
        PartitionManifest {
            seed:    self.seed,
            num_records,
            indices: &self.partition.indices,
        }
    }
}

/// Partition `dataset` according to `cfg` with a StdRng seeded
/// from the resolved seed.
pub fn partition_dataset(dataset: &Dataset, cfg: &SplitConfig) -> Result<SeededPartition> {
    let seed    = cfg.resolve_seed();
    let mut rng = StdRng::seed_from_u64(seed);

    let partition = partition(dataset, cfg.num_val, cfg.num_test, &mut rng)
        .context("Cannot partition dataset")?;

    tracing::info!(
        "Split (seed {}): {} validation, {} test, {} training",
        seed,
        partition.val.len(),
        partition.test.len(),
        partition.train.len()
    );
    Ok(SeededPartition { seed, partition })
}

// ─── Split Command Configuration ──────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitCommandConfig {
    pub data_dir:   String,
    pub split_name: String,
    pub split:      SplitConfig,
    pub output_dir: String,
}

impl Default for SplitCommandConfig {
    fn default() -> Self {
        Self {
            data_dir:   "data/squad".to_string(),
            split_name: "val".to_string(),
            split:      SplitConfig::default(),
            output_dir: "data/squad/partitioned".to_string(),
        }
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitCommandConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitCommandConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<SeededPartition> {
        let cfg = &self.config;

        // ── Step 1: Load the source split ─────────────────────────────────────
        let dataset = SplitFileLoader::new(&cfg.data_dir, &cfg.split_name).load()?;

        // ── Step 2: Partition ─────────────────────────────────────────────────
        let seeded = partition_dataset(&dataset, &cfg.split)?;
        let p      = &seeded.partition;

        // ── Step 3: Write each subset as its own split ────────────────────────
        let writer = SplitFileWriter::new(&cfg.output_dir);
        writer.write("val", &p.val)?;
        writer.write("test", &p.test)?;
        writer.write("train", &p.train)?;

        // ── Step 4: Record how the partition was made ─────────────────────────
        let store = RunStore::new(&cfg.output_dir)?;
        let mut effective = cfg.clone();
        effective.split.seed = Some(seeded.seed);
        store.save_config(&effective)?;
        store.save_partition(&seeded.manifest(dataset.len()))?;

        tracing::info!("Wrote partitioned splits to '{}'", cfg.output_dir);
        Ok(seeded)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;
    use crate::infra::run_store::load_config;
    use std::path::Path;

    fn seed_split(dir: &Path, n: usize) {
        let ds = Dataset::from_records((0..n).map(|i| {
            Record::new(format!("passage {i}"), format!("question {i}"), format!("answer {i}"))
        }));
        SplitFileWriter::new(dir).write("val", &ds).unwrap();
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let ds  = Dataset::from_records((0..20).map(|i| Record::new(i.to_string(), "q", "a")));
        let cfg = SplitConfig { num_val: 3, num_test: 4, seed: Some(11) };

        let a = partition_dataset(&ds, &cfg).unwrap();
        let b = partition_dataset(&ds, &cfg).unwrap();
        assert_eq!(a.seed, 11);
        assert_eq!(a.partition.indices, b.partition.indices);
    }

    #[test]
    fn test_split_writes_three_subsets_and_manifest() {
        let dir = tempfile::tempdir().unwrap();
        seed_split(dir.path(), 10);

        let out = dir.path().join("out");
        let cfg = SplitCommandConfig {
            data_dir:   dir.path().display().to_string(),
            split_name: "val".into(),
            split:      SplitConfig { num_val: 2, num_test: 2, seed: None },
            output_dir: out.display().to_string(),
        };

        let seeded = SplitUseCase::new(cfg).execute().unwrap();

        let train = SplitFileLoader::new(&out, "train").load().unwrap();
        let val   = SplitFileLoader::new(&out, "val").load().unwrap();
        assert_eq!(train.len(), 6);
        assert_eq!(val.len(), 2);

        // The saved config pins the seed that was drawn
        let saved: SplitCommandConfig = load_config(out.join(RunStore::CONFIG_FILE)).unwrap();
        assert_eq!(saved.split.seed, Some(seeded.seed));
        assert!(out.join(RunStore::PARTITION_FILE).exists());
    }

    #[test]
    fn test_oversized_request_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        seed_split(dir.path(), 3);

        let cfg = SplitCommandConfig {
            data_dir:   dir.path().display().to_string(),
            split:      SplitConfig { num_val: 2, num_test: 2, seed: Some(1) },
            output_dir: dir.path().join("out").display().to_string(),
            ..SplitCommandConfig::default()
        };

        let err = SplitUseCase::new(cfg).execute().unwrap_err();
        assert!(format!("{err:#}").contains("sample range error"));
    }
}
