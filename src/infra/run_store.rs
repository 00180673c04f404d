// ============================================================
// Layer 6 — Run Store
// ============================================================
// Persists everything needed to reproduce or inspect a run:
//
//   <output_dir>/
//     run_config.json   ← the effective configuration (seed resolved)
//     partition.json    ← seed + val/test/train source indices
//     summary.json      ← aggregate metrics (baseline runs only)
//
// All files are pretty-printed JSON written with serde_json.
// A saved run_config.json can be fed back with `--config` to
// repeat the exact same partition.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::partitioner::PartitionIndices;
use crate::infra::metrics::AggregateMetrics;

/// The partition written to `partition.json`
#[derive(Debug, Serialize)]
pub struct PartitionManifest<'a> {
    pub seed:        u64,
    pub num_records: usize,
    #[serde(flatten)]
    pub indices:     &'a PartitionIndices,
}

/// Writes run artefacts to one output directory.
pub struct RunStore {
    dir: PathBuf,
}

impl RunStore {
    pub const CONFIG_FILE:    &'static str = "run_config.json";
    pub const PARTITION_FILE: &'static str = "partition.json";
    pub const SUMMARY_FILE:   &'static str = "summary.json";

    /// Create a store rooted at `dir`, creating it if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save_config<T: Serialize>(&self, cfg: &T) -> Result<()> {
        self.write_json(Self::CONFIG_FILE, cfg)
    }

    pub fn save_partition(&self, manifest: &PartitionManifest<'_>) -> Result<()> {
        self.write_json(Self::PARTITION_FILE, manifest)
    }

    pub fn save_summary(&self, summary: &AggregateMetrics) -> Result<()> {
        self.write_json(Self::SUMMARY_FILE, summary)
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Saved '{}'", path.display());
        Ok(())
    }
}

/// Load a configuration previously saved with `RunStore::save_config`.
pub fn load_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Invalid config in '{}'", path.display()))
}
