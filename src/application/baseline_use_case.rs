// ============================================================
// Layer 2 — BaselineUseCase
// ============================================================
// Runs the phrase-overlap baseline end to end:
//
//   Step 1: Load the source split                    (Layer 4 - data)
//   Step 2: Partition into val / test / train        (Layer 4 - data)
//   Step 3: Pick the subset to evaluate on           (this layer)
//   Step 4: Predict and score every record           (Layer 5 - ml)
//   Step 5: Save config, partition, summary, CSV     (Layer 6 - infra)
//
// Step 5 only runs when an output directory is configured.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::application::split_use_case::{partition_dataset, SplitConfig};
use crate::data::loader::SplitFileLoader;
use crate::domain::{dataset::Dataset, traits::DatasetSource};
use crate::infra::{metrics::MetricsLogger, run_store::RunStore};
use crate::ml::baseline::{BaselinePredictor, BaselineReport, DegeneratePolicy};

/// Which subset of the partition the baseline is scored on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluateOn {
    #[default]
    Train,
    Val,
    Test,
    /// The whole loaded split, ignoring the partition
    All,
}

impl fmt::Display for EvaluateOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EvaluateOn::Train => "train",
            EvaluateOn::Val   => "val",
            EvaluateOn::Test  => "test",
            EvaluateOn::All   => "all",
        };
        f.write_str(name)
    }
}

impl FromStr for EvaluateOn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "train" => Ok(EvaluateOn::Train),
            "val"   => Ok(EvaluateOn::Val),
            "test"  => Ok(EvaluateOn::Test),
            "all"   => Ok(EvaluateOn::All),
            other   => Err(format!("unknown subset '{other}' (expected train, val, test or all)")),
        }
    }
}

// ─── Baseline Configuration ───────────────────────────────────────────────────
// Serialisable so the effective settings of a run can be saved
// next to its results and fed back later with `--config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineConfig {
    pub data_dir:      String,
    pub split_name:    String,
    pub split:         SplitConfig,
    pub evaluate_on:   EvaluateOn,
    pub on_degenerate: DegeneratePolicy,
    pub output_dir:    Option<String>,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            data_dir:      "data/squad".to_string(),
            split_name:    "val".to_string(),
            split:         SplitConfig::default(),
            evaluate_on:   EvaluateOn::default(),
            on_degenerate: DegeneratePolicy::default(),
            output_dir:    None,
        }
    }
}

// ─── BaselineUseCase ──────────────────────────────────────────────────────────
pub struct BaselineUseCase {
    config: BaselineConfig,
}

impl BaselineUseCase {
    pub fn new(config: BaselineConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<BaselineReport> {
        let cfg = &self.config;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let dataset = SplitFileLoader::new(&cfg.data_dir, &cfg.split_name).load()?;

        // ── Step 2: Partition ─────────────────────────────────────────────────
        let seeded = partition_dataset(&dataset, &cfg.split)?;
        let p      = &seeded.partition;

        // ── Step 3: Choose the evaluation subset ──────────────────────────────
        let all_indices: Vec<usize>;
        let (subset, source_indices): (&Dataset, &[usize]) = match cfg.evaluate_on {
            EvaluateOn::Train => (&p.train, p.indices.train.as_slice()),
            EvaluateOn::Val   => (&p.val, p.indices.val.as_slice()),
            EvaluateOn::Test  => (&p.test, p.indices.test.as_slice()),
            EvaluateOn::All   => {
                all_indices = (0..dataset.len()).collect();
                (&dataset, all_indices.as_slice())
            }
        };
        tracing::info!(
            "Running baseline on the {} subset ({} records)",
            cfg.evaluate_on,
            subset.len()
        );

        // ── Step 4: Predict and score ─────────────────────────────────────────
        let report = BaselinePredictor::new(cfg.on_degenerate)
            .predict(subset)
            .with_context(|| format!("Baseline failed on the {} subset", cfg.evaluate_on))?;

        // ── Step 5: Persist the run ───────────────────────────────────────────
        if let Some(dir) = &cfg.output_dir {
            let store = RunStore::new(dir)?;
            let mut effective = cfg.clone();
            effective.split.seed = Some(seeded.seed);
            store.save_config(&effective)?;
            store.save_partition(&seeded.manifest(dataset.len()))?;
            store.save_summary(&report.aggregate)?;

            let logger = MetricsLogger::new(store.dir())?;
            logger.log_records(&report.records, source_indices)?;
            tracing::info!(
                "Saved run artefacts to '{}' (per-record scores in '{}')",
                store.dir().display(),
                logger.csv_path().display()
            );
        }

        Ok(report)
    }
}
