// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands `baseline`, `split` and `score`
// and all their flags. Defaults mirror the original experiment
// setup: the SQuAD dev split in data/squad, 204 validation and
// 204 test records.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::{
    baseline_use_case::{BaselineConfig, EvaluateOn},
    split_use_case::{SplitCommandConfig, SplitConfig},
};
use crate::ml::baseline::DegeneratePolicy;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Partition a split and score the phrase-overlap baseline on one subset
    Baseline(BaselineArgs),

    /// Partition a split and write val/test/train files
    Split(SplitArgs),

    /// Score one predicted answer against a correct answer
    Score(ScoreArgs),
}

/// Where the source split lives
#[derive(Args, Debug)]
pub struct DataArgs {
    /// Directory holding <split>.context, <split>.question and <split>.answer
    #[arg(long, env = "SQUAD_DATA_DIR", default_value = "data/squad")]
    pub data_dir: String,

    /// Split file prefix to load and partition
    #[arg(long, default_value = "val")]
    pub split_name: String,
}

/// How the split is partitioned
#[derive(Args, Debug)]
pub struct PartitionArgs {
    /// Number of records drawn for the validation set
    #[arg(long, default_value_t = 204)]
    pub num_val: usize,

    /// Number of records drawn for the test set
    #[arg(long, default_value_t = 204)]
    pub num_test: usize,

    /// RNG seed; a random one is drawn and logged when omitted
    #[arg(long, env = "SQUAD_SPLIT_SEED")]
    pub seed: Option<u64>,
}

impl From<PartitionArgs> for SplitConfig {
    fn from(a: PartitionArgs) -> Self {
        SplitConfig {
            num_val:  a.num_val,
            num_test: a.num_test,
            seed:     a.seed,
        }
    }
}

/// All arguments for the `baseline` command
#[derive(Args, Debug)]
pub struct BaselineArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub partition: PartitionArgs,

    /// Subset to score: train, val, test or all
    #[arg(long, default_value = "train")]
    pub evaluate_on: EvaluateOn,

    /// What to do when an answer has no words: zero or abort
    #[arg(long, default_value = "zero")]
    pub on_degenerate: DegeneratePolicy,

    /// Directory for run_config.json, partition.json, summary.json and records.csv
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Load the whole configuration from a saved run_config.json
    /// instead of the flags above
    #[arg(long)]
    pub config: Option<String>,
}

impl From<BaselineArgs> for BaselineConfig {
    fn from(a: BaselineArgs) -> Self {
        BaselineConfig {
            data_dir:      a.data.data_dir,
            split_name:    a.data.split_name,
            split:         a.partition.into(),
            evaluate_on:   a.evaluate_on,
            on_degenerate: a.on_degenerate,
            output_dir:    a.output_dir,
        }
    }
}

/// All arguments for the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub partition: PartitionArgs,

    /// Directory the val/test/train files are written to
    #[arg(long, default_value = "data/squad/partitioned")]
    pub output_dir: String,
}

impl From<SplitArgs> for SplitCommandConfig {
    fn from(a: SplitArgs) -> Self {
        SplitCommandConfig {
            data_dir:   a.data.data_dir,
            split_name: a.data.split_name,
            split:      a.partition.into(),
            output_dir: a.output_dir,
        }
    }
}

/// All arguments for the `score` command
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// The predicted answer text
    #[arg(long)]
    pub predicted: String,

    /// The gold answer text
    #[arg(long)]
    pub correct: String,
}
