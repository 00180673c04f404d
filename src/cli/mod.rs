// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and routes each
// subcommand to its use case. Results are printed here and
// nowhere else.
//
//   1. `baseline` — partition a split, score the baseline
//   2. `split`    — partition a split, write the subsets
//   3. `score`    — score a single predicted/correct pair
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BaselineArgs, Commands, ScoreArgs, SplitArgs};

use crate::application::baseline_use_case::{BaselineConfig, BaselineUseCase};
use crate::application::split_use_case::SplitUseCase;
use crate::infra::run_store::load_config;
use crate::ml::scorer::OverlapScores;

#[derive(Parser, Debug)]
#[command(
    name = "squad-baseline",
    version,
    about = "Partition a SQuAD-style split and score a phrase-overlap baseline."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Baseline(args) => run_baseline(args),
            Commands::Split(args)    => run_split(args),
            Commands::Score(args)    => run_score(args),
        }
    }
}

fn run_baseline(args: BaselineArgs) -> Result<()> {
    let config: BaselineConfig = match args.config.clone() {
        Some(path) => {
            tracing::info!("Using saved configuration '{}'", path);
            load_config(&path)?
        }
        None => args.into(),
    };

    let report = BaselineUseCase::new(config).execute()?;
    let agg    = &report.aggregate;

    println!("records evaluated             = {}", agg.records);
    println!("degenerate records            = {}", agg.degenerate);
    println!("avg over correct answer       = {:.6}", agg.mean_over_correct);
    println!("avg over predicted answer     = {:.6}", agg.mean_over_predicted);
    println!("avg of both                   = {:.6}", agg.mean_average);
    Ok(())
}

fn run_split(args: SplitArgs) -> Result<()> {
    let output_dir = args.output_dir.clone();
    let seeded     = SplitUseCase::new(args.into()).execute()?;
    let p          = &seeded.partition;

    println!(
        "Wrote {} val, {} test, {} train records to '{}' (seed {})",
        p.val.len(),
        p.test.len(),
        p.train.len(),
        output_dir,
        seeded.seed
    );
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<()> {
    let scores = OverlapScores::compute(&args.predicted, &args.correct)?;

    println!("over correct answer   = {:.6}", scores.over_correct);
    println!("over predicted answer = {:.6}", scores.over_predicted);
    println!("average               = {:.6}", scores.average);
    Ok(())
}
