//! Offline CFR training pipeline: generates a chance dataset, runs vanilla
//! CFR over the preflop or postflop abstract tree, and writes the resulting
//! strategy artifact.

use clap::{Parser, ValueEnum};
use headsup_gto::cfr::history::{PostflopHistory, PreflopHistory};
use headsup_gto::cfr::{Dataset, Solver};
use headsup_gto::equity::Estimator;

#[derive(Copy, Clone, ValueEnum)]
enum Tree {
    Preflop,
    Postflop,
}

#[derive(Parser)]
struct Args {
    /// which abstract tree to train
    #[arg(long, value_enum, default_value_t = Tree::Preflop)]
    tree: Tree,
    #[arg(short, long, default_value_t = headsup_gto::CFR_ITERATIONS)]
    iterations: usize,
    #[arg(short, long, default_value_t = headsup_gto::CHANCE_DATASET_SIZE)]
    samples: usize,
    #[arg(short, long)]
    output: Option<String>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    headsup_gto::init();
    let args = Args::parse();

    let output = args.output.clone().unwrap_or_else(|| match args.tree {
        Tree::Preflop => "models/preflop_infoSets.json".to_string(),
        Tree::Postflop => "models/postflop_infoSets.json".to_string(),
    });

    log::info!("generating {} chance samples", args.samples);
    let mut estimator = Estimator::seeded(args.seed);
    let dataset = Dataset::generate(args.samples, &mut estimator);

    let progress = indicatif::ProgressBar::new(args.iterations as u64);
    progress.set_style(
        indicatif::ProgressStyle::with_template("{spinner:.cyan} {elapsed} ~ {percent:>3}% {wide_bar:.cyan}")
            .expect("valid template"),
    );

    let artifact = match args.tree {
        Tree::Preflop => {
            let mut solver: Solver<PreflopHistory> = Solver::new(dataset);
            train_with_progress(&mut solver, args.iterations, PreflopHistory::new, &progress);
            solver.export()
        }
        Tree::Postflop => {
            let mut solver: Solver<PostflopHistory> = Solver::new(dataset);
            train_with_progress(&mut solver, args.iterations, PostflopHistory::new, &progress);
            solver.export()
        }
    };
    progress.finish();

    if let Some(parent) = std::path::Path::new(&output).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(&output)?;
    serde_json::to_writer(file, &artifact_as_modern(&artifact))?;
    log::info!("wrote strategy artifact to {output}");
    Ok(())
}

/// re-expose the internal `Strategy` as the on-disk modern artifact shape.
fn artifact_as_modern(strategy: &headsup_gto::cfr::Strategy) -> serde_json::Value {
    serde_json::to_value(strategy.entries_for_export()).expect("strategy serializes")
}

fn train_with_progress<H: headsup_gto::cfr::History>(
    solver: &mut headsup_gto::cfr::Solver<H>,
    iterations: usize,
    build_root: impl Fn(usize) -> H,
    progress: &indicatif::ProgressBar,
) {
    let batch = (iterations / 100).max(1);
    let mut done = 0;
    while done < iterations {
        let step = batch.min(iterations - done);
        solver.train(step, &build_root);
        done += step;
        progress.set_position(done as u64);
    }
}
