// CLASSIFICATION: COMMUNITY
// Filename: cli.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-25

//! CLI interface. A bare invocation reproduces the legacy 1-D script:
//! random count, random sizes, headers written to the current directory.

use crate::config::Bounds;
use crate::generator::StimulusGenerator;
use crate::profile::{Dim, Profile};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(
    name = "idma_stimgen",
    about = "Generate randomized stimuli headers for iDMA transfer tests"
)]
pub struct Args {
    /// Transfer dimensionality profile.
    #[clap(long, value_enum, default_value = "1d")]
    pub dim: Dim,
    /// Explicit RNG seed; omitted seeds from entropy.
    #[clap(long)]
    pub seed: Option<u64>,
    /// Pin NB_TRANSFERS instead of drawing it.
    #[clap(long)]
    pub transfers: Option<u32>,
    /// Directory the headers are written into.
    #[clap(long, default_value = ".")]
    pub out_dir: PathBuf,
    /// TOML file overriding individual generation bounds.
    #[clap(long)]
    pub bounds: Option<PathBuf>,
    /// Also write the fixed idma_presets.h table (3d only).
    #[clap(long)]
    pub presets: bool,
}

/// Entry point for the CLI. Parses arguments, samples stimuli, and writes
/// the header pair.
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    run_with(&args)
}

pub fn run_with(args: &Args) -> anyhow::Result<()> {
    let mut bounds = Bounds::defaults_for(args.dim);
    if let Some(path) = &args.bounds {
        bounds = bounds.with_overrides_from(path)?;
    }
    let generator = StimulusGenerator::new(Profile::for_dim(args.dim), bounds);
    let stimuli = generator.run(&args.out_dir, args.seed, args.transfers)?;
    if args.presets {
        generator.write_presets(&args.out_dir)?;
    }
    println!(
        "Generated {} transfers in {}",
        stimuli.nb_transfers,
        args.out_dir.display()
    );
    Ok(())
}
