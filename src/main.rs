//! lanecheck command line.
//!
//! ```bash
//! # Sweep the whole catalogue over every window
//! lanecheck
//!
//! # Two instructions, a different pool, 500 windows, 8 threads
//! lanecheck vaddq_s8 vqshrn_n_s16 --seed 7 --iterations 500 --jobs 8
//!
//! # Which instructions have a reference
//! lanecheck --list
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::info;

use lanecheck::fixture::MAX_ITERATIONS;
use lanecheck::registry::Instruction;
use lanecheck::runner::{run, RunConfig, Summary, Verdict};
use lanecheck::simd::BACKEND;

/// Conformance sweep of NEON intrinsics against scalar references
#[derive(Parser)]
#[command(name = "lanecheck")]
#[command(version)]
struct Cli {
    /// Instructions to test, by intrinsic name, or `all`
    #[arg(default_value = "all")]
    names: Vec<String>,

    /// Seed of the sample pool and the perturbation generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Windows swept per instruction
    #[arg(short = 'n', long, default_value_t = MAX_ITERATIONS)]
    iterations: usize,

    /// Worker threads
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// List the catalogue and exit
    #[arg(long)]
    list: bool,

    /// Also print a line for every skipped instruction
    #[arg(long)]
    show_skipped: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn select(names: &[String]) -> Result<Vec<Instruction>> {
    if names.iter().any(|name| name == "all") {
        return Ok(Instruction::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| Instruction::from_name(name).with_context(|| format!("cannot select `{}`", name)))
        .collect()
}

fn list() {
    for instruction in Instruction::ALL {
        let status = if instruction.is_implemented() {
            "reference"
        } else {
            "placeholder"
        };
        println!("{:<30} {}", instruction.name(), status);
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if cli.list {
        list();
        return Ok(ExitCode::SUCCESS);
    }

    let config = RunConfig::new(cli.seed, cli.iterations, cli.jobs).context("invalid arguments")?;
    let instructions = select(&cli.names)?;

    info!(
        backend = BACKEND,
        seed = config.seed(),
        iterations = config.iterations(),
        jobs = config.jobs(),
        count = instructions.len(),
        "starting sweep"
    );

    let started_at = Local::now();
    let reports = run(&config, &instructions).context("sweep aborted")?;

    for report in &reports {
        if report.verdict != Verdict::Skipped || cli.show_skipped {
            println!("{}", report);
        }
    }

    let summary = Summary::new(&reports, started_at);
    println!("{}", summary);

    Ok(if summary.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
