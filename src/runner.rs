//! The sweep driver.
//!
//! For every selected instruction the driver restarts the fixture's
//! perturbation generator, then walks the sliding windows: load the window,
//! apply the instruction's perturbation, run its test. The first failing
//! window ends that instruction's sweep; the next instruction starts fresh.

use std::fmt;

use chrono::{DateTime, Local};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::catalogue::Outcome;
use crate::error::{invalid_config, LaneMismatch, Result};
use crate::fixture::{Fixture, MAX_ITERATIONS};
use crate::perturb::Perturbation;
use crate::registry::Instruction;

/// Validated driver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    seed: u64,
    iterations: usize,
    jobs: usize,
}

impl RunConfig {
    /// # Errors
    ///
    /// Returns [`crate::error::HarnessError::InvalidConfig`] if `iterations`
    /// is outside `1..=MAX_ITERATIONS` or `jobs` is zero.
    pub fn new(seed: u64, iterations: usize, jobs: usize) -> Result<Self> {
        if !(1..=MAX_ITERATIONS).contains(&iterations) {
            return Err(invalid_config(format!(
                "iterations must be between 1 and {}, got {}",
                MAX_ITERATIONS, iterations
            )));
        }
        if jobs == 0 {
            return Err(invalid_config("jobs must be at least 1"));
        }
        Ok(RunConfig {
            seed,
            iterations,
            jobs,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }
}

impl Default for RunConfig {
    /// Seed 0, every window, one thread.
    fn default() -> Self {
        RunConfig {
            seed: 0,
            iterations: MAX_ITERATIONS,
            jobs: 1,
        }
    }
}

/// Result of sweeping one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    /// The sweep stopped at the first failing window.
    Failed {
        iteration: usize,
        mismatch: LaneMismatch,
    },
    Skipped,
}

impl Verdict {
    fn label(&self) -> &'static str {
        match self {
            Verdict::Passed => "passed",
            Verdict::Failed { .. } => "failed",
            Verdict::Skipped => "skipped",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub instruction: Instruction,
    pub verdict: Verdict,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Test {:<30} {}", self.instruction.name(), self.verdict.label())?;
        if let Verdict::Failed {
            iteration,
            mismatch,
        } = self.verdict
        {
            write!(f, " (window {}, {})", iteration, mismatch)?;
        }
        Ok(())
    }
}

/// Sweeps `instruction` over the first `iterations` windows of `fixture`.
///
/// # Panics
///
/// Panics if `iterations` exceeds [`MAX_ITERATIONS`].
pub fn run_instruction(fixture: &mut Fixture, instruction: Instruction, iterations: usize) -> Verdict {
    let name = instruction.name();
    let test = instruction.test();
    let perturbation = Perturbation::for_instruction(name);

    debug!(instruction = name, iterations, "sweep started");
    fixture.reseed(instruction.index());

    for i in 0..iterations {
        fixture.load_window(i);
        perturbation.apply(fixture);

        match test(fixture) {
            Outcome::Pass => {}
            Outcome::Unimplemented => {
                debug!(instruction = name, "no reference, skipped");
                return Verdict::Skipped;
            }
            Outcome::Fail(mismatch) => {
                warn!(
                    instruction = name,
                    iteration = i,
                    lane = mismatch.lane,
                    expected = mismatch.expected,
                    actual = mismatch.actual,
                    "mismatch"
                );
                return Verdict::Failed {
                    iteration: i,
                    mismatch,
                };
            }
        }
    }

    debug!(instruction = name, "sweep passed");
    Verdict::Passed
}

/// Sweeps every instruction in `instructions`, in order.
///
/// With more than one job the instructions are spread over a rayon pool;
/// each worker builds its own fixture. Reports come back in input order
/// and are identical to a single-threaded run.
///
/// # Errors
///
/// Returns [`crate::error::HarnessError::InvalidConfig`] if the thread pool
/// cannot be built.
pub fn run(config: &RunConfig, instructions: &[Instruction]) -> Result<Vec<Report>> {
    let sweep = |fixture: &mut Fixture, &instruction: &Instruction| Report {
        instruction,
        verdict: run_instruction(fixture, instruction, config.iterations),
    };

    if config.jobs == 1 {
        let mut fixture = Fixture::new(config.seed);
        return Ok(instructions
            .iter()
            .map(|instruction| sweep(&mut fixture, instruction))
            .collect());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .map_err(|e| invalid_config(format!("cannot start {} workers: {}", config.jobs, e)))?;

    Ok(pool.install(|| {
        instructions
            .par_iter()
            .map_init(|| Fixture::new(config.seed), sweep)
            .collect()
    }))
}

/// Aggregate counts of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub started_at: DateTime<Local>,
}

impl Summary {
    pub fn new(reports: &[Report], started_at: DateTime<Local>) -> Self {
        let mut summary = Summary {
            passed: 0,
            failed: 0,
            skipped: 0,
            started_at,
        };
        for report in reports {
            match report.verdict {
                Verdict::Passed => summary.passed += 1,
                Verdict::Failed { .. } => summary.failed += 1,
                Verdict::Skipped => summary.skipped += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    /// Share of instructions that passed, skipped ones included in the
    /// denominator. Zero for an empty run.
    pub fn coverage(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.passed as f64 / total as f64,
        }
    }

    /// True if no instruction failed.
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "lanecheck run of {} complete!",
            self.started_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "Passed:  {}", self.passed)?;
        writeln!(f, "Failed:  {}", self.failed)?;
        writeln!(f, "Ignored: {}", self.skipped)?;
        write!(f, "Coverage rate: {:.2}%", self.coverage() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarnessError;

    #[test]
    fn test_config_bounds() {
        assert!(RunConfig::new(0, 1, 1).is_ok());
        assert!(RunConfig::new(0, MAX_ITERATIONS, 8).is_ok());
        assert!(matches!(
            RunConfig::new(0, 0, 1),
            Err(HarnessError::InvalidConfig { .. })
        ));
        assert!(matches!(
            RunConfig::new(0, MAX_ITERATIONS + 1, 1),
            Err(HarnessError::InvalidConfig { .. })
        ));
        assert!(matches!(
            RunConfig::new(0, 10, 0),
            Err(HarnessError::InvalidConfig { .. })
        ));
        assert_eq!(RunConfig::default().iterations(), 9_992);
    }

    #[test]
    fn test_placeholder_is_skipped() {
        let mut fx = Fixture::new(0);
        assert_eq!(
            run_instruction(&mut fx, Instruction::vrecpe_f32, 50),
            Verdict::Skipped
        );
    }

    #[test]
    fn test_implemented_instruction_passes() {
        let mut fx = Fixture::new(0);
        for instruction in [
            Instruction::vadd_s8,
            Instruction::vqaddq_s16,
            Instruction::vceq_f32,
            Instruction::vmaxq_f32,
        ] {
            assert_eq!(run_instruction(&mut fx, instruction, 200), Verdict::Passed);
        }
    }

    #[test]
    fn test_parallel_run_matches_sequential() {
        let instructions = &Instruction::ALL[..64];
        let sequential = run(&RunConfig::new(3, 40, 1).unwrap(), instructions).unwrap();
        let parallel = run(&RunConfig::new(3, 40, 4).unwrap(), instructions).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 64);
        assert_eq!(sequential[0].instruction, Instruction::vadd_s8);
    }

    #[test]
    fn test_summary_counts_and_coverage() {
        let mismatch = LaneMismatch {
            lane: 0,
            width: 1,
            expected: 1,
            actual: 2,
        };
        let reports = [
            Report {
                instruction: Instruction::vadd_s8,
                verdict: Verdict::Passed,
            },
            Report {
                instruction: Instruction::vadd_s16,
                verdict: Verdict::Failed {
                    iteration: 7,
                    mismatch,
                },
            },
            Report {
                instruction: Instruction::vrecpe_f32,
                verdict: Verdict::Skipped,
            },
            Report {
                instruction: Instruction::vadd_s32,
                verdict: Verdict::Passed,
            },
        ];
        let summary = Summary::new(&reports, Local::now());
        assert_eq!((summary.passed, summary.failed, summary.skipped), (2, 1, 1));
        assert_eq!(summary.coverage(), 0.5);
        assert!(!summary.success());

        let text = summary.to_string();
        assert!(text.contains("Ignored: 1"));
        assert!(text.ends_with("Coverage rate: 50.00%"));

        assert_eq!(
            reports[1].to_string(),
            format!("Test {:<30} failed (window 7, {})", "vadd_s16", mismatch)
        );
    }

    #[test]
    fn test_summary_counts_every_failure_payload() {
        let reports: Vec<Report> = (0..5)
            .map(|i| Report {
                instruction: Instruction::ALL[i],
                verdict: Verdict::Failed {
                    iteration: i * 100,
                    mismatch: LaneMismatch {
                        lane: i,
                        width: 4,
                        expected: 0,
                        actual: u64::MAX >> 32,
                    },
                },
            })
            .chain([Report {
                instruction: Instruction::vrecpe_f32,
                verdict: Verdict::Skipped,
            }])
            .collect();
        let summary = Summary::new(&reports, Local::now());
        assert_eq!((summary.passed, summary.failed, summary.skipped), (0, 5, 1));
        assert_eq!(summary.total(), reports.len());
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::new(&[], Local::now());
        assert_eq!(summary.coverage(), 0.0);
        assert!(summary.success());
    }
}
