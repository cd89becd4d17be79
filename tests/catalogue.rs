//! Sweeps of the whole registry through the public driver.
//!
//! Every instruction with a reference must pass on every window it is
//! given; every placeholder must come back skipped.

use lanecheck::registry::Instruction;
use lanecheck::runner::{run, RunConfig, Summary, Verdict};

fn failures(reports: &[lanecheck::runner::Report]) -> Vec<String> {
    reports
        .iter()
        .filter(|r| matches!(r.verdict, Verdict::Failed { .. }))
        .map(|r| r.to_string())
        .collect()
}

#[test]
fn test_whole_catalogue_passes() {
    let config = RunConfig::new(0, 256, 4).unwrap();
    let reports = run(&config, Instruction::ALL).unwrap();
    assert_eq!(reports.len(), Instruction::COUNT);

    let failed = failures(&reports);
    assert!(failed.is_empty(), "{}", failed.join("\n"));

    for report in &reports {
        let expected = if report.instruction.is_implemented() {
            Verdict::Passed
        } else {
            Verdict::Skipped
        };
        assert_eq!(report.verdict, expected, "{}", report.instruction);
    }
}

#[test]
fn test_other_seeds_pass() {
    for seed in [1, 0xdead_beef] {
        let config = RunConfig::new(seed, 64, 2).unwrap();
        let reports = run(&config, Instruction::ALL).unwrap();
        let failed = failures(&reports);
        assert!(failed.is_empty(), "seed {}: {}", seed, failed.join("\n"));
    }
}

#[test]
fn test_every_window_of_perturbed_instructions() {
    // every window, for instructions the perturbation policy targets
    let config = RunConfig::default();
    let picks = [
        Instruction::vrecpsq_f32,
        Instruction::vcgeq_f32,
        Instruction::vminnm_f32,
        Instruction::vqrdmulhq_s16,
        Instruction::vcvtq_n_s32_f32,
    ];
    let reports = run(&config, &picks).unwrap();
    assert!(reports.iter().all(|r| r.verdict == Verdict::Passed));
}

#[test]
fn test_summary_of_full_run() {
    let config = RunConfig::new(0, 8, 4).unwrap();
    let reports = run(&config, Instruction::ALL).unwrap();
    let summary = Summary::new(&reports, chrono::Local::now());

    let implemented = Instruction::ALL
        .iter()
        .filter(|i| i.is_implemented())
        .count();
    assert_eq!(summary.passed, implemented);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.skipped, Instruction::COUNT - implemented);
    assert!(summary.success());
    assert!((summary.coverage() - implemented as f64 / 1741.0).abs() < 1e-12);
}
