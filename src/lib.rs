//! # lanecheck
//!
//! A conformance harness for NEON intrinsic translation layers.
//!
//! Every NEON intrinsic in the [`registry`] is swept over a seeded pool of
//! samples: each iteration loads an eight-sample window into aligned
//! scratch buffers, lets the [`perturb`] policy plant signed zeros, NaNs,
//! infinities and exact integers, runs the instruction's [`catalogue`] test
//! and compares every produced lane bit for bit against a scalar
//! [`reference`] model.
//!
//! The unit under test is [`simd::backend`]: the portable layer by default,
//! or the hardware intrinsics with the `native` feature on aarch64.
//!
//! ```
//! use lanecheck::registry::Instruction;
//! use lanecheck::runner::{run, RunConfig, Verdict};
//!
//! let config = RunConfig::new(0, 100, 1).unwrap();
//! let reports = run(&config, &[Instruction::vaddq_s8, Instruction::vrecpe_f32]).unwrap();
//! assert_eq!(reports[0].verdict, Verdict::Passed);
//! assert_eq!(reports[1].verdict, Verdict::Skipped);
//! ```

pub mod catalogue;
pub mod error;
pub mod fixture;
pub mod perturb;
pub mod reference;
pub mod registry;
pub mod runner;
pub mod simd;
pub mod utils;
pub mod validate;
