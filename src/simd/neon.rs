//! Hardware backend: the AArch64 NEON intrinsics themselves.
//!
//! Selected by the `native` feature. Running the catalogue against it checks
//! the scalar reference models against the architecture they describe.

pub use core::arch::aarch64::*;
