//! The NEON intrinsic surface the harness checks.
//!
//! `backend` is what the catalogue calls. By default it is the portable
//! layer in [`portable`]; with the `native` feature on an aarch64 target it
//! is the hardware intrinsics of `core::arch::aarch64`.

#[cfg(neon)]
pub mod neon;

pub mod portable;
pub mod traits;

#[cfg(neon)]
pub use self::neon as backend;

#[cfg(not(neon))]
pub use self::portable as backend;

/// Name of the backend this build checks.
pub const BACKEND: &str = if cfg!(neon) { "neon" } else { "portable" };
