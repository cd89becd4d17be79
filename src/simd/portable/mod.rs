//! Portable NEON.
//!
//! The AArch64 NEON intrinsic surface re-expressed over lane arrays, with
//! the names, argument orders, const-generic immediates and lane semantics
//! of `core::arch::aarch64`. This is the translation layer the harness
//! checks on hosts without NEON.
//!
//! Pure operations are safe functions; loads and stores take raw pointers
//! and are `unsafe`, like their hardware counterparts.

// Lane-wise families where every operand and the result share one type.
macro_rules! unary_family {
    ($f:expr => $($name:ident: $ty:ident),+ $(,)?) => {$(
        #[inline]
        pub fn $name(a: $ty) -> $ty {
            map(a, $f)
        }
    )+};
}

macro_rules! binary_family {
    ($f:expr => $($name:ident: $ty:ident),+ $(,)?) => {$(
        #[inline]
        pub fn $name(a: $ty, b: $ty) -> $ty {
            zip(a, b, $f)
        }
    )+};
}

macro_rules! ternary_family {
    ($f:expr => $($name:ident: $ty:ident),+ $(,)?) => {$(
        #[inline]
        pub fn $name(a: $ty, b: $ty, c: $ty) -> $ty {
            zip3(a, b, c, $f)
        }
    )+};
}

// Lane-wise families with distinct operand and result types.
macro_rules! unary {
    ($f:expr => $($name:ident($a:ident) -> $r:ident),+ $(,)?) => {$(
        #[inline]
        pub fn $name(a: $a) -> $r {
            map(a, $f)
        }
    )+};
}

macro_rules! binary {
    ($f:expr => $($name:ident($a:ident, $b:ident) -> $r:ident),+ $(,)?) => {$(
        #[inline]
        pub fn $name(a: $a, b: $b) -> $r {
            zip(a, b, $f)
        }
    )+};
}

macro_rules! ternary {
    ($f:expr => $($name:ident($a:ident, $b:ident, $c:ident) -> $r:ident),+ $(,)?) => {$(
        #[inline]
        pub fn $name(a: $a, b: $b, c: $c) -> $r {
            zip3(a, b, c, $f)
        }
    )+};
}

mod arith;
mod bits;
mod compare;
mod convert;
mod kernel;
mod lanes;
mod shift;
mod table;
mod types;

pub use self::arith::*;
pub use self::bits::*;
pub use self::compare::*;
pub use self::convert::*;
pub use self::lanes::*;
pub use self::shift::*;
pub use self::table::*;
pub use self::types::*;
