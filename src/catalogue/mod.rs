//! Per-instruction conformance tests.
//!
//! Every test function has the same shape: take typed views of the
//! fixture's scratch pairs, load the operands from those views, run the
//! intrinsic, compute the expected lanes from the same views with the
//! scalar models in [`crate::reference`], and hand both to
//! [`crate::validate`]. Immediate and lane-index forms check every valid
//! immediate in one call.
//!
//! Operand sources are fixed per position. Integer operations read the
//! first and second integer blocks; float operations read the float blocks.
//! A third operand comes from the 16 bytes straddling both float blocks, so
//! integer accumulators also see arbitrary bit patterns.

// Pure intrinsics are safe in the portable layer and unsafe in
// `core::arch`; tests wrap them in `unsafe` blocks for both.
#![allow(unused_unsafe)]

use crate::error::LaneMismatch;
use crate::fixture::Fixture;
use crate::simd::traits::{Lane, Register};
use crate::validate::validate;

/// Verdict of one test invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail(LaneMismatch),
    /// The entry is a placeholder; never counted as pass or fail.
    Unimplemented,
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

impl From<Result<(), LaneMismatch>> for Outcome {
    fn from(result: Result<(), LaneMismatch>) -> Self {
        match result {
            Ok(()) => Outcome::Pass,
            Err(mismatch) => Outcome::Fail(mismatch),
        }
    }
}

/// Signature shared by every catalogue entry.
pub type TestFn = fn(&Fixture) -> Outcome;

/// Test of an instruction the harness has no reference for yet.
pub fn pending(_: &Fixture) -> Outcome {
    Outcome::Unimplemented
}

// ---- operand sources ----

fn int_a<T: Lane>(fx: &Fixture) -> &[T] {
    fx.ints().first()
}

fn int_b<T: Lane>(fx: &Fixture) -> &[T] {
    fx.ints().second()
}

fn float_a<T: Lane>(fx: &Fixture) -> &[T] {
    fx.floats().first()
}

fn float_b<T: Lane>(fx: &Fixture) -> &[T] {
    fx.floats().second()
}

fn mixed<T: Lane>(fx: &Fixture) -> &[T] {
    fx.floats().middle()
}

// ---- expected-lane builders ----

fn check_unary<A: Lane, R: Register>(a: &[A], produced: R, f: impl Fn(A) -> R::Lane) -> Outcome {
    let expected: Vec<_> = (0..R::LANES).map(|i| f(a[i])).collect();
    validate(produced, &expected).into()
}

fn check_binary<A: Lane, B: Lane, R: Register>(
    a: &[A],
    b: &[B],
    produced: R,
    f: impl Fn(A, B) -> R::Lane,
) -> Outcome {
    let expected: Vec<_> = (0..R::LANES).map(|i| f(a[i], b[i])).collect();
    validate(produced, &expected).into()
}

fn check_ternary<A: Lane, B: Lane, C: Lane, R: Register>(
    a: &[A],
    b: &[B],
    c: &[C],
    produced: R,
    f: impl Fn(A, B, C) -> R::Lane,
) -> Outcome {
    let expected: Vec<_> = (0..R::LANES).map(|i| f(a[i], b[i], c[i])).collect();
    validate(produced, &expected).into()
}

// Adjacent pairs of `a` fill the low half, pairs of `b` the high half.
fn check_pairwise<T: Lane, R: Register>(
    a: &[T],
    b: &[T],
    produced: R,
    f: impl Fn(T, T) -> R::Lane,
) -> Outcome {
    let half = R::LANES / 2;
    let expected: Vec<_> = (0..R::LANES)
        .map(|i| {
            let (src, j) = if i < half { (a, i) } else { (b, i - half) };
            f(src[2 * j], src[2 * j + 1])
        })
        .collect();
    validate(produced, &expected).into()
}

fn check_pairs<T: Lane, R: Register>(a: &[T], produced: R, f: impl Fn(T, T) -> R::Lane) -> Outcome {
    let expected: Vec<_> = (0..R::LANES).map(|i| f(a[2 * i], a[2 * i + 1])).collect();
    validate(produced, &expected).into()
}

fn check_pairs_accumulate<T: Lane, R: Register>(
    acc: &[R::Lane],
    a: &[T],
    produced: R,
    f: impl Fn(R::Lane, T, T) -> R::Lane,
) -> Outcome {
    let expected: Vec<_> = (0..R::LANES)
        .map(|i| f(acc[i], a[2 * i], a[2 * i + 1]))
        .collect();
    validate(produced, &expected).into()
}

/// Runs `check::<N>(input)` for each immediate until one fails.
macro_rules! sweep {
    ($check:ident($input:expr): $($n:literal)+) => {{
        let input = $input;
        let mut outcome = Outcome::Pass;
        $(
            if outcome.is_pass() {
                outcome = $check::<$n>(input);
            }
        )+
        outcome
    }};
}

/// Lane-wise tests with one register operand.
macro_rules! unary_tests {
    ($($test:ident = $op:ident($load:ident @ $src:ident) => $f:expr;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let a = $src(fx);
            // SAFETY: every scratch view spans a full register.
            let r = unsafe { $op($load(a.as_ptr())) };
            check_unary(a, r, $f)
        }
    )*};
}

/// Lane-wise tests with two register operands.
macro_rules! binary_tests {
    ($($test:ident = $op:ident($la:ident @ $sa:ident, $lb:ident @ $sb:ident) => $f:expr;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let (a, b) = ($sa(fx), $sb(fx));
            // SAFETY: every scratch view spans a full register.
            let r = unsafe { $op($la(a.as_ptr()), $lb(b.as_ptr())) };
            check_binary(a, b, r, $f)
        }
    )*};
}

/// Lane-wise tests with three register operands.
macro_rules! ternary_tests {
    ($($test:ident = $op:ident(
        $la:ident @ $sa:ident, $lb:ident @ $sb:ident, $lc:ident @ $sc:ident
    ) => $f:expr;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let (a, b, c) = ($sa(fx), $sb(fx), $sc(fx));
            // SAFETY: every scratch view spans a full register.
            let r = unsafe { $op($la(a.as_ptr()), $lb(b.as_ptr()), $lc(c.as_ptr())) };
            check_ternary(a, b, c, r, $f)
        }
    )*};
}

/// Tests of one register operand and a const-generic immediate; `$f` gets
/// the lane and the immediate.
macro_rules! immediate_tests {
    ($($test:ident = $op:ident::<$($n:literal)+>($load:ident @ $src:ident: $t:ty) => $f:expr;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            fn check<const N: i32>(a: &[$t]) -> Outcome {
                // SAFETY: every scratch view spans a full register.
                let r = unsafe { $op::<N>($load(a.as_ptr())) };
                check_unary(a, r, |x| $f(x, N as u32))
            }
            sweep!(check($src(fx)): $($n)+)
        }
    )*};
}

/// Tests of two register operands and an immediate.
macro_rules! immediate_binary_tests {
    ($($test:ident = $op:ident::<$($n:literal)+>(
        $la:ident @ $sa:ident, $lb:ident @ $sb:ident: $t:ty
    ) => $f:expr;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            fn check<const N: i32>((a, b): (&[$t], &[$t])) -> Outcome {
                // SAFETY: every scratch view spans a full register.
                let r = unsafe { $op::<N>($la(a.as_ptr()), $lb(b.as_ptr())) };
                check_binary(a, b, r, |x, y| $f(x, y, N as u32))
            }
            sweep!(check(($sa(fx), $sb(fx))): $($n)+)
        }
    )*};
}

mod arith;
mod bits;
mod compare;
mod convert;
mod lanes;
mod shift;
mod table;

pub use self::arith::*;
pub use self::bits::*;
pub use self::compare::*;
pub use self::convert::*;
pub use self::lanes::*;
pub use self::shift::*;
pub use self::table::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_validation() {
        assert_eq!(Outcome::from(Ok(())), Outcome::Pass);
        let mismatch = LaneMismatch {
            lane: 2,
            width: 4,
            expected: 1,
            actual: 0,
        };
        assert_eq!(Outcome::from(Err(mismatch)), Outcome::Fail(mismatch));
    }

    #[test]
    fn test_pending_is_unimplemented() {
        let fx = Fixture::new(0);
        assert_eq!(pending(&fx), Outcome::Unimplemented);
        assert!(!pending(&fx).is_pass());
    }

    #[test]
    fn test_pairwise_layout() {
        use crate::simd::backend::*;

        let a = [1i16, 2, 3, 4];
        let b = [10i16, 20, 30, 40];
        let produced = unsafe { vld1_s16([3i16, 7, 30, 70].as_ptr()) };
        assert!(check_pairwise(&a, &b, produced, |x, y| x + y).is_pass());
    }
}
