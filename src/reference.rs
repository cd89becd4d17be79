//! Scalar reference models.
//!
//! Every catalogue entry computes its expected lanes with these functions,
//! one scalar at a time, from the same bytes it feeds to the intrinsic.
//! Integer models evaluate exactly in `i128` and then wrap or saturate to
//! the lane width; float models follow AArch64 with the default FPCR
//! (round to nearest, no flush to zero, NaNs propagated rather than
//! replaced by the default NaN).

use num::traits::{AsPrimitive, PrimInt, WrappingAdd, WrappingMul, WrappingSub};

use crate::simd::traits::Lane;

/// Integer lane types the reference models are generic over.
pub trait IntLane:
    Lane + PrimInt + WrappingAdd + WrappingSub + WrappingMul + AsPrimitive<i128>
{
    /// Keeps the low lane-width bits of `v`.
    fn truncate(v: i128) -> Self;
}

macro_rules! impl_int_lane {
    ($($t:ty),* $(,)?) => {$(
        impl IntLane for $t {
            #[inline]
            fn truncate(v: i128) -> Self {
                v as $t
            }
        }
    )*};
}

impl_int_lane!(i8, i16, i32, i64, u8, u16, u32, u64);

#[inline]
fn bits<T: Lane>() -> u32 {
    (T::BYTES * 8) as u32
}

#[inline]
fn exact<T: IntLane>(x: T) -> i128 {
    x.as_()
}

/// `v` clamped to the range of `T` (saturate-to-int8 and friends).
pub fn saturate<T: IntLane>(v: i128) -> T {
    let lo: i128 = T::min_value().as_();
    let hi: i128 = T::max_value().as_();
    T::truncate(v.clamp(lo, hi))
}

/// `v >> n` rounded to nearest, ties up.
pub fn rounding_shift_right(v: i128, n: u32) -> i128 {
    (v + (1i128 << (n - 1))) >> n
}

/// All ones when `pred` holds, all zeros otherwise.
pub fn mask<M: IntLane>(pred: bool) -> M {
    if pred {
        !M::zero()
    } else {
        M::zero()
    }
}

// ---- integer arithmetic ----

pub fn add<T: IntLane>(a: T, b: T) -> T {
    a.wrapping_add(&b)
}

pub fn sub<T: IntLane>(a: T, b: T) -> T {
    a.wrapping_sub(&b)
}

pub fn mul<T: IntLane>(a: T, b: T) -> T {
    a.wrapping_mul(&b)
}

pub fn saturating_add<T: IntLane>(a: T, b: T) -> T {
    saturate(exact(a) + exact(b))
}

pub fn saturating_sub<T: IntLane>(a: T, b: T) -> T {
    saturate(exact(a) - exact(b))
}

/// `(a + b) >> 1` without intermediate overflow.
pub fn halving_add<T: IntLane>(a: T, b: T) -> T {
    T::truncate((exact(a) + exact(b)) >> 1)
}

/// `(a + b + 1) >> 1` without intermediate overflow.
pub fn rounding_halving_add<T: IntLane>(a: T, b: T) -> T {
    T::truncate((exact(a) + exact(b) + 1) >> 1)
}

pub fn halving_sub<T: IntLane>(a: T, b: T) -> T {
    T::truncate((exact(a) - exact(b)) >> 1)
}

/// Sum of two lanes of any widths, wrapped to `W`.
pub fn long_add<A: IntLane, B: IntLane, W: IntLane>(a: A, b: B) -> W {
    W::truncate(exact(a) + exact(b))
}

pub fn long_sub<A: IntLane, B: IntLane, W: IntLane>(a: A, b: B) -> W {
    W::truncate(exact(a) - exact(b))
}

pub fn long_mul<T: IntLane, W: IntLane>(a: T, b: T) -> W {
    W::truncate(exact(a) * exact(b))
}

/// Upper half of `a + b`, narrowed (`vaddhn`, `vraddhn` when `round`).
pub fn add_high_narrow<T: IntLane, N: IntLane>(a: T, b: T, round: bool) -> N {
    high_narrow(exact(a) + exact(b), round)
}

pub fn sub_high_narrow<T: IntLane, N: IntLane>(a: T, b: T, round: bool) -> N {
    high_narrow(exact(a) - exact(b), round)
}

fn high_narrow<N: IntLane>(v: i128, round: bool) -> N {
    let half = bits::<N>();
    if round {
        N::truncate(rounding_shift_right(v, half))
    } else {
        N::truncate(v >> half)
    }
}

/// `acc + x + y` in the accumulator's width (`vpadal`).
pub fn pairwise_accumulate<W: IntLane, T: IntLane>(acc: W, x: T, y: T) -> W {
    W::truncate(exact(acc) + exact(x) + exact(y))
}

pub fn mla<T: IntLane>(a: T, b: T, c: T) -> T {
    add(a, mul(b, c))
}

pub fn mls<T: IntLane>(a: T, b: T, c: T) -> T {
    sub(a, mul(b, c))
}

pub fn long_mla<W: IntLane, T: IntLane>(acc: W, b: T, c: T) -> W {
    W::truncate(exact(acc) + exact(b) * exact(c))
}

pub fn long_mls<W: IntLane, T: IntLane>(acc: W, b: T, c: T) -> W {
    W::truncate(exact(acc) - exact(b) * exact(c))
}

/// High half of the doubled product, saturated (`vqdmulh`).
pub fn doubling_mul_high<T: IntLane>(a: T, b: T) -> T {
    saturate((2 * exact(a) * exact(b)) >> bits::<T>())
}

/// Rounded high half of the doubled product, saturated (`vqrdmulh`).
pub fn rounding_doubling_mul_high<T: IntLane>(a: T, b: T) -> T {
    saturate(rounding_shift_right(2 * exact(a) * exact(b), bits::<T>()))
}

pub fn doubling_mul_long<T: IntLane, W: IntLane>(a: T, b: T) -> W {
    saturate(2 * exact(a) * exact(b))
}

pub fn abs_diff<T: IntLane>(a: T, b: T) -> T {
    T::truncate((exact(a) - exact(b)).abs())
}

pub fn abs_diff_long<T: IntLane, W: IntLane>(a: T, b: T) -> W {
    W::truncate((exact(a) - exact(b)).abs())
}

pub fn abs_diff_accumulate<T: IntLane>(a: T, b: T, c: T) -> T {
    add(a, abs_diff(b, c))
}

pub fn abs_diff_accumulate_long<W: IntLane, T: IntLane>(acc: W, b: T, c: T) -> W {
    W::truncate(exact(acc) + (exact(b) - exact(c)).abs())
}

pub fn abs<T: IntLane>(a: T) -> T {
    T::truncate(exact(a).abs())
}

pub fn saturating_abs<T: IntLane>(a: T) -> T {
    saturate(exact(a).abs())
}

pub fn neg<T: IntLane>(a: T) -> T {
    T::truncate(-exact(a))
}

pub fn saturating_neg<T: IntLane>(a: T) -> T {
    saturate(-exact(a))
}

pub fn max<T: IntLane>(a: T, b: T) -> T {
    std::cmp::max(a, b)
}

pub fn min<T: IntLane>(a: T, b: T) -> T {
    std::cmp::min(a, b)
}

// ---- bit operations ----

/// Leading bits below the sign bit that equal it.
pub fn leading_sign_bits<T: IntLane>(a: T) -> T {
    let v = exact(a);
    let run = if v < 0 { !v } else { v };
    let leading = (run as u128).leading_zeros() - (128 - bits::<T>());
    T::truncate(leading as i128 - 1)
}

pub fn leading_zeros<T: IntLane>(a: T) -> T {
    T::truncate(a.leading_zeros() as i128)
}

pub fn population_count<T: IntLane>(a: T) -> T {
    T::truncate(a.count_ones() as i128)
}

/// Bits of `a` where `m` is set, bits of `b` elsewhere.
pub fn bit_select<M: Lane, T: Lane>(m: M, a: T, b: T) -> T {
    let m = m.to_bits();
    T::from_bits((m & a.to_bits()) | (!m & b.to_bits()))
}

// ---- shifts ----

/// Shift by the signed low byte of `shift`; negative amounts shift right
/// (arithmetic for signed lanes) and out-of-range amounts saturate to 0 or
/// to the sign.
pub fn shift_by_register<T: IntLane, S: IntLane>(a: T, shift: S) -> T {
    let amount = shift.to_bits() as u8 as i8 as i32;
    let width = bits::<T>() as i32;
    let v = exact(a);
    if amount >= width {
        T::zero()
    } else if amount >= 0 {
        T::truncate(v << amount)
    } else if -amount >= width {
        T::truncate(if v < 0 { -1 } else { 0 })
    } else {
        T::truncate(v >> -amount)
    }
}

pub fn shift_left<T: IntLane, R: IntLane>(a: T, n: u32) -> R {
    R::truncate(exact(a) << n)
}

pub fn shift_right<T: IntLane, R: IntLane>(a: T, n: u32) -> R {
    R::truncate(exact(a) >> n)
}

pub fn rounding_shift_right_lane<T: IntLane, R: IntLane>(a: T, n: u32) -> R {
    R::truncate(rounding_shift_right(exact(a), n))
}

pub fn saturating_shift_right_narrow<T: IntLane, N: IntLane>(a: T, n: u32) -> N {
    saturate(exact(a) >> n)
}

pub fn saturating_rounding_shift_right_narrow<T: IntLane, N: IntLane>(a: T, n: u32) -> N {
    saturate(rounding_shift_right(exact(a), n))
}

/// `a << n` clamped to `R`; `R` may be the unsigned twin of `T`.
pub fn saturating_shift_left<T: IntLane, R: IntLane>(a: T, n: u32) -> R {
    saturate(exact(a) << n)
}

pub fn shift_right_accumulate<T: IntLane>(a: T, b: T, n: u32, round: bool) -> T {
    let shifted = if round {
        rounding_shift_right(exact(b), n)
    } else {
        exact(b) >> n
    };
    T::truncate(exact(a) + shifted)
}

fn lane_mask<T: Lane>() -> u64 {
    u64::MAX >> (64 - bits::<T>())
}

/// `b << n`, keeping the low `n` bits of `a`.
pub fn shift_left_insert<T: IntLane>(a: T, b: T, n: u32) -> T {
    let kept = a.to_bits() & ((1u64 << n) - 1);
    T::from_bits(((b.to_bits() << n) & lane_mask::<T>()) | kept)
}

/// `b >> n` (logical), keeping the high `n` bits of `a`.
pub fn shift_right_insert<T: IntLane>(a: T, b: T, n: u32) -> T {
    if n == bits::<T>() {
        return a;
    }
    let kept = a.to_bits() & !(lane_mask::<T>() >> n) & lane_mask::<T>();
    T::from_bits((b.to_bits() >> n) | kept)
}

// ---- conversions ----

pub fn narrow<T: IntLane, N: IntLane>(a: T) -> N {
    N::truncate(exact(a))
}

pub fn saturating_narrow<T: IntLane, N: IntLane>(a: T) -> N {
    saturate(exact(a))
}

/// Same numeric value in a wider lane.
pub fn lengthen<T: IntLane, W: IntLane>(a: T) -> W {
    W::truncate(exact(a))
}

/// Float to fixed point with `fraction` fraction bits: scale exactly, round
/// toward zero, saturate, NaN to zero.
pub fn to_fixed_i32(x: f32, fraction: u32) -> i32 {
    (x as f64 * (1u64 << fraction) as f64) as i32
}

pub fn to_fixed_u32(x: f32, fraction: u32) -> u32 {
    (x as f64 * (1u64 << fraction) as f64) as u32
}

/// Fixed point with `fraction` fraction bits to the nearest float.
pub fn from_fixed_i32(x: i32, fraction: u32) -> f32 {
    (x as f64 / (1u64 << fraction) as f64) as f32
}

pub fn from_fixed_u32(x: u32, fraction: u32) -> f32 {
    (x as f64 / (1u64 << fraction) as f64) as f32
}

// ---- floating point ----

const QUIET_BIT: u32 = 0x0040_0000;

fn is_signalling(x: f32) -> bool {
    x.is_nan() && f32::to_bits(x) & QUIET_BIT == 0
}

fn is_quiet_nan(x: f32) -> bool {
    x.is_nan() && f32::to_bits(x) & QUIET_BIT != 0
}

/// The NaN with its quiet bit set.
pub fn quiet(x: f32) -> f32 {
    f32::from_bits(f32::to_bits(x) | QUIET_BIT)
}

/// NaN operand propagation: a signalling NaN wins over a quiet one, then
/// the first operand over the second.
pub fn propagate_nan(a: f32, b: f32) -> Option<f32> {
    [a, b]
        .into_iter()
        .find(|&x| is_signalling(x))
        .or_else(|| [a, b].into_iter().find(|x| x.is_nan()))
        .map(quiet)
}

pub fn fmax(a: f32, b: f32) -> f32 {
    if let Some(nan) = propagate_nan(a, b) {
        return nan;
    }
    match a.partial_cmp(&b) {
        Some(std::cmp::Ordering::Greater) => a,
        Some(std::cmp::Ordering::Less) => b,
        // +0 beats -0
        _ => f32::from_bits(f32::to_bits(a) & f32::to_bits(b)),
    }
}

pub fn fmin(a: f32, b: f32) -> f32 {
    if let Some(nan) = propagate_nan(a, b) {
        return nan;
    }
    match a.partial_cmp(&b) {
        Some(std::cmp::Ordering::Less) => a,
        Some(std::cmp::Ordering::Greater) => b,
        // -0 beats +0
        _ => f32::from_bits(f32::to_bits(a) | f32::to_bits(b)),
    }
}

/// `fmax`, except that a single quiet NaN operand is ignored.
pub fn fmaxnm(a: f32, b: f32) -> f32 {
    match (is_quiet_nan(a), is_quiet_nan(b)) {
        (true, false) => fmax(f32::NEG_INFINITY, b),
        (false, true) => fmax(a, f32::NEG_INFINITY),
        _ => fmax(a, b),
    }
}

pub fn fminnm(a: f32, b: f32) -> f32 {
    match (is_quiet_nan(a), is_quiet_nan(b)) {
        (true, false) => fmin(f32::INFINITY, b),
        (false, true) => fmin(a, f32::INFINITY),
        _ => fmin(a, b),
    }
}

/// Newton-Raphson reciprocal step `2 - a*b`, fused. `inf * 0` gives 2.
pub fn recip_step(a: f32, b: f32) -> f32 {
    let a = -a;
    if let Some(nan) = propagate_nan(a, b) {
        return nan;
    }
    if (a.is_infinite() && b == 0.0) || (a == 0.0 && b.is_infinite()) {
        return 2.0;
    }
    a.mul_add(b, 2.0)
}

/// Newton-Raphson reciprocal square root step `(3 - a*b) / 2`, fused.
/// `inf * 0` gives 1.5.
pub fn rsqrt_step(a: f32, b: f32) -> f32 {
    let a = -a;
    if let Some(nan) = propagate_nan(a, b) {
        return nan;
    }
    if (a.is_infinite() && b == 0.0) || (a == 0.0 && b.is_infinite()) {
        return 1.5;
    }
    a.mul_add(b, 3.0) / 2.0
}

pub fn fabs(x: f32) -> f32 {
    f32::from_bits(f32::to_bits(x) & !(1 << 31))
}

pub fn fneg(x: f32) -> f32 {
    f32::from_bits(f32::to_bits(x) ^ (1 << 31))
}

pub fn fabd(a: f32, b: f32) -> f32 {
    fabs(a - b)
}

pub fn fadd(a: f32, b: f32) -> f32 {
    a + b
}

pub fn fsub(a: f32, b: f32) -> f32 {
    a - b
}

pub fn fmul(a: f32, b: f32) -> f32 {
    a * b
}

/// `a + b*c` with the product rounded first (`vmla_f32`).
pub fn fmla(a: f32, b: f32, c: f32) -> f32 {
    a + b * c
}

/// `a - b*c` with the product rounded first (`vmls_f32`).
pub fn fmls(a: f32, b: f32, c: f32) -> f32 {
    a - b * c
}

/// Fused `a + b*c`.
pub fn fma(a: f32, b: f32, c: f32) -> f32 {
    b.mul_add(c, a)
}

/// Fused `a - b*c`.
pub fn fms(a: f32, b: f32, c: f32) -> f32 {
    fneg(b).mul_add(c, a)
}

/// Rounds with `round`, quieting NaNs.
pub fn round_float(x: f32, round: fn(f32) -> f32) -> f32 {
    if x.is_nan() {
        quiet(x)
    } else {
        round(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturate_clamps_to_lane_range() {
        assert_eq!(saturate::<i8>(128), 127);
        assert_eq!(saturate::<i8>(-129), -128);
        assert_eq!(saturate::<u8>(-1), 0);
        assert_eq!(saturate::<u16>(70_000), u16::MAX);
        assert_eq!(saturate::<i32>(i64::MAX as i128), i32::MAX);
        assert_eq!(saturate::<u64>(i128::MAX), u64::MAX);
    }

    #[test]
    fn test_saturating_add_int8() {
        assert_eq!(saturating_add(127i8, 1), 127);
        assert_eq!(saturating_add(-128i8, -1), -128);
        assert_eq!(saturating_add(100i8, -28), 72);
        assert_eq!(saturating_sub(0u8, 1), 0);
    }

    #[test]
    fn test_halving_adds() {
        assert_eq!(halving_add(127i8, 127), 127);
        assert_eq!(halving_add(-3i8, 0), -2);
        assert_eq!(rounding_halving_add(-3i8, 0), -1);
        assert_eq!(rounding_halving_add(255u8, 255), 255);
        assert_eq!(halving_sub(0u8, 1), 255);
    }

    #[test]
    fn test_narrowing_high_halves() {
        assert_eq!(add_high_narrow::<i16, i8>(0x1234, 0x0100, false), 0x13);
        assert_eq!(add_high_narrow::<u16, u8>(0x00ff, 0x0001, false), 0x01);
        assert_eq!(add_high_narrow::<u16, u8>(0x0080, 0x0000, true), 0x01);
        assert_eq!(sub_high_narrow::<i16, i8>(0, 1, false), -1);
    }

    #[test]
    fn test_doubling_multiplies_saturate() {
        assert_eq!(doubling_mul_high(i16::MIN, i16::MIN), i16::MAX);
        assert_eq!(doubling_mul_high(0x4000i16, 0x4000), 0x2000);
        assert_eq!(rounding_doubling_mul_high(1i16, 0x4000), 1);
        assert_eq!(doubling_mul_long::<i32, i64>(i32::MIN, i32::MIN), i64::MAX);
    }

    #[test]
    fn test_abs_and_neg_edges() {
        assert_eq!(abs(i8::MIN), i8::MIN);
        assert_eq!(saturating_abs(i8::MIN), i8::MAX);
        assert_eq!(neg(i16::MIN), i16::MIN);
        assert_eq!(saturating_neg(i16::MIN), i16::MAX);
        assert_eq!(abs_diff(127i8, -128), -1);
        assert_eq!(abs_diff_long::<i8, i16>(127, -128), 255);
    }

    #[test]
    fn test_bit_counts() {
        assert_eq!(leading_sign_bits(0i8), 7);
        assert_eq!(leading_sign_bits(-1i8), 7);
        assert_eq!(leading_sign_bits(1i8), 6);
        assert_eq!(leading_sign_bits(i32::MIN), 0);
        assert_eq!(leading_zeros(0u16), 16);
        assert_eq!(leading_zeros(-1i32), 0);
        assert_eq!(population_count(-1i8), 8);
    }

    #[test]
    fn test_shift_by_register() {
        assert_eq!(shift_by_register(1i8, 7i8), i8::MIN);
        assert_eq!(shift_by_register(1i8, 8i8), 0);
        assert_eq!(shift_by_register(-128i8, -7i8), -1);
        assert_eq!(shift_by_register(-128i8, -100i8), -1);
        assert_eq!(shift_by_register(200u8, -100i8), 0);
        assert_eq!(shift_by_register(0x40u8, -6i8), 1);
        // only the low byte of the shift lane counts
        assert_eq!(shift_by_register(1i32, 0x0000_0102i32), 4);
        assert_eq!(shift_by_register(u64::MAX, 63i64), 1 << 63);
    }

    #[test]
    fn test_immediate_shifts() {
        assert_eq!(shift_left::<i8, i8>(3, 7), i8::MIN);
        assert_eq!(shift_right::<i8, i8>(-128, 8), -1);
        assert_eq!(shift_right::<u8, u8>(255, 8), 0);
        assert_eq!(rounding_shift_right_lane::<u8, u8>(255, 1), 128);
        assert_eq!(rounding_shift_right_lane::<i8, i8>(-3, 1), -1);
        assert_eq!(saturating_shift_right_narrow::<i16, i8>(0x7fff, 1), 127);
        assert_eq!(shift_right_accumulate(1u8, 255, 8, true), 2);
        assert_eq!(shift_left::<u8, u16>(255, 8), 0xff00);
    }

    #[test]
    fn test_shift_inserts() {
        assert_eq!(shift_left_insert(0b1111_1111u8, 0b0000_0001, 4), 0b0001_1111);
        assert_eq!(shift_right_insert(0b1111_1111u8, 0b1000_0000, 4), 0b1111_1000);
        assert_eq!(shift_right_insert(0x5au8, 0xff, 8), 0x5a);
        assert_eq!(shift_left_insert(i64::MAX, 1, 63), -1);
        assert_eq!(shift_left_insert(0i64, -1, 63), i64::MIN);
    }

    #[test]
    fn test_masks_and_select() {
        assert_eq!(mask::<u8>(true), 0xff);
        assert_eq!(mask::<u32>(false), 0);
        assert_eq!(bit_select(0xf0u8, 0xaau8, 0x55u8), 0xa5);
        assert_eq!(
            bit_select(0x8000_0000u32, -1.0f32, 2.0f32).to_bits(),
            (-2.0f32).to_bits()
        );
    }

    #[test]
    fn test_float_min_max_semantics() {
        assert_eq!(fmax(0.0, -0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(fmax(-0.0, 0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(fmin(0.0, -0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(fmax(f32::INFINITY, 1.0), f32::INFINITY);
        assert_eq!(fmin(f32::NEG_INFINITY, 1.0), f32::NEG_INFINITY);

        let nan = f32::from_bits(0x7fc0_0001);
        assert_eq!(fmax(nan, 1.0).to_bits(), 0x7fc0_0001);
        assert_eq!(fmin(1.0, nan).to_bits(), 0x7fc0_0001);
        assert_eq!(fmaxnm(nan, 1.0), 1.0);
        assert_eq!(fminnm(-1.0, nan), -1.0);

        let signalling = f32::from_bits(0x7f80_0001);
        assert_eq!(fmax(nan, signalling).to_bits(), 0x7fc0_0001);
        assert_eq!(fmaxnm(nan, signalling).to_bits(), 0x7fc0_0001);
    }

    #[test]
    fn test_reciprocal_steps() {
        assert_eq!(recip_step(2.0, 0.5), 1.0);
        assert_eq!(recip_step(f32::INFINITY, 0.0), 2.0);
        assert_eq!(recip_step(-0.0, f32::NEG_INFINITY), 2.0);
        assert_eq!(recip_step(f32::INFINITY, 1.0), f32::NEG_INFINITY);
        assert_eq!(rsqrt_step(1.0, 1.0), 1.0);
        assert_eq!(rsqrt_step(0.0, f32::INFINITY), 1.5);
        assert_eq!(rsqrt_step(4.0, 1.0), -0.5);
    }

    #[test]
    fn test_fixed_point_conversions() {
        assert_eq!(to_fixed_i32(1.5, 1), 3);
        assert_eq!(to_fixed_i32(-1.75, 1), -3);
        assert_eq!(to_fixed_i32(1.0e10, 1), i32::MAX);
        assert_eq!(to_fixed_i32(f32::NAN, 4), 0);
        assert_eq!(to_fixed_u32(-1.0, 4), 0);
        assert_eq!(from_fixed_i32(-3, 1), -1.5);
        assert_eq!(from_fixed_u32(u32::MAX, 32), 1.0);
    }

    #[test]
    fn test_sign_bit_operations() {
        assert_eq!(fabs(-0.0).to_bits(), 0);
        assert_eq!(fneg(0.0).to_bits(), 0x8000_0000);
        assert_eq!(fabs(f32::from_bits(0xffc0_0000)).to_bits(), 0x7fc0_0000);
    }
}
