//! Loads, stores, lane access, broadcast, combine/split, extract, reverse
//! and the two-register permutes.

use super::*;
use crate::simd::backend::*;
use crate::validate::{validate_lanes, validate_scalar};

fn lane_count<R: Register>(_: &R) -> usize {
    R::LANES
}

/// The register must hold the leading lanes of `source`.
fn check_copy<R: Register>(source: &[R::Lane], produced: R) -> Outcome {
    validate(produced, &source[..R::LANES]).into()
}

/// The register must hold the lanes that follow its own width in `source`.
fn check_high<R: Register>(source: &[R::Lane], produced: R) -> Outcome {
    validate(produced, &source[R::LANES..2 * R::LANES]).into()
}

fn check_concat<R: Register>(low: &[R::Lane], high: &[R::Lane], produced: R) -> Outcome {
    let half = R::LANES / 2;
    let expected: Vec<_> = low[..half].iter().chain(&high[..half]).copied().collect();
    validate(produced, &expected).into()
}

fn check_replaced<R: Register>(a: &[R::Lane], lane: usize, value: R::Lane, produced: R) -> Outcome {
    let mut expected = a[..R::LANES].to_vec();
    expected[lane] = value;
    validate(produced, &expected).into()
}

fn check_extract<R: Register>(a: &[R::Lane], b: &[R::Lane], n: usize, produced: R) -> Outcome {
    let len = R::LANES;
    let expected: Vec<_> = (n..n + len)
        .map(|j| if j < len { a[j] } else { b[j - len] })
        .collect();
    validate(produced, &expected).into()
}

// Lane `i` of each `group`-lane block comes from the mirrored position.
fn check_reverse<R: Register>(a: &[R::Lane], group: usize, produced: R) -> Outcome {
    let expected: Vec<_> = (0..R::LANES).map(|i| a[i ^ (group - 1)]).collect();
    validate(produced, &expected).into()
}

fn transpose<T: Copy>(a: &[T], b: &[T]) -> Vec<T> {
    let even = (0..a.len()).map(|i| if i % 2 == 0 { a[i] } else { b[i - 1] });
    let odd = (0..a.len()).map(|i| if i % 2 == 0 { a[i + 1] } else { b[i] });
    even.chain(odd).collect()
}

fn interleave<T: Copy>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().zip(b).flat_map(|(&x, &y)| [x, y]).collect()
}

fn deinterleave<T: Copy>(a: &[T], b: &[T]) -> Vec<T> {
    let joined: Vec<T> = a.iter().chain(b).copied().collect();
    let even = joined.iter().step_by(2);
    let odd = joined.iter().skip(1).step_by(2);
    even.chain(odd).copied().collect()
}

/// Permutes produce a register pair, checked as one run of lanes.
fn check_permute<R: Register>(
    a: &[R::Lane],
    b: &[R::Lane],
    produced: R,
    permute: fn(&[R::Lane], &[R::Lane]) -> Vec<R::Lane>,
) -> Outcome {
    let half = R::LANES / 2;
    validate(produced, &permute(&a[..half], &b[..half])).into()
}

macro_rules! load_tests {
    ($($test:ident = $load:ident @ $src:ident;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let a = $src(fx);
            // SAFETY: every scratch view spans a full register.
            check_copy(a, unsafe { $load(a.as_ptr()) })
        }
    )*};
}

/// Stores into a zeroed 16-byte buffer; lanes past the register must stay
/// untouched.
macro_rules! store_tests {
    ($($test:ident = $store:ident($load:ident @ $src:ident: $t:ty);)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let a: &[$t] = $src(fx);
            let mut out = [<$t>::default(); 16 / std::mem::size_of::<$t>()];
            // SAFETY: the view and `out` both span a full register.
            let count = unsafe {
                let v = $load(a.as_ptr());
                $store(out.as_mut_ptr(), v);
                lane_count(&v)
            };
            let mut expected = [<$t>::default(); 16 / std::mem::size_of::<$t>()];
            expected[..count].copy_from_slice(&a[..count]);
            validate_lanes(&out, &expected).into()
        }
    )*};
}

macro_rules! load_dup_tests {
    ($($test:ident = $dup:ident @ $src:ident;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let a = $src(fx);
            let value = a[0];
            // SAFETY: the view holds at least one lane.
            let r = unsafe { $dup(a.as_ptr()) };
            check_unary(a, r, |_| value)
        }
    )*};
}

macro_rules! broadcast_tests {
    ($($test:ident = $dup:ident @ $src:ident;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let a = $src(fx);
            let value = a[0];
            let r = unsafe { $dup(value) };
            check_unary(a, r, |_| value)
        }
    )*};
}

/// `vcreate` takes the first eight bytes of the integer window as a `u64`.
macro_rules! create_tests {
    ($($test:ident = $create:ident;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let bits = int_a::<u64>(fx)[0];
            let r = unsafe { $create(bits) };
            check_copy(int_a(fx), r)
        }
    )*};
}

macro_rules! get_lane_tests {
    ($($test:ident = $get:ident::<$($n:literal)+>($load:ident @ $src:ident: $t:ty);)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            fn check<const N: i32>(a: &[$t]) -> Outcome {
                // SAFETY: every scratch view spans a full register.
                let lane = unsafe { $get::<N>($load(a.as_ptr())) };
                validate_scalar(lane, a[N as usize]).into()
            }
            sweep!(check($src(fx)): $($n)+)
        }
    )*};
}

/// Lane `N` of `a` replaced by lane 0 of `b`.
macro_rules! set_lane_tests {
    ($($test:ident = $set:ident::<$($n:literal)+>($load:ident @ $sa:ident, $sb:ident: $t:ty);)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            fn check<const N: i32>((a, b): (&[$t], &[$t])) -> Outcome {
                // SAFETY: every scratch view spans a full register.
                let r = unsafe { $set::<N>(b[0], $load(a.as_ptr())) };
                check_replaced(a, N as usize, b[0], r)
            }
            sweep!(check(($sa(fx), $sb(fx))): $($n)+)
        }
    )*};
}

/// As `set_lane_tests`, with the new lane read through a pointer.
macro_rules! load_lane_tests {
    ($($test:ident = $op:ident::<$($n:literal)+>($load:ident @ $sa:ident, $sb:ident: $t:ty);)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            fn check<const N: i32>((a, b): (&[$t], &[$t])) -> Outcome {
                // SAFETY: both views span a full register.
                let r = unsafe { $op::<N>(b.as_ptr(), $load(a.as_ptr())) };
                check_replaced(a, N as usize, b[0], r)
            }
            sweep!(check(($sa(fx), $sb(fx))): $($n)+)
        }
    )*};
}

macro_rules! store_lane_tests {
    ($($test:ident = $op:ident::<$($n:literal)+>($load:ident @ $src:ident: $t:ty);)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            fn check<const N: i32>(a: &[$t]) -> Outcome {
                let mut out = <$t>::default();
                // SAFETY: the view spans a full register; `out` holds one lane.
                unsafe { $op::<N>(&mut out, $load(a.as_ptr())) };
                validate_scalar(out, a[N as usize]).into()
            }
            sweep!(check($src(fx)): $($n)+)
        }
    )*};
}

macro_rules! dup_lane_tests {
    ($($test:ident = $op:ident::<$($n:literal)+>($load:ident @ $src:ident: $t:ty);)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            fn check<const N: i32>(a: &[$t]) -> Outcome {
                // SAFETY: every scratch view spans a full register.
                let r = unsafe { $op::<N>($load(a.as_ptr())) };
                let value = a[N as usize];
                check_unary(a, r, |_| value)
            }
            sweep!(check($src(fx)): $($n)+)
        }
    )*};
}

macro_rules! extract_tests {
    ($($test:ident = $op:ident::<$($n:literal)+>($load:ident @ $sa:ident, $sb:ident: $t:ty);)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            fn check<const N: i32>((a, b): (&[$t], &[$t])) -> Outcome {
                // SAFETY: every scratch view spans a full register.
                let r = unsafe { $op::<N>($load(a.as_ptr()), $load(b.as_ptr())) };
                check_extract(a, b, N as usize, r)
            }
            sweep!(check(($sa(fx), $sb(fx))): $($n)+)
        }
    )*};
}

macro_rules! combine_tests {
    ($($test:ident = $op:ident($load:ident @ $sa:ident, $sb:ident);)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let (a, b) = ($sa(fx), $sb(fx));
            // SAFETY: every scratch view spans a full register.
            let r = unsafe { $op($load(a.as_ptr()), $load(b.as_ptr())) };
            check_concat(a, b, r)
        }
    )*};
}

macro_rules! split_tests {
    ($($test:ident = $op:ident($load:ident @ $src:ident) => $check:ident;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let a = $src(fx);
            // SAFETY: every scratch view spans a full register.
            let r = unsafe { $op($load(a.as_ptr())) };
            $check(a, r)
        }
    )*};
}

macro_rules! reverse_tests {
    ($($test:ident = $op:ident($load:ident @ $src:ident) / $group:literal;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let a = $src(fx);
            // SAFETY: every scratch view spans a full register.
            let r = unsafe { $op($load(a.as_ptr())) };
            check_reverse(a, $group, r)
        }
    )*};
}

macro_rules! permute_tests {
    ($($test:ident = $op:ident($load:ident @ $sa:ident, $sb:ident) => $permute:ident;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let (a, b) = ($sa(fx), $sb(fx));
            // SAFETY: every scratch view spans a full register.
            let r = unsafe { $op($load(a.as_ptr()), $load(b.as_ptr())) };
            check_permute(a, b, r, $permute)
        }
    )*};
}

load_tests! {
    test_vld1_s8 = vld1_s8 @ int_a;
    test_vld1q_s8 = vld1q_s8 @ int_a;
    test_vld1_s16 = vld1_s16 @ int_a;
    test_vld1q_s16 = vld1q_s16 @ int_a;
    test_vld1_s32 = vld1_s32 @ int_a;
    test_vld1q_s32 = vld1q_s32 @ int_a;
    test_vld1_s64 = vld1_s64 @ int_a;
    test_vld1q_s64 = vld1q_s64 @ int_a;
    test_vld1_u8 = vld1_u8 @ int_a;
    test_vld1q_u8 = vld1q_u8 @ int_a;
    test_vld1_u16 = vld1_u16 @ int_a;
    test_vld1q_u16 = vld1q_u16 @ int_a;
    test_vld1_u32 = vld1_u32 @ int_a;
    test_vld1q_u32 = vld1q_u32 @ int_a;
    test_vld1_u64 = vld1_u64 @ int_a;
    test_vld1q_u64 = vld1q_u64 @ int_a;
    test_vld1_f32 = vld1_f32 @ float_a;
    test_vld1q_f32 = vld1q_f32 @ float_a;
}

store_tests! {
    test_vst1_s8 = vst1_s8(vld1_s8 @ int_a: i8);
    test_vst1q_s8 = vst1q_s8(vld1q_s8 @ int_a: i8);
    test_vst1_s16 = vst1_s16(vld1_s16 @ int_a: i16);
    test_vst1q_s16 = vst1q_s16(vld1q_s16 @ int_a: i16);
    test_vst1_s32 = vst1_s32(vld1_s32 @ int_a: i32);
    test_vst1q_s32 = vst1q_s32(vld1q_s32 @ int_a: i32);
    test_vst1_s64 = vst1_s64(vld1_s64 @ int_a: i64);
    test_vst1q_s64 = vst1q_s64(vld1q_s64 @ int_a: i64);
    test_vst1_u8 = vst1_u8(vld1_u8 @ int_a: u8);
    test_vst1q_u8 = vst1q_u8(vld1q_u8 @ int_a: u8);
    test_vst1_u16 = vst1_u16(vld1_u16 @ int_a: u16);
    test_vst1q_u16 = vst1q_u16(vld1q_u16 @ int_a: u16);
    test_vst1_u32 = vst1_u32(vld1_u32 @ int_a: u32);
    test_vst1q_u32 = vst1q_u32(vld1q_u32 @ int_a: u32);
    test_vst1_u64 = vst1_u64(vld1_u64 @ int_a: u64);
    test_vst1q_u64 = vst1q_u64(vld1q_u64 @ int_a: u64);
    test_vst1_f32 = vst1_f32(vld1_f32 @ float_a: f32);
    test_vst1q_f32 = vst1q_f32(vld1q_f32 @ float_a: f32);
}

load_lane_tests! {
    test_vld1_lane_s8 = vld1_lane_s8::<0 1 2 3 4 5 6 7>(vld1_s8 @ int_a, int_b: i8);
    test_vld1q_lane_s8 = vld1q_lane_s8::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_s8 @ int_a, int_b: i8);
    test_vld1_lane_s16 = vld1_lane_s16::<0 1 2 3>(vld1_s16 @ int_a, int_b: i16);
    test_vld1q_lane_s16 = vld1q_lane_s16::<0 1 2 3 4 5 6 7>(vld1q_s16 @ int_a, int_b: i16);
    test_vld1_lane_s32 = vld1_lane_s32::<0 1>(vld1_s32 @ int_a, int_b: i32);
    test_vld1q_lane_s32 = vld1q_lane_s32::<0 1 2 3>(vld1q_s32 @ int_a, int_b: i32);
    test_vld1_lane_s64 = vld1_lane_s64::<0>(vld1_s64 @ int_a, int_b: i64);
    test_vld1q_lane_s64 = vld1q_lane_s64::<0 1>(vld1q_s64 @ int_a, int_b: i64);
    test_vld1_lane_u8 = vld1_lane_u8::<0 1 2 3 4 5 6 7>(vld1_u8 @ int_a, int_b: u8);
    test_vld1q_lane_u8 = vld1q_lane_u8::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_u8 @ int_a, int_b: u8);
    test_vld1_lane_u16 = vld1_lane_u16::<0 1 2 3>(vld1_u16 @ int_a, int_b: u16);
    test_vld1q_lane_u16 = vld1q_lane_u16::<0 1 2 3 4 5 6 7>(vld1q_u16 @ int_a, int_b: u16);
    test_vld1_lane_u32 = vld1_lane_u32::<0 1>(vld1_u32 @ int_a, int_b: u32);
    test_vld1q_lane_u32 = vld1q_lane_u32::<0 1 2 3>(vld1q_u32 @ int_a, int_b: u32);
    test_vld1_lane_u64 = vld1_lane_u64::<0>(vld1_u64 @ int_a, int_b: u64);
    test_vld1q_lane_u64 = vld1q_lane_u64::<0 1>(vld1q_u64 @ int_a, int_b: u64);
    test_vld1_lane_f32 = vld1_lane_f32::<0 1>(vld1_f32 @ float_a, float_b: f32);
    test_vld1q_lane_f32 = vld1q_lane_f32::<0 1 2 3>(vld1q_f32 @ float_a, float_b: f32);
}

store_lane_tests! {
    test_vst1_lane_s8 = vst1_lane_s8::<0 1 2 3 4 5 6 7>(vld1_s8 @ int_a: i8);
    test_vst1q_lane_s8 = vst1q_lane_s8::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_s8 @ int_a: i8);
    test_vst1_lane_s16 = vst1_lane_s16::<0 1 2 3>(vld1_s16 @ int_a: i16);
    test_vst1q_lane_s16 = vst1q_lane_s16::<0 1 2 3 4 5 6 7>(vld1q_s16 @ int_a: i16);
    test_vst1_lane_s32 = vst1_lane_s32::<0 1>(vld1_s32 @ int_a: i32);
    test_vst1q_lane_s32 = vst1q_lane_s32::<0 1 2 3>(vld1q_s32 @ int_a: i32);
    test_vst1_lane_s64 = vst1_lane_s64::<0>(vld1_s64 @ int_a: i64);
    test_vst1q_lane_s64 = vst1q_lane_s64::<0 1>(vld1q_s64 @ int_a: i64);
    test_vst1_lane_u8 = vst1_lane_u8::<0 1 2 3 4 5 6 7>(vld1_u8 @ int_a: u8);
    test_vst1q_lane_u8 = vst1q_lane_u8::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_u8 @ int_a: u8);
    test_vst1_lane_u16 = vst1_lane_u16::<0 1 2 3>(vld1_u16 @ int_a: u16);
    test_vst1q_lane_u16 = vst1q_lane_u16::<0 1 2 3 4 5 6 7>(vld1q_u16 @ int_a: u16);
    test_vst1_lane_u32 = vst1_lane_u32::<0 1>(vld1_u32 @ int_a: u32);
    test_vst1q_lane_u32 = vst1q_lane_u32::<0 1 2 3>(vld1q_u32 @ int_a: u32);
    test_vst1_lane_u64 = vst1_lane_u64::<0>(vld1_u64 @ int_a: u64);
    test_vst1q_lane_u64 = vst1q_lane_u64::<0 1>(vld1q_u64 @ int_a: u64);
    test_vst1_lane_f32 = vst1_lane_f32::<0 1>(vld1_f32 @ float_a: f32);
    test_vst1q_lane_f32 = vst1q_lane_f32::<0 1 2 3>(vld1q_f32 @ float_a: f32);
}

load_dup_tests! {
    test_vld1_dup_s8 = vld1_dup_s8 @ int_b;
    test_vld1q_dup_s8 = vld1q_dup_s8 @ int_b;
    test_vld1_dup_s16 = vld1_dup_s16 @ int_b;
    test_vld1q_dup_s16 = vld1q_dup_s16 @ int_b;
    test_vld1_dup_s32 = vld1_dup_s32 @ int_b;
    test_vld1q_dup_s32 = vld1q_dup_s32 @ int_b;
    test_vld1_dup_s64 = vld1_dup_s64 @ int_b;
    test_vld1q_dup_s64 = vld1q_dup_s64 @ int_b;
    test_vld1_dup_u8 = vld1_dup_u8 @ int_b;
    test_vld1q_dup_u8 = vld1q_dup_u8 @ int_b;
    test_vld1_dup_u16 = vld1_dup_u16 @ int_b;
    test_vld1q_dup_u16 = vld1q_dup_u16 @ int_b;
    test_vld1_dup_u32 = vld1_dup_u32 @ int_b;
    test_vld1q_dup_u32 = vld1q_dup_u32 @ int_b;
    test_vld1_dup_u64 = vld1_dup_u64 @ int_b;
    test_vld1q_dup_u64 = vld1q_dup_u64 @ int_b;
    test_vld1_dup_f32 = vld1_dup_f32 @ float_b;
    test_vld1q_dup_f32 = vld1q_dup_f32 @ float_b;
}

get_lane_tests! {
    test_vget_lane_s8 = vget_lane_s8::<0 1 2 3 4 5 6 7>(vld1_s8 @ int_a: i8);
    test_vgetq_lane_s8 = vgetq_lane_s8::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_s8 @ int_a: i8);
    test_vget_lane_s16 = vget_lane_s16::<0 1 2 3>(vld1_s16 @ int_a: i16);
    test_vgetq_lane_s16 = vgetq_lane_s16::<0 1 2 3 4 5 6 7>(vld1q_s16 @ int_a: i16);
    test_vget_lane_s32 = vget_lane_s32::<0 1>(vld1_s32 @ int_a: i32);
    test_vgetq_lane_s32 = vgetq_lane_s32::<0 1 2 3>(vld1q_s32 @ int_a: i32);
    test_vget_lane_s64 = vget_lane_s64::<0>(vld1_s64 @ int_a: i64);
    test_vgetq_lane_s64 = vgetq_lane_s64::<0 1>(vld1q_s64 @ int_a: i64);
    test_vget_lane_u8 = vget_lane_u8::<0 1 2 3 4 5 6 7>(vld1_u8 @ int_a: u8);
    test_vgetq_lane_u8 = vgetq_lane_u8::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_u8 @ int_a: u8);
    test_vget_lane_u16 = vget_lane_u16::<0 1 2 3>(vld1_u16 @ int_a: u16);
    test_vgetq_lane_u16 = vgetq_lane_u16::<0 1 2 3 4 5 6 7>(vld1q_u16 @ int_a: u16);
    test_vget_lane_u32 = vget_lane_u32::<0 1>(vld1_u32 @ int_a: u32);
    test_vgetq_lane_u32 = vgetq_lane_u32::<0 1 2 3>(vld1q_u32 @ int_a: u32);
    test_vget_lane_u64 = vget_lane_u64::<0>(vld1_u64 @ int_a: u64);
    test_vgetq_lane_u64 = vgetq_lane_u64::<0 1>(vld1q_u64 @ int_a: u64);
    test_vget_lane_f32 = vget_lane_f32::<0 1>(vld1_f32 @ float_a: f32);
    test_vgetq_lane_f32 = vgetq_lane_f32::<0 1 2 3>(vld1q_f32 @ float_a: f32);
}

set_lane_tests! {
    test_vset_lane_s8 = vset_lane_s8::<0 1 2 3 4 5 6 7>(vld1_s8 @ int_a, int_b: i8);
    test_vsetq_lane_s8 = vsetq_lane_s8::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_s8 @ int_a, int_b: i8);
    test_vset_lane_s16 = vset_lane_s16::<0 1 2 3>(vld1_s16 @ int_a, int_b: i16);
    test_vsetq_lane_s16 = vsetq_lane_s16::<0 1 2 3 4 5 6 7>(vld1q_s16 @ int_a, int_b: i16);
    test_vset_lane_s32 = vset_lane_s32::<0 1>(vld1_s32 @ int_a, int_b: i32);
    test_vsetq_lane_s32 = vsetq_lane_s32::<0 1 2 3>(vld1q_s32 @ int_a, int_b: i32);
    test_vset_lane_s64 = vset_lane_s64::<0>(vld1_s64 @ int_a, int_b: i64);
    test_vsetq_lane_s64 = vsetq_lane_s64::<0 1>(vld1q_s64 @ int_a, int_b: i64);
    test_vset_lane_u8 = vset_lane_u8::<0 1 2 3 4 5 6 7>(vld1_u8 @ int_a, int_b: u8);
    test_vsetq_lane_u8 = vsetq_lane_u8::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_u8 @ int_a, int_b: u8);
    test_vset_lane_u16 = vset_lane_u16::<0 1 2 3>(vld1_u16 @ int_a, int_b: u16);
    test_vsetq_lane_u16 = vsetq_lane_u16::<0 1 2 3 4 5 6 7>(vld1q_u16 @ int_a, int_b: u16);
    test_vset_lane_u32 = vset_lane_u32::<0 1>(vld1_u32 @ int_a, int_b: u32);
    test_vsetq_lane_u32 = vsetq_lane_u32::<0 1 2 3>(vld1q_u32 @ int_a, int_b: u32);
    test_vset_lane_u64 = vset_lane_u64::<0>(vld1_u64 @ int_a, int_b: u64);
    test_vsetq_lane_u64 = vsetq_lane_u64::<0 1>(vld1q_u64 @ int_a, int_b: u64);
    test_vset_lane_f32 = vset_lane_f32::<0 1>(vld1_f32 @ float_a, float_b: f32);
    test_vsetq_lane_f32 = vsetq_lane_f32::<0 1 2 3>(vld1q_f32 @ float_a, float_b: f32);
}

broadcast_tests! {
    test_vdup_n_s8 = vdup_n_s8 @ int_a;
    test_vmov_n_s8 = vmov_n_s8 @ int_a;
    test_vdupq_n_s8 = vdupq_n_s8 @ int_a;
    test_vmovq_n_s8 = vmovq_n_s8 @ int_a;
    test_vdup_n_s16 = vdup_n_s16 @ int_a;
    test_vmov_n_s16 = vmov_n_s16 @ int_a;
    test_vdupq_n_s16 = vdupq_n_s16 @ int_a;
    test_vmovq_n_s16 = vmovq_n_s16 @ int_a;
    test_vdup_n_s32 = vdup_n_s32 @ int_a;
    test_vmov_n_s32 = vmov_n_s32 @ int_a;
    test_vdupq_n_s32 = vdupq_n_s32 @ int_a;
    test_vmovq_n_s32 = vmovq_n_s32 @ int_a;
    test_vdup_n_s64 = vdup_n_s64 @ int_a;
    test_vmov_n_s64 = vmov_n_s64 @ int_a;
    test_vdupq_n_s64 = vdupq_n_s64 @ int_a;
    test_vmovq_n_s64 = vmovq_n_s64 @ int_a;
    test_vdup_n_u8 = vdup_n_u8 @ int_a;
    test_vmov_n_u8 = vmov_n_u8 @ int_a;
    test_vdupq_n_u8 = vdupq_n_u8 @ int_a;
    test_vmovq_n_u8 = vmovq_n_u8 @ int_a;
    test_vdup_n_u16 = vdup_n_u16 @ int_a;
    test_vmov_n_u16 = vmov_n_u16 @ int_a;
    test_vdupq_n_u16 = vdupq_n_u16 @ int_a;
    test_vmovq_n_u16 = vmovq_n_u16 @ int_a;
    test_vdup_n_u32 = vdup_n_u32 @ int_a;
    test_vmov_n_u32 = vmov_n_u32 @ int_a;
    test_vdupq_n_u32 = vdupq_n_u32 @ int_a;
    test_vmovq_n_u32 = vmovq_n_u32 @ int_a;
    test_vdup_n_u64 = vdup_n_u64 @ int_a;
    test_vmov_n_u64 = vmov_n_u64 @ int_a;
    test_vdupq_n_u64 = vdupq_n_u64 @ int_a;
    test_vmovq_n_u64 = vmovq_n_u64 @ int_a;
    test_vdup_n_f32 = vdup_n_f32 @ float_a;
    test_vmov_n_f32 = vmov_n_f32 @ float_a;
    test_vdupq_n_f32 = vdupq_n_f32 @ float_a;
    test_vmovq_n_f32 = vmovq_n_f32 @ float_a;
}

create_tests! {
    test_vcreate_s8 = vcreate_s8;
    test_vcreate_s16 = vcreate_s16;
    test_vcreate_s32 = vcreate_s32;
    test_vcreate_s64 = vcreate_s64;
    test_vcreate_u8 = vcreate_u8;
    test_vcreate_u16 = vcreate_u16;
    test_vcreate_u32 = vcreate_u32;
    test_vcreate_u64 = vcreate_u64;
    test_vcreate_f32 = vcreate_f32;
}

dup_lane_tests! {
    test_vdup_lane_s8 = vdup_lane_s8::<0 1 2 3 4 5 6 7>(vld1_s8 @ int_a: i8);
    test_vdupq_lane_s8 = vdupq_lane_s8::<0 1 2 3 4 5 6 7>(vld1_s8 @ int_a: i8);
    test_vdup_lane_s16 = vdup_lane_s16::<0 1 2 3>(vld1_s16 @ int_a: i16);
    test_vdupq_lane_s16 = vdupq_lane_s16::<0 1 2 3>(vld1_s16 @ int_a: i16);
    test_vdup_lane_s32 = vdup_lane_s32::<0 1>(vld1_s32 @ int_a: i32);
    test_vdupq_lane_s32 = vdupq_lane_s32::<0 1>(vld1_s32 @ int_a: i32);
    test_vdup_lane_s64 = vdup_lane_s64::<0>(vld1_s64 @ int_a: i64);
    test_vdupq_lane_s64 = vdupq_lane_s64::<0>(vld1_s64 @ int_a: i64);
    test_vdup_lane_u8 = vdup_lane_u8::<0 1 2 3 4 5 6 7>(vld1_u8 @ int_a: u8);
    test_vdupq_lane_u8 = vdupq_lane_u8::<0 1 2 3 4 5 6 7>(vld1_u8 @ int_a: u8);
    test_vdup_lane_u16 = vdup_lane_u16::<0 1 2 3>(vld1_u16 @ int_a: u16);
    test_vdupq_lane_u16 = vdupq_lane_u16::<0 1 2 3>(vld1_u16 @ int_a: u16);
    test_vdup_lane_u32 = vdup_lane_u32::<0 1>(vld1_u32 @ int_a: u32);
    test_vdupq_lane_u32 = vdupq_lane_u32::<0 1>(vld1_u32 @ int_a: u32);
    test_vdup_lane_u64 = vdup_lane_u64::<0>(vld1_u64 @ int_a: u64);
    test_vdupq_lane_u64 = vdupq_lane_u64::<0>(vld1_u64 @ int_a: u64);
    test_vdup_lane_f32 = vdup_lane_f32::<0 1>(vld1_f32 @ float_a: f32);
    test_vdupq_lane_f32 = vdupq_lane_f32::<0 1>(vld1_f32 @ float_a: f32);
}

extract_tests! {
    test_vext_s8 = vext_s8::<0 1 2 3 4 5 6 7>(vld1_s8 @ int_a, int_b: i8);
    test_vextq_s8 = vextq_s8::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_s8 @ int_a, int_b: i8);
    test_vext_s16 = vext_s16::<0 1 2 3>(vld1_s16 @ int_a, int_b: i16);
    test_vextq_s16 = vextq_s16::<0 1 2 3 4 5 6 7>(vld1q_s16 @ int_a, int_b: i16);
    test_vext_s32 = vext_s32::<0 1>(vld1_s32 @ int_a, int_b: i32);
    test_vextq_s32 = vextq_s32::<0 1 2 3>(vld1q_s32 @ int_a, int_b: i32);
    test_vext_s64 = vext_s64::<0>(vld1_s64 @ int_a, int_b: i64);
    test_vextq_s64 = vextq_s64::<0 1>(vld1q_s64 @ int_a, int_b: i64);
    test_vext_u8 = vext_u8::<0 1 2 3 4 5 6 7>(vld1_u8 @ int_a, int_b: u8);
    test_vextq_u8 = vextq_u8::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_u8 @ int_a, int_b: u8);
    test_vext_u16 = vext_u16::<0 1 2 3>(vld1_u16 @ int_a, int_b: u16);
    test_vextq_u16 = vextq_u16::<0 1 2 3 4 5 6 7>(vld1q_u16 @ int_a, int_b: u16);
    test_vext_u32 = vext_u32::<0 1>(vld1_u32 @ int_a, int_b: u32);
    test_vextq_u32 = vextq_u32::<0 1 2 3>(vld1q_u32 @ int_a, int_b: u32);
    test_vext_u64 = vext_u64::<0>(vld1_u64 @ int_a, int_b: u64);
    test_vextq_u64 = vextq_u64::<0 1>(vld1q_u64 @ int_a, int_b: u64);
    test_vext_f32 = vext_f32::<0 1>(vld1_f32 @ float_a, float_b: f32);
    test_vextq_f32 = vextq_f32::<0 1 2 3>(vld1q_f32 @ float_a, float_b: f32);
}

combine_tests! {
    test_vcombine_s8 = vcombine_s8(vld1_s8 @ int_a, int_b);
    test_vcombine_s16 = vcombine_s16(vld1_s16 @ int_a, int_b);
    test_vcombine_s32 = vcombine_s32(vld1_s32 @ int_a, int_b);
    test_vcombine_s64 = vcombine_s64(vld1_s64 @ int_a, int_b);
    test_vcombine_u8 = vcombine_u8(vld1_u8 @ int_a, int_b);
    test_vcombine_u16 = vcombine_u16(vld1_u16 @ int_a, int_b);
    test_vcombine_u32 = vcombine_u32(vld1_u32 @ int_a, int_b);
    test_vcombine_u64 = vcombine_u64(vld1_u64 @ int_a, int_b);
    test_vcombine_f32 = vcombine_f32(vld1_f32 @ float_a, float_b);
}

split_tests! {
    test_vget_high_s8 = vget_high_s8(vld1q_s8 @ int_a) => check_high;
    test_vget_low_s8 = vget_low_s8(vld1q_s8 @ int_a) => check_copy;
    test_vget_high_s16 = vget_high_s16(vld1q_s16 @ int_a) => check_high;
    test_vget_low_s16 = vget_low_s16(vld1q_s16 @ int_a) => check_copy;
    test_vget_high_s32 = vget_high_s32(vld1q_s32 @ int_a) => check_high;
    test_vget_low_s32 = vget_low_s32(vld1q_s32 @ int_a) => check_copy;
    test_vget_high_s64 = vget_high_s64(vld1q_s64 @ int_a) => check_high;
    test_vget_low_s64 = vget_low_s64(vld1q_s64 @ int_a) => check_copy;
    test_vget_high_u8 = vget_high_u8(vld1q_u8 @ int_a) => check_high;
    test_vget_low_u8 = vget_low_u8(vld1q_u8 @ int_a) => check_copy;
    test_vget_high_u16 = vget_high_u16(vld1q_u16 @ int_a) => check_high;
    test_vget_low_u16 = vget_low_u16(vld1q_u16 @ int_a) => check_copy;
    test_vget_high_u32 = vget_high_u32(vld1q_u32 @ int_a) => check_high;
    test_vget_low_u32 = vget_low_u32(vld1q_u32 @ int_a) => check_copy;
    test_vget_high_u64 = vget_high_u64(vld1q_u64 @ int_a) => check_high;
    test_vget_low_u64 = vget_low_u64(vld1q_u64 @ int_a) => check_copy;
    test_vget_high_f32 = vget_high_f32(vld1q_f32 @ float_a) => check_high;
    test_vget_low_f32 = vget_low_f32(vld1q_f32 @ float_a) => check_copy;
}

reverse_tests! {
    test_vrev64_s8 = vrev64_s8(vld1_s8 @ int_a) / 8;
    test_vrev64q_s8 = vrev64q_s8(vld1q_s8 @ int_a) / 8;
    test_vrev64_s16 = vrev64_s16(vld1_s16 @ int_a) / 4;
    test_vrev64q_s16 = vrev64q_s16(vld1q_s16 @ int_a) / 4;
    test_vrev64_s32 = vrev64_s32(vld1_s32 @ int_a) / 2;
    test_vrev64q_s32 = vrev64q_s32(vld1q_s32 @ int_a) / 2;
    test_vrev64_u8 = vrev64_u8(vld1_u8 @ int_a) / 8;
    test_vrev64q_u8 = vrev64q_u8(vld1q_u8 @ int_a) / 8;
    test_vrev64_u16 = vrev64_u16(vld1_u16 @ int_a) / 4;
    test_vrev64q_u16 = vrev64q_u16(vld1q_u16 @ int_a) / 4;
    test_vrev64_u32 = vrev64_u32(vld1_u32 @ int_a) / 2;
    test_vrev64q_u32 = vrev64q_u32(vld1q_u32 @ int_a) / 2;
    test_vrev64_f32 = vrev64_f32(vld1_f32 @ float_a) / 2;
    test_vrev64q_f32 = vrev64q_f32(vld1q_f32 @ float_a) / 2;
    test_vrev32_s8 = vrev32_s8(vld1_s8 @ int_a) / 4;
    test_vrev32q_s8 = vrev32q_s8(vld1q_s8 @ int_a) / 4;
    test_vrev32_s16 = vrev32_s16(vld1_s16 @ int_a) / 2;
    test_vrev32q_s16 = vrev32q_s16(vld1q_s16 @ int_a) / 2;
    test_vrev32_u8 = vrev32_u8(vld1_u8 @ int_a) / 4;
    test_vrev32q_u8 = vrev32q_u8(vld1q_u8 @ int_a) / 4;
    test_vrev32_u16 = vrev32_u16(vld1_u16 @ int_a) / 2;
    test_vrev32q_u16 = vrev32q_u16(vld1q_u16 @ int_a) / 2;
    test_vrev16_s8 = vrev16_s8(vld1_s8 @ int_a) / 2;
    test_vrev16q_s8 = vrev16q_s8(vld1q_s8 @ int_a) / 2;
    test_vrev16_u8 = vrev16_u8(vld1_u8 @ int_a) / 2;
    test_vrev16q_u8 = vrev16q_u8(vld1q_u8 @ int_a) / 2;
}

permute_tests! {
    test_vtrn_s8 = vtrn_s8(vld1_s8 @ int_a, int_b) => transpose;
    test_vtrnq_s8 = vtrnq_s8(vld1q_s8 @ int_a, int_b) => transpose;
    test_vtrn_s16 = vtrn_s16(vld1_s16 @ int_a, int_b) => transpose;
    test_vtrnq_s16 = vtrnq_s16(vld1q_s16 @ int_a, int_b) => transpose;
    test_vtrn_s32 = vtrn_s32(vld1_s32 @ int_a, int_b) => transpose;
    test_vtrnq_s32 = vtrnq_s32(vld1q_s32 @ int_a, int_b) => transpose;
    test_vtrn_u8 = vtrn_u8(vld1_u8 @ int_a, int_b) => transpose;
    test_vtrnq_u8 = vtrnq_u8(vld1q_u8 @ int_a, int_b) => transpose;
    test_vtrn_u16 = vtrn_u16(vld1_u16 @ int_a, int_b) => transpose;
    test_vtrnq_u16 = vtrnq_u16(vld1q_u16 @ int_a, int_b) => transpose;
    test_vtrn_u32 = vtrn_u32(vld1_u32 @ int_a, int_b) => transpose;
    test_vtrnq_u32 = vtrnq_u32(vld1q_u32 @ int_a, int_b) => transpose;
    test_vtrn_f32 = vtrn_f32(vld1_f32 @ float_a, float_b) => transpose;
    test_vtrnq_f32 = vtrnq_f32(vld1q_f32 @ float_a, float_b) => transpose;
    test_vzip_s8 = vzip_s8(vld1_s8 @ int_a, int_b) => interleave;
    test_vzipq_s8 = vzipq_s8(vld1q_s8 @ int_a, int_b) => interleave;
    test_vzip_s16 = vzip_s16(vld1_s16 @ int_a, int_b) => interleave;
    test_vzipq_s16 = vzipq_s16(vld1q_s16 @ int_a, int_b) => interleave;
    test_vzip_s32 = vzip_s32(vld1_s32 @ int_a, int_b) => interleave;
    test_vzipq_s32 = vzipq_s32(vld1q_s32 @ int_a, int_b) => interleave;
    test_vzip_u8 = vzip_u8(vld1_u8 @ int_a, int_b) => interleave;
    test_vzipq_u8 = vzipq_u8(vld1q_u8 @ int_a, int_b) => interleave;
    test_vzip_u16 = vzip_u16(vld1_u16 @ int_a, int_b) => interleave;
    test_vzipq_u16 = vzipq_u16(vld1q_u16 @ int_a, int_b) => interleave;
    test_vzip_u32 = vzip_u32(vld1_u32 @ int_a, int_b) => interleave;
    test_vzipq_u32 = vzipq_u32(vld1q_u32 @ int_a, int_b) => interleave;
    test_vzip_f32 = vzip_f32(vld1_f32 @ float_a, float_b) => interleave;
    test_vzipq_f32 = vzipq_f32(vld1q_f32 @ float_a, float_b) => interleave;
    test_vuzp_s8 = vuzp_s8(vld1_s8 @ int_a, int_b) => deinterleave;
    test_vuzpq_s8 = vuzpq_s8(vld1q_s8 @ int_a, int_b) => deinterleave;
    test_vuzp_s16 = vuzp_s16(vld1_s16 @ int_a, int_b) => deinterleave;
    test_vuzpq_s16 = vuzpq_s16(vld1q_s16 @ int_a, int_b) => deinterleave;
    test_vuzp_s32 = vuzp_s32(vld1_s32 @ int_a, int_b) => deinterleave;
    test_vuzpq_s32 = vuzpq_s32(vld1q_s32 @ int_a, int_b) => deinterleave;
    test_vuzp_u8 = vuzp_u8(vld1_u8 @ int_a, int_b) => deinterleave;
    test_vuzpq_u8 = vuzpq_u8(vld1q_u8 @ int_a, int_b) => deinterleave;
    test_vuzp_u16 = vuzp_u16(vld1_u16 @ int_a, int_b) => deinterleave;
    test_vuzpq_u16 = vuzpq_u16(vld1q_u16 @ int_a, int_b) => deinterleave;
    test_vuzp_u32 = vuzp_u32(vld1_u32 @ int_a, int_b) => deinterleave;
    test_vuzpq_u32 = vuzpq_u32(vld1q_u32 @ int_a, int_b) => deinterleave;
    test_vuzp_f32 = vuzp_f32(vld1_f32 @ float_a, float_b) => deinterleave;
    test_vuzpq_f32 = vuzpq_f32(vld1q_f32 @ float_a, float_b) => deinterleave;
}
