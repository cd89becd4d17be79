//! Arithmetic: add, subtract, multiply and accumulate, absolute values
//! and differences, min/max, pairwise reductions, rounding and the
//! Newton-Raphson steps.

use super::*;
use crate::reference::*;
use crate::simd::backend::*;

/// A register operand combined with lane 0 of another view as scalar.
macro_rules! by_scalar_tests {
    ($($test:ident = $op:ident($load:ident @ $sa:ident, $sb:ident) => $f:expr;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let (a, b) = ($sa(fx), $sb(fx)[0]);
            // SAFETY: every scratch view spans a full register.
            let r = unsafe { $op($load(a.as_ptr()), b) };
            check_unary(a, r, |x| $f(x, b))
        }
    )*};
}

macro_rules! accumulate_by_scalar_tests {
    ($($test:ident = $op:ident($la:ident @ $sa:ident, $lb:ident @ $sb:ident, $sc:ident) => $f:expr;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let (a, b, c) = ($sa(fx), $sb(fx), $sc(fx)[0]);
            // SAFETY: every scratch view spans a full register.
            let r = unsafe { $op($la(a.as_ptr()), $lb(b.as_ptr()), c) };
            check_binary(a, b, r, |x, y| $f(x, y, c))
        }
    )*};
}

macro_rules! pairwise_tests {
    ($($test:ident = $op:ident($load:ident @ $sa:ident, $sb:ident) => $f:expr;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let (a, b) = ($sa(fx), $sb(fx));
            // SAFETY: every scratch view spans a full register.
            let r = unsafe { $op($load(a.as_ptr()), $load(b.as_ptr())) };
            check_pairwise(a, b, r, $f)
        }
    )*};
}

macro_rules! pairwise_long_tests {
    ($($test:ident = $op:ident($load:ident @ $src:ident);)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let a = $src(fx);
            // SAFETY: every scratch view spans a full register.
            let r = unsafe { $op($load(a.as_ptr())) };
            check_pairs(a, r, long_add)
        }
    )*};
}

macro_rules! pairwise_accumulate_tests {
    ($($test:ident = $op:ident($la:ident @ $sa:ident, $lb:ident @ $sb:ident);)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let (acc, a) = ($sa(fx), $sb(fx));
            // SAFETY: every scratch view spans a full register.
            let r = unsafe { $op($la(acc.as_ptr()), $lb(a.as_ptr())) };
            check_pairs_accumulate(acc, a, r, pairwise_accumulate)
        }
    )*};
}

binary_tests! {
    test_vadd_s8 = vadd_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => add;
    test_vaddq_s8 = vaddq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => add;
    test_vadd_s16 = vadd_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => add;
    test_vaddq_s16 = vaddq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => add;
    test_vadd_s32 = vadd_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => add;
    test_vaddq_s32 = vaddq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => add;
    test_vadd_s64 = vadd_s64(vld1_s64 @ int_a, vld1_s64 @ int_b) => add;
    test_vaddq_s64 = vaddq_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => add;
    test_vadd_u8 = vadd_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => add;
    test_vaddq_u8 = vaddq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => add;
    test_vadd_u16 = vadd_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => add;
    test_vaddq_u16 = vaddq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => add;
    test_vadd_u32 = vadd_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => add;
    test_vaddq_u32 = vaddq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => add;
    test_vadd_u64 = vadd_u64(vld1_u64 @ int_a, vld1_u64 @ int_b) => add;
    test_vaddq_u64 = vaddq_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => add;
    test_vadd_f32 = vadd_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => fadd;
    test_vaddq_f32 = vaddq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => fadd;
    test_vsub_s8 = vsub_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => sub;
    test_vsubq_s8 = vsubq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => sub;
    test_vsub_s16 = vsub_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => sub;
    test_vsubq_s16 = vsubq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => sub;
    test_vsub_s32 = vsub_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => sub;
    test_vsubq_s32 = vsubq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => sub;
    test_vsub_s64 = vsub_s64(vld1_s64 @ int_a, vld1_s64 @ int_b) => sub;
    test_vsubq_s64 = vsubq_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => sub;
    test_vsub_u8 = vsub_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => sub;
    test_vsubq_u8 = vsubq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => sub;
    test_vsub_u16 = vsub_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => sub;
    test_vsubq_u16 = vsubq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => sub;
    test_vsub_u32 = vsub_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => sub;
    test_vsubq_u32 = vsubq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => sub;
    test_vsub_u64 = vsub_u64(vld1_u64 @ int_a, vld1_u64 @ int_b) => sub;
    test_vsubq_u64 = vsubq_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => sub;
    test_vsub_f32 = vsub_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => fsub;
    test_vsubq_f32 = vsubq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => fsub;
    test_vmul_s8 = vmul_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => mul;
    test_vmulq_s8 = vmulq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => mul;
    test_vmul_s16 = vmul_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => mul;
    test_vmulq_s16 = vmulq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => mul;
    test_vmul_s32 = vmul_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => mul;
    test_vmulq_s32 = vmulq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => mul;
    test_vmul_u8 = vmul_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => mul;
    test_vmulq_u8 = vmulq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => mul;
    test_vmul_u16 = vmul_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => mul;
    test_vmulq_u16 = vmulq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => mul;
    test_vmul_u32 = vmul_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => mul;
    test_vmulq_u32 = vmulq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => mul;
    test_vmul_f32 = vmul_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => fmul;
    test_vmulq_f32 = vmulq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => fmul;
    test_vqadd_s8 = vqadd_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => saturating_add;
    test_vqaddq_s8 = vqaddq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => saturating_add;
    test_vqadd_s16 = vqadd_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => saturating_add;
    test_vqaddq_s16 = vqaddq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => saturating_add;
    test_vqadd_s32 = vqadd_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => saturating_add;
    test_vqaddq_s32 = vqaddq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => saturating_add;
    test_vqadd_s64 = vqadd_s64(vld1_s64 @ int_a, vld1_s64 @ int_b) => saturating_add;
    test_vqaddq_s64 = vqaddq_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => saturating_add;
    test_vqadd_u8 = vqadd_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => saturating_add;
    test_vqaddq_u8 = vqaddq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => saturating_add;
    test_vqadd_u16 = vqadd_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => saturating_add;
    test_vqaddq_u16 = vqaddq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => saturating_add;
    test_vqadd_u32 = vqadd_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => saturating_add;
    test_vqaddq_u32 = vqaddq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => saturating_add;
    test_vqadd_u64 = vqadd_u64(vld1_u64 @ int_a, vld1_u64 @ int_b) => saturating_add;
    test_vqaddq_u64 = vqaddq_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => saturating_add;
    test_vqsub_s8 = vqsub_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => saturating_sub;
    test_vqsubq_s8 = vqsubq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => saturating_sub;
    test_vqsub_s16 = vqsub_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => saturating_sub;
    test_vqsubq_s16 = vqsubq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => saturating_sub;
    test_vqsub_s32 = vqsub_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => saturating_sub;
    test_vqsubq_s32 = vqsubq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => saturating_sub;
    test_vqsub_s64 = vqsub_s64(vld1_s64 @ int_a, vld1_s64 @ int_b) => saturating_sub;
    test_vqsubq_s64 = vqsubq_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => saturating_sub;
    test_vqsub_u8 = vqsub_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => saturating_sub;
    test_vqsubq_u8 = vqsubq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => saturating_sub;
    test_vqsub_u16 = vqsub_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => saturating_sub;
    test_vqsubq_u16 = vqsubq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => saturating_sub;
    test_vqsub_u32 = vqsub_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => saturating_sub;
    test_vqsubq_u32 = vqsubq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => saturating_sub;
    test_vqsub_u64 = vqsub_u64(vld1_u64 @ int_a, vld1_u64 @ int_b) => saturating_sub;
    test_vqsubq_u64 = vqsubq_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => saturating_sub;
    test_vhadd_s8 = vhadd_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => halving_add;
    test_vhaddq_s8 = vhaddq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => halving_add;
    test_vhadd_s16 = vhadd_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => halving_add;
    test_vhaddq_s16 = vhaddq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => halving_add;
    test_vhadd_s32 = vhadd_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => halving_add;
    test_vhaddq_s32 = vhaddq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => halving_add;
    test_vhadd_u8 = vhadd_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => halving_add;
    test_vhaddq_u8 = vhaddq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => halving_add;
    test_vhadd_u16 = vhadd_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => halving_add;
    test_vhaddq_u16 = vhaddq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => halving_add;
    test_vhadd_u32 = vhadd_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => halving_add;
    test_vhaddq_u32 = vhaddq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => halving_add;
    test_vrhadd_s8 = vrhadd_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => rounding_halving_add;
    test_vrhaddq_s8 = vrhaddq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => rounding_halving_add;
    test_vrhadd_s16 = vrhadd_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => rounding_halving_add;
    test_vrhaddq_s16 = vrhaddq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => rounding_halving_add;
    test_vrhadd_s32 = vrhadd_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => rounding_halving_add;
    test_vrhaddq_s32 = vrhaddq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => rounding_halving_add;
    test_vrhadd_u8 = vrhadd_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => rounding_halving_add;
    test_vrhaddq_u8 = vrhaddq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => rounding_halving_add;
    test_vrhadd_u16 = vrhadd_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => rounding_halving_add;
    test_vrhaddq_u16 = vrhaddq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => rounding_halving_add;
    test_vrhadd_u32 = vrhadd_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => rounding_halving_add;
    test_vrhaddq_u32 = vrhaddq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => rounding_halving_add;
    test_vhsub_s8 = vhsub_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => halving_sub;
    test_vhsubq_s8 = vhsubq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => halving_sub;
    test_vhsub_s16 = vhsub_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => halving_sub;
    test_vhsubq_s16 = vhsubq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => halving_sub;
    test_vhsub_s32 = vhsub_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => halving_sub;
    test_vhsubq_s32 = vhsubq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => halving_sub;
    test_vhsub_u8 = vhsub_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => halving_sub;
    test_vhsubq_u8 = vhsubq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => halving_sub;
    test_vhsub_u16 = vhsub_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => halving_sub;
    test_vhsubq_u16 = vhsubq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => halving_sub;
    test_vhsub_u32 = vhsub_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => halving_sub;
    test_vhsubq_u32 = vhsubq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => halving_sub;
    test_vaddl_s8 = vaddl_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => long_add;
    test_vaddl_s16 = vaddl_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => long_add;
    test_vaddl_s32 = vaddl_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => long_add;
    test_vaddl_u8 = vaddl_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => long_add;
    test_vaddl_u16 = vaddl_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => long_add;
    test_vaddl_u32 = vaddl_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => long_add;
    test_vsubl_s8 = vsubl_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => long_sub;
    test_vsubl_s16 = vsubl_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => long_sub;
    test_vsubl_s32 = vsubl_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => long_sub;
    test_vsubl_u8 = vsubl_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => long_sub;
    test_vsubl_u16 = vsubl_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => long_sub;
    test_vsubl_u32 = vsubl_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => long_sub;
    test_vmull_s8 = vmull_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => long_mul;
    test_vmull_s16 = vmull_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => long_mul;
    test_vmull_s32 = vmull_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => long_mul;
    test_vmull_u8 = vmull_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => long_mul;
    test_vmull_u16 = vmull_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => long_mul;
    test_vmull_u32 = vmull_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => long_mul;
    test_vabdl_s8 = vabdl_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => abs_diff_long;
    test_vabdl_s16 = vabdl_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => abs_diff_long;
    test_vabdl_s32 = vabdl_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => abs_diff_long;
    test_vabdl_u8 = vabdl_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => abs_diff_long;
    test_vabdl_u16 = vabdl_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => abs_diff_long;
    test_vabdl_u32 = vabdl_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => abs_diff_long;
    test_vaddw_s8 = vaddw_s8(vld1q_s16 @ int_a, vld1_s8 @ int_b) => long_add;
    test_vaddw_s16 = vaddw_s16(vld1q_s32 @ int_a, vld1_s16 @ int_b) => long_add;
    test_vaddw_s32 = vaddw_s32(vld1q_s64 @ int_a, vld1_s32 @ int_b) => long_add;
    test_vaddw_u8 = vaddw_u8(vld1q_u16 @ int_a, vld1_u8 @ int_b) => long_add;
    test_vaddw_u16 = vaddw_u16(vld1q_u32 @ int_a, vld1_u16 @ int_b) => long_add;
    test_vaddw_u32 = vaddw_u32(vld1q_u64 @ int_a, vld1_u32 @ int_b) => long_add;
    test_vsubw_s8 = vsubw_s8(vld1q_s16 @ int_a, vld1_s8 @ int_b) => long_sub;
    test_vsubw_s16 = vsubw_s16(vld1q_s32 @ int_a, vld1_s16 @ int_b) => long_sub;
    test_vsubw_s32 = vsubw_s32(vld1q_s64 @ int_a, vld1_s32 @ int_b) => long_sub;
    test_vsubw_u8 = vsubw_u8(vld1q_u16 @ int_a, vld1_u8 @ int_b) => long_sub;
    test_vsubw_u16 = vsubw_u16(vld1q_u32 @ int_a, vld1_u16 @ int_b) => long_sub;
    test_vsubw_u32 = vsubw_u32(vld1q_u64 @ int_a, vld1_u32 @ int_b) => long_sub;
    test_vaddhn_s16 = vaddhn_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| add_high_narrow(x, y, false);
    test_vaddhn_s32 = vaddhn_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| add_high_narrow(x, y, false);
    test_vaddhn_s64 = vaddhn_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => |x, y| add_high_narrow(x, y, false);
    test_vaddhn_u16 = vaddhn_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| add_high_narrow(x, y, false);
    test_vaddhn_u32 = vaddhn_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| add_high_narrow(x, y, false);
    test_vaddhn_u64 = vaddhn_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => |x, y| add_high_narrow(x, y, false);
    test_vraddhn_s16 = vraddhn_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| add_high_narrow(x, y, true);
    test_vraddhn_s32 = vraddhn_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| add_high_narrow(x, y, true);
    test_vraddhn_s64 = vraddhn_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => |x, y| add_high_narrow(x, y, true);
    test_vraddhn_u16 = vraddhn_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| add_high_narrow(x, y, true);
    test_vraddhn_u32 = vraddhn_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| add_high_narrow(x, y, true);
    test_vraddhn_u64 = vraddhn_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => |x, y| add_high_narrow(x, y, true);
    test_vsubhn_s16 = vsubhn_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| sub_high_narrow(x, y, false);
    test_vsubhn_s32 = vsubhn_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| sub_high_narrow(x, y, false);
    test_vsubhn_s64 = vsubhn_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => |x, y| sub_high_narrow(x, y, false);
    test_vsubhn_u16 = vsubhn_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| sub_high_narrow(x, y, false);
    test_vsubhn_u32 = vsubhn_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| sub_high_narrow(x, y, false);
    test_vsubhn_u64 = vsubhn_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => |x, y| sub_high_narrow(x, y, false);
    test_vrsubhn_s16 = vrsubhn_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| sub_high_narrow(x, y, true);
    test_vrsubhn_s32 = vrsubhn_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| sub_high_narrow(x, y, true);
    test_vrsubhn_s64 = vrsubhn_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => |x, y| sub_high_narrow(x, y, true);
    test_vrsubhn_u16 = vrsubhn_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| sub_high_narrow(x, y, true);
    test_vrsubhn_u32 = vrsubhn_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| sub_high_narrow(x, y, true);
    test_vrsubhn_u64 = vrsubhn_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => |x, y| sub_high_narrow(x, y, true);
    test_vqdmulh_s16 = vqdmulh_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => doubling_mul_high;
    test_vqdmulhq_s16 = vqdmulhq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => doubling_mul_high;
    test_vqdmulh_s32 = vqdmulh_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => doubling_mul_high;
    test_vqdmulhq_s32 = vqdmulhq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => doubling_mul_high;
    test_vqrdmulh_s16 = vqrdmulh_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => rounding_doubling_mul_high;
    test_vqrdmulhq_s16 = vqrdmulhq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => rounding_doubling_mul_high;
    test_vqrdmulh_s32 = vqrdmulh_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => rounding_doubling_mul_high;
    test_vqrdmulhq_s32 = vqrdmulhq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => rounding_doubling_mul_high;
    test_vqdmull_s16 = vqdmull_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => doubling_mul_long;
    test_vqdmull_s32 = vqdmull_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => doubling_mul_long;
    test_vabd_s8 = vabd_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => abs_diff;
    test_vabdq_s8 = vabdq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => abs_diff;
    test_vabd_s16 = vabd_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => abs_diff;
    test_vabdq_s16 = vabdq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => abs_diff;
    test_vabd_s32 = vabd_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => abs_diff;
    test_vabdq_s32 = vabdq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => abs_diff;
    test_vabd_u8 = vabd_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => abs_diff;
    test_vabdq_u8 = vabdq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => abs_diff;
    test_vabd_u16 = vabd_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => abs_diff;
    test_vabdq_u16 = vabdq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => abs_diff;
    test_vabd_u32 = vabd_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => abs_diff;
    test_vabdq_u32 = vabdq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => abs_diff;
    test_vabd_f32 = vabd_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => fabd;
    test_vabdq_f32 = vabdq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => fabd;
    test_vmax_s8 = vmax_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => max;
    test_vmaxq_s8 = vmaxq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => max;
    test_vmax_s16 = vmax_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => max;
    test_vmaxq_s16 = vmaxq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => max;
    test_vmax_s32 = vmax_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => max;
    test_vmaxq_s32 = vmaxq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => max;
    test_vmax_u8 = vmax_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => max;
    test_vmaxq_u8 = vmaxq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => max;
    test_vmax_u16 = vmax_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => max;
    test_vmaxq_u16 = vmaxq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => max;
    test_vmax_u32 = vmax_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => max;
    test_vmaxq_u32 = vmaxq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => max;
    test_vmax_f32 = vmax_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => fmax;
    test_vmaxq_f32 = vmaxq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => fmax;
    test_vmin_s8 = vmin_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => min;
    test_vminq_s8 = vminq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => min;
    test_vmin_s16 = vmin_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => min;
    test_vminq_s16 = vminq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => min;
    test_vmin_s32 = vmin_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => min;
    test_vminq_s32 = vminq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => min;
    test_vmin_u8 = vmin_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => min;
    test_vminq_u8 = vminq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => min;
    test_vmin_u16 = vmin_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => min;
    test_vminq_u16 = vminq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => min;
    test_vmin_u32 = vmin_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => min;
    test_vminq_u32 = vminq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => min;
    test_vmin_f32 = vmin_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => fmin;
    test_vminq_f32 = vminq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => fmin;
    test_vmaxnm_f32 = vmaxnm_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => fmaxnm;
    test_vmaxnmq_f32 = vmaxnmq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => fmaxnm;
    test_vminnm_f32 = vminnm_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => fminnm;
    test_vminnmq_f32 = vminnmq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => fminnm;
    test_vrecps_f32 = vrecps_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => recip_step;
    test_vrecpsq_f32 = vrecpsq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => recip_step;
    test_vrsqrts_f32 = vrsqrts_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => rsqrt_step;
    test_vrsqrtsq_f32 = vrsqrtsq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => rsqrt_step;
}

ternary_tests! {
    test_vmla_s8 = vmla_s8(vld1_s8 @ int_a, vld1_s8 @ int_b, vld1_s8 @ mixed) => mla;
    test_vmlaq_s8 = vmlaq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b, vld1q_s8 @ mixed) => mla;
    test_vmla_s16 = vmla_s16(vld1_s16 @ int_a, vld1_s16 @ int_b, vld1_s16 @ mixed) => mla;
    test_vmlaq_s16 = vmlaq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b, vld1q_s16 @ mixed) => mla;
    test_vmla_s32 = vmla_s32(vld1_s32 @ int_a, vld1_s32 @ int_b, vld1_s32 @ mixed) => mla;
    test_vmlaq_s32 = vmlaq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b, vld1q_s32 @ mixed) => mla;
    test_vmla_u8 = vmla_u8(vld1_u8 @ int_a, vld1_u8 @ int_b, vld1_u8 @ mixed) => mla;
    test_vmlaq_u8 = vmlaq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b, vld1q_u8 @ mixed) => mla;
    test_vmla_u16 = vmla_u16(vld1_u16 @ int_a, vld1_u16 @ int_b, vld1_u16 @ mixed) => mla;
    test_vmlaq_u16 = vmlaq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b, vld1q_u16 @ mixed) => mla;
    test_vmla_u32 = vmla_u32(vld1_u32 @ int_a, vld1_u32 @ int_b, vld1_u32 @ mixed) => mla;
    test_vmlaq_u32 = vmlaq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b, vld1q_u32 @ mixed) => mla;
    test_vmla_f32 = vmla_f32(vld1_f32 @ float_a, vld1_f32 @ float_b, vld1_f32 @ mixed) => fmla;
    test_vmlaq_f32 = vmlaq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b, vld1q_f32 @ mixed) => fmla;
    test_vmls_s8 = vmls_s8(vld1_s8 @ int_a, vld1_s8 @ int_b, vld1_s8 @ mixed) => mls;
    test_vmlsq_s8 = vmlsq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b, vld1q_s8 @ mixed) => mls;
    test_vmls_s16 = vmls_s16(vld1_s16 @ int_a, vld1_s16 @ int_b, vld1_s16 @ mixed) => mls;
    test_vmlsq_s16 = vmlsq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b, vld1q_s16 @ mixed) => mls;
    test_vmls_s32 = vmls_s32(vld1_s32 @ int_a, vld1_s32 @ int_b, vld1_s32 @ mixed) => mls;
    test_vmlsq_s32 = vmlsq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b, vld1q_s32 @ mixed) => mls;
    test_vmls_u8 = vmls_u8(vld1_u8 @ int_a, vld1_u8 @ int_b, vld1_u8 @ mixed) => mls;
    test_vmlsq_u8 = vmlsq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b, vld1q_u8 @ mixed) => mls;
    test_vmls_u16 = vmls_u16(vld1_u16 @ int_a, vld1_u16 @ int_b, vld1_u16 @ mixed) => mls;
    test_vmlsq_u16 = vmlsq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b, vld1q_u16 @ mixed) => mls;
    test_vmls_u32 = vmls_u32(vld1_u32 @ int_a, vld1_u32 @ int_b, vld1_u32 @ mixed) => mls;
    test_vmlsq_u32 = vmlsq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b, vld1q_u32 @ mixed) => mls;
    test_vmls_f32 = vmls_f32(vld1_f32 @ float_a, vld1_f32 @ float_b, vld1_f32 @ mixed) => fmls;
    test_vmlsq_f32 = vmlsq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b, vld1q_f32 @ mixed) => fmls;
    test_vaba_s8 = vaba_s8(vld1_s8 @ int_a, vld1_s8 @ int_b, vld1_s8 @ mixed) => abs_diff_accumulate;
    test_vabaq_s8 = vabaq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b, vld1q_s8 @ mixed) => abs_diff_accumulate;
    test_vaba_s16 = vaba_s16(vld1_s16 @ int_a, vld1_s16 @ int_b, vld1_s16 @ mixed) => abs_diff_accumulate;
    test_vabaq_s16 = vabaq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b, vld1q_s16 @ mixed) => abs_diff_accumulate;
    test_vaba_s32 = vaba_s32(vld1_s32 @ int_a, vld1_s32 @ int_b, vld1_s32 @ mixed) => abs_diff_accumulate;
    test_vabaq_s32 = vabaq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b, vld1q_s32 @ mixed) => abs_diff_accumulate;
    test_vaba_u8 = vaba_u8(vld1_u8 @ int_a, vld1_u8 @ int_b, vld1_u8 @ mixed) => abs_diff_accumulate;
    test_vabaq_u8 = vabaq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b, vld1q_u8 @ mixed) => abs_diff_accumulate;
    test_vaba_u16 = vaba_u16(vld1_u16 @ int_a, vld1_u16 @ int_b, vld1_u16 @ mixed) => abs_diff_accumulate;
    test_vabaq_u16 = vabaq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b, vld1q_u16 @ mixed) => abs_diff_accumulate;
    test_vaba_u32 = vaba_u32(vld1_u32 @ int_a, vld1_u32 @ int_b, vld1_u32 @ mixed) => abs_diff_accumulate;
    test_vabaq_u32 = vabaq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b, vld1q_u32 @ mixed) => abs_diff_accumulate;
    test_vfma_f32 = vfma_f32(vld1_f32 @ float_a, vld1_f32 @ float_b, vld1_f32 @ mixed) => fma;
    test_vfmaq_f32 = vfmaq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b, vld1q_f32 @ mixed) => fma;
    test_vfms_f32 = vfms_f32(vld1_f32 @ float_a, vld1_f32 @ float_b, vld1_f32 @ mixed) => fms;
    test_vfmsq_f32 = vfmsq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b, vld1q_f32 @ mixed) => fms;
    test_vmlal_s8 = vmlal_s8(vld1q_s16 @ int_a, vld1_s8 @ int_b, vld1_s8 @ mixed) => long_mla;
    test_vmlal_s16 = vmlal_s16(vld1q_s32 @ int_a, vld1_s16 @ int_b, vld1_s16 @ mixed) => long_mla;
    test_vmlal_s32 = vmlal_s32(vld1q_s64 @ int_a, vld1_s32 @ int_b, vld1_s32 @ mixed) => long_mla;
    test_vmlal_u8 = vmlal_u8(vld1q_u16 @ int_a, vld1_u8 @ int_b, vld1_u8 @ mixed) => long_mla;
    test_vmlal_u16 = vmlal_u16(vld1q_u32 @ int_a, vld1_u16 @ int_b, vld1_u16 @ mixed) => long_mla;
    test_vmlal_u32 = vmlal_u32(vld1q_u64 @ int_a, vld1_u32 @ int_b, vld1_u32 @ mixed) => long_mla;
    test_vmlsl_s8 = vmlsl_s8(vld1q_s16 @ int_a, vld1_s8 @ int_b, vld1_s8 @ mixed) => long_mls;
    test_vmlsl_s16 = vmlsl_s16(vld1q_s32 @ int_a, vld1_s16 @ int_b, vld1_s16 @ mixed) => long_mls;
    test_vmlsl_s32 = vmlsl_s32(vld1q_s64 @ int_a, vld1_s32 @ int_b, vld1_s32 @ mixed) => long_mls;
    test_vmlsl_u8 = vmlsl_u8(vld1q_u16 @ int_a, vld1_u8 @ int_b, vld1_u8 @ mixed) => long_mls;
    test_vmlsl_u16 = vmlsl_u16(vld1q_u32 @ int_a, vld1_u16 @ int_b, vld1_u16 @ mixed) => long_mls;
    test_vmlsl_u32 = vmlsl_u32(vld1q_u64 @ int_a, vld1_u32 @ int_b, vld1_u32 @ mixed) => long_mls;
    test_vabal_s8 = vabal_s8(vld1q_s16 @ int_a, vld1_s8 @ int_b, vld1_s8 @ mixed) => abs_diff_accumulate_long;
    test_vabal_s16 = vabal_s16(vld1q_s32 @ int_a, vld1_s16 @ int_b, vld1_s16 @ mixed) => abs_diff_accumulate_long;
    test_vabal_s32 = vabal_s32(vld1q_s64 @ int_a, vld1_s32 @ int_b, vld1_s32 @ mixed) => abs_diff_accumulate_long;
    test_vabal_u8 = vabal_u8(vld1q_u16 @ int_a, vld1_u8 @ int_b, vld1_u8 @ mixed) => abs_diff_accumulate_long;
    test_vabal_u16 = vabal_u16(vld1q_u32 @ int_a, vld1_u16 @ int_b, vld1_u16 @ mixed) => abs_diff_accumulate_long;
    test_vabal_u32 = vabal_u32(vld1q_u64 @ int_a, vld1_u32 @ int_b, vld1_u32 @ mixed) => abs_diff_accumulate_long;
}

unary_tests! {
    test_vabs_s8 = vabs_s8(vld1_s8 @ int_a) => abs;
    test_vabsq_s8 = vabsq_s8(vld1q_s8 @ int_a) => abs;
    test_vabs_s16 = vabs_s16(vld1_s16 @ int_a) => abs;
    test_vabsq_s16 = vabsq_s16(vld1q_s16 @ int_a) => abs;
    test_vabs_s32 = vabs_s32(vld1_s32 @ int_a) => abs;
    test_vabsq_s32 = vabsq_s32(vld1q_s32 @ int_a) => abs;
    test_vabs_f32 = vabs_f32(vld1_f32 @ float_a) => fabs;
    test_vabsq_f32 = vabsq_f32(vld1q_f32 @ float_a) => fabs;
    test_vqabs_s8 = vqabs_s8(vld1_s8 @ int_a) => saturating_abs;
    test_vqabsq_s8 = vqabsq_s8(vld1q_s8 @ int_a) => saturating_abs;
    test_vqabs_s16 = vqabs_s16(vld1_s16 @ int_a) => saturating_abs;
    test_vqabsq_s16 = vqabsq_s16(vld1q_s16 @ int_a) => saturating_abs;
    test_vqabs_s32 = vqabs_s32(vld1_s32 @ int_a) => saturating_abs;
    test_vqabsq_s32 = vqabsq_s32(vld1q_s32 @ int_a) => saturating_abs;
    test_vneg_s8 = vneg_s8(vld1_s8 @ int_a) => neg;
    test_vnegq_s8 = vnegq_s8(vld1q_s8 @ int_a) => neg;
    test_vneg_s16 = vneg_s16(vld1_s16 @ int_a) => neg;
    test_vnegq_s16 = vnegq_s16(vld1q_s16 @ int_a) => neg;
    test_vneg_s32 = vneg_s32(vld1_s32 @ int_a) => neg;
    test_vnegq_s32 = vnegq_s32(vld1q_s32 @ int_a) => neg;
    test_vneg_f32 = vneg_f32(vld1_f32 @ float_a) => fneg;
    test_vnegq_f32 = vnegq_f32(vld1q_f32 @ float_a) => fneg;
    test_vqneg_s8 = vqneg_s8(vld1_s8 @ int_a) => saturating_neg;
    test_vqnegq_s8 = vqnegq_s8(vld1q_s8 @ int_a) => saturating_neg;
    test_vqneg_s16 = vqneg_s16(vld1_s16 @ int_a) => saturating_neg;
    test_vqnegq_s16 = vqnegq_s16(vld1q_s16 @ int_a) => saturating_neg;
    test_vqneg_s32 = vqneg_s32(vld1_s32 @ int_a) => saturating_neg;
    test_vqnegq_s32 = vqnegq_s32(vld1q_s32 @ int_a) => saturating_neg;
    test_vrnd_f32 = vrnd_f32(vld1_f32 @ float_a) => |x| round_float(x, f32::trunc);
    test_vrndq_f32 = vrndq_f32(vld1q_f32 @ float_a) => |x| round_float(x, f32::trunc);
    test_vrndn_f32 = vrndn_f32(vld1_f32 @ float_a) => |x| round_float(x, f32::round_ties_even);
    test_vrndnq_f32 = vrndnq_f32(vld1q_f32 @ float_a) => |x| round_float(x, f32::round_ties_even);
    test_vrnda_f32 = vrnda_f32(vld1_f32 @ float_a) => |x| round_float(x, f32::round);
    test_vrndaq_f32 = vrndaq_f32(vld1q_f32 @ float_a) => |x| round_float(x, f32::round);
    test_vrndp_f32 = vrndp_f32(vld1_f32 @ float_a) => |x| round_float(x, f32::ceil);
    test_vrndpq_f32 = vrndpq_f32(vld1q_f32 @ float_a) => |x| round_float(x, f32::ceil);
    test_vrndm_f32 = vrndm_f32(vld1_f32 @ float_a) => |x| round_float(x, f32::floor);
    test_vrndmq_f32 = vrndmq_f32(vld1q_f32 @ float_a) => |x| round_float(x, f32::floor);
    test_vrndx_f32 = vrndx_f32(vld1_f32 @ float_a) => |x| round_float(x, f32::round_ties_even);
    test_vrndxq_f32 = vrndxq_f32(vld1q_f32 @ float_a) => |x| round_float(x, f32::round_ties_even);
}

by_scalar_tests! {
    test_vmul_n_s16 = vmul_n_s16(vld1_s16 @ int_a, int_b) => mul;
    test_vmulq_n_s16 = vmulq_n_s16(vld1q_s16 @ int_a, int_b) => mul;
    test_vmul_n_s32 = vmul_n_s32(vld1_s32 @ int_a, int_b) => mul;
    test_vmulq_n_s32 = vmulq_n_s32(vld1q_s32 @ int_a, int_b) => mul;
    test_vmul_n_u16 = vmul_n_u16(vld1_u16 @ int_a, int_b) => mul;
    test_vmulq_n_u16 = vmulq_n_u16(vld1q_u16 @ int_a, int_b) => mul;
    test_vmul_n_u32 = vmul_n_u32(vld1_u32 @ int_a, int_b) => mul;
    test_vmulq_n_u32 = vmulq_n_u32(vld1q_u32 @ int_a, int_b) => mul;
    test_vmul_n_f32 = vmul_n_f32(vld1_f32 @ float_a, float_b) => fmul;
    test_vmulq_n_f32 = vmulq_n_f32(vld1q_f32 @ float_a, float_b) => fmul;
}

accumulate_by_scalar_tests! {
    test_vmla_n_s16 = vmla_n_s16(vld1_s16 @ int_a, vld1_s16 @ int_b, mixed) => mla;
    test_vmlaq_n_s16 = vmlaq_n_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b, mixed) => mla;
    test_vmla_n_s32 = vmla_n_s32(vld1_s32 @ int_a, vld1_s32 @ int_b, mixed) => mla;
    test_vmlaq_n_s32 = vmlaq_n_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b, mixed) => mla;
    test_vmla_n_u16 = vmla_n_u16(vld1_u16 @ int_a, vld1_u16 @ int_b, mixed) => mla;
    test_vmlaq_n_u16 = vmlaq_n_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b, mixed) => mla;
    test_vmla_n_u32 = vmla_n_u32(vld1_u32 @ int_a, vld1_u32 @ int_b, mixed) => mla;
    test_vmlaq_n_u32 = vmlaq_n_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b, mixed) => mla;
    test_vmla_n_f32 = vmla_n_f32(vld1_f32 @ float_a, vld1_f32 @ float_b, mixed) => fmla;
    test_vmlaq_n_f32 = vmlaq_n_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b, mixed) => fmla;
    test_vmls_n_s16 = vmls_n_s16(vld1_s16 @ int_a, vld1_s16 @ int_b, mixed) => mls;
    test_vmlsq_n_s16 = vmlsq_n_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b, mixed) => mls;
    test_vmls_n_s32 = vmls_n_s32(vld1_s32 @ int_a, vld1_s32 @ int_b, mixed) => mls;
    test_vmlsq_n_s32 = vmlsq_n_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b, mixed) => mls;
    test_vmls_n_u16 = vmls_n_u16(vld1_u16 @ int_a, vld1_u16 @ int_b, mixed) => mls;
    test_vmlsq_n_u16 = vmlsq_n_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b, mixed) => mls;
    test_vmls_n_u32 = vmls_n_u32(vld1_u32 @ int_a, vld1_u32 @ int_b, mixed) => mls;
    test_vmlsq_n_u32 = vmlsq_n_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b, mixed) => mls;
    test_vmls_n_f32 = vmls_n_f32(vld1_f32 @ float_a, vld1_f32 @ float_b, mixed) => fmls;
    test_vmlsq_n_f32 = vmlsq_n_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b, mixed) => fmls;
}

pairwise_tests! {
    test_vpadd_s8 = vpadd_s8(vld1_s8 @ int_a, int_b) => add;
    test_vpadd_s16 = vpadd_s16(vld1_s16 @ int_a, int_b) => add;
    test_vpadd_s32 = vpadd_s32(vld1_s32 @ int_a, int_b) => add;
    test_vpadd_u8 = vpadd_u8(vld1_u8 @ int_a, int_b) => add;
    test_vpadd_u16 = vpadd_u16(vld1_u16 @ int_a, int_b) => add;
    test_vpadd_u32 = vpadd_u32(vld1_u32 @ int_a, int_b) => add;
    test_vpadd_f32 = vpadd_f32(vld1_f32 @ float_a, float_b) => fadd;
    test_vpmax_s8 = vpmax_s8(vld1_s8 @ int_a, int_b) => max;
    test_vpmax_s16 = vpmax_s16(vld1_s16 @ int_a, int_b) => max;
    test_vpmax_s32 = vpmax_s32(vld1_s32 @ int_a, int_b) => max;
    test_vpmax_u8 = vpmax_u8(vld1_u8 @ int_a, int_b) => max;
    test_vpmax_u16 = vpmax_u16(vld1_u16 @ int_a, int_b) => max;
    test_vpmax_u32 = vpmax_u32(vld1_u32 @ int_a, int_b) => max;
    test_vpmax_f32 = vpmax_f32(vld1_f32 @ float_a, float_b) => fmax;
    test_vpmin_s8 = vpmin_s8(vld1_s8 @ int_a, int_b) => min;
    test_vpmin_s16 = vpmin_s16(vld1_s16 @ int_a, int_b) => min;
    test_vpmin_s32 = vpmin_s32(vld1_s32 @ int_a, int_b) => min;
    test_vpmin_u8 = vpmin_u8(vld1_u8 @ int_a, int_b) => min;
    test_vpmin_u16 = vpmin_u16(vld1_u16 @ int_a, int_b) => min;
    test_vpmin_u32 = vpmin_u32(vld1_u32 @ int_a, int_b) => min;
    test_vpmin_f32 = vpmin_f32(vld1_f32 @ float_a, float_b) => fmin;
}

pairwise_long_tests! {
    test_vpaddl_s8 = vpaddl_s8(vld1_s8 @ int_a);
    test_vpaddlq_s8 = vpaddlq_s8(vld1q_s8 @ int_a);
    test_vpaddl_s16 = vpaddl_s16(vld1_s16 @ int_a);
    test_vpaddlq_s16 = vpaddlq_s16(vld1q_s16 @ int_a);
    test_vpaddl_s32 = vpaddl_s32(vld1_s32 @ int_a);
    test_vpaddlq_s32 = vpaddlq_s32(vld1q_s32 @ int_a);
    test_vpaddl_u8 = vpaddl_u8(vld1_u8 @ int_a);
    test_vpaddlq_u8 = vpaddlq_u8(vld1q_u8 @ int_a);
    test_vpaddl_u16 = vpaddl_u16(vld1_u16 @ int_a);
    test_vpaddlq_u16 = vpaddlq_u16(vld1q_u16 @ int_a);
    test_vpaddl_u32 = vpaddl_u32(vld1_u32 @ int_a);
    test_vpaddlq_u32 = vpaddlq_u32(vld1q_u32 @ int_a);
}

pairwise_accumulate_tests! {
    test_vpadal_s8 = vpadal_s8(vld1_s16 @ int_a, vld1_s8 @ int_b);
    test_vpadalq_s8 = vpadalq_s8(vld1q_s16 @ int_a, vld1q_s8 @ int_b);
    test_vpadal_s16 = vpadal_s16(vld1_s32 @ int_a, vld1_s16 @ int_b);
    test_vpadalq_s16 = vpadalq_s16(vld1q_s32 @ int_a, vld1q_s16 @ int_b);
    test_vpadal_s32 = vpadal_s32(vld1_s64 @ int_a, vld1_s32 @ int_b);
    test_vpadalq_s32 = vpadalq_s32(vld1q_s64 @ int_a, vld1q_s32 @ int_b);
    test_vpadal_u8 = vpadal_u8(vld1_u16 @ int_a, vld1_u8 @ int_b);
    test_vpadalq_u8 = vpadalq_u8(vld1q_u16 @ int_a, vld1q_u8 @ int_b);
    test_vpadal_u16 = vpadal_u16(vld1_u32 @ int_a, vld1_u16 @ int_b);
    test_vpadalq_u16 = vpadalq_u16(vld1q_u32 @ int_a, vld1q_u16 @ int_b);
    test_vpadal_u32 = vpadal_u32(vld1_u64 @ int_a, vld1_u32 @ int_b);
    test_vpadalq_u32 = vpadalq_u32(vld1q_u64 @ int_a, vld1q_u32 @ int_b);
}
