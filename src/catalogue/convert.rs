//! Conversions: float/integer, fixed point, narrowing and widening moves,
//! and reinterpretation.

use super::*;
use crate::reference::*;
use crate::simd::backend::*;
use crate::validate::validate_bits;

/// A reinterpretation must keep the byte image, and casting back must
/// restore the source register.
macro_rules! reinterpret_tests {
    ($($test:ident = $op:ident($load:ident @ $src:ident) <=> $back:ident;)*) => {$(
        pub fn $test(fx: &Fixture) -> Outcome {
            let a = $src(fx);
            // SAFETY: every scratch view spans a full register.
            let (source, cast, restored) = unsafe {
                let source = $load(a.as_ptr());
                let cast = $op(source);
                (source, cast, $back(cast))
            };
            match validate_bits(cast, source) {
                Ok(()) => validate_bits(restored, source).into(),
                Err(mismatch) => Outcome::Fail(mismatch),
            }
        }
    )*};
}

unary_tests! {
    test_vcvt_s32_f32 = vcvt_s32_f32(vld1_f32 @ float_a) => |x| x as i32;
    test_vcvt_u32_f32 = vcvt_u32_f32(vld1_f32 @ float_a) => |x| x as u32;
    test_vcvt_f32_s32 = vcvt_f32_s32(vld1_s32 @ int_a) => |x| x as f32;
    test_vcvt_f32_u32 = vcvt_f32_u32(vld1_u32 @ int_a) => |x| x as f32;
    test_vcvtq_s32_f32 = vcvtq_s32_f32(vld1q_f32 @ float_a) => |x| x as i32;
    test_vcvtq_u32_f32 = vcvtq_u32_f32(vld1q_f32 @ float_a) => |x| x as u32;
    test_vcvtq_f32_s32 = vcvtq_f32_s32(vld1q_s32 @ int_a) => |x| x as f32;
    test_vcvtq_f32_u32 = vcvtq_f32_u32(vld1q_u32 @ int_a) => |x| x as f32;
    test_vmovn_s16 = vmovn_s16(vld1q_s16 @ int_a) => narrow;
    test_vqmovn_s16 = vqmovn_s16(vld1q_s16 @ int_a) => saturating_narrow;
    test_vmovn_s32 = vmovn_s32(vld1q_s32 @ int_a) => narrow;
    test_vqmovn_s32 = vqmovn_s32(vld1q_s32 @ int_a) => saturating_narrow;
    test_vmovn_s64 = vmovn_s64(vld1q_s64 @ int_a) => narrow;
    test_vqmovn_s64 = vqmovn_s64(vld1q_s64 @ int_a) => saturating_narrow;
    test_vmovn_u16 = vmovn_u16(vld1q_u16 @ int_a) => narrow;
    test_vqmovn_u16 = vqmovn_u16(vld1q_u16 @ int_a) => saturating_narrow;
    test_vmovn_u32 = vmovn_u32(vld1q_u32 @ int_a) => narrow;
    test_vqmovn_u32 = vqmovn_u32(vld1q_u32 @ int_a) => saturating_narrow;
    test_vmovn_u64 = vmovn_u64(vld1q_u64 @ int_a) => narrow;
    test_vqmovn_u64 = vqmovn_u64(vld1q_u64 @ int_a) => saturating_narrow;
    test_vqmovun_s16 = vqmovun_s16(vld1q_s16 @ int_a) => saturating_narrow;
    test_vqmovun_s32 = vqmovun_s32(vld1q_s32 @ int_a) => saturating_narrow;
    test_vqmovun_s64 = vqmovun_s64(vld1q_s64 @ int_a) => saturating_narrow;
    test_vmovl_s8 = vmovl_s8(vld1_s8 @ int_a) => lengthen;
    test_vmovl_s16 = vmovl_s16(vld1_s16 @ int_a) => lengthen;
    test_vmovl_s32 = vmovl_s32(vld1_s32 @ int_a) => lengthen;
    test_vmovl_u8 = vmovl_u8(vld1_u8 @ int_a) => lengthen;
    test_vmovl_u16 = vmovl_u16(vld1_u16 @ int_a) => lengthen;
    test_vmovl_u32 = vmovl_u32(vld1_u32 @ int_a) => lengthen;
}

immediate_tests! {
    test_vcvt_n_s32_f32 = vcvt_n_s32_f32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_f32 @ float_a: f32) => to_fixed_i32;
    test_vcvt_n_u32_f32 = vcvt_n_u32_f32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_f32 @ float_a: f32) => to_fixed_u32;
    test_vcvt_n_f32_s32 = vcvt_n_f32_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_s32 @ int_a: i32) => from_fixed_i32;
    test_vcvt_n_f32_u32 = vcvt_n_f32_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_u32 @ int_a: u32) => from_fixed_u32;
    test_vcvtq_n_s32_f32 = vcvtq_n_s32_f32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_f32 @ float_a: f32) => to_fixed_i32;
    test_vcvtq_n_u32_f32 = vcvtq_n_u32_f32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_f32 @ float_a: f32) => to_fixed_u32;
    test_vcvtq_n_f32_s32 = vcvtq_n_f32_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_s32 @ int_a: i32) => from_fixed_i32;
    test_vcvtq_n_f32_u32 = vcvtq_n_f32_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_u32 @ int_a: u32) => from_fixed_u32;
}

reinterpret_tests! {
    test_vreinterpret_s8_s16 = vreinterpret_s8_s16(vld1_s16 @ int_a) <=> vreinterpret_s16_s8;
    test_vreinterpret_s8_s32 = vreinterpret_s8_s32(vld1_s32 @ int_a) <=> vreinterpret_s32_s8;
    test_vreinterpret_s8_s64 = vreinterpret_s8_s64(vld1_s64 @ int_a) <=> vreinterpret_s64_s8;
    test_vreinterpret_s8_u8 = vreinterpret_s8_u8(vld1_u8 @ int_a) <=> vreinterpret_u8_s8;
    test_vreinterpret_s8_u16 = vreinterpret_s8_u16(vld1_u16 @ int_a) <=> vreinterpret_u16_s8;
    test_vreinterpret_s8_u32 = vreinterpret_s8_u32(vld1_u32 @ int_a) <=> vreinterpret_u32_s8;
    test_vreinterpret_s8_u64 = vreinterpret_s8_u64(vld1_u64 @ int_a) <=> vreinterpret_u64_s8;
    test_vreinterpret_s8_f32 = vreinterpret_s8_f32(vld1_f32 @ float_a) <=> vreinterpret_f32_s8;
    test_vreinterpret_s16_s8 = vreinterpret_s16_s8(vld1_s8 @ int_a) <=> vreinterpret_s8_s16;
    test_vreinterpret_s16_s32 = vreinterpret_s16_s32(vld1_s32 @ int_a) <=> vreinterpret_s32_s16;
    test_vreinterpret_s16_s64 = vreinterpret_s16_s64(vld1_s64 @ int_a) <=> vreinterpret_s64_s16;
    test_vreinterpret_s16_u8 = vreinterpret_s16_u8(vld1_u8 @ int_a) <=> vreinterpret_u8_s16;
    test_vreinterpret_s16_u16 = vreinterpret_s16_u16(vld1_u16 @ int_a) <=> vreinterpret_u16_s16;
    test_vreinterpret_s16_u32 = vreinterpret_s16_u32(vld1_u32 @ int_a) <=> vreinterpret_u32_s16;
    test_vreinterpret_s16_u64 = vreinterpret_s16_u64(vld1_u64 @ int_a) <=> vreinterpret_u64_s16;
    test_vreinterpret_s16_f32 = vreinterpret_s16_f32(vld1_f32 @ float_a) <=> vreinterpret_f32_s16;
    test_vreinterpret_s32_s8 = vreinterpret_s32_s8(vld1_s8 @ int_a) <=> vreinterpret_s8_s32;
    test_vreinterpret_s32_s16 = vreinterpret_s32_s16(vld1_s16 @ int_a) <=> vreinterpret_s16_s32;
    test_vreinterpret_s32_s64 = vreinterpret_s32_s64(vld1_s64 @ int_a) <=> vreinterpret_s64_s32;
    test_vreinterpret_s32_u8 = vreinterpret_s32_u8(vld1_u8 @ int_a) <=> vreinterpret_u8_s32;
    test_vreinterpret_s32_u16 = vreinterpret_s32_u16(vld1_u16 @ int_a) <=> vreinterpret_u16_s32;
    test_vreinterpret_s32_u32 = vreinterpret_s32_u32(vld1_u32 @ int_a) <=> vreinterpret_u32_s32;
    test_vreinterpret_s32_u64 = vreinterpret_s32_u64(vld1_u64 @ int_a) <=> vreinterpret_u64_s32;
    test_vreinterpret_s32_f32 = vreinterpret_s32_f32(vld1_f32 @ float_a) <=> vreinterpret_f32_s32;
    test_vreinterpret_s64_s8 = vreinterpret_s64_s8(vld1_s8 @ int_a) <=> vreinterpret_s8_s64;
    test_vreinterpret_s64_s16 = vreinterpret_s64_s16(vld1_s16 @ int_a) <=> vreinterpret_s16_s64;
    test_vreinterpret_s64_s32 = vreinterpret_s64_s32(vld1_s32 @ int_a) <=> vreinterpret_s32_s64;
    test_vreinterpret_s64_u8 = vreinterpret_s64_u8(vld1_u8 @ int_a) <=> vreinterpret_u8_s64;
    test_vreinterpret_s64_u16 = vreinterpret_s64_u16(vld1_u16 @ int_a) <=> vreinterpret_u16_s64;
    test_vreinterpret_s64_u32 = vreinterpret_s64_u32(vld1_u32 @ int_a) <=> vreinterpret_u32_s64;
    test_vreinterpret_s64_u64 = vreinterpret_s64_u64(vld1_u64 @ int_a) <=> vreinterpret_u64_s64;
    test_vreinterpret_s64_f32 = vreinterpret_s64_f32(vld1_f32 @ float_a) <=> vreinterpret_f32_s64;
    test_vreinterpret_u8_s8 = vreinterpret_u8_s8(vld1_s8 @ int_a) <=> vreinterpret_s8_u8;
    test_vreinterpret_u8_s16 = vreinterpret_u8_s16(vld1_s16 @ int_a) <=> vreinterpret_s16_u8;
    test_vreinterpret_u8_s32 = vreinterpret_u8_s32(vld1_s32 @ int_a) <=> vreinterpret_s32_u8;
    test_vreinterpret_u8_s64 = vreinterpret_u8_s64(vld1_s64 @ int_a) <=> vreinterpret_s64_u8;
    test_vreinterpret_u8_u16 = vreinterpret_u8_u16(vld1_u16 @ int_a) <=> vreinterpret_u16_u8;
    test_vreinterpret_u8_u32 = vreinterpret_u8_u32(vld1_u32 @ int_a) <=> vreinterpret_u32_u8;
    test_vreinterpret_u8_u64 = vreinterpret_u8_u64(vld1_u64 @ int_a) <=> vreinterpret_u64_u8;
    test_vreinterpret_u8_f32 = vreinterpret_u8_f32(vld1_f32 @ float_a) <=> vreinterpret_f32_u8;
    test_vreinterpret_u16_s8 = vreinterpret_u16_s8(vld1_s8 @ int_a) <=> vreinterpret_s8_u16;
    test_vreinterpret_u16_s16 = vreinterpret_u16_s16(vld1_s16 @ int_a) <=> vreinterpret_s16_u16;
    test_vreinterpret_u16_s32 = vreinterpret_u16_s32(vld1_s32 @ int_a) <=> vreinterpret_s32_u16;
    test_vreinterpret_u16_s64 = vreinterpret_u16_s64(vld1_s64 @ int_a) <=> vreinterpret_s64_u16;
    test_vreinterpret_u16_u8 = vreinterpret_u16_u8(vld1_u8 @ int_a) <=> vreinterpret_u8_u16;
    test_vreinterpret_u16_u32 = vreinterpret_u16_u32(vld1_u32 @ int_a) <=> vreinterpret_u32_u16;
    test_vreinterpret_u16_u64 = vreinterpret_u16_u64(vld1_u64 @ int_a) <=> vreinterpret_u64_u16;
    test_vreinterpret_u16_f32 = vreinterpret_u16_f32(vld1_f32 @ float_a) <=> vreinterpret_f32_u16;
    test_vreinterpret_u32_s8 = vreinterpret_u32_s8(vld1_s8 @ int_a) <=> vreinterpret_s8_u32;
    test_vreinterpret_u32_s16 = vreinterpret_u32_s16(vld1_s16 @ int_a) <=> vreinterpret_s16_u32;
    test_vreinterpret_u32_s32 = vreinterpret_u32_s32(vld1_s32 @ int_a) <=> vreinterpret_s32_u32;
    test_vreinterpret_u32_s64 = vreinterpret_u32_s64(vld1_s64 @ int_a) <=> vreinterpret_s64_u32;
    test_vreinterpret_u32_u8 = vreinterpret_u32_u8(vld1_u8 @ int_a) <=> vreinterpret_u8_u32;
    test_vreinterpret_u32_u16 = vreinterpret_u32_u16(vld1_u16 @ int_a) <=> vreinterpret_u16_u32;
    test_vreinterpret_u32_u64 = vreinterpret_u32_u64(vld1_u64 @ int_a) <=> vreinterpret_u64_u32;
    test_vreinterpret_u32_f32 = vreinterpret_u32_f32(vld1_f32 @ float_a) <=> vreinterpret_f32_u32;
    test_vreinterpret_u64_s8 = vreinterpret_u64_s8(vld1_s8 @ int_a) <=> vreinterpret_s8_u64;
    test_vreinterpret_u64_s16 = vreinterpret_u64_s16(vld1_s16 @ int_a) <=> vreinterpret_s16_u64;
    test_vreinterpret_u64_s32 = vreinterpret_u64_s32(vld1_s32 @ int_a) <=> vreinterpret_s32_u64;
    test_vreinterpret_u64_s64 = vreinterpret_u64_s64(vld1_s64 @ int_a) <=> vreinterpret_s64_u64;
    test_vreinterpret_u64_u8 = vreinterpret_u64_u8(vld1_u8 @ int_a) <=> vreinterpret_u8_u64;
    test_vreinterpret_u64_u16 = vreinterpret_u64_u16(vld1_u16 @ int_a) <=> vreinterpret_u16_u64;
    test_vreinterpret_u64_u32 = vreinterpret_u64_u32(vld1_u32 @ int_a) <=> vreinterpret_u32_u64;
    test_vreinterpret_u64_f32 = vreinterpret_u64_f32(vld1_f32 @ float_a) <=> vreinterpret_f32_u64;
    test_vreinterpret_f32_s8 = vreinterpret_f32_s8(vld1_s8 @ int_a) <=> vreinterpret_s8_f32;
    test_vreinterpret_f32_s16 = vreinterpret_f32_s16(vld1_s16 @ int_a) <=> vreinterpret_s16_f32;
    test_vreinterpret_f32_s32 = vreinterpret_f32_s32(vld1_s32 @ int_a) <=> vreinterpret_s32_f32;
    test_vreinterpret_f32_s64 = vreinterpret_f32_s64(vld1_s64 @ int_a) <=> vreinterpret_s64_f32;
    test_vreinterpret_f32_u8 = vreinterpret_f32_u8(vld1_u8 @ int_a) <=> vreinterpret_u8_f32;
    test_vreinterpret_f32_u16 = vreinterpret_f32_u16(vld1_u16 @ int_a) <=> vreinterpret_u16_f32;
    test_vreinterpret_f32_u32 = vreinterpret_f32_u32(vld1_u32 @ int_a) <=> vreinterpret_u32_f32;
    test_vreinterpret_f32_u64 = vreinterpret_f32_u64(vld1_u64 @ int_a) <=> vreinterpret_u64_f32;
    test_vreinterpretq_s8_s16 = vreinterpretq_s8_s16(vld1q_s16 @ int_a) <=> vreinterpretq_s16_s8;
    test_vreinterpretq_s8_s32 = vreinterpretq_s8_s32(vld1q_s32 @ int_a) <=> vreinterpretq_s32_s8;
    test_vreinterpretq_s8_s64 = vreinterpretq_s8_s64(vld1q_s64 @ int_a) <=> vreinterpretq_s64_s8;
    test_vreinterpretq_s8_u8 = vreinterpretq_s8_u8(vld1q_u8 @ int_a) <=> vreinterpretq_u8_s8;
    test_vreinterpretq_s8_u16 = vreinterpretq_s8_u16(vld1q_u16 @ int_a) <=> vreinterpretq_u16_s8;
    test_vreinterpretq_s8_u32 = vreinterpretq_s8_u32(vld1q_u32 @ int_a) <=> vreinterpretq_u32_s8;
    test_vreinterpretq_s8_u64 = vreinterpretq_s8_u64(vld1q_u64 @ int_a) <=> vreinterpretq_u64_s8;
    test_vreinterpretq_s8_f32 = vreinterpretq_s8_f32(vld1q_f32 @ float_a) <=> vreinterpretq_f32_s8;
    test_vreinterpretq_s16_s8 = vreinterpretq_s16_s8(vld1q_s8 @ int_a) <=> vreinterpretq_s8_s16;
    test_vreinterpretq_s16_s32 = vreinterpretq_s16_s32(vld1q_s32 @ int_a) <=> vreinterpretq_s32_s16;
    test_vreinterpretq_s16_s64 = vreinterpretq_s16_s64(vld1q_s64 @ int_a) <=> vreinterpretq_s64_s16;
    test_vreinterpretq_s16_u8 = vreinterpretq_s16_u8(vld1q_u8 @ int_a) <=> vreinterpretq_u8_s16;
    test_vreinterpretq_s16_u16 = vreinterpretq_s16_u16(vld1q_u16 @ int_a) <=> vreinterpretq_u16_s16;
    test_vreinterpretq_s16_u32 = vreinterpretq_s16_u32(vld1q_u32 @ int_a) <=> vreinterpretq_u32_s16;
    test_vreinterpretq_s16_u64 = vreinterpretq_s16_u64(vld1q_u64 @ int_a) <=> vreinterpretq_u64_s16;
    test_vreinterpretq_s16_f32 = vreinterpretq_s16_f32(vld1q_f32 @ float_a) <=> vreinterpretq_f32_s16;
    test_vreinterpretq_s32_s8 = vreinterpretq_s32_s8(vld1q_s8 @ int_a) <=> vreinterpretq_s8_s32;
    test_vreinterpretq_s32_s16 = vreinterpretq_s32_s16(vld1q_s16 @ int_a) <=> vreinterpretq_s16_s32;
    test_vreinterpretq_s32_s64 = vreinterpretq_s32_s64(vld1q_s64 @ int_a) <=> vreinterpretq_s64_s32;
    test_vreinterpretq_s32_u8 = vreinterpretq_s32_u8(vld1q_u8 @ int_a) <=> vreinterpretq_u8_s32;
    test_vreinterpretq_s32_u16 = vreinterpretq_s32_u16(vld1q_u16 @ int_a) <=> vreinterpretq_u16_s32;
    test_vreinterpretq_s32_u32 = vreinterpretq_s32_u32(vld1q_u32 @ int_a) <=> vreinterpretq_u32_s32;
    test_vreinterpretq_s32_u64 = vreinterpretq_s32_u64(vld1q_u64 @ int_a) <=> vreinterpretq_u64_s32;
    test_vreinterpretq_s32_f32 = vreinterpretq_s32_f32(vld1q_f32 @ float_a) <=> vreinterpretq_f32_s32;
    test_vreinterpretq_s64_s8 = vreinterpretq_s64_s8(vld1q_s8 @ int_a) <=> vreinterpretq_s8_s64;
    test_vreinterpretq_s64_s16 = vreinterpretq_s64_s16(vld1q_s16 @ int_a) <=> vreinterpretq_s16_s64;
    test_vreinterpretq_s64_s32 = vreinterpretq_s64_s32(vld1q_s32 @ int_a) <=> vreinterpretq_s32_s64;
    test_vreinterpretq_s64_u8 = vreinterpretq_s64_u8(vld1q_u8 @ int_a) <=> vreinterpretq_u8_s64;
    test_vreinterpretq_s64_u16 = vreinterpretq_s64_u16(vld1q_u16 @ int_a) <=> vreinterpretq_u16_s64;
    test_vreinterpretq_s64_u32 = vreinterpretq_s64_u32(vld1q_u32 @ int_a) <=> vreinterpretq_u32_s64;
    test_vreinterpretq_s64_u64 = vreinterpretq_s64_u64(vld1q_u64 @ int_a) <=> vreinterpretq_u64_s64;
    test_vreinterpretq_s64_f32 = vreinterpretq_s64_f32(vld1q_f32 @ float_a) <=> vreinterpretq_f32_s64;
    test_vreinterpretq_u8_s8 = vreinterpretq_u8_s8(vld1q_s8 @ int_a) <=> vreinterpretq_s8_u8;
    test_vreinterpretq_u8_s16 = vreinterpretq_u8_s16(vld1q_s16 @ int_a) <=> vreinterpretq_s16_u8;
    test_vreinterpretq_u8_s32 = vreinterpretq_u8_s32(vld1q_s32 @ int_a) <=> vreinterpretq_s32_u8;
    test_vreinterpretq_u8_s64 = vreinterpretq_u8_s64(vld1q_s64 @ int_a) <=> vreinterpretq_s64_u8;
    test_vreinterpretq_u8_u16 = vreinterpretq_u8_u16(vld1q_u16 @ int_a) <=> vreinterpretq_u16_u8;
    test_vreinterpretq_u8_u32 = vreinterpretq_u8_u32(vld1q_u32 @ int_a) <=> vreinterpretq_u32_u8;
    test_vreinterpretq_u8_u64 = vreinterpretq_u8_u64(vld1q_u64 @ int_a) <=> vreinterpretq_u64_u8;
    test_vreinterpretq_u8_f32 = vreinterpretq_u8_f32(vld1q_f32 @ float_a) <=> vreinterpretq_f32_u8;
    test_vreinterpretq_u16_s8 = vreinterpretq_u16_s8(vld1q_s8 @ int_a) <=> vreinterpretq_s8_u16;
    test_vreinterpretq_u16_s16 = vreinterpretq_u16_s16(vld1q_s16 @ int_a) <=> vreinterpretq_s16_u16;
    test_vreinterpretq_u16_s32 = vreinterpretq_u16_s32(vld1q_s32 @ int_a) <=> vreinterpretq_s32_u16;
    test_vreinterpretq_u16_s64 = vreinterpretq_u16_s64(vld1q_s64 @ int_a) <=> vreinterpretq_s64_u16;
    test_vreinterpretq_u16_u8 = vreinterpretq_u16_u8(vld1q_u8 @ int_a) <=> vreinterpretq_u8_u16;
    test_vreinterpretq_u16_u32 = vreinterpretq_u16_u32(vld1q_u32 @ int_a) <=> vreinterpretq_u32_u16;
    test_vreinterpretq_u16_u64 = vreinterpretq_u16_u64(vld1q_u64 @ int_a) <=> vreinterpretq_u64_u16;
    test_vreinterpretq_u16_f32 = vreinterpretq_u16_f32(vld1q_f32 @ float_a) <=> vreinterpretq_f32_u16;
    test_vreinterpretq_u32_s8 = vreinterpretq_u32_s8(vld1q_s8 @ int_a) <=> vreinterpretq_s8_u32;
    test_vreinterpretq_u32_s16 = vreinterpretq_u32_s16(vld1q_s16 @ int_a) <=> vreinterpretq_s16_u32;
    test_vreinterpretq_u32_s32 = vreinterpretq_u32_s32(vld1q_s32 @ int_a) <=> vreinterpretq_s32_u32;
    test_vreinterpretq_u32_s64 = vreinterpretq_u32_s64(vld1q_s64 @ int_a) <=> vreinterpretq_s64_u32;
    test_vreinterpretq_u32_u8 = vreinterpretq_u32_u8(vld1q_u8 @ int_a) <=> vreinterpretq_u8_u32;
    test_vreinterpretq_u32_u16 = vreinterpretq_u32_u16(vld1q_u16 @ int_a) <=> vreinterpretq_u16_u32;
    test_vreinterpretq_u32_u64 = vreinterpretq_u32_u64(vld1q_u64 @ int_a) <=> vreinterpretq_u64_u32;
    test_vreinterpretq_u32_f32 = vreinterpretq_u32_f32(vld1q_f32 @ float_a) <=> vreinterpretq_f32_u32;
    test_vreinterpretq_u64_s8 = vreinterpretq_u64_s8(vld1q_s8 @ int_a) <=> vreinterpretq_s8_u64;
    test_vreinterpretq_u64_s16 = vreinterpretq_u64_s16(vld1q_s16 @ int_a) <=> vreinterpretq_s16_u64;
    test_vreinterpretq_u64_s32 = vreinterpretq_u64_s32(vld1q_s32 @ int_a) <=> vreinterpretq_s32_u64;
    test_vreinterpretq_u64_s64 = vreinterpretq_u64_s64(vld1q_s64 @ int_a) <=> vreinterpretq_s64_u64;
    test_vreinterpretq_u64_u8 = vreinterpretq_u64_u8(vld1q_u8 @ int_a) <=> vreinterpretq_u8_u64;
    test_vreinterpretq_u64_u16 = vreinterpretq_u64_u16(vld1q_u16 @ int_a) <=> vreinterpretq_u16_u64;
    test_vreinterpretq_u64_u32 = vreinterpretq_u64_u32(vld1q_u32 @ int_a) <=> vreinterpretq_u32_u64;
    test_vreinterpretq_u64_f32 = vreinterpretq_u64_f32(vld1q_f32 @ float_a) <=> vreinterpretq_f32_u64;
    test_vreinterpretq_f32_s8 = vreinterpretq_f32_s8(vld1q_s8 @ int_a) <=> vreinterpretq_s8_f32;
    test_vreinterpretq_f32_s16 = vreinterpretq_f32_s16(vld1q_s16 @ int_a) <=> vreinterpretq_s16_f32;
    test_vreinterpretq_f32_s32 = vreinterpretq_f32_s32(vld1q_s32 @ int_a) <=> vreinterpretq_s32_f32;
    test_vreinterpretq_f32_s64 = vreinterpretq_f32_s64(vld1q_s64 @ int_a) <=> vreinterpretq_s64_f32;
    test_vreinterpretq_f32_u8 = vreinterpretq_f32_u8(vld1q_u8 @ int_a) <=> vreinterpretq_u8_f32;
    test_vreinterpretq_f32_u16 = vreinterpretq_f32_u16(vld1q_u16 @ int_a) <=> vreinterpretq_u16_f32;
    test_vreinterpretq_f32_u32 = vreinterpretq_f32_u32(vld1q_u32 @ int_a) <=> vreinterpretq_u32_f32;
    test_vreinterpretq_f32_u64 = vreinterpretq_f32_u64(vld1q_u64 @ int_a) <=> vreinterpretq_u64_f32;
}
