//! Arithmetic: add, subtract, multiply and accumulate, absolute value and
//! difference, min/max, pairwise reductions, rounding and reciprocal steps.

use super::kernel::*;
use super::types::*;
use super::{
    vdup_n_f32, vdup_n_s16, vdup_n_s32, vdup_n_u16, vdup_n_u32, vdupq_n_f32, vdupq_n_s16,
    vdupq_n_s32, vdupq_n_u16, vdupq_n_u32,
};

const QUIET_BIT: u32 = 0x0040_0000;

fn is_signalling(x: f32) -> bool {
    x.is_nan() && x.to_bits() & QUIET_BIT == 0
}

fn is_quiet(x: f32) -> bool {
    x.is_nan() && x.to_bits() & QUIET_BIT != 0
}

fn quieten(x: f32) -> f32 {
    f32::from_bits(x.to_bits() | QUIET_BIT)
}

/// NaN produced by a two-operand instruction: signalling NaNs first, then
/// quiet ones, first operand before second.
fn nan_operand(a: f32, b: f32) -> Option<f32> {
    if is_signalling(a) {
        Some(quieten(a))
    } else if is_signalling(b) {
        Some(quieten(b))
    } else if a.is_nan() {
        Some(a)
    } else if b.is_nan() {
        Some(b)
    } else {
        None
    }
}

// FMAX: zeros of opposite sign give +0.
fn max_f32(a: f32, b: f32) -> f32 {
    nan_operand(a, b).unwrap_or_else(|| {
        if a == b {
            f32::from_bits(a.to_bits() & b.to_bits())
        } else if a > b {
            a
        } else {
            b
        }
    })
}

// FMIN: zeros of opposite sign give -0.
fn min_f32(a: f32, b: f32) -> f32 {
    nan_operand(a, b).unwrap_or_else(|| {
        if a == b {
            f32::from_bits(a.to_bits() | b.to_bits())
        } else if a < b {
            a
        } else {
            b
        }
    })
}

// FMAXNM/FMINNM: a lone quiet NaN loses to any number.
fn max_num_f32(a: f32, b: f32) -> f32 {
    match (is_quiet(a), is_quiet(b)) {
        (true, false) => max_f32(f32::NEG_INFINITY, b),
        (false, true) => max_f32(a, f32::NEG_INFINITY),
        _ => max_f32(a, b),
    }
}

fn min_num_f32(a: f32, b: f32) -> f32 {
    match (is_quiet(a), is_quiet(b)) {
        (true, false) => min_f32(f32::INFINITY, b),
        (false, true) => min_f32(a, f32::INFINITY),
        _ => min_f32(a, b),
    }
}

// FRECPS: 2 - a*b with a single rounding.
fn recip_step(a: f32, b: f32) -> f32 {
    let a = -a;
    if let Some(nan) = nan_operand(a, b) {
        return nan;
    }
    if (a.is_infinite() && b == 0.0) || (a == 0.0 && b.is_infinite()) {
        return 2.0;
    }
    a.mul_add(b, 2.0)
}

// FRSQRTS: (3 - a*b) / 2 with a single rounding.
fn rsqrt_step(a: f32, b: f32) -> f32 {
    let a = -a;
    if let Some(nan) = nan_operand(a, b) {
        return nan;
    }
    if (a.is_infinite() && b == 0.0) || (a == 0.0 && b.is_infinite()) {
        return 1.5;
    }
    a.mul_add(b, 3.0) * 0.5
}

fn round_with(x: f32, round: fn(f32) -> f32) -> f32 {
    if x.is_nan() {
        quieten(x)
    } else {
        round(x)
    }
}

// Bits [n, 2n) of an exact sum, with and without rounding.
fn high_half<T: Element>(exact: i128) -> T {
    T::wrap(exact >> T::BITS)
}

fn rounded_high_half<T: Element>(exact: i128) -> T {
    T::wrap((exact + (1 << (T::BITS - 1))) >> T::BITS)
}

binary_family!(|a, b| a.wrapping_add(b) =>
    vadd_s8: int8x8_t,
    vaddq_s8: int8x16_t,
    vadd_s16: int16x4_t,
    vaddq_s16: int16x8_t,
    vadd_s32: int32x2_t,
    vaddq_s32: int32x4_t,
    vadd_s64: int64x1_t,
    vaddq_s64: int64x2_t,
    vadd_u8: uint8x8_t,
    vaddq_u8: uint8x16_t,
    vadd_u16: uint16x4_t,
    vaddq_u16: uint16x8_t,
    vadd_u32: uint32x2_t,
    vaddq_u32: uint32x4_t,
    vadd_u64: uint64x1_t,
    vaddq_u64: uint64x2_t,
);
binary_family!(|a, b| a + b => vadd_f32: float32x2_t, vaddq_f32: float32x4_t);

binary_family!(|a, b| a.wrapping_sub(b) =>
    vsub_s8: int8x8_t,
    vsubq_s8: int8x16_t,
    vsub_s16: int16x4_t,
    vsubq_s16: int16x8_t,
    vsub_s32: int32x2_t,
    vsubq_s32: int32x4_t,
    vsub_s64: int64x1_t,
    vsubq_s64: int64x2_t,
    vsub_u8: uint8x8_t,
    vsubq_u8: uint8x16_t,
    vsub_u16: uint16x4_t,
    vsubq_u16: uint16x8_t,
    vsub_u32: uint32x2_t,
    vsubq_u32: uint32x4_t,
    vsub_u64: uint64x1_t,
    vsubq_u64: uint64x2_t,
);
binary_family!(|a, b| a - b => vsub_f32: float32x2_t, vsubq_f32: float32x4_t);

binary_family!(|a, b| a.wrapping_mul(b) =>
    vmul_s8: int8x8_t,
    vmulq_s8: int8x16_t,
    vmul_s16: int16x4_t,
    vmulq_s16: int16x8_t,
    vmul_s32: int32x2_t,
    vmulq_s32: int32x4_t,
    vmul_u8: uint8x8_t,
    vmulq_u8: uint8x16_t,
    vmul_u16: uint16x4_t,
    vmulq_u16: uint16x8_t,
    vmul_u32: uint32x2_t,
    vmulq_u32: uint32x4_t,
);
binary_family!(|a, b| a * b => vmul_f32: float32x2_t, vmulq_f32: float32x4_t);

binary_family!(|a, b| a.saturating_add(b) =>
    vqadd_s8: int8x8_t,
    vqaddq_s8: int8x16_t,
    vqadd_s16: int16x4_t,
    vqaddq_s16: int16x8_t,
    vqadd_s32: int32x2_t,
    vqaddq_s32: int32x4_t,
    vqadd_s64: int64x1_t,
    vqaddq_s64: int64x2_t,
    vqadd_u8: uint8x8_t,
    vqaddq_u8: uint8x16_t,
    vqadd_u16: uint16x4_t,
    vqaddq_u16: uint16x8_t,
    vqadd_u32: uint32x2_t,
    vqaddq_u32: uint32x4_t,
    vqadd_u64: uint64x1_t,
    vqaddq_u64: uint64x2_t,
);

binary_family!(|a, b| a.saturating_sub(b) =>
    vqsub_s8: int8x8_t,
    vqsubq_s8: int8x16_t,
    vqsub_s16: int16x4_t,
    vqsubq_s16: int16x8_t,
    vqsub_s32: int32x2_t,
    vqsubq_s32: int32x4_t,
    vqsub_s64: int64x1_t,
    vqsubq_s64: int64x2_t,
    vqsub_u8: uint8x8_t,
    vqsubq_u8: uint8x16_t,
    vqsub_u16: uint16x4_t,
    vqsubq_u16: uint16x8_t,
    vqsub_u32: uint32x2_t,
    vqsubq_u32: uint32x4_t,
    vqsub_u64: uint64x1_t,
    vqsubq_u64: uint64x2_t,
);

binary_family!(|a, b| Element::wrap((a.widen() + b.widen()) >> 1) =>
    vhadd_s8: int8x8_t,
    vhaddq_s8: int8x16_t,
    vhadd_s16: int16x4_t,
    vhaddq_s16: int16x8_t,
    vhadd_s32: int32x2_t,
    vhaddq_s32: int32x4_t,
    vhadd_u8: uint8x8_t,
    vhaddq_u8: uint8x16_t,
    vhadd_u16: uint16x4_t,
    vhaddq_u16: uint16x8_t,
    vhadd_u32: uint32x2_t,
    vhaddq_u32: uint32x4_t,
);

binary_family!(|a, b| Element::wrap((a.widen() + b.widen() + 1) >> 1) =>
    vrhadd_s8: int8x8_t,
    vrhaddq_s8: int8x16_t,
    vrhadd_s16: int16x4_t,
    vrhaddq_s16: int16x8_t,
    vrhadd_s32: int32x2_t,
    vrhaddq_s32: int32x4_t,
    vrhadd_u8: uint8x8_t,
    vrhaddq_u8: uint8x16_t,
    vrhadd_u16: uint16x4_t,
    vrhaddq_u16: uint16x8_t,
    vrhadd_u32: uint32x2_t,
    vrhaddq_u32: uint32x4_t,
);

binary_family!(|a, b| Element::wrap((a.widen() - b.widen()) >> 1) =>
    vhsub_s8: int8x8_t,
    vhsubq_s8: int8x16_t,
    vhsub_s16: int16x4_t,
    vhsubq_s16: int16x8_t,
    vhsub_s32: int32x2_t,
    vhsubq_s32: int32x4_t,
    vhsub_u8: uint8x8_t,
    vhsubq_u8: uint8x16_t,
    vhsub_u16: uint16x4_t,
    vhsubq_u16: uint16x8_t,
    vhsub_u32: uint32x2_t,
    vhsubq_u32: uint32x4_t,
);

binary!(|a, b| Element::wrap(a.widen() + b.widen()) =>
    vaddl_s8(int8x8_t, int8x8_t) -> int16x8_t,
    vaddl_s16(int16x4_t, int16x4_t) -> int32x4_t,
    vaddl_s32(int32x2_t, int32x2_t) -> int64x2_t,
    vaddl_u8(uint8x8_t, uint8x8_t) -> uint16x8_t,
    vaddl_u16(uint16x4_t, uint16x4_t) -> uint32x4_t,
    vaddl_u32(uint32x2_t, uint32x2_t) -> uint64x2_t,
);

binary!(|a, b| Element::wrap(a.widen() - b.widen()) =>
    vsubl_s8(int8x8_t, int8x8_t) -> int16x8_t,
    vsubl_s16(int16x4_t, int16x4_t) -> int32x4_t,
    vsubl_s32(int32x2_t, int32x2_t) -> int64x2_t,
    vsubl_u8(uint8x8_t, uint8x8_t) -> uint16x8_t,
    vsubl_u16(uint16x4_t, uint16x4_t) -> uint32x4_t,
    vsubl_u32(uint32x2_t, uint32x2_t) -> uint64x2_t,
);

binary!(|a, b| Element::wrap(a.widen() + b.widen()) =>
    vaddw_s8(int16x8_t, int8x8_t) -> int16x8_t,
    vaddw_s16(int32x4_t, int16x4_t) -> int32x4_t,
    vaddw_s32(int64x2_t, int32x2_t) -> int64x2_t,
    vaddw_u8(uint16x8_t, uint8x8_t) -> uint16x8_t,
    vaddw_u16(uint32x4_t, uint16x4_t) -> uint32x4_t,
    vaddw_u32(uint64x2_t, uint32x2_t) -> uint64x2_t,
);

binary!(|a, b| Element::wrap(a.widen() - b.widen()) =>
    vsubw_s8(int16x8_t, int8x8_t) -> int16x8_t,
    vsubw_s16(int32x4_t, int16x4_t) -> int32x4_t,
    vsubw_s32(int64x2_t, int32x2_t) -> int64x2_t,
    vsubw_u8(uint16x8_t, uint8x8_t) -> uint16x8_t,
    vsubw_u16(uint32x4_t, uint16x4_t) -> uint32x4_t,
    vsubw_u32(uint64x2_t, uint32x2_t) -> uint64x2_t,
);

binary!(|a, b| high_half(a.widen() + b.widen()) =>
    vaddhn_s16(int16x8_t, int16x8_t) -> int8x8_t,
    vaddhn_s32(int32x4_t, int32x4_t) -> int16x4_t,
    vaddhn_s64(int64x2_t, int64x2_t) -> int32x2_t,
    vaddhn_u16(uint16x8_t, uint16x8_t) -> uint8x8_t,
    vaddhn_u32(uint32x4_t, uint32x4_t) -> uint16x4_t,
    vaddhn_u64(uint64x2_t, uint64x2_t) -> uint32x2_t,
);

binary!(|a, b| rounded_high_half(a.widen() + b.widen()) =>
    vraddhn_s16(int16x8_t, int16x8_t) -> int8x8_t,
    vraddhn_s32(int32x4_t, int32x4_t) -> int16x4_t,
    vraddhn_s64(int64x2_t, int64x2_t) -> int32x2_t,
    vraddhn_u16(uint16x8_t, uint16x8_t) -> uint8x8_t,
    vraddhn_u32(uint32x4_t, uint32x4_t) -> uint16x4_t,
    vraddhn_u64(uint64x2_t, uint64x2_t) -> uint32x2_t,
);

binary!(|a, b| high_half(a.widen() - b.widen()) =>
    vsubhn_s16(int16x8_t, int16x8_t) -> int8x8_t,
    vsubhn_s32(int32x4_t, int32x4_t) -> int16x4_t,
    vsubhn_s64(int64x2_t, int64x2_t) -> int32x2_t,
    vsubhn_u16(uint16x8_t, uint16x8_t) -> uint8x8_t,
    vsubhn_u32(uint32x4_t, uint32x4_t) -> uint16x4_t,
    vsubhn_u64(uint64x2_t, uint64x2_t) -> uint32x2_t,
);

binary!(|a, b| rounded_high_half(a.widen() - b.widen()) =>
    vrsubhn_s16(int16x8_t, int16x8_t) -> int8x8_t,
    vrsubhn_s32(int32x4_t, int32x4_t) -> int16x4_t,
    vrsubhn_s64(int64x2_t, int64x2_t) -> int32x2_t,
    vrsubhn_u16(uint16x8_t, uint16x8_t) -> uint8x8_t,
    vrsubhn_u32(uint32x4_t, uint32x4_t) -> uint16x4_t,
    vrsubhn_u64(uint64x2_t, uint64x2_t) -> uint32x2_t,
);

ternary_family!(|a, b, c| a.wrapping_add(b.wrapping_mul(c)) =>
    vmla_s8: int8x8_t,
    vmlaq_s8: int8x16_t,
    vmla_s16: int16x4_t,
    vmlaq_s16: int16x8_t,
    vmla_s32: int32x2_t,
    vmlaq_s32: int32x4_t,
    vmla_u8: uint8x8_t,
    vmlaq_u8: uint8x16_t,
    vmla_u16: uint16x4_t,
    vmlaq_u16: uint16x8_t,
    vmla_u32: uint32x2_t,
    vmlaq_u32: uint32x4_t,
);
ternary_family!(|a, b, c| a + b * c => vmla_f32: float32x2_t, vmlaq_f32: float32x4_t);

ternary_family!(|a, b, c| a.wrapping_sub(b.wrapping_mul(c)) =>
    vmls_s8: int8x8_t,
    vmlsq_s8: int8x16_t,
    vmls_s16: int16x4_t,
    vmlsq_s16: int16x8_t,
    vmls_s32: int32x2_t,
    vmlsq_s32: int32x4_t,
    vmls_u8: uint8x8_t,
    vmlsq_u8: uint8x16_t,
    vmls_u16: uint16x4_t,
    vmlsq_u16: uint16x8_t,
    vmls_u32: uint32x2_t,
    vmlsq_u32: uint32x4_t,
);
ternary_family!(|a, b, c| a - b * c => vmls_f32: float32x2_t, vmlsq_f32: float32x4_t);

ternary!(|a, b, c| Element::wrap(a.widen() + b.widen() * c.widen()) =>
    vmlal_s8(int16x8_t, int8x8_t, int8x8_t) -> int16x8_t,
    vmlal_s16(int32x4_t, int16x4_t, int16x4_t) -> int32x4_t,
    vmlal_s32(int64x2_t, int32x2_t, int32x2_t) -> int64x2_t,
    vmlal_u8(uint16x8_t, uint8x8_t, uint8x8_t) -> uint16x8_t,
    vmlal_u16(uint32x4_t, uint16x4_t, uint16x4_t) -> uint32x4_t,
    vmlal_u32(uint64x2_t, uint32x2_t, uint32x2_t) -> uint64x2_t,
);

ternary!(|a, b, c| Element::wrap(a.widen() - b.widen() * c.widen()) =>
    vmlsl_s8(int16x8_t, int8x8_t, int8x8_t) -> int16x8_t,
    vmlsl_s16(int32x4_t, int16x4_t, int16x4_t) -> int32x4_t,
    vmlsl_s32(int64x2_t, int32x2_t, int32x2_t) -> int64x2_t,
    vmlsl_u8(uint16x8_t, uint8x8_t, uint8x8_t) -> uint16x8_t,
    vmlsl_u16(uint32x4_t, uint16x4_t, uint16x4_t) -> uint32x4_t,
    vmlsl_u32(uint64x2_t, uint32x2_t, uint32x2_t) -> uint64x2_t,
);

binary!(|a, b| Element::wrap(a.widen() * b.widen()) =>
    vmull_s8(int8x8_t, int8x8_t) -> int16x8_t,
    vmull_s16(int16x4_t, int16x4_t) -> int32x4_t,
    vmull_s32(int32x2_t, int32x2_t) -> int64x2_t,
    vmull_u8(uint8x8_t, uint8x8_t) -> uint16x8_t,
    vmull_u16(uint16x4_t, uint16x4_t) -> uint32x4_t,
    vmull_u32(uint32x2_t, uint32x2_t) -> uint64x2_t,
);

binary_family!(|a, b| Element::saturate((2 * a.widen() * b.widen()) >> 16) =>
    vqdmulh_s16: int16x4_t,
    vqdmulhq_s16: int16x8_t,
);
binary_family!(|a, b| Element::saturate((2 * a.widen() * b.widen()) >> 32) =>
    vqdmulh_s32: int32x2_t,
    vqdmulhq_s32: int32x4_t,
);

binary_family!(|a, b| Element::saturate((2 * a.widen() * b.widen() + (1 << 15)) >> 16) =>
    vqrdmulh_s16: int16x4_t,
    vqrdmulhq_s16: int16x8_t,
);
binary_family!(|a, b| Element::saturate((2 * a.widen() * b.widen() + (1 << 31)) >> 32) =>
    vqrdmulh_s32: int32x2_t,
    vqrdmulhq_s32: int32x4_t,
);

binary!(|a, b| Element::saturate(2 * a.widen() * b.widen()) =>
    vqdmull_s16(int16x4_t, int16x4_t) -> int32x4_t,
    vqdmull_s32(int32x2_t, int32x2_t) -> int64x2_t,
);

// By-scalar forms broadcast the scalar and reuse the vector operation.
macro_rules! by_scalar {
    ($($name:ident($ty:ident, $scalar:ty) = $op:ident, $dup:ident;)*) => {$(
        #[inline]
        pub fn $name(a: $ty, b: $scalar) -> $ty {
            $op(a, $dup(b))
        }
    )*};
}

macro_rules! accumulate_by_scalar {
    ($($name:ident($ty:ident, $scalar:ty) = $op:ident, $dup:ident;)*) => {$(
        #[inline]
        pub fn $name(a: $ty, b: $ty, c: $scalar) -> $ty {
            $op(a, b, $dup(c))
        }
    )*};
}

by_scalar! {
    vmul_n_s16(int16x4_t, i16) = vmul_s16, vdup_n_s16;
    vmulq_n_s16(int16x8_t, i16) = vmulq_s16, vdupq_n_s16;
    vmul_n_s32(int32x2_t, i32) = vmul_s32, vdup_n_s32;
    vmulq_n_s32(int32x4_t, i32) = vmulq_s32, vdupq_n_s32;
    vmul_n_u16(uint16x4_t, u16) = vmul_u16, vdup_n_u16;
    vmulq_n_u16(uint16x8_t, u16) = vmulq_u16, vdupq_n_u16;
    vmul_n_u32(uint32x2_t, u32) = vmul_u32, vdup_n_u32;
    vmulq_n_u32(uint32x4_t, u32) = vmulq_u32, vdupq_n_u32;
    vmul_n_f32(float32x2_t, f32) = vmul_f32, vdup_n_f32;
    vmulq_n_f32(float32x4_t, f32) = vmulq_f32, vdupq_n_f32;
}

accumulate_by_scalar! {
    vmla_n_s16(int16x4_t, i16) = vmla_s16, vdup_n_s16;
    vmlaq_n_s16(int16x8_t, i16) = vmlaq_s16, vdupq_n_s16;
    vmla_n_s32(int32x2_t, i32) = vmla_s32, vdup_n_s32;
    vmlaq_n_s32(int32x4_t, i32) = vmlaq_s32, vdupq_n_s32;
    vmla_n_u16(uint16x4_t, u16) = vmla_u16, vdup_n_u16;
    vmlaq_n_u16(uint16x8_t, u16) = vmlaq_u16, vdupq_n_u16;
    vmla_n_u32(uint32x2_t, u32) = vmla_u32, vdup_n_u32;
    vmlaq_n_u32(uint32x4_t, u32) = vmlaq_u32, vdupq_n_u32;
    vmla_n_f32(float32x2_t, f32) = vmla_f32, vdup_n_f32;
    vmlaq_n_f32(float32x4_t, f32) = vmlaq_f32, vdupq_n_f32;
    vmls_n_s16(int16x4_t, i16) = vmls_s16, vdup_n_s16;
    vmlsq_n_s16(int16x8_t, i16) = vmlsq_s16, vdupq_n_s16;
    vmls_n_s32(int32x2_t, i32) = vmls_s32, vdup_n_s32;
    vmlsq_n_s32(int32x4_t, i32) = vmlsq_s32, vdupq_n_s32;
    vmls_n_u16(uint16x4_t, u16) = vmls_u16, vdup_n_u16;
    vmlsq_n_u16(uint16x8_t, u16) = vmlsq_u16, vdupq_n_u16;
    vmls_n_u32(uint32x2_t, u32) = vmls_u32, vdup_n_u32;
    vmlsq_n_u32(uint32x4_t, u32) = vmlsq_u32, vdupq_n_u32;
    vmls_n_f32(float32x2_t, f32) = vmls_f32, vdup_n_f32;
    vmlsq_n_f32(float32x4_t, f32) = vmlsq_f32, vdupq_n_f32;
}

ternary_family!(|a, b, c| b.mul_add(c, a) => vfma_f32: float32x2_t, vfmaq_f32: float32x4_t);
ternary_family!(|a, b, c| (-b).mul_add(c, a) => vfms_f32: float32x2_t, vfmsq_f32: float32x4_t);

unary_family!(|x| round_with(x, f32::trunc) => vrnd_f32: float32x2_t, vrndq_f32: float32x4_t);
unary_family!(|x| round_with(x, f32::round_ties_even) => vrndn_f32: float32x2_t, vrndnq_f32: float32x4_t);
unary_family!(|x| round_with(x, f32::round) => vrnda_f32: float32x2_t, vrndaq_f32: float32x4_t);
unary_family!(|x| round_with(x, f32::ceil) => vrndp_f32: float32x2_t, vrndpq_f32: float32x4_t);
unary_family!(|x| round_with(x, f32::floor) => vrndm_f32: float32x2_t, vrndmq_f32: float32x4_t);
unary_family!(|x| round_with(x, f32::round_ties_even) => vrndx_f32: float32x2_t, vrndxq_f32: float32x4_t);

binary_family!(|a, b| Element::wrap((a.widen() - b.widen()).abs()) =>
    vabd_s8: int8x8_t,
    vabdq_s8: int8x16_t,
    vabd_s16: int16x4_t,
    vabdq_s16: int16x8_t,
    vabd_s32: int32x2_t,
    vabdq_s32: int32x4_t,
    vabd_u8: uint8x8_t,
    vabdq_u8: uint8x16_t,
    vabd_u16: uint16x4_t,
    vabdq_u16: uint16x8_t,
    vabd_u32: uint32x2_t,
    vabdq_u32: uint32x4_t,
);
binary_family!(|a, b| (a - b).abs() => vabd_f32: float32x2_t, vabdq_f32: float32x4_t);

binary!(|a, b| Element::wrap((a.widen() - b.widen()).abs()) =>
    vabdl_s8(int8x8_t, int8x8_t) -> int16x8_t,
    vabdl_s16(int16x4_t, int16x4_t) -> int32x4_t,
    vabdl_s32(int32x2_t, int32x2_t) -> int64x2_t,
    vabdl_u8(uint8x8_t, uint8x8_t) -> uint16x8_t,
    vabdl_u16(uint16x4_t, uint16x4_t) -> uint32x4_t,
    vabdl_u32(uint32x2_t, uint32x2_t) -> uint64x2_t,
);

ternary_family!(|a, b, c| a.wrapping_add(Element::wrap((b.widen() - c.widen()).abs())) =>
    vaba_s8: int8x8_t,
    vabaq_s8: int8x16_t,
    vaba_s16: int16x4_t,
    vabaq_s16: int16x8_t,
    vaba_s32: int32x2_t,
    vabaq_s32: int32x4_t,
    vaba_u8: uint8x8_t,
    vabaq_u8: uint8x16_t,
    vaba_u16: uint16x4_t,
    vabaq_u16: uint16x8_t,
    vaba_u32: uint32x2_t,
    vabaq_u32: uint32x4_t,
);

ternary!(|a, b, c| Element::wrap(a.widen() + (b.widen() - c.widen()).abs()) =>
    vabal_s8(int16x8_t, int8x8_t, int8x8_t) -> int16x8_t,
    vabal_s16(int32x4_t, int16x4_t, int16x4_t) -> int32x4_t,
    vabal_s32(int64x2_t, int32x2_t, int32x2_t) -> int64x2_t,
    vabal_u8(uint16x8_t, uint8x8_t, uint8x8_t) -> uint16x8_t,
    vabal_u16(uint32x4_t, uint16x4_t, uint16x4_t) -> uint32x4_t,
    vabal_u32(uint64x2_t, uint32x2_t, uint32x2_t) -> uint64x2_t,
);

unary_family!(|x| x.wrapping_abs() =>
    vabs_s8: int8x8_t,
    vabsq_s8: int8x16_t,
    vabs_s16: int16x4_t,
    vabsq_s16: int16x8_t,
    vabs_s32: int32x2_t,
    vabsq_s32: int32x4_t,
);
unary_family!(|x| f32::from_bits(x.to_bits() & 0x7fff_ffff) => vabs_f32: float32x2_t, vabsq_f32: float32x4_t);

unary_family!(|x| x.saturating_abs() =>
    vqabs_s8: int8x8_t,
    vqabsq_s8: int8x16_t,
    vqabs_s16: int16x4_t,
    vqabsq_s16: int16x8_t,
    vqabs_s32: int32x2_t,
    vqabsq_s32: int32x4_t,
);

unary_family!(|x| x.wrapping_neg() =>
    vneg_s8: int8x8_t,
    vnegq_s8: int8x16_t,
    vneg_s16: int16x4_t,
    vnegq_s16: int16x8_t,
    vneg_s32: int32x2_t,
    vnegq_s32: int32x4_t,
);
unary_family!(|x| f32::from_bits(x.to_bits() ^ 0x8000_0000) => vneg_f32: float32x2_t, vnegq_f32: float32x4_t);

unary_family!(|x| x.saturating_neg() =>
    vqneg_s8: int8x8_t,
    vqnegq_s8: int8x16_t,
    vqneg_s16: int16x4_t,
    vqnegq_s16: int16x8_t,
    vqneg_s32: int32x2_t,
    vqnegq_s32: int32x4_t,
);

binary_family!(|a, b| a.max(b) =>
    vmax_s8: int8x8_t,
    vmaxq_s8: int8x16_t,
    vmax_s16: int16x4_t,
    vmaxq_s16: int16x8_t,
    vmax_s32: int32x2_t,
    vmaxq_s32: int32x4_t,
    vmax_u8: uint8x8_t,
    vmaxq_u8: uint8x16_t,
    vmax_u16: uint16x4_t,
    vmaxq_u16: uint16x8_t,
    vmax_u32: uint32x2_t,
    vmaxq_u32: uint32x4_t,
);
binary_family!(max_f32 => vmax_f32: float32x2_t, vmaxq_f32: float32x4_t);

binary_family!(|a, b| a.min(b) =>
    vmin_s8: int8x8_t,
    vminq_s8: int8x16_t,
    vmin_s16: int16x4_t,
    vminq_s16: int16x8_t,
    vmin_s32: int32x2_t,
    vminq_s32: int32x4_t,
    vmin_u8: uint8x8_t,
    vminq_u8: uint8x16_t,
    vmin_u16: uint16x4_t,
    vminq_u16: uint16x8_t,
    vmin_u32: uint32x2_t,
    vminq_u32: uint32x4_t,
);
binary_family!(min_f32 => vmin_f32: float32x2_t, vminq_f32: float32x4_t);

binary_family!(max_num_f32 => vmaxnm_f32: float32x2_t, vmaxnmq_f32: float32x4_t);
binary_family!(min_num_f32 => vminnm_f32: float32x2_t, vminnmq_f32: float32x4_t);

macro_rules! pairwise_family {
    ($f:expr => $($name:ident: $ty:ident),+ $(,)?) => {$(
        #[inline]
        pub fn $name(a: $ty, b: $ty) -> $ty {
            pairwise(a, b, $f)
        }
    )+};
}

pairwise_family!(|a, b| a.wrapping_add(b) =>
    vpadd_s8: int8x8_t,
    vpadd_s16: int16x4_t,
    vpadd_s32: int32x2_t,
    vpadd_u8: uint8x8_t,
    vpadd_u16: uint16x4_t,
    vpadd_u32: uint32x2_t,
);
pairwise_family!(|a, b| a + b => vpadd_f32: float32x2_t);

pairwise_family!(|a, b| a.max(b) =>
    vpmax_s8: int8x8_t,
    vpmax_s16: int16x4_t,
    vpmax_s32: int32x2_t,
    vpmax_u8: uint8x8_t,
    vpmax_u16: uint16x4_t,
    vpmax_u32: uint32x2_t,
);
pairwise_family!(max_f32 => vpmax_f32: float32x2_t);

pairwise_family!(|a, b| a.min(b) =>
    vpmin_s8: int8x8_t,
    vpmin_s16: int16x4_t,
    vpmin_s32: int32x2_t,
    vpmin_u8: uint8x8_t,
    vpmin_u16: uint16x4_t,
    vpmin_u32: uint32x2_t,
);
pairwise_family!(min_f32 => vpmin_f32: float32x2_t);

macro_rules! pairwise_long {
    ($($name:ident($a:ident) -> $r:ident),+ $(,)?) => {$(
        #[inline]
        pub fn $name(a: $a) -> $r {
            pairs(a, |x, y| Element::wrap(x.widen() + y.widen()))
        }
    )+};
}

pairwise_long! {
    vpaddl_s8(int8x8_t) -> int16x4_t,
    vpaddlq_s8(int8x16_t) -> int16x8_t,
    vpaddl_s16(int16x4_t) -> int32x2_t,
    vpaddlq_s16(int16x8_t) -> int32x4_t,
    vpaddl_s32(int32x2_t) -> int64x1_t,
    vpaddlq_s32(int32x4_t) -> int64x2_t,
    vpaddl_u8(uint8x8_t) -> uint16x4_t,
    vpaddlq_u8(uint8x16_t) -> uint16x8_t,
    vpaddl_u16(uint16x4_t) -> uint32x2_t,
    vpaddlq_u16(uint16x8_t) -> uint32x4_t,
    vpaddl_u32(uint32x2_t) -> uint64x1_t,
    vpaddlq_u32(uint32x4_t) -> uint64x2_t,
}

macro_rules! pairwise_accumulate {
    ($($name:ident($acc:ident, $a:ident) = $add:ident, $long:ident;)*) => {$(
        #[inline]
        pub fn $name(a: $acc, b: $a) -> $acc {
            $add(a, $long(b))
        }
    )*};
}

pairwise_accumulate! {
    vpadal_s8(int16x4_t, int8x8_t) = vadd_s16, vpaddl_s8;
    vpadalq_s8(int16x8_t, int8x16_t) = vaddq_s16, vpaddlq_s8;
    vpadal_s16(int32x2_t, int16x4_t) = vadd_s32, vpaddl_s16;
    vpadalq_s16(int32x4_t, int16x8_t) = vaddq_s32, vpaddlq_s16;
    vpadal_s32(int64x1_t, int32x2_t) = vadd_s64, vpaddl_s32;
    vpadalq_s32(int64x2_t, int32x4_t) = vaddq_s64, vpaddlq_s32;
    vpadal_u8(uint16x4_t, uint8x8_t) = vadd_u16, vpaddl_u8;
    vpadalq_u8(uint16x8_t, uint8x16_t) = vaddq_u16, vpaddlq_u8;
    vpadal_u16(uint32x2_t, uint16x4_t) = vadd_u32, vpaddl_u16;
    vpadalq_u16(uint32x4_t, uint16x8_t) = vaddq_u32, vpaddlq_u16;
    vpadal_u32(uint64x1_t, uint32x2_t) = vadd_u64, vpaddl_u32;
    vpadalq_u32(uint64x2_t, uint32x4_t) = vaddq_u64, vpaddlq_u32;
}

binary_family!(recip_step => vrecps_f32: float32x2_t, vrecpsq_f32: float32x4_t);
binary_family!(rsqrt_step => vrsqrts_f32: float32x2_t, vrsqrtsq_f32: float32x4_t);

