//! Shifts by register and by immediate, including the narrowing, widening,
//! accumulating and inserting forms.
//!
//! Immediates are const generics, as in `core::arch::aarch64`. Their valid
//! ranges are checked in debug builds.

use super::kernel::*;
use super::types::*;

// SSHL/USHL: the shift is the signed low byte of each lane of `shift`;
// negative values shift right.
fn shift_by<T: Element, S: Bits>(a: T, shift: S) -> T {
    let shift = shift.to_raw() as u8 as i8 as i32;
    let v = a.widen();
    if shift >= 0 {
        if shift as u32 >= T::BITS {
            T::wrap(0)
        } else {
            T::wrap(v << shift)
        }
    } else if shift.unsigned_abs() >= T::BITS {
        T::wrap(if v < 0 { -1 } else { 0 })
    } else {
        T::wrap(v >> -shift)
    }
}

fn rounding_shr(v: i128, n: i32) -> i128 {
    (v + (1 << (n - 1))) >> n
}

fn shl_imm<T: Element, R: Element>(x: T, n: i32) -> R {
    R::wrap(x.widen() << n)
}

fn shr_imm<T: Element, R: Element>(x: T, n: i32) -> R {
    R::wrap(x.widen() >> n)
}

fn rshr_imm<T: Element, R: Element>(x: T, n: i32) -> R {
    R::wrap(rounding_shr(x.widen(), n))
}

// Also the signed-to-unsigned narrowing forms: `R` decides the clamp.
fn qshr_imm<T: Element, R: Element>(x: T, n: i32) -> R {
    R::saturate(x.widen() >> n)
}

fn qrshr_imm<T: Element, R: Element>(x: T, n: i32) -> R {
    R::saturate(rounding_shr(x.widen(), n))
}

fn qshl_imm<T: Element, R: Element>(x: T, n: i32) -> R {
    R::saturate(x.widen() << n)
}

fn sra_imm<T: Element>(a: T, b: T, n: i32) -> T {
    T::wrap(a.widen() + (b.widen() >> n))
}

fn rsra_imm<T: Element>(a: T, b: T, n: i32) -> T {
    T::wrap(a.widen() + rounding_shr(b.widen(), n))
}

fn width_mask<T: Element>() -> u64 {
    u64::MAX >> (64 - T::BITS)
}

// SLI: `b << n` with the low `n` bits of `a` kept.
fn sli_imm<T: Element + Bits>(a: T, b: T, n: i32) -> T {
    let keep = (1u64 << n) - 1;
    T::from_raw(((b.to_raw() << n) & width_mask::<T>()) | (a.to_raw() & keep))
}

// SRI: `b >> n` (logical) with the high `n` bits of `a` kept.
fn sri_imm<T: Element + Bits>(a: T, b: T, n: i32) -> T {
    if n as u32 == T::BITS {
        return a;
    }
    let keep = !(width_mask::<T>() >> n) & width_mask::<T>();
    T::from_raw((b.to_raw() >> n) | (a.to_raw() & keep))
}

macro_rules! shift_imm {
    ($f:ident => $($name:ident($a:ident) -> $r:ident: $lo:literal..=$hi:literal),+ $(,)?) => {$(
        #[inline]
        pub fn $name<const N: i32>(a: $a) -> $r {
            debug_assert!(($lo..=$hi).contains(&N), "shift immediate out of range");
            map(a, |x| $f(x, N))
        }
    )+};
}

macro_rules! shift_imm_accumulate {
    ($f:ident => $($name:ident($a:ident) -> $r:ident: $lo:literal..=$hi:literal),+ $(,)?) => {$(
        #[inline]
        pub fn $name<const N: i32>(a: $a, b: $a) -> $r {
            debug_assert!(($lo..=$hi).contains(&N), "shift immediate out of range");
            zip(a, b, |x, y| $f(x, y, N))
        }
    )+};
}

binary!(shift_by =>
    vshl_s8(int8x8_t, int8x8_t) -> int8x8_t,
    vshlq_s8(int8x16_t, int8x16_t) -> int8x16_t,
    vshl_s16(int16x4_t, int16x4_t) -> int16x4_t,
    vshlq_s16(int16x8_t, int16x8_t) -> int16x8_t,
    vshl_s32(int32x2_t, int32x2_t) -> int32x2_t,
    vshlq_s32(int32x4_t, int32x4_t) -> int32x4_t,
    vshl_s64(int64x1_t, int64x1_t) -> int64x1_t,
    vshlq_s64(int64x2_t, int64x2_t) -> int64x2_t,
    vshl_u8(uint8x8_t, int8x8_t) -> uint8x8_t,
    vshlq_u8(uint8x16_t, int8x16_t) -> uint8x16_t,
    vshl_u16(uint16x4_t, int16x4_t) -> uint16x4_t,
    vshlq_u16(uint16x8_t, int16x8_t) -> uint16x8_t,
    vshl_u32(uint32x2_t, int32x2_t) -> uint32x2_t,
    vshlq_u32(uint32x4_t, int32x4_t) -> uint32x4_t,
    vshl_u64(uint64x1_t, int64x1_t) -> uint64x1_t,
    vshlq_u64(uint64x2_t, int64x2_t) -> uint64x2_t,
);

shift_imm!(shl_imm =>
    vshl_n_s8(int8x8_t) -> int8x8_t: 0..=7,
    vshlq_n_s8(int8x16_t) -> int8x16_t: 0..=7,
    vshl_n_s16(int16x4_t) -> int16x4_t: 0..=15,
    vshlq_n_s16(int16x8_t) -> int16x8_t: 0..=15,
    vshl_n_s32(int32x2_t) -> int32x2_t: 0..=31,
    vshlq_n_s32(int32x4_t) -> int32x4_t: 0..=31,
    vshl_n_s64(int64x1_t) -> int64x1_t: 0..=63,
    vshlq_n_s64(int64x2_t) -> int64x2_t: 0..=63,
    vshl_n_u8(uint8x8_t) -> uint8x8_t: 0..=7,
    vshlq_n_u8(uint8x16_t) -> uint8x16_t: 0..=7,
    vshl_n_u16(uint16x4_t) -> uint16x4_t: 0..=15,
    vshlq_n_u16(uint16x8_t) -> uint16x8_t: 0..=15,
    vshl_n_u32(uint32x2_t) -> uint32x2_t: 0..=31,
    vshlq_n_u32(uint32x4_t) -> uint32x4_t: 0..=31,
    vshl_n_u64(uint64x1_t) -> uint64x1_t: 0..=63,
    vshlq_n_u64(uint64x2_t) -> uint64x2_t: 0..=63,
);

shift_imm!(shr_imm =>
    vshr_n_s8(int8x8_t) -> int8x8_t: 1..=8,
    vshrq_n_s8(int8x16_t) -> int8x16_t: 1..=8,
    vshr_n_s16(int16x4_t) -> int16x4_t: 1..=16,
    vshrq_n_s16(int16x8_t) -> int16x8_t: 1..=16,
    vshr_n_s32(int32x2_t) -> int32x2_t: 1..=32,
    vshrq_n_s32(int32x4_t) -> int32x4_t: 1..=32,
    vshr_n_s64(int64x1_t) -> int64x1_t: 1..=64,
    vshrq_n_s64(int64x2_t) -> int64x2_t: 1..=64,
    vshr_n_u8(uint8x8_t) -> uint8x8_t: 1..=8,
    vshrq_n_u8(uint8x16_t) -> uint8x16_t: 1..=8,
    vshr_n_u16(uint16x4_t) -> uint16x4_t: 1..=16,
    vshrq_n_u16(uint16x8_t) -> uint16x8_t: 1..=16,
    vshr_n_u32(uint32x2_t) -> uint32x2_t: 1..=32,
    vshrq_n_u32(uint32x4_t) -> uint32x4_t: 1..=32,
    vshr_n_u64(uint64x1_t) -> uint64x1_t: 1..=64,
    vshrq_n_u64(uint64x2_t) -> uint64x2_t: 1..=64,
);

shift_imm!(rshr_imm =>
    vrshr_n_s8(int8x8_t) -> int8x8_t: 1..=8,
    vrshrq_n_s8(int8x16_t) -> int8x16_t: 1..=8,
    vrshr_n_s16(int16x4_t) -> int16x4_t: 1..=16,
    vrshrq_n_s16(int16x8_t) -> int16x8_t: 1..=16,
    vrshr_n_s32(int32x2_t) -> int32x2_t: 1..=32,
    vrshrq_n_s32(int32x4_t) -> int32x4_t: 1..=32,
    vrshr_n_s64(int64x1_t) -> int64x1_t: 1..=64,
    vrshrq_n_s64(int64x2_t) -> int64x2_t: 1..=64,
    vrshr_n_u8(uint8x8_t) -> uint8x8_t: 1..=8,
    vrshrq_n_u8(uint8x16_t) -> uint8x16_t: 1..=8,
    vrshr_n_u16(uint16x4_t) -> uint16x4_t: 1..=16,
    vrshrq_n_u16(uint16x8_t) -> uint16x8_t: 1..=16,
    vrshr_n_u32(uint32x2_t) -> uint32x2_t: 1..=32,
    vrshrq_n_u32(uint32x4_t) -> uint32x4_t: 1..=32,
    vrshr_n_u64(uint64x1_t) -> uint64x1_t: 1..=64,
    vrshrq_n_u64(uint64x2_t) -> uint64x2_t: 1..=64,
);

shift_imm_accumulate!(sra_imm =>
    vsra_n_s8(int8x8_t) -> int8x8_t: 1..=8,
    vsraq_n_s8(int8x16_t) -> int8x16_t: 1..=8,
    vsra_n_s16(int16x4_t) -> int16x4_t: 1..=16,
    vsraq_n_s16(int16x8_t) -> int16x8_t: 1..=16,
    vsra_n_s32(int32x2_t) -> int32x2_t: 1..=32,
    vsraq_n_s32(int32x4_t) -> int32x4_t: 1..=32,
    vsra_n_s64(int64x1_t) -> int64x1_t: 1..=64,
    vsraq_n_s64(int64x2_t) -> int64x2_t: 1..=64,
    vsra_n_u8(uint8x8_t) -> uint8x8_t: 1..=8,
    vsraq_n_u8(uint8x16_t) -> uint8x16_t: 1..=8,
    vsra_n_u16(uint16x4_t) -> uint16x4_t: 1..=16,
    vsraq_n_u16(uint16x8_t) -> uint16x8_t: 1..=16,
    vsra_n_u32(uint32x2_t) -> uint32x2_t: 1..=32,
    vsraq_n_u32(uint32x4_t) -> uint32x4_t: 1..=32,
    vsra_n_u64(uint64x1_t) -> uint64x1_t: 1..=64,
    vsraq_n_u64(uint64x2_t) -> uint64x2_t: 1..=64,
);

shift_imm_accumulate!(rsra_imm =>
    vrsra_n_s8(int8x8_t) -> int8x8_t: 1..=8,
    vrsraq_n_s8(int8x16_t) -> int8x16_t: 1..=8,
    vrsra_n_s16(int16x4_t) -> int16x4_t: 1..=16,
    vrsraq_n_s16(int16x8_t) -> int16x8_t: 1..=16,
    vrsra_n_s32(int32x2_t) -> int32x2_t: 1..=32,
    vrsraq_n_s32(int32x4_t) -> int32x4_t: 1..=32,
    vrsra_n_s64(int64x1_t) -> int64x1_t: 1..=64,
    vrsraq_n_s64(int64x2_t) -> int64x2_t: 1..=64,
    vrsra_n_u8(uint8x8_t) -> uint8x8_t: 1..=8,
    vrsraq_n_u8(uint8x16_t) -> uint8x16_t: 1..=8,
    vrsra_n_u16(uint16x4_t) -> uint16x4_t: 1..=16,
    vrsraq_n_u16(uint16x8_t) -> uint16x8_t: 1..=16,
    vrsra_n_u32(uint32x2_t) -> uint32x2_t: 1..=32,
    vrsraq_n_u32(uint32x4_t) -> uint32x4_t: 1..=32,
    vrsra_n_u64(uint64x1_t) -> uint64x1_t: 1..=64,
    vrsraq_n_u64(uint64x2_t) -> uint64x2_t: 1..=64,
);

shift_imm_accumulate!(sli_imm =>
    vsli_n_s8(int8x8_t) -> int8x8_t: 0..=7,
    vsliq_n_s8(int8x16_t) -> int8x16_t: 0..=7,
    vsli_n_s16(int16x4_t) -> int16x4_t: 0..=15,
    vsliq_n_s16(int16x8_t) -> int16x8_t: 0..=15,
    vsli_n_s32(int32x2_t) -> int32x2_t: 0..=31,
    vsliq_n_s32(int32x4_t) -> int32x4_t: 0..=31,
    vsli_n_s64(int64x1_t) -> int64x1_t: 0..=63,
    vsliq_n_s64(int64x2_t) -> int64x2_t: 0..=63,
    vsli_n_u8(uint8x8_t) -> uint8x8_t: 0..=7,
    vsliq_n_u8(uint8x16_t) -> uint8x16_t: 0..=7,
    vsli_n_u16(uint16x4_t) -> uint16x4_t: 0..=15,
    vsliq_n_u16(uint16x8_t) -> uint16x8_t: 0..=15,
    vsli_n_u32(uint32x2_t) -> uint32x2_t: 0..=31,
    vsliq_n_u32(uint32x4_t) -> uint32x4_t: 0..=31,
    vsli_n_u64(uint64x1_t) -> uint64x1_t: 0..=63,
    vsliq_n_u64(uint64x2_t) -> uint64x2_t: 0..=63,
);

shift_imm_accumulate!(sri_imm =>
    vsri_n_s8(int8x8_t) -> int8x8_t: 1..=8,
    vsriq_n_s8(int8x16_t) -> int8x16_t: 1..=8,
    vsri_n_s16(int16x4_t) -> int16x4_t: 1..=16,
    vsriq_n_s16(int16x8_t) -> int16x8_t: 1..=16,
    vsri_n_s32(int32x2_t) -> int32x2_t: 1..=32,
    vsriq_n_s32(int32x4_t) -> int32x4_t: 1..=32,
    vsri_n_s64(int64x1_t) -> int64x1_t: 1..=64,
    vsriq_n_s64(int64x2_t) -> int64x2_t: 1..=64,
    vsri_n_u8(uint8x8_t) -> uint8x8_t: 1..=8,
    vsriq_n_u8(uint8x16_t) -> uint8x16_t: 1..=8,
    vsri_n_u16(uint16x4_t) -> uint16x4_t: 1..=16,
    vsriq_n_u16(uint16x8_t) -> uint16x8_t: 1..=16,
    vsri_n_u32(uint32x2_t) -> uint32x2_t: 1..=32,
    vsriq_n_u32(uint32x4_t) -> uint32x4_t: 1..=32,
    vsri_n_u64(uint64x1_t) -> uint64x1_t: 1..=64,
    vsriq_n_u64(uint64x2_t) -> uint64x2_t: 1..=64,
);

shift_imm!(shl_imm =>
    vshll_n_s8(int8x8_t) -> int16x8_t: 0..=8,
    vshll_n_s16(int16x4_t) -> int32x4_t: 0..=16,
    vshll_n_s32(int32x2_t) -> int64x2_t: 0..=32,
    vshll_n_u8(uint8x8_t) -> uint16x8_t: 0..=8,
    vshll_n_u16(uint16x4_t) -> uint32x4_t: 0..=16,
    vshll_n_u32(uint32x2_t) -> uint64x2_t: 0..=32,
);

shift_imm!(shr_imm =>
    vshrn_n_s16(int16x8_t) -> int8x8_t: 1..=8,
    vshrn_n_s32(int32x4_t) -> int16x4_t: 1..=16,
    vshrn_n_s64(int64x2_t) -> int32x2_t: 1..=32,
    vshrn_n_u16(uint16x8_t) -> uint8x8_t: 1..=8,
    vshrn_n_u32(uint32x4_t) -> uint16x4_t: 1..=16,
    vshrn_n_u64(uint64x2_t) -> uint32x2_t: 1..=32,
);

shift_imm!(rshr_imm =>
    vrshrn_n_s16(int16x8_t) -> int8x8_t: 1..=8,
    vrshrn_n_s32(int32x4_t) -> int16x4_t: 1..=16,
    vrshrn_n_s64(int64x2_t) -> int32x2_t: 1..=32,
    vrshrn_n_u16(uint16x8_t) -> uint8x8_t: 1..=8,
    vrshrn_n_u32(uint32x4_t) -> uint16x4_t: 1..=16,
    vrshrn_n_u64(uint64x2_t) -> uint32x2_t: 1..=32,
);

shift_imm!(qshr_imm =>
    vqshrn_n_s16(int16x8_t) -> int8x8_t: 1..=8,
    vqshrn_n_s32(int32x4_t) -> int16x4_t: 1..=16,
    vqshrn_n_s64(int64x2_t) -> int32x2_t: 1..=32,
    vqshrn_n_u16(uint16x8_t) -> uint8x8_t: 1..=8,
    vqshrn_n_u32(uint32x4_t) -> uint16x4_t: 1..=16,
    vqshrn_n_u64(uint64x2_t) -> uint32x2_t: 1..=32,
    vqshrun_n_s16(int16x8_t) -> uint8x8_t: 1..=8,
    vqshrun_n_s32(int32x4_t) -> uint16x4_t: 1..=16,
    vqshrun_n_s64(int64x2_t) -> uint32x2_t: 1..=32,
);

shift_imm!(qrshr_imm =>
    vqrshrn_n_s16(int16x8_t) -> int8x8_t: 1..=8,
    vqrshrn_n_s32(int32x4_t) -> int16x4_t: 1..=16,
    vqrshrn_n_s64(int64x2_t) -> int32x2_t: 1..=32,
    vqrshrn_n_u16(uint16x8_t) -> uint8x8_t: 1..=8,
    vqrshrn_n_u32(uint32x4_t) -> uint16x4_t: 1..=16,
    vqrshrn_n_u64(uint64x2_t) -> uint32x2_t: 1..=32,
    vqrshrun_n_s16(int16x8_t) -> uint8x8_t: 1..=8,
    vqrshrun_n_s32(int32x4_t) -> uint16x4_t: 1..=16,
    vqrshrun_n_s64(int64x2_t) -> uint32x2_t: 1..=32,
);

shift_imm!(qshl_imm =>
    vqshl_n_s8(int8x8_t) -> int8x8_t: 0..=7,
    vqshlq_n_s8(int8x16_t) -> int8x16_t: 0..=7,
    vqshl_n_s16(int16x4_t) -> int16x4_t: 0..=15,
    vqshlq_n_s16(int16x8_t) -> int16x8_t: 0..=15,
    vqshl_n_s32(int32x2_t) -> int32x2_t: 0..=31,
    vqshlq_n_s32(int32x4_t) -> int32x4_t: 0..=31,
    vqshl_n_s64(int64x1_t) -> int64x1_t: 0..=63,
    vqshlq_n_s64(int64x2_t) -> int64x2_t: 0..=63,
    vqshl_n_u8(uint8x8_t) -> uint8x8_t: 0..=7,
    vqshlq_n_u8(uint8x16_t) -> uint8x16_t: 0..=7,
    vqshl_n_u16(uint16x4_t) -> uint16x4_t: 0..=15,
    vqshlq_n_u16(uint16x8_t) -> uint16x8_t: 0..=15,
    vqshl_n_u32(uint32x2_t) -> uint32x2_t: 0..=31,
    vqshlq_n_u32(uint32x4_t) -> uint32x4_t: 0..=31,
    vqshl_n_u64(uint64x1_t) -> uint64x1_t: 0..=63,
    vqshlq_n_u64(uint64x2_t) -> uint64x2_t: 0..=63,
    vqshlu_n_s8(int8x8_t) -> uint8x8_t: 0..=7,
    vqshluq_n_s8(int8x16_t) -> uint8x16_t: 0..=7,
    vqshlu_n_s16(int16x4_t) -> uint16x4_t: 0..=15,
    vqshluq_n_s16(int16x8_t) -> uint16x8_t: 0..=15,
    vqshlu_n_s32(int32x2_t) -> uint32x2_t: 0..=31,
    vqshluq_n_s32(int32x4_t) -> uint32x4_t: 0..=31,
    vqshlu_n_s64(int64x1_t) -> uint64x1_t: 0..=63,
    vqshluq_n_s64(int64x2_t) -> uint64x2_t: 0..=63,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_shift_uses_signed_low_byte() {
        let a = int16x4_t([-256, 3, 1, -1]);
        // 0x0101 has low byte 1; 0x00ff is -1; 0x0010 shifts everything out
        let shift = int16x4_t([0x0101, 0x00ff, 0x0010, -40]);
        assert_eq!(vshl_s16(a, shift), int16x4_t([-512, 1, 0, -1]));

        let u = uint32x2_t([0x8000_0001, 7]);
        assert_eq!(vshl_u32(u, int32x2_t([-31, -3])), uint32x2_t([1, 0]));
    }

    #[test]
    fn test_rounding_and_saturating_narrow() {
        let a = int16x8_t([5, -5, 6, -6, 32767, -32768, 1000, -1000]);
        assert_eq!(
            vrshrn_n_s16::<2>(a),
            int8x8_t([1, -1, 2, -1, 0, 0, -6, 6])
        );
        assert_eq!(
            vqshrn_n_s16::<2>(a),
            int8x8_t([1, -2, 1, -2, 127, -128, 127, -128])
        );
    }

    #[test]
    fn test_saturating_narrow_to_unsigned_and_rounding() {
        let a = int16x8_t([5, -5, 6, -6, 32767, -32768, 1022, 1021]);
        assert_eq!(
            vqshrun_n_s16::<2>(a),
            uint8x8_t([1, 0, 1, 0, 255, 0, 255, 255])
        );
        assert_eq!(
            vqrshrn_n_s16::<2>(a),
            int8x8_t([1, -1, 2, -1, 127, -128, 127, 127])
        );
        let b = int16x8_t([6, -6, 10, 1020, 1021, 1022, -1, 3]);
        assert_eq!(
            vqrshrun_n_s16::<2>(b),
            uint8x8_t([2, 0, 3, 255, 255, 255, 0, 1])
        );
        assert_eq!(vqrshrn_n_u64::<1>(uint64x2_t([u64::MAX, 3])), uint32x2_t([u32::MAX, 2]));
    }

    #[test]
    fn test_saturating_shift_left_immediate() {
        let a = int8x8_t([1, -1, 63, 64, -64, -65, 0, 127]);
        assert_eq!(vqshl_n_s8::<1>(a), int8x8_t([2, -2, 126, 127, -128, -128, 0, 127]));
        assert_eq!(vqshl_n_s8::<0>(a), a);
        assert_eq!(vqshlu_n_s8::<1>(a), uint8x8_t([2, 0, 126, 128, 0, 0, 0, 254]));
        assert_eq!(vqshlu_n_s8::<2>(a), uint8x8_t([4, 0, 252, 255, 0, 0, 0, 255]));
        assert_eq!(vqshl_n_u64::<63>(uint64x1_t([1])), uint64x1_t([1 << 63]));
        assert_eq!(vqshl_n_u64::<63>(uint64x1_t([2])), uint64x1_t([u64::MAX]));
        assert_eq!(vqshlq_n_s64::<63>(int64x2_t([-1, 1])), int64x2_t([i64::MIN, i64::MAX]));
    }

    #[test]
    fn test_insert_keeps_the_other_bits() {
        let a = uint8x8_t([0xff; 8]);
        let b = uint8x8_t([0x0f; 8]);
        assert_eq!(vsli_n_u8::<4>(a, b), uint8x8_t([0xff; 8]));
        assert_eq!(vsri_n_u8::<4>(a, b), uint8x8_t([0xf0; 8]));
        assert_eq!(vsri_n_u8::<8>(a, b), a);
        assert_eq!(vsli_n_u8::<0>(a, b), b);
    }

    #[test]
    fn test_full_width_right_shift() {
        let a = int64x1_t([i64::MIN]);
        assert_eq!(vshr_n_s64::<64>(a), int64x1_t([-1]));
        assert_eq!(vshr_n_u64::<64>(uint64x1_t([u64::MAX])), uint64x1_t([0]));
        assert_eq!(vrshr_n_u64::<64>(uint64x1_t([u64::MAX])), uint64x1_t([1]));
    }
}
