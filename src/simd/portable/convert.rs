//! Conversions: float/integer (plain and fixed point), narrowing and
//! widening moves, and bit-preserving reinterpretation.

use std::mem::size_of;

use super::kernel::*;
use super::types::*;

fn reinterpret<A: Vector, R: Vector>(a: A) -> R
where
    A::Elem: Bits,
    R::Elem: Bits,
{
    let (from, to) = (size_of::<A::Elem>(), size_of::<R::Elem>());
    let mut bytes = [0u8; 16];
    for i in 0..A::LANES {
        bytes[i * from..(i + 1) * from].copy_from_slice(&a.lane(i).to_raw().to_le_bytes()[..from]);
    }
    R::from_fn(|i| {
        let mut raw = [0u8; 8];
        raw[..to].copy_from_slice(&bytes[i * to..(i + 1) * to]);
        <R::Elem as Bits>::from_raw(u64::from_le_bytes(raw))
    })
}

// Float to integer conversions round toward zero and saturate; NaN gives 0.
unary!(|x| x as i32 =>
    vcvt_s32_f32(float32x2_t) -> int32x2_t,
    vcvtq_s32_f32(float32x4_t) -> int32x4_t,
);

unary!(|x| x as u32 =>
    vcvt_u32_f32(float32x2_t) -> uint32x2_t,
    vcvtq_u32_f32(float32x4_t) -> uint32x4_t,
);

unary!(|x| x as f32 =>
    vcvt_f32_s32(int32x2_t) -> float32x2_t,
    vcvtq_f32_s32(int32x4_t) -> float32x4_t,
    vcvt_f32_u32(uint32x2_t) -> float32x2_t,
    vcvtq_f32_u32(uint32x4_t) -> float32x4_t,
);

macro_rules! fixed_point {
    ($f:expr => $($name:ident($a:ident) -> $r:ident: $lo:literal..=$hi:literal),+ $(,)?) => {$(
        #[inline]
        pub fn $name<const N: i32>(a: $a) -> $r {
            debug_assert!(($lo..=$hi).contains(&N), "fraction bits out of range");
            let scale = (1u64 << N) as f32;
            map(a, |x| $f(x, scale))
        }
    )+};
}

fixed_point!(|x: f32, scale: f32| (x * scale) as i32 =>
    vcvt_n_s32_f32(float32x2_t) -> int32x2_t: 1..=32,
    vcvtq_n_s32_f32(float32x4_t) -> int32x4_t: 1..=32,
);

fixed_point!(|x: f32, scale: f32| (x * scale) as u32 =>
    vcvt_n_u32_f32(float32x2_t) -> uint32x2_t: 1..=32,
    vcvtq_n_u32_f32(float32x4_t) -> uint32x4_t: 1..=32,
);

fixed_point!(|x: i32, scale: f32| x as f32 / scale =>
    vcvt_n_f32_s32(int32x2_t) -> float32x2_t: 1..=32,
    vcvtq_n_f32_s32(int32x4_t) -> float32x4_t: 1..=32,
);

fixed_point!(|x: u32, scale: f32| x as f32 / scale =>
    vcvt_n_f32_u32(uint32x2_t) -> float32x2_t: 1..=32,
    vcvtq_n_f32_u32(uint32x4_t) -> float32x4_t: 1..=32,
);

unary!(|x| Element::wrap(x.widen()) =>
    vmovn_s16(int16x8_t) -> int8x8_t,
    vmovn_s32(int32x4_t) -> int16x4_t,
    vmovn_s64(int64x2_t) -> int32x2_t,
    vmovn_u16(uint16x8_t) -> uint8x8_t,
    vmovn_u32(uint32x4_t) -> uint16x4_t,
    vmovn_u64(uint64x2_t) -> uint32x2_t,
);

unary!(|x| Element::saturate(x.widen()) =>
    vqmovn_s16(int16x8_t) -> int8x8_t,
    vqmovn_s32(int32x4_t) -> int16x4_t,
    vqmovn_s64(int64x2_t) -> int32x2_t,
    vqmovn_u16(uint16x8_t) -> uint8x8_t,
    vqmovn_u32(uint32x4_t) -> uint16x4_t,
    vqmovn_u64(uint64x2_t) -> uint32x2_t,
);

unary!(|x| Element::saturate(x.widen()) =>
    vqmovun_s16(int16x8_t) -> uint8x8_t,
    vqmovun_s32(int32x4_t) -> uint16x4_t,
    vqmovun_s64(int64x2_t) -> uint32x2_t,
);

unary!(|x| Element::wrap(x.widen()) =>
    vmovl_s8(int8x8_t) -> int16x8_t,
    vmovl_s16(int16x4_t) -> int32x4_t,
    vmovl_s32(int32x2_t) -> int64x2_t,
    vmovl_u8(uint8x8_t) -> uint16x8_t,
    vmovl_u16(uint16x4_t) -> uint32x4_t,
    vmovl_u32(uint32x2_t) -> uint64x2_t,
);

macro_rules! reinterpret {
    ($($name:ident($a:ident) -> $r:ident),+ $(,)?) => {$(
        #[inline]
        pub fn $name(a: $a) -> $r {
            reinterpret(a)
        }
    )+};
}

reinterpret! {
    vreinterpret_s8_s16(int16x4_t) -> int8x8_t,
    vreinterpret_s8_s32(int32x2_t) -> int8x8_t,
    vreinterpret_s8_s64(int64x1_t) -> int8x8_t,
    vreinterpret_s8_u8(uint8x8_t) -> int8x8_t,
    vreinterpret_s8_u16(uint16x4_t) -> int8x8_t,
    vreinterpret_s8_u32(uint32x2_t) -> int8x8_t,
    vreinterpret_s8_u64(uint64x1_t) -> int8x8_t,
    vreinterpret_s8_f32(float32x2_t) -> int8x8_t,
    vreinterpret_s16_s8(int8x8_t) -> int16x4_t,
    vreinterpret_s16_s32(int32x2_t) -> int16x4_t,
    vreinterpret_s16_s64(int64x1_t) -> int16x4_t,
    vreinterpret_s16_u8(uint8x8_t) -> int16x4_t,
    vreinterpret_s16_u16(uint16x4_t) -> int16x4_t,
    vreinterpret_s16_u32(uint32x2_t) -> int16x4_t,
    vreinterpret_s16_u64(uint64x1_t) -> int16x4_t,
    vreinterpret_s16_f32(float32x2_t) -> int16x4_t,
    vreinterpret_s32_s8(int8x8_t) -> int32x2_t,
    vreinterpret_s32_s16(int16x4_t) -> int32x2_t,
    vreinterpret_s32_s64(int64x1_t) -> int32x2_t,
    vreinterpret_s32_u8(uint8x8_t) -> int32x2_t,
    vreinterpret_s32_u16(uint16x4_t) -> int32x2_t,
    vreinterpret_s32_u32(uint32x2_t) -> int32x2_t,
    vreinterpret_s32_u64(uint64x1_t) -> int32x2_t,
    vreinterpret_s32_f32(float32x2_t) -> int32x2_t,
    vreinterpret_s64_s8(int8x8_t) -> int64x1_t,
    vreinterpret_s64_s16(int16x4_t) -> int64x1_t,
    vreinterpret_s64_s32(int32x2_t) -> int64x1_t,
    vreinterpret_s64_u8(uint8x8_t) -> int64x1_t,
    vreinterpret_s64_u16(uint16x4_t) -> int64x1_t,
    vreinterpret_s64_u32(uint32x2_t) -> int64x1_t,
    vreinterpret_s64_u64(uint64x1_t) -> int64x1_t,
    vreinterpret_s64_f32(float32x2_t) -> int64x1_t,
    vreinterpret_u8_s8(int8x8_t) -> uint8x8_t,
    vreinterpret_u8_s16(int16x4_t) -> uint8x8_t,
    vreinterpret_u8_s32(int32x2_t) -> uint8x8_t,
    vreinterpret_u8_s64(int64x1_t) -> uint8x8_t,
    vreinterpret_u8_u16(uint16x4_t) -> uint8x8_t,
    vreinterpret_u8_u32(uint32x2_t) -> uint8x8_t,
    vreinterpret_u8_u64(uint64x1_t) -> uint8x8_t,
    vreinterpret_u8_f32(float32x2_t) -> uint8x8_t,
    vreinterpret_u16_s8(int8x8_t) -> uint16x4_t,
    vreinterpret_u16_s16(int16x4_t) -> uint16x4_t,
    vreinterpret_u16_s32(int32x2_t) -> uint16x4_t,
    vreinterpret_u16_s64(int64x1_t) -> uint16x4_t,
    vreinterpret_u16_u8(uint8x8_t) -> uint16x4_t,
    vreinterpret_u16_u32(uint32x2_t) -> uint16x4_t,
    vreinterpret_u16_u64(uint64x1_t) -> uint16x4_t,
    vreinterpret_u16_f32(float32x2_t) -> uint16x4_t,
    vreinterpret_u32_s8(int8x8_t) -> uint32x2_t,
    vreinterpret_u32_s16(int16x4_t) -> uint32x2_t,
    vreinterpret_u32_s32(int32x2_t) -> uint32x2_t,
    vreinterpret_u32_s64(int64x1_t) -> uint32x2_t,
    vreinterpret_u32_u8(uint8x8_t) -> uint32x2_t,
    vreinterpret_u32_u16(uint16x4_t) -> uint32x2_t,
    vreinterpret_u32_u64(uint64x1_t) -> uint32x2_t,
    vreinterpret_u32_f32(float32x2_t) -> uint32x2_t,
    vreinterpret_u64_s8(int8x8_t) -> uint64x1_t,
    vreinterpret_u64_s16(int16x4_t) -> uint64x1_t,
    vreinterpret_u64_s32(int32x2_t) -> uint64x1_t,
    vreinterpret_u64_s64(int64x1_t) -> uint64x1_t,
    vreinterpret_u64_u8(uint8x8_t) -> uint64x1_t,
    vreinterpret_u64_u16(uint16x4_t) -> uint64x1_t,
    vreinterpret_u64_u32(uint32x2_t) -> uint64x1_t,
    vreinterpret_u64_f32(float32x2_t) -> uint64x1_t,
    vreinterpret_f32_s8(int8x8_t) -> float32x2_t,
    vreinterpret_f32_s16(int16x4_t) -> float32x2_t,
    vreinterpret_f32_s32(int32x2_t) -> float32x2_t,
    vreinterpret_f32_s64(int64x1_t) -> float32x2_t,
    vreinterpret_f32_u8(uint8x8_t) -> float32x2_t,
    vreinterpret_f32_u16(uint16x4_t) -> float32x2_t,
    vreinterpret_f32_u32(uint32x2_t) -> float32x2_t,
    vreinterpret_f32_u64(uint64x1_t) -> float32x2_t,
    vreinterpretq_s8_s16(int16x8_t) -> int8x16_t,
    vreinterpretq_s8_s32(int32x4_t) -> int8x16_t,
    vreinterpretq_s8_s64(int64x2_t) -> int8x16_t,
    vreinterpretq_s8_u8(uint8x16_t) -> int8x16_t,
    vreinterpretq_s8_u16(uint16x8_t) -> int8x16_t,
    vreinterpretq_s8_u32(uint32x4_t) -> int8x16_t,
    vreinterpretq_s8_u64(uint64x2_t) -> int8x16_t,
    vreinterpretq_s8_f32(float32x4_t) -> int8x16_t,
    vreinterpretq_s16_s8(int8x16_t) -> int16x8_t,
    vreinterpretq_s16_s32(int32x4_t) -> int16x8_t,
    vreinterpretq_s16_s64(int64x2_t) -> int16x8_t,
    vreinterpretq_s16_u8(uint8x16_t) -> int16x8_t,
    vreinterpretq_s16_u16(uint16x8_t) -> int16x8_t,
    vreinterpretq_s16_u32(uint32x4_t) -> int16x8_t,
    vreinterpretq_s16_u64(uint64x2_t) -> int16x8_t,
    vreinterpretq_s16_f32(float32x4_t) -> int16x8_t,
    vreinterpretq_s32_s8(int8x16_t) -> int32x4_t,
    vreinterpretq_s32_s16(int16x8_t) -> int32x4_t,
    vreinterpretq_s32_s64(int64x2_t) -> int32x4_t,
    vreinterpretq_s32_u8(uint8x16_t) -> int32x4_t,
    vreinterpretq_s32_u16(uint16x8_t) -> int32x4_t,
    vreinterpretq_s32_u32(uint32x4_t) -> int32x4_t,
    vreinterpretq_s32_u64(uint64x2_t) -> int32x4_t,
    vreinterpretq_s32_f32(float32x4_t) -> int32x4_t,
    vreinterpretq_s64_s8(int8x16_t) -> int64x2_t,
    vreinterpretq_s64_s16(int16x8_t) -> int64x2_t,
    vreinterpretq_s64_s32(int32x4_t) -> int64x2_t,
    vreinterpretq_s64_u8(uint8x16_t) -> int64x2_t,
    vreinterpretq_s64_u16(uint16x8_t) -> int64x2_t,
    vreinterpretq_s64_u32(uint32x4_t) -> int64x2_t,
    vreinterpretq_s64_u64(uint64x2_t) -> int64x2_t,
    vreinterpretq_s64_f32(float32x4_t) -> int64x2_t,
    vreinterpretq_u8_s8(int8x16_t) -> uint8x16_t,
    vreinterpretq_u8_s16(int16x8_t) -> uint8x16_t,
    vreinterpretq_u8_s32(int32x4_t) -> uint8x16_t,
    vreinterpretq_u8_s64(int64x2_t) -> uint8x16_t,
    vreinterpretq_u8_u16(uint16x8_t) -> uint8x16_t,
    vreinterpretq_u8_u32(uint32x4_t) -> uint8x16_t,
    vreinterpretq_u8_u64(uint64x2_t) -> uint8x16_t,
    vreinterpretq_u8_f32(float32x4_t) -> uint8x16_t,
    vreinterpretq_u16_s8(int8x16_t) -> uint16x8_t,
    vreinterpretq_u16_s16(int16x8_t) -> uint16x8_t,
    vreinterpretq_u16_s32(int32x4_t) -> uint16x8_t,
    vreinterpretq_u16_s64(int64x2_t) -> uint16x8_t,
    vreinterpretq_u16_u8(uint8x16_t) -> uint16x8_t,
    vreinterpretq_u16_u32(uint32x4_t) -> uint16x8_t,
    vreinterpretq_u16_u64(uint64x2_t) -> uint16x8_t,
    vreinterpretq_u16_f32(float32x4_t) -> uint16x8_t,
    vreinterpretq_u32_s8(int8x16_t) -> uint32x4_t,
    vreinterpretq_u32_s16(int16x8_t) -> uint32x4_t,
    vreinterpretq_u32_s32(int32x4_t) -> uint32x4_t,
    vreinterpretq_u32_s64(int64x2_t) -> uint32x4_t,
    vreinterpretq_u32_u8(uint8x16_t) -> uint32x4_t,
    vreinterpretq_u32_u16(uint16x8_t) -> uint32x4_t,
    vreinterpretq_u32_u64(uint64x2_t) -> uint32x4_t,
    vreinterpretq_u32_f32(float32x4_t) -> uint32x4_t,
    vreinterpretq_u64_s8(int8x16_t) -> uint64x2_t,
    vreinterpretq_u64_s16(int16x8_t) -> uint64x2_t,
    vreinterpretq_u64_s32(int32x4_t) -> uint64x2_t,
    vreinterpretq_u64_s64(int64x2_t) -> uint64x2_t,
    vreinterpretq_u64_u8(uint8x16_t) -> uint64x2_t,
    vreinterpretq_u64_u16(uint16x8_t) -> uint64x2_t,
    vreinterpretq_u64_u32(uint32x4_t) -> uint64x2_t,
    vreinterpretq_u64_f32(float32x4_t) -> uint64x2_t,
    vreinterpretq_f32_s8(int8x16_t) -> float32x4_t,
    vreinterpretq_f32_s16(int16x8_t) -> float32x4_t,
    vreinterpretq_f32_s32(int32x4_t) -> float32x4_t,
    vreinterpretq_f32_s64(int64x2_t) -> float32x4_t,
    vreinterpretq_f32_u8(uint8x16_t) -> float32x4_t,
    vreinterpretq_f32_u16(uint16x8_t) -> float32x4_t,
    vreinterpretq_f32_u32(uint32x4_t) -> float32x4_t,
    vreinterpretq_f32_u64(uint64x2_t) -> float32x4_t,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_to_int_truncates_and_saturates() {
        let a = float32x4_t([-1.9, 2.9, f32::NAN, 3e9]);
        assert_eq!(vcvtq_s32_f32(a), int32x4_t([-1, 2, 0, i32::MAX]));
        assert_eq!(vcvtq_u32_f32(a), uint32x4_t([0, 2, 0, 3_000_000_000]));
    }

    #[test]
    fn test_fixed_point() {
        let a = float32x2_t([1.25, -0.75]);
        assert_eq!(vcvt_n_s32_f32::<2>(a), int32x2_t([5, -3]));
        assert_eq!(vcvt_n_f32_s32::<4>(int32x2_t([24, -8])), float32x2_t([1.5, -0.5]));
        assert_eq!(vcvt_n_u32_f32::<32>(float32x2_t([0.5, 2.0])), uint32x2_t([1 << 31, u32::MAX]));
    }

    #[test]
    fn test_narrow_and_widen() {
        let a = int32x4_t([70_000, -70_000, 5, -1]);
        assert_eq!(vmovn_s32(a), int16x4_t([4464, -4464, 5, -1]));
        assert_eq!(vqmovn_s32(a), int16x4_t([32767, -32768, 5, -1]));
        assert_eq!(vqmovun_s32(a), uint16x4_t([65535, 0, 5, 0]));
        assert_eq!(vmovl_u8(uint8x8_t([255, 0, 1, 2, 3, 4, 5, 6])).lane(0), 255u16);
    }

    #[test]
    fn test_reinterpret_is_little_endian_bytes() {
        let a = uint32x2_t([0x0403_0201, 0x0807_0605]);
        assert_eq!(vreinterpret_u8_u32(a), uint8x8_t([1, 2, 3, 4, 5, 6, 7, 8]));
        assert_eq!(vreinterpret_u16_u32(a), uint16x4_t([0x0201, 0x0403, 0x0605, 0x0807]));
        assert_eq!(vreinterpret_u32_u8(vreinterpret_u8_u32(a)), a);
    }
}
