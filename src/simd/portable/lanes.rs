//! Loads, stores and lane movement: single-lane access, broadcast,
//! combine/split, extract, reverse, transpose, zip and unzip.

use super::kernel::*;
use super::types::*;

macro_rules! load_store {
    ($($load:ident, $store:ident: $ty:ident, $elem:ty;)*) => {$(
        /// # Safety
        ///
        /// `ptr` must be valid for reads of one register.
        #[inline]
        pub unsafe fn $load(ptr: *const $elem) -> $ty {
            load(ptr)
        }

        /// # Safety
        ///
        /// `ptr` must be valid for writes of one register.
        #[inline]
        pub unsafe fn $store(ptr: *mut $elem, a: $ty) {
            store(ptr, a)
        }
    )*};
}

load_store! {
    vld1_s8, vst1_s8: int8x8_t, i8;
    vld1q_s8, vst1q_s8: int8x16_t, i8;
    vld1_s16, vst1_s16: int16x4_t, i16;
    vld1q_s16, vst1q_s16: int16x8_t, i16;
    vld1_s32, vst1_s32: int32x2_t, i32;
    vld1q_s32, vst1q_s32: int32x4_t, i32;
    vld1_s64, vst1_s64: int64x1_t, i64;
    vld1q_s64, vst1q_s64: int64x2_t, i64;
    vld1_u8, vst1_u8: uint8x8_t, u8;
    vld1q_u8, vst1q_u8: uint8x16_t, u8;
    vld1_u16, vst1_u16: uint16x4_t, u16;
    vld1q_u16, vst1q_u16: uint16x8_t, u16;
    vld1_u32, vst1_u32: uint32x2_t, u32;
    vld1q_u32, vst1q_u32: uint32x4_t, u32;
    vld1_u64, vst1_u64: uint64x1_t, u64;
    vld1q_u64, vst1q_u64: uint64x2_t, u64;
    vld1_f32, vst1_f32: float32x2_t, f32;
    vld1q_f32, vst1q_f32: float32x4_t, f32;
}

macro_rules! lane_load_store {
    ($($load:ident, $store:ident, $dup:ident: $ty:ident, $elem:ty;)*) => {$(
        /// # Safety
        ///
        /// `ptr` must be valid for reading one lane.
        #[inline]
        pub unsafe fn $load<const LANE: i32>(ptr: *const $elem, src: $ty) -> $ty {
            debug_assert!((LANE as usize) < <$ty as Vector>::LANES, "lane out of range");
            let value = ptr.read_unaligned();
            <$ty as Vector>::from_fn(|i| if i == LANE as usize { value } else { src.lane(i) })
        }

        /// # Safety
        ///
        /// `ptr` must be valid for writing one lane.
        #[inline]
        pub unsafe fn $store<const LANE: i32>(ptr: *mut $elem, a: $ty) {
            debug_assert!((LANE as usize) < <$ty as Vector>::LANES, "lane out of range");
            ptr.write_unaligned(a.lane(LANE as usize))
        }

        /// # Safety
        ///
        /// `ptr` must be valid for reading one lane.
        #[inline]
        pub unsafe fn $dup(ptr: *const $elem) -> $ty {
            let value = ptr.read_unaligned();
            <$ty as Vector>::from_fn(|_| value)
        }
    )*};
}

lane_load_store! {
    vld1_lane_s8, vst1_lane_s8, vld1_dup_s8: int8x8_t, i8;
    vld1q_lane_s8, vst1q_lane_s8, vld1q_dup_s8: int8x16_t, i8;
    vld1_lane_s16, vst1_lane_s16, vld1_dup_s16: int16x4_t, i16;
    vld1q_lane_s16, vst1q_lane_s16, vld1q_dup_s16: int16x8_t, i16;
    vld1_lane_s32, vst1_lane_s32, vld1_dup_s32: int32x2_t, i32;
    vld1q_lane_s32, vst1q_lane_s32, vld1q_dup_s32: int32x4_t, i32;
    vld1_lane_s64, vst1_lane_s64, vld1_dup_s64: int64x1_t, i64;
    vld1q_lane_s64, vst1q_lane_s64, vld1q_dup_s64: int64x2_t, i64;
    vld1_lane_u8, vst1_lane_u8, vld1_dup_u8: uint8x8_t, u8;
    vld1q_lane_u8, vst1q_lane_u8, vld1q_dup_u8: uint8x16_t, u8;
    vld1_lane_u16, vst1_lane_u16, vld1_dup_u16: uint16x4_t, u16;
    vld1q_lane_u16, vst1q_lane_u16, vld1q_dup_u16: uint16x8_t, u16;
    vld1_lane_u32, vst1_lane_u32, vld1_dup_u32: uint32x2_t, u32;
    vld1q_lane_u32, vst1q_lane_u32, vld1q_dup_u32: uint32x4_t, u32;
    vld1_lane_u64, vst1_lane_u64, vld1_dup_u64: uint64x1_t, u64;
    vld1q_lane_u64, vst1q_lane_u64, vld1q_dup_u64: uint64x2_t, u64;
    vld1_lane_f32, vst1_lane_f32, vld1_dup_f32: float32x2_t, f32;
    vld1q_lane_f32, vst1q_lane_f32, vld1q_dup_f32: float32x4_t, f32;
}

macro_rules! lane_get_set {
    ($($get:ident, $set:ident: $ty:ident, $elem:ty;)*) => {$(
        #[inline]
        pub fn $get<const LANE: i32>(v: $ty) -> $elem {
            debug_assert!((LANE as usize) < <$ty as Vector>::LANES, "lane out of range");
            v.lane(LANE as usize)
        }

        #[inline]
        pub fn $set<const LANE: i32>(a: $elem, v: $ty) -> $ty {
            debug_assert!((LANE as usize) < <$ty as Vector>::LANES, "lane out of range");
            <$ty as Vector>::from_fn(|i| if i == LANE as usize { a } else { v.lane(i) })
        }
    )*};
}

lane_get_set! {
    vget_lane_s8, vset_lane_s8: int8x8_t, i8;
    vgetq_lane_s8, vsetq_lane_s8: int8x16_t, i8;
    vget_lane_s16, vset_lane_s16: int16x4_t, i16;
    vgetq_lane_s16, vsetq_lane_s16: int16x8_t, i16;
    vget_lane_s32, vset_lane_s32: int32x2_t, i32;
    vgetq_lane_s32, vsetq_lane_s32: int32x4_t, i32;
    vget_lane_s64, vset_lane_s64: int64x1_t, i64;
    vgetq_lane_s64, vsetq_lane_s64: int64x2_t, i64;
    vget_lane_u8, vset_lane_u8: uint8x8_t, u8;
    vgetq_lane_u8, vsetq_lane_u8: uint8x16_t, u8;
    vget_lane_u16, vset_lane_u16: uint16x4_t, u16;
    vgetq_lane_u16, vsetq_lane_u16: uint16x8_t, u16;
    vget_lane_u32, vset_lane_u32: uint32x2_t, u32;
    vgetq_lane_u32, vsetq_lane_u32: uint32x4_t, u32;
    vget_lane_u64, vset_lane_u64: uint64x1_t, u64;
    vgetq_lane_u64, vsetq_lane_u64: uint64x2_t, u64;
    vget_lane_f32, vset_lane_f32: float32x2_t, f32;
    vgetq_lane_f32, vsetq_lane_f32: float32x4_t, f32;
}

macro_rules! broadcast {
    ($($dup:ident, $mov:ident: $ty:ident, $elem:ty;)*) => {$(
        #[inline]
        pub fn $dup(value: $elem) -> $ty {
            <$ty as Vector>::from_fn(|_| value)
        }

        #[inline]
        pub fn $mov(value: $elem) -> $ty {
            $dup(value)
        }
    )*};
}

broadcast! {
    vdup_n_s8, vmov_n_s8: int8x8_t, i8;
    vdupq_n_s8, vmovq_n_s8: int8x16_t, i8;
    vdup_n_s16, vmov_n_s16: int16x4_t, i16;
    vdupq_n_s16, vmovq_n_s16: int16x8_t, i16;
    vdup_n_s32, vmov_n_s32: int32x2_t, i32;
    vdupq_n_s32, vmovq_n_s32: int32x4_t, i32;
    vdup_n_s64, vmov_n_s64: int64x1_t, i64;
    vdupq_n_s64, vmovq_n_s64: int64x2_t, i64;
    vdup_n_u8, vmov_n_u8: uint8x8_t, u8;
    vdupq_n_u8, vmovq_n_u8: uint8x16_t, u8;
    vdup_n_u16, vmov_n_u16: uint16x4_t, u16;
    vdupq_n_u16, vmovq_n_u16: uint16x8_t, u16;
    vdup_n_u32, vmov_n_u32: uint32x2_t, u32;
    vdupq_n_u32, vmovq_n_u32: uint32x4_t, u32;
    vdup_n_u64, vmov_n_u64: uint64x1_t, u64;
    vdupq_n_u64, vmovq_n_u64: uint64x2_t, u64;
    vdup_n_f32, vmov_n_f32: float32x2_t, f32;
    vdupq_n_f32, vmovq_n_f32: float32x4_t, f32;
}

// Lanes of a 64-bit value, lowest lane from the lowest bits.
macro_rules! create {
    ($($name:ident: $ty:ident, $elem:ty;)*) => {$(
        #[inline]
        pub fn $name(a: u64) -> $ty {
            let bits = 64 / <$ty as Vector>::LANES;
            <$ty as Vector>::from_fn(|i| <$elem as Bits>::from_raw(a >> (i * bits) as u32))
        }
    )*};
}

create! {
    vcreate_s8: int8x8_t, i8;
    vcreate_s16: int16x4_t, i16;
    vcreate_s32: int32x2_t, i32;
    vcreate_s64: int64x1_t, i64;
    vcreate_u8: uint8x8_t, u8;
    vcreate_u16: uint16x4_t, u16;
    vcreate_u32: uint32x2_t, u32;
    vcreate_u64: uint64x1_t, u64;
    vcreate_f32: float32x2_t, f32;
}

macro_rules! dup_lane {
    ($($name:ident($a:ident) -> $r:ident),+ $(,)?) => {$(
        #[inline]
        pub fn $name<const LANE: i32>(a: $a) -> $r {
            debug_assert!((LANE as usize) < <$a as Vector>::LANES, "lane out of range");
            let value = a.lane(LANE as usize);
            <$r as Vector>::from_fn(|_| value)
        }
    )+};
}

dup_lane! {
    vdup_lane_s8(int8x8_t) -> int8x8_t,
    vdupq_lane_s8(int8x8_t) -> int8x16_t,
    vdup_lane_s16(int16x4_t) -> int16x4_t,
    vdupq_lane_s16(int16x4_t) -> int16x8_t,
    vdup_lane_s32(int32x2_t) -> int32x2_t,
    vdupq_lane_s32(int32x2_t) -> int32x4_t,
    vdup_lane_s64(int64x1_t) -> int64x1_t,
    vdupq_lane_s64(int64x1_t) -> int64x2_t,
    vdup_lane_u8(uint8x8_t) -> uint8x8_t,
    vdupq_lane_u8(uint8x8_t) -> uint8x16_t,
    vdup_lane_u16(uint16x4_t) -> uint16x4_t,
    vdupq_lane_u16(uint16x4_t) -> uint16x8_t,
    vdup_lane_u32(uint32x2_t) -> uint32x2_t,
    vdupq_lane_u32(uint32x2_t) -> uint32x4_t,
    vdup_lane_u64(uint64x1_t) -> uint64x1_t,
    vdupq_lane_u64(uint64x1_t) -> uint64x2_t,
    vdup_lane_f32(float32x2_t) -> float32x2_t,
    vdupq_lane_f32(float32x2_t) -> float32x4_t,
}

macro_rules! combine_split {
    ($($combine:ident, $high:ident, $low:ident: $half:ident, $full:ident;)*) => {$(
        #[inline]
        pub fn $combine(low: $half, high: $half) -> $full {
            <$full as Vector>::from_fn(|i| joined(low, high, i))
        }

        #[inline]
        pub fn $high(a: $full) -> $half {
            <$half as Vector>::from_fn(|i| a.lane(i + <$half as Vector>::LANES))
        }

        #[inline]
        pub fn $low(a: $full) -> $half {
            <$half as Vector>::from_fn(|i| a.lane(i))
        }
    )*};
}

combine_split! {
    vcombine_s8, vget_high_s8, vget_low_s8: int8x8_t, int8x16_t;
    vcombine_s16, vget_high_s16, vget_low_s16: int16x4_t, int16x8_t;
    vcombine_s32, vget_high_s32, vget_low_s32: int32x2_t, int32x4_t;
    vcombine_s64, vget_high_s64, vget_low_s64: int64x1_t, int64x2_t;
    vcombine_u8, vget_high_u8, vget_low_u8: uint8x8_t, uint8x16_t;
    vcombine_u16, vget_high_u16, vget_low_u16: uint16x4_t, uint16x8_t;
    vcombine_u32, vget_high_u32, vget_low_u32: uint32x2_t, uint32x4_t;
    vcombine_u64, vget_high_u64, vget_low_u64: uint64x1_t, uint64x2_t;
    vcombine_f32, vget_high_f32, vget_low_f32: float32x2_t, float32x4_t;
}

macro_rules! extract {
    ($($name:ident: $ty:ident),+ $(,)?) => {$(
        #[inline]
        pub fn $name<const N: i32>(a: $ty, b: $ty) -> $ty {
            debug_assert!((N as usize) < <$ty as Vector>::LANES, "extract index out of range");
            <$ty as Vector>::from_fn(|i| joined(a, b, i + N as usize))
        }
    )+};
}

extract! {
    vext_s8: int8x8_t,
    vextq_s8: int8x16_t,
    vext_s16: int16x4_t,
    vextq_s16: int16x8_t,
    vext_s32: int32x2_t,
    vextq_s32: int32x4_t,
    vext_s64: int64x1_t,
    vextq_s64: int64x2_t,
    vext_u8: uint8x8_t,
    vextq_u8: uint8x16_t,
    vext_u16: uint16x4_t,
    vextq_u16: uint16x8_t,
    vext_u32: uint32x2_t,
    vextq_u32: uint32x4_t,
    vext_u64: uint64x1_t,
    vextq_u64: uint64x2_t,
    vext_f32: float32x2_t,
    vextq_f32: float32x4_t,
}

// Reverses the lanes inside each group of `GROUP` lanes.
macro_rules! reverse {
    ($($name:ident: $ty:ident / $group:literal),+ $(,)?) => {$(
        #[inline]
        pub fn $name(a: $ty) -> $ty {
            <$ty as Vector>::from_fn(|i| a.lane(i ^ ($group - 1)))
        }
    )+};
}

reverse! {
    vrev64_s8: int8x8_t / 8,
    vrev64q_s8: int8x16_t / 8,
    vrev64_s16: int16x4_t / 4,
    vrev64q_s16: int16x8_t / 4,
    vrev64_s32: int32x2_t / 2,
    vrev64q_s32: int32x4_t / 2,
    vrev64_u8: uint8x8_t / 8,
    vrev64q_u8: uint8x16_t / 8,
    vrev64_u16: uint16x4_t / 4,
    vrev64q_u16: uint16x8_t / 4,
    vrev64_u32: uint32x2_t / 2,
    vrev64q_u32: uint32x4_t / 2,
    vrev64_f32: float32x2_t / 2,
    vrev64q_f32: float32x4_t / 2,
    vrev32_s8: int8x8_t / 4,
    vrev32q_s8: int8x16_t / 4,
    vrev32_s16: int16x4_t / 2,
    vrev32q_s16: int16x8_t / 2,
    vrev32_u8: uint8x8_t / 4,
    vrev32q_u8: uint8x16_t / 4,
    vrev32_u16: uint16x4_t / 2,
    vrev32q_u16: uint16x8_t / 2,
    vrev16_s8: int8x8_t / 2,
    vrev16q_s8: int8x16_t / 2,
    vrev16_u8: uint8x8_t / 2,
    vrev16q_u8: uint8x16_t / 2,
}

macro_rules! permute {
    ($($trn:ident, $zip:ident, $uzp:ident: $ty:ident => $pair:ident;)*) => {$(
        #[inline]
        pub fn $trn(a: $ty, b: $ty) -> $pair {
            $pair(
                <$ty as Vector>::from_fn(|i| if i % 2 == 0 { a.lane(i) } else { b.lane(i - 1) }),
                <$ty as Vector>::from_fn(|i| if i % 2 == 0 { a.lane(i + 1) } else { b.lane(i) }),
            )
        }

        #[inline]
        pub fn $zip(a: $ty, b: $ty) -> $pair {
            let half = <$ty as Vector>::LANES / 2;
            let interleave = |offset: usize| {
                <$ty as Vector>::from_fn(|i| {
                    let source = if i % 2 == 0 { a } else { b };
                    source.lane(offset + i / 2)
                })
            };
            $pair(interleave(0), interleave(half))
        }

        #[inline]
        pub fn $uzp(a: $ty, b: $ty) -> $pair {
            $pair(
                <$ty as Vector>::from_fn(|i| joined(a, b, 2 * i)),
                <$ty as Vector>::from_fn(|i| joined(a, b, 2 * i + 1)),
            )
        }
    )*};
}

permute! {
    vtrn_s8, vzip_s8, vuzp_s8: int8x8_t => int8x8x2_t;
    vtrnq_s8, vzipq_s8, vuzpq_s8: int8x16_t => int8x16x2_t;
    vtrn_s16, vzip_s16, vuzp_s16: int16x4_t => int16x4x2_t;
    vtrnq_s16, vzipq_s16, vuzpq_s16: int16x8_t => int16x8x2_t;
    vtrn_s32, vzip_s32, vuzp_s32: int32x2_t => int32x2x2_t;
    vtrnq_s32, vzipq_s32, vuzpq_s32: int32x4_t => int32x4x2_t;
    vtrn_u8, vzip_u8, vuzp_u8: uint8x8_t => uint8x8x2_t;
    vtrnq_u8, vzipq_u8, vuzpq_u8: uint8x16_t => uint8x16x2_t;
    vtrn_u16, vzip_u16, vuzp_u16: uint16x4_t => uint16x4x2_t;
    vtrnq_u16, vzipq_u16, vuzpq_u16: uint16x8_t => uint16x8x2_t;
    vtrn_u32, vzip_u32, vuzp_u32: uint32x2_t => uint32x2x2_t;
    vtrnq_u32, vzipq_u32, vuzpq_u32: uint32x4_t => uint32x4x2_t;
    vtrn_f32, vzip_f32, vuzp_f32: float32x2_t => float32x2x2_t;
    vtrnq_f32, vzipq_f32, vuzpq_f32: float32x4_t => float32x4x2_t;
}
