//! Bitwise logic, bit counts and bitwise select.

use super::kernel::*;
use super::types::*;

// Number of bits below the sign bit that match it.
fn leading_sign_bits<T: Element>(x: T) -> T {
    let v = x.widen();
    let run = if v < 0 { !v } else { v };
    let leading = (run as u128).leading_zeros() - (128 - T::BITS);
    T::wrap(leading as i128 - 1)
}

fn select<M: Bits, T: Bits>(m: M, a: T, b: T) -> T {
    let m = m.to_raw();
    T::from_raw((m & a.to_raw()) | (!m & b.to_raw()))
}

binary_family!(|a, b| a & b =>
    vand_s8: int8x8_t,
    vandq_s8: int8x16_t,
    vand_s16: int16x4_t,
    vandq_s16: int16x8_t,
    vand_s32: int32x2_t,
    vandq_s32: int32x4_t,
    vand_s64: int64x1_t,
    vandq_s64: int64x2_t,
    vand_u8: uint8x8_t,
    vandq_u8: uint8x16_t,
    vand_u16: uint16x4_t,
    vandq_u16: uint16x8_t,
    vand_u32: uint32x2_t,
    vandq_u32: uint32x4_t,
    vand_u64: uint64x1_t,
    vandq_u64: uint64x2_t,
);

binary_family!(|a, b| a | b =>
    vorr_s8: int8x8_t,
    vorrq_s8: int8x16_t,
    vorr_s16: int16x4_t,
    vorrq_s16: int16x8_t,
    vorr_s32: int32x2_t,
    vorrq_s32: int32x4_t,
    vorr_s64: int64x1_t,
    vorrq_s64: int64x2_t,
    vorr_u8: uint8x8_t,
    vorrq_u8: uint8x16_t,
    vorr_u16: uint16x4_t,
    vorrq_u16: uint16x8_t,
    vorr_u32: uint32x2_t,
    vorrq_u32: uint32x4_t,
    vorr_u64: uint64x1_t,
    vorrq_u64: uint64x2_t,
);

binary_family!(|a, b| a ^ b =>
    veor_s8: int8x8_t,
    veorq_s8: int8x16_t,
    veor_s16: int16x4_t,
    veorq_s16: int16x8_t,
    veor_s32: int32x2_t,
    veorq_s32: int32x4_t,
    veor_s64: int64x1_t,
    veorq_s64: int64x2_t,
    veor_u8: uint8x8_t,
    veorq_u8: uint8x16_t,
    veor_u16: uint16x4_t,
    veorq_u16: uint16x8_t,
    veor_u32: uint32x2_t,
    veorq_u32: uint32x4_t,
    veor_u64: uint64x1_t,
    veorq_u64: uint64x2_t,
);

binary_family!(|a, b| a & !b =>
    vbic_s8: int8x8_t,
    vbicq_s8: int8x16_t,
    vbic_s16: int16x4_t,
    vbicq_s16: int16x8_t,
    vbic_s32: int32x2_t,
    vbicq_s32: int32x4_t,
    vbic_s64: int64x1_t,
    vbicq_s64: int64x2_t,
    vbic_u8: uint8x8_t,
    vbicq_u8: uint8x16_t,
    vbic_u16: uint16x4_t,
    vbicq_u16: uint16x8_t,
    vbic_u32: uint32x2_t,
    vbicq_u32: uint32x4_t,
    vbic_u64: uint64x1_t,
    vbicq_u64: uint64x2_t,
);

binary_family!(|a, b| a | !b =>
    vorn_s8: int8x8_t,
    vornq_s8: int8x16_t,
    vorn_s16: int16x4_t,
    vornq_s16: int16x8_t,
    vorn_s32: int32x2_t,
    vornq_s32: int32x4_t,
    vorn_s64: int64x1_t,
    vornq_s64: int64x2_t,
    vorn_u8: uint8x8_t,
    vornq_u8: uint8x16_t,
    vorn_u16: uint16x4_t,
    vornq_u16: uint16x8_t,
    vorn_u32: uint32x2_t,
    vornq_u32: uint32x4_t,
    vorn_u64: uint64x1_t,
    vornq_u64: uint64x2_t,
);

unary_family!(|x| !x =>
    vmvn_s8: int8x8_t,
    vmvnq_s8: int8x16_t,
    vmvn_s16: int16x4_t,
    vmvnq_s16: int16x8_t,
    vmvn_s32: int32x2_t,
    vmvnq_s32: int32x4_t,
    vmvn_u8: uint8x8_t,
    vmvnq_u8: uint8x16_t,
    vmvn_u16: uint16x4_t,
    vmvnq_u16: uint16x8_t,
    vmvn_u32: uint32x2_t,
    vmvnq_u32: uint32x4_t,
);

unary_family!(leading_sign_bits =>
    vcls_s8: int8x8_t,
    vclsq_s8: int8x16_t,
    vcls_s16: int16x4_t,
    vclsq_s16: int16x8_t,
    vcls_s32: int32x2_t,
    vclsq_s32: int32x4_t,
);

unary_family!(|x| Element::wrap(x.leading_zeros() as i128) =>
    vclz_s8: int8x8_t,
    vclzq_s8: int8x16_t,
    vclz_s16: int16x4_t,
    vclzq_s16: int16x8_t,
    vclz_s32: int32x2_t,
    vclzq_s32: int32x4_t,
    vclz_u8: uint8x8_t,
    vclzq_u8: uint8x16_t,
    vclz_u16: uint16x4_t,
    vclzq_u16: uint16x8_t,
    vclz_u32: uint32x2_t,
    vclzq_u32: uint32x4_t,
);

unary_family!(|x| Element::wrap(x.count_ones() as i128) =>
    vcnt_s8: int8x8_t,
    vcntq_s8: int8x16_t,
    vcnt_u8: uint8x8_t,
    vcntq_u8: uint8x16_t,
);

ternary!(select =>
    vbsl_s8(uint8x8_t, int8x8_t, int8x8_t) -> int8x8_t,
    vbslq_s8(uint8x16_t, int8x16_t, int8x16_t) -> int8x16_t,
    vbsl_s16(uint16x4_t, int16x4_t, int16x4_t) -> int16x4_t,
    vbslq_s16(uint16x8_t, int16x8_t, int16x8_t) -> int16x8_t,
    vbsl_s32(uint32x2_t, int32x2_t, int32x2_t) -> int32x2_t,
    vbslq_s32(uint32x4_t, int32x4_t, int32x4_t) -> int32x4_t,
    vbsl_s64(uint64x1_t, int64x1_t, int64x1_t) -> int64x1_t,
    vbslq_s64(uint64x2_t, int64x2_t, int64x2_t) -> int64x2_t,
    vbsl_u8(uint8x8_t, uint8x8_t, uint8x8_t) -> uint8x8_t,
    vbslq_u8(uint8x16_t, uint8x16_t, uint8x16_t) -> uint8x16_t,
    vbsl_u16(uint16x4_t, uint16x4_t, uint16x4_t) -> uint16x4_t,
    vbslq_u16(uint16x8_t, uint16x8_t, uint16x8_t) -> uint16x8_t,
    vbsl_u32(uint32x2_t, uint32x2_t, uint32x2_t) -> uint32x2_t,
    vbslq_u32(uint32x4_t, uint32x4_t, uint32x4_t) -> uint32x4_t,
    vbsl_u64(uint64x1_t, uint64x1_t, uint64x1_t) -> uint64x1_t,
    vbslq_u64(uint64x2_t, uint64x2_t, uint64x2_t) -> uint64x2_t,
    vbsl_f32(uint32x2_t, float32x2_t, float32x2_t) -> float32x2_t,
    vbslq_f32(uint32x4_t, float32x4_t, float32x4_t) -> float32x4_t,
);
