//! Comparisons. Each lane of the result is all ones where the predicate
//! holds and all zeros elsewhere; ordered float comparisons with a NaN
//! operand are false.

use super::kernel::*;
use super::types::*;

binary!(|a, b| mask(a == b) =>
    vceq_s8(int8x8_t, int8x8_t) -> uint8x8_t,
    vceqq_s8(int8x16_t, int8x16_t) -> uint8x16_t,
    vceq_s16(int16x4_t, int16x4_t) -> uint16x4_t,
    vceqq_s16(int16x8_t, int16x8_t) -> uint16x8_t,
    vceq_s32(int32x2_t, int32x2_t) -> uint32x2_t,
    vceqq_s32(int32x4_t, int32x4_t) -> uint32x4_t,
    vceq_u8(uint8x8_t, uint8x8_t) -> uint8x8_t,
    vceqq_u8(uint8x16_t, uint8x16_t) -> uint8x16_t,
    vceq_u16(uint16x4_t, uint16x4_t) -> uint16x4_t,
    vceqq_u16(uint16x8_t, uint16x8_t) -> uint16x8_t,
    vceq_u32(uint32x2_t, uint32x2_t) -> uint32x2_t,
    vceqq_u32(uint32x4_t, uint32x4_t) -> uint32x4_t,
    vceq_f32(float32x2_t, float32x2_t) -> uint32x2_t,
    vceqq_f32(float32x4_t, float32x4_t) -> uint32x4_t,
);

binary!(|a, b| mask(a >= b) =>
    vcge_s8(int8x8_t, int8x8_t) -> uint8x8_t,
    vcgeq_s8(int8x16_t, int8x16_t) -> uint8x16_t,
    vcge_s16(int16x4_t, int16x4_t) -> uint16x4_t,
    vcgeq_s16(int16x8_t, int16x8_t) -> uint16x8_t,
    vcge_s32(int32x2_t, int32x2_t) -> uint32x2_t,
    vcgeq_s32(int32x4_t, int32x4_t) -> uint32x4_t,
    vcge_u8(uint8x8_t, uint8x8_t) -> uint8x8_t,
    vcgeq_u8(uint8x16_t, uint8x16_t) -> uint8x16_t,
    vcge_u16(uint16x4_t, uint16x4_t) -> uint16x4_t,
    vcgeq_u16(uint16x8_t, uint16x8_t) -> uint16x8_t,
    vcge_u32(uint32x2_t, uint32x2_t) -> uint32x2_t,
    vcgeq_u32(uint32x4_t, uint32x4_t) -> uint32x4_t,
    vcge_f32(float32x2_t, float32x2_t) -> uint32x2_t,
    vcgeq_f32(float32x4_t, float32x4_t) -> uint32x4_t,
);

binary!(|a, b| mask(a <= b) =>
    vcle_s8(int8x8_t, int8x8_t) -> uint8x8_t,
    vcleq_s8(int8x16_t, int8x16_t) -> uint8x16_t,
    vcle_s16(int16x4_t, int16x4_t) -> uint16x4_t,
    vcleq_s16(int16x8_t, int16x8_t) -> uint16x8_t,
    vcle_s32(int32x2_t, int32x2_t) -> uint32x2_t,
    vcleq_s32(int32x4_t, int32x4_t) -> uint32x4_t,
    vcle_u8(uint8x8_t, uint8x8_t) -> uint8x8_t,
    vcleq_u8(uint8x16_t, uint8x16_t) -> uint8x16_t,
    vcle_u16(uint16x4_t, uint16x4_t) -> uint16x4_t,
    vcleq_u16(uint16x8_t, uint16x8_t) -> uint16x8_t,
    vcle_u32(uint32x2_t, uint32x2_t) -> uint32x2_t,
    vcleq_u32(uint32x4_t, uint32x4_t) -> uint32x4_t,
    vcle_f32(float32x2_t, float32x2_t) -> uint32x2_t,
    vcleq_f32(float32x4_t, float32x4_t) -> uint32x4_t,
);

binary!(|a, b| mask(a > b) =>
    vcgt_s8(int8x8_t, int8x8_t) -> uint8x8_t,
    vcgtq_s8(int8x16_t, int8x16_t) -> uint8x16_t,
    vcgt_s16(int16x4_t, int16x4_t) -> uint16x4_t,
    vcgtq_s16(int16x8_t, int16x8_t) -> uint16x8_t,
    vcgt_s32(int32x2_t, int32x2_t) -> uint32x2_t,
    vcgtq_s32(int32x4_t, int32x4_t) -> uint32x4_t,
    vcgt_u8(uint8x8_t, uint8x8_t) -> uint8x8_t,
    vcgtq_u8(uint8x16_t, uint8x16_t) -> uint8x16_t,
    vcgt_u16(uint16x4_t, uint16x4_t) -> uint16x4_t,
    vcgtq_u16(uint16x8_t, uint16x8_t) -> uint16x8_t,
    vcgt_u32(uint32x2_t, uint32x2_t) -> uint32x2_t,
    vcgtq_u32(uint32x4_t, uint32x4_t) -> uint32x4_t,
    vcgt_f32(float32x2_t, float32x2_t) -> uint32x2_t,
    vcgtq_f32(float32x4_t, float32x4_t) -> uint32x4_t,
);

binary!(|a, b| mask(a < b) =>
    vclt_s8(int8x8_t, int8x8_t) -> uint8x8_t,
    vcltq_s8(int8x16_t, int8x16_t) -> uint8x16_t,
    vclt_s16(int16x4_t, int16x4_t) -> uint16x4_t,
    vcltq_s16(int16x8_t, int16x8_t) -> uint16x8_t,
    vclt_s32(int32x2_t, int32x2_t) -> uint32x2_t,
    vcltq_s32(int32x4_t, int32x4_t) -> uint32x4_t,
    vclt_u8(uint8x8_t, uint8x8_t) -> uint8x8_t,
    vcltq_u8(uint8x16_t, uint8x16_t) -> uint8x16_t,
    vclt_u16(uint16x4_t, uint16x4_t) -> uint16x4_t,
    vcltq_u16(uint16x8_t, uint16x8_t) -> uint16x8_t,
    vclt_u32(uint32x2_t, uint32x2_t) -> uint32x2_t,
    vcltq_u32(uint32x4_t, uint32x4_t) -> uint32x4_t,
    vclt_f32(float32x2_t, float32x2_t) -> uint32x2_t,
    vcltq_f32(float32x4_t, float32x4_t) -> uint32x4_t,
);

binary!(|a: f32, b: f32| mask(a.abs() >= b.abs()) =>
    vcage_f32(float32x2_t, float32x2_t) -> uint32x2_t,
    vcageq_f32(float32x4_t, float32x4_t) -> uint32x4_t,
);

binary!(|a: f32, b: f32| mask(a.abs() <= b.abs()) =>
    vcale_f32(float32x2_t, float32x2_t) -> uint32x2_t,
    vcaleq_f32(float32x4_t, float32x4_t) -> uint32x4_t,
);

binary!(|a: f32, b: f32| mask(a.abs() > b.abs()) =>
    vcagt_f32(float32x2_t, float32x2_t) -> uint32x2_t,
    vcagtq_f32(float32x4_t, float32x4_t) -> uint32x4_t,
);

binary!(|a: f32, b: f32| mask(a.abs() < b.abs()) =>
    vcalt_f32(float32x2_t, float32x2_t) -> uint32x2_t,
    vcaltq_f32(float32x4_t, float32x4_t) -> uint32x4_t,
);

binary!(|a, b| mask((a & b) != 0) =>
    vtst_s8(int8x8_t, int8x8_t) -> uint8x8_t,
    vtstq_s8(int8x16_t, int8x16_t) -> uint8x16_t,
    vtst_s16(int16x4_t, int16x4_t) -> uint16x4_t,
    vtstq_s16(int16x8_t, int16x8_t) -> uint16x8_t,
    vtst_s32(int32x2_t, int32x2_t) -> uint32x2_t,
    vtstq_s32(int32x4_t, int32x4_t) -> uint32x4_t,
    vtst_u8(uint8x8_t, uint8x8_t) -> uint8x8_t,
    vtstq_u8(uint8x16_t, uint8x16_t) -> uint8x16_t,
    vtst_u16(uint16x4_t, uint16x4_t) -> uint16x4_t,
    vtstq_u16(uint16x8_t, uint16x8_t) -> uint16x8_t,
    vtst_u32(uint32x2_t, uint32x2_t) -> uint32x2_t,
    vtstq_u32(uint32x4_t, uint32x4_t) -> uint32x4_t,
);
