//! Comparisons and bit tests. Every result lane is all ones where the
//! predicate holds and all zeros elsewhere; ordered comparisons involving
//! NaN are false.

use super::*;
use crate::reference::*;
use crate::simd::backend::*;

binary_tests! {
    test_vceq_s8 = vceq_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => |x, y| mask(x == y);
    test_vceqq_s8 = vceqq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => |x, y| mask(x == y);
    test_vceq_s16 = vceq_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => |x, y| mask(x == y);
    test_vceqq_s16 = vceqq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| mask(x == y);
    test_vceq_s32 = vceq_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => |x, y| mask(x == y);
    test_vceqq_s32 = vceqq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| mask(x == y);
    test_vceq_u8 = vceq_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => |x, y| mask(x == y);
    test_vceqq_u8 = vceqq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => |x, y| mask(x == y);
    test_vceq_u16 = vceq_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => |x, y| mask(x == y);
    test_vceqq_u16 = vceqq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| mask(x == y);
    test_vceq_u32 = vceq_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => |x, y| mask(x == y);
    test_vceqq_u32 = vceqq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| mask(x == y);
    test_vceq_f32 = vceq_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => |x, y| mask(x == y);
    test_vceqq_f32 = vceqq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => |x, y| mask(x == y);
    test_vcge_s8 = vcge_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => |x, y| mask(x >= y);
    test_vcgeq_s8 = vcgeq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => |x, y| mask(x >= y);
    test_vcge_s16 = vcge_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => |x, y| mask(x >= y);
    test_vcgeq_s16 = vcgeq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| mask(x >= y);
    test_vcge_s32 = vcge_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => |x, y| mask(x >= y);
    test_vcgeq_s32 = vcgeq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| mask(x >= y);
    test_vcge_u8 = vcge_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => |x, y| mask(x >= y);
    test_vcgeq_u8 = vcgeq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => |x, y| mask(x >= y);
    test_vcge_u16 = vcge_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => |x, y| mask(x >= y);
    test_vcgeq_u16 = vcgeq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| mask(x >= y);
    test_vcge_u32 = vcge_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => |x, y| mask(x >= y);
    test_vcgeq_u32 = vcgeq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| mask(x >= y);
    test_vcge_f32 = vcge_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => |x, y| mask(x >= y);
    test_vcgeq_f32 = vcgeq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => |x, y| mask(x >= y);
    test_vcle_s8 = vcle_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => |x, y| mask(x <= y);
    test_vcleq_s8 = vcleq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => |x, y| mask(x <= y);
    test_vcle_s16 = vcle_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => |x, y| mask(x <= y);
    test_vcleq_s16 = vcleq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| mask(x <= y);
    test_vcle_s32 = vcle_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => |x, y| mask(x <= y);
    test_vcleq_s32 = vcleq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| mask(x <= y);
    test_vcle_u8 = vcle_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => |x, y| mask(x <= y);
    test_vcleq_u8 = vcleq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => |x, y| mask(x <= y);
    test_vcle_u16 = vcle_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => |x, y| mask(x <= y);
    test_vcleq_u16 = vcleq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| mask(x <= y);
    test_vcle_u32 = vcle_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => |x, y| mask(x <= y);
    test_vcleq_u32 = vcleq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| mask(x <= y);
    test_vcle_f32 = vcle_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => |x, y| mask(x <= y);
    test_vcleq_f32 = vcleq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => |x, y| mask(x <= y);
    test_vcgt_s8 = vcgt_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => |x, y| mask(x > y);
    test_vcgtq_s8 = vcgtq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => |x, y| mask(x > y);
    test_vcgt_s16 = vcgt_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => |x, y| mask(x > y);
    test_vcgtq_s16 = vcgtq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| mask(x > y);
    test_vcgt_s32 = vcgt_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => |x, y| mask(x > y);
    test_vcgtq_s32 = vcgtq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| mask(x > y);
    test_vcgt_u8 = vcgt_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => |x, y| mask(x > y);
    test_vcgtq_u8 = vcgtq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => |x, y| mask(x > y);
    test_vcgt_u16 = vcgt_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => |x, y| mask(x > y);
    test_vcgtq_u16 = vcgtq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| mask(x > y);
    test_vcgt_u32 = vcgt_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => |x, y| mask(x > y);
    test_vcgtq_u32 = vcgtq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| mask(x > y);
    test_vcgt_f32 = vcgt_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => |x, y| mask(x > y);
    test_vcgtq_f32 = vcgtq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => |x, y| mask(x > y);
    test_vclt_s8 = vclt_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => |x, y| mask(x < y);
    test_vcltq_s8 = vcltq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => |x, y| mask(x < y);
    test_vclt_s16 = vclt_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => |x, y| mask(x < y);
    test_vcltq_s16 = vcltq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| mask(x < y);
    test_vclt_s32 = vclt_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => |x, y| mask(x < y);
    test_vcltq_s32 = vcltq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| mask(x < y);
    test_vclt_u8 = vclt_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => |x, y| mask(x < y);
    test_vcltq_u8 = vcltq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => |x, y| mask(x < y);
    test_vclt_u16 = vclt_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => |x, y| mask(x < y);
    test_vcltq_u16 = vcltq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| mask(x < y);
    test_vclt_u32 = vclt_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => |x, y| mask(x < y);
    test_vcltq_u32 = vcltq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| mask(x < y);
    test_vclt_f32 = vclt_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => |x, y| mask(x < y);
    test_vcltq_f32 = vcltq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => |x, y| mask(x < y);
    test_vcage_f32 = vcage_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => |x, y| mask(fabs(x) >= fabs(y));
    test_vcageq_f32 = vcageq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => |x, y| mask(fabs(x) >= fabs(y));
    test_vcale_f32 = vcale_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => |x, y| mask(fabs(x) <= fabs(y));
    test_vcaleq_f32 = vcaleq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => |x, y| mask(fabs(x) <= fabs(y));
    test_vcagt_f32 = vcagt_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => |x, y| mask(fabs(x) > fabs(y));
    test_vcagtq_f32 = vcagtq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => |x, y| mask(fabs(x) > fabs(y));
    test_vcalt_f32 = vcalt_f32(vld1_f32 @ float_a, vld1_f32 @ float_b) => |x, y| mask(fabs(x) < fabs(y));
    test_vcaltq_f32 = vcaltq_f32(vld1q_f32 @ float_a, vld1q_f32 @ float_b) => |x, y| mask(fabs(x) < fabs(y));
    test_vtst_s8 = vtst_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => |x, y| mask((x & y) != 0);
    test_vtstq_s8 = vtstq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => |x, y| mask((x & y) != 0);
    test_vtst_s16 = vtst_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => |x, y| mask((x & y) != 0);
    test_vtstq_s16 = vtstq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| mask((x & y) != 0);
    test_vtst_s32 = vtst_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => |x, y| mask((x & y) != 0);
    test_vtstq_s32 = vtstq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| mask((x & y) != 0);
    test_vtst_u8 = vtst_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => |x, y| mask((x & y) != 0);
    test_vtstq_u8 = vtstq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => |x, y| mask((x & y) != 0);
    test_vtst_u16 = vtst_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => |x, y| mask((x & y) != 0);
    test_vtstq_u16 = vtstq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| mask((x & y) != 0);
    test_vtst_u32 = vtst_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => |x, y| mask((x & y) != 0);
    test_vtstq_u32 = vtstq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| mask((x & y) != 0);
}
