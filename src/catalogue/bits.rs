//! Bitwise logic, bit counts and bit select.

use super::*;
use crate::reference::*;
use crate::simd::backend::*;

binary_tests! {
    test_vand_s8 = vand_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => |x, y| x & y;
    test_vandq_s8 = vandq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => |x, y| x & y;
    test_vand_s16 = vand_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => |x, y| x & y;
    test_vandq_s16 = vandq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| x & y;
    test_vand_s32 = vand_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => |x, y| x & y;
    test_vandq_s32 = vandq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| x & y;
    test_vand_s64 = vand_s64(vld1_s64 @ int_a, vld1_s64 @ int_b) => |x, y| x & y;
    test_vandq_s64 = vandq_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => |x, y| x & y;
    test_vand_u8 = vand_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => |x, y| x & y;
    test_vandq_u8 = vandq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => |x, y| x & y;
    test_vand_u16 = vand_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => |x, y| x & y;
    test_vandq_u16 = vandq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| x & y;
    test_vand_u32 = vand_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => |x, y| x & y;
    test_vandq_u32 = vandq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| x & y;
    test_vand_u64 = vand_u64(vld1_u64 @ int_a, vld1_u64 @ int_b) => |x, y| x & y;
    test_vandq_u64 = vandq_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => |x, y| x & y;
    test_vorr_s8 = vorr_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => |x, y| x | y;
    test_vorrq_s8 = vorrq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => |x, y| x | y;
    test_vorr_s16 = vorr_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => |x, y| x | y;
    test_vorrq_s16 = vorrq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| x | y;
    test_vorr_s32 = vorr_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => |x, y| x | y;
    test_vorrq_s32 = vorrq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| x | y;
    test_vorr_s64 = vorr_s64(vld1_s64 @ int_a, vld1_s64 @ int_b) => |x, y| x | y;
    test_vorrq_s64 = vorrq_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => |x, y| x | y;
    test_vorr_u8 = vorr_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => |x, y| x | y;
    test_vorrq_u8 = vorrq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => |x, y| x | y;
    test_vorr_u16 = vorr_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => |x, y| x | y;
    test_vorrq_u16 = vorrq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| x | y;
    test_vorr_u32 = vorr_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => |x, y| x | y;
    test_vorrq_u32 = vorrq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| x | y;
    test_vorr_u64 = vorr_u64(vld1_u64 @ int_a, vld1_u64 @ int_b) => |x, y| x | y;
    test_vorrq_u64 = vorrq_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => |x, y| x | y;
    test_veor_s8 = veor_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => |x, y| x ^ y;
    test_veorq_s8 = veorq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => |x, y| x ^ y;
    test_veor_s16 = veor_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => |x, y| x ^ y;
    test_veorq_s16 = veorq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| x ^ y;
    test_veor_s32 = veor_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => |x, y| x ^ y;
    test_veorq_s32 = veorq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| x ^ y;
    test_veor_s64 = veor_s64(vld1_s64 @ int_a, vld1_s64 @ int_b) => |x, y| x ^ y;
    test_veorq_s64 = veorq_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => |x, y| x ^ y;
    test_veor_u8 = veor_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => |x, y| x ^ y;
    test_veorq_u8 = veorq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => |x, y| x ^ y;
    test_veor_u16 = veor_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => |x, y| x ^ y;
    test_veorq_u16 = veorq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| x ^ y;
    test_veor_u32 = veor_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => |x, y| x ^ y;
    test_veorq_u32 = veorq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| x ^ y;
    test_veor_u64 = veor_u64(vld1_u64 @ int_a, vld1_u64 @ int_b) => |x, y| x ^ y;
    test_veorq_u64 = veorq_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => |x, y| x ^ y;
    test_vbic_s8 = vbic_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => |x, y| x & !y;
    test_vbicq_s8 = vbicq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => |x, y| x & !y;
    test_vbic_s16 = vbic_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => |x, y| x & !y;
    test_vbicq_s16 = vbicq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| x & !y;
    test_vbic_s32 = vbic_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => |x, y| x & !y;
    test_vbicq_s32 = vbicq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| x & !y;
    test_vbic_s64 = vbic_s64(vld1_s64 @ int_a, vld1_s64 @ int_b) => |x, y| x & !y;
    test_vbicq_s64 = vbicq_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => |x, y| x & !y;
    test_vbic_u8 = vbic_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => |x, y| x & !y;
    test_vbicq_u8 = vbicq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => |x, y| x & !y;
    test_vbic_u16 = vbic_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => |x, y| x & !y;
    test_vbicq_u16 = vbicq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| x & !y;
    test_vbic_u32 = vbic_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => |x, y| x & !y;
    test_vbicq_u32 = vbicq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| x & !y;
    test_vbic_u64 = vbic_u64(vld1_u64 @ int_a, vld1_u64 @ int_b) => |x, y| x & !y;
    test_vbicq_u64 = vbicq_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => |x, y| x & !y;
    test_vorn_s8 = vorn_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => |x, y| x | !y;
    test_vornq_s8 = vornq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => |x, y| x | !y;
    test_vorn_s16 = vorn_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => |x, y| x | !y;
    test_vornq_s16 = vornq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => |x, y| x | !y;
    test_vorn_s32 = vorn_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => |x, y| x | !y;
    test_vornq_s32 = vornq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => |x, y| x | !y;
    test_vorn_s64 = vorn_s64(vld1_s64 @ int_a, vld1_s64 @ int_b) => |x, y| x | !y;
    test_vornq_s64 = vornq_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => |x, y| x | !y;
    test_vorn_u8 = vorn_u8(vld1_u8 @ int_a, vld1_u8 @ int_b) => |x, y| x | !y;
    test_vornq_u8 = vornq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b) => |x, y| x | !y;
    test_vorn_u16 = vorn_u16(vld1_u16 @ int_a, vld1_u16 @ int_b) => |x, y| x | !y;
    test_vornq_u16 = vornq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b) => |x, y| x | !y;
    test_vorn_u32 = vorn_u32(vld1_u32 @ int_a, vld1_u32 @ int_b) => |x, y| x | !y;
    test_vornq_u32 = vornq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b) => |x, y| x | !y;
    test_vorn_u64 = vorn_u64(vld1_u64 @ int_a, vld1_u64 @ int_b) => |x, y| x | !y;
    test_vornq_u64 = vornq_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b) => |x, y| x | !y;
}

unary_tests! {
    test_vmvn_s8 = vmvn_s8(vld1_s8 @ int_a) => |x| !x;
    test_vmvnq_s8 = vmvnq_s8(vld1q_s8 @ int_a) => |x| !x;
    test_vmvn_s16 = vmvn_s16(vld1_s16 @ int_a) => |x| !x;
    test_vmvnq_s16 = vmvnq_s16(vld1q_s16 @ int_a) => |x| !x;
    test_vmvn_s32 = vmvn_s32(vld1_s32 @ int_a) => |x| !x;
    test_vmvnq_s32 = vmvnq_s32(vld1q_s32 @ int_a) => |x| !x;
    test_vmvn_u8 = vmvn_u8(vld1_u8 @ int_a) => |x| !x;
    test_vmvnq_u8 = vmvnq_u8(vld1q_u8 @ int_a) => |x| !x;
    test_vmvn_u16 = vmvn_u16(vld1_u16 @ int_a) => |x| !x;
    test_vmvnq_u16 = vmvnq_u16(vld1q_u16 @ int_a) => |x| !x;
    test_vmvn_u32 = vmvn_u32(vld1_u32 @ int_a) => |x| !x;
    test_vmvnq_u32 = vmvnq_u32(vld1q_u32 @ int_a) => |x| !x;
    test_vcls_s8 = vcls_s8(vld1_s8 @ int_a) => leading_sign_bits;
    test_vclsq_s8 = vclsq_s8(vld1q_s8 @ int_a) => leading_sign_bits;
    test_vcls_s16 = vcls_s16(vld1_s16 @ int_a) => leading_sign_bits;
    test_vclsq_s16 = vclsq_s16(vld1q_s16 @ int_a) => leading_sign_bits;
    test_vcls_s32 = vcls_s32(vld1_s32 @ int_a) => leading_sign_bits;
    test_vclsq_s32 = vclsq_s32(vld1q_s32 @ int_a) => leading_sign_bits;
    test_vclz_s8 = vclz_s8(vld1_s8 @ int_a) => leading_zeros;
    test_vclzq_s8 = vclzq_s8(vld1q_s8 @ int_a) => leading_zeros;
    test_vclz_s16 = vclz_s16(vld1_s16 @ int_a) => leading_zeros;
    test_vclzq_s16 = vclzq_s16(vld1q_s16 @ int_a) => leading_zeros;
    test_vclz_s32 = vclz_s32(vld1_s32 @ int_a) => leading_zeros;
    test_vclzq_s32 = vclzq_s32(vld1q_s32 @ int_a) => leading_zeros;
    test_vclz_u8 = vclz_u8(vld1_u8 @ int_a) => leading_zeros;
    test_vclzq_u8 = vclzq_u8(vld1q_u8 @ int_a) => leading_zeros;
    test_vclz_u16 = vclz_u16(vld1_u16 @ int_a) => leading_zeros;
    test_vclzq_u16 = vclzq_u16(vld1q_u16 @ int_a) => leading_zeros;
    test_vclz_u32 = vclz_u32(vld1_u32 @ int_a) => leading_zeros;
    test_vclzq_u32 = vclzq_u32(vld1q_u32 @ int_a) => leading_zeros;
    test_vcnt_s8 = vcnt_s8(vld1_s8 @ int_a) => population_count;
    test_vcntq_s8 = vcntq_s8(vld1q_s8 @ int_a) => population_count;
    test_vcnt_u8 = vcnt_u8(vld1_u8 @ int_a) => population_count;
    test_vcntq_u8 = vcntq_u8(vld1q_u8 @ int_a) => population_count;
}

ternary_tests! {
    test_vbsl_s8 = vbsl_s8(vld1_u8 @ int_a, vld1_s8 @ int_b, vld1_s8 @ mixed) => bit_select;
    test_vbslq_s8 = vbslq_s8(vld1q_u8 @ int_a, vld1q_s8 @ int_b, vld1q_s8 @ mixed) => bit_select;
    test_vbsl_s16 = vbsl_s16(vld1_u16 @ int_a, vld1_s16 @ int_b, vld1_s16 @ mixed) => bit_select;
    test_vbslq_s16 = vbslq_s16(vld1q_u16 @ int_a, vld1q_s16 @ int_b, vld1q_s16 @ mixed) => bit_select;
    test_vbsl_s32 = vbsl_s32(vld1_u32 @ int_a, vld1_s32 @ int_b, vld1_s32 @ mixed) => bit_select;
    test_vbslq_s32 = vbslq_s32(vld1q_u32 @ int_a, vld1q_s32 @ int_b, vld1q_s32 @ mixed) => bit_select;
    test_vbsl_s64 = vbsl_s64(vld1_u64 @ int_a, vld1_s64 @ int_b, vld1_s64 @ mixed) => bit_select;
    test_vbslq_s64 = vbslq_s64(vld1q_u64 @ int_a, vld1q_s64 @ int_b, vld1q_s64 @ mixed) => bit_select;
    test_vbsl_u8 = vbsl_u8(vld1_u8 @ int_a, vld1_u8 @ int_b, vld1_u8 @ mixed) => bit_select;
    test_vbslq_u8 = vbslq_u8(vld1q_u8 @ int_a, vld1q_u8 @ int_b, vld1q_u8 @ mixed) => bit_select;
    test_vbsl_u16 = vbsl_u16(vld1_u16 @ int_a, vld1_u16 @ int_b, vld1_u16 @ mixed) => bit_select;
    test_vbslq_u16 = vbslq_u16(vld1q_u16 @ int_a, vld1q_u16 @ int_b, vld1q_u16 @ mixed) => bit_select;
    test_vbsl_u32 = vbsl_u32(vld1_u32 @ int_a, vld1_u32 @ int_b, vld1_u32 @ mixed) => bit_select;
    test_vbslq_u32 = vbslq_u32(vld1q_u32 @ int_a, vld1q_u32 @ int_b, vld1q_u32 @ mixed) => bit_select;
    test_vbsl_u64 = vbsl_u64(vld1_u64 @ int_a, vld1_u64 @ int_b, vld1_u64 @ mixed) => bit_select;
    test_vbslq_u64 = vbslq_u64(vld1q_u64 @ int_a, vld1q_u64 @ int_b, vld1q_u64 @ mixed) => bit_select;
    test_vbsl_f32 = vbsl_f32(vld1_u32 @ int_a, vld1_f32 @ float_a, vld1_f32 @ float_b) => bit_select;
    test_vbslq_f32 = vbslq_f32(vld1q_u32 @ int_a, vld1q_f32 @ float_a, vld1q_f32 @ float_b) => bit_select;
}
