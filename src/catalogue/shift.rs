//! Shifts by register and by immediate, including the narrowing,
//! widening, accumulating and inserting forms.

use super::*;
use crate::reference::*;
use crate::simd::backend::*;

binary_tests! {
    test_vshl_s8 = vshl_s8(vld1_s8 @ int_a, vld1_s8 @ int_b) => shift_by_register;
    test_vshlq_s8 = vshlq_s8(vld1q_s8 @ int_a, vld1q_s8 @ int_b) => shift_by_register;
    test_vshl_s16 = vshl_s16(vld1_s16 @ int_a, vld1_s16 @ int_b) => shift_by_register;
    test_vshlq_s16 = vshlq_s16(vld1q_s16 @ int_a, vld1q_s16 @ int_b) => shift_by_register;
    test_vshl_s32 = vshl_s32(vld1_s32 @ int_a, vld1_s32 @ int_b) => shift_by_register;
    test_vshlq_s32 = vshlq_s32(vld1q_s32 @ int_a, vld1q_s32 @ int_b) => shift_by_register;
    test_vshl_s64 = vshl_s64(vld1_s64 @ int_a, vld1_s64 @ int_b) => shift_by_register;
    test_vshlq_s64 = vshlq_s64(vld1q_s64 @ int_a, vld1q_s64 @ int_b) => shift_by_register;
    test_vshl_u8 = vshl_u8(vld1_u8 @ int_a, vld1_s8 @ int_b) => shift_by_register;
    test_vshlq_u8 = vshlq_u8(vld1q_u8 @ int_a, vld1q_s8 @ int_b) => shift_by_register;
    test_vshl_u16 = vshl_u16(vld1_u16 @ int_a, vld1_s16 @ int_b) => shift_by_register;
    test_vshlq_u16 = vshlq_u16(vld1q_u16 @ int_a, vld1q_s16 @ int_b) => shift_by_register;
    test_vshl_u32 = vshl_u32(vld1_u32 @ int_a, vld1_s32 @ int_b) => shift_by_register;
    test_vshlq_u32 = vshlq_u32(vld1q_u32 @ int_a, vld1q_s32 @ int_b) => shift_by_register;
    test_vshl_u64 = vshl_u64(vld1_u64 @ int_a, vld1_s64 @ int_b) => shift_by_register;
    test_vshlq_u64 = vshlq_u64(vld1q_u64 @ int_a, vld1q_s64 @ int_b) => shift_by_register;
}

immediate_tests! {
    test_vshl_n_s8 = vshl_n_s8::<0 1 2 3 4 5 6 7>(vld1_s8 @ int_a: i8) => shift_left;
    test_vshlq_n_s8 = vshlq_n_s8::<0 1 2 3 4 5 6 7>(vld1q_s8 @ int_a: i8) => shift_left;
    test_vshl_n_s16 = vshl_n_s16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1_s16 @ int_a: i16) => shift_left;
    test_vshlq_n_s16 = vshlq_n_s16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_s16 @ int_a: i16) => shift_left;
    test_vshl_n_s32 = vshl_n_s32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1_s32 @ int_a: i32) => shift_left;
    test_vshlq_n_s32 = vshlq_n_s32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1q_s32 @ int_a: i32) => shift_left;
    test_vshl_n_s64 = vshl_n_s64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1_s64 @ int_a: i64) => shift_left;
    test_vshlq_n_s64 = vshlq_n_s64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1q_s64 @ int_a: i64) => shift_left;
    test_vshl_n_u8 = vshl_n_u8::<0 1 2 3 4 5 6 7>(vld1_u8 @ int_a: u8) => shift_left;
    test_vshlq_n_u8 = vshlq_n_u8::<0 1 2 3 4 5 6 7>(vld1q_u8 @ int_a: u8) => shift_left;
    test_vshl_n_u16 = vshl_n_u16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1_u16 @ int_a: u16) => shift_left;
    test_vshlq_n_u16 = vshlq_n_u16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_u16 @ int_a: u16) => shift_left;
    test_vshl_n_u32 = vshl_n_u32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1_u32 @ int_a: u32) => shift_left;
    test_vshlq_n_u32 = vshlq_n_u32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1q_u32 @ int_a: u32) => shift_left;
    test_vshl_n_u64 = vshl_n_u64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1_u64 @ int_a: u64) => shift_left;
    test_vshlq_n_u64 = vshlq_n_u64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1q_u64 @ int_a: u64) => shift_left;
    test_vshr_n_s8 = vshr_n_s8::<1 2 3 4 5 6 7 8>(vld1_s8 @ int_a: i8) => shift_right;
    test_vshrq_n_s8 = vshrq_n_s8::<1 2 3 4 5 6 7 8>(vld1q_s8 @ int_a: i8) => shift_right;
    test_vshr_n_s16 = vshr_n_s16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1_s16 @ int_a: i16) => shift_right;
    test_vshrq_n_s16 = vshrq_n_s16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_s16 @ int_a: i16) => shift_right;
    test_vshr_n_s32 = vshr_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_s32 @ int_a: i32) => shift_right;
    test_vshrq_n_s32 = vshrq_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_s32 @ int_a: i32) => shift_right;
    test_vshr_n_s64 = vshr_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1_s64 @ int_a: i64) => shift_right;
    test_vshrq_n_s64 = vshrq_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1q_s64 @ int_a: i64) => shift_right;
    test_vshr_n_u8 = vshr_n_u8::<1 2 3 4 5 6 7 8>(vld1_u8 @ int_a: u8) => shift_right;
    test_vshrq_n_u8 = vshrq_n_u8::<1 2 3 4 5 6 7 8>(vld1q_u8 @ int_a: u8) => shift_right;
    test_vshr_n_u16 = vshr_n_u16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1_u16 @ int_a: u16) => shift_right;
    test_vshrq_n_u16 = vshrq_n_u16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_u16 @ int_a: u16) => shift_right;
    test_vshr_n_u32 = vshr_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_u32 @ int_a: u32) => shift_right;
    test_vshrq_n_u32 = vshrq_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_u32 @ int_a: u32) => shift_right;
    test_vshr_n_u64 = vshr_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1_u64 @ int_a: u64) => shift_right;
    test_vshrq_n_u64 = vshrq_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1q_u64 @ int_a: u64) => shift_right;
    test_vrshr_n_s8 = vrshr_n_s8::<1 2 3 4 5 6 7 8>(vld1_s8 @ int_a: i8) => rounding_shift_right_lane;
    test_vrshrq_n_s8 = vrshrq_n_s8::<1 2 3 4 5 6 7 8>(vld1q_s8 @ int_a: i8) => rounding_shift_right_lane;
    test_vrshr_n_s16 = vrshr_n_s16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1_s16 @ int_a: i16) => rounding_shift_right_lane;
    test_vrshrq_n_s16 = vrshrq_n_s16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_s16 @ int_a: i16) => rounding_shift_right_lane;
    test_vrshr_n_s32 = vrshr_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_s32 @ int_a: i32) => rounding_shift_right_lane;
    test_vrshrq_n_s32 = vrshrq_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_s32 @ int_a: i32) => rounding_shift_right_lane;
    test_vrshr_n_s64 = vrshr_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1_s64 @ int_a: i64) => rounding_shift_right_lane;
    test_vrshrq_n_s64 = vrshrq_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1q_s64 @ int_a: i64) => rounding_shift_right_lane;
    test_vrshr_n_u8 = vrshr_n_u8::<1 2 3 4 5 6 7 8>(vld1_u8 @ int_a: u8) => rounding_shift_right_lane;
    test_vrshrq_n_u8 = vrshrq_n_u8::<1 2 3 4 5 6 7 8>(vld1q_u8 @ int_a: u8) => rounding_shift_right_lane;
    test_vrshr_n_u16 = vrshr_n_u16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1_u16 @ int_a: u16) => rounding_shift_right_lane;
    test_vrshrq_n_u16 = vrshrq_n_u16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_u16 @ int_a: u16) => rounding_shift_right_lane;
    test_vrshr_n_u32 = vrshr_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_u32 @ int_a: u32) => rounding_shift_right_lane;
    test_vrshrq_n_u32 = vrshrq_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_u32 @ int_a: u32) => rounding_shift_right_lane;
    test_vrshr_n_u64 = vrshr_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1_u64 @ int_a: u64) => rounding_shift_right_lane;
    test_vrshrq_n_u64 = vrshrq_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1q_u64 @ int_a: u64) => rounding_shift_right_lane;
    test_vshll_n_s8 = vshll_n_s8::<0 1 2 3 4 5 6 7 8>(vld1_s8 @ int_a: i8) => shift_left;
    test_vshll_n_s16 = vshll_n_s16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1_s16 @ int_a: i16) => shift_left;
    test_vshll_n_s32 = vshll_n_s32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_s32 @ int_a: i32) => shift_left;
    test_vshll_n_u8 = vshll_n_u8::<0 1 2 3 4 5 6 7 8>(vld1_u8 @ int_a: u8) => shift_left;
    test_vshll_n_u16 = vshll_n_u16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1_u16 @ int_a: u16) => shift_left;
    test_vshll_n_u32 = vshll_n_u32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_u32 @ int_a: u32) => shift_left;
    test_vshrn_n_s16 = vshrn_n_s16::<1 2 3 4 5 6 7 8>(vld1q_s16 @ int_a: i16) => shift_right;
    test_vshrn_n_s32 = vshrn_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_s32 @ int_a: i32) => shift_right;
    test_vshrn_n_s64 = vshrn_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_s64 @ int_a: i64) => shift_right;
    test_vshrn_n_u16 = vshrn_n_u16::<1 2 3 4 5 6 7 8>(vld1q_u16 @ int_a: u16) => shift_right;
    test_vshrn_n_u32 = vshrn_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_u32 @ int_a: u32) => shift_right;
    test_vshrn_n_u64 = vshrn_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_u64 @ int_a: u64) => shift_right;
    test_vrshrn_n_s16 = vrshrn_n_s16::<1 2 3 4 5 6 7 8>(vld1q_s16 @ int_a: i16) => rounding_shift_right_lane;
    test_vrshrn_n_s32 = vrshrn_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_s32 @ int_a: i32) => rounding_shift_right_lane;
    test_vrshrn_n_s64 = vrshrn_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_s64 @ int_a: i64) => rounding_shift_right_lane;
    test_vrshrn_n_u16 = vrshrn_n_u16::<1 2 3 4 5 6 7 8>(vld1q_u16 @ int_a: u16) => rounding_shift_right_lane;
    test_vrshrn_n_u32 = vrshrn_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_u32 @ int_a: u32) => rounding_shift_right_lane;
    test_vrshrn_n_u64 = vrshrn_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_u64 @ int_a: u64) => rounding_shift_right_lane;
    test_vqshrn_n_s16 = vqshrn_n_s16::<1 2 3 4 5 6 7 8>(vld1q_s16 @ int_a: i16) => saturating_shift_right_narrow;
    test_vqshrn_n_s32 = vqshrn_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_s32 @ int_a: i32) => saturating_shift_right_narrow;
    test_vqshrn_n_s64 = vqshrn_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_s64 @ int_a: i64) => saturating_shift_right_narrow;
    test_vqshrn_n_u16 = vqshrn_n_u16::<1 2 3 4 5 6 7 8>(vld1q_u16 @ int_a: u16) => saturating_shift_right_narrow;
    test_vqshrn_n_u32 = vqshrn_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_u32 @ int_a: u32) => saturating_shift_right_narrow;
    test_vqshrn_n_u64 = vqshrn_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_u64 @ int_a: u64) => saturating_shift_right_narrow;
    test_vqrshrn_n_s16 = vqrshrn_n_s16::<1 2 3 4 5 6 7 8>(vld1q_s16 @ int_a: i16) => saturating_rounding_shift_right_narrow;
    test_vqrshrn_n_s32 = vqrshrn_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_s32 @ int_a: i32) => saturating_rounding_shift_right_narrow;
    test_vqrshrn_n_s64 = vqrshrn_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_s64 @ int_a: i64) => saturating_rounding_shift_right_narrow;
    test_vqrshrn_n_u16 = vqrshrn_n_u16::<1 2 3 4 5 6 7 8>(vld1q_u16 @ int_a: u16) => saturating_rounding_shift_right_narrow;
    test_vqrshrn_n_u32 = vqrshrn_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_u32 @ int_a: u32) => saturating_rounding_shift_right_narrow;
    test_vqrshrn_n_u64 = vqrshrn_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_u64 @ int_a: u64) => saturating_rounding_shift_right_narrow;
    test_vqshrun_n_s16 = vqshrun_n_s16::<1 2 3 4 5 6 7 8>(vld1q_s16 @ int_a: i16) => saturating_shift_right_narrow;
    test_vqshrun_n_s32 = vqshrun_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_s32 @ int_a: i32) => saturating_shift_right_narrow;
    test_vqshrun_n_s64 = vqshrun_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_s64 @ int_a: i64) => saturating_shift_right_narrow;
    test_vqrshrun_n_s16 = vqrshrun_n_s16::<1 2 3 4 5 6 7 8>(vld1q_s16 @ int_a: i16) => saturating_rounding_shift_right_narrow;
    test_vqrshrun_n_s32 = vqrshrun_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_s32 @ int_a: i32) => saturating_rounding_shift_right_narrow;
    test_vqrshrun_n_s64 = vqrshrun_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_s64 @ int_a: i64) => saturating_rounding_shift_right_narrow;
    test_vqshl_n_s8 = vqshl_n_s8::<0 1 2 3 4 5 6 7>(vld1_s8 @ int_a: i8) => saturating_shift_left;
    test_vqshl_n_s16 = vqshl_n_s16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1_s16 @ int_a: i16) => saturating_shift_left;
    test_vqshl_n_s32 = vqshl_n_s32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1_s32 @ int_a: i32) => saturating_shift_left;
    test_vqshl_n_s64 = vqshl_n_s64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1_s64 @ int_a: i64) => saturating_shift_left;
    test_vqshl_n_u8 = vqshl_n_u8::<0 1 2 3 4 5 6 7>(vld1_u8 @ int_a: u8) => saturating_shift_left;
    test_vqshl_n_u16 = vqshl_n_u16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1_u16 @ int_a: u16) => saturating_shift_left;
    test_vqshl_n_u32 = vqshl_n_u32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1_u32 @ int_a: u32) => saturating_shift_left;
    test_vqshl_n_u64 = vqshl_n_u64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1_u64 @ int_a: u64) => saturating_shift_left;
    test_vqshlq_n_s8 = vqshlq_n_s8::<0 1 2 3 4 5 6 7>(vld1q_s8 @ int_a: i8) => saturating_shift_left;
    test_vqshlq_n_s16 = vqshlq_n_s16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_s16 @ int_a: i16) => saturating_shift_left;
    test_vqshlq_n_s32 = vqshlq_n_s32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1q_s32 @ int_a: i32) => saturating_shift_left;
    test_vqshlq_n_s64 = vqshlq_n_s64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1q_s64 @ int_a: i64) => saturating_shift_left;
    test_vqshlq_n_u8 = vqshlq_n_u8::<0 1 2 3 4 5 6 7>(vld1q_u8 @ int_a: u8) => saturating_shift_left;
    test_vqshlq_n_u16 = vqshlq_n_u16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_u16 @ int_a: u16) => saturating_shift_left;
    test_vqshlq_n_u32 = vqshlq_n_u32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1q_u32 @ int_a: u32) => saturating_shift_left;
    test_vqshlq_n_u64 = vqshlq_n_u64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1q_u64 @ int_a: u64) => saturating_shift_left;
    test_vqshlu_n_s8 = vqshlu_n_s8::<0 1 2 3 4 5 6 7>(vld1_s8 @ int_a: i8) => saturating_shift_left;
    test_vqshlu_n_s16 = vqshlu_n_s16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1_s16 @ int_a: i16) => saturating_shift_left;
    test_vqshlu_n_s32 = vqshlu_n_s32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1_s32 @ int_a: i32) => saturating_shift_left;
    test_vqshlu_n_s64 = vqshlu_n_s64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1_s64 @ int_a: i64) => saturating_shift_left;
    test_vqshluq_n_s8 = vqshluq_n_s8::<0 1 2 3 4 5 6 7>(vld1q_s8 @ int_a: i8) => saturating_shift_left;
    test_vqshluq_n_s16 = vqshluq_n_s16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_s16 @ int_a: i16) => saturating_shift_left;
    test_vqshluq_n_s32 = vqshluq_n_s32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1q_s32 @ int_a: i32) => saturating_shift_left;
    test_vqshluq_n_s64 = vqshluq_n_s64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1q_s64 @ int_a: i64) => saturating_shift_left;
}

immediate_binary_tests! {
    test_vsra_n_s8 = vsra_n_s8::<1 2 3 4 5 6 7 8>(vld1_s8 @ int_a, vld1_s8 @ int_b: i8) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsraq_n_s8 = vsraq_n_s8::<1 2 3 4 5 6 7 8>(vld1q_s8 @ int_a, vld1q_s8 @ int_b: i8) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsra_n_s16 = vsra_n_s16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1_s16 @ int_a, vld1_s16 @ int_b: i16) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsraq_n_s16 = vsraq_n_s16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_s16 @ int_a, vld1q_s16 @ int_b: i16) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsra_n_s32 = vsra_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_s32 @ int_a, vld1_s32 @ int_b: i32) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsraq_n_s32 = vsraq_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_s32 @ int_a, vld1q_s32 @ int_b: i32) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsra_n_s64 = vsra_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1_s64 @ int_a, vld1_s64 @ int_b: i64) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsraq_n_s64 = vsraq_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1q_s64 @ int_a, vld1q_s64 @ int_b: i64) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsra_n_u8 = vsra_n_u8::<1 2 3 4 5 6 7 8>(vld1_u8 @ int_a, vld1_u8 @ int_b: u8) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsraq_n_u8 = vsraq_n_u8::<1 2 3 4 5 6 7 8>(vld1q_u8 @ int_a, vld1q_u8 @ int_b: u8) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsra_n_u16 = vsra_n_u16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1_u16 @ int_a, vld1_u16 @ int_b: u16) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsraq_n_u16 = vsraq_n_u16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_u16 @ int_a, vld1q_u16 @ int_b: u16) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsra_n_u32 = vsra_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_u32 @ int_a, vld1_u32 @ int_b: u32) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsraq_n_u32 = vsraq_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_u32 @ int_a, vld1q_u32 @ int_b: u32) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsra_n_u64 = vsra_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1_u64 @ int_a, vld1_u64 @ int_b: u64) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vsraq_n_u64 = vsraq_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1q_u64 @ int_a, vld1q_u64 @ int_b: u64) => |x, y, n| shift_right_accumulate(x, y, n, false);
    test_vrsra_n_s8 = vrsra_n_s8::<1 2 3 4 5 6 7 8>(vld1_s8 @ int_a, vld1_s8 @ int_b: i8) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsraq_n_s8 = vrsraq_n_s8::<1 2 3 4 5 6 7 8>(vld1q_s8 @ int_a, vld1q_s8 @ int_b: i8) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsra_n_s16 = vrsra_n_s16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1_s16 @ int_a, vld1_s16 @ int_b: i16) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsraq_n_s16 = vrsraq_n_s16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_s16 @ int_a, vld1q_s16 @ int_b: i16) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsra_n_s32 = vrsra_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_s32 @ int_a, vld1_s32 @ int_b: i32) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsraq_n_s32 = vrsraq_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_s32 @ int_a, vld1q_s32 @ int_b: i32) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsra_n_s64 = vrsra_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1_s64 @ int_a, vld1_s64 @ int_b: i64) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsraq_n_s64 = vrsraq_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1q_s64 @ int_a, vld1q_s64 @ int_b: i64) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsra_n_u8 = vrsra_n_u8::<1 2 3 4 5 6 7 8>(vld1_u8 @ int_a, vld1_u8 @ int_b: u8) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsraq_n_u8 = vrsraq_n_u8::<1 2 3 4 5 6 7 8>(vld1q_u8 @ int_a, vld1q_u8 @ int_b: u8) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsra_n_u16 = vrsra_n_u16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1_u16 @ int_a, vld1_u16 @ int_b: u16) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsraq_n_u16 = vrsraq_n_u16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_u16 @ int_a, vld1q_u16 @ int_b: u16) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsra_n_u32 = vrsra_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_u32 @ int_a, vld1_u32 @ int_b: u32) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsraq_n_u32 = vrsraq_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_u32 @ int_a, vld1q_u32 @ int_b: u32) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsra_n_u64 = vrsra_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1_u64 @ int_a, vld1_u64 @ int_b: u64) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vrsraq_n_u64 = vrsraq_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1q_u64 @ int_a, vld1q_u64 @ int_b: u64) => |x, y, n| shift_right_accumulate(x, y, n, true);
    test_vsri_n_s8 = vsri_n_s8::<1 2 3 4 5 6 7 8>(vld1_s8 @ int_a, vld1_s8 @ int_b: i8) => shift_right_insert;
    test_vsriq_n_s8 = vsriq_n_s8::<1 2 3 4 5 6 7 8>(vld1q_s8 @ int_a, vld1q_s8 @ int_b: i8) => shift_right_insert;
    test_vsri_n_s16 = vsri_n_s16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1_s16 @ int_a, vld1_s16 @ int_b: i16) => shift_right_insert;
    test_vsriq_n_s16 = vsriq_n_s16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_s16 @ int_a, vld1q_s16 @ int_b: i16) => shift_right_insert;
    test_vsri_n_s32 = vsri_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_s32 @ int_a, vld1_s32 @ int_b: i32) => shift_right_insert;
    test_vsriq_n_s32 = vsriq_n_s32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_s32 @ int_a, vld1q_s32 @ int_b: i32) => shift_right_insert;
    test_vsri_n_s64 = vsri_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1_s64 @ int_a, vld1_s64 @ int_b: i64) => shift_right_insert;
    test_vsriq_n_s64 = vsriq_n_s64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1q_s64 @ int_a, vld1q_s64 @ int_b: i64) => shift_right_insert;
    test_vsri_n_u8 = vsri_n_u8::<1 2 3 4 5 6 7 8>(vld1_u8 @ int_a, vld1_u8 @ int_b: u8) => shift_right_insert;
    test_vsriq_n_u8 = vsriq_n_u8::<1 2 3 4 5 6 7 8>(vld1q_u8 @ int_a, vld1q_u8 @ int_b: u8) => shift_right_insert;
    test_vsri_n_u16 = vsri_n_u16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1_u16 @ int_a, vld1_u16 @ int_b: u16) => shift_right_insert;
    test_vsriq_n_u16 = vsriq_n_u16::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16>(vld1q_u16 @ int_a, vld1q_u16 @ int_b: u16) => shift_right_insert;
    test_vsri_n_u32 = vsri_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1_u32 @ int_a, vld1_u32 @ int_b: u32) => shift_right_insert;
    test_vsriq_n_u32 = vsriq_n_u32::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32>(vld1q_u32 @ int_a, vld1q_u32 @ int_b: u32) => shift_right_insert;
    test_vsri_n_u64 = vsri_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1_u64 @ int_a, vld1_u64 @ int_b: u64) => shift_right_insert;
    test_vsriq_n_u64 = vsriq_n_u64::<1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64>(vld1q_u64 @ int_a, vld1q_u64 @ int_b: u64) => shift_right_insert;
    test_vsli_n_s8 = vsli_n_s8::<0 1 2 3 4 5 6 7>(vld1_s8 @ int_a, vld1_s8 @ int_b: i8) => shift_left_insert;
    test_vsliq_n_s8 = vsliq_n_s8::<0 1 2 3 4 5 6 7>(vld1q_s8 @ int_a, vld1q_s8 @ int_b: i8) => shift_left_insert;
    test_vsli_n_s16 = vsli_n_s16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1_s16 @ int_a, vld1_s16 @ int_b: i16) => shift_left_insert;
    test_vsliq_n_s16 = vsliq_n_s16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_s16 @ int_a, vld1q_s16 @ int_b: i16) => shift_left_insert;
    test_vsli_n_s32 = vsli_n_s32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1_s32 @ int_a, vld1_s32 @ int_b: i32) => shift_left_insert;
    test_vsliq_n_s32 = vsliq_n_s32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1q_s32 @ int_a, vld1q_s32 @ int_b: i32) => shift_left_insert;
    test_vsli_n_s64 = vsli_n_s64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1_s64 @ int_a, vld1_s64 @ int_b: i64) => shift_left_insert;
    test_vsliq_n_s64 = vsliq_n_s64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1q_s64 @ int_a, vld1q_s64 @ int_b: i64) => shift_left_insert;
    test_vsli_n_u8 = vsli_n_u8::<0 1 2 3 4 5 6 7>(vld1_u8 @ int_a, vld1_u8 @ int_b: u8) => shift_left_insert;
    test_vsliq_n_u8 = vsliq_n_u8::<0 1 2 3 4 5 6 7>(vld1q_u8 @ int_a, vld1q_u8 @ int_b: u8) => shift_left_insert;
    test_vsli_n_u16 = vsli_n_u16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1_u16 @ int_a, vld1_u16 @ int_b: u16) => shift_left_insert;
    test_vsliq_n_u16 = vsliq_n_u16::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15>(vld1q_u16 @ int_a, vld1q_u16 @ int_b: u16) => shift_left_insert;
    test_vsli_n_u32 = vsli_n_u32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1_u32 @ int_a, vld1_u32 @ int_b: u32) => shift_left_insert;
    test_vsliq_n_u32 = vsliq_n_u32::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31>(vld1q_u32 @ int_a, vld1q_u32 @ int_b: u32) => shift_left_insert;
    test_vsli_n_u64 = vsli_n_u64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1_u64 @ int_a, vld1_u64 @ int_b: u64) => shift_left_insert;
    test_vsliq_n_u64 = vsliq_n_u64::<0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63>(vld1q_u64 @ int_a, vld1q_u64 @ int_b: u64) => shift_left_insert;
}
