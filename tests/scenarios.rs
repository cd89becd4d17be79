//! Concrete behaviours checked directly against the backend, outside the
//! catalogue: fixture layout, saturation, halving, compare masks with NaN,
//! reinterpretation, table lookups, immediate shifts and lane reads.

#![allow(unused_unsafe)]

use lanecheck::fixture::Fixture;
use lanecheck::perturb::Perturbation;
use lanecheck::simd::backend::*;
use lanecheck::simd::traits::Register;
use lanecheck::validate::{validate, validate_bits};

#[test]
fn test_seed_zero_first_window() {
    let mut fx = Fixture::new(0);
    fx.load_window(0);

    assert_eq!(fx.floats().first::<f32>(), &fx.pool().floats()[0..4]);
    assert_eq!(fx.floats().second::<f32>(), &fx.pool().floats()[4..8]);
    assert_eq!(fx.ints().first::<i32>(), &fx.pool().ints()[0..4]);
    assert_eq!(fx.ints().second::<i32>(), &fx.pool().ints()[4..8]);

    let a = fx.ints().first::<i8>();
    let b = fx.ints().second::<i8>();
    let sum = unsafe { vadd_s8(vld1_s8(a.as_ptr()), vld1_s8(b.as_ptr())) };
    let expected: Vec<i8> = (0..8).map(|i| a[i].wrapping_add(b[i])).collect();
    assert_eq!(validate(sum, &expected), Ok(()));
}

#[test]
fn test_saturating_add_clamps() {
    let r = unsafe { vqadd_s8(vdup_n_s8(127), vdup_n_s8(1)) };
    assert_eq!(r.lanes(), vec![127; 8]);

    let r = unsafe { vqadd_s8(vdup_n_s8(-128), vdup_n_s8(-1)) };
    assert_eq!(r.lanes(), vec![-128; 8]);

    let r = unsafe { vqaddq_u16(vdupq_n_u16(65_000), vdupq_n_u16(1_000)) };
    assert_eq!(r.lanes(), vec![u16::MAX; 8]);
}

#[test]
fn test_halving_adds_over_windows() {
    let mut fx = Fixture::new(0);
    for i in 0..500 {
        fx.load_window(i);
        let a = fx.ints().first::<i16>();
        let b = fx.ints().second::<i16>();
        let (va, vb) = unsafe { (vld1_s16(a.as_ptr()), vld1_s16(b.as_ptr())) };

        let halving: Vec<i16> = (0..4)
            .map(|j| ((a[j] as i32 + b[j] as i32) >> 1) as i16)
            .collect();
        let rounding: Vec<i16> = (0..4)
            .map(|j| ((a[j] as i32 + b[j] as i32 + 1) >> 1) as i16)
            .collect();

        assert_eq!(validate(unsafe { vhadd_s16(va, vb) }, &halving), Ok(()));
        assert_eq!(validate(unsafe { vrhadd_s16(va, vb) }, &rounding), Ok(()));
    }
}

#[test]
fn test_compare_masks_with_forced_lane_and_nan() {
    let mut fx = Fixture::new(0);
    let rule = Perturbation::for_instruction("vceqq_f32");
    let mut nan_seen = false;
    let mut equal = 0;

    for i in 0..400 {
        fx.load_window(i);
        rule.apply(&mut fx);
        let a = fx.floats().first::<f32>();
        let b = fx.floats().second::<f32>();
        let mask = unsafe { vceqq_f32(vld1q_f32(a.as_ptr()), vld1q_f32(b.as_ptr())) };
        let lanes = mask.lanes();

        for j in 0..4 {
            let expected = if a[j] == b[j] { u32::MAX } else { 0 };
            assert_eq!(lanes[j], expected, "window {} lane {}", i, j);
        }
        if a[3].is_nan() || b[3].is_nan() {
            nan_seen = true;
            assert_eq!(lanes[3], 0);
        } else if lanes[3] == u32::MAX {
            equal += 1;
        }
    }
    assert!(nan_seen);
    // only a domain mix may break the forced equality
    assert!(equal > 300, "lane 3 equal in {} windows", equal);

    let nan = unsafe { vdupq_n_f32(f32::NAN) };
    let one = unsafe { vdupq_n_f32(1.0) };
    for mask in unsafe {
        [
            vcltq_f32(nan, one),
            vcleq_f32(nan, one),
            vcgtq_f32(one, nan),
            vcgeq_f32(nan, nan),
            vceqq_f32(nan, nan),
        ]
    } {
        assert_eq!(mask.lanes(), vec![0; 4]);
    }
}

#[test]
fn test_low_half_float_compares_see_equal_lane() {
    let mut fx = Fixture::new(0);
    let rule = Perturbation::for_instruction("vcge_f32");
    let mut equal = 0;

    for i in 0..400 {
        fx.load_window(i);
        rule.apply(&mut fx);
        let a = fx.floats().first::<f32>();
        let b = fx.floats().second::<f32>();
        let (va, vb) = unsafe { (vld1_f32(a.as_ptr()), vld1_f32(b.as_ptr())) };
        let (ge, gt) = unsafe { (vcge_f32(va, vb).lanes(), vcgt_f32(va, vb).lanes()) };

        for j in 0..2 {
            let expected = if a[j] >= b[j] { u32::MAX } else { 0 };
            assert_eq!(ge[j], expected, "window {} lane {}", i, j);
        }
        if a[1] == b[1] {
            // the equal branch is where `>=` and `>` part ways
            assert_eq!((ge[1], gt[1]), (u32::MAX, 0), "window {}", i);
            equal += 1;
        }
    }
    assert!(equal > 300, "lane 1 equal in {} windows", equal);
}

#[test]
fn test_reinterpret_round_trip_keeps_bits() {
    let data = [f32::from_bits(0x7fc0_1234), -0.0, f32::NEG_INFINITY, 1.5];
    let v = unsafe { vld1q_f32(data.as_ptr()) };
    let bytes = unsafe { vreinterpretq_u8_f32(v) };
    let back = unsafe { vreinterpretq_f32_u8(bytes) };

    assert_eq!(validate_bits(bytes, v), Ok(()));
    assert_eq!(validate_bits(back, v), Ok(()));
    let words: Vec<u32> = back.lanes().iter().map(|x| x.to_bits()).collect();
    assert_eq!(words, data.iter().map(|x| x.to_bits()).collect::<Vec<_>>());
}

#[test]
fn test_table_lookup_out_of_range() {
    let table = [10u8, 11, 12, 13, 14, 15, 16, 17];
    let index = [0u8, 7, 8, 200, 3, 255, 9, 1];
    let fallback = [90u8, 91, 92, 93, 94, 95, 96, 97];
    let (t, i, f) = unsafe {
        (
            vld1_u8(table.as_ptr()),
            vld1_u8(index.as_ptr()),
            vld1_u8(fallback.as_ptr()),
        )
    };

    let r = unsafe { vtbl1_u8(t, i) };
    assert_eq!(validate(r, &[10, 17, 0, 0, 13, 0, 0, 11]), Ok(()));

    let r = unsafe { vtbx1_u8(f, t, i) };
    assert_eq!(validate(r, &[10, 17, 92, 93, 13, 95, 96, 11]), Ok(()));

    // two registers cover indices 0..16
    let pair = uint8x8x2_t(t, f);
    let r = unsafe { vtbl2_u8(pair, i) };
    assert_eq!(validate(r, &[10, 17, 90, 0, 13, 0, 91, 11]), Ok(()));
}

#[test]
fn test_shift_left_immediate_extremes() {
    let data = [1i8, -1, 127, -128, 3, 0, 64, -65];
    let v = unsafe { vld1_s8(data.as_ptr()) };

    assert_eq!(validate(unsafe { vshl_n_s8::<0>(v) }, &data), Ok(()));

    let expected: Vec<i8> = data.iter().map(|&x| ((x as i32) << 7) as i8).collect();
    assert_eq!(validate(unsafe { vshl_n_s8::<7>(v) }, &expected), Ok(()));
}

#[test]
fn test_get_lane_reads_every_index() {
    let mut fx = Fixture::new(5);
    fx.load_window(17);
    let ints = fx.ints();

    let a = ints.first::<i8>();
    let v = unsafe { vld1_s8(a.as_ptr()) };
    let lanes = unsafe {
        [
            vget_lane_s8::<0>(v),
            vget_lane_s8::<1>(v),
            vget_lane_s8::<2>(v),
            vget_lane_s8::<3>(v),
            vget_lane_s8::<4>(v),
            vget_lane_s8::<5>(v),
            vget_lane_s8::<6>(v),
            vget_lane_s8::<7>(v),
        ]
    };
    assert_eq!(&lanes, &a[..8]);

    let a = ints.first::<u16>();
    let v = unsafe { vld1q_u16(a.as_ptr()) };
    unsafe {
        assert_eq!(vgetq_lane_u16::<0>(v), a[0]);
        assert_eq!(vgetq_lane_u16::<5>(v), a[5]);
        assert_eq!(vgetq_lane_u16::<7>(v), a[7]);
    }

    let a = ints.second::<u64>();
    let v = unsafe { vld1_u64(a.as_ptr()) };
    assert_eq!(unsafe { vget_lane_u64::<0>(v) }, a[0]);

    let a = fx.floats().first::<f32>();
    let v = unsafe { vld1q_f32(a.as_ptr()) };
    unsafe {
        assert_eq!(vgetq_lane_f32::<1>(v).to_bits(), a[1].to_bits());
        assert_eq!(vgetq_lane_f32::<3>(v).to_bits(), a[3].to_bits());
    }
}

#[test]
fn test_float_extremes_follow_arm_rules() {
    let (pz, nz) = unsafe { (vdupq_n_f32(0.0), vdupq_n_f32(-0.0)) };
    let max = unsafe { vmaxq_f32(nz, pz) };
    let min = unsafe { vminq_f32(pz, nz) };
    assert!(max.lanes().iter().all(|x| x.to_bits() == 0));
    assert!(min.lanes().iter().all(|x| x.to_bits() == 0x8000_0000));

    let (nan, one) = unsafe { (vdupq_n_f32(f32::NAN), vdupq_n_f32(1.0)) };
    assert!(unsafe { vmaxq_f32(nan, one) }.lanes().iter().all(|x| x.is_nan()));
    assert_eq!(unsafe { vmaxnmq_f32(nan, one) }.lanes(), vec![1.0; 4]);
}
