//! Bit-exact comparison of produced registers against reference lanes.
//!
//! Validation is stateless: each function walks the lanes in memory order and
//! reports the first one whose bit pattern differs. Integer lanes are thus
//! compared exactly, float lanes bit for bit with no tolerance.

use crate::error::LaneMismatch;
use crate::simd::traits::{Lane, Register};

/// Compares two lane sequences of the same type.
///
/// # Panics
///
/// Panics if the sequences differ in length; that is a bug in the caller's
/// reference, not a conformance failure.
pub fn validate_lanes<T: Lane>(produced: &[T], expected: &[T]) -> Result<(), LaneMismatch> {
    assert_eq!(
        produced.len(),
        expected.len(),
        "reference has {} lanes, register has {}",
        expected.len(),
        produced.len()
    );
    match produced
        .iter()
        .zip(expected)
        .position(|(p, e)| p.to_bits() != e.to_bits())
    {
        None => Ok(()),
        Some(lane) => Err(LaneMismatch {
            lane,
            width: T::BYTES,
            expected: expected[lane].to_bits(),
            actual: produced[lane].to_bits(),
        }),
    }
}

/// Compares every lane of `produced` against `expected`.
///
/// # Examples
///
/// ```
/// use lanecheck::simd::backend::*;
/// use lanecheck::validate::validate;
///
/// let data = [1i8, 2, 3, 4, 5, 6, 7, 8];
/// let v = unsafe { vld1_s8(data.as_ptr()) };
/// assert!(validate(v, &data).is_ok());
///
/// let mismatch = validate(v, &[1, 2, 3, 0, 5, 6, 7, 8]).unwrap_err();
/// assert_eq!(mismatch.lane, 3);
/// ```
pub fn validate<R: Register>(produced: R, expected: &[R::Lane]) -> Result<(), LaneMismatch> {
    validate_lanes(&produced.lanes(), expected)
}

/// Compares the raw byte images of two registers of possibly different
/// lane types. A mismatch reports the byte index.
pub fn validate_bits<A: Register, B: Register>(produced: A, expected: B) -> Result<(), LaneMismatch> {
    validate_lanes(&produced.to_bytes(), &expected.to_bytes())
}

/// Compares a single scalar, such as the result of a lane read.
pub fn validate_scalar<T: Lane>(produced: T, expected: T) -> Result<(), LaneMismatch> {
    validate_lanes(&[produced], &[expected])
}

#[cfg(test)]
#[allow(unused_unsafe)]
mod tests {
    use super::*;
    use crate::simd::backend::*;

    #[test]
    fn test_matching_register_passes() {
        let data = [1.5f32, -0.0, f32::INFINITY, 7.0];
        let v = unsafe { vld1q_f32(data.as_ptr()) };
        assert_eq!(validate(v, &data), Ok(()));
    }

    #[test]
    fn test_reports_first_differing_lane() {
        let data = [10u16, 20, 30, 40];
        let v = unsafe { vld1_u16(data.as_ptr()) };
        let mismatch = validate(v, &[10, 21, 31, 40]).unwrap_err();

        assert_eq!(mismatch.lane, 1);
        assert_eq!(mismatch.width, 2);
        assert_eq!(mismatch.expected, 21);
        assert_eq!(mismatch.actual, 20);
    }

    #[test]
    fn test_signed_zeros_differ() {
        let v = unsafe { vdup_n_f32(0.0) };
        let mismatch = validate(v, &[0.0, -0.0]).unwrap_err();
        assert_eq!(mismatch.lane, 1);
        assert_eq!(mismatch.expected, 0x8000_0000);
    }

    #[test]
    fn test_nans_compare_by_payload() {
        let nan = f32::from_bits(0x7fc0_0001);
        let v = unsafe { vdup_n_f32(nan) };
        assert!(validate(v, &[nan, nan]).is_ok());
        assert!(validate(v, &[nan, f32::NAN]).is_err());
    }

    #[test]
    fn test_negative_integers_report_lane_width_bits() {
        let v = unsafe { vdup_n_s8(-1) };
        let mismatch = validate(v, &[-1, -1, -1, -1, -1, -1, -1, 0]).unwrap_err();
        assert_eq!(mismatch.lane, 7);
        assert_eq!(mismatch.actual, 0xff);
    }

    #[test]
    fn test_raw_bits_across_lane_types() {
        let v = unsafe { vdup_n_u32(0x3f80_0000) };
        let f = unsafe { vdup_n_f32(1.0) };
        assert!(validate_bits(v, f).is_ok());

        let g = unsafe { vdup_n_f32(-1.0) };
        let mismatch = validate_bits(v, g).unwrap_err();
        assert_eq!(mismatch.lane, 3);
        assert_eq!(mismatch.width, 1);
        assert_eq!(mismatch.expected, 0xbf);
        assert_eq!(mismatch.actual, 0x3f);
    }

    #[test]
    fn test_scalar_validation() {
        assert!(validate_scalar(5u64, 5).is_ok());
        assert_eq!(validate_scalar(-2i16, -3).unwrap_err().lane, 0);
    }

    #[test]
    #[should_panic(expected = "reference has 3 lanes")]
    fn test_length_mismatch_is_a_caller_bug() {
        let v = unsafe { vdup_n_s32(0) };
        let _ = validate(v, &[0, 0, 0]);
    }
}
