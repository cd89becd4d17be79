//! Adversarial rewrites of the scratch windows.
//!
//! Before every iteration the driver applies the [`Perturbation`] of the
//! operation under test. Which rules fire depends only on the operation's
//! name; whether a randomized rule fires on a given iteration depends only
//! on the fixture's generator, so a sweep is reproducible from its seed.

use rand::Rng;
use tracing::trace;

use crate::fixture::{Fixture, ScratchPair};

const RECIPROCAL: &[&str] = &["vrecps", "vrecpe"];
const ZERO_SENSITIVE: &[&str] = &["vrecps", "vrecpe", "vrsqrts", "vrsqrte"];
const RELATIONAL: &[&str] = &["vceq", "vcge", "vcle", "vcgt", "vclt"];
const EXTREMES: &[&str] = &["vmax", "vmin", "vpmax", "vpmin", "vmaxnm", "vminnm"];

/// Lanes per float block.
const LANES: usize = 4;

/// The rules that apply to one operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Perturbation {
    /// Replace the first operand's floats by their reciprocals.
    pub invert: bool,
    /// Sometimes scatter `+0.0` and `-0.0` over the first operand.
    pub signed_zeros: bool,
    /// Force an equal lane and sometimes inject NaN.
    pub relational: bool,
    /// Sometimes place infinities in odd lanes.
    pub infinities: bool,
}

/// Family of an intrinsic name: the text before the first `_`.
///
/// `vaddq_s8` belongs to `vadd` through its `q` form; the caller checks
/// both spellings.
fn family(name: &str) -> (&str, Option<&str>) {
    let base = name.split('_').next().unwrap_or(name);
    (base, base.strip_suffix('q'))
}

fn member_of(name: &str, families: &[&str]) -> bool {
    let (base, unquad) = family(name);
    families.contains(&base) || unquad.is_some_and(|b| families.contains(&b))
}

impl Perturbation {
    /// The rules for the intrinsic called `name`.
    pub fn for_instruction(name: &str) -> Self {
        Perturbation {
            invert: member_of(name, RECIPROCAL),
            signed_zeros: member_of(name, ZERO_SENSITIVE),
            relational: member_of(name, RELATIONAL),
            infinities: member_of(name, EXTREMES),
        }
    }

    /// Rewrites the loaded window in place.
    pub fn apply(&self, fixture: &mut Fixture) {
        let (floats, ints, rng) = fixture.scratch_mut();

        if self.invert {
            for x in floats.first_mut::<f32>() {
                *x = 1.0 / *x;
            }
        }

        if self.signed_zeros && rng.random_ratio(1, 4) {
            trace!("injecting signed zeros");
            let lanes: [usize; 8] = std::array::from_fn(|_| rng.random_range(0..LANES));
            let first = floats.first_mut::<f32>();
            for &i in &lanes[..4] {
                first[i] = 0.0;
            }
            for &i in &lanes[4..] {
                first[i] = -0.0;
            }
        }

        if self.relational {
            // Lane 1 is the one 2-lane and narrower views still see.
            for lane in [1, 3] {
                let b = floats.second::<f32>()[lane];
                floats.first_mut::<f32>()[lane] = b;
                let b = ints.second::<i32>()[lane];
                ints.first_mut::<i32>()[lane] = b;
            }

            if rng.random_ratio(1, 4) {
                let (i, j) = (rng.random_range(0..LANES), rng.random_range(0..LANES));
                trace!(i, j, "injecting NaN");
                floats.first_mut::<f32>()[i] = f32::NAN;
                floats.second_mut::<f32>()[j] = f32::NAN;
            }
        }

        if self.infinities && rng.random_ratio(1, 4) {
            let mut odd = || 2 * rng.random_range(0..LANES / 2) + 1;
            let lanes = [odd(), odd(), odd(), odd()];
            trace!(?lanes, "injecting infinities");
            floats.first_mut::<f32>()[lanes[0]] = f32::INFINITY;
            floats.second_mut::<f32>()[lanes[1]] = f32::INFINITY;
            floats.first_mut::<f32>()[lanes[2]] = f32::NEG_INFINITY;
            floats.second_mut::<f32>()[lanes[3]] = f32::NEG_INFINITY;
        }

        mix_domains(floats, ints, rng);
    }
}

/// Occasionally overwrite float lanes with integer samples, and sometimes
/// halve the result, so float operations also see exact integers and
/// exact halves.
fn mix_domains(floats: &mut ScratchPair, ints: &ScratchPair, rng: &mut impl Rng) {
    if !rng.random_ratio(1, 64) {
        return;
    }

    let copy = |floats: &mut ScratchPair, block: usize, lane: usize| {
        let value = if block == 0 {
            ints.first::<i32>()[lane]
        } else {
            ints.second::<i32>()[lane]
        };
        let target = if block == 0 {
            floats.first_mut::<f32>()
        } else {
            floats.second_mut::<f32>()
        };
        target[lane] = value as f32;
    };

    let case = rng.random_range(0..4);
    trace!(case, "mixing integer samples into floats");
    match case {
        0 => {
            for lane in 0..LANES {
                copy(floats, 0, lane);
                copy(floats, 1, lane);
            }
        }
        1 => {
            for block in 0..2 {
                copy(floats, block, rng.random_range(0..LANES));
            }
        }
        2 => {
            for block in 0..2 {
                copy(floats, block, rng.random_range(0..LANES));
                copy(floats, block, rng.random_range(0..LANES));
            }
        }
        _ => {
            for lane in 0..LANES {
                copy(floats, 0, lane);
            }
        }
    }

    if rng.random_ratio(1, 4) {
        trace!("halving floats");
        for x in floats.whole_mut::<f32>() {
            *x *= 0.5;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_follow_family() {
        let p = Perturbation::for_instruction("vrecpsq_f32");
        assert!(p.invert && p.signed_zeros && !p.relational && !p.infinities);

        let p = Perturbation::for_instruction("vrsqrts_f32");
        assert!(!p.invert && p.signed_zeros);

        assert!(Perturbation::for_instruction("vceq_s8").relational);
        assert!(Perturbation::for_instruction("vceqq_u32").relational);
        assert!(Perturbation::for_instruction("vcltq_f32").relational);
        assert!(!Perturbation::for_instruction("vcls_s8").relational);
        assert!(!Perturbation::for_instruction("vcage_f32").relational);

        assert!(Perturbation::for_instruction("vmaxnmq_f32").infinities);
        assert!(Perturbation::for_instruction("vpmin_u16").infinities);
        assert!(!Perturbation::for_instruction("vmax").relational);

        assert_eq!(
            Perturbation::for_instruction("vadd_s8"),
            Perturbation::default()
        );
    }

    #[test]
    fn test_reciprocal_inverts_first_block() {
        let rule = Perturbation {
            invert: true,
            ..Default::default()
        };
        let mut fx = Fixture::new(0);
        let mut inverted = 0;
        for i in 0..256 {
            fx.load_window(i);
            let before = fx.floats().first::<f32>().to_vec();
            rule.apply(&mut fx);
            let after = fx.floats().first::<f32>();
            if before.iter().zip(after).all(|(b, a)| 1.0 / *b == *a) {
                inverted += 1;
            }
        }
        // only the occasional domain mix may undo an inversion
        assert!(inverted > 200, "{} of 256 windows inverted", inverted);
    }

    #[test]
    fn test_relational_forces_equal_lanes() {
        let mut fx = Fixture::new(1);
        let rule = Perturbation::for_instruction("vcge_s16");
        for i in 0..200 {
            fx.load_window(i);
            rule.apply(&mut fx);
            let (a, b) = (fx.ints().first::<i32>(), fx.ints().second::<i32>());
            assert_eq!(a[1], b[1]);
            assert_eq!(a[3], b[3]);
        }
    }

    #[test]
    fn test_relational_equal_lane_inside_low_half() {
        let mut fx = Fixture::new(3);
        let rule = Perturbation::for_instruction("vcge_f32");
        let (mut equal, mut broken) = (0, 0);
        for i in 0..400 {
            fx.load_window(i);
            rule.apply(&mut fx);
            let (a, b) = (fx.floats().first::<f32>(), fx.floats().second::<f32>());
            if a[1].is_nan() || b[1].is_nan() {
                continue;
            }
            if a[1].to_bits() == b[1].to_bits() {
                equal += 1;
            } else {
                broken += 1;
            }
        }
        // a domain mix copying into one block is the only way to split them
        assert!(broken < 20, "lane 1 differs in {} windows", broken);
        assert!(equal > 300, "lane 1 equal in {} windows", equal);
    }

    #[test]
    fn test_extremes_only_touch_odd_lanes() {
        let mut fx = Fixture::new(2);
        let rule = Perturbation::for_instruction("vmax_f32");
        let mut seen = 0;
        for i in 0..400 {
            fx.load_window(i);
            rule.apply(&mut fx);
            for block in [fx.floats().first::<f32>(), fx.floats().second::<f32>()] {
                for (lane, x) in block.iter().enumerate() {
                    if x.is_infinite() {
                        assert_eq!(lane % 2, 1);
                        seen += 1;
                    }
                }
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn test_plain_operations_keep_integer_window() {
        let mut fx = Fixture::new(4);
        let rule = Perturbation::for_instruction("vadd_s32");
        for i in 0..100 {
            fx.load_window(i);
            rule.apply(&mut fx);
            assert_eq!(fx.ints().whole::<i32>(), &fx.pool().ints()[i..i + 8]);
        }
    }
}
