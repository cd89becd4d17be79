//! Rates and reproducibility of the perturbation policy, measured over
//! thousands of windows.

use lanecheck::fixture::Fixture;
use lanecheck::perturb::Perturbation;

const WINDOWS: usize = 4_000;

/// Windows out of `WINDOWS` in which `hit` holds after perturbing.
fn frequency(name: &str, seed: u64, hit: impl Fn(&Fixture) -> bool) -> f64 {
    let rule = Perturbation::for_instruction(name);
    let mut fx = Fixture::new(seed);
    fx.reseed(0);
    let mut hits = 0;
    for i in 0..WINDOWS {
        fx.load_window(i);
        rule.apply(&mut fx);
        if hit(&fx) {
            hits += 1;
        }
    }
    hits as f64 / WINDOWS as f64
}

fn floats(fx: &Fixture) -> impl Iterator<Item = f32> + '_ {
    fx.floats().whole::<f32>().iter().copied()
}

#[test]
fn test_signed_zero_rate() {
    // samples are never exactly zero on their own
    let rate = frequency("vrsqrtsq_f32", 11, |fx| {
        floats(fx).any(|x| x == 0.0 && x.is_sign_negative())
    });
    assert!((0.20..0.30).contains(&rate), "rate {}", rate);
}

#[test]
fn test_nan_rate_for_compares() {
    let rate = frequency("vcltq_f32", 12, |fx| floats(fx).any(f32::is_nan));
    assert!((0.20..0.30).contains(&rate), "rate {}", rate);
}

#[test]
fn test_infinity_rate_for_extremes() {
    let rate = frequency("vpmax_f32", 13, |fx| floats(fx).any(f32::is_infinite));
    assert!((0.20..0.30).contains(&rate), "rate {}", rate);
}

#[test]
fn test_domain_mix_rate() {
    // a mixed window holds an integer sample, or half of one, as a float
    let rate = frequency("vadd_f32", 14, |fx| {
        let ints = fx.ints().whole::<i32>();
        floats(fx).any(|x| ints.iter().any(|&k| x == k as f32 || x == k as f32 * 0.5))
    });
    assert!((0.005..0.03).contains(&rate), "rate {}", rate);
}

#[test]
fn test_unrelated_families_untouched() {
    let rule = Perturbation::for_instruction("vmulq_f32");
    assert_eq!(rule, Perturbation::default());

    let rule = Perturbation::for_instruction("vcage_f32");
    assert!(!rule.relational && !rule.infinities && !rule.invert);
}

#[test]
fn test_perturbation_is_reproducible() {
    let rule = Perturbation::for_instruction("vmaxq_f32");
    let sweep = || {
        let mut fx = Fixture::new(21);
        fx.reseed(7);
        let mut seen = Vec::new();
        for i in 0..300 {
            fx.load_window(i);
            rule.apply(&mut fx);
            seen.extend(fx.floats().whole::<f32>().iter().map(|x| x.to_bits()));
        }
        seen
    };
    assert_eq!(sweep(), sweep());
}
