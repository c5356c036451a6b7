use guessing::{check_guess, evaluate, pick_target, GuessResult, MAX_TARGET, MIN_TARGET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use std::cmp::Ordering;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every drawn target lies inside the playable range, whatever the seed.
    #[test]
    fn picked_target_in_range(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..50 {
            let t = pick_target(&mut rng);
            prop_assert!((MIN_TARGET..=MAX_TARGET).contains(&t));
        }
    }

    /// check_guess is a faithful three-way comparison on all integers.
    #[test]
    fn check_guess_trichotomy(g in any::<i64>(), t in any::<i64>()) {
        let ord = check_guess(g, t);
        prop_assert_eq!(ord == Ordering::Equal, g == t);
        prop_assert_eq!(ord == Ordering::Greater, g > t);
        prop_assert_eq!(ord == Ordering::Less, g < t);
    }

    /// The result signal has the sign of guess - target.
    #[test]
    fn evaluate_signum_matches(g in MIN_TARGET..=MAX_TARGET, t in MIN_TARGET..=MAX_TARGET) {
        let expected = (g as i16 - t as i16).signum() as i8;
        prop_assert_eq!(evaluate(g, t).signum(), expected);
    }
}

#[test]
fn evaluate_known_cases() {
    assert_eq!(evaluate(50, 50), GuessResult::Correct);
    assert_eq!(evaluate(75, 50), GuessResult::TooHigh);
    assert_eq!(evaluate(25, 50), GuessResult::TooLow);
}

#[test]
fn twenty_draws_are_not_all_equal() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let distinct: HashSet<u8> = (0..20).map(|_| pick_target(&mut rng)).collect();
    assert!(distinct.len() > 1, "only {} distinct targets", distinct.len());
}

#[test]
fn thread_rng_draws_vary() {
    let mut rng = rand::rng();
    let distinct: HashSet<u8> = (0..20).map(|_| pick_target(&mut rng)).collect();
    assert!(distinct.len() >= 3);
}

#[test]
fn same_seed_same_targets() {
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    for _ in 0..10 {
        assert_eq!(pick_target(&mut rng1), pick_target(&mut rng2));
    }
}
