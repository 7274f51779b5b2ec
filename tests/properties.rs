use proptest::prelude::*;
use u_combsearch::combination::{
    prepare_numbers, AcceptPolicy, Cell, CombinationRunner, SearchConfig, SignMode,
};

/// Whether `sub` is a positional subsequence of `seq`.
fn is_subsequence(sub: &[f64], seq: &[f64]) -> bool {
    let mut rest = seq.iter();
    sub.iter().all(|v| rest.any(|w| w == v))
}

fn mode_strategy() -> impl Strategy<Value = SignMode> {
    prop_oneof![Just(SignMode::SignedFree), Just(SignMode::SameSignBounded)]
}

fn policy_strategy() -> impl Strategy<Value = AcceptPolicy> {
    prop_oneof![Just(AcceptPolicy::PrefixAccept), Just(AcceptPolicy::Complete)]
}

fn search(
    values: &[i32],
    target: i32,
    tolerance: u8,
    mode: SignMode,
    policy: AcceptPolicy,
) -> (Vec<f64>, Vec<Vec<f64>>) {
    let cells: Vec<Cell> = values.iter().map(|&v| Cell::from(v as f64)).collect();
    let config = SearchConfig::default()
        .with_tolerance(tolerance as f64)
        .with_mode(mode)
        .with_policy(policy);
    let result = CombinationRunner::run(&cells, target as f64, &config).unwrap();
    (result.prepared, result.combinations)
}

proptest! {
    #[test]
    fn combinations_are_sound(
        values in prop::collection::vec(-20i32..=20, 0..10),
        target in -30i32..=30,
        tolerance in 0u8..3,
        mode in mode_strategy(),
        policy in policy_strategy(),
    ) {
        let (prepared, found) = search(&values, target, tolerance, mode, policy);
        for combination in &found {
            prop_assert!(!combination.is_empty());
            let sum: f64 = combination.iter().sum();
            prop_assert!((sum - target as f64).abs() <= tolerance as f64);
            prop_assert!(combination.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(is_subsequence(combination, &prepared));
        }
    }

    #[test]
    fn same_sign_respects_the_target(
        values in prop::collection::vec(-20i32..=20, 0..10),
        target in -30i32..=30,
        tolerance in 0u8..3,
    ) {
        let (_, found) = search(&values, target, tolerance, SignMode::SameSignBounded, AcceptPolicy::PrefixAccept);
        let target = target as f64;
        for combination in &found {
            for &v in combination {
                prop_assert!(v != 0.0);
                if target > 0.0 {
                    prop_assert!(v <= target);
                } else {
                    prop_assert!(v >= target);
                }
            }
        }
        if target == 0.0 {
            prop_assert!(found.is_empty());
        }
    }

    #[test]
    fn prefix_accept_never_extends_an_accepted_combination(
        values in prop::collection::vec(-10i32..=10, 0..9),
        target in -15i32..=15,
        tolerance in 0u8..3,
        mode in mode_strategy(),
    ) {
        let (_, found) = search(&values, target, tolerance, mode, AcceptPolicy::PrefixAccept);
        // emission is depth-first, so an extension would directly follow its prefix
        for pair in found.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(!(b.len() > a.len() && b.starts_with(a)), "{:?} extends {:?}", b, a);
        }
    }

    #[test]
    fn complete_finds_every_subset_in_tolerance(
        values in prop::collection::vec(-6i32..=6, 0..8),
        target in -10i32..=10,
        tolerance in 0u8..2,
    ) {
        let (prepared, found) = search(&values, target, tolerance, SignMode::SignedFree, AcceptPolicy::Complete);
        let n = prepared.len();
        let expected = (1u32..(1 << n))
            .filter(|mask| {
                let sum: f64 = (0..n).filter(|i| mask & (1 << i) != 0).map(|i| prepared[i]).sum();
                (sum - target as f64).abs() <= tolerance as f64
            })
            .count();
        prop_assert_eq!(found.len(), expected);
    }

    #[test]
    fn search_is_deterministic(
        values in prop::collection::vec(-20i32..=20, 0..10),
        target in -30i32..=30,
        mode in mode_strategy(),
    ) {
        let first = search(&values, target, 1, mode, AcceptPolicy::PrefixAccept);
        let second = search(&values, target, 1, mode, AcceptPolicy::PrefixAccept);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_preparation_yields_nothing(
        values in prop::collection::vec(1i32..=20, 0..6),
        tolerance in 0u8..3,
    ) {
        // a zero target admits nothing under SameSignBounded
        prop_assert!(prepare_numbers(
            &values.iter().map(|&v| v as f64).collect::<Vec<_>>(),
            0.0,
            SignMode::SameSignBounded
        )
        .is_empty());
        let (_, found) = search(&values, 0, tolerance, SignMode::SameSignBounded, AcceptPolicy::PrefixAccept);
        prop_assert!(found.is_empty());
    }
}
