//! Sequence iterator and derived-computation tests.

use deckrs::sequences::{
    Fibonacci, Primes, Ratio, Rationals, is_prime, prime_pair_sum, prime_split_product,
    rationals_within_fib,
};

#[test]
fn ratio_reduces_and_normalizes_sign() {
    assert_eq!(Ratio::new(2, 4), Ratio::new(1, 2));
    assert_eq!(Ratio::new(-2, 4), Ratio::new(1, -2));
    assert_eq!(Ratio::new(1, -2).denominator(), 2);
    assert_eq!(Ratio::new(0, 5), Ratio::ZERO);
    assert_eq!(Ratio::new(6, 3), Ratio::from(2));
}

#[test]
fn ratio_arithmetic() {
    let half = Ratio::new(1, 2);
    let third = Ratio::new(1, 3);

    assert_eq!(half + third, Ratio::new(5, 6));
    assert_eq!(Ratio::new(2, 3) * Ratio::new(3, 4), half);
    assert_eq!(Ratio::from(1) / Ratio::new(1, 3), Ratio::from(3));
    assert!(Ratio::new(2, 3) < Ratio::new(3, 4));
    assert!(Ratio::from(2) > Ratio::new(7, 4));
}

#[test]
fn ratio_displays_like_a_fraction() {
    assert_eq!(Ratio::new(5, 3).to_string(), "5/3");
    assert_eq!(Ratio::from(4).to_string(), "4");
    assert_eq!(Ratio::new(-1, 2).to_string(), "-1/2");
}

#[test]
fn rationals_walk_the_grid_diagonally_skipping_reducible_cells() {
    let prefix: Vec<Ratio> = Rationals::new().take(10).collect();

    let expected = [
        Ratio::from(1),
        Ratio::from(2),
        Ratio::new(1, 2),
        Ratio::new(1, 3),
        Ratio::from(3),
        Ratio::from(4),
        Ratio::new(3, 2),
        Ratio::new(2, 3),
        Ratio::new(1, 4),
        Ratio::new(1, 5),
    ];
    assert_eq!(prefix, expected);
}

#[test]
fn rationals_never_repeat() {
    let prefix: Vec<Ratio> = Rationals::new().take(100).collect();
    let mut seen = std::collections::HashSet::new();
    for ratio in prefix {
        assert!(seen.insert(ratio), "{ratio} appeared twice");
    }
}

#[test]
fn primes_prefix() {
    let prefix: Vec<u64> = Primes::new().take(8).collect();
    assert_eq!(prefix, [2, 3, 5, 7, 11, 13, 17, 19]);
}

#[test]
fn primality_edges() {
    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(is_prime(2));
    assert!(!is_prime(49));
    assert!(is_prime(97));
}

#[test]
fn fibonacci_prefix_and_custom_seeds() {
    let standard: Vec<u64> = Fibonacci::new().take(7).collect();
    assert_eq!(standard, [1, 1, 2, 3, 5, 8, 13]);

    let lucas: Vec<u64> = Fibonacci::with_seeds(2, 1).take(6).collect();
    assert_eq!(lucas, [2, 1, 3, 4, 7, 11]);
}

#[test]
fn prime_split_product_small_cases() {
    assert_eq!(prime_split_product(0), Ratio::from(1));

    // 1, 2, 1/2: the prime-touched product is 2 * 1/2, the rest is 1.
    assert_eq!(prime_split_product(3), Ratio::from(1));

    // Adding 1/3 lands in the prime-touched group.
    assert_eq!(prime_split_product(4), Ratio::new(1, 3));
}

#[test]
fn prime_pair_sum_small_cases() {
    assert_eq!(prime_pair_sum(0), Ratio::ZERO);
    assert_eq!(prime_pair_sum(1), Ratio::from(2));
    assert_eq!(prime_pair_sum(2), Ratio::new(2, 3));

    // 2/3 + 5, the unpaired 5 counting whole.
    assert_eq!(prime_pair_sum(3), Ratio::new(17, 3));

    // 2/3 + 5/7
    assert_eq!(prime_pair_sum(4), Ratio::new(29, 21));
}

#[test]
fn rationals_within_fib_respects_the_budget() {
    assert_eq!(rationals_within_fib(0), Vec::new());

    // Budget 1: only the leading 1 fits.
    assert_eq!(rationals_within_fib(1), vec![Ratio::from(1)]);

    // Budget fib(4) = 3: 1 + 2 exactly exhausts it; 1/2 would overflow.
    assert_eq!(
        rationals_within_fib(4),
        vec![Ratio::from(1), Ratio::from(2)]
    );

    // Budget fib(6) = 8: 1 + 2 + 1/2 + 1/3 + 3 = 41/6; adding 4 would pass 8.
    assert_eq!(
        rationals_within_fib(6),
        vec![
            Ratio::from(1),
            Ratio::from(2),
            Ratio::new(1, 2),
            Ratio::new(1, 3),
            Ratio::from(3),
        ]
    );
}
