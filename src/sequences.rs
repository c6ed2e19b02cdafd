//! Integer sequence iterators and a few derived computations.
//!
//! [`Rationals`] enumerates every positive rational exactly once by walking
//! the numerator/denominator grid along zig-zag diagonals and skipping the
//! cells that are not already reduced. [`Primes`] and [`Fibonacci`] are the
//! matching infinite iterators for their sequences; take a prefix with the
//! standard iterator adapters.
//!
//! Everything here is integer math, so the module works without `std`.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul};

/// A reduced fraction of two integers.
///
/// Always stored with a positive denominator and the numerator and
/// denominator coprime, so structural equality is value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    numerator: i64,
    denominator: i64,
}

impl Ratio {
    /// Zero, as `0/1`.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// One, as `1/1`.
    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a reduced ratio.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self::reduced(i128::from(numerator), i128::from(denominator))
    }

    /// The numerator of the reduced fraction; carries the sign.
    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// The denominator of the reduced fraction; always positive.
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Reduces and normalizes the sign. Arithmetic goes through i128 so
    /// cross-multiplied intermediates cannot overflow.
    fn reduced(numerator: i128, denominator: i128) -> Self {
        assert!(denominator != 0, "ratio denominator must be non-zero");

        let divisor = gcd(numerator, denominator);
        let mut numerator = numerator / divisor;
        let mut denominator = denominator / divisor;
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        Self {
            numerator: numerator as i64,
            denominator: denominator as i64,
        }
    }
}

impl From<i64> for Ratio {
    fn from(whole: i64) -> Self {
        Self {
            numerator: whole,
            denominator: 1,
        }
    }
}

impl fmt::Display for Ratio {
    /// `"5/3"`; whole numbers print without the denominator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Add for Ratio {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::reduced(
            i128::from(self.numerator) * i128::from(rhs.denominator)
                + i128::from(rhs.numerator) * i128::from(self.denominator),
            i128::from(self.denominator) * i128::from(rhs.denominator),
        )
    }
}

impl Mul for Ratio {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::reduced(
            i128::from(self.numerator) * i128::from(rhs.numerator),
            i128::from(self.denominator) * i128::from(rhs.denominator),
        )
    }
}

impl Div for Ratio {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when dividing by zero.
    fn div(self, rhs: Self) -> Self {
        Self::reduced(
            i128::from(self.numerator) * i128::from(rhs.denominator),
            i128::from(self.denominator) * i128::from(rhs.numerator),
        )
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so cross-multiplication keeps the order
        (i128::from(self.numerator) * i128::from(other.denominator))
            .cmp(&(i128::from(other.numerator) * i128::from(self.denominator)))
    }
}

const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a.abs();
    let mut b = b.abs();
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    if a == 0 { 1 } else { a }
}

/// Enumerates every positive rational exactly once, in reduced form.
///
/// Walks the numerator/denominator grid diagonally, bouncing between the
/// two edges, and skips cells whose fraction is not already reduced:
/// `1, 2, 1/2, 1/3, 3, 4, 3/2, 2/3, 1/4, 1/5, ...`
#[derive(Debug, Clone)]
pub struct Rationals {
    numerator: i64,
    denominator: i64,
}

impl Rationals {
    /// Starts the enumeration at `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            numerator: 1,
            denominator: 1,
        }
    }
}

impl Default for Rationals {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Rationals {
    type Item = Ratio;

    fn next(&mut self) -> Option<Ratio> {
        loop {
            let (numerator, denominator) = (self.numerator, self.denominator);
            (self.numerator, self.denominator) = diagonal_step(numerator, denominator);

            if gcd(i128::from(numerator), i128::from(denominator)) == 1 {
                return Some(Ratio::new(numerator, denominator));
            }
        }
    }
}

/// One zig-zag step across the grid, turning at the `numerator == 1` and
/// `denominator == 1` edges.
const fn diagonal_step(numerator: i64, denominator: i64) -> (i64, i64) {
    if denominator == 1 && numerator % 2 == 1 {
        (numerator + 1, denominator)
    } else if numerator == 1 && denominator % 2 == 0 {
        (numerator, denominator + 1)
    } else if (numerator + denominator) % 2 == 0 {
        (numerator + 1, denominator - 1)
    } else {
        (numerator - 1, denominator + 1)
    }
}

/// Infinite iterator over the primes: `2, 3, 5, 7, 11, ...`
#[derive(Debug, Clone)]
pub struct Primes {
    candidate: u64,
}

impl Primes {
    /// Starts at the first prime.
    #[must_use]
    pub const fn new() -> Self {
        Self { candidate: 2 }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let candidate = self.candidate;
            self.candidate += 1;

            if is_prime(candidate) {
                return Some(candidate);
            }
        }
    }
}

/// Primality by trial division — plenty for the prefixes this module deals
/// in.
#[must_use]
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Infinite Fibonacci iterator.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: u64,
    next: u64,
}

impl Fibonacci {
    /// The standard sequence: `1, 1, 2, 3, 5, ...`
    #[must_use]
    pub const fn new() -> Self {
        Self::with_seeds(1, 1)
    }

    /// A generalized sequence growing from the two given seed values.
    #[must_use]
    pub const fn with_seeds(first: u64, second: u64) -> Self {
        Self {
            current: first,
            next: second,
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.current;
        self.current = self.next;
        self.next = current + self.next;
        Some(current)
    }
}

/// Splits the first `count` enumerated rationals by whether their numerator
/// or denominator is prime, and divides the product of the prime-touched
/// group by the product of the rest.
///
/// `1` when `count` is zero.
#[must_use]
pub fn prime_split_product(count: usize) -> Ratio {
    let mut touched = Ratio::ONE;
    let mut untouched = Ratio::ONE;

    for ratio in Rationals::new().take(count) {
        if is_prime(ratio.numerator().unsigned_abs()) || is_prime(ratio.denominator().unsigned_abs())
        {
            touched = touched * ratio;
        } else {
            untouched = untouched * ratio;
        }
    }

    touched / untouched
}

/// Reads the first `count` primes pairwise as fractions — numerator, then
/// denominator — and sums them. An unpaired tail prime counts whole; `0`
/// when `count` is zero.
#[expect(
    clippy::cast_possible_wrap,
    reason = "primes this small fit comfortably in i64"
)]
#[must_use]
pub fn prime_pair_sum(count: usize) -> Ratio {
    let primes: Vec<u64> = Primes::new().take(count).collect();

    primes.chunks(2).fold(Ratio::ZERO, |sum, pair| {
        let fraction = match *pair {
            [numerator, denominator] => Ratio::new(numerator as i64, denominator as i64),
            [whole] => Ratio::from(whole as i64),
            _ => Ratio::ZERO,
        };
        sum + fraction
    })
}

/// Rationals from the enumeration, collected while their running sum stays
/// within the `n`-th Fibonacci number.
///
/// Empty for `n == 0`.
#[expect(
    clippy::cast_possible_wrap,
    reason = "Fibonacci numbers reachable here fit comfortably in i64"
)]
#[must_use]
pub fn rationals_within_fib(n: usize) -> Vec<Ratio> {
    if n == 0 {
        return Vec::new();
    }
    let limit = Ratio::from(Fibonacci::new().nth(n - 1).unwrap_or(1) as i64);

    let mut collected = Vec::new();
    let mut sum = Ratio::ZERO;
    for ratio in Rationals::new() {
        if sum + ratio > limit {
            break;
        }
        sum = sum + ratio;
        collected.push(ratio);
    }
    collected
}
