//! Project Euler problems 1 and 3.

/// Sum of all natural numbers below `limit` that are a multiple of any of
/// `divisors`. Zero divisors are ignored.
///
/// Problem 1: `sum_of_multiples(1000, &[3, 5]) == 233168`.
pub fn sum_of_multiples(limit: u64, divisors: &[u64]) -> u64 {
    (1 .. limit)
        .filter(|n| divisors.iter().any(|&d| d != 0 && n % d == 0))
        .sum()
}

/// Largest prime factor of `n`, `None` below 2.
///
/// Problem 3: `largest_prime_factor(600851475143) == Some(6857)`.
pub fn largest_prime_factor(mut n: u64) -> Option<u64> {
    if n < 2 {
        return None;
    }

    let mut largest = None;

    while n % 2 == 0 {
        largest = Some(2);
        n /= 2;
    }

    let mut factor = 3;
    while factor <= n / factor {
        while n % factor == 0 {
            largest = Some(factor);
            n /= factor;
        }
        factor += 2;
    }

    // What is left has no factor below its square root.
    if n > 2 {
        largest = Some(n);
    }

    largest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_multiples() {
        assert_eq!(sum_of_multiples(10, &[3, 5]), 23);
        assert_eq!(sum_of_multiples(1000, &[3, 5]), 233168);
        assert_eq!(sum_of_multiples(10, &[]), 0);
        assert_eq!(sum_of_multiples(10, &[0, 7]), 7);
        assert_eq!(sum_of_multiples(0, &[1]), 0);
    }

    #[test]
    fn test_largest_prime_factor() {
        assert_eq!(largest_prime_factor(13195), Some(29));
        assert_eq!(largest_prime_factor(600851475143), Some(6857));
        assert_eq!(largest_prime_factor(2), Some(2));
        assert_eq!(largest_prime_factor(8), Some(2));
        assert_eq!(largest_prime_factor(97), Some(97));
        assert_eq!(largest_prime_factor(1), None);
        assert_eq!(largest_prime_factor(0), None);
    }

    #[test]
    fn test_largest_prime_factor_near_u64_max() {
        // Largest prime below 2^64, the trial division runs up to its square root.
        assert_eq!(largest_prime_factor(18446744073709551557), Some(18446744073709551557));
        assert_eq!(largest_prime_factor(u64::MAX), Some(6700417));
    }
}
