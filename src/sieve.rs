/// Sieve of Eratosthenes over `[0, limit]`.
///
/// Flags are composite markers: after sieving, `flags[i]` is true iff
/// `i` is composite or `i < 2`.

use tracing::debug;

use crate::alloc::try_filled;
use crate::error::Result;

/// Upper bound (inclusive) used by the suite.
pub const DEFAULT_LIMIT: usize = 1_000_000;

/// A completed sieve.
#[derive(Debug, Clone)]
pub struct Sieve {
    composite: Vec<bool>,
}

impl Sieve {
    pub fn limit(&self) -> usize {
        self.composite.len() - 1
    }

    pub fn is_composite(&self, i: usize) -> bool {
        self.composite[i]
    }

    pub fn is_prime(&self, i: usize) -> bool {
        !self.composite[i]
    }

    /// Number of unmarked values in `[2, limit]`.
    pub fn count(&self) -> usize {
        self.composite.iter().skip(2).filter(|&&c| !c).count()
    }

    /// Primes in ascending order.
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.composite
            .iter()
            .enumerate()
            .skip(2)
            .filter(|&(_, &c)| !c)
            .map(|(i, _)| i)
    }
}

/// Run the sieve. Fails only if the flag buffer cannot be allocated.
pub fn sieve(limit: usize) -> Result<Sieve> {
    let mut composite = try_filled("sieve flags", limit + 1, false)?;
    for flag in composite.iter_mut().take(2) {
        *flag = true;
    }

    let mut i = 2;
    while i * i <= limit {
        if !composite[i] {
            let mut j = i * i;
            while j <= limit {
                composite[j] = true;
                j += i;
            }
        }
        i += 1;
    }

    debug!(limit, "sieve complete");
    Ok(Sieve { composite })
}

pub fn report_lines(limit: usize, count: usize) -> Vec<String> {
    vec![format!("primes_sieve({}): count = {}", limit, count)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_limit() {
        let s = sieve(30).unwrap();
        let primes: Vec<usize> = s.primes().collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(s.count(), 10);
        assert_eq!(s.limit(), 30);
    }

    #[test]
    fn test_zero_and_one_composite() {
        let s = sieve(10).unwrap();
        assert!(s.is_composite(0));
        assert!(s.is_composite(1));
        assert!(s.is_prime(2));
        assert!(s.is_composite(9));
    }

    #[test]
    fn test_degenerate_limits() {
        assert_eq!(sieve(0).unwrap().count(), 0);
        assert_eq!(sieve(1).unwrap().count(), 0);
        assert_eq!(sieve(2).unwrap().count(), 1);
    }

    #[test]
    fn test_reference_count() {
        let s = sieve(DEFAULT_LIMIT).unwrap();
        assert_eq!(s.count(), 78_498);
        assert_eq!(
            report_lines(DEFAULT_LIMIT, s.count()),
            vec!["primes_sieve(1000000): count = 78498"]
        );
    }

    #[test]
    fn test_composites_have_small_prime_divisor() {
        let s = sieve(10_000).unwrap();
        let small: Vec<usize> = s.primes().take_while(|p| p * p <= 10_000).collect();
        for i in 4..=10_000 {
            if s.is_composite(i) {
                assert!(
                    small.iter().any(|&p| p * p <= i && i % p == 0),
                    "{} marked composite without a divisor",
                    i
                );
            }
        }
    }
}
