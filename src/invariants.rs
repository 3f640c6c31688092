/// Post-condition checks for kernel outputs.
///
/// Every check returns `Err(KernelError::Invariant)` on the first
/// violation. The suite runs them after each kernel; a failure means the
/// kernel is broken, not that the environment is.

use crate::error::{KernelError, Result};
use crate::fannkuch::FannkuchResult;
use crate::lookup::Entry;
use crate::report::KernelId;
use crate::sieve::Sieve;

// ---------------------------------------------------------------------------
// Fannkuch
// ---------------------------------------------------------------------------

/// The odometer must visit exactly n! permutations.
pub fn check_fannkuch(result: &FannkuchResult) -> Result<()> {
    let expected: u64 = (1..=result.n as u64).product();
    if result.permutations != expected {
        return Err(KernelError::invariant(
            KernelId::Fannkuch,
            format!(
                "visited {} permutations of {}, expected {}",
                result.permutations, result.n, expected
            ),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Key-value lookup
// ---------------------------------------------------------------------------

/// Entries are `key_<i>`/`value_<i>` in index order.
pub fn check_entries(entries: &[Entry]) -> Result<()> {
    for (i, e) in entries.iter().enumerate() {
        if e.key != format!("key_{}", i) || e.value != format!("value_{}", i) {
            return Err(KernelError::invariant(
                KernelId::KvLookup,
                format!("entry {} is ({:?}, {:?})", i, e.key, e.value),
            ));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Sieve
// ---------------------------------------------------------------------------

/// 0 and 1 are marked; every marked i >= 2 has a prime divisor p <= sqrt(i);
/// every unmarked i >= 2 has none.
pub fn check_sieve(sieve: &Sieve) -> Result<()> {
    let limit = sieve.limit();
    for i in 0..=limit.min(1) {
        if !sieve.is_composite(i) {
            return Err(KernelError::invariant(
                KernelId::PrimesSieve,
                format!("{} is not marked composite", i),
            ));
        }
    }

    let small_primes: Vec<usize> = sieve.primes().take_while(|p| p * p <= limit).collect();
    for i in 2..=limit {
        let has_divisor = small_primes
            .iter()
            .take_while(|&&p| p * p <= i)
            .any(|&p| i % p == 0);
        if has_divisor != sieve.is_composite(i) {
            return Err(KernelError::invariant(
                KernelId::PrimesSieve,
                format!(
                    "{} marked {} but divisor found = {}",
                    i,
                    if sieve.is_composite(i) { "composite" } else { "prime" },
                    has_divisor
                ),
            ));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// `sorted` is non-decreasing and holds the same multiset as `original`.
pub fn check_sorted_permutation(original: &[i32], sorted: &[i32]) -> Result<()> {
    if let Some(i) = sorted.windows(2).position(|w| w[0] > w[1]) {
        return Err(KernelError::invariant(
            KernelId::Sort,
            format!("data[{}] = {} > data[{}] = {}", i, sorted[i], i + 1, sorted[i + 1]),
        ));
    }
    let mut expected = original.to_vec();
    expected.sort_unstable();
    if expected != sorted {
        return Err(KernelError::invariant(
            KernelId::Sort,
            "sorted output is not a permutation of the input",
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

/// Checksum of a perfect tree equals its leaf count, 2^depth.
pub fn check_tree_checksum(depth: u32, checksum: i64) -> Result<()> {
    let leaves = 1i64 << depth;
    if checksum != leaves {
        return Err(KernelError::invariant(
            KernelId::Tree,
            format!("depth {} checksum {} != {} leaves", depth, checksum, leaves),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Floating-point kernels
// ---------------------------------------------------------------------------

pub fn check_finite(kernel: KernelId, what: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(KernelError::invariant(
            kernel,
            format!("{} is not finite: {}", what, value),
        ));
    }
    Ok(())
}
