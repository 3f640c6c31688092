/// Fannkuch-Redux — permutation flip counting.
///
/// Permutations are generated in plain-changes order by a per-position
/// rotation counter (factorial-number-system odometer). The alternating
/// checksum depends on that order, so it must not be replaced by a
/// lexicographic enumeration.

use tracing::debug;

/// Permutation size used by the suite.
pub const DEFAULT_N: usize = 10;

/// Outcome of one Fannkuch-Redux run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FannkuchResult {
    pub n: usize,
    /// Sum of flips, added for even-indexed and subtracted for odd-indexed permutations.
    pub checksum: i64,
    pub max_flips: u32,
    /// Number of permutations visited; always n!.
    pub permutations: u64,
}

impl FannkuchResult {
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            self.checksum.to_string(),
            format!("Pfannkuchen({}) = {}", self.n, self.max_flips),
        ]
    }
}

/// Count prefix reversals until the first element is 0.
/// `perm` is left in its final, flipped state.
pub fn count_flips(perm: &mut [usize]) -> u32 {
    let mut flips = 0;
    let mut k = perm[0];
    while k != 0 {
        perm[..=k].reverse();
        flips += 1;
        k = perm[0];
    }
    flips
}

/// Run Fannkuch-Redux over all permutations of `0..n`. Panics if `n == 0`.
pub fn fannkuch(n: usize) -> FannkuchResult {
    if n == 0 {
        panic!("Fannkuch requires n >= 1, got 0");
    }

    let mut perm1: Vec<usize> = (0..n).collect();
    let mut perm = vec![0usize; n];
    let mut count = vec![0usize; n];
    let mut max_flips = 0;
    let mut checksum: i64 = 0;
    let mut permutations: u64 = 0;
    let mut r = n;

    'outer: loop {
        while r > 1 {
            count[r - 1] = r;
            r -= 1;
        }

        perm.copy_from_slice(&perm1);
        let flips = count_flips(&mut perm);

        max_flips = max_flips.max(flips);
        if permutations % 2 == 0 {
            checksum += i64::from(flips);
        } else {
            checksum -= i64::from(flips);
        }
        permutations += 1;

        // Advance the odometer: rotate the first r+1 elements left by one.
        loop {
            if r == n {
                break 'outer;
            }
            perm1[..=r].rotate_left(1);
            count[r] -= 1;
            if count[r] > 0 {
                break;
            }
            r += 1;
        }
    }

    debug!(n, checksum, max_flips, permutations, "fannkuch complete");

    FannkuchResult {
        n,
        checksum,
        max_flips,
        permutations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_n1_boundary() {
        let r = fannkuch(1);
        assert_eq!(r.checksum, 0);
        assert_eq!(r.max_flips, 0);
        assert_eq!(r.permutations, 1);
    }

    #[test]
    fn test_n2() {
        // [0,1] needs no flips, [1,0] needs one and is odd-indexed.
        let r = fannkuch(2);
        assert_eq!(r.checksum, -1);
        assert_eq!(r.max_flips, 1);
    }

    #[test]
    fn test_n7_reference() {
        let r = fannkuch(7);
        assert_eq!(r.checksum, 228);
        assert_eq!(r.max_flips, 16);
        assert_eq!(r.permutations, 5040);
    }

    #[test]
    fn test_n10_reference() {
        let r = fannkuch(DEFAULT_N);
        assert_eq!(r.checksum, 73196);
        assert_eq!(r.max_flips, 38);
        assert_eq!(r.permutations, 3_628_800);
    }

    #[test]
    fn test_count_flips() {
        let mut p = [0, 1, 2];
        assert_eq!(count_flips(&mut p), 0);
        let mut p = [2, 0, 1];
        // [2,0,1] -> [1,0,2] -> [0,1,2]
        assert_eq!(count_flips(&mut p), 2);
        assert_eq!(p, [0, 1, 2]);
    }

    #[test]
    fn test_report_lines() {
        let r = fannkuch(7);
        assert_eq!(r.report_lines(), vec!["228", "Pfannkuchen(7) = 16"]);
    }

    #[test]
    #[should_panic(expected = "Fannkuch requires n >= 1")]
    fn test_n0_rejected() {
        fannkuch(0);
    }
}
