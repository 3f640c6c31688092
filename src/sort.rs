/// LCG fill + Lomuto-partition quicksort.
///
/// The pivot is always the last element of the subrange. No randomized
/// pivot and no introsort fallback: the fixed-pivot cost is what the
/// kernel measures.

use tracing::debug;

use crate::alloc::try_with_capacity;
use crate::error::Result;

/// Buffer length used by the suite.
pub const DEFAULT_LEN: usize = 1_000_000;

pub const LCG_SEED: u32 = 42;
pub const LCG_MULTIPLIER: u32 = 1_103_515_245;
pub const LCG_INCREMENT: u32 = 12_345;
/// Every generated value is reduced modulo this bound.
pub const VALUE_MODULUS: u32 = 100_000;

/// 32-bit linear-congruential generator with wraparound arithmetic.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(LCG_SEED)
    }
}

impl Iterator for Lcg {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        Some(self.state)
    }
}

/// Fill a buffer of `len` values in `[0, VALUE_MODULUS)` from the LCG.
pub fn lcg_fill(len: usize, seed: u32) -> Result<Vec<i32>> {
    let mut data = try_with_capacity("sort buffer", len)?;
    data.extend(
        Lcg::new(seed)
            .take(len)
            .map(|v| (v % VALUE_MODULUS) as i32),
    );
    Ok(data)
}

/// Lomuto partition around the last element. Returns the pivot's final index.
fn partition(data: &mut [i32]) -> usize {
    let hi = data.len() - 1;
    let pivot = data[hi];
    let mut boundary = 0;
    for j in 0..hi {
        if data[j] <= pivot {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, hi);
    boundary
}

/// In-place recursive quicksort.
pub fn quicksort(data: &mut [i32]) {
    if data.len() < 2 {
        return;
    }
    let p = partition(data);
    let (left, right) = data.split_at_mut(p);
    quicksort(left);
    quicksort(&mut right[1..]);
}

/// True if every element is <= its successor.
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Fill, sort, and verify. Returns the sorted buffer and the verdict.
pub fn sort_kernel(len: usize) -> Result<(Vec<i32>, bool)> {
    let mut data = lcg_fill(len, LCG_SEED)?;
    quicksort(&mut data);
    let sorted = is_sorted(&data);
    debug!(len, sorted, "sort complete");
    Ok((data, sorted))
}

pub fn report_lines(len: usize, sorted: bool) -> Vec<String> {
    vec![format!("sort({}) sorted={}", len, sorted)]
}
