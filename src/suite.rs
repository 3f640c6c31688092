/// Suite dispatch.
///
/// Runs a kernel with its fixed suite parameters, validates its
/// post-conditions, and packages its report lines. Kernels never call
/// each other; this is the only place that knows all of them.

use tracing::{debug, error};

use crate::error::Result;
use crate::report::{KernelId, KernelReport};
use crate::{fannkuch, fibonacci, invariants, lookup, matrix, nbody, sieve, sort, strscan, tree};

/// Whether post-conditions are checked after the kernel runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Run the invariant checks (verifier and tests).
    Checked,
    /// Kernel work only, as the standalone benchmark programs run it.
    Unchecked,
}

/// Run one kernel at its suite size, validated, and return its report.
pub fn run_kernel(kernel: KernelId) -> Result<KernelReport> {
    run_kernel_with(kernel, Validation::Checked)
}

pub fn run_kernel_with(kernel: KernelId, validation: Validation) -> Result<KernelReport> {
    debug!(%kernel, ?validation, "kernel start");
    let lines = match execute(kernel, validation == Validation::Checked) {
        Ok(lines) => lines,
        Err(e) => {
            error!(%kernel, error = %e, "kernel failed");
            return Err(e);
        }
    };
    debug!(%kernel, lines = lines.len(), "kernel finished");
    Ok(KernelReport::new(kernel, lines))
}

/// Run kernels in order, validated, stopping at the first failure.
pub fn run_all(kernels: &[KernelId]) -> Result<Vec<KernelReport>> {
    kernels.iter().map(|&k| run_kernel(k)).collect()
}

fn execute(kernel: KernelId, validate: bool) -> Result<Vec<String>> {
    match kernel {
        KernelId::Fannkuch => {
            let result = fannkuch::fannkuch(fannkuch::DEFAULT_N);
            if validate {
                invariants::check_fannkuch(&result)?;
            }
            Ok(result.report_lines())
        }
        KernelId::Fib => {
            let n = fibonacci::DEFAULT_N;
            Ok(fibonacci::report_lines(n, fibonacci::fibonacci(n)))
        }
        KernelId::KvLookup => {
            let entries = lookup::build_entries(lookup::DEFAULT_COUNT);
            if validate {
                invariants::check_entries(&entries)?;
            }
            let found = lookup::find_entry(&entries, lookup::DEFAULT_TARGET);
            Ok(lookup::report_lines(found, entries.len()))
        }
        KernelId::MatrixMult => {
            let n = matrix::DEFAULT_N;
            let checksum = matrix::matrix_mult(n);
            if validate {
                invariants::check_finite(kernel, "checksum", checksum)?;
            }
            Ok(matrix::report_lines(n, checksum))
        }
        KernelId::PrimesSieve => {
            let limit = sieve::DEFAULT_LIMIT;
            let s = sieve::sieve(limit)?;
            if validate {
                invariants::check_sieve(&s)?;
            }
            Ok(sieve::report_lines(limit, s.count()))
        }
        KernelId::Sort => {
            let len = sort::DEFAULT_LEN;
            if !validate {
                let (_, ok) = sort::sort_kernel(len)?;
                return Ok(sort::report_lines(len, ok));
            }
            let original = sort::lcg_fill(len, sort::LCG_SEED)?;
            let mut data = original.clone();
            sort::quicksort(&mut data);
            invariants::check_sorted_permutation(&original, &data)?;
            Ok(sort::report_lines(len, sort::is_sorted(&data)))
        }
        KernelId::StringOps => {
            let len = strscan::string_length(strscan::DEFAULT_LEN)?;
            Ok(strscan::report_lines(len))
        }
        KernelId::Tree => {
            let depth = tree::DEFAULT_DEPTH;
            let checksum = tree::tree_checksum(depth);
            if validate {
                invariants::check_tree_checksum(depth, checksum)?;
            }
            Ok(tree::report_lines(checksum))
        }
        KernelId::Nbody => {
            let result = nbody::simulate(nbody::DEFAULT_STEPS);
            if validate {
                invariants::check_finite(kernel, "initial energy", result.initial_energy)?;
                invariants::check_finite(kernel, "final energy", result.final_energy)?;
            }
            Ok(result.report_lines())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_kernels() {
        let reports = run_all(&[KernelId::Fib, KernelId::KvLookup, KernelId::StringOps]).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].lines, vec!["fib(35) = 9227465"]);
        assert_eq!(reports[1].lines, vec!["Found: value_9999", "Count: 10000"]);
        assert_eq!(reports[2].lines, vec!["Length: 100000"]);
    }

    #[test]
    fn test_report_carries_kernel_id() {
        let report = run_kernel(KernelId::Tree).unwrap();
        assert_eq!(report.kernel, KernelId::Tree);
        assert_eq!(report.stdout(), "Checksum: 262144\n");
    }

    #[test]
    fn test_unchecked_matches_checked() {
        for kernel in [KernelId::Fannkuch, KernelId::PrimesSieve, KernelId::Sort] {
            let checked = run_kernel(kernel).unwrap();
            let unchecked = run_kernel_with(kernel, Validation::Unchecked).unwrap();
            assert_eq!(checked, unchecked);
        }
    }

    #[test]
    fn test_empty_selection() {
        assert!(run_all(&[]).unwrap().is_empty());
    }
}
