//! Golden reference outputs.
//!
//! The fixture is a JSON array of reports recorded from the reference
//! programs. Verification compares each kernel's lines against it and
//! checks that two runs hash identically.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::hashing::canonical_hash;
use crate::report::{KernelId, KernelReport};
use crate::suite::run_kernel;

/// Fixture location relative to the crate root.
pub const FIXTURE_PATH: &str = "tests/golden/expected_outputs.json";

/// Expected suite hash relative to the crate root.
pub const HASH_PATH: &str = "tests/golden/expected_hash.txt";

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not find tests/golden/expected_outputs.json; pass --fixture <path>")]
    NotFound,

    #[error("fixture has no entry for kernel {0}")]
    MissingKernel(KernelId),
}

/// Search the working directory and its parent for the fixture.
pub fn find_fixture() -> Result<PathBuf, FixtureError> {
    let candidates = [PathBuf::from(FIXTURE_PATH), Path::new("..").join(FIXTURE_PATH)];
    candidates
        .into_iter()
        .find(|p| p.exists())
        .ok_or(FixtureError::NotFound)
}

pub fn load_fixture(path: &Path) -> Result<Vec<KernelReport>, FixtureError> {
    let data = fs::read_to_string(path)?;
    let reports: Vec<KernelReport> = serde_json::from_str(&data)?;
    info!(path = %path.display(), kernels = reports.len(), "fixture loaded");
    Ok(reports)
}

pub fn load_expected_hash(path: &Path) -> Result<String, FixtureError> {
    Ok(fs::read_to_string(path)?.trim().to_string())
}

/// Outcome of verifying one kernel.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub kernel: KernelId,
    pub actual: KernelReport,
    pub expected: KernelReport,
    /// Second run produced the same report.
    pub deterministic: bool,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.deterministic && self.actual.lines == self.expected.lines
    }
}

/// Run each kernel twice and compare against its fixture entry.
pub fn verify(
    fixture: &[KernelReport],
    kernels: &[KernelId],
) -> Result<Vec<Verdict>, Box<dyn std::error::Error>> {
    let mut verdicts = Vec::with_capacity(kernels.len());
    for &kernel in kernels {
        let expected = fixture
            .iter()
            .find(|r| r.kernel == kernel)
            .cloned()
            .ok_or(FixtureError::MissingKernel(kernel))?;
        let run1 = run_kernel(kernel)?;
        let run2 = run_kernel(kernel)?;
        verdicts.push(Verdict {
            kernel,
            deterministic: canonical_hash(std::slice::from_ref(&run1))
                == canonical_hash(std::slice::from_ref(&run2)),
            actual: run1,
            expected,
        });
    }
    Ok(verdicts)
}
