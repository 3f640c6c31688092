/// Golden output test — runs the whole suite and asserts every kernel's
/// report and the canonical suite hash match the permanent v1 values.
///
/// This test must NEVER be modified to match new behavior.
/// If it fails, a kernel's observable output has changed.

use std::path::PathBuf;

use crossbench::golden::{load_expected_hash, load_fixture, FIXTURE_PATH, HASH_PATH};
use crossbench::hashing::canonical_hash;
use crossbench::suite::run_all;
use crossbench::{KernelId, KernelReport, SUITE_VERSION};

fn golden(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(rel)
}

fn run_suite() -> Vec<KernelReport> {
    run_all(&KernelId::ALL).expect("suite run failed")
}

#[test]
fn golden_reports_match_fixture() {
    let fixture = load_fixture(&golden(FIXTURE_PATH)).expect("load fixture");
    let reports = run_suite();
    assert_eq!(fixture.len(), KernelId::ALL.len());
    for (expected, actual) in fixture.iter().zip(&reports) {
        assert_eq!(
            actual, expected,
            "GOLDEN TEST FAILED for {}.\n\
             Got:      {:?}\n\
             Expected: {:?}",
            expected.kernel, actual.lines, expected.lines
        );
    }
}

#[test]
fn golden_suite_hash_matches_and_is_deterministic() {
    let expected = load_expected_hash(&golden(HASH_PATH)).expect("load hash");
    let h1 = canonical_hash(&run_suite());
    let h2 = canonical_hash(&run_suite());
    assert_eq!(
        h1, h2,
        "DETERMINISM FAILURE: two suite runs produced different hashes.\n\
         Run 1: {}\n\
         Run 2: {}",
        h1, h2
    );
    assert_eq!(h1, expected, "Suite hash does not match golden hash");
}

#[test]
fn fixture_is_in_canonical_kernel_order() {
    let fixture = load_fixture(&golden(FIXTURE_PATH)).expect("load fixture");
    let order: Vec<KernelId> = fixture.iter().map(|r| r.kernel).collect();
    assert_eq!(order, KernelId::ALL.to_vec());
}

#[test]
fn suite_version_is_one() {
    assert_eq!(SUITE_VERSION, 1, "SUITE_VERSION must be 1 and never change");
}
