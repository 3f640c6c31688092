//! crossbench — Cross-Language Reference Verifier
//!
//! Runs every kernel, compares its report lines against the golden
//! fixture recorded from the reference programs, and checks that two
//! runs of each kernel hash identically.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use crossbench::golden::{find_fixture, load_fixture, verify};
use crossbench::hashing::canonical_hash;
use crossbench::suite::run_all;
use crossbench::telemetry::init_tracing;
use crossbench::{KernelId, KernelReport};

#[derive(Parser, Debug)]
#[command(name = "crossbench", version, about = "Verify kernel outputs against the golden fixture")]
struct Cli {
    /// Fixture path (default: search tests/golden/expected_outputs.json)
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Print the reports as JSON instead of verifying
    #[arg(long)]
    json: bool,

    /// Restrict to one kernel; may be repeated
    #[arg(long = "kernel", value_name = "NAME")]
    kernels: Vec<KernelId>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let kernels: Vec<KernelId> = if cli.kernels.is_empty() {
        KernelId::ALL.to_vec()
    } else {
        cli.kernels.clone()
    };

    if cli.json {
        let reports = run_all(&kernels).unwrap_or_else(|e| fail(&e.to_string()));
        match serde_json::to_string_pretty(&reports) {
            Ok(s) => println!("{}", s),
            Err(e) => fail(&e.to_string()),
        }
        return;
    }

    let path = match cli.fixture {
        Some(p) => p,
        None => find_fixture().unwrap_or_else(|e| fail(&e.to_string())),
    };
    let fixture = load_fixture(&path).unwrap_or_else(|e| fail(&e.to_string()));
    println!("Loaded fixtures from: {}", path.display());

    let verdicts = verify(&fixture, &kernels).unwrap_or_else(|e| fail(&e.to_string()));

    let mut passed = 0;
    for v in &verdicts {
        if v.passed() {
            passed += 1;
            println!("[PASS] {}: {}", v.kernel, v.actual.lines.join(" | "));
            continue;
        }
        println!("[FAIL] {}:", v.kernel);
        if !v.deterministic {
            println!("  Determinism fail: two runs produced different output");
        }
        if v.actual.lines != v.expected.lines {
            println!("  Rust:      {}", v.actual.lines.join(" | "));
            println!("  Reference: {}", v.expected.lines.join(" | "));
        }
    }

    let reports: Vec<KernelReport> = verdicts.iter().map(|v| v.actual.clone()).collect();
    let hash = canonical_hash(&reports);
    info!(%hash, passed, total = verdicts.len(), "verification complete");

    println!("\n===========================================");
    println!("Suite hash: {}", hash);
    println!("Results: {}/{} passed", passed, verdicts.len());
    if passed == verdicts.len() {
        println!("[OK] All cross-language output checks PASSED.");
    } else {
        println!("[FAIL] Some checks failed.");
        process::exit(1);
    }
}

fn fail(message: &str) -> ! {
    error!(reason = message, "crossbench aborted");
    eprintln!("{}", message);
    process::exit(1);
}
