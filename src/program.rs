//! Entry point shared by the standalone kernel binaries.
//!
//! Each binary runs one kernel, prints its report lines to stdout, and
//! exits 0. Post-condition checks are skipped so that only kernel work
//! runs. A kernel error prints one diagnostic line to stderr and exits 1.

use std::io::{self, Write};
use std::process;

use crate::report::KernelId;
use crate::suite::{run_kernel_with, Validation};
use crate::telemetry::init_tracing;

/// Run `kernel` as a standalone program. Never returns.
pub fn run_standalone(kernel: KernelId) -> ! {
    init_tracing();
    match run_kernel_with(kernel, Validation::Unchecked) {
        Ok(report) => {
            let mut out = io::stdout().lock();
            if out.write_all(report.stdout().as_bytes()).and_then(|_| out.flush()).is_err() {
                process::exit(1);
            }
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
