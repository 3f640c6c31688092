#![forbid(unsafe_code)]

//! crossbench — deterministic kernels of the cross-language benchmark suite.
//!
//! Each kernel is a self-contained, single-threaded computation over a
//! fixed input whose report lines must match the reference programs in
//! every other language byte for byte.

/// Suite v1. Any change to a kernel's output requires a new suite version.
pub const SUITE_VERSION: u32 = 1;

pub mod error;
pub mod alloc;
pub mod fannkuch;
pub mod fibonacci;
pub mod lookup;
pub mod matrix;
pub mod sieve;
pub mod sort;
pub mod strscan;
pub mod tree;
pub mod nbody;
pub mod report;
pub mod invariants;
pub mod suite;
pub mod hashing;
pub mod golden;
pub mod telemetry;
pub mod program;

pub use error::{KernelError, Result};
pub use report::{KernelId, KernelReport};
