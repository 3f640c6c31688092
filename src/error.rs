//! Error types for kernel execution.
//!
//! Allocation failure of a large buffer is the only failure a kernel can
//! hit at runtime. Invariant failures mean a kernel is broken.

use crate::report::KernelId;

/// Result type for kernel operations
pub type Result<T> = std::result::Result<T, KernelError>;

/// Errors surfaced by fallible kernels and the suite dispatcher
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// A large buffer could not be reserved
    #[error("alloc failed: {buffer} ({len} elements)")]
    Allocation { buffer: &'static str, len: usize },

    /// A kernel's post-condition does not hold
    #[error("invariant violation in {kernel}: {message}")]
    Invariant { kernel: KernelId, message: String },
}

impl KernelError {
    pub(crate) fn invariant(kernel: KernelId, message: impl Into<String>) -> Self {
        KernelError::Invariant {
            kernel,
            message: message.into(),
        }
    }
}
