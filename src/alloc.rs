//! Fallible buffer acquisition.
//!
//! Large kernel buffers are reserved with `try_reserve_exact` so that an
//! allocation failure is reported as a `KernelError` instead of aborting
//! the process.

use crate::error::{KernelError, Result};

/// Reserve an empty vector with room for exactly `len` elements.
pub fn try_with_capacity<T>(buffer: &'static str, len: usize) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| KernelError::Allocation { buffer, len })?;
    Ok(v)
}

/// Reserve a vector of `len` copies of `value`.
pub fn try_filled<T: Clone>(buffer: &'static str, len: usize, value: T) -> Result<Vec<T>> {
    let mut v = try_with_capacity(buffer, len)?;
    v.resize(len, value);
    Ok(v)
}
