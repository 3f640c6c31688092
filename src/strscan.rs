/// String scan: allocate, fill, and measure a byte buffer.

use crate::alloc::try_filled;
use crate::error::Result;

/// Buffer length used by the suite.
pub const DEFAULT_LEN: usize = 100_000;

pub const FILL_BYTE: u8 = b'x';

/// Length of the buffer up to its first NUL byte (or its end).
pub fn scan_len(buf: &[u8]) -> usize {
    buf.iter().take_while(|&&b| b != 0).count()
}

/// Allocate `len` bytes of `'x'` and return the scanned length.
/// The buffer is released before returning.
pub fn string_length(len: usize) -> Result<usize> {
    let buf = try_filled("string buffer", len, FILL_BYTE)?;
    Ok(scan_len(&buf))
}

pub fn report_lines(len: usize) -> Vec<String> {
    vec![format!("Length: {}", len)]
}
