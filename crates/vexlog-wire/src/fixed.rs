//! Fixed-width little-endian fields.
//!
//! Besides varints and half floats, the robot logger writes plain 32-bit
//! values as their four in-memory bytes, low byte first:
//!
//! ```text
//! ┌──────────────┬──────┬──────────────────────────────────────┐
//! │ Logger field │ Type │ Reader                               │
//! ├──────────────┼──────┼──────────────────────────────────────┤
//! │ int record   │ i32  │ read_i32_le                          │
//! │ float record │ f32  │ read_f32_le                          │
//! │ pose record  │ f32  │ read_f32_le (x, y, z back to back)   │
//! │ length field │ u32  │ read_u32_le                          │
//! └──────────────┴──────┴──────────────────────────────────────┘
//! ```

use crate::error::WireError;

/// Copy `N` bytes starting at `offset`.
///
/// # Errors
///
/// [`WireError::UnexpectedEndOfBuffer`] naming the first missing byte.
pub(crate) fn read_array<const N: usize>(
    buf: &[u8],
    offset: usize,
) -> Result<[u8; N], WireError> {
    let mut out = [0u8; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let pos = offset.saturating_add(i);
        *slot = *buf
            .get(pos)
            .ok_or(WireError::UnexpectedEndOfBuffer { offset: pos })?;
    }
    Ok(out)
}

/// Read a little-endian `u32` at `offset`.
///
/// # Returns
///
/// `(value, 4)` on success.
///
/// # Errors
///
/// [`WireError::UnexpectedEndOfBuffer`] if fewer than four bytes remain.
pub fn read_u32_le(buf: &[u8], offset: usize) -> Result<(u32, usize), WireError> {
    Ok((u32::from_le_bytes(read_array(buf, offset)?), 4))
}

/// Read a little-endian two's-complement `i32` at `offset`.
///
/// # Errors
///
/// Same as [`read_u32_le`].
pub fn read_i32_le(buf: &[u8], offset: usize) -> Result<(i32, usize), WireError> {
    Ok((i32::from_le_bytes(read_array(buf, offset)?), 4))
}

/// Read a little-endian IEEE 754 `f32` at `offset`.
///
/// NaN payloads are preserved bit for bit.
///
/// # Errors
///
/// Same as [`read_u32_le`].
pub fn read_f32_le(buf: &[u8], offset: usize) -> Result<(f32, usize), WireError> {
    Ok((f32::from_le_bytes(read_array(buf, offset)?), 4))
}
