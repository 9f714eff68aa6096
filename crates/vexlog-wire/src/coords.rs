//! Field coordinate decoding.
//!
//! The robot logger squeezes particle coordinates (metres on the playing
//! field) into `u16` values before writing them:
//!
//! ```text
//! raw   = coordinate * SCALE + BIAS        (truncated to u16)
//! delta = raw[i] - raw[i - 1]              (wrapping, first element absolute)
//! ```
//!
//! Deltas are then written as varints. This module inverts the last two
//! steps; pulling the varints out of the buffer is the caller's job.

use crate::error::WireError;

/// Raw units per metre. The 140.1" field wall maps onto the full `u16` range.
pub const SCALE: f64 = 467.780_157_031 / 0.0254;

/// Raw value that corresponds to a coordinate of zero.
pub const BIAS: f64 = 35_100.0;

/// Convert one raw (absolute) coordinate back to metres.
#[must_use]
pub fn decode_coordinate(raw: u16) -> f64 {
    (f64::from(raw) - BIAS) / SCALE
}

/// Undo delta encoding: a running wrapping sum over `deltas`.
#[must_use]
pub fn undelta(deltas: &[u16]) -> Vec<u16> {
    deltas
        .iter()
        .scan(0u16, |last, &delta| {
            *last = last.wrapping_add(delta);
            Some(*last)
        })
        .collect()
}

/// Undo delta encoding and convert every element to metres.
#[must_use]
pub fn decode_coordinates(deltas: &[u16]) -> Vec<f64> {
    undelta(deltas).into_iter().map(decode_coordinate).collect()
}

/// Narrow a varint-decoded delta to the 16 bits the logger wrote.
///
/// # Errors
///
/// [`WireError::CoordinateOutOfRange`] if `value` exceeds `u16::MAX`.
pub fn narrow_delta(value: u64) -> Result<u16, WireError> {
    u16::try_from(value).map_err(|_| WireError::CoordinateOutOfRange { value })
}
