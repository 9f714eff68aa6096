/// Implementation of `vexlog scan`.
///
/// Walks the input from offset 0, decoding one varint after another until
/// the bytes run out. Any decode failure aborts the scan before anything is
/// printed.
///
/// # Output format
///
/// ```text
/// offset  len  value
///      0    2  300
///      2    1  -1
/// ```
///
/// With `--coords`, each value is a `u16` delta and a fourth column holds the
/// reconstructed coordinate in metres.
use std::fmt;

use anyhow::{Context, Result, anyhow};
use tracing::debug;
use vexlog_wire::{
    Accumulation, WireError, decode_coordinates, decode_varint_with, decode_varuint_with,
    narrow_delta,
};

use crate::{ScanArgs, accumulation, input};

/// A decoded value, tagged with how it was interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanValue {
    Unsigned(u64),
    Signed(i64),
}

impl fmt::Display for ScanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanValue::Unsigned(v) => write!(f, "{v}"),
            ScanValue::Signed(v) => write!(f, "{v}"),
        }
    }
}

/// One varint found in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanEntry {
    pub offset: usize,
    pub len: usize,
    pub value: ScanValue,
}

/// Decode consecutive varints covering all of `bytes`.
///
/// # Errors
///
/// Propagates the first [`WireError`] hit; a trailing partial varint is
/// reported as [`WireError::UnexpectedEndOfBuffer`].
pub fn scan(bytes: &[u8], signed: bool, mode: Accumulation) -> Result<Vec<ScanEntry>, WireError> {
    let mut entries = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let (value, len) = if signed {
            let (v, len) = decode_varint_with(bytes, offset, mode)?;
            (ScanValue::Signed(v), len)
        } else {
            let (v, len) = decode_varuint_with(bytes, offset, mode)?;
            (ScanValue::Unsigned(v), len)
        };
        entries.push(ScanEntry { offset, len, value });
        offset += len;
    }

    Ok(entries)
}

/// Narrow scanned values to `u16` coordinate deltas.
///
/// # Errors
///
/// Fails on the first signed value or the first value above `u16::MAX`,
/// naming its offset.
pub fn coordinate_deltas(entries: &[ScanEntry]) -> Result<Vec<u16>> {
    entries
        .iter()
        .map(|e| match e.value {
            ScanValue::Unsigned(v) => narrow_delta(v)
                .with_context(|| format!("invalid coordinate delta at offset {}", e.offset)),
            ScanValue::Signed(v) => Err(anyhow!(
                "signed value {v} at offset {} cannot be a coordinate delta",
                e.offset
            )),
        })
        .collect()
}

/// Run `vexlog scan`.
///
/// # Errors
///
/// Returns an error if the hex is malformed, a varint fails to decode, or
/// (with `--coords`) a value is signed or does not fit in 16 bits.
pub fn run(args: &ScanArgs) -> Result<()> {
    let bytes = input::parse_hex(&args.input)?;
    let mode = accumulation(args.truncate_32);

    let entries = scan(&bytes, args.signed, mode).context("scan failed")?;
    debug!(count = entries.len(), bytes = bytes.len(), ?mode, "scanned varints");

    if args.coords {
        let deltas = coordinate_deltas(&entries)?;
        let coords = decode_coordinates(&deltas);

        println!("offset  len  delta  metres");
        for ((entry, delta), metres) in entries.iter().zip(&deltas).zip(coords) {
            println!(
                "{:>6}  {:>3}  {:>5}  {metres:.4}",
                entry.offset, entry.len, delta
            );
        }
    } else {
        println!("offset  len  value");
        for entry in &entries {
            println!("{:>6}  {:>3}  {}", entry.offset, entry.len, entry.value);
        }
    }

    Ok(())
}
