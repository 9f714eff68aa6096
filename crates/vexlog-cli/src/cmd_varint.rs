/// Implementation of `vexlog varuint` and `vexlog varint`.
///
/// # Output format
///
/// ```text
/// value=300 consumed=2
/// ```
use anyhow::{Context, Result};
use tracing::debug;
use vexlog_wire::{decode_varint_with, decode_varuint_with};

use crate::{VarintArgs, accumulation, input};

/// Run `vexlog varuint`.
///
/// # Errors
///
/// Returns an error if the hex input is malformed or the bytes at the
/// requested offset do not hold a complete varint.
pub fn run_unsigned(args: &VarintArgs) -> Result<()> {
    let bytes = input::parse_hex(&args.input)?;
    let mode = accumulation(args.truncate_32);
    debug!(len = bytes.len(), offset = args.offset, ?mode, "decoding unsigned varint");

    let (value, consumed) = decode_varuint_with(&bytes, args.offset, mode)
        .with_context(|| format!("cannot decode varint at offset {}", args.offset))?;

    println!("value={value} consumed={consumed}");
    Ok(())
}

/// Run `vexlog varint`.
///
/// # Errors
///
/// Same as [`run_unsigned`].
pub fn run_signed(args: &VarintArgs) -> Result<()> {
    let bytes = input::parse_hex(&args.input)?;
    let mode = accumulation(args.truncate_32);
    debug!(len = bytes.len(), offset = args.offset, ?mode, "decoding zig-zag varint");

    let (value, consumed) = decode_varint_with(&bytes, args.offset, mode)
        .with_context(|| format!("cannot decode varint at offset {}", args.offset))?;

    println!("value={value} consumed={consumed}");
    Ok(())
}
