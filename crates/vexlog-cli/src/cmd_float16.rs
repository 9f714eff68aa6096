/// Implementation of `vexlog float16`.
///
/// ```text
/// $ vexlog float16 0x3C00
/// bits=0x3C00 value=1
/// $ vexlog float16 --le 003c
/// bits=0x3C00 value=1
/// ```
use anyhow::{Context, Result, bail};
use tracing::debug;
use vexlog_wire::{decode_float16, read_float16_le};

use crate::{Float16Args, input};

/// Work out the bit pattern and its value from whichever source was given.
///
/// clap rejects `BITS` together with `--le`; the case of neither lands here.
fn resolve(args: &Float16Args) -> Result<(u16, f64)> {
    match (&args.bits, &args.le) {
        (Some(bits), _) => {
            let bits = input::parse_bits(bits)?;
            Ok((bits, decode_float16(bits)))
        }
        (None, Some(le)) => {
            let bytes = input::parse_hex(le)?;
            if bytes.len() != 2 {
                bail!("--le expects exactly 2 bytes, got {}", bytes.len());
            }
            let (value, _) = read_float16_le(&bytes, 0).context("cannot read half float")?;
            Ok((u16::from_le_bytes([bytes[0], bytes[1]]), value))
        }
        (None, None) => bail!("either BITS or --le is required"),
    }
}

/// Run `vexlog float16`.
///
/// # Errors
///
/// Returns an error if no source is given, the bit pattern does not parse,
/// or `--le` does not hold exactly two bytes.
pub fn run(args: &Float16Args) -> Result<()> {
    let (bits, value) = resolve(args)?;
    debug!(bits, value, "decoded half float");

    println!("bits={bits:#06X} value={value}");
    Ok(())
}
