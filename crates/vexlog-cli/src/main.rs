/// vexlog command-line tool — decode individual primitives from the robot
/// telemetry stream by hand.
///
/// # Command overview
///
/// ```text
/// vexlog <COMMAND> [OPTIONS]
///
/// Commands:
///   varuint    Decode one unsigned varint from hex bytes
///   varint     Decode one zig-zag signed varint from hex bytes
///   float16    Decode a half-precision float
///   scan       Decode back-to-back varints until the input runs out
///   fixed      Decode a 32-bit little-endian int, length or float
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log decode details to stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                   |
/// |------|-------------------------------------------|
/// | 0    | Success                                   |
/// | 1    | Error (bad hex, truncated varint, etc.)   |
///
/// Results go to stdout, logs and errors to stderr.
use std::process;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use vexlog_wire::Accumulation;

mod cmd_fixed;
mod cmd_float16;
mod cmd_scan;
mod cmd_varint;
mod input;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Decode varints and half floats from vexlog telemetry bytes.
#[derive(Parser)]
#[command(name = "vexlog", version, about = "vexlog telemetry decoding CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decode details to stderr (`RUST_LOG` overrides this).
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode one unsigned varint.
    Varuint(VarintArgs),
    /// Decode one zig-zag signed varint.
    Varint(VarintArgs),
    /// Decode a half-precision float from its bit pattern or two LE bytes.
    Float16(Float16Args),
    /// Decode consecutive varints covering the whole input.
    Scan(ScanArgs),
    /// Decode a fixed-width 32-bit little-endian field.
    Fixed(FixedArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `vexlog varuint` and `vexlog varint`.
///
/// ```text
/// ┌───────────────┬───────────────────────────────────────────────────┐
/// │ Flag          │ Effect                                            │
/// ├───────────────┼───────────────────────────────────────────────────┤
/// │ --offset N    │ Start decoding at byte N (default 0)              │
/// │ --truncate-32 │ Accumulate in 32 bits like the historical reader  │
/// └───────────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct VarintArgs {
    /// Hex bytes, e.g. `ac02` or `"0xAC 02"`.
    pub input: String,

    /// Byte offset of the first varint byte.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Use 32-bit truncating accumulation.
    #[arg(long)]
    pub truncate_32: bool,
}

/// Arguments for `vexlog float16`.
///
/// `BITS` and `--le` are mutually exclusive; supplying neither is reported
/// by the command itself.
#[derive(clap::Args)]
#[command(group(ArgGroup::new("source").args(["bits", "le"])))]
pub struct Float16Args {
    /// The 16-bit pattern, hex with `0x` prefix or decimal.
    pub bits: Option<String>,

    /// Two hex bytes in little-endian order, as the logger writes them.
    #[arg(long)]
    pub le: Option<String>,
}

/// Arguments for `vexlog scan`.
///
/// ```text
/// ┌───────────────┬───────────────────────────────────────────────────┐
/// │ Flag          │ Effect                                            │
/// ├───────────────┼───────────────────────────────────────────────────┤
/// │ --signed      │ Zig-zag decode each value                         │
/// │ --truncate-32 │ Accumulate in 32 bits like the historical reader  │
/// │ --coords      │ Treat values as u16 coordinate deltas (metres)    │
/// └───────────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct ScanArgs {
    /// Hex bytes holding the varints.
    pub input: String,

    /// Zig-zag decode each value.
    #[arg(long)]
    pub signed: bool,

    /// Use 32-bit truncating accumulation.
    #[arg(long)]
    pub truncate_32: bool,

    /// Interpret the values as delta-encoded field coordinates.
    #[arg(long)]
    pub coords: bool,
}

/// Field types understood by `vexlog fixed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FieldKind {
    /// Unsigned 32-bit, e.g. a record length.
    U32,
    /// Signed 32-bit, as written for int records.
    I32,
    /// Single-precision float, as written for float and pose records.
    F32,
}

/// Arguments for `vexlog fixed`.
///
/// ```text
/// ┌───────────────┬───────────────────────────────────────────────────┐
/// │ Flag          │ Effect                                            │
/// ├───────────────┼───────────────────────────────────────────────────┤
/// │ --kind K      │ u32 | i32 | f32 (default f32)                     │
/// │ --offset N    │ Start reading at byte N (default 0)               │
/// │ --count N     │ Read N fields back to back (default 1)            │
/// └───────────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct FixedArgs {
    /// Hex bytes holding the field(s).
    pub input: String,

    /// How to interpret each 4-byte field.
    #[arg(long, value_enum, default_value_t = FieldKind::F32)]
    pub kind: FieldKind,

    /// Byte offset of the first field.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Number of consecutive fields to read.
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

/// Map the `--truncate-32` flag onto the library's accumulation mode.
pub fn accumulation(truncate_32: bool) -> Accumulation {
    if truncate_32 {
        Accumulation::Truncating32
    } else {
        Accumulation::Wide
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Varuint(args) => cmd_varint::run_unsigned(&args),
        Commands::Varint(args) => cmd_varint::run_signed(&args),
        Commands::Float16(args) => cmd_float16::run(&args),
        Commands::Scan(args) => cmd_scan::run(&args),
        Commands::Fixed(args) => cmd_fixed::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
