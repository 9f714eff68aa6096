#![warn(clippy::pedantic)]

pub mod coords;
pub mod error;
pub mod fixed;
pub mod float16;
pub mod varint;

pub use coords::{decode_coordinate, decode_coordinates, narrow_delta, undelta};
pub use error::WireError;
pub use fixed::{read_f32_le, read_i32_le, read_u32_le};
pub use float16::{decode_float16, read_float16_le};
pub use varint::{
    Accumulation, decode_varint, decode_varint_with, decode_varuint, decode_varuint_with,
};
