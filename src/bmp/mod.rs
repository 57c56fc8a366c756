//! 24-bit uncompressed BMP decoder and encoder (internal), plus the
//! little-endian and padding helpers both sides share.
//!
//! Use top-level [`crate::read_image`], [`crate::write_image`], etc.

mod decode;
mod encode;
mod utils;

pub use utils::{read_little_endian, row_padding, row_stride, write_little_endian};

pub(crate) use decode::decode_bmp;
pub(crate) use encode::encode_bmp;
