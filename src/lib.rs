//! # bmpfx
//!
//! Uncompressed 24-bit BMP decoder and encoder, plus a small catalog of
//! pixel transforms over the decoded grid.
//!
//! ## Decoding
//!
//! The decoder reads five little-endian header fields at fixed offsets
//! (file size, pixel array offset, width, height, bits per pixel) and
//! accepts the file only if the declared size equals
//! `offset + stride * height`, where the stride is the row byte count padded
//! to a multiple of 4. Rows are stored bottom-up as blue, green, red; the
//! decoder flips them so row 0 of the [`PixelGrid`] is the top of the image.
//! A 4th byte per pixel (32 bpp) is skipped.
//!
//! ## Encoding
//!
//! The encoder always writes a 14-byte file header, a 40-byte
//! `BITMAPINFOHEADER`, and 24-bit bottom-up rows padded with zeros.
//! Decoding an encoded grid gives back the same grid.
//!
//! ## Non-Goals
//!
//! - Compressed (RLE, bitfields) or palette BMPs
//! - Alpha channels
//! - Interactive front ends; callers drive decode → transform → encode
//!
//! ## Usage
//!
//! ```no_run
//! use bmpfx::{Transform, read_image, write_image};
//!
//! let image = read_image("in.bmp");
//! if image.is_empty() {
//!     eprintln!("not a readable 24-bit BMP");
//!     return;
//! }
//! let out = Transform::Rotate { quarter_turns: 1 }.apply(&image);
//! if !write_image("out.bmp", &out) {
//!     eprintln!("could not write out.bmp");
//! }
//! ```

#![forbid(unsafe_code)]

mod error;
mod limits;
mod pixel;

pub mod bmp;
pub mod transform;

mod decode;
mod encode;

// Re-exports
pub use decode::{DecodeRequest, decode_bmp, read_image, read_image_with_limits};
pub use encode::{encode_bmp, try_write_image, write_image};
pub use error::BitmapError;
pub use limits::Limits;
pub use pixel::{Pixel, PixelGrid};
pub use transform::Transform;
