//! BMP encoder: uncompressed 24-bit, bottom-up, BITMAPINFOHEADER.

use super::utils::{row_padding, write_little_endian};
use crate::error::BitmapError;
use crate::pixel::PixelGrid;

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const PIXEL_ARRAY_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
/// 72 DPI expressed in pixels per meter.
const RESOLUTION_PPM: u32 = 2835;

/// Encode a grid as a 24-bit BMP.
pub(crate) fn encode_bmp(grid: &PixelGrid) -> Result<Vec<u8>, BitmapError> {
    if grid.is_empty() {
        return Err(BitmapError::EmptyGrid);
    }
    let (w, h) = (grid.width(), grid.height());
    let too_large = || BitmapError::DimensionsTooLarge {
        width: w as u64,
        height: h as u64,
    };

    let row_bytes = (w as u64).checked_mul(3).ok_or_else(too_large)?;
    let pad_bytes = row_padding(row_bytes);
    let pixel_data_size = (row_bytes + pad_bytes)
        .checked_mul(h as u64)
        .ok_or_else(too_large)?;
    let file_size = pixel_data_size
        .checked_add(u64::from(PIXEL_ARRAY_OFFSET))
        .ok_or_else(too_large)?;
    // Every header field is 32 bits wide.
    let (Ok(width), Ok(height), Ok(pixel_data_size), Ok(file_size)) = (
        u32::try_from(w),
        u32::try_from(h),
        u32::try_from(pixel_data_size),
        u32::try_from(file_size),
    ) else {
        return Err(too_large());
    };

    let mut out = Vec::with_capacity(file_size as usize);
    write_bmp_header(&mut out, file_size, pixel_data_size, width, height);

    for row in grid.rows().rev() {
        for px in row {
            out.extend_from_slice(&[px.b, px.g, px.r]);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes as usize));
    }

    log::debug!("encoded {w}x{h} BMP ({file_size} bytes)");
    Ok(out)
}

fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: u32,
    pixel_data_size: u32,
    width: u32,
    height: u32,
) {
    let mut field = |value: u32, count: usize| out.extend(write_little_endian(value, count));

    // File header (14 bytes)
    field(u32::from_le_bytes([b'B', b'M', 0, 0]), 2);
    field(file_size, 4);
    field(0, 4); // reserved
    field(PIXEL_ARRAY_OFFSET, 4);

    // BITMAPINFOHEADER (40 bytes)
    field(INFO_HEADER_SIZE, 4);
    field(width, 4);
    field(height, 4); // positive = bottom-up
    field(1, 2); // planes
    field(24, 2); // bits per pixel
    field(0, 4); // compression (BI_RGB)
    field(pixel_data_size, 4);
    field(RESOLUTION_PPM, 4); // h resolution
    field(RESOLUTION_PPM, 4); // v resolution
    field(0, 4); // colors used
    field(0, 4); // important colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    #[test]
    fn header_layout_for_2x2() {
        let grid = PixelGrid::new(2, 2);
        let out = encode_bmp(&grid).unwrap();
        // stride 8, 2 rows
        assert_eq!(out.len(), 54 + 16);
        assert_eq!(&out[0..2], b"BM");
        assert_eq!(&out[2..6], &70u32.to_le_bytes());
        assert_eq!(&out[6..10], &[0; 4]);
        assert_eq!(&out[10..14], &54u32.to_le_bytes());
        assert_eq!(&out[14..18], &40u32.to_le_bytes());
        assert_eq!(&out[18..22], &2u32.to_le_bytes());
        assert_eq!(&out[22..26], &2u32.to_le_bytes());
        assert_eq!(&out[26..28], &1u16.to_le_bytes());
        assert_eq!(&out[28..30], &24u16.to_le_bytes());
        assert_eq!(&out[30..34], &0u32.to_le_bytes());
        assert_eq!(&out[34..38], &16u32.to_le_bytes());
        assert_eq!(&out[38..42], &2835u32.to_le_bytes());
        assert_eq!(&out[42..46], &2835u32.to_le_bytes());
        assert_eq!(&out[46..54], &[0; 8]);
    }

    #[test]
    fn rows_written_bottom_up_bgr_with_padding() {
        let grid = PixelGrid::from_rows(vec![
            vec![Pixel::new(1, 2, 3)],
            vec![Pixel::new(4, 5, 6)],
        ])
        .unwrap();
        let out = encode_bmp(&grid).unwrap();
        assert_eq!(&out[54..], &[6, 5, 4, 0, 3, 2, 1, 0]);
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(matches!(
            encode_bmp(&PixelGrid::empty()),
            Err(BitmapError::EmptyGrid)
        ));
    }
}
