//! BMP decoder: fixed-offset header fields, size check, bottom-up BGR rows.

use super::utils::{read_little_endian, row_padding};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::{Pixel, PixelGrid};

// Fixed byte offsets into the file + info headers.
const FILE_SIZE_OFFSET: usize = 2;
const DATA_OFFSET_OFFSET: usize = 10;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const BPP_OFFSET: usize = 28;
/// Bytes needed to read every header field above.
const MIN_HEADER_LEN: usize = BPP_OFFSET + 2;

// ── Parsed header ───────────────────────────────────────────────────

/// Header fields needed to locate and walk the pixel array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BmpHeader {
    pub file_size: u32,
    pub data_offset: u32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
}

impl BmpHeader {
    /// Read the header fields. Only fails if the input is too short to
    /// hold them; no signature or compression check is made.
    pub(crate) fn parse(data: &[u8]) -> Result<Self, BitmapError> {
        if data.len() < MIN_HEADER_LEN {
            return Err(BitmapError::UnexpectedEof);
        }
        let field = |offset: usize, count: usize| {
            read_little_endian(&data[offset..], count).ok_or(BitmapError::UnexpectedEof)
        };
        Ok(Self {
            file_size: field(FILE_SIZE_OFFSET, 4)?,
            data_offset: field(DATA_OFFSET_OFFSET, 4)?,
            width: field(WIDTH_OFFSET, 4)?,
            height: field(HEIGHT_OFFSET, 4)?,
            bits_per_pixel: field(BPP_OFFSET, 2)? as u16,
        })
    }

    /// Distance between consecutive pixels within a row.
    fn bytes_per_pixel(&self) -> u64 {
        u64::from(self.bits_per_pixel / 8)
    }

    fn scanline_bytes(&self) -> u64 {
        u64::from(self.width) * self.bytes_per_pixel()
    }

    fn padding(&self) -> u64 {
        row_padding(self.scanline_bytes())
    }

    fn stride(&self) -> u64 {
        self.scanline_bytes() + self.padding()
    }

    /// File size implied by the offset, stride and height.
    fn expected_file_size(&self) -> Result<u64, BitmapError> {
        self.stride()
            .checked_mul(u64::from(self.height))
            .and_then(|array| array.checked_add(u64::from(self.data_offset)))
            .ok_or(BitmapError::DimensionsTooLarge {
                width: u64::from(self.width),
                height: u64::from(self.height),
            })
    }

    /// The one validity check: declared size must equal the computed size.
    pub(crate) fn validate(&self) -> Result<(), BitmapError> {
        let expected = self.expected_file_size()?;
        let declared = u64::from(self.file_size);
        if declared != expected {
            return Err(BitmapError::SizeMismatch { declared, expected });
        }
        Ok(())
    }
}

// ── Full decode ─────────────────────────────────────────────────────

/// Decode a BMP byte buffer into a top-to-bottom pixel grid.
pub(crate) fn decode_bmp(data: &[u8], limits: Option<&Limits>) -> Result<PixelGrid, BitmapError> {
    let header = BmpHeader::parse(data)?;
    header.validate()?;

    let (width, height) = (u64::from(header.width), u64::from(header.height));
    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(width.saturating_mul(height).saturating_mul(3))?;
    }

    let too_large = || BitmapError::DimensionsTooLarge { width, height };
    let w = usize::try_from(header.width).map_err(|_| too_large())?;
    let h = usize::try_from(header.height).map_err(|_| too_large())?;
    let pixel_count = w.checked_mul(h).ok_or_else(too_large)?;

    let stride = header.stride();
    let step = header.bytes_per_pixel();
    let array_start = u64::from(header.data_offset);

    // The last pixel read ends here; the input must reach it before we allocate.
    if width > 0 && height > 0 {
        let last_read_end = (height - 1)
            .checked_mul(stride)
            .and_then(|rows| rows.checked_add((width - 1).checked_mul(step)?))
            .and_then(|off| off.checked_add(array_start + 3))
            .ok_or_else(too_large)?;
        if (data.len() as u64) < last_read_end {
            return Err(BitmapError::UnexpectedEof);
        }
    }

    let mut pixels: Vec<Pixel> = Vec::new();
    pixels.try_reserve_exact(pixel_count).map_err(|_| too_large())?;
    pixels.resize(pixel_count, Pixel::default());
    let mut grid_rows = pixels.chunks_exact_mut(w.max(1));

    // On-disk row k is visual row h-1-k; fill the buffer from the bottom.
    for disk_row in 0..height {
        let row_start = array_start + disk_row * stride;
        let Some(out_row) = grid_rows.next_back() else {
            break;
        };
        for (col, out) in out_row.iter_mut().enumerate() {
            let pos = row_start + col as u64 * step;
            *out = read_bgr(data, pos)?;
        }
    }

    log::debug!(
        "decoded {w}x{h} BMP ({} bpp, stride {stride})",
        header.bits_per_pixel
    );
    Ok(PixelGrid::from_raw(pixels, w, h))
}

/// Read one pixel stored as blue, green, red. Any 4th byte is left unread.
fn read_bgr(data: &[u8], pos: u64) -> Result<Pixel, BitmapError> {
    let pos = usize::try_from(pos).map_err(|_| BitmapError::UnexpectedEof)?;
    match data.get(pos..pos.saturating_add(3)) {
        Some(&[b, g, r]) => Ok(Pixel::new(r, g, b)),
        _ => Err(BitmapError::UnexpectedEof),
    }
}
