use std::path::Path;

use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::PixelGrid;

/// Builder for decoding BMP bytes with optional resource limits.
///
/// ```no_run
/// use bmpfx::{DecodeRequest, Limits};
///
/// let data = std::fs::read("in.bmp")?;
/// let limits = Limits {
///     max_pixels: Some(4096 * 4096),
///     ..Default::default()
/// };
/// let grid = DecodeRequest::new(&data).with_limits(&limits).decode()?;
/// println!("{}x{}", grid.width(), grid.height());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self) -> Result<PixelGrid, BitmapError> {
        crate::bmp::decode_bmp(self.data, self.limits)
    }
}

/// Decode BMP bytes into a pixel grid.
///
/// The only validity check is that the declared file size equals
/// `data offset + stride * height`; no signature check is made.
pub fn decode_bmp(data: &[u8]) -> Result<PixelGrid, BitmapError> {
    DecodeRequest::new(data).decode()
}

/// Read and decode the BMP file at `path`.
///
/// Returns an empty grid (zero rows) if the file cannot be read or is not
/// a bitmap this crate understands. The two cases are not distinguished;
/// the cause is logged at `warn` level.
pub fn read_image(path: impl AsRef<Path>) -> PixelGrid {
    read_image_inner(path.as_ref(), None)
}

/// [`read_image`] with resource limits applied before allocation.
pub fn read_image_with_limits(path: impl AsRef<Path>, limits: &Limits) -> PixelGrid {
    read_image_inner(path.as_ref(), Some(limits))
}

fn read_image_inner(path: &Path, limits: Option<&Limits>) -> PixelGrid {
    let result = std::fs::read(path)
        .map_err(BitmapError::from)
        .and_then(|data| crate::bmp::decode_bmp(&data, limits));
    match result {
        Ok(grid) => grid,
        Err(e) => {
            log::warn!("failed to read {}: {e}", path.display());
            PixelGrid::empty()
        }
    }
}
