use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

use crate::error::BitmapError;
use crate::pixel::PixelGrid;

/// Encode a grid as an uncompressed 24-bit BMP.
///
/// Fails with [`BitmapError::EmptyGrid`] for a grid with no rows and
/// [`BitmapError::DimensionsTooLarge`] when a header field would overflow.
pub fn encode_bmp(grid: &PixelGrid) -> Result<Vec<u8>, BitmapError> {
    crate::bmp::encode_bmp(grid)
}

/// Encode `grid` and write it to `path`, creating or truncating the file.
///
/// Returns `false` if the file cannot be created or written (the cause is
/// logged). A partially written file is left in place.
pub fn write_image(path: impl AsRef<Path>, grid: &PixelGrid) -> bool {
    let path = path.as_ref();
    match try_write_image(path, grid) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to write {}: {e}", path.display());
            false
        }
    }
}

/// [`write_image`] with the error kept.
pub fn try_write_image(path: impl AsRef<Path>, grid: &PixelGrid) -> Result<(), BitmapError> {
    let bytes = crate::bmp::encode_bmp(grid)?;
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
}
