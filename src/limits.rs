use crate::error::BitmapError;

/// Caps on the pixel grid a BMP header may ask the decoder to build.
///
/// Checked against the header's width and height after the declared file
/// size has been validated and before any pixel buffer is allocated.
/// `None` leaves that dimension unbounded.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Cap on header width times header height.
    pub max_pixels: Option<u64>,
    /// Cap on the decoded grid's size at 3 bytes (red, green, blue) per pixel.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject a header whose width, height or pixel count is over its cap.
    pub(crate) fn check(&self, width: u64, height: u64) -> Result<(), BitmapError> {
        if let Some(max_w) = self.max_width {
            if width > max_w {
                return Err(BitmapError::LimitExceeded(format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if height > max_h {
                return Err(BitmapError::LimitExceeded(format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = width.saturating_mul(height);
            if pixels > max_px {
                return Err(BitmapError::LimitExceeded(format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Reject a grid whose RGB byte size is over `max_memory_bytes`.
    pub(crate) fn check_memory(&self, bytes: u64) -> Result<(), BitmapError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes > max_mem {
                return Err(BitmapError::LimitExceeded(format!(
                    "{bytes}-byte pixel grid exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
