//! Per-pixel tonal transforms.

use super::{channel_average, to_channel};
use crate::pixel::{Pixel, PixelGrid};

const WHITE: Pixel = Pixel {
    r: 255,
    g: 255,
    b: 255,
};
const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

/// Averages at or above this are highlights for [`clarendon`].
const HIGHLIGHT_AVERAGE: u16 = 170;
/// Averages below this are shadows for [`clarendon`].
const SHADOW_AVERAGE: u16 = 90;
/// Binarization threshold for [`high_contrast`] (255 / 2).
const CONTRAST_THRESHOLD: u16 = 127;

fn brighten(c: u8, factor: f64) -> u8 {
    to_channel(255.0 - (255.0 - f64::from(c)) * factor)
}

fn scale(c: u8, factor: f64) -> u8 {
    to_channel(f64::from(c) * factor)
}

fn map_channels(px: Pixel, f: impl Fn(u8) -> u8) -> Pixel {
    Pixel::new(f(px.r), f(px.g), f(px.b))
}

/// Darken toward the edges: every channel is scaled by
/// `(height - d) / height`, where `d` is the distance from the grid center.
///
/// The center is `(height / 2, width / 2)` in integer division. Pixels
/// farther than `height` from the center go black.
pub fn vignette(image: &PixelGrid) -> PixelGrid {
    let (w, h) = (image.width(), image.height());
    let center_row = (h / 2) as f64;
    let center_col = (w / 2) as f64;
    let rows = h as f64;
    PixelGrid::from_fn(w, h, |row, col| {
        let dr = row as f64 - center_row;
        let dc = col as f64 - center_col;
        let distance = (dr * dr + dc * dc).sqrt();
        let factor = (rows - distance) / rows;
        map_channels(image[(row, col)], |c| scale(c, factor))
    })
}

/// Split-tone: lift highlights (average >= 170) with `255 - (255 - c) * factor`,
/// push shadows (average < 90) down with `c * factor`, keep midtones.
pub fn clarendon(image: &PixelGrid, factor: f64) -> PixelGrid {
    image.map_pixels(|px| {
        let avg = channel_average(px);
        if avg >= HIGHLIGHT_AVERAGE {
            map_channels(px, |c| brighten(c, factor))
        } else if avg < SHADOW_AVERAGE {
            map_channels(px, |c| scale(c, factor))
        } else {
            px
        }
    })
}

/// Replace each channel with the truncated mean of red, green and blue.
pub fn grayscale(image: &PixelGrid) -> PixelGrid {
    image.map_pixels(|px| {
        let gray = channel_average(px) as u8;
        Pixel::new(gray, gray, gray)
    })
}

/// Binarize on the channel average: white at 127 and above, black below.
pub fn high_contrast(image: &PixelGrid) -> PixelGrid {
    image.map_pixels(|px| {
        if channel_average(px) >= CONTRAST_THRESHOLD {
            WHITE
        } else {
            BLACK
        }
    })
}

/// `255 - (255 - c) * factor` per channel. `factor` 1.0 is identity, 0.0 is white.
pub fn lighten(image: &PixelGrid, factor: f64) -> PixelGrid {
    image.map_pixels(|px| map_channels(px, |c| brighten(c, factor)))
}

/// `c * factor` per channel. `factor` 1.0 is identity, 0.0 is black.
pub fn darken(image: &PixelGrid, factor: f64) -> PixelGrid {
    image.map_pixels(|px| map_channels(px, |c| scale(c, factor)))
}
