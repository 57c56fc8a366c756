//! Coordinate-remapping transforms: rotation and nearest-neighbor scaling.

use crate::pixel::PixelGrid;

/// Rotate 90° clockwise. Width and height swap.
///
/// `output[col][height - 1 - row] = input[row][col]`
pub fn rotate_90(image: &PixelGrid) -> PixelGrid {
    let (w, h) = (image.width(), image.height());
    PixelGrid::from_fn(h, w, |row, col| image[(h - 1 - col, row)])
}

/// Rotate clockwise by `quarter_turns` × 90°. Negative values turn
/// counter-clockwise.
pub fn rotate_quarter_turns(image: &PixelGrid, quarter_turns: i64) -> PixelGrid {
    match quarter_turns.rem_euclid(4) {
        0 => image.clone(),
        1 => rotate_90(image),
        2 => rotate_90(&rotate_90(image)),
        _ => rotate_90(&rotate_90(&rotate_90(image))),
    }
}

/// Rotate clockwise by `degrees`, which must be a multiple of 90.
///
/// Any other angle is rejected: a warning is logged and the input is
/// returned unchanged.
pub fn rotate_degrees(image: &PixelGrid, degrees: i64) -> PixelGrid {
    if degrees % 90 != 0 {
        log::warn!("rotation of {degrees}° ignored: angle must be a multiple of 90 degrees");
        return image.clone();
    }
    rotate_quarter_turns(image, degrees.rem_euclid(360) / 90)
}

/// Nearest-neighbor resize by independent horizontal and vertical factors.
///
/// The output is `floor(height * y_scale)` rows by `floor(width * x_scale)`
/// columns, and output `(row, col)` samples input
/// `(floor(row / y_scale), floor(col / x_scale))`.
///
/// Non-finite or non-positive factors, factors that would produce a
/// zero-sized grid from a non-empty input, and outputs too large to
/// allocate are rejected: a warning is logged and the input is returned
/// unchanged.
pub fn scale(image: &PixelGrid, x_scale: f64, y_scale: f64) -> PixelGrid {
    let valid = |s: f64| s.is_finite() && s > 0.0;
    if !valid(x_scale) || !valid(y_scale) {
        log::warn!("scale by ({x_scale}, {y_scale}) ignored: factors must be finite and positive");
        return image.clone();
    }
    let (w, h) = (image.width(), image.height());
    if w == 0 || h == 0 {
        return image.clone();
    }

    let out_w = (w as f64 * x_scale).floor();
    let out_h = (h as f64 * y_scale).floor();
    let addressable = out_w >= 1.0
        && out_h >= 1.0
        && (out_w * out_h) < (usize::MAX / core::mem::size_of::<crate::Pixel>()) as f64;
    if !addressable {
        log::warn!(
            "scale by ({x_scale}, {y_scale}) ignored: {w}x{h} would become {out_w}x{out_h}"
        );
        return image.clone();
    }

    let sampled = PixelGrid::try_from_fn(out_w as usize, out_h as usize, |row, col| {
        let src_row = ((row as f64 / y_scale).floor() as usize).min(h - 1);
        let src_col = ((col as f64 / x_scale).floor() as usize).min(w - 1);
        image[(src_row, src_col)]
    });
    match sampled {
        Some(grid) => grid,
        None => {
            log::warn!(
                "scale by ({x_scale}, {y_scale}) ignored: cannot allocate a {out_w}x{out_h} grid"
            );
            image.clone()
        }
    }
}
