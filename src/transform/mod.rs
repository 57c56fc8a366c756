//! Pixel transforms.
//!
//! Every transform borrows its input and returns a new [`PixelGrid`].
//! Channel math runs in `f64`, truncates toward zero, and is clamped to
//! `0..=255`. An empty input gives an empty output.

mod geometry;
mod palette;
mod tone;

use core::fmt;

pub use geometry::{rotate_90, rotate_degrees, rotate_quarter_turns, scale};
pub use palette::posterize;
pub use tone::{clarendon, darken, grayscale, high_contrast, lighten, vignette};

use crate::pixel::{Pixel, PixelGrid};

/// Factor used by [`Transform::Darken`].
///
/// The catalog entry darkens by a fixed half regardless of input; call
/// [`darken`] directly for another factor.
pub const DARKEN_FACTOR: f64 = 0.5;

/// Truncated mean of the three channels.
pub(crate) fn channel_average(px: Pixel) -> u16 {
    (u16::from(px.r) + u16::from(px.g) + u16::from(px.b)) / 3
}

/// Truncate toward zero and clamp to a channel value. NaN maps to 0.
pub(crate) fn to_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// The transform catalog, with any parameters each entry needs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Transform {
    Vignette,
    /// Split-tone; see [`clarendon`].
    Clarendon { factor: f64 },
    Grayscale,
    Rotate90,
    /// Clockwise rotation by a number of 90° steps.
    Rotate { quarter_turns: i64 },
    /// Nearest-neighbor resize.
    Scale { x: f64, y: f64 },
    HighContrast,
    Lighten { factor: f64 },
    /// Darken by [`DARKEN_FACTOR`].
    Darken,
    Posterize,
}

impl Transform {
    /// Catalog names in menu order.
    pub const NAMES: [&'static str; 10] = [
        "vignette",
        "clarendon",
        "grayscale",
        "rotate-90",
        "rotate",
        "scale",
        "high-contrast",
        "lighten",
        "darken",
        "posterize",
    ];

    /// Run the transform.
    pub fn apply(&self, image: &PixelGrid) -> PixelGrid {
        match *self {
            Self::Vignette => vignette(image),
            Self::Clarendon { factor } => clarendon(image, factor),
            Self::Grayscale => grayscale(image),
            Self::Rotate90 => rotate_90(image),
            Self::Rotate { quarter_turns } => rotate_quarter_turns(image, quarter_turns),
            Self::Scale { x, y } => scale(image, x, y),
            Self::HighContrast => high_contrast(image),
            Self::Lighten { factor } => lighten(image, factor),
            Self::Darken => darken(image, DARKEN_FACTOR),
            Self::Posterize => posterize(image),
        }
    }

    pub fn name(&self) -> &'static str {
        let idx = match self {
            Self::Vignette => 0,
            Self::Clarendon { .. } => 1,
            Self::Grayscale => 2,
            Self::Rotate90 => 3,
            Self::Rotate { .. } => 4,
            Self::Scale { .. } => 5,
            Self::HighContrast => 6,
            Self::Lighten { .. } => 7,
            Self::Darken => 8,
            Self::Posterize => 9,
        };
        Self::NAMES[idx]
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clarendon { factor } | Self::Lighten { factor } => {
                write!(f, "{}({factor})", self.name())
            }
            Self::Rotate { quarter_turns } => {
                write!(f, "{}({})", self.name(), quarter_turns.saturating_mul(90))
            }
            Self::Scale { x, y } => write!(f, "{}({x}, {y})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_menu_order() {
        assert_eq!(Transform::Vignette.name(), "vignette");
        assert_eq!(Transform::Posterize.name(), "posterize");
        assert_eq!(
            Transform::Scale { x: 2.0, y: 0.5 }.to_string(),
            "scale(2, 0.5)"
        );
        assert_eq!(Transform::Rotate { quarter_turns: 3 }.to_string(), "rotate(270)");
        assert_eq!(Transform::NAMES[0], Transform::Vignette.name());
        assert_eq!(Transform::NAMES[9], Transform::Posterize.name());
    }

    #[test]
    fn catalog_darken_ignores_caller_factor() {
        let grid = PixelGrid::from_fn(1, 1, |_, _| Pixel::new(100, 40, 9));
        assert_eq!(Transform::Darken.apply(&grid), darken(&grid, DARKEN_FACTOR));
        assert_eq!(Transform::Darken.apply(&grid)[(0, 0)], Pixel::new(50, 20, 4));
    }

    #[test]
    fn to_channel_truncates_toward_zero() {
        assert_eq!(to_channel(127.99), 127);
        assert_eq!(to_channel(-0.5), 0);
        assert_eq!(to_channel(300.0), 255);
        assert_eq!(to_channel(f64::NAN), 0);
    }

    #[test]
    fn empty_in_empty_out() {
        let empty = PixelGrid::empty();
        for t in [
            Transform::Vignette,
            Transform::Grayscale,
            Transform::Rotate90,
            Transform::Rotate { quarter_turns: 2 },
            Transform::Scale { x: 2.0, y: 2.0 },
            Transform::Posterize,
        ] {
            assert!(t.apply(&empty).is_empty(), "{t}");
        }
    }
}
