use crate::pixel::{Pixel, PixelGrid};

const WHITE_SUM: u16 = 550;
const BLACK_SUM: u16 = 150;

/// Reduce every pixel to black, white, or a pure red/green/blue.
///
/// Channel sums of 550 or more go white, 150 or less go black. Everything
/// else takes the primary of its largest channel, ties resolved red, then
/// green, then blue.
pub fn posterize(image: &PixelGrid) -> PixelGrid {
    image.map_pixels(|px| {
        let sum = u16::from(px.r) + u16::from(px.g) + u16::from(px.b);
        let max = px.r.max(px.g).max(px.b);
        if sum >= WHITE_SUM {
            Pixel::new(255, 255, 255)
        } else if sum <= BLACK_SUM {
            Pixel::new(0, 0, 0)
        } else if px.r == max {
            Pixel::new(255, 0, 0)
        } else if px.g == max {
            Pixel::new(0, 255, 0)
        } else {
            Pixel::new(0, 0, 255)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(px: Pixel) -> Pixel {
        posterize(&PixelGrid::from_fn(1, 1, |_, _| px))[(0, 0)]
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(one(Pixel::new(250, 150, 150)), Pixel::new(255, 255, 255));
        assert_eq!(one(Pixel::new(50, 50, 50)), Pixel::new(0, 0, 0));
        assert_eq!(one(Pixel::new(50, 50, 51)), Pixel::new(0, 0, 255));
    }

    #[test]
    fn ties_prefer_red_then_green() {
        assert_eq!(one(Pixel::new(100, 100, 100)), Pixel::new(255, 0, 0));
        assert_eq!(one(Pixel::new(10, 120, 120)), Pixel::new(0, 255, 0));
    }
}
