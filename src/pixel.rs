use core::ops::{Index, IndexMut};

use crate::error::BitmapError;

/// One RGB pixel, 8 bits per channel. No alpha.
pub type Pixel = rgb::RGB8;

/// Rectangular, row-major grid of [`Pixel`]s.
///
/// Row 0 is the topmost visual row. Width and height are fixed for the
/// lifetime of the grid; transforms return a fresh grid instead of
/// mutating their input.
///
/// A grid with zero rows is "empty" and is what [`crate::read_image`]
/// returns on failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// A `width` x `height` grid filled with black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![Pixel::default(); width * height],
            width,
            height,
        }
    }

    /// The empty grid (zero rows).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a row-major buffer. `pixels.len()` must equal `width * height`.
    pub(crate) fn from_raw(pixels: Vec<Pixel>, width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Build a grid by calling `f(row, col)` for every cell, top row first.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Like [`Self::from_fn`], but returns `None` instead of aborting when
    /// the pixel buffer cannot be allocated.
    pub(crate) fn try_from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Pixel,
    ) -> Option<Self> {
        let count = width.checked_mul(height)?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(count).ok()?;
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Some(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, BitmapError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(BitmapError::NotRectangular {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            pixels.extend(cells);
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    /// All pixels, row-major, top row first.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Pixels of one row, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[Pixel] {
        assert!(row < self.height, "row {row} out of bounds (height {})", self.height);
        &self.pixels[row * self.width..(row + 1) * self.width]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator + '_ {
        (0..self.height).map(move |row| &self.pixels[row * self.width..(row + 1) * self.width])
    }

    /// Convert back to nested rows.
    pub fn into_rows(self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }

    /// Apply `f` to every pixel, producing a new grid of the same size.
    pub fn map_pixels(&self, f: impl FnMut(Pixel) -> Pixel) -> Self {
        Self {
            pixels: self.pixels.iter().copied().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Pixel> {
        imgref::ImgRef::new(&self.pixels[..], self.width, self.height)
    }

    /// Copy into an [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<Pixel> {
        imgref::ImgVec::new(self.pixels.clone(), self.width, self.height)
    }
}

impl Index<(usize, usize)> for PixelGrid {
    type Output = Pixel;

    fn index(&self, (row, col): (usize, usize)) -> &Pixel {
        assert!(col < self.width, "column {col} out of bounds (width {})", self.width);
        &self.pixels[row * self.width + col]
    }
}

impl IndexMut<(usize, usize)> for PixelGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Pixel {
        assert!(col < self.width, "column {col} out of bounds (width {})", self.width);
        &mut self.pixels[row * self.width + col]
    }
}

#[cfg(feature = "imgref")]
impl From<imgref::ImgVec<Pixel>> for PixelGrid {
    fn from(img: imgref::ImgVec<Pixel>) -> Self {
        let img = img.as_ref();
        let (width, height) = (img.width(), img.height());
        let pixels = img.rows().flat_map(|row| row.iter().copied()).collect();
        Self {
            pixels,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(v: u8) -> Pixel {
        Pixel::new(v, v, v)
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = PixelGrid::from_rows(vec![vec![px(1), px(2)], vec![px(3)]]).unwrap_err();
        match err {
            BitmapError::NotRectangular {
                row,
                expected,
                actual,
            } => {
                assert_eq!((row, expected, actual), (1, 2, 1));
            }
            other => panic!("expected NotRectangular, got {other:?}"),
        }
    }

    #[test]
    fn rows_are_top_to_bottom() {
        let grid = PixelGrid::from_fn(2, 3, |row, col| px((row * 10 + col) as u8));
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], &[px(0), px(1)]);
        assert_eq!(rows[2], &[px(20), px(21)]);
        assert_eq!(grid[(1, 1)], px(11));
        assert_eq!(grid.get(3, 0), None);
    }

    #[test]
    fn try_from_fn_refuses_oversized_buffers() {
        assert!(PixelGrid::try_from_fn(usize::MAX, 2, |_, _| px(0)).is_none());
        assert!(PixelGrid::try_from_fn(usize::MAX / 4, 2, |_, _| px(0)).is_none());
        let grid = PixelGrid::try_from_fn(2, 1, |_, col| px(col as u8)).unwrap();
        assert_eq!(grid.pixels(), &[px(0), px(1)]);
    }

    #[test]
    fn zero_width_rows_are_not_empty() {
        let grid = PixelGrid::from_rows(vec![vec![], vec![]]).unwrap();
        assert!(!grid.is_empty());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.rows().count(), 2);
        assert!(PixelGrid::empty().is_empty());
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgvec_roundtrip() {
        let grid = PixelGrid::from_fn(3, 2, |row, col| Pixel::new(row as u8, col as u8, 7));
        let img = grid.to_imgvec();
        assert_eq!(img.width(), 3);
        assert_eq!(PixelGrid::from(img), grid);
    }
}
