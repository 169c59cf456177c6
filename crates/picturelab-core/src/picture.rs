//! The owned pixel grid every transform mutates.

use std::fmt;
use std::ops::{Index, IndexMut};

use image::RgbaImage;

use crate::{Pixel, Region};

/// A dense, row-major grid of [`Pixel`]s with a fixed size.
///
/// Dimensions are always given row-first (`height`, `width`) and cells are
/// addressed as `(row, col)`. Indexing outside the grid panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
    file_name: Option<String>,
}

impl Picture {
    /// Create a blank opaque white picture.
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, Pixel::WHITE)
    }

    /// Create a picture with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `height * width` overflows `usize`.
    pub fn filled(height: usize, width: usize, fill: Pixel) -> Self {
        let Some(len) = height.checked_mul(width) else {
            panic!("a {height}x{width} picture overflows the address space");
        };
        Self {
            width,
            height,
            pixels: vec![fill; len],
            file_name: None,
        }
    }

    /// Create a picture from a row-major RGBA byte buffer.
    ///
    /// Returns `None` if `bytes.len() != height * width * 4`, or if that
    /// product overflows `usize`.
    pub fn from_rgba_bytes(height: usize, width: usize, bytes: &[u8]) -> Option<Self> {
        if Some(bytes.len()) != Self::rgba_len(height, width) {
            return None;
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Pixel::new(c[0], c[1], c[2], c[3]))
            .collect();
        Some(Self {
            width,
            height,
            pixels,
            file_name: None,
        })
    }

    /// Byte length of a `height x width` RGBA buffer, or `None` on overflow.
    pub fn rgba_len(height: usize, width: usize) -> Option<usize> {
        height.checked_mul(width)?.checked_mul(4)
    }

    /// Create a picture from an already decoded bitmap.
    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Pixel::new(p[0], p[1], p[2], p[3]))
            .collect();
        Self {
            width: width as usize,
            height: height as usize,
            pixels,
            file_name: None,
        }
    }

    /// Convert to an `image::RgbaImage` for encoding.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let p = self[(y as usize, x as usize)];
            image::Rgba([p.red, p.green, p.blue, p.alpha])
        })
    }

    /// Row-major RGBA bytes, 4 per pixel.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.red, p.green, p.blue, p.alpha])
            .collect()
    }

    /// Record the file this picture was read from.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The region covering the whole picture.
    pub fn bounds(&self) -> Region {
        Region::whole(self.height, self.width)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = self.offset(row, 0);
        &self.pixels[start..start + self.width]
    }

    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row_mut(&mut self, row: usize) -> &mut [Pixel] {
        let start = self.offset(row, 0);
        let width = self.width;
        &mut self.pixels[start..start + width]
    }

    /// Apply `f` to every pixel inside `region`, row by row.
    ///
    /// An empty region is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if a non-empty region reaches outside the picture.
    pub fn for_each_in_region<F>(&mut self, region: Region, mut f: F)
    where
        F: FnMut(&mut Pixel),
    {
        if region.is_empty() {
            return;
        }
        self.assert_in_bounds(region.end_row - 1, region.end_col - 1);
        for row in region.rows() {
            self.row_mut(row)[region.cols()].iter_mut().for_each(&mut f);
        }
    }

    /// Apply `f` to every pixel of the picture.
    pub fn for_each_pixel<F>(&mut self, f: F)
    where
        F: FnMut(&mut Pixel),
    {
        self.pixels.iter_mut().for_each(f);
    }

    /// Copy the color of `from` onto `to`, keeping `to`'s alpha.
    ///
    /// # Panics
    ///
    /// Panics if either cell lies outside the picture.
    #[inline]
    pub fn copy_color(&mut self, from: (usize, usize), to: (usize, usize)) {
        let color = self[from];
        self[to].set_color(color);
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        self.assert_in_bounds(row, col);
        row * self.width + col
    }

    #[inline]
    fn assert_in_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) is outside a {}x{} picture",
            self.height,
            self.width
        );
    }
}

impl Index<(usize, usize)> for Picture {
    type Output = Pixel;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Pixel {
        &self.pixels[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Picture {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Pixel {
        let offset = self.offset(row, col);
        &mut self.pixels[offset]
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Picture, filename {} height {} width {}",
            self.file_name.as_deref().unwrap_or("None"),
            self.height,
            self.width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_picture_is_white() {
        let pic = Picture::new(3, 5);
        assert_eq!(pic.height(), 3);
        assert_eq!(pic.width(), 5);
        assert!(pic.pixels().iter().all(|p| *p == Pixel::WHITE));
    }

    #[test]
    fn test_index_is_row_major() {
        let mut pic = Picture::new(2, 3);
        pic[(1, 2)] = Pixel::rgb(1, 2, 3);
        assert_eq!(pic.pixels()[5], Pixel::rgb(1, 2, 3));
        assert_eq!(pic.row(1)[2], Pixel::rgb(1, 2, 3));
    }

    #[test]
    fn test_rgba_len() {
        assert_eq!(Picture::rgba_len(2, 3), Some(24));
        assert_eq!(Picture::rgba_len(0, 7), Some(0));
        assert_eq!(Picture::rgba_len(usize::MAX, 2), None);
        assert_eq!(Picture::rgba_len(usize::MAX / 4 + 1, 1), None);
    }

    #[test]
    fn test_from_rgba_bytes_rejects_overflowing_size() {
        // the byte count wraps to 0 without checked arithmetic
        assert!(Picture::from_rgba_bytes(usize::MAX / 4 + 1, 1, &[]).is_none());
        assert!(Picture::from_rgba_bytes(usize::MAX, usize::MAX, &[]).is_none());
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_filled_overflowing_size_panics() {
        let _ = Picture::filled(usize::MAX, 2, Pixel::BLACK);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_column_overflow_panics() {
        // (0, 3) would land on (1, 0) in the flat buffer
        let pic = Picture::new(2, 3);
        let _ = pic[(0, 3)];
    }

    #[test]
    #[should_panic]
    fn test_row_overflow_panics() {
        let pic = Picture::new(2, 3);
        let _ = pic[(2, 0)];
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Picture::new(2, 2);
        let mut copy = original.clone();
        copy[(0, 0)] = Pixel::BLACK;
        assert_eq!(original[(0, 0)], Pixel::WHITE);
    }

    #[test]
    fn test_rgba_bytes_round_trip() {
        let bytes: Vec<u8> = (0..24).collect();
        let pic = Picture::from_rgba_bytes(2, 3, &bytes).unwrap();
        assert_eq!(pic[(0, 1)], Pixel::new(4, 5, 6, 7));
        assert_eq!(pic.to_rgba_bytes(), bytes);
    }

    #[test]
    fn test_rgba_bytes_length_mismatch() {
        assert!(Picture::from_rgba_bytes(2, 3, &[0u8; 10]).is_none());
    }

    #[test]
    fn test_rgba_image_conversion() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgba([9, 8, 7, 6]));
        let pic = Picture::from_rgba_image(&img);
        assert_eq!(pic.height(), 2);
        assert_eq!(pic.width(), 3);
        assert_eq!(pic[(1, 2)], Pixel::new(9, 8, 7, 6));
        assert_eq!(pic.to_rgba_image(), img);
    }

    #[test]
    fn test_for_each_in_region_touches_only_region() {
        let mut pic = Picture::new(4, 4);
        pic.for_each_in_region(Region::new(1, 1, 3, 2), |p| *p = Pixel::BLACK);

        for row in 0..4 {
            for col in 0..4 {
                let expected = if (1..3).contains(&row) && col == 1 {
                    Pixel::BLACK
                } else {
                    Pixel::WHITE
                };
                assert_eq!(pic[(row, col)], expected, "at ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_for_each_in_empty_region_is_noop() {
        let mut pic = Picture::new(2, 2);
        pic.for_each_in_region(Region::new(5, 5, 1, 1), |p| *p = Pixel::BLACK);
        assert!(pic.pixels().iter().all(|p| *p == Pixel::WHITE));
    }

    #[test]
    #[should_panic]
    fn test_for_each_in_region_out_of_bounds_panics() {
        let mut pic = Picture::new(2, 2);
        pic.for_each_in_region(Region::new(0, 0, 2, 3), |p| *p = Pixel::BLACK);
    }

    #[test]
    fn test_copy_color_keeps_target_alpha() {
        let mut pic = Picture::filled(1, 2, Pixel::new(0, 0, 0, 10));
        pic[(0, 0)] = Pixel::new(50, 60, 70, 200);
        pic.copy_color((0, 0), (0, 1));
        assert_eq!(pic[(0, 1)], Pixel::new(50, 60, 70, 10));
    }

    #[test]
    fn test_display() {
        let pic = Picture::new(480, 640).with_file_name("beach.jpg");
        assert_eq!(
            pic.to_string(),
            "Picture, filename beach.jpg height 480 width 640"
        );
    }
}
