//! A single RGBA grid cell and the channel arithmetic shared by every filter.

use serde::{Deserialize, Serialize};

/// One picture cell with four 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    /// Opaque black.
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    /// Opaque white, the color of a blank canvas.
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);

    /// Create a pixel from all four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque pixel.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Take the red, green and blue channels of `color`.
    ///
    /// Alpha is left untouched: only `set_transparency` and the constructors
    /// write the alpha channel.
    #[inline]
    pub fn set_color(&mut self, color: Pixel) {
        self.red = color.red;
        self.green = color.green;
        self.blue = color.blue;
    }

    /// Euclidean distance between the RGB components of two pixels.
    #[inline]
    pub fn color_distance(&self, other: &Pixel) -> f64 {
        let dr = self.red as f64 - other.red as f64;
        let dg = self.green as f64 - other.green as f64;
        let db = self.blue as f64 - other.blue as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Integer mean of the red, green and blue channels.
    #[inline]
    pub fn average(&self) -> u8 {
        ((self.red as u32 + self.green as u32 + self.blue as u32) / 3) as u8
    }

    /// Returns true if every color channel is at or below `limit`.
    #[inline]
    pub fn is_darker_than(&self, limit: u8) -> bool {
        self.red <= limit && self.green <= limit && self.blue <= limit
    }
}

/// Saturate an intermediate channel value into [0, 255].
///
/// All channel arithmetic in this crate goes through here, so overflow
/// clamps instead of wrapping.
#[inline]
pub(crate) fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// `value * numerator / denominator` with truncating integer division.
#[inline]
pub(crate) fn scale_channel(value: u8, numerator: i32, denominator: i32) -> u8 {
    clamp_channel(value as i32 * numerator / denominator)
}
