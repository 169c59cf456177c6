//! Per-pixel color filters.
//!
//! Region filters take a [`Region`] and touch nothing outside it; the rest
//! operate on the whole picture. All arithmetic is integer and truncating,
//! and results are saturated into [0, 255].
//!
//! | Filter | Scope | Effect |
//! |--------|-------|--------|
//! | [`zero_blue`] | whole | blue = 0 |
//! | [`keep_only_blue`] | region | red = green = 0 |
//! | [`negate`] | region | c = 255 - c |
//! | [`grayscale`] | region | r = g = b = mean |
//! | [`posterize`] | region | snap channels to bin midpoints |
//! | [`sepia`] | region | grayscale, then tone by brightness |
//! | [`fix_underwater`] | whole | red x 3 |
//! | [`set_transparency`] | whole | alpha = value |
//! | [`set_background`] | whole | near-black becomes a fill color |
//! | [`edge_detection`] | whole | black/white by neighbour distance |

use log::debug;

use crate::pixel::{clamp_channel, scale_channel};
use crate::{Picture, Pixel, Region};

/// Channels at or below this value on all of red, green and blue count as
/// background for [`set_background`].
pub const BACKGROUND_THRESHOLD: u8 = 10;

/// Red below this after graying is a shadow in [`sepia`].
const SEPIA_SHADOW_LIMIT: u8 = 60;
/// Red below this (and not a shadow) is a midtone in [`sepia`].
const SEPIA_MIDTONE_LIMIT: u8 = 190;

/// Set the blue channel of every pixel to 0.
pub fn zero_blue(picture: &mut Picture) {
    debug!("zero_blue on {}x{}", picture.height(), picture.width());
    picture.for_each_pixel(|p| p.blue = 0);
}

/// Zero red and green inside `region`, leaving blue.
pub fn keep_only_blue(picture: &mut Picture, region: Region) {
    debug!("keep_only_blue {region:?}");
    picture.for_each_in_region(region, |p| {
        p.red = 0;
        p.green = 0;
    });
}

/// Zero green and blue inside `region`, leaving red.
pub fn keep_only_red(picture: &mut Picture, region: Region) {
    debug!("keep_only_red {region:?}");
    picture.for_each_in_region(region, |p| {
        p.green = 0;
        p.blue = 0;
    });
}

/// Zero red and blue inside `region`, leaving green.
pub fn keep_only_green(picture: &mut Picture, region: Region) {
    debug!("keep_only_green {region:?}");
    picture.for_each_in_region(region, |p| {
        p.red = 0;
        p.blue = 0;
    });
}

/// Replace each color channel `c` inside `region` with `255 - c`.
///
/// Applying it twice restores the original pixels.
pub fn negate(picture: &mut Picture, region: Region) {
    debug!("negate {region:?}");
    picture.for_each_in_region(region, |p| {
        p.red = 255 - p.red;
        p.green = 255 - p.green;
        p.blue = 255 - p.blue;
    });
}

/// Set red, green and blue to their integer mean inside `region`.
pub fn grayscale(picture: &mut Picture, region: Region) {
    debug!("grayscale {region:?}");
    picture.for_each_in_region(region, gray_pixel);
}

#[inline]
fn gray_pixel(p: &mut Pixel) {
    let average = p.average();
    p.red = average;
    p.green = average;
    p.blue = average;
}

/// Posterize `region` into `num_bins` equal bins.
///
/// The bin size is `255 / num_bins`. Bin `k` (1-based) is the open interval
/// `((k-1) * size, k * size)`; a channel strictly inside it becomes the
/// integer midpoint of its bounds. Values sitting exactly on a bound, and
/// values above the last bin, are left unchanged.
///
/// # Panics
///
/// Panics if `num_bins` is 0.
pub fn posterize(picture: &mut Picture, region: Region, num_bins: u32) {
    assert!(num_bins > 0, "posterize needs at least one bin");
    debug!("posterize {region:?} into {num_bins} bins");

    let lut = posterize_lut(num_bins);
    picture.for_each_in_region(region, |p| {
        p.red = lut[p.red as usize];
        p.green = lut[p.green as usize];
        p.blue = lut[p.blue as usize];
    });
}

/// Channel lookup table for [`posterize`].
fn posterize_lut(num_bins: u32) -> [u8; 256] {
    let bin_size = 255 / num_bins;
    let mut lut = [0u8; 256];
    for (value, slot) in lut.iter_mut().enumerate() {
        let value = value as u32;
        *slot = (1..=num_bins)
            .map(|bin| (bin_size * (bin - 1), bin_size * bin))
            .find(|&(lower, upper)| value > lower && value < upper)
            .map_or(value, |(lower, upper)| (lower + upper) / 2) as u8;
    }
    lut
}

/// Sepia-tone `region`.
///
/// Each pixel is grayed to its mean, then toned by that gray level:
/// shadows (below 60) scale every channel by 9/10, midtones (below 190)
/// scale blue by 8/10, highlights scale blue by 9/10.
pub fn sepia(picture: &mut Picture, region: Region) {
    debug!("sepia {region:?}");
    picture.for_each_in_region(region, |p| {
        gray_pixel(p);
        if p.red < SEPIA_SHADOW_LIMIT {
            p.red = scale_channel(p.red, 9, 10);
            p.green = scale_channel(p.green, 9, 10);
            p.blue = scale_channel(p.blue, 9, 10);
        } else if p.red < SEPIA_MIDTONE_LIMIT {
            p.blue = scale_channel(p.blue, 8, 10);
        } else {
            p.blue = scale_channel(p.blue, 9, 10);
        }
    });
}

/// Triple the red channel of every pixel, saturating at 255.
pub fn fix_underwater(picture: &mut Picture) {
    debug!("fix_underwater on {}x{}", picture.height(), picture.width());
    picture.for_each_pixel(|p| p.red = scale_channel(p.red, 3, 1));
}

/// Set the alpha channel of every pixel.
pub fn set_transparency(picture: &mut Picture, alpha: u8) {
    debug!("set_transparency {alpha}");
    picture.for_each_pixel(|p| p.alpha = alpha);
}

/// Replace near-black pixels with the given color.
///
/// A pixel is background when red, green and blue are all at most
/// [`BACKGROUND_THRESHOLD`]. Alpha is kept.
pub fn set_background(picture: &mut Picture, red: u8, green: u8, blue: u8) {
    debug!("set_background ({red}, {green}, {blue})");
    let fill = Pixel::rgb(red, green, blue);
    picture.for_each_pixel(|p| {
        if p.is_darker_than(BACKGROUND_THRESHOLD) {
            p.set_color(fill);
        }
    });
}

/// Mark horizontal color edges.
///
/// Each pixel except the last column becomes black when its RGB distance to
/// its right neighbour exceeds `threshold`, white otherwise. The neighbour
/// is read before it is itself rewritten. The last column keeps its
/// original color.
pub fn edge_detection(picture: &mut Picture, threshold: f64) {
    debug!("edge_detection threshold {threshold}");
    for row in 0..picture.height() {
        let cells = picture.row_mut(row);
        for col in 0..cells.len().saturating_sub(1) {
            let right = cells[col + 1];
            let edge = if cells[col].color_distance(&right) > threshold {
                Pixel::BLACK
            } else {
                Pixel::WHITE
            };
            cells[col].set_color(edge);
        }
    }
}

/// Average two channels with truncation.
#[inline]
pub(crate) fn mix_channel(a: u8, b: u8) -> u8 {
    clamp_channel((a as i32 + b as i32) / 2)
}
