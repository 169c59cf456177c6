//! Composite operations that read from a source picture and write into a
//! destination picture.
//!
//! Source and destination are always distinct values, so a picture can
//! never be composited onto itself.

use std::ops::Range;

use log::debug;

use crate::filters::mix_channel;
use crate::{Picture, Pixel};

/// Paste `source` into `dest` with its top-left corner at
/// (`dest_row`, `dest_col`).
///
/// The copy is clipped independently on each axis to whichever of source or
/// destination runs out first. Destination alpha is kept.
pub fn copy(dest: &mut Picture, source: &Picture, dest_row: usize, dest_col: usize) {
    debug!(
        "copy {}x{} picture to ({dest_row}, {dest_col})",
        source.height(),
        source.width()
    );
    blit(dest, source, dest_row, dest_col, |to, from| to.set_color(from));
}

/// Like [`copy`], but each destination channel becomes the truncated mean
/// of itself and the source channel.
pub fn copy_and_mix_colors(dest: &mut Picture, source: &Picture, dest_row: usize, dest_col: usize) {
    debug!(
        "copy_and_mix_colors {}x{} picture to ({dest_row}, {dest_col})",
        source.height(),
        source.width()
    );
    blit(dest, source, dest_row, dest_col, |to, from| {
        to.red = mix_channel(from.red, to.red);
        to.green = mix_channel(from.green, to.green);
        to.blue = mix_channel(from.blue, to.blue);
    });
}

/// Copy the `source_rows x source_cols` crop of `source` into `dest` with
/// its top-left corner at (`dest_row`, `dest_col`).
///
/// Unlike [`copy`] there is no clipping.
///
/// # Panics
///
/// Panics if the crop reaches outside `source` or the pasted block reaches
/// outside `dest`.
pub fn crop_and_copy(
    dest: &mut Picture,
    source: &Picture,
    source_rows: Range<usize>,
    source_cols: Range<usize>,
    dest_row: usize,
    dest_col: usize,
) {
    debug!("crop_and_copy rows {source_rows:?} cols {source_cols:?} to ({dest_row}, {dest_col})");
    if source_cols.is_empty() {
        return;
    }
    for (offset, src_row) in source_rows.enumerate() {
        let from = &source.row(src_row)[source_cols.clone()];
        let to = &mut dest.row_mut(dest_row + offset)[dest_col..dest_col + from.len()];
        for (to, from) in to.iter_mut().zip(from) {
            to.set_color(*from);
        }
    }
}

/// Walk the overlap of `source` placed at (`dest_row`, `dest_col`) on
/// `dest`, calling `f(dest_pixel, source_pixel)`.
fn blit<F>(dest: &mut Picture, source: &Picture, dest_row: usize, dest_col: usize, mut f: F)
where
    F: FnMut(&mut Pixel, Pixel),
{
    let rows = source.height().min(dest.height().saturating_sub(dest_row));
    let cols = source.width().min(dest.width().saturating_sub(dest_col));
    if cols == 0 {
        return;
    }
    for row in 0..rows {
        let from = &source.row(row)[..cols];
        let to = &mut dest.row_mut(dest_row + row)[dest_col..dest_col + cols];
        for (to, from) in to.iter_mut().zip(from) {
            f(to, *from);
        }
    }
}
