//! WASM bindings for composite operations.

use crate::types::JsPicture;
use picturelab_core::compose;
use wasm_bindgen::prelude::*;

/// Paste `source` into `dest` at (`dest_row`, `dest_col`), clipped to both.
#[wasm_bindgen]
pub fn copy(dest: &mut JsPicture, source: &JsPicture, dest_row: u32, dest_col: u32) {
    compose::copy(
        dest.picture_mut(),
        source.picture(),
        dest_row as usize,
        dest_col as usize,
    );
}

/// Like `copy`, averaging each channel with the destination.
#[wasm_bindgen]
pub fn copy_and_mix_colors(dest: &mut JsPicture, source: &JsPicture, dest_row: u32, dest_col: u32) {
    compose::copy_and_mix_colors(
        dest.picture_mut(),
        source.picture(),
        dest_row as usize,
        dest_col as usize,
    );
}

/// Copy rows `[start_row, end_row)` and columns `[start_col, end_col)` of
/// `source` into `dest` at (`dest_row`, `dest_col`). Traps if the crop does
/// not fit.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn crop_and_copy(
    dest: &mut JsPicture,
    source: &JsPicture,
    start_row: u32,
    end_row: u32,
    start_col: u32,
    end_col: u32,
    dest_row: u32,
    dest_col: u32,
) {
    compose::crop_and_copy(
        dest.picture_mut(),
        source.picture(),
        start_row as usize..end_row as usize,
        start_col as usize..end_col as usize,
        dest_row as usize,
        dest_col as usize,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> JsPicture {
        let mut pic = JsPicture::blank(2, 2);
        pic.set_pixel(0, 0, 0, 0, 0, 255);
        pic.set_pixel(1, 1, 100, 100, 100, 255);
        pic
    }

    #[test]
    fn test_copy() {
        let mut dest = JsPicture::blank(3, 3);
        copy(&mut dest, &source(), 1, 1);
        assert_eq!(dest.pixel(1, 1), vec![0, 0, 0, 255]);
        assert_eq!(dest.pixel(2, 2), vec![100, 100, 100, 255]);
        assert_eq!(dest.pixel(0, 0), vec![255, 255, 255, 255]);
    }

    #[test]
    fn test_copy_and_mix_colors() {
        let mut dest = JsPicture::blank(2, 2);
        copy_and_mix_colors(&mut dest, &source(), 0, 0);
        assert_eq!(dest.pixel(0, 0), vec![127, 127, 127, 255]);
        assert_eq!(dest.pixel(1, 1), vec![177, 177, 177, 255]);
    }

    #[test]
    fn test_crop_and_copy() {
        let mut dest = JsPicture::blank(3, 3);
        crop_and_copy(&mut dest, &source(), 1, 2, 1, 2, 0, 2);
        assert_eq!(dest.pixel(0, 2), vec![100, 100, 100, 255]);
        assert_eq!(dest.pixel(0, 1), vec![255, 255, 255, 255]);
    }
}
