//! WASM bindings for mirror operations.
//!
//! Mirror points that reflect outside the picture trap.

use crate::types::JsPicture;
use picturelab_core::mirror;
use wasm_bindgen::prelude::*;

/// Copy the left half onto the right half.
#[wasm_bindgen]
pub fn mirror_vertical(picture: &mut JsPicture) {
    mirror::mirror_vertical(picture.picture_mut());
}

/// Copy the right half onto the left half.
#[wasm_bindgen]
pub fn mirror_vertical_right_to_left(picture: &mut JsPicture) {
    mirror::mirror_vertical_right_to_left(picture.picture_mut());
}

/// Reflect rows above `mirror_line` downward (row r -> 2 * line - r - 1).
#[wasm_bindgen]
pub fn mirror_horizontal_over_point(picture: &mut JsPicture, mirror_line: u32) {
    mirror::mirror_horizontal_over_point(picture.picture_mut(), mirror_line as usize);
}

/// Reflect columns left of `mirror_point` rightward (col c -> 2 * point - c).
#[wasm_bindgen]
pub fn mirror_vertical_over_point(picture: &mut JsPicture, mirror_point: u32) {
    mirror::mirror_vertical_over_point(picture.picture_mut(), mirror_point as usize);
}

/// Fixed reflection for the snowman picture.
#[wasm_bindgen]
pub fn mirror_arms(picture: &mut JsPicture) {
    mirror::mirror_arms(picture.picture_mut());
}

/// Fixed reflection for the temple picture.
#[wasm_bindgen]
pub fn mirror_temple(picture: &mut JsPicture) {
    mirror::mirror_temple(picture.picture_mut());
}

/// Reflect the lower triangle of the top-left square onto the upper one.
#[wasm_bindgen]
pub fn mirror_diagonal(picture: &mut JsPicture) {
    mirror::mirror_diagonal(picture.picture_mut());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_picture() -> JsPicture {
        let mut pic = JsPicture::blank(1, 8);
        for col in 0..8u8 {
            pic.set_pixel(0, col as u32, col, col, col, 255);
        }
        pic
    }

    #[test]
    fn test_mirror_vertical() {
        let mut pic = row_picture();
        mirror_vertical(&mut pic);
        assert_eq!(pic.pixel(0, 7), vec![0, 0, 0, 255]);
        assert_eq!(pic.pixel(0, 4), vec![3, 3, 3, 255]);
    }

    #[test]
    fn test_mirror_vertical_right_to_left() {
        let mut pic = row_picture();
        mirror_vertical_right_to_left(&mut pic);
        assert_eq!(pic.pixel(0, 0), vec![7, 7, 7, 255]);
        assert_eq!(pic.pixel(0, 7), vec![7, 7, 7, 255]);
    }

    #[test]
    fn test_mirror_vertical_over_point() {
        let mut pic = row_picture();
        mirror_vertical_over_point(&mut pic, 3);
        assert_eq!(pic.pixel(0, 6), vec![0, 0, 0, 255]);
        assert_eq!(pic.pixel(0, 3), vec![3, 3, 3, 255]);
    }

    #[test]
    fn test_mirror_horizontal_over_point() {
        let mut pic = JsPicture::blank(4, 1);
        pic.set_pixel(0, 0, 1, 1, 1, 255);
        mirror_horizontal_over_point(&mut pic, 2);
        assert_eq!(pic.pixel(3, 0), vec![1, 1, 1, 255]);
    }

    #[test]
    fn test_mirror_diagonal() {
        let mut pic = JsPicture::blank(2, 2);
        pic.set_pixel(1, 0, 9, 9, 9, 255);
        mirror_diagonal(&mut pic);
        assert_eq!(pic.pixel(0, 1), vec![9, 9, 9, 255]);
    }

    #[test]
    fn test_mirror_arms_and_temple() {
        let mut snowman = JsPicture::blank(253, 298);
        snowman.set_pixel(162, 96, 1, 2, 3, 255);
        mirror_arms(&mut snowman);
        assert_eq!(snowman.pixel(252, 96), vec![1, 2, 3, 255]);

        let mut temple = JsPicture::blank(97, 540);
        temple.set_pixel(27, 13, 4, 5, 6, 255);
        mirror_temple(&mut temple);
        assert_eq!(temple.pixel(27, 539), vec![4, 5, 6, 255]);
    }
}
