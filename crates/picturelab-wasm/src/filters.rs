//! WASM bindings for color filters.
//!
//! Every function mutates the picture in place.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! sepia(picture, new JsRegion(0, 0, 100, 100));
//! posterize(picture, JsRegion.whole(picture), 4);
//! edge_detection(picture, 10);
//! ```

use crate::types::{JsPicture, JsRegion};
use picturelab_core::filters;
use wasm_bindgen::prelude::*;

/// Set blue to 0 on every pixel.
#[wasm_bindgen]
pub fn zero_blue(picture: &mut JsPicture) {
    filters::zero_blue(picture.picture_mut());
}

/// Zero red and green inside the region.
#[wasm_bindgen]
pub fn keep_only_blue(picture: &mut JsPicture, region: &JsRegion) {
    filters::keep_only_blue(picture.picture_mut(), region.region());
}

/// Zero green and blue inside the region.
#[wasm_bindgen]
pub fn keep_only_red(picture: &mut JsPicture, region: &JsRegion) {
    filters::keep_only_red(picture.picture_mut(), region.region());
}

/// Zero red and blue inside the region.
#[wasm_bindgen]
pub fn keep_only_green(picture: &mut JsPicture, region: &JsRegion) {
    filters::keep_only_green(picture.picture_mut(), region.region());
}

/// Invert each color channel inside the region.
#[wasm_bindgen]
pub fn negate(picture: &mut JsPicture, region: &JsRegion) {
    filters::negate(picture.picture_mut(), region.region());
}

/// Gray each pixel to its channel mean inside the region.
#[wasm_bindgen]
pub fn grayscale(picture: &mut JsPicture, region: &JsRegion) {
    filters::grayscale(picture.picture_mut(), region.region());
}

/// Snap channels inside the region to the midpoints of `num_bins` bins.
///
/// Fails if `num_bins` is 0.
#[wasm_bindgen]
pub fn posterize(picture: &mut JsPicture, region: &JsRegion, num_bins: u32) -> Result<(), JsValue> {
    if num_bins == 0 {
        return Err(JsValue::from_str("posterize needs at least one bin"));
    }
    filters::posterize(picture.picture_mut(), region.region(), num_bins);
    Ok(())
}

/// Sepia-tone the region.
#[wasm_bindgen]
pub fn sepia(picture: &mut JsPicture, region: &JsRegion) {
    filters::sepia(picture.picture_mut(), region.region());
}

/// Triple red everywhere, saturating at 255.
#[wasm_bindgen]
pub fn fix_underwater(picture: &mut JsPicture) {
    filters::fix_underwater(picture.picture_mut());
}

/// Set alpha everywhere.
#[wasm_bindgen]
pub fn set_transparency(picture: &mut JsPicture, alpha: u8) {
    filters::set_transparency(picture.picture_mut(), alpha);
}

/// Replace near-black pixels with the given color.
#[wasm_bindgen]
pub fn set_background(picture: &mut JsPicture, red: u8, green: u8, blue: u8) {
    filters::set_background(picture.picture_mut(), red, green, blue);
}

/// Black where a pixel differs from its right neighbour by more than
/// `threshold`, white elsewhere; the last column is kept.
#[wasm_bindgen]
pub fn edge_detection(picture: &mut JsPicture, threshold: f64) {
    filters::edge_detection(picture.picture_mut(), threshold);
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_posterize() {
        let mut pic = JsPicture::blank(1, 1);
        pic.set_pixel(0, 0, 43, 85, 100, 255);
        posterize(&mut pic, &JsRegion::whole(&pic), 3).unwrap();
        assert_eq!(pic.pixel(0, 0), vec![42, 85, 127, 255]);
    }

    #[wasm_bindgen_test]
    fn test_posterize_zero_bins() {
        let mut pic = JsPicture::blank(1, 1);
        let region = JsRegion::whole(&pic);
        assert!(posterize(&mut pic, &region, 0).is_err());
    }
}
