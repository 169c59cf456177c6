//! WASM bindings for decoding and encoding pictures.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const picture = decode_picture(bytes);
//! const png = encode_png(picture);
//! const jpeg = encode_jpeg(picture); // alpha is dropped
//! ```

use crate::types::JsPicture;
use picturelab_core::io::{self, ImageFormat};
use picturelab_core::PictureError;
use wasm_bindgen::prelude::*;

/// Decode PNG or JPEG bytes into a picture.
#[wasm_bindgen]
pub fn decode_picture(bytes: &[u8]) -> Result<JsPicture, JsValue> {
    io::decode_picture(bytes)
        .map(JsPicture::from_picture)
        .map_err(to_js_error)
}

/// Encode a picture as PNG, keeping alpha.
#[wasm_bindgen]
pub fn encode_png(picture: &JsPicture) -> Result<Vec<u8>, JsValue> {
    io::encode_picture(picture.picture(), ImageFormat::Png).map_err(to_js_error)
}

/// Encode a picture as JPEG, dropping alpha.
#[wasm_bindgen]
pub fn encode_jpeg(picture: &JsPicture) -> Result<Vec<u8>, JsValue> {
    io::encode_picture(picture.picture(), ImageFormat::Jpeg).map_err(to_js_error)
}

fn to_js_error(err: PictureError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_then_decode_through_core() {
        let mut pic = JsPicture::blank(2, 3);
        pic.set_pixel(1, 2, 9, 8, 7, 6);

        let png = io::encode_picture(pic.picture(), ImageFormat::Png).unwrap();
        let back = JsPicture::from_picture(io::decode_picture(&png).unwrap());
        assert_eq!(back.pixel(1, 2), vec![9, 8, 7, 6]);
        assert_eq!(back.pixels(), pic.pixels());
    }
}
