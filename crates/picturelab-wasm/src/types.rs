//! WASM-compatible wrapper types.
//!
//! [`JsPicture`] owns a core `Picture`; [`JsRegion`] carries region bounds
//! across the boundary, either by constructor or as a plain
//! `{ startRow, startCol, endRow, endCol }` object.

use picturelab_core::{Picture, Pixel, Region};
use wasm_bindgen::prelude::*;

/// A picture held in WASM memory.
///
/// Sizes are row-first: `new JsPicture(height, width, rgba)`.
#[wasm_bindgen]
pub struct JsPicture {
    inner: Picture,
}

#[wasm_bindgen]
impl JsPicture {
    /// Create a picture from row-major RGBA bytes (4 per pixel).
    ///
    /// Fails if the byte count is not `height * width * 4`, or if that
    /// size does not fit in memory.
    #[wasm_bindgen(constructor)]
    pub fn new(height: u32, width: u32, rgba: &[u8]) -> Result<JsPicture, JsValue> {
        Picture::from_rgba_bytes(height as usize, width as usize, rgba)
            .map(|inner| JsPicture { inner })
            .ok_or_else(|| JsValue::from_str(&size_mismatch(height, width, rgba.len())))
    }

    /// Create a blank opaque white picture.
    pub fn blank(height: u32, width: u32) -> JsPicture {
        JsPicture {
            inner: Picture::new(height as usize, width as usize),
        }
    }

    /// Deep copy.
    #[wasm_bindgen(js_name = clone)]
    pub fn duplicate(&self) -> JsPicture {
        JsPicture {
            inner: self.inner.clone(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height() as u32
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.to_rgba_bytes()
    }

    /// RGBA of a single cell as a 4-element array.
    pub fn pixel(&self, row: u32, col: u32) -> Vec<u8> {
        let p = self.inner[(row as usize, col as usize)];
        vec![p.red, p.green, p.blue, p.alpha]
    }

    /// Overwrite a single cell, alpha included.
    pub fn set_pixel(&mut self, row: u32, col: u32, red: u8, green: u8, blue: u8, alpha: u8) {
        self.inner[(row as usize, col as usize)] = Pixel::new(red, green, blue, alpha);
    }

    /// `Picture, filename <name> height <h> width <w>`
    #[wasm_bindgen(js_name = toString)]
    pub fn describe(&self) -> String {
        self.inner.to_string()
    }
}

impl JsPicture {
    pub(crate) fn from_picture(inner: Picture) -> Self {
        Self { inner }
    }

    pub(crate) fn picture(&self) -> &Picture {
        &self.inner
    }

    pub(crate) fn picture_mut(&mut self) -> &mut Picture {
        &mut self.inner
    }
}

/// Region bounds wrapper for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsRegion {
    inner: Region,
}

#[wasm_bindgen]
impl JsRegion {
    #[wasm_bindgen(constructor)]
    pub fn new(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> JsRegion {
        JsRegion {
            inner: Region::new(
                start_row as usize,
                start_col as usize,
                end_row as usize,
                end_col as usize,
            ),
        }
    }

    /// The region covering a whole picture.
    pub fn whole(picture: &JsPicture) -> JsRegion {
        JsRegion {
            inner: picture.inner.bounds(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width() as u32
    }

    /// Serialize to a plain JavaScript object
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a plain JavaScript object
    pub fn from_json(value: JsValue) -> Result<JsRegion, JsValue> {
        let inner: Region = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid region: {}", e)))?;
        Ok(JsRegion { inner })
    }
}

impl JsRegion {
    pub(crate) fn region(&self) -> Region {
        self.inner
    }
}

fn size_mismatch(height: u32, width: u32, got: usize) -> String {
    match Picture::rgba_len(height as usize, width as usize) {
        Some(expected) => {
            format!("Invalid pixel data: expected {expected} bytes, got {got}")
        }
        None => format!("Invalid picture size: {height}x{width} is too large"),
    }
}


/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde::Serialize;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct TestRegion {
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
    }

    #[wasm_bindgen_test]
    fn test_new_picture_from_bytes() {
        let pic = JsPicture::new(1, 2, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(pic.pixel(0, 1), vec![5, 6, 7, 8]);
    }

    #[wasm_bindgen_test]
    fn test_new_picture_wrong_length() {
        assert!(JsPicture::new(2, 2, &[0u8; 3]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_new_picture_overflowing_size() {
        let err = JsPicture::new(65536, 16384, &[]).err().unwrap();
        assert!(err.as_string().unwrap().contains("too large"));
    }

    #[wasm_bindgen_test]
    fn test_region_from_json() {
        let value = serde_wasm_bindgen::to_value(&TestRegion {
            start_row: 1,
            start_col: 2,
            end_row: 3,
            end_col: 4,
        })
        .unwrap();
        let region = JsRegion::from_json(value).unwrap();
        assert_eq!(region.region(), Region::new(1, 2, 3, 4));
    }

    #[wasm_bindgen_test]
    fn test_region_json_round_trip() {
        let region = JsRegion::new(0, 5, 10, 15);
        let back = JsRegion::from_json(region.to_json().unwrap()).unwrap();
        assert_eq!(back.region(), region.region());
    }

    #[wasm_bindgen_test]
    fn test_region_from_invalid_json() {
        let value = serde_wasm_bindgen::to_value(&"not a region").unwrap();
        assert!(JsRegion::from_json(value).is_err());
    }
}
