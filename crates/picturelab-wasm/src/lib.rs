//! PictureLab WASM - WebAssembly bindings for PictureLab
//!
//! This crate exposes the picturelab-core filters to JavaScript/TypeScript.
//! Pictures live in WASM memory as [`JsPicture`] and every transform
//! mutates them in place; pixels are only copied out on request.
//!
//! # Module Structure
//!
//! - `types` - `JsPicture` and `JsRegion` wrappers
//! - `filters` - color filters
//! - `mirror` - mirror operations
//! - `compose` - copy, blend and crop-copy
//! - `codec` - PNG/JPEG decode and encode
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_picture, negate, JsRegion, encode_png } from '@picturelab/wasm';
//!
//! await init();
//!
//! const picture = decode_picture(new Uint8Array(await file.arrayBuffer()));
//! negate(picture, new JsRegion(0, 0, picture.height / 2, picture.width));
//! const png = encode_png(picture);
//! ```
//!
//! Out-of-range regions and mirror points trap, as they panic in the core.

use wasm_bindgen::prelude::*;

mod codec;
mod compose;
mod filters;
mod mirror;
mod types;

pub use codec::{decode_picture, encode_jpeg, encode_png};
pub use compose::{copy, copy_and_mix_colors, crop_and_copy};
pub use filters::{
    edge_detection, fix_underwater, grayscale, keep_only_blue, keep_only_green, keep_only_red,
    negate, posterize, sepia, set_background, set_transparency, zero_blue,
};
pub use mirror::{
    mirror_arms, mirror_diagonal, mirror_horizontal_over_point, mirror_temple, mirror_vertical,
    mirror_vertical_over_point, mirror_vertical_right_to_left,
};
pub use types::{JsPicture, JsRegion};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
