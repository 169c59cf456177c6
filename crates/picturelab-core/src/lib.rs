//! PictureLab Core - pixel-level picture filters
//!
//! This crate provides an owned RGBA pixel grid ([`Picture`]) and a catalog
//! of in-place transforms over it: color filters, mirrors, and composites
//! that paste one picture into another. On top of those sit the collage
//! scripts, fixed sequences of transforms that assemble a final picture.
//!
//! # Module Structure
//!
//! - `filters` - color filters (negate, sepia, posterize, edge detection, ...)
//! - `mirror` - reflections across the center or a given row/column
//! - `compose` - copy, blend and crop-copy between two pictures
//! - `collage` - the penguin and flower collage scripts
//! - `io` - PNG/JPEG load and save
//! - `config` - file locations for the `collage` binary
//!
//! # Coordinates
//!
//! - Cells are addressed `(row, col)` with the origin at the top-left
//! - Sizes are given row-first: `(height, width)`
//! - Regions are half-open: `[start_row, end_row) x [start_col, end_col)`
//! - Out-of-range access panics; nothing is silently clipped except where
//!   an operation says so
//!
//! # Channel arithmetic
//!
//! Channels are `u8`. Any intermediate value outside [0, 255] is saturated,
//! never wrapped.

pub mod collage;
pub mod compose;
pub mod config;
pub mod filters;
pub mod io;
pub mod mirror;
mod picture;
mod pixel;
pub mod region;

pub use collage::{compose_collage, compose_flower_collage, CollageSources};
pub use config::{CollageConfig, ConfigError};
pub use io::{decode_picture, encode_picture, load_picture, save_picture, PictureError};
pub use picture::Picture;
pub use pixel::Pixel;
pub use region::Region;
